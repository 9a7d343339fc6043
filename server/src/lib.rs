use axum::extract::{DefaultBodyLimit, Multipart};
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use ranker::{rank, Document, DocumentScore};
use serde::Serialize;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

#[derive(Serialize)]
pub struct RankResponse {
    pub took_s: f64,
    pub total: usize,
    pub results: Vec<DocumentScore>,
    /// Per-document extraction failures; the affected resumes are still
    /// ranked (with empty text, scoring 0.0).
    pub warnings: Vec<String>,
}

pub fn build_app(max_upload_bytes: usize) -> Router {
    // CORS: read CORS_ALLOW_ORIGIN (comma-separated) or allow Any by default
    let cors = match std::env::var("CORS_ALLOW_ORIGIN") {
        Ok(val) => {
            let origins: Vec<_> = val
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();
            if origins.is_empty() {
                CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
            } else {
                CorsLayer::new()
                    .allow_origin(AllowOrigin::list(origins))
                    .allow_methods(Any)
                    .allow_headers(Any)
            }
        }
        Err(_) => CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any),
    };

    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(|| async { "ok" }))
        .route("/rank", post(rank_handler))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(cors)
}

async fn index_handler() -> Html<&'static str> {
    Html(include_str!("../assets/index.html"))
}

pub async fn rank_handler(
    mut multipart: Multipart,
) -> Result<Json<RankResponse>, (StatusCode, String)> {
    let start = std::time::Instant::now();

    let mut job_description = String::new();
    let mut resumes: Vec<Document> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| (StatusCode::BAD_REQUEST, format!("malformed multipart body: {e}")))?
    {
        let field_name = field.name().map(str::to_string);
        match field_name.as_deref() {
            Some("job_description") => {
                job_description = field
                    .text()
                    .await
                    .map_err(|e| (StatusCode::BAD_REQUEST, format!("unreadable job description: {e}")))?;
            }
            Some("resume") => {
                let name = field
                    .file_name()
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("resume-{}", resumes.len() + 1));
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| (StatusCode::BAD_REQUEST, format!("unreadable upload {name}: {e}")))?;
                match extract::extract_text(&name, &data) {
                    Ok(text) => resumes.push(Document::new(name, text)),
                    Err(e) => {
                        tracing::warn!(name = %name, error = %e, "text extraction failed");
                        warnings.push(format!("{name}: {e:#}"));
                        resumes.push(Document::new(name, String::new()));
                    }
                }
            }
            _ => {}
        }
    }

    if job_description.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "please enter the job description".into()));
    }
    if resumes.is_empty() {
        return Err((StatusCode::BAD_REQUEST, "please upload at least one resume".into()));
    }

    let reference = Document::new("job description", job_description);
    let results = rank(&reference, &resumes);

    let elapsed = start.elapsed();
    tracing::info!(
        total = results.len(),
        took_s = elapsed.as_secs_f64(),
        "ranked resumes"
    );
    Ok(Json(RankResponse {
        took_s: elapsed.as_secs_f64(),
        total: results.len(),
        results,
        warnings,
    }))
}

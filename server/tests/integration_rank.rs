use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

const BOUNDARY: &str = "zapboundary1234";
const MAX_UPLOAD: usize = 8 * 1024 * 1024;

fn text_part(name: &str, value: &str) -> String {
    format!(
        "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
    )
}

fn file_part(filename: &str, contents: &str) -> String {
    format!(
        "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"resume\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n{contents}\r\n"
    )
}

fn rank_request(parts: &str) -> Request<Body> {
    Request::post("/rank")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(format!("{parts}--{BOUNDARY}--\r\n")))
        .unwrap()
}

async fn body_json(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_is_ok() {
    let app = server::build_app(MAX_UPLOAD);
    let resp = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn index_page_serves_the_upload_form() {
    let app = server::build_app(MAX_UPLOAD);
    let resp = app
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("job_description") || html.contains("Job Description"));
}

#[tokio::test]
async fn rank_orders_resumes_by_similarity() {
    let app = server::build_app(MAX_UPLOAD);
    let parts = format!(
        "{}{}{}",
        text_part("job_description", "python developer with machine learning experience"),
        file_part("B.pdf", "sales and marketing professional"),
        file_part("A.pdf", "python developer machine learning"),
    );
    let resp = app.oneshot(rank_request(&parts)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp.into_body()).await;
    assert_eq!(json["total"], 2);
    let results = json["results"].as_array().unwrap();
    assert_eq!(results[0]["name"], "A.pdf");
    assert_eq!(results[1]["name"], "B.pdf");
    let top = results[0]["score"].as_f64().unwrap();
    let bottom = results[1]["score"].as_f64().unwrap();
    assert!(top > bottom);
    assert!(json["warnings"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn unreadable_resume_is_ranked_with_a_warning() {
    let app = server::build_app(MAX_UPLOAD);
    let parts = format!(
        "{}{}{}",
        text_part("job_description", "rust developer"),
        file_part("good.txt", "rust developer"),
        // Claims to be a PDF but the parser cannot read it.
        file_part("scan.pdf", "%PDF-1.4 not actually a pdf"),
    );
    let resp = app.oneshot(rank_request(&parts)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp.into_body()).await;
    assert_eq!(json["total"], 2);
    let results = json["results"].as_array().unwrap();
    assert_eq!(results[0]["name"], "good.txt");
    assert_eq!(results[1]["name"], "scan.pdf");
    assert_eq!(results[1]["score"].as_f64().unwrap(), 0.0);
    let warnings = json["warnings"].as_array().unwrap();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].as_str().unwrap().contains("scan.pdf"));
}

#[tokio::test]
async fn missing_job_description_is_rejected() {
    let app = server::build_app(MAX_UPLOAD);
    let parts = file_part("A.pdf", "python developer");
    let resp = app.oneshot(rank_request(&parts)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn missing_resumes_are_rejected() {
    let app = server::build_app(MAX_UPLOAD);
    let parts = text_part("job_description", "python developer");
    let resp = app.oneshot(rank_request(&parts)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

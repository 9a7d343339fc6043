use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use ranker::{rank, Document, DocumentScore};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, EnvFilter};
use walkdir::WalkDir;

#[derive(Parser)]
#[command(name = "resume-rank")]
#[command(about = "Rank resumes against a job description by TF-IDF similarity", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank resume files against a job description
    Rank {
        /// Job description file (.txt or .md)
        #[arg(long)]
        job: PathBuf,
        /// Resume file or directory of resumes (.pdf/.txt/.md)
        #[arg(long)]
        resumes: PathBuf,
        /// Append the ranking to a CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
        /// Width of the score bar chart in characters
        #[arg(long, default_value_t = 40)]
        bar_width: usize,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Rank { job, resumes, csv, bar_width } => {
            run_rank(&job, &resumes, csv.as_deref(), bar_width)
        }
    }
}

fn run_rank(job: &Path, resumes: &Path, csv_out: Option<&Path>, bar_width: usize) -> Result<()> {
    let jd_text = fs::read_to_string(job)
        .with_context(|| format!("failed to read job description {}", job.display()))?;
    if jd_text.trim().is_empty() {
        bail!("job description {} is empty", job.display());
    }

    let files = collect_resume_files(resumes)?;
    if files.is_empty() {
        bail!("no resume files (.pdf/.txt/.md) found under {}", resumes.display());
    }
    tracing::info!(num_resumes = files.len(), "extracting resume text");

    let mut candidates = Vec::with_capacity(files.len());
    for path in &files {
        let name = path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("<unnamed>")
            .to_string();
        match extract::extract_from_path(path) {
            Ok(text) => candidates.push(Document::new(name, text)),
            Err(e) => {
                tracing::warn!(name = %name, error = %e, "extraction failed, ranking with empty text");
                candidates.push(Document::new(name, String::new()));
            }
        }
    }

    let reference = Document::new("job description", jd_text);
    let ranking = rank(&reference, &candidates);

    print_ranking(&ranking, bar_width);

    if let Some(path) = csv_out {
        write_csv(path, &ranking)?;
        println!("\nWrote ranking to {}", path.display());
    }
    Ok(())
}

/// Collect rankable files: a single file as-is, or every .pdf/.txt/.md
/// under a directory, sorted by path for a deterministic input order.
fn collect_resume_files(input: &Path) -> Result<Vec<PathBuf>> {
    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }
    if !input.is_dir() {
        bail!("{} is neither a file nor a directory", input.display());
    }
    let mut files: Vec<PathBuf> = Vec::new();
    for entry in WalkDir::new(input).into_iter().filter_map(|e| e.ok()) {
        let p = entry.path();
        if p.is_file() {
            if let Some(ext) = p.extension().and_then(|s| s.to_str()) {
                if matches!(ext, "pdf" | "txt" | "md") {
                    files.push(p.to_path_buf());
                }
            }
        }
    }
    files.sort();
    Ok(files)
}

fn print_ranking(ranking: &[DocumentScore], bar_width: usize) {
    let name_width = ranking.iter().map(|e| e.name.len()).max().unwrap_or(6).max(6);
    println!("{:>4}  {:<name_width$}  {:>6}", "rank", "resume", "score");
    for (i, entry) in ranking.iter().enumerate() {
        let bar = score_bar(entry.score, bar_width);
        println!("{:>4}  {:<name_width$}  {:>6.4}  {bar}", i + 1, entry.name, entry.score);
    }
}

fn score_bar(score: f32, width: usize) -> String {
    let filled = (score * width as f32).round() as usize;
    "█".repeat(filled.min(width))
}

fn write_csv(path: &Path, ranking: &[DocumentScore]) -> Result<()> {
    let file_exists = path.exists();
    let file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(file);
    if !file_exists {
        wtr.write_record(["rank", "resume", "score"])?;
    }
    for (i, entry) in ranking.iter().enumerate() {
        wtr.write_record([
            (i + 1).to_string(),
            entry.name.clone(),
            format!("{:.6}", entry.score),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

//! Batch review: scores every resume in a folder against one job description
//! and writes one CSV row per resume.
//!
//! A resume that cannot be read or analyzed is logged and skipped; the run
//! carries on with the next file. A missing job description ends the run
//! without a report.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{error, info, warn};

use crate::document::read_document;
use crate::embedding::Embedder;
use crate::errors::AppError;
use crate::pipeline::{analyze, MatchAnalysis, MatchOptions};
use crate::skills::{SkillDictionary, SkillSet};

pub const DEFAULT_RESUME_DIR: &str = "samples/resumes";
pub const DEFAULT_JOB_FILE: &str = "samples/JDS/job_description1.txt";
pub const DEFAULT_REPORT_FILE: &str = "outputs/resume_review_results.csv";

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct BatchPaths {
    pub resume_dir: PathBuf,
    pub job_file: PathBuf,
    pub output: PathBuf,
}

/// One CSV row. Field order is column order.
#[derive(Debug, Clone, Serialize)]
pub struct ReportRow {
    #[serde(rename = "Resume File")]
    pub resume_file: String,
    #[serde(rename = "Resume Skills")]
    pub resume_skills: String,
    #[serde(rename = "Job Skills")]
    pub job_skills: String,
    #[serde(rename = "Exact Match")]
    pub exact_match: String,
    #[serde(rename = "Semantic Match")]
    pub semantic_match: String,
    #[serde(rename = "Skill Match Accuracy (%)")]
    pub skill_accuracy: f64,
    #[serde(rename = "Missing Skills")]
    pub missing_skills: String,
    #[serde(rename = "Readability Score")]
    pub readability: f64,
    #[serde(rename = "Final Resume-Job Fit (%)")]
    pub final_fit: f64,
    #[serde(rename = "Feedback")]
    pub feedback: String,
}

impl ReportRow {
    pub fn from_analysis(resume_file: &str, analysis: &MatchAnalysis) -> Self {
        Self {
            resume_file: resume_file.to_string(),
            resume_skills: join_skills(&analysis.resume_skills),
            job_skills: join_skills(&analysis.job_skills),
            exact_match: join_skills(&analysis.exact),
            semantic_match: join_skills(analysis.semantic.matched()),
            skill_accuracy: analysis.skill_accuracy,
            missing_skills: join_skills(&analysis.missing_exact()),
            readability: analysis.quality.readability_score(),
            final_fit: analysis.final_fit,
            feedback: analysis.feedback.join("; "),
        }
    }
}

/// What a batch run did.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchSummary {
    pub processed: usize,
    pub skipped: Vec<PathBuf>,
    /// `None` when no report was written (job description missing).
    pub report: Option<PathBuf>,
}

/// A console value: a single line of text or a comma-joined list.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportValue {
    Text(String),
    List(Vec<String>),
}

impl fmt::Display for ReportValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportValue::Text(text) => f.write_str(text),
            ReportValue::List(items) => f.write_str(&items.join(", ")),
        }
    }
}

impl From<&SkillSet> for ReportValue {
    fn from(skills: &SkillSet) -> Self {
        ReportValue::List(skills.iter().cloned().collect())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Batch run
// ────────────────────────────────────────────────────────────────────────────

pub fn run_batch(
    paths: &BatchPaths,
    dictionary: &SkillDictionary,
    embedder: &dyn Embedder,
    options: &MatchOptions,
) -> Result<BatchSummary, AppError> {
    let job = match read_document(&paths.job_file) {
        Ok(doc) => doc,
        Err(AppError::FileNotFound(path)) => {
            error!("Job description file not found: {}", path.display());
            return Ok(BatchSummary::default());
        }
        Err(e) => return Err(e),
    };

    if let Some(parent) = paths.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let mut writer = csv::Writer::from_path(&paths.output)?;

    let mut summary = BatchSummary::default();
    for resume_path in list_resumes(&paths.resume_dir)? {
        info!("Processing: {}", resume_path.display());

        let analysis = read_document(&resume_path)
            .and_then(|doc| analyze(&doc.text, &job.text, dictionary, embedder, options));
        let analysis = match analysis {
            Ok(analysis) => analysis,
            Err(AppError::FileNotFound(path)) => {
                warn!("Resume file not found: {}", path.display());
                summary.skipped.push(resume_path);
                continue;
            }
            Err(e) => {
                warn!("Skipping {}: {e}", resume_path.display());
                summary.skipped.push(resume_path);
                continue;
            }
        };

        let file_name = resume_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        print_analysis(&file_name, &analysis);

        writer.serialize(ReportRow::from_analysis(&file_name, &analysis))?;
        summary.processed += 1;
    }

    writer.flush()?;
    info!(
        "Results saved to {} ({} processed, {} skipped)",
        paths.output.display(),
        summary.processed,
        summary.skipped.len()
    );
    summary.report = Some(paths.output.clone());
    Ok(summary)
}

/// Regular files in `dir`, sorted by name.
fn list_resumes(dir: &Path) -> Result<Vec<PathBuf>, AppError> {
    let entries = std::fs::read_dir(dir).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => AppError::FileNotFound(dir.to_path_buf()),
        _ => AppError::Io(e),
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn join_skills(skills: &SkillSet) -> String {
    skills.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
}

fn print_column(title: &str, value: ReportValue) {
    println!("{title:<25}: {value}");
}

fn print_analysis(file_name: &str, analysis: &MatchAnalysis) {
    println!("\n=== {file_name} ===\n");
    print_column("Resume Skills", (&analysis.resume_skills).into());
    print_column("Job Skills", (&analysis.job_skills).into());
    print_column("Exact Match", (&analysis.exact).into());
    print_column("Semantic Match", analysis.semantic.matched().into());
    print_column(
        "Skill Match Accuracy (%)",
        ReportValue::Text(analysis.skill_accuracy.to_string()),
    );
    print_column("Missing Skills", (&analysis.missing_exact()).into());
    print_column(
        "Resume Scores",
        ReportValue::List(vec![
            format!("readability_score: {}", analysis.quality.readability_score()),
            format!("keywords_count: {}", analysis.quality.keywords_count),
            format!("extra_spaces: {}", analysis.quality.formatting.extra_spaces),
            format!("bullet_points: {}", analysis.quality.formatting.bullet_points),
        ]),
    );
    print_column("Feedback", ReportValue::List(analysis.feedback.clone()));
    print_column(
        "Final Resume-Job Fit (%)",
        ReportValue::Text(analysis.final_fit.to_string()),
    );
}

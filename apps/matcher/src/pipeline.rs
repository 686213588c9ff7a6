//! Match pipeline: one resume against one job description.
//!
//! Flow: clean/normalize → extract skills + education (both texts) →
//!       exact + semantic match → education comparison → resume quality →
//!       scores → suggestions and feedback.
//!
//! Shared by the web form and the batch CLI, so both modes use the same
//! dictionary, extraction path and thresholds.

use serde::Serialize;
use tracing::{debug, info};

use crate::document::{clean_text, detect_sections, normalize_text, Section};
use crate::embedding::Embedder;
use crate::errors::AppError;
use crate::matching::{exact_match, semantic_match, MatchResult, DEFAULT_SIMILARITY_THRESHOLD};
use crate::scoring::{
    build_score_report, fit_score, generate_feedback, score_resume, skill_score, ResumeQuality,
    ScoreReport, ScoringWeights,
};
use crate::skills::{
    compare_education, extract_education, extract_skills, EducationComparison, EducationProfile,
    SkillDictionary, SkillSet,
};

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Tunables passed explicitly into every analysis.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MatchOptions {
    pub similarity_threshold: f32,
    pub weights: ScoringWeights,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            weights: ScoringWeights::default(),
        }
    }
}

/// Everything computed for one resume/job pair.
#[derive(Debug, Clone, Serialize)]
pub struct MatchAnalysis {
    pub resume_skills: SkillSet,
    pub job_skills: SkillSet,
    pub exact: SkillSet,
    pub semantic: MatchResult,
    pub resume_education: EducationProfile,
    pub job_education: EducationProfile,
    pub education: EducationComparison,
    /// Exact-match share of job skills, 0–100.
    pub skill_accuracy: f64,
    /// Semantic skill score and the suggestions derived from it.
    pub report: ScoreReport,
    pub quality: ResumeQuality,
    /// Skill accuracy blended with readability.
    pub final_fit: f64,
    pub feedback: Vec<String>,
    pub sections: Vec<Section>,
}

impl MatchAnalysis {
    /// Job skills the resume lacks by exact comparison.
    pub fn missing_exact(&self) -> SkillSet {
        self.job_skills.difference(&self.exact).cloned().collect()
    }

    pub fn education_met(&self) -> bool {
        self.education.is_met()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Runs the full analysis. Blocking: embeds skills with `embedder`.
pub fn analyze(
    resume_text: &str,
    job_text: &str,
    dictionary: &SkillDictionary,
    embedder: &dyn Embedder,
    options: &MatchOptions,
) -> Result<MatchAnalysis, AppError> {
    let resume_clean = clean_text(resume_text);
    let resume_norm = normalize_text(&resume_clean);
    let job_norm = normalize_text(job_text);

    let resume_skills = extract_skills(&resume_norm, dictionary);
    let job_skills = extract_skills(&job_norm, dictionary);
    debug!(
        resume = resume_skills.len(),
        job = job_skills.len(),
        "Skills extracted"
    );

    let exact = exact_match(&resume_skills, &job_skills);
    let semantic = semantic_match(
        &resume_skills,
        &job_skills,
        options.similarity_threshold,
        embedder,
    )?;

    let resume_education = extract_education(&resume_norm);
    let job_education = extract_education(&job_norm);
    let education = compare_education(&resume_education, &job_education);

    let skill_accuracy = skill_score(exact.len(), job_skills.len());
    let semantic_score = skill_score(semantic.matched().len(), job_skills.len());

    // Quality checks see the text as submitted; cleaning would erase spacing issues.
    let keywords: Vec<&str> = job_skills.iter().map(String::as_str).collect();
    let quality = score_resume(resume_text, &keywords);
    let final_fit = fit_score(skill_accuracy, quality.readability_score(), &options.weights);

    let report = build_score_report(
        semantic_score,
        &education,
        job_education.is_present(),
        semantic.missing(),
        &quality,
    );
    let feedback = generate_feedback(&quality);
    let sections = detect_sections(&resume_clean).into_keys().collect();

    info!(
        "Match complete: skills {semantic_score}% (exact {skill_accuracy}%), fit {final_fit}%"
    );

    Ok(MatchAnalysis {
        resume_skills,
        job_skills,
        exact,
        semantic,
        resume_education,
        job_education,
        education,
        skill_accuracy,
        report,
        quality,
        final_fit,
        feedback,
        sections,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedding::testing::{BigramEmbedder, FailingEmbedder};

    const RESUME: &str = "Experienced Python developer with AWS and Docker skills, B.Tech Computer Science";
    const JOB: &str = "Looking for Python, Kubernetes, and Azure experience, bachelor's in computer science required";

    fn set(items: &[&str]) -> SkillSet {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn run(resume: &str, job: &str) -> MatchAnalysis {
        analyze(
            resume,
            job,
            &SkillDictionary::builtin(),
            &BigramEmbedder::default(),
            &MatchOptions::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_end_to_end_scenario() {
        let analysis = run(RESUME, JOB);

        assert_eq!(analysis.resume_skills, set(&["python", "aws", "docker"]));
        assert_eq!(analysis.job_skills, set(&["python", "kubernetes", "azure"]));
        assert_eq!(analysis.exact, set(&["python"]));
        assert_eq!(analysis.missing_exact(), set(&["kubernetes", "azure"]));
        assert!(analysis.resume_education.bachelor);
        assert!(analysis.job_education.bachelor);
        assert!(analysis.education_met());
        assert_eq!(analysis.skill_accuracy, 33.33);
        assert_eq!(analysis.report.score, 33.33);
        assert_eq!(analysis.semantic.missing(), &set(&["kubernetes", "azure"]));
    }

    #[test]
    fn test_end_to_end_suggestions() {
        let analysis = run(RESUME, JOB);
        let suggestions = &analysis.report.suggestions;

        assert!(suggestions[0].contains("missing many required skills"));
        assert!(!suggestions.iter().any(|s| s.contains("education")));
        assert!(suggestions.iter().any(|s| s.contains("azure")));
        assert!(suggestions.iter().any(|s| s.contains("kubernetes")));
    }

    #[test]
    fn test_final_fit_blends_accuracy_and_readability() {
        let analysis = run(RESUME, JOB);
        let readability = analysis.quality.readability_score().clamp(0.0, 100.0);
        let expected = ((0.7 * 33.33 + 0.3 * readability) * 100.0).round() / 100.0;
        assert!((analysis.final_fit - expected).abs() < 1e-9);
    }

    #[test]
    fn test_identical_texts_score_full_marks() {
        let text = "Rust, Go and PostgreSQL on Linux";
        let analysis = run(text, text);
        assert_eq!(analysis.skill_accuracy, 100.0);
        assert_eq!(analysis.report.score, 100.0);
        assert!(analysis.semantic.missing().is_empty());
    }

    #[test]
    fn test_job_without_skills_scores_zero() {
        let analysis = run(RESUME, "Friendly team, great snacks");
        assert!(analysis.job_skills.is_empty());
        assert_eq!(analysis.report.score, 0.0);
        assert_eq!(analysis.semantic.total(), 0);
    }

    #[test]
    fn test_unmet_education_adds_suggestion() {
        let analysis = run(RESUME, "PhD in electrical engineering, Python");
        assert!(!analysis.education_met());
        assert!(analysis
            .report
            .suggestions
            .iter()
            .any(|s| s.contains("education does not fully match")));
    }

    #[test]
    fn test_sections_detected_from_resume_layout() {
        let resume = "Summary\nBackend engineer\nSkills\nPython, Docker\nEducation\nB.Tech";
        let analysis = run(resume, JOB);
        assert_eq!(
            analysis.sections,
            vec![Section::Education, Section::Skills, Section::Summary]
        );
    }

    #[test]
    fn test_extra_spaces_in_raw_resume_are_reported() {
        let resume = "- Python  developer with   AWS\n- Docker";
        let analysis = run(resume, JOB);

        assert_eq!(analysis.quality.formatting.extra_spaces, 2);
        assert_eq!(analysis.quality.formatting.bullet_points, 2);
        assert!(analysis
            .report
            .suggestions
            .iter()
            .any(|s| s == crate::scoring::suggestions::EXTRA_SPACES));
        assert!(analysis
            .feedback
            .iter()
            .any(|s| s == crate::scoring::suggestions::EXTRA_SPACES));
    }

    #[test]
    fn test_embedding_failure_is_an_error() {
        let result = analyze(
            RESUME,
            JOB,
            &SkillDictionary::builtin(),
            &FailingEmbedder,
            &MatchOptions::default(),
        );
        assert!(matches!(result, Err(AppError::Embedding(_))));
    }
}

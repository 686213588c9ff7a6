//! Suggestion and feedback text: fixed decision tables, no randomness.

use crate::scoring::quality::ResumeQuality;
use crate::scoring::score::ScoreReport;
use crate::skills::{EducationComparison, SkillSet};

pub const LOW_MATCH: &str =
    "Your resume is missing many required skills. Consider adding relevant projects or certifications.";
pub const MODERATE_MATCH: &str =
    "Good match! But you can improve by highlighting missing skills in projects or summary.";
pub const STRONG_MATCH: &str =
    "Excellent match! Your resume is highly aligned with the job description.";

pub const HARD_TO_READ: &str = "Resume could be easier to read. Consider simplifying sentences.";
pub const MISSING_KEYWORDS: &str =
    "Resume is missing important keywords from the job description.";
pub const EXTRA_SPACES: &str = "Resume has extra spaces that could be cleaned up.";
pub const NO_BULLETS: &str = "Consider using bullet points for clarity.";
pub const LOOKS_GOOD: &str = "Resume looks good!";

/// Band message for a skill score: `<50`, `50–80`, `≥80`.
pub fn score_band_message(score: f64) -> &'static str {
    if score < 50.0 {
        LOW_MATCH
    } else if score < 80.0 {
        MODERATE_MATCH
    } else {
        STRONG_MATCH
    }
}

/// Builds the score report shown on the result page.
///
/// Order: band message, education gap (only when the job states requirements),
/// one line per missing skill, one line per formatting issue.
pub fn build_score_report(
    score: f64,
    education: &EducationComparison,
    job_states_education: bool,
    missing_skills: &SkillSet,
    quality: &ResumeQuality,
) -> ScoreReport {
    let mut suggestions = vec![score_band_message(score).to_string()];

    if job_states_education && !education.is_met() {
        suggestions.push(format!(
            "Your education does not fully match the requirements mentioned in the JD (expected: {}).",
            education.missing.join(", ")
        ));
    }

    for skill in missing_skills {
        suggestions.push(format!(
            "Consider learning or highlighting {skill} in your projects or summary."
        ));
    }

    if quality.formatting.extra_spaces > 0 {
        suggestions.push(EXTRA_SPACES.to_string());
    }
    if quality.formatting.bullet_points == 0 {
        suggestions.push(NO_BULLETS.to_string());
    }

    ScoreReport { score, suggestions }
}

/// Resume-quality feedback table; falls back to `LOOKS_GOOD` when nothing fires.
pub fn generate_feedback(quality: &ResumeQuality) -> Vec<String> {
    let mut feedback = Vec::new();

    if quality.readability_score() < 60.0 {
        feedback.push(HARD_TO_READ.to_string());
    }
    if quality.keywords_count == 0 {
        feedback.push(MISSING_KEYWORDS.to_string());
    }
    if quality.formatting.extra_spaces > 0 {
        feedback.push(EXTRA_SPACES.to_string());
    }
    if quality.formatting.bullet_points == 0 {
        feedback.push(NO_BULLETS.to_string());
    }

    if feedback.is_empty() {
        feedback.push(LOOKS_GOOD.to_string());
    }

    feedback
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::formatting::FormattingReport;

    fn quality(readability: Option<f64>, keywords: usize, spaces: usize, bullets: usize) -> ResumeQuality {
        ResumeQuality {
            readability: readability.map(|score| crate::scoring::readability::ReadabilityReport {
                score,
                sentences: 1,
                words: 1,
                syllables: 1,
            }),
            keywords_count: keywords,
            formatting: FormattingReport {
                extra_spaces: spaces,
                bullet_points: bullets,
            },
        }
    }

    #[test]
    fn test_score_bands() {
        assert_eq!(score_band_message(0.0), LOW_MATCH);
        assert_eq!(score_band_message(49.99), LOW_MATCH);
        assert_eq!(score_band_message(50.0), MODERATE_MATCH);
        assert_eq!(score_band_message(79.99), MODERATE_MATCH);
        assert_eq!(score_band_message(80.0), STRONG_MATCH);
        assert_eq!(score_band_message(100.0), STRONG_MATCH);
    }

    #[test]
    fn test_report_lists_missing_skills_and_education_gap() {
        let education = EducationComparison {
            matched: vec![],
            missing: vec!["master".to_string()],
        };
        let missing: SkillSet = ["azure".to_string(), "kubernetes".to_string()].into();
        let report = build_score_report(33.33, &education, true, &missing, &quality(Some(70.0), 1, 0, 2));

        assert_eq!(report.score, 33.33);
        assert_eq!(report.suggestions[0], LOW_MATCH);
        assert!(report.suggestions[1].contains("expected: master"));
        assert!(report.suggestions[2].contains("azure"));
        assert!(report.suggestions[3].contains("kubernetes"));
        assert_eq!(report.suggestions.len(), 4);
    }

    #[test]
    fn test_no_education_message_when_job_states_none() {
        let education = EducationComparison::default();
        let report = build_score_report(
            90.0,
            &education,
            false,
            &SkillSet::new(),
            &quality(Some(70.0), 1, 0, 3),
        );
        assert_eq!(report.suggestions, vec![STRONG_MATCH.to_string()]);
    }

    #[test]
    fn test_formatting_issues_become_suggestions() {
        let report = build_score_report(
            60.0,
            &EducationComparison::default(),
            true,
            &SkillSet::new(),
            &quality(Some(70.0), 1, 2, 0),
        );
        assert_eq!(
            report.suggestions,
            vec![
                MODERATE_MATCH.to_string(),
                EXTRA_SPACES.to_string(),
                NO_BULLETS.to_string()
            ]
        );
    }

    #[test]
    fn test_feedback_all_issues() {
        let feedback = generate_feedback(&quality(Some(20.0), 0, 1, 0));
        assert_eq!(feedback, vec![HARD_TO_READ, MISSING_KEYWORDS, EXTRA_SPACES, NO_BULLETS]);
    }

    #[test]
    fn test_feedback_looks_good() {
        let feedback = generate_feedback(&quality(Some(75.0), 3, 0, 4));
        assert_eq!(feedback, vec![LOOKS_GOOD.to_string()]);
    }

    #[test]
    fn test_feedback_missing_readability_uses_default() {
        // default 50 < 60 → hard to read
        let feedback = generate_feedback(&quality(None, 3, 0, 4));
        assert_eq!(feedback, vec![HARD_TO_READ.to_string()]);
    }
}

use serde::Serialize;

use crate::scoring::formatting::{check_formatting, FormattingReport};
use crate::scoring::keywords::count_keywords;
use crate::scoring::readability::{flesch_reading_ease, ReadabilityReport};

/// Readability used when a resume has no scorable words.
pub const DEFAULT_READABILITY: f64 = 50.0;

/// Resume-only signals, independent of skill matching.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResumeQuality {
    pub readability: Option<ReadabilityReport>,
    pub keywords_count: usize,
    pub formatting: FormattingReport,
}

impl ResumeQuality {
    /// Flesch score, or `DEFAULT_READABILITY` when the text had no words.
    pub fn readability_score(&self) -> f64 {
        self.readability
            .as_ref()
            .map(|r| r.score)
            .unwrap_or(DEFAULT_READABILITY)
    }
}

/// Scores resume text on readability, required-keyword presence and formatting.
pub fn score_resume<S: AsRef<str>>(text: &str, required_keywords: &[S]) -> ResumeQuality {
    ResumeQuality {
        readability: flesch_reading_ease(text),
        keywords_count: count_keywords(text, required_keywords),
        formatting: check_formatting(text),
    }
}

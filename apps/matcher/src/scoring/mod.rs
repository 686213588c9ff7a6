// Scoring: skill-match percentage, readability-weighted fit, resume quality checks,
// and the suggestion/feedback tables built from them.

pub mod formatting;
pub mod keywords;
pub mod quality;
pub mod readability;
pub mod score;
pub mod suggestions;

pub use quality::{score_resume, ResumeQuality};
pub use score::{fit_score, skill_score, ScoreReport, ScoringWeights};
pub use suggestions::{build_score_report, generate_feedback};

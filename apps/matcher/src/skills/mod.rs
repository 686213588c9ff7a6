// Skill and education extraction over normalized document text.
// The dictionary is built once at startup and passed in by reference.

pub mod dictionary;
pub mod education;
pub mod extractor;

use std::collections::BTreeSet;

/// Canonical skill names found in a document. Set semantics, sorted iteration.
pub type SkillSet = BTreeSet<String>;

pub use dictionary::SkillDictionary;
pub use education::{compare_education, extract_education, EducationComparison, EducationProfile};
pub use extractor::extract_skills;

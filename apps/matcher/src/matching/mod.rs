// Skill matching: exact set intersection and embedding-based semantic matching.
// Both compare a candidate (resume) SkillSet against a requirement (job) SkillSet.

pub mod exact;
pub mod semantic;

use serde::Serialize;

use crate::skills::SkillSet;

pub use exact::exact_match;
pub use semantic::{semantic_match, DEFAULT_SIMILARITY_THRESHOLD};

/// Requirement skills split into matched and missing.
///
/// Only constructible from a requirement set and the matched subset, so
/// `matched ∪ missing == requirement` and `matched ∩ missing == ∅` always hold.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MatchResult {
    matched: SkillSet,
    missing: SkillSet,
}

impl MatchResult {
    /// Keeps only matched skills that belong to `requirement`; the rest of the
    /// requirement becomes `missing`.
    pub fn from_matched(requirement: &SkillSet, matched: SkillSet) -> Self {
        let matched: SkillSet = matched
            .into_iter()
            .filter(|s| requirement.contains(s))
            .collect();
        let missing = requirement.difference(&matched).cloned().collect();
        Self { matched, missing }
    }

    /// Nothing matched: the whole requirement is missing.
    pub fn all_missing(requirement: &SkillSet) -> Self {
        Self::from_matched(requirement, SkillSet::new())
    }

    pub fn matched(&self) -> &SkillSet {
        &self.matched
    }

    pub fn missing(&self) -> &SkillSet {
        &self.missing
    }

    /// Size of the requirement set this result was built from.
    pub fn total(&self) -> usize {
        self.matched.len() + self.missing.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> SkillSet {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_missing_is_requirement_minus_matched() {
        let requirement = set(&["python", "kubernetes", "azure"]);
        let result = MatchResult::from_matched(&requirement, set(&["python"]));
        assert_eq!(result.matched(), &set(&["python"]));
        assert_eq!(result.missing(), &set(&["kubernetes", "azure"]));
        assert_eq!(result.total(), 3);
    }

    #[test]
    fn test_matched_outside_requirement_is_dropped() {
        let requirement = set(&["python"]);
        let result = MatchResult::from_matched(&requirement, set(&["python", "docker"]));
        assert_eq!(result.matched(), &set(&["python"]));
        assert!(result.missing().is_empty());
    }

    #[test]
    fn test_all_missing() {
        let requirement = set(&["go", "rust"]);
        let result = MatchResult::all_missing(&requirement);
        assert!(result.matched().is_empty());
        assert_eq!(result.missing(), &requirement);
    }
}

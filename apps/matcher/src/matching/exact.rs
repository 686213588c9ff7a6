use crate::skills::SkillSet;

/// Case-insensitive intersection of candidate and requirement skills.
///
/// Returned names are lowercase.
pub fn exact_match(candidate: &SkillSet, requirement: &SkillSet) -> SkillSet {
    let candidate: SkillSet = candidate.iter().map(|s| s.to_lowercase()).collect();
    requirement
        .iter()
        .map(|s| s.to_lowercase())
        .filter(|s| candidate.contains(s))
        .collect()
}

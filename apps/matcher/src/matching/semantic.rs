//! Semantic matching: a requirement skill is matched when its best cosine
//! similarity against any candidate skill reaches the threshold.

use tracing::debug;

use crate::embedding::Embedder;
use crate::errors::AppError;
use crate::matching::MatchResult;
use crate::skills::SkillSet;

pub const DEFAULT_SIMILARITY_THRESHOLD: f32 = 0.75;

/// Matches `requirement` skills against `candidate` skills by embedding similarity.
///
/// If either set is empty the whole requirement is missing and the embedder is not called.
/// A score exactly equal to `threshold` counts as matched.
pub fn semantic_match(
    candidate: &SkillSet,
    requirement: &SkillSet,
    threshold: f32,
    embedder: &dyn Embedder,
) -> Result<MatchResult, AppError> {
    if candidate.is_empty() || requirement.is_empty() {
        return Ok(MatchResult::all_missing(requirement));
    }

    let requirement_skills: Vec<String> = requirement.iter().cloned().collect();
    let candidate_skills: Vec<String> = candidate.iter().cloned().collect();

    let requirement_vectors = embedder.embed(&requirement_skills)?;
    let candidate_vectors = embedder.embed(&candidate_skills)?;
    if requirement_vectors.len() != requirement_skills.len()
        || candidate_vectors.len() != candidate_skills.len()
    {
        return Err(AppError::Embedding(format!(
            "{} returned the wrong number of vectors",
            embedder.model_name()
        )));
    }

    let mut matched = SkillSet::new();
    for (skill, vector) in requirement_skills.iter().zip(&requirement_vectors) {
        let best = candidate_vectors
            .iter()
            .map(|c| cosine_similarity(vector, c))
            .fold(f32::MIN, f32::max);

        debug!(skill = %skill, best, "Best semantic similarity");
        if best >= threshold {
            matched.insert(skill.clone());
        }
    }

    Ok(MatchResult::from_matched(requirement, matched))
}

/// Cosine similarity; 0.0 when either vector has zero norm.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot_product: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot_product / (norm_a * norm_b)
}

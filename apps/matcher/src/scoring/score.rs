use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub skills: f64,
    pub readability: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skills: 0.7,
            readability: 0.3,
        }
    }
}

/// Final percentage plus the suggestions shown to the user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreReport {
    pub score: f64,
    pub suggestions: Vec<String>,
}

/// `matched / max(1, total) * 100`, rounded to two decimals.
pub fn skill_score(matched: usize, total: usize) -> f64 {
    round2(matched as f64 / total.max(1) as f64 * 100.0)
}

/// Weighted sum of the skill percentage and the readability percentage.
/// Readability is clamped to 0–100 first since Flesch scores can leave that range.
pub fn fit_score(skill_pct: f64, readability: f64, weights: &ScoringWeights) -> f64 {
    let readability_pct = readability.clamp(0.0, 100.0);
    round2(weights.skills * skill_pct + weights.readability * readability_pct)
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_matches_scores_zero() {
        assert_eq!(skill_score(0, 5), 0.0);
    }

    #[test]
    fn test_all_matches_scores_hundred() {
        assert_eq!(skill_score(5, 5), 100.0);
    }

    #[test]
    fn test_one_of_three_rounds_to_two_decimals() {
        assert_eq!(skill_score(1, 3), 33.33);
    }

    #[test]
    fn test_empty_requirement_does_not_divide_by_zero() {
        assert_eq!(skill_score(0, 0), 0.0);
    }

    #[test]
    fn test_score_monotonic_in_matched() {
        let scores: Vec<f64> = (0..=7).map(|m| skill_score(m, 7)).collect();
        assert!(scores.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_fit_score_default_weights() {
        // 0.7*50 + 0.3*80 = 35 + 24 = 59
        let score = fit_score(50.0, 80.0, &ScoringWeights::default());
        assert!((score - 59.0).abs() < 1e-9, "Score was {score}");
    }

    #[test]
    fn test_fit_score_clamps_readability() {
        let w = ScoringWeights::default();
        assert!((fit_score(100.0, 130.0, &w) - 100.0).abs() < 1e-9);
        assert!((fit_score(0.0, -40.0, &w) - 0.0).abs() < 1e-9);
    }
}

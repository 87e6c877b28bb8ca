//! Acceptance and selection policies.

use serde::{Deserialize, Serialize};

use super::MatchError;

/// Acceptance threshold applied to similarity scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimilarityPolicy {
    threshold: f64,
}

/// Default acceptance threshold.
pub const DEFAULT_THRESHOLD: f64 = 0.70;

impl SimilarityPolicy {
    /// Create a policy. The threshold must be a finite value in `[0, 1]`.
    pub fn new(threshold: f64) -> Result<Self, MatchError> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(MatchError::InvalidThreshold(threshold));
        }
        Ok(Self { threshold })
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// True iff `score >= threshold`.
    pub fn accepts(&self, score: f64) -> bool {
        score >= self.threshold
    }
}

impl Default for SimilarityPolicy {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

/// How a matcher picks among acceptable candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPolicy {
    /// Stop at the first candidate, in pool order, that clears the threshold.
    #[default]
    FirstAcceptable,

    /// Scan the whole pool and keep the highest score.
    /// Ties go to the earliest candidate.
    BestScore,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_threshold() {
        let policy = SimilarityPolicy::default();
        assert_eq!(policy.threshold(), 0.70);
        assert!(policy.accepts(0.70));
        assert!(policy.accepts(0.875));
        assert!(!policy.accepts(0.69));
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(SimilarityPolicy::new(0.0).unwrap().accepts(0.0));
        assert!(SimilarityPolicy::new(1.0).unwrap().accepts(1.0));
        assert!(!SimilarityPolicy::new(1.0).unwrap().accepts(0.999));
    }

    #[test]
    fn test_out_of_range_threshold_rejected() {
        assert!(matches!(
            SimilarityPolicy::new(1.5),
            Err(MatchError::InvalidThreshold(_))
        ));
        assert!(SimilarityPolicy::new(-0.1).is_err());
        assert!(SimilarityPolicy::new(f64::NAN).is_err());
    }

    #[test]
    fn test_selection_policy_serde() {
        let json = serde_json::to_string(&SelectionPolicy::BestScore).unwrap();
        assert_eq!(json, "\"best_score\"");

        let parsed: SelectionPolicy = serde_json::from_str("\"first_acceptable\"").unwrap();
        assert_eq!(parsed, SelectionPolicy::FirstAcceptable);
        assert_eq!(SelectionPolicy::default(), SelectionPolicy::FirstAcceptable);
    }
}

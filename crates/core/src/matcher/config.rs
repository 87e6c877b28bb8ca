//! Matcher configuration types.

use serde::{Deserialize, Serialize};

use super::fuzzy::FuzzyMatcher;
use super::policy::{SelectionPolicy, SimilarityPolicy, DEFAULT_THRESHOLD};
use super::MatchError;
use crate::catalog::ProgramUnit;

/// Matcher configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatcherConfig {
    /// Minimum similarity (0.0-1.0) for a candidate to count as a match.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    /// How to choose among acceptable candidates.
    #[serde(default)]
    pub selection: SelectionPolicy,
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            selection: SelectionPolicy::default(),
        }
    }
}

impl MatcherConfig {
    /// Build a matcher, validating the threshold.
    pub fn build(&self) -> Result<FuzzyMatcher, MatchError> {
        let policy = SimilarityPolicy::new(self.threshold)?;
        Ok(FuzzyMatcher::new(policy).with_selection(self.selection))
    }
}

/// Size limits on what a caller may submit in one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestLimits {
    /// Maximum number of candidates in one pool.
    #[serde(default = "default_max_candidates")]
    pub max_candidates: usize,
    /// Maximum length, in chars, of the query or any candidate.
    #[serde(default = "default_max_string_len")]
    pub max_string_len: usize,
}

fn default_max_candidates() -> usize {
    10_000
}

fn default_max_string_len() -> usize {
    1024
}

impl Default for RequestLimits {
    fn default() -> Self {
        Self {
            max_candidates: default_max_candidates(),
            max_string_len: default_max_string_len(),
        }
    }
}

impl RequestLimits {
    /// Reject pools or strings that exceed the limits.
    pub fn check<S: AsRef<str>>(&self, query: &str, candidates: &[S]) -> Result<(), MatchError> {
        if candidates.len() > self.max_candidates {
            return Err(MatchError::PoolTooLarge {
                len: candidates.len(),
                max: self.max_candidates,
            });
        }

        self.check_str("query", query)?;
        for (i, candidate) in candidates.iter().enumerate() {
            self.check_str(&format!("candidates[{i}]"), candidate.as_ref())?;
        }

        Ok(())
    }

    /// Reject unit lists whose unit or member count exceeds `max_candidates`,
    /// or that hold an over-long unit name or member.
    ///
    /// Errors name the offending field, e.g. `units[0].members[2]`.
    pub fn check_units(&self, query: &str, units: &[ProgramUnit]) -> Result<(), MatchError> {
        let members: usize = units.iter().map(|u| u.members.len()).sum();
        let len = units.len().max(members);
        if len > self.max_candidates {
            return Err(MatchError::PoolTooLarge {
                len,
                max: self.max_candidates,
            });
        }

        self.check_str("query", query)?;
        for (i, unit) in units.iter().enumerate() {
            self.check_str(&format!("units[{i}].name"), &unit.name)?;
            for (j, member) in unit.members.iter().enumerate() {
                self.check_str(&format!("units[{i}].members[{j}]"), member)?;
            }
        }

        Ok(())
    }

    /// Reject a single string longer than `max_string_len` chars.
    pub fn check_str(&self, field: &str, value: &str) -> Result<(), MatchError> {
        let len = value.chars().count();
        if len > self.max_string_len {
            return Err(MatchError::InputTooLong {
                field: field.to_string(),
                len,
                max: self.max_string_len,
            });
        }
        Ok(())
    }
}

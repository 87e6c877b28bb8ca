//! Fuzzy matching of a query against a pool of candidate identifiers.
//!
//! Candidates are scored with [`Levenshtein::similarity`](crate::distance::Levenshtein::similarity)
//! and accepted when the score clears a [`SimilarityPolicy`] threshold.
//! A [`SelectionPolicy`] decides whether the first acceptable candidate wins
//! or the whole pool is scanned for the best one.
//!
//! # Example
//!
//! ```
//! use editmatch_core::{FuzzyMatcher, MatchOutcome};
//!
//! let matcher = FuzzyMatcher::default();
//! let pool = ["getValue", "getValues", "setName"];
//!
//! match matcher.find("getVlue", &pool) {
//!     MatchOutcome::Matched(m) => assert_eq!(m.candidate, "getValue"),
//!     MatchOutcome::NoMatch => unreachable!(),
//! }
//! ```

mod config;
mod fuzzy;
mod policy;
mod types;

pub use config::{MatcherConfig, RequestLimits};
pub use fuzzy::FuzzyMatcher;
pub use policy::{SelectionPolicy, SimilarityPolicy, DEFAULT_THRESHOLD};
pub use types::{MatchOutcome, ScoredMatch};

use thiserror::Error;

/// Errors raised before a match is attempted.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatchError {
    #[error("Invalid input: {field} is required")]
    InvalidInput { field: String },

    #[error("Invalid threshold {0}: must be within [0, 1]")]
    InvalidThreshold(f64),

    #[error("Candidate pool too large: {len} candidates (max {max})")]
    PoolTooLarge { len: usize, max: usize },

    #[error("Input too long: {field} has {len} chars (max {max})")]
    InputTooLong { field: String, len: usize, max: usize },
}

/// Unwrap a value the caller must supply, failing with
/// [`MatchError::InvalidInput`] when it is absent.
pub fn require<T>(value: Option<T>, field: &str) -> Result<T, MatchError> {
    value.ok_or_else(|| MatchError::InvalidInput {
        field: field.to_string(),
    })
}

/// [`require`] for a list whose elements may themselves be absent.
///
/// The error names the first missing element, e.g. `candidates[2]`.
pub fn require_all<T>(values: Option<Vec<Option<T>>>, field: &str) -> Result<Vec<T>, MatchError> {
    require(values, field)?
        .into_iter()
        .enumerate()
        .map(|(i, v)| require(v, &format!("{field}[{i}]")))
        .collect()
}

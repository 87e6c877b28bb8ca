//! Edit distance engines.
//!
//! Two engines share this module and deliberately expose different results:
//!
//! - [`Levenshtein`]: unit-cost, case-insensitive, with a normalized
//!   similarity in `[0, 1]`.
//! - [`DamerauLevenshtein`]: weighted by a [`CostModel`], case-sensitive,
//!   adds adjacent transpositions and returns the raw distance.

mod cost;
mod damerau;
mod levenshtein;

pub use cost::{CostModel, CostWeights};
pub use damerau::DamerauLevenshtein;
pub use levenshtein::{Levenshtein, SimilarityReport};

use thiserror::Error;

/// Errors raised while configuring a distance engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DistanceError {
    #[error(
        "Invalid cost model: 2 * transpose ({transpose}) must be >= insert ({insert}) + delete ({delete})"
    )]
    InvalidCostModel {
        delete: u32,
        insert: u32,
        transpose: u32,
    },
}

//! Edit operation weights.

use serde::{Deserialize, Serialize};

use super::DistanceError;

/// Weights for the four elementary edit operations.
///
/// Construction enforces `2 * transpose >= insert + delete`. Under that
/// restriction an optimal edit script never needs two swaps touching the same
/// character, which is what lets [`DamerauLevenshtein`](super::DamerauLevenshtein)
/// solve the problem in a single forward pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CostWeights", into = "CostWeights")]
pub struct CostModel {
    delete: u32,
    insert: u32,
    replace: u32,
    transpose: u32,
}

/// Unvalidated cost weights, as they appear in configuration files and
/// request bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostWeights {
    #[serde(default = "unit_cost")]
    pub delete: u32,
    #[serde(default = "unit_cost")]
    pub insert: u32,
    #[serde(default = "unit_cost")]
    pub replace: u32,
    #[serde(default = "unit_cost")]
    pub transpose: u32,
}

fn unit_cost() -> u32 {
    1
}

impl Default for CostWeights {
    fn default() -> Self {
        Self {
            delete: unit_cost(),
            insert: unit_cost(),
            replace: unit_cost(),
            transpose: unit_cost(),
        }
    }
}

impl CostModel {
    /// Create a cost model, rejecting weights that break the swap invariant.
    pub fn new(delete: u32, insert: u32, replace: u32, transpose: u32) -> Result<Self, DistanceError> {
        // u64 so large weights cannot wrap the comparison
        if 2 * u64::from(transpose) < u64::from(insert) + u64::from(delete) {
            tracing::debug!(
                delete,
                insert,
                replace,
                transpose,
                "Rejected cost model violating the swap invariant"
            );
            return Err(DistanceError::InvalidCostModel {
                delete,
                insert,
                transpose,
            });
        }

        Ok(Self {
            delete,
            insert,
            replace,
            transpose,
        })
    }

    pub fn delete(&self) -> u32 {
        self.delete
    }

    pub fn insert(&self) -> u32 {
        self.insert
    }

    pub fn replace(&self) -> u32 {
        self.replace
    }

    pub fn transpose(&self) -> u32 {
        self.transpose
    }
}

impl Default for CostModel {
    /// Unit costs for every operation.
    fn default() -> Self {
        Self {
            delete: 1,
            insert: 1,
            replace: 1,
            transpose: 1,
        }
    }
}

impl TryFrom<CostWeights> for CostModel {
    type Error = DistanceError;

    fn try_from(weights: CostWeights) -> Result<Self, Self::Error> {
        Self::new(
            weights.delete,
            weights.insert,
            weights.replace,
            weights.transpose,
        )
    }
}

impl From<CostModel> for CostWeights {
    fn from(model: CostModel) -> Self {
        Self {
            delete: model.delete,
            insert: model.insert,
            replace: model.replace,
            transpose: model.transpose,
        }
    }
}

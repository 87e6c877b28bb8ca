//! Program unit types.

use serde::{Deserialize, Serialize};

/// A loaded program unit and the member names it declares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramUnit {
    /// Fully qualified unit name.
    pub name: String,
    /// Member names, in declaration order.
    #[serde(default)]
    pub members: Vec<String>,
}

impl ProgramUnit {
    pub fn new(name: impl Into<String>, members: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            name: name.into(),
            members: members.into_iter().map(Into::into).collect(),
        }
    }
}

/// A member accepted by a compatible-member search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberMatch {
    /// Name of the unit declaring the member.
    pub unit: String,
    /// The accepted member name.
    pub member: String,
    /// Similarity to the query (0.0-1.0).
    pub score: f64,
}

//! Match result types.

use serde::Serialize;

/// A candidate that cleared the acceptance threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredMatch<'a> {
    /// The accepted candidate, borrowed from the pool.
    pub candidate: &'a str,
    /// Position of the candidate in the pool.
    pub index: usize,
    /// Levenshtein similarity to the query (0.0-1.0).
    pub score: f64,
}

/// Outcome of a match over a candidate pool.
///
/// `NoMatch` is a normal result, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MatchOutcome<'a> {
    Matched(ScoredMatch<'a>),
    NoMatch,
}

impl<'a> MatchOutcome<'a> {
    pub fn is_match(&self) -> bool {
        matches!(self, MatchOutcome::Matched(_))
    }

    /// The accepted candidate, if any.
    pub fn candidate(&self) -> Option<&'a str> {
        match self {
            MatchOutcome::Matched(m) => Some(m.candidate),
            MatchOutcome::NoMatch => None,
        }
    }

    pub fn as_match(&self) -> Option<&ScoredMatch<'a>> {
        match self {
            MatchOutcome::Matched(m) => Some(m),
            MatchOutcome::NoMatch => None,
        }
    }

    /// Label used in logs and metrics.
    pub fn label(&self) -> &'static str {
        match self {
            MatchOutcome::Matched(_) => "matched",
            MatchOutcome::NoMatch => "no_match",
        }
    }
}

impl<'a> From<Option<ScoredMatch<'a>>> for MatchOutcome<'a> {
    fn from(found: Option<ScoredMatch<'a>>) -> Self {
        found.map_or(MatchOutcome::NoMatch, MatchOutcome::Matched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_matched() {
        let outcome = MatchOutcome::Matched(ScoredMatch {
            candidate: "getValue",
            index: 0,
            score: 0.875,
        });
        let json = serde_json::to_value(outcome).unwrap();
        assert_eq!(json["status"], "matched");
        assert_eq!(json["candidate"], "getValue");
        assert_eq!(json["index"], 0);
        assert_eq!(json["score"], 0.875);
    }

    #[test]
    fn test_serialize_no_match() {
        let json = serde_json::to_value(MatchOutcome::NoMatch).unwrap();
        assert_eq!(json, serde_json::json!({ "status": "no_match" }));
    }

    #[test]
    fn test_accessors() {
        let outcome = MatchOutcome::from(Some(ScoredMatch {
            candidate: "setName",
            index: 2,
            score: 1.0,
        }));
        assert!(outcome.is_match());
        assert_eq!(outcome.candidate(), Some("setName"));
        assert_eq!(outcome.as_match().map(|m| m.index), Some(2));
        assert_eq!(outcome.label(), "matched");

        let none = MatchOutcome::from(None);
        assert!(!none.is_match());
        assert_eq!(none.candidate(), None);
        assert_eq!(none.label(), "no_match");
    }
}

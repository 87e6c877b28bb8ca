//! Threshold-based fuzzy matcher over candidate pools.

use tracing::{debug, trace};

use super::policy::{SelectionPolicy, SimilarityPolicy};
use super::types::{MatchOutcome, ScoredMatch};
use super::MatchError;
use crate::distance::Levenshtein;

/// Selects a candidate for a query using Levenshtein similarity.
///
/// Policies are fixed at construction. Each call allocates its own working
/// state and never mutates the matcher.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FuzzyMatcher {
    policy: SimilarityPolicy,
    selection: SelectionPolicy,
}

impl FuzzyMatcher {
    pub fn new(policy: SimilarityPolicy) -> Self {
        Self {
            policy,
            selection: SelectionPolicy::default(),
        }
    }

    pub fn with_selection(mut self, selection: SelectionPolicy) -> Self {
        self.selection = selection;
        self
    }

    /// Copy of this matcher with per-call overrides applied.
    pub fn with_overrides(
        &self,
        threshold: Option<f64>,
        selection: Option<SelectionPolicy>,
    ) -> Result<Self, MatchError> {
        let policy = match threshold {
            Some(t) => SimilarityPolicy::new(t)?,
            None => self.policy,
        };
        Ok(Self {
            policy,
            selection: selection.unwrap_or(self.selection),
        })
    }

    pub fn policy(&self) -> &SimilarityPolicy {
        &self.policy
    }

    pub fn selection(&self) -> SelectionPolicy {
        self.selection
    }

    /// Match using the configured selection policy.
    pub fn find<'a, S: AsRef<str>>(&self, query: &str, candidates: &'a [S]) -> MatchOutcome<'a> {
        match self.selection {
            SelectionPolicy::FirstAcceptable => self.find_best_or_first_acceptable(query, candidates),
            SelectionPolicy::BestScore => self.find_best_score(query, candidates),
        }
    }

    /// Return the first candidate, in pool order, whose similarity to `query`
    /// clears the threshold. The scan stops there.
    pub fn find_best_or_first_acceptable<'a, S: AsRef<str>>(
        &self,
        query: &str,
        candidates: &'a [S],
    ) -> MatchOutcome<'a> {
        let found = candidates
            .iter()
            .enumerate()
            .map(|(index, c)| self.score(query, index, c.as_ref()))
            .find(|m| self.policy.accepts(m.score));

        self.log_outcome(query, candidates.len(), found.into())
    }

    /// Return the acceptable candidate with the highest similarity.
    pub fn find_best_score<'a, S: AsRef<str>>(
        &self,
        query: &str,
        candidates: &'a [S],
    ) -> MatchOutcome<'a> {
        let mut best: Option<ScoredMatch<'a>> = None;

        for (index, candidate) in candidates.iter().enumerate() {
            let scored = self.score(query, index, candidate.as_ref());
            if !self.policy.accepts(scored.score) {
                continue;
            }
            // strict comparison keeps the earliest of equal scores
            if best.is_none_or(|b| scored.score > b.score) {
                best = Some(scored);
            }
        }

        self.log_outcome(query, candidates.len(), best.into())
    }

    /// All acceptable candidates, best first. Equal scores keep pool order.
    pub fn rank<'a, S: AsRef<str>>(
        &self,
        query: &str,
        candidates: &'a [S],
        limit: Option<usize>,
    ) -> Vec<ScoredMatch<'a>> {
        let mut ranked: Vec<ScoredMatch<'a>> = candidates
            .iter()
            .enumerate()
            .map(|(index, c)| self.score(query, index, c.as_ref()))
            .filter(|m| self.policy.accepts(m.score))
            .collect();

        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

        if let Some(limit) = limit {
            ranked.truncate(limit);
        }

        debug!(query, pool = candidates.len(), ranked = ranked.len(), "Ranked candidates");
        ranked
    }

    fn score<'a>(&self, query: &str, index: usize, candidate: &'a str) -> ScoredMatch<'a> {
        let score = Levenshtein::similarity(candidate, query);
        trace!(query, candidate, score, "Scored candidate");
        ScoredMatch {
            candidate,
            index,
            score,
        }
    }

    fn log_outcome<'a>(&self, query: &str, pool: usize, outcome: MatchOutcome<'a>) -> MatchOutcome<'a> {
        match &outcome {
            MatchOutcome::Matched(m) => debug!(
                query,
                candidate = m.candidate,
                index = m.index,
                score = m.score,
                selection = ?self.selection,
                "Accepted candidate"
            ),
            MatchOutcome::NoMatch => debug!(
                query,
                pool,
                threshold = self.policy.threshold(),
                "No candidate cleared the threshold"
            ),
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POOL: [&str; 3] = ["getValue", "getValues", "setName"];

    #[test]
    fn test_first_acceptable_stops_at_first_hit() {
        let matcher = FuzzyMatcher::default();
        let outcome = matcher.find_best_or_first_acceptable("getVlue", &POOL);

        let m = outcome.as_match().unwrap();
        assert_eq!(m.candidate, "getValue");
        assert_eq!(m.index, 0);
        assert!((m.score - 0.875).abs() < 1e-9);
    }

    #[test]
    fn test_first_acceptable_is_not_best() {
        // "getValues" is exact, but "getValue" comes first and clears 0.7
        let matcher = FuzzyMatcher::default();
        let outcome = matcher.find_best_or_first_acceptable("getValues", &POOL);
        assert_eq!(outcome.candidate(), Some("getValue"));
    }

    #[test]
    fn test_best_score_scans_whole_pool() {
        let matcher = FuzzyMatcher::default().with_selection(SelectionPolicy::BestScore);
        let outcome = matcher.find("getValues", &POOL);

        let m = outcome.as_match().unwrap();
        assert_eq!(m.candidate, "getValues");
        assert_eq!(m.index, 1);
        assert_eq!(m.score, 1.0);
    }

    #[test]
    fn test_best_score_tie_keeps_earliest() {
        let matcher = FuzzyMatcher::default().with_selection(SelectionPolicy::BestScore);
        let pool = ["abcx", "abcy", "abcz"];
        assert_eq!(matcher.find("abcd", &pool).as_match().map(|m| m.index), Some(0));
    }

    #[test]
    fn test_no_match() {
        let matcher = FuzzyMatcher::default();
        let outcome = matcher.find_best_or_first_acceptable("xyz123", &["foo", "bar"]);
        assert_eq!(outcome, MatchOutcome::NoMatch);

        let best = matcher
            .with_selection(SelectionPolicy::BestScore)
            .find("xyz123", &["foo", "bar"]);
        assert_eq!(best, MatchOutcome::NoMatch);
    }

    #[test]
    fn test_empty_pool() {
        let matcher = FuzzyMatcher::default();
        let empty: [&str; 0] = [];
        assert_eq!(matcher.find("anything", &empty), MatchOutcome::NoMatch);
        assert!(matcher.rank("anything", &empty, None).is_empty());
    }

    #[test]
    fn test_owned_candidates() {
        let pool: Vec<String> = POOL.iter().map(|s| s.to_string()).collect();
        let outcome = FuzzyMatcher::default().find("SETNAME", &pool);
        assert_eq!(outcome.candidate(), Some("setName"));
    }

    #[test]
    fn test_threshold_override() {
        let strict = FuzzyMatcher::default()
            .with_overrides(Some(0.9), None)
            .unwrap();
        assert_eq!(strict.find("getVlue", &POOL), MatchOutcome::NoMatch);
        assert_eq!(strict.selection(), SelectionPolicy::FirstAcceptable);

        let lenient = FuzzyMatcher::default()
            .with_overrides(Some(0.0), Some(SelectionPolicy::BestScore))
            .unwrap();
        assert_eq!(lenient.policy().threshold(), 0.0);
        assert_eq!(lenient.selection(), SelectionPolicy::BestScore);

        assert!(FuzzyMatcher::default().with_overrides(Some(2.0), None).is_err());
    }

    #[test]
    fn test_rank_orders_by_score() {
        let matcher = FuzzyMatcher::default();
        let ranked = matcher.rank("getValues", &POOL, None);

        let names: Vec<&str> = ranked.iter().map(|m| m.candidate).collect();
        assert_eq!(names, vec!["getValues", "getValue"]);
        assert!(ranked[0].score >= ranked[1].score);
    }

    #[test]
    fn test_rank_ties_keep_pool_order() {
        let matcher = FuzzyMatcher::default();
        let pool = ["abcx", "abcy", "abcd", "abcz"];
        let indices: Vec<usize> = matcher
            .rank("abcd", &pool, None)
            .iter()
            .map(|m| m.index)
            .collect();
        assert_eq!(indices, vec![2, 0, 1, 3]);
    }

    #[test]
    fn test_rank_limit() {
        let matcher = FuzzyMatcher::new(SimilarityPolicy::new(0.0).unwrap());
        let ranked = matcher.rank("getValue", &POOL, Some(2));
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].candidate, "getValue");
    }
}

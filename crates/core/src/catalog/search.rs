//! Compatible member search across program units.

use tracing::debug;

use super::traits::IdentifierSource;
use super::types::MemberMatch;
use crate::matcher::{FuzzyMatcher, MatchOutcome, SelectionPolicy};

/// Find a member, across all units in load order, whose similarity to
/// `query` is accepted by the matcher's policy.
///
/// Each unit's members are matched with [`FuzzyMatcher::find`], so the
/// matcher's selection applies within a unit. Across units:
///
/// - `FirstAcceptable` stops at the first unit holding an accepted member.
/// - `BestScore` keeps the highest score over all units. Ties go to the
///   earlier unit.
pub fn search_compatible_member(
    source: &dyn IdentifierSource,
    matcher: &FuzzyMatcher,
    query: &str,
) -> Option<MemberMatch> {
    let mut best: Option<MemberMatch> = None;

    for unit in source.units() {
        let MatchOutcome::Matched(found) = matcher.find(query, &unit.members) else {
            continue;
        };
        let candidate = MemberMatch {
            unit: unit.name.clone(),
            member: found.candidate.to_string(),
            score: found.score,
        };

        match matcher.selection() {
            SelectionPolicy::FirstAcceptable => {
                best = Some(candidate);
                break;
            }
            SelectionPolicy::BestScore => {
                if best.as_ref().is_none_or(|b| candidate.score > b.score) {
                    best = Some(candidate);
                }
            }
        }
    }

    match &best {
        Some(found) => debug!(
            source = source.name(),
            unit = %found.unit,
            member = %found.member,
            score = found.score,
            "Found compatible member"
        ),
        None => debug!(source = source.name(), query, "No compatible member found"),
    }
    best
}

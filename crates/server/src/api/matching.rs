//! Edit distance and matching API handlers.
//!
//! Request bodies carry optional fields so that a missing or null value is
//! reported as an invalid-input error naming the field, rather than a
//! generic deserialization failure.

use std::sync::Arc;

use axum::{extract::State, Json};
use editmatch_core::{
    require, require_all, search_compatible_member, CostModel, CostWeights, DamerauLevenshtein,
    Levenshtein, MatchError, MatchOutcome, ProgramUnit, ScoredMatch, SelectionPolicy,
    SimilarityReport, UnitCatalog,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::ApiError;
use crate::metrics::{CANDIDATES_SCANNED, MATCH_OUTCOMES_TOTAL};
use crate::state::AppState;

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SimilarityRequest {
    pub a: Option<String>,
    pub b: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DistanceRequest {
    pub source: Option<String>,
    pub target: Option<String>,
    /// Per-request weights; the configured cost model when absent.
    #[serde(default)]
    pub costs: Option<CostWeights>,
}

#[derive(Debug, Serialize)]
pub struct DistanceResponse {
    pub distance: u64,
    pub costs: CostWeights,
}

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub query: Option<String>,
    pub candidates: Option<Vec<Option<String>>>,
    #[serde(default)]
    pub threshold: Option<f64>,
    #[serde(default)]
    pub selection: Option<SelectionPolicy>,
    /// Only used by `/rank`.
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Owned form of [`MatchOutcome`].
#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl From<MatchOutcome<'_>> for MatchResponse {
    fn from(outcome: MatchOutcome<'_>) -> Self {
        let status = outcome.label();
        match outcome {
            MatchOutcome::Matched(m) => Self {
                status,
                candidate: Some(m.candidate.to_string()),
                index: Some(m.index),
                score: Some(m.score),
            },
            MatchOutcome::NoMatch => Self {
                status,
                candidate: None,
                index: None,
                score: None,
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RankedCandidate {
    pub candidate: String,
    pub index: usize,
    pub score: f64,
}

impl From<ScoredMatch<'_>> for RankedCandidate {
    fn from(m: ScoredMatch<'_>) -> Self {
        Self {
            candidate: m.candidate.to_string(),
            index: m.index,
            score: m.score,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RankResponse {
    pub matches: Vec<RankedCandidate>,
}

#[derive(Debug, Deserialize)]
pub struct UnitSearchRequest {
    pub query: Option<String>,
    pub units: Option<Vec<Option<UnitPayload>>>,
    #[serde(default)]
    pub threshold: Option<f64>,
    #[serde(default)]
    pub selection: Option<SelectionPolicy>,
}

/// Wire form of a [`ProgramUnit`]; every field is required.
#[derive(Debug, Deserialize)]
pub struct UnitPayload {
    pub name: Option<String>,
    pub members: Option<Vec<Option<String>>>,
}

impl UnitPayload {
    fn into_unit(self, path: &str) -> Result<ProgramUnit, MatchError> {
        Ok(ProgramUnit {
            name: require(self.name, &format!("{path}.name"))?,
            members: require_all(self.members, &format!("{path}.members"))?,
        })
    }
}

/// Validate submitted units, naming the first missing field,
/// e.g. `units[0].members[1]`.
fn require_units(units: Option<Vec<Option<UnitPayload>>>) -> Result<Vec<ProgramUnit>, MatchError> {
    require_all(units, "units")?
        .into_iter()
        .enumerate()
        .map(|(i, unit)| unit.into_unit(&format!("units[{i}]")))
        .collect()
}

#[derive(Debug, Serialize)]
pub struct UnitSearchResponse {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /api/v1/similarity
///
/// Case-insensitive Levenshtein distance and similarity of two strings.
pub async fn similarity(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SimilarityRequest>,
) -> Result<Json<SimilarityReport>, ApiError> {
    let a = require(body.a, "a")?;
    let b = require(body.b, "b")?;

    let limits = state.limits();
    limits.check_str("a", &a)?;
    limits.check_str("b", &b)?;

    Ok(Json(Levenshtein::report(&a, &b)))
}

/// POST /api/v1/distance
///
/// Case-sensitive Damerau-Levenshtein distance under the configured or
/// supplied cost model.
pub async fn distance(
    State(state): State<Arc<AppState>>,
    Json(body): Json<DistanceRequest>,
) -> Result<Json<DistanceResponse>, ApiError> {
    let source = require(body.source, "source")?;
    let target = require(body.target, "target")?;

    let limits = state.limits();
    limits.check_str("source", &source)?;
    limits.check_str("target", &target)?;

    let costs = match body.costs {
        Some(weights) => CostModel::try_from(weights)?,
        None => state.costs(),
    };

    let distance = DamerauLevenshtein::new(costs).distance(&source, &target);
    debug!(distance, ?costs, "Computed distance");

    Ok(Json(DistanceResponse {
        distance,
        costs: costs.into(),
    }))
}

/// POST /api/v1/match
///
/// Select a candidate for the query using the configured selection policy,
/// optionally overridden per request.
pub async fn find_match(
    State(state): State<Arc<AppState>>,
    Json(body): Json<MatchRequest>,
) -> Result<Json<MatchResponse>, ApiError> {
    let query = require(body.query, "query")?;
    let candidates = require_all(body.candidates, "candidates")?;
    state.limits().check(&query, &candidates)?;

    let matcher = state.matcher().with_overrides(body.threshold, body.selection)?;
    let outcome = matcher.find(&query, &candidates);

    CANDIDATES_SCANNED.observe(candidates.len() as f64);
    MATCH_OUTCOMES_TOTAL
        .with_label_values(&["match", outcome.label()])
        .inc();

    Ok(Json(MatchResponse::from(outcome)))
}

/// POST /api/v1/rank
///
/// All acceptable candidates, best first.
pub async fn rank(
    State(state): State<Arc<AppState>>,
    Json(body): Json<MatchRequest>,
) -> Result<Json<RankResponse>, ApiError> {
    let query = require(body.query, "query")?;
    let candidates = require_all(body.candidates, "candidates")?;
    state.limits().check(&query, &candidates)?;

    let matcher = state.matcher().with_overrides(body.threshold, None)?;
    let ranked = matcher.rank(&query, &candidates, body.limit);

    CANDIDATES_SCANNED.observe(candidates.len() as f64);
    let label = if ranked.is_empty() { "no_match" } else { "matched" };
    MATCH_OUTCOMES_TOTAL.with_label_values(&["rank", label]).inc();

    Ok(Json(RankResponse {
        matches: ranked.into_iter().map(RankedCandidate::from).collect(),
    }))
}

/// POST /api/v1/units/search
///
/// Find a compatible member across the submitted program units.
pub async fn search_units(
    State(state): State<Arc<AppState>>,
    Json(body): Json<UnitSearchRequest>,
) -> Result<Json<UnitSearchResponse>, ApiError> {
    let query = require(body.query, "query")?;
    let units = require_units(body.units)?;
    state.limits().check_units(&query, &units)?;

    let members: usize = units.iter().map(|u| u.members.len()).sum();
    CANDIDATES_SCANNED.observe(members as f64);

    let matcher = state.matcher().with_overrides(body.threshold, body.selection)?;
    let catalog = UnitCatalog::new(units);

    let response = match search_compatible_member(&catalog, &matcher, &query) {
        Some(found) => UnitSearchResponse {
            status: "matched",
            unit: Some(found.unit),
            member: Some(found.member),
            score: Some(found.score),
        },
        None => UnitSearchResponse {
            status: "no_match",
            unit: None,
            member: None,
            score: None,
        },
    };

    MATCH_OUTCOMES_TOTAL
        .with_label_values(&["units", response.status])
        .inc();

    Ok(Json(response))
}

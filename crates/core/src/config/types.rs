use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};

use super::ConfigError;
use crate::distance::{CostModel, CostWeights};
use crate::matcher::{FuzzyMatcher, MatcherConfig, RequestLimits};

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    /// Edit operation weights for the Damerau-Levenshtein engine
    #[serde(default)]
    pub costs: CostWeights,
    #[serde(default)]
    pub matcher: MatcherConfig,
    #[serde(default)]
    pub limits: RequestLimits,
}

impl Config {
    /// Validated cost model built from `[costs]`
    pub fn cost_model(&self) -> Result<CostModel, ConfigError> {
        CostModel::try_from(self.costs).map_err(|e| ConfigError::ValidationError(e.to_string()))
    }

    /// Matcher built from `[matcher]`
    pub fn fuzzy_matcher(&self) -> Result<FuzzyMatcher, ConfigError> {
        self.matcher
            .build()
            .map_err(|e| ConfigError::ValidationError(format!("matcher: {e}")))
    }
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

fn default_port() -> u16 {
    8080
}

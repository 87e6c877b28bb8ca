use editmatch_core::{Config, ConfigError, CostModel, FuzzyMatcher, RequestLimits};

/// Shared application state
///
/// Holds the validated defaults built once from configuration. Requests that
/// override costs or thresholds build their own values from these; the state
/// itself is never mutated.
pub struct AppState {
    config: Config,
    costs: CostModel,
    matcher: FuzzyMatcher,
}

impl AppState {
    pub fn from_config(config: Config) -> Result<Self, ConfigError> {
        let costs = config.cost_model()?;
        let matcher = config.fuzzy_matcher()?;
        Ok(Self {
            config,
            costs,
            matcher,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn costs(&self) -> CostModel {
        self.costs
    }

    pub fn matcher(&self) -> FuzzyMatcher {
        self.matcher
    }

    pub fn limits(&self) -> &RequestLimits {
        &self.config.limits
    }
}

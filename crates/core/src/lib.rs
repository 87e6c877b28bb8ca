pub mod catalog;
pub mod config;
pub mod distance;
pub mod matcher;

pub use catalog::{
    search_compatible_member, IdentifierSource, MemberMatch, ProgramUnit, UnitCatalog,
};
pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, ServerConfig,
};
pub use distance::{
    CostModel, CostWeights, DamerauLevenshtein, DistanceError, Levenshtein, SimilarityReport,
};
pub use matcher::{
    require, require_all, FuzzyMatcher, MatchError, MatchOutcome, MatcherConfig, RequestLimits,
    ScoredMatch, SelectionPolicy, SimilarityPolicy, DEFAULT_THRESHOLD,
};

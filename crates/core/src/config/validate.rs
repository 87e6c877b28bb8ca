use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - Cost weights satisfy 2 * transpose >= insert + delete
/// - Matcher threshold lies within [0, 1]
/// - Request limits are non-zero
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    config.cost_model()?;
    config.fuzzy_matcher()?;

    if config.limits.max_candidates == 0 {
        return Err(ConfigError::ValidationError(
            "limits.max_candidates cannot be 0".to_string(),
        ));
    }
    if config.limits.max_string_len == 0 {
        return Err(ConfigError::ValidationError(
            "limits.max_string_len cannot be 0".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;
    use crate::distance::CostWeights;
    use crate::matcher::{MatcherConfig, RequestLimits};
    use std::net::IpAddr;

    #[test]
    fn test_validate_valid_config() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_port_zero_fails() {
        let config = Config {
            server: ServerConfig {
                host: "0.0.0.0".parse::<IpAddr>().unwrap(),
                port: 0,
            },
            ..Default::default()
        };
        let result = validate_config(&config);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_validate_invalid_costs_fails() {
        let config = Config {
            costs: CostWeights {
                delete: 1,
                insert: 1,
                replace: 1,
                transpose: 0,
            },
            ..Default::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("transpose"));
    }

    #[test]
    fn test_validate_threshold_out_of_range_fails() {
        let config = Config {
            matcher: MatcherConfig {
                threshold: -0.5,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_validate_zero_limits_fail() {
        let config = Config {
            limits: RequestLimits {
                max_candidates: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(validate_config(&config).is_err());

        let config = Config {
            limits: RequestLimits {
                max_string_len: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(validate_config(&config).is_err());
    }
}

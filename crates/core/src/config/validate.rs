use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - Minimum resolution is not 0
/// - Reason messages are not blank
/// - Token lists are not empty
/// - Enrichment URL (if any) is http(s)
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    // Server validation
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    // Policy validation
    if config.policy.min_resolution_p == 0 {
        return Err(ConfigError::ValidationError(
            "policy.min_resolution_p cannot be 0".to_string(),
        ));
    }
    if config.policy.reason_naming.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "policy.reason_naming cannot be empty".to_string(),
        ));
    }
    if config.policy.reason_objectionable.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "policy.reason_objectionable cannot be empty".to_string(),
        ));
    }

    // Token lists
    if config.tokens.banned_quality.is_empty() {
        return Err(ConfigError::ValidationError(
            "tokens.banned_quality cannot be empty".to_string(),
        ));
    }
    if config.tokens.objectionable.is_empty() {
        return Err(ConfigError::ValidationError(
            "tokens.objectionable cannot be empty".to_string(),
        ));
    }

    if let Some(enrichment) = &config.enrichment {
        if !(enrichment.url.starts_with("http://") || enrichment.url.starts_with("https://")) {
            return Err(ConfigError::ValidationError(format!(
                "enrichment.url must start with http:// or https://, got '{}'",
                enrichment.url
            )));
        }
    }

    Ok(())
}

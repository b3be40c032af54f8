use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Location section exists (enforced by serde)
/// - Location identifiers are non-empty
/// - Server port is not 0
/// - 10bis URL is non-empty and the timeout is positive
/// - Cache TTL is positive when the cache is enabled
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    // Server validation
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    // Location validation
    if config.location.user_id.is_empty() {
        return Err(ConfigError::ValidationError(
            "location.user_id cannot be empty".to_string(),
        ));
    }
    if config.location.city_id.is_empty() {
        return Err(ConfigError::ValidationError(
            "location.city_id cannot be empty".to_string(),
        ));
    }
    if config.location.street_id.is_empty() {
        return Err(ConfigError::ValidationError(
            "location.street_id cannot be empty".to_string(),
        ));
    }

    // 10bis client validation
    if config.tenbis.url.is_empty() {
        return Err(ConfigError::ValidationError(
            "tenbis.url cannot be empty".to_string(),
        ));
    }
    if config.tenbis.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "tenbis.timeout_secs cannot be 0".to_string(),
        ));
    }

    // Cache validation
    if config.cache.enabled && config.cache.ttl_hours == 0 {
        return Err(ConfigError::ValidationError(
            "cache.ttl_hours cannot be 0 when the cache is enabled".to_string(),
        ));
    }

    Ok(())
}

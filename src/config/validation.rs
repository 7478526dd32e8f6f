use crate::config::types::{Config, CrawlerConfig, InputConfig, OutputConfig, UserAgentConfig};
use crate::ConfigError;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawler_config(&config.crawler)?;
    validate_user_agent_config(&config.user_agent)?;
    validate_input_config(&config.input)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    if config.interactive_cap < 1 {
        return Err(ConfigError::Validation(format!(
            "interactive_cap must be >= 1, got {}",
            config.interactive_cap
        )));
    }

    if config.file_cap < 1 {
        return Err(ConfigError::Validation(format!(
            "file_cap must be >= 1, got {}",
            config.file_cap
        )));
    }

    if config.connect_timeout_ms < 100 || config.connect_timeout_ms > 60_000 {
        return Err(ConfigError::Validation(format!(
            "connect_timeout_ms must be between 100 and 60000, got {}ms",
            config.connect_timeout_ms
        )));
    }

    if let Some(request_timeout) = config.request_timeout_ms {
        if request_timeout < config.connect_timeout_ms {
            return Err(ConfigError::Validation(format!(
                "request_timeout_ms ({}ms) must not be shorter than connect_timeout_ms ({}ms)",
                request_timeout, config.connect_timeout_ms
            )));
        }
    }

    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    if config.value.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user agent cannot be empty".to_string(),
        ));
    }

    // Header values cannot carry control characters
    if config.value.chars().any(|c| c.is_control()) {
        return Err(ConfigError::Validation(format!(
            "user agent must not contain control characters, got '{}'",
            config.value.escape_debug()
        )));
    }

    Ok(())
}

fn validate_input_config(config: &InputConfig) -> Result<(), ConfigError> {
    if config.seed_path.is_empty() {
        return Err(ConfigError::Validation(
            "seed_path cannot be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.traversed_path.is_empty() {
        return Err(ConfigError::Validation(
            "traversed_path cannot be empty".to_string(),
        ));
    }
    Ok(())
}

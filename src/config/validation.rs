use crate::config::types::{ApiConfig, Config, FormConfig};
use crate::ConfigError;
use std::collections::HashSet;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_api_config(&config.api)?;
    validate_form_config(&config.form)?;
    Ok(())
}

/// Validates the analysis service settings
fn validate_api_config(config: &ApiConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base-url: {}", e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "base-url '{}' must use http or https",
            config.base_url
        )));
    }

    if config.timeout_secs < 1 || config.timeout_secs > 300 {
        return Err(ConfigError::Validation(format!(
            "timeout-secs must be between 1 and 300, got {}",
            config.timeout_secs
        )));
    }

    Ok(())
}

/// Validates the user-agent catalog and its default selection
fn validate_form_config(config: &FormConfig) -> Result<(), ConfigError> {
    if config.user_agents.is_empty() {
        return Err(ConfigError::Validation(
            "user-agents cannot be empty".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for agent in &config.user_agents {
        if agent.trim().is_empty() {
            return Err(ConfigError::Validation(
                "user-agents cannot contain blank entries".to_string(),
            ));
        }
        if !seen.insert(agent.as_str()) {
            return Err(ConfigError::Validation(format!(
                "Duplicate user-agent option '{}'",
                agent
            )));
        }
    }

    for agent in &config.default_user_agents {
        if !seen.contains(agent.as_str()) {
            return Err(ConfigError::Validation(format!(
                "Default user-agent '{}' is not one of the user-agents options",
                agent
            )));
        }
    }

    Ok(())
}

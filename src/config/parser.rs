use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigResult;
use sha2::{Digest, Sha256};
use std::path::Path;

/// Reads, parses and validates a checker configuration file
///
/// Sections left out of the file keep their defaults, so an empty file
/// behaves like running without `--config`.
pub fn load_config(path: &Path) -> ConfigResult<Config> {
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

/// Hex SHA-256 of a configuration file, logged at startup
pub fn compute_config_hash(path: &Path) -> ConfigResult<String> {
    let content = std::fs::read_to_string(path)?;
    Ok(hash_content(&content))
}

/// Loads a configuration together with the hash of the exact bytes parsed
///
/// The file is read once, so the hash always describes the configuration
/// that was actually loaded.
pub fn load_config_with_hash(path: &Path) -> ConfigResult<(Config, String)> {
    let content = std::fs::read_to_string(path)?;
    let config = parse_config(&content)?;
    Ok((config, hash_content(&content)))
}

/// Resolves the CLI's optional `--config` argument
///
/// # Returns
///
/// * `Ok((config, Some(hash)))` - A file was given and loaded
/// * `Ok((Config::default(), None))` - No file was given
/// * `Err(ConfigError)` - The given file could not be loaded
pub fn load_config_or_default(path: Option<&Path>) -> ConfigResult<(Config, Option<String>)> {
    match path {
        Some(path) => {
            let (config, hash) = load_config_with_hash(path)?;
            Ok((config, Some(hash)))
        }
        None => Ok((Config::default(), None)),
    }
}

fn parse_config(content: &str) -> ConfigResult<Config> {
    let config: Config = toml::from_str(content)?;
    validate(&config)?;
    Ok(config)
}

fn hash_content(content: &str) -> String {
    hex::encode(Sha256::digest(content.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConfigError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_valid_config() {
        let config_content = r#"
[api]
base-url = "https://checker.example.com"
timeout-secs = 15

[form]
user-agents = ["*", "Googlebot", "Bingbot"]
default-user-agents = ["Googlebot"]
"#;

        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.api.base_url, "https://checker.example.com");
        assert_eq!(config.api.timeout_secs, 15);
        assert_eq!(config.form.user_agents.len(), 3);
        assert_eq!(config.form.default_user_agents, vec!["Googlebot"]);
    }

    #[test]
    fn test_load_empty_config_uses_defaults() {
        let file = create_temp_config("");
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.api.base_url, crate::config::DEFAULT_BASE_URL);
        assert_eq!(config.api.timeout_secs, 30);
        assert!(config.form.user_agents.contains(&"*".to_string()));
    }

    #[test]
    fn test_load_config_with_invalid_path() {
        let result = load_config(Path::new("/nonexistent/checker.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_config_with_invalid_toml() {
        let file = create_temp_config("this is not valid TOML {{{");
        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_config_with_validation_error() {
        let config_content = r#"
[api]
timeout-secs = 0
"#;

        let file = create_temp_config(config_content);
        let result = load_config(file.path());
        assert!(matches!(result.unwrap_err(), ConfigError::Validation(_)));
    }

    #[test]
    fn test_compute_config_hash() {
        let file = create_temp_config("test content");

        let hash1 = compute_config_hash(file.path()).unwrap();
        let hash2 = compute_config_hash(file.path()).unwrap();

        assert_eq!(hash1, hash2);
        assert_eq!(hash1.len(), 64);
    }

    #[test]
    fn test_load_with_hash_matches_file_hash() {
        let file = create_temp_config("[api]\ntimeout-secs = 12\n");

        let (config, hash) = load_config_with_hash(file.path()).unwrap();

        assert_eq!(config.api.timeout_secs, 12);
        assert_eq!(hash, compute_config_hash(file.path()).unwrap());
    }

    #[test]
    fn test_load_or_default_without_path() {
        let (config, hash) = load_config_or_default(None).unwrap();

        assert!(hash.is_none());
        assert_eq!(config.api.base_url, crate::config::DEFAULT_BASE_URL);
    }

    #[test]
    fn test_load_or_default_with_path() {
        let file = create_temp_config("[api]\nbase-url = \"https://checker.example.com\"\n");

        let (config, hash) = load_config_or_default(Some(file.path())).unwrap();

        assert_eq!(config.api.base_url, "https://checker.example.com");
        assert_eq!(hash.map(|h| h.len()), Some(64));

        let result = load_config_or_default(Some(Path::new("/nonexistent/checker.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_different_content_different_hash() {
        let file1 = create_temp_config("content 1");
        let file2 = create_temp_config("content 2");

        let hash1 = compute_config_hash(file1.path()).unwrap();
        let hash2 = compute_config_hash(file2.path()).unwrap();

        assert_ne!(hash1, hash2);
    }
}

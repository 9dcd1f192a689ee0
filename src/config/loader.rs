//! Configuration loading from disk.

use std::path::Path;

use thiserror::Error;

use crate::config::schema::GatewayConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Failure to produce a usable configuration from a file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// The file parsed but one or more fields violate the schema's rules.
    /// All violations are carried, not just the first.
    #[error("invalid configuration: {}", join_violations(.0))]
    Validation(Vec<ValidationError>),
}

fn join_violations(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<GatewayConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: GatewayConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn write_temp(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_loads_and_validates_file() {
        let path = write_temp(
            "geo-gateway-loader-ok.toml",
            "[listener]\nbind_address = \"127.0.0.1:6001\"\n",
        );
        let config = load_config(&path).unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:6001");
        // Unspecified sections fall back to defaults
        assert_eq!(config.search.limit, 5);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_config(Path::new("/nonexistent/geo-gateway.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let path = write_temp("geo-gateway-loader-bad.toml", "listener = ");
        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_all_violations_appear_in_message() {
        let path = write_temp(
            "geo-gateway-loader-invalid.toml",
            "[upstream]\nsearch_timeout_secs = 0\nroute_timeout_secs = 0\n",
        );
        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        let message = err.to_string();
        assert!(message.contains("upstream.search_timeout_secs"));
        assert!(message.contains("upstream.route_timeout_secs"));
    }
}

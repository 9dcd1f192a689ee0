//! Configuration validation.
//!
//! Semantic checks on top of serde's syntactic ones. Validation is a pure
//! function over the config and returns all violations, not just the first.

use reqwest::header::HeaderValue;
use url::Url;

use crate::config::schema::GatewayConfig;

/// A single validation failure, naming the offending field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn check_base_url(errors: &mut Vec<ValidationError>, field: &'static str, value: &str) {
    match Url::parse(value) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(url) => errors.push(ValidationError {
            field,
            message: format!("unsupported scheme '{}'", url.scheme()),
        }),
        Err(e) => errors.push(ValidationError {
            field,
            message: format!("not a valid URL: {}", e),
        }),
    }
}

/// Validate a loaded configuration.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.is_empty() {
        errors.push(ValidationError {
            field: "listener.bind_address",
            message: "must not be empty".to_string(),
        });
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError {
            field: "timeouts.request_secs",
            message: "must be greater than zero".to_string(),
        });
    }

    check_base_url(
        &mut errors,
        "upstream.search_base_url",
        &config.upstream.search_base_url,
    );
    check_base_url(
        &mut errors,
        "upstream.route_base_url",
        &config.upstream.route_base_url,
    );

    if config.upstream.search_timeout_secs == 0 {
        errors.push(ValidationError {
            field: "upstream.search_timeout_secs",
            message: "must be greater than zero".to_string(),
        });
    }
    if config.upstream.route_timeout_secs == 0 {
        errors.push(ValidationError {
            field: "upstream.route_timeout_secs",
            message: "must be greater than zero".to_string(),
        });
    }

    if config.upstream.user_agent.is_empty() {
        errors.push(ValidationError {
            field: "upstream.user_agent",
            message: "must not be empty".to_string(),
        });
    } else if HeaderValue::from_str(&config.upstream.user_agent).is_err() {
        errors.push(ValidationError {
            field: "upstream.user_agent",
            message: "not a valid header value".to_string(),
        });
    }

    if config.search.limit == 0 || config.search.limit > 50 {
        errors.push(ValidationError {
            field: "search.limit",
            message: "must be between 1 and 50".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

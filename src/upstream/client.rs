//! Upstream HTTP client with timeout and failure classification.
//!
//! # Responsibilities
//! - Perform a single bounded GET against an upstream service
//! - Send the fixed identifying header on every call
//! - Classify failures into the gateway taxonomy
//!
//! One attempt per request, no retry. Certificate verification stays on
//! (reqwest default). The inner client pools connections, which is safe here:
//! the pool carries no request state.

use std::time::Duration;

use reqwest::header::{HeaderName, HeaderValue, USER_AGENT};
use serde_json::Value;

use crate::config::schema::UpstreamConfig;
use crate::http::error::GatewayError;

/// Shared client for both upstream services.
#[derive(Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
}

impl UpstreamClient {
    /// Create a new upstream client from configuration.
    pub fn new(config: &UpstreamConfig) -> reqwest::Result<Self> {
        // Config validation rejects header-unsafe values up front; this
        // fallback only fires for configs built programmatically.
        let user_agent = HeaderValue::from_str(&config.user_agent).unwrap_or_else(|_| {
            tracing::warn!(
                user_agent = %config.user_agent,
                "Configured user agent is not a valid header value, using built-in default"
            );
            HeaderValue::from_static("geo-gateway/0.1")
        });

        let http = reqwest::Client::builder()
            .default_headers(
                [(USER_AGENT, user_agent)]
                    .into_iter()
                    .collect::<reqwest::header::HeaderMap>(),
            )
            .build()?;

        Ok(Self { http })
    }

    /// Perform one bounded GET and parse the body as JSON.
    ///
    /// `service` names the upstream in logs and client-facing messages
    /// ("search service" / "routing service").
    pub async fn get_json(
        &self,
        service: &'static str,
        url: &str,
        query: &[(&str, String)],
        headers: &[(HeaderName, String)],
        timeout: Duration,
    ) -> Result<Value, GatewayError> {
        let mut request = self.http.get(url).query(query).timeout(timeout);
        for (name, value) in headers {
            request = request.header(name.clone(), value.as_str());
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                tracing::error!(service, url, "Upstream timed out");
                GatewayError::UpstreamTimeout(service)
            } else {
                tracing::error!(service, url, error = %e, "Upstream unreachable");
                GatewayError::UpstreamConnection(service)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(service, url, status = %status, "Upstream returned non-success status");
            return Err(GatewayError::UpstreamConnection(service));
        }

        // The per-request timeout also covers body read, so a stall here is
        // still a timeout rather than a decode failure.
        response.json().await.map_err(|e| {
            if e.is_timeout() {
                tracing::error!(service, url, "Upstream timed out while sending body");
                GatewayError::UpstreamTimeout(service)
            } else {
                tracing::error!(service, url, error = %e, "Upstream body is not valid JSON");
                GatewayError::Internal
            }
        })
    }
}

impl std::fmt::Debug for UpstreamClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamClient").finish_non_exhaustive()
    }
}

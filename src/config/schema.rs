//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the gateway.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the gateway.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GatewayConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Upstream service endpoints and per-call bounds.
    pub upstream: UpstreamConfig,

    /// Place-search parameter defaults.
    pub search: SearchConfig,

    /// Static file serving for the client page.
    pub static_files: StaticFilesConfig,

    /// Cross-origin settings for browser clients.
    pub cors: CorsConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:5001").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:5001".to_string(),
        }
    }
}

/// Timeout configuration for inbound requests.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Whole-request timeout in seconds, enforced by middleware. Must cover
    /// the longest upstream bound plus local processing.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Upstream service configuration.
///
/// Each proxy call is a single attempt bounded by its service's timeout;
/// there is no retry.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Base URL of the place-search service.
    pub search_base_url: String,

    /// Base URL of the route-computation service.
    pub route_base_url: String,

    /// Bound on a search call, in seconds.
    pub search_timeout_secs: u64,

    /// Bound on a routing call, in seconds.
    pub route_timeout_secs: u64,

    /// Identifying header sent on every outbound call. Public OSM services
    /// require a contactable user agent.
    pub user_agent: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            search_base_url: "https://nominatim.openstreetmap.org".to_string(),
            route_base_url: "https://router.project-osrm.org".to_string(),
            search_timeout_secs: 10,
            route_timeout_secs: 15,
            user_agent: "TuAppNavegacion/1.0 (contacto@tudominio.com)".to_string(),
        }
    }
}

/// Fixed parameters applied to every place search.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Country restriction passed to the search upstream.
    pub country_codes: String,

    /// Maximum number of records requested per search.
    pub limit: u32,

    /// Preferred result language; also drives the Accept-Language header.
    pub language: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            country_codes: "mx".to_string(),
            limit: 5,
            language: "es-MX".to_string(),
        }
    }
}

/// Static page delivery for the bundled client.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StaticFilesConfig {
    /// Serve files for paths not matched by an API route.
    pub enabled: bool,

    /// Directory to serve from.
    pub dir: String,
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            dir: "static".to_string(),
        }
    }
}

/// Cross-origin resource sharing.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Attach permissive CORS headers so browser clients on other origins
    /// can call the gateway directly.
    pub enabled: bool,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

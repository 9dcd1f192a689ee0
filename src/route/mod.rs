//! Route computation proxy.
//!
//! Validates coordinates and profile, forwards the request to the routing
//! upstream, and distinguishes transport failures from the upstream's own
//! logical failures: a 2xx response whose embedded `code` field is not `"Ok"`
//! becomes a 500 carrying the upstream's message.

pub mod coords;
pub mod profile;

use std::time::Duration;

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::Value;

use crate::http::error::GatewayError;
use crate::http::server::AppState;

pub use coords::parse_coords;
pub use profile::RouteProfile;

const SERVICE: &str = "routing service";

/// Query parameters accepted by `/osrm-proxy`.
///
/// The flag fields are boolean-like strings: only the literal `"true"`
/// enables them, anything else (including absence) is false.
#[derive(Debug, Deserialize)]
pub struct RouteParams {
    pub coords: Option<String>,
    #[serde(default = "default_profile")]
    pub profile: String,
    #[serde(default)]
    pub avoid_tolls: String,
    #[serde(default)]
    pub alternatives: String,
}

fn default_profile() -> String {
    "driving".to_string()
}

/// GET `/osrm-proxy?coords=<lon,lat;...>&profile=...&avoid_tolls=...&alternatives=...`
pub async fn route_proxy(
    State(state): State<AppState>,
    Query(params): Query<RouteParams>,
) -> Result<Json<Value>, GatewayError> {
    let coords = match params.coords {
        Some(c) if !c.is_empty() => c,
        _ => {
            tracing::warn!("Route request without coordinates");
            return Err(GatewayError::MissingParameter("Missing coordinates"));
        }
    };

    // Validation only; the raw string is forwarded upstream untouched so the
    // coordinates never go through a float round-trip.
    parse_coords(&coords).inspect_err(|_| {
        tracing::warn!(coords = %coords, "Invalid coordinate format");
    })?;

    let profile: RouteProfile = params.profile.parse().inspect_err(|_| {
        tracing::warn!(profile = %params.profile, "Invalid transport profile");
    })?;

    let avoid_tolls = params.avoid_tolls == "true";
    let alternatives = params.alternatives == "true";

    let config = &state.config;
    let url = format!(
        "{}/route/v1/{}/{}",
        config.upstream.route_base_url.trim_end_matches('/'),
        profile,
        coords
    );

    let mut upstream_params = vec![
        ("overview", "full".to_string()),
        ("geometries", "geojson".to_string()),
        ("steps", "true".to_string()),
        ("annotations", "true".to_string()),
    ];
    if alternatives {
        upstream_params.push(("alternatives", "true".to_string()));
    }
    if avoid_tolls {
        upstream_params.push(("exclude", "toll".to_string()));
    }

    tracing::info!(url = %url, profile = %profile, alternatives, avoid_tolls, "Requesting route");

    let data = state
        .upstream
        .get_json(
            SERVICE,
            &url,
            &upstream_params,
            &[],
            Duration::from_secs(config.upstream.route_timeout_secs),
        )
        .await?;

    match data.get("code").and_then(Value::as_str) {
        Some("Ok") => {
            let route_count = data
                .get("routes")
                .and_then(Value::as_array)
                .map_or(0, Vec::len);
            tracing::info!(routes = route_count, "Route computed");
            Ok(Json(data))
        }
        _ => {
            let message = data
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("Unknown routing service error")
                .to_string();
            tracing::error!(message = %message, "Routing upstream reported failure");
            Err(GatewayError::UpstreamLogic(message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_default_to_driving_with_flags_off() {
        let params: RouteParams = serde_json::from_str("{}").unwrap();
        assert!(params.coords.is_none());
        assert_eq!(params.profile, "driving");
        // Flags are boolean-like strings; empty means off.
        assert_ne!(params.avoid_tolls, "true");
        assert_ne!(params.alternatives, "true");
    }

    #[test]
    fn test_only_literal_true_enables_flags() {
        let params: RouteParams =
            serde_json::from_str(r#"{"avoid_tolls": "TRUE", "alternatives": "1"}"#).unwrap();
        assert_ne!(params.avoid_tolls, "true");
        assert_ne!(params.alternatives, "true");

        let params: RouteParams =
            serde_json::from_str(r#"{"avoid_tolls": "true", "alternatives": "true"}"#).unwrap();
        assert_eq!(params.avoid_tolls, "true");
        assert_eq!(params.alternatives, "true");
    }
}

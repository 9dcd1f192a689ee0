//! Place-name search proxy.
//!
//! Validates the free-text query, forwards it to the search upstream with the
//! fixed country/limit/language parameters, and passes the result array back
//! verbatim. An empty result set is surfaced as 404, not as an empty success;
//! existing clients depend on that distinction.

use std::time::Duration;

use axum::extract::{Query, State};
use axum::Json;
use reqwest::header::ACCEPT_LANGUAGE;
use serde::Deserialize;
use serde_json::Value;

use crate::http::error::GatewayError;
use crate::http::server::AppState;

const SERVICE: &str = "search service";

/// Query parameters accepted by `/nominatim-proxy`.
#[derive(Debug, Deserialize)]
pub struct GeocodeParams {
    pub q: Option<String>,
}

/// GET `/nominatim-proxy?q=<text>`
pub async fn geocode_proxy(
    State(state): State<AppState>,
    Query(params): Query<GeocodeParams>,
) -> Result<Json<Value>, GatewayError> {
    let query = params.q.unwrap_or_default();
    if query.is_empty() {
        tracing::warn!("Empty search received");
        return Err(GatewayError::MissingParameter("Missing search parameter"));
    }

    let config = &state.config;
    let url = format!(
        "{}/search",
        config.upstream.search_base_url.trim_end_matches('/')
    );
    let upstream_params = [
        ("q", query.clone()),
        ("format", "json".to_string()),
        ("countrycodes", config.search.country_codes.clone()),
        ("limit", config.search.limit.to_string()),
        ("accept-language", config.search.language.clone()),
    ];
    let headers = [(
        ACCEPT_LANGUAGE,
        format!("{},es", config.search.language),
    )];

    tracing::info!(query = %query, "Requesting place search");

    let data = state
        .upstream
        .get_json(
            SERVICE,
            &url,
            &upstream_params,
            &headers,
            Duration::from_secs(config.upstream.search_timeout_secs),
        )
        .await?;

    match data.as_array() {
        Some(results) if results.is_empty() => {
            tracing::warn!(query = %query, "No results found");
            Err(GatewayError::NoResults)
        }
        Some(results) => {
            tracing::info!(query = %query, count = results.len(), "Search succeeded");
            Ok(Json(data))
        }
        None => {
            // The search upstream always answers with a JSON array; anything
            // else means the contract is broken on their side.
            tracing::error!(query = %query, "Search upstream returned a non-array payload");
            Err(GatewayError::Internal)
        }
    }
}

//! Gateway error taxonomy and response envelope.
//!
//! Every failure a handler can produce is one of these variants; each maps to
//! a fixed HTTP status and is rendered as `{"error": "<message>"}`. Client
//! messages stay generic — internal detail (transport errors, upstream URLs)
//! is logged where the failure is classified, never serialized into the
//! envelope. The one exception is [`GatewayError::UpstreamLogic`], which
//! carries the routing upstream's own already-public message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Errors surfaced to gateway clients.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// A required request parameter is absent or empty.
    #[error("{0}")]
    MissingParameter(&'static str),

    /// The coordinate string could not be parsed.
    #[error("Invalid coordinate format")]
    InvalidCoordinateFormat,

    /// The requested transport profile is not supported.
    #[error("Invalid transport profile")]
    InvalidProfile,

    /// The search succeeded but returned zero records.
    #[error("No results found")]
    NoResults,

    /// The upstream call exceeded its bound.
    #[error("The {0} did not respond in time")]
    UpstreamTimeout(&'static str),

    /// Transport failure, or the upstream answered with a non-success status.
    #[error("Failed to reach the {0}")]
    UpstreamConnection(&'static str),

    /// The upstream answered 2xx but its embedded status field reported
    /// failure. Carries the upstream's own message.
    #[error("{0}")]
    UpstreamLogic(String),

    /// Anything unclassified. The message is fixed; detail goes to the log.
    #[error("Internal server error")]
    Internal,
}

impl GatewayError {
    /// HTTP status this error is surfaced with.
    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::MissingParameter(_)
            | GatewayError::InvalidCoordinateFormat
            | GatewayError::InvalidProfile => StatusCode::BAD_REQUEST,
            GatewayError::NoResults => StatusCode::NOT_FOUND,
            GatewayError::UpstreamTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
            GatewayError::UpstreamConnection(_) => StatusCode::BAD_GATEWAY,
            GatewayError::UpstreamLogic(_) | GatewayError::Internal => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Stable kind label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            GatewayError::MissingParameter(_) => "missing_parameter",
            GatewayError::InvalidCoordinateFormat => "invalid_coordinate_format",
            GatewayError::InvalidProfile => "invalid_profile",
            GatewayError::NoResults => "no_results",
            GatewayError::UpstreamTimeout(_) => "upstream_timeout",
            GatewayError::UpstreamConnection(_) => "upstream_connection",
            GatewayError::UpstreamLogic(_) => "upstream_logic",
            GatewayError::Internal => "internal",
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(kind = self.kind(), status = %status, "Request failed: {}", self);
        } else {
            tracing::warn!(kind = self.kind(), status = %status, "Request rejected: {}", self);
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

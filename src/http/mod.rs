//! HTTP surface of the gateway.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, routing)
//!     → geocode / route handlers (validate, build upstream params)
//!     → upstream client (single bounded call)
//!     → error.rs (envelope mapping on failure)
//!     → Send to client
//! ```

pub mod error;
pub mod server;

pub use error::GatewayError;
pub use server::{AppState, HttpServer};

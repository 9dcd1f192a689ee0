//! Geospatial API Gateway
//!
//! A stateless backend gateway between a client navigation app and two public
//! geospatial services: a place-name search upstream (Nominatim-style) and a
//! route-computation upstream (OSRM-style).
//!
//! # Architecture Overview
//!
//! ```text
//!                        ┌───────────────────────────────────────────────┐
//!                        │                  GEO GATEWAY                   │
//!                        │                                                │
//!   Client Request       │  ┌─────────┐     ┌──────────────────────┐     │
//!   ─────────────────────┼─▶│  http   │────▶│ geocode / route      │     │
//!                        │  │ server  │     │ proxy handlers       │     │
//!                        │  └─────────┘     └──────────┬───────────┘     │
//!                        │                             │                  │
//!                        │                             ▼                  │
//!                        │                   ┌──────────────────┐        │      Search /
//!                        │                   │ upstream client  │────────┼───▶  Routing
//!                        │                   │  (bounded call)  │◀───────┼────  upstream
//!                        │                   └────────┬─────────┘        │
//!   Client Response      │  ┌──────────┐              │                  │
//!   ◀────────────────────┼──│ error /  │◀─────────────┘                  │
//!                        │  │ envelope │                                  │
//!                        │  └──────────┘                                  │
//!                        └───────────────────────────────────────────────┘
//! ```
//!
//! Each request is validated, forwarded once with an explicit timeout, and
//! mapped into a uniform JSON envelope. The gateway holds no cross-request
//! state: no cache, no retries, no history.

// Core subsystems
pub mod config;
pub mod http;

// Proxy endpoints
pub mod geocode;
pub mod route;

// Outbound calls
pub mod upstream;

pub use config::schema::GatewayConfig;
pub use http::error::GatewayError;
pub use http::HttpServer;

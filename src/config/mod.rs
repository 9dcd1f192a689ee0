//! Configuration management.

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::{
    CorsConfig, GatewayConfig, ListenerConfig, SearchConfig, StaticFilesConfig, TimeoutConfig,
    UpstreamConfig,
};

//! Outbound calls to the geospatial upstreams.

pub mod client;

pub use client::UpstreamClient;

//! # Suggest Infrastructure
//!
//! Infrastructure implementations of the core ports.
//!
//! This crate contains:
//! - HTTP client with retry and backoff
//! - `Fetcher` adapters for URLs and local files
//! - Configuration loading from the environment and JSON/TOML files
//! - Tracing subscriber setup
//!
//! ## Architecture
//! - Implements traits defined in `suggest-core`
//! - Converts third-party errors into `SuggestError` at the boundary
//! - Contains all "impure" code (network, filesystem, process environment)

pub mod config;
pub mod errors;
pub mod fetch;
pub mod http;
pub mod observability;

// Re-export commonly used items
pub use errors::InfraError;
pub use fetch::{FileFetcher, HttpFetcher, RoutingFetcher};
pub use http::{HttpClient, HttpClientBuilder};
pub use observability::init_tracing;

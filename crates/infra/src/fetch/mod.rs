//! `Fetcher` adapters
//!
//! - [`HttpFetcher`] GETs identifiers that are URLs
//! - [`FileFetcher`] reads identifiers that are paths
//! - [`RoutingFetcher`] picks one of the two per identifier

mod file;
mod http;
mod routing;

pub use file::FileFetcher;
pub use http::HttpFetcher;
pub use routing::RoutingFetcher;

//! Lazy, single-flight loading of dataset sources

pub mod manager;
pub mod ports;

pub use manager::{payload_cache, Acquired, PayloadCache, PendingLoad, SourceManager, SourceState};
pub use ports::Fetcher;

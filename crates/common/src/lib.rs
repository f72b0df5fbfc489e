//! Reusable building blocks shared across the suggest crates.
//!
//! # Feature Tiers
//!
//! Enable cargo features to opt into the tiers you need:
//! - `foundation`: collections (the hit-list trie)
//! - `runtime`: thread-safe cache and clock abstractions
//! - `observability`: trace-level events from runtime components

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

// Foundation tier
// -----------------------------------------------------------------
#[cfg(feature = "foundation")]
pub mod collections;

// Runtime tier
// --------------------------------------------------------------------
#[cfg(feature = "runtime")]
pub mod cache;
#[cfg(feature = "runtime")]
pub mod time;

#[cfg(feature = "runtime")]
pub use cache::{Cache, CacheConfig, CacheStats};
#[cfg(feature = "foundation")]
pub use collections::Trie;
#[cfg(feature = "runtime")]
pub use time::{Clock, MockClock, SystemClock};

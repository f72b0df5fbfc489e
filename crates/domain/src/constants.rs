//! Domain constants
//!
//! Centralized defaults shared by configuration, the source manager and the
//! command-line front end.

// Source defaults
pub const DEFAULT_SOURCE_IDENTIFIER: &str = "dataset/tz.json";
pub const DEFAULT_MAX_RESULTS: usize = 10;
pub const DEFAULT_CACHE_ENABLED: bool = true;

// Fetch defaults
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_FETCH_MAX_ATTEMPTS: u32 = 3;
pub const DEFAULT_FETCH_BACKOFF_MS: u64 = 200;
pub const DEFAULT_USER_AGENT: &str = concat!("suggest/", env!("CARGO_PKG_VERSION"));

// Payload cache defaults
pub const DEFAULT_PAYLOAD_CACHE_ENTRIES: usize = 16;

// Logging defaults
pub const DEFAULT_LOG_FILTER: &str = "info";

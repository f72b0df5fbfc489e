//! Time abstractions
//!
//! - **[`clock`]**: real and mock clocks for deterministic TTL testing

pub mod clock;

pub use clock::{Clock, MockClock, SystemClock};

//! # Suggest Domain
//!
//! Domain types for the suggestion engine.
//!
//! This crate contains:
//! - The [`Dataset`] and [`SourceDescriptor`] types
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants
//!
//! ## Architecture
//! - No dependencies on other suggest crates
//! - Pure data structures plus parsing and validation

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;

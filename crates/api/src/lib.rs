//! # Suggest CLI
//!
//! Composition root and command-line front end.
//!
//! This crate contains:
//! - Command-line definitions
//! - Application context (dependency injection)
//! - Command handlers producing printable output
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires the fetcher adapters into the source manager and service

pub mod cli;
pub mod commands;
pub mod context;
pub mod utils;

// Re-export for convenience
pub use cli::{Cli, Commands};
pub use commands::execute;
pub use context::AppContext;

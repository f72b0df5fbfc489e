//! # Suggest Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The [`Matcher`] answering substring and exact-match queries
//! - The [`Fetcher`] port implemented by infrastructure adapters
//! - The [`SourceManager`] loading each source once
//! - The [`SuggestionService`] facade
//!
//! ## Architecture Principles
//! - Only depends on `suggest-common` and `suggest-domain`
//! - No network or file code
//! - All I/O via the [`Fetcher`] trait

pub mod matching;
pub mod source;
pub mod suggestion;

pub use matching::Matcher;
pub use source::{Acquired, Fetcher, PayloadCache, SourceManager, SourceState};
pub use suggestion::SuggestionService;

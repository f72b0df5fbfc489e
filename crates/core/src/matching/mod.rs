//! Substring and exact-match queries over one dataset

pub mod matcher;

pub use matcher::{validate_max_results, validate_query, Matcher};

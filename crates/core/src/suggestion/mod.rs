//! Public facade consumed by presentation layers

pub mod service;

pub use service::SuggestionService;

//! Specialized data structures
//!
//! - **[`trie`]**: character trie with hit lists for prefix and substring
//!   search

pub mod trie;

pub use trie::{fold, fold_string, NodeId, SubstringHits, Trie, ROOT};

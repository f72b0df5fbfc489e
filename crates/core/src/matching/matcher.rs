//! Matcher - binds one dataset to its trie index

use std::collections::HashSet;

use suggest_common::collections::{fold_string, Trie, ROOT};
use suggest_domain::constants::DEFAULT_MAX_RESULTS;
use suggest_domain::{Dataset, Result, SuggestError};

/// Rejects queries that would match everything.
///
/// # Errors
/// Returns [`SuggestError::InvalidQuery`] for an empty query.
pub fn validate_query(query: &str) -> Result<()> {
    if query.is_empty() {
        return Err(SuggestError::InvalidQuery("query must not be empty".to_string()));
    }
    Ok(())
}

/// Rejects a zero result cap.
///
/// # Errors
/// Returns [`SuggestError::InvalidQuery`] when `max_results` is zero.
pub fn validate_max_results(max_results: usize) -> Result<()> {
    if max_results == 0 {
        return Err(SuggestError::InvalidQuery("max_results must be positive".to_string()));
    }
    Ok(())
}

/// Queryable unit combining a [`Dataset`] with its trie index.
///
/// Immutable after construction; lookups take `&self` and can run
/// concurrently from any number of callers.
#[derive(Debug, Clone)]
pub struct Matcher {
    dataset: Dataset,
    index: Trie,
    default_max_results: usize,
}

impl Matcher {
    /// Builds the trie index over `dataset`.
    pub fn new(dataset: Dataset) -> Self {
        let index = Trie::build(dataset.iter());
        Self { dataset, index, default_max_results: DEFAULT_MAX_RESULTS }
    }

    /// Sets the cap used when a caller omits `max_results`.
    pub fn with_default_max_results(mut self, max: usize) -> Self {
        self.default_max_results = max;
        self
    }

    /// Entries this matcher answers from.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Cap applied when a query omits `max_results`.
    pub fn default_max_results(&self) -> usize {
        self.default_max_results
    }

    /// Number of trie nodes, root included.
    pub fn index_size(&self) -> usize {
        self.index.node_count()
    }

    /// Entries containing `query` (case-insensitive), in breadth-first
    /// discovery order.
    ///
    /// Entries in `exclude` are skipped, duplicates are dropped, and at most
    /// `max_results` entries are returned (the matcher default when `None`).
    /// `Ok(None)` signals that nothing matched.
    ///
    /// # Errors
    /// Returns [`SuggestError::InvalidQuery`] for an empty query or a zero
    /// cap.
    pub fn get_matches(
        &self,
        query: &str,
        max_results: Option<usize>,
        exclude: &HashSet<String>,
    ) -> Result<Option<Vec<String>>> {
        validate_query(query)?;
        let max = max_results.unwrap_or(self.default_max_results);
        validate_max_results(max)?;

        let mut seen: HashSet<&str> = HashSet::new();
        let mut matches = Vec::new();

        for id in self.index.substring_hits(query) {
            let Some(entry) = self.dataset.get(id) else { continue };
            if exclude.contains(entry) || !seen.insert(entry) {
                continue;
            }
            matches.push(entry.to_string());
            if matches.len() >= max {
                break;
            }
        }

        Ok((!matches.is_empty()).then_some(matches))
    }

    /// The entry equal to `query` ignoring case, if any.
    ///
    /// The query is descended from the root; only entries in the landing
    /// node's hit list can be equal, and the first one in dataset order wins.
    ///
    /// # Errors
    /// Returns [`SuggestError::InvalidQuery`] for an empty query.
    pub fn get_exact_match(&self, query: &str) -> Result<Option<String>> {
        validate_query(query)?;
        let Some(node) = self.index.descend(ROOT, query) else {
            return Ok(None);
        };

        let folded = fold_string(query);
        Ok(self
            .index
            .hits(node)
            .iter()
            .filter_map(|&id| self.dataset.get(id))
            .find(|entry| fold_string(entry) == folded)
            .map(str::to_string))
    }
}

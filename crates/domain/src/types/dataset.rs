//! Immutable, sorted collection of entries backing one matcher

use serde::{Deserialize, Serialize};

use crate::errors::{Result, SuggestError};

/// An ordered, de-duplicated sequence of entries.
///
/// Entries are sorted ascending (case-sensitive, byte order) and exact
/// duplicates are dropped at construction. Indices are stable for the
/// lifetime of the value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Dataset {
    entries: Vec<String>,
}

impl Dataset {
    /// Builds a dataset from arbitrary entries.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut entries: Vec<String> = entries.into_iter().map(Into::into).collect();
        entries.sort();
        entries.dedup();
        Self { entries }
    }

    /// Parses a fetched payload, a JSON array of strings.
    ///
    /// # Errors
    /// Returns [`SuggestError::Parse`] naming `identifier` when the payload
    /// is not a JSON array of strings.
    pub fn parse(identifier: &str, payload: &str) -> Result<Self> {
        serde_json::from_str::<Vec<String>>(payload)
            .map(Self::from)
            .map_err(|e| SuggestError::parse(identifier, e.to_string()))
    }

    /// Entry at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    /// Entries in sorted, deduplicated order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Iterates the entries in index order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Number of distinct entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dataset has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<String>> for Dataset {
    fn from(entries: Vec<String>) -> Self {
        Self::from_entries(entries)
    }
}

impl From<Dataset> for Vec<String> {
    fn from(dataset: Dataset) -> Self {
        dataset.entries
    }
}

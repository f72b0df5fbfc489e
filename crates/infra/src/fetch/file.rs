use std::path::{Path, PathBuf};

use async_trait::async_trait;
use suggest_core::Fetcher;
use suggest_domain::Result;
use tracing::debug;

use crate::errors::InfraError;

/// Reads payloads from the local filesystem.
///
/// Relative identifiers resolve against the root directory when one is set,
/// otherwise against the working directory. A leading `file://` is ignored.
#[derive(Debug, Clone, Default)]
pub struct FileFetcher {
    root: Option<PathBuf>,
}

impl FileFetcher {
    /// Resolve relative identifiers against the working directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve relative identifiers against `root`.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: Some(root.into()) }
    }

    /// Directory relative identifiers resolve against, if set.
    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    /// Path that `identifier` will be read from.
    pub fn resolve(&self, identifier: &str) -> PathBuf {
        let path = Path::new(identifier.strip_prefix("file://").unwrap_or(identifier));
        match &self.root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path.to_path_buf(),
        }
    }
}

#[async_trait]
impl Fetcher for FileFetcher {
    async fn fetch(&self, identifier: &str) -> Result<String> {
        let path = self.resolve(identifier);
        debug!(identifier, path = %path.display(), "reading payload from file");

        let bytes =
            tokio::fs::read(&path).await.map_err(|err| InfraError::io(identifier, &err))?;
        String::from_utf8(bytes).map_err(|err| InfraError::utf8(identifier, &err).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_paths_join_the_root() {
        let fetcher = FileFetcher::with_root("/srv/data");
        assert_eq!(fetcher.resolve("dataset/tz.json"), PathBuf::from("/srv/data/dataset/tz.json"));
        assert_eq!(fetcher.resolve("/etc/tz.json"), PathBuf::from("/etc/tz.json"));
    }

    #[test]
    fn file_scheme_is_stripped() {
        let fetcher = FileFetcher::new();
        assert_eq!(fetcher.resolve("file:///tmp/tz.json"), PathBuf::from("/tmp/tz.json"));
        assert_eq!(fetcher.resolve("tz.json"), PathBuf::from("tz.json"));
    }
}

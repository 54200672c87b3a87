//! Configuration for building readers from files or other serde sources.
//!
//! This module provides:
//! - `ReaderConfig`: The ordered source list plus path resolution options

use std::path::PathBuf;

use serde::Deserialize;

/// Configuration for a [`MultiReader`](crate::MultiReader).
///
/// ```yaml
/// sources:
///   - header.txt
///   - "-"
///   - footer.txt
/// base_dir: /srv/data
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ReaderConfig {
    /// Source identifiers in read order; `"-"` is stdin. Empty means stdin only.
    #[serde(default)]
    pub sources: Vec<String>,
    /// Directory that relative file identifiers are resolved against
    #[serde(default)]
    pub base_dir: Option<PathBuf>,
}

impl ReaderConfig {
    /// Create a config for the given identifiers.
    pub fn new<I, S>(sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sources: sources.into_iter().map(Into::into).collect(),
            base_dir: None,
        }
    }

    /// Set the base directory for relative paths.
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(base_dir.into());
        self
    }

    /// Whether the resulting reader will consume stdin at some point.
    pub fn reads_stdin(&self) -> bool {
        self.sources.is_empty() || self.sources.iter().any(|s| s == crate::STDIN_ID)
    }
}

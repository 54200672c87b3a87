//! Standard implementations for files and stdin.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use super::{Source, SourceResolver};

/// Resolver that opens identifiers as filesystem paths.
#[derive(Debug, Clone, Default)]
pub struct FsResolver {
    base_dir: Option<PathBuf>,
}

impl FsResolver {
    /// Create a resolver that opens paths relative to the working directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver that opens relative paths under `base_dir`.
    ///
    /// Absolute identifiers are opened as-is.
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: Some(base_dir.into()),
        }
    }

    /// Get the base directory, if any.
    pub fn base_dir(&self) -> Option<&Path> {
        self.base_dir.as_deref()
    }

    /// Compute the path that `open` would use for `id`.
    pub fn resolve_path(&self, id: &str) -> PathBuf {
        match &self.base_dir {
            Some(base) => base.join(id),
            None => PathBuf::from(id),
        }
    }
}

impl SourceResolver for FsResolver {
    fn open(&self, id: &str) -> io::Result<Box<dyn Source>> {
        let file = File::open(self.resolve_path(id))?;
        Ok(Box::new(file))
    }
}

/// The process standard input as a boxed source.
pub fn stdin_source() -> Box<dyn Source> {
    Box::new(io::stdin())
}

//! Async implementations for files and stdin.

use std::io;
use std::path::PathBuf;

use async_trait::async_trait;

use super::{AsyncSource, AsyncSourceResolver, FsResolver};

/// Async resolver that opens identifiers as filesystem paths.
#[derive(Debug, Clone, Default)]
pub struct AsyncFsResolver {
    inner: FsResolver,
}

impl AsyncFsResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver that opens relative paths under `base_dir`.
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            inner: FsResolver::with_base_dir(base_dir),
        }
    }
}

#[async_trait]
impl AsyncSourceResolver for AsyncFsResolver {
    async fn open(&self, id: &str) -> io::Result<AsyncSource> {
        let file = tokio::fs::File::open(self.inner.resolve_path(id)).await?;
        Ok(Box::new(file))
    }
}

/// The process standard input as a boxed async source.
pub fn async_stdin_source() -> AsyncSource {
    Box::new(tokio::io::stdin())
}

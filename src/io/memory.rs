//! In-memory resolver for testing and embedding.

use std::collections::HashMap;
use std::io::{self, Cursor};
use std::sync::Arc;

use super::{Source, SourceResolver};

/// Resolver serving sources from in-memory buffers.
///
/// Every `open` yields a fresh cursor at the start of the buffer. Unknown
/// identifiers fail with `ErrorKind::NotFound`, like a missing file.
#[derive(Debug, Clone, Default)]
pub struct InMemoryResolver {
    entries: HashMap<String, Arc<Vec<u8>>>,
}

impl InMemoryResolver {
    /// Create an empty resolver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `data` under `id`, replacing any previous entry.
    pub fn insert(&mut self, id: impl Into<String>, data: impl Into<Vec<u8>>) {
        self.entries.insert(id.into(), Arc::new(data.into()));
    }

    /// Builder-style variant of [`insert`](Self::insert).
    pub fn with_entry(mut self, id: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        self.insert(id, data);
        self
    }

    /// Remove the entry for `id`, making it fail to open.
    pub fn remove(&mut self, id: &str) -> bool {
        self.entries.remove(id).is_some()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }
}

impl SourceResolver for InMemoryResolver {
    fn open(&self, id: &str) -> io::Result<Box<dyn Source>> {
        let data = self.entries.get(id).ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("no in-memory source '{id}'"))
        })?;
        Ok(Box::new(Cursor::new(data.as_ref().clone())))
    }
}

#[cfg(feature = "async")]
#[async_trait::async_trait]
impl super::AsyncSourceResolver for InMemoryResolver {
    async fn open(&self, id: &str) -> io::Result<super::AsyncSource> {
        let data = self.entries.get(id).ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("no in-memory source '{id}'"))
        })?;
        Ok(Box::new(Cursor::new(data.as_ref().clone())))
    }
}

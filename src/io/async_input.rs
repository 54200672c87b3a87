//! Async resolver trait definition.

use std::fmt::Debug;

use async_trait::async_trait;
use tokio::io::AsyncRead;

/// Boxed async stream produced by an [`AsyncSourceResolver`].
pub type AsyncSource = Box<dyn AsyncRead + Unpin + Send>;

/// Trait for asynchronously opening named sources.
#[async_trait]
pub trait AsyncSourceResolver: Send + Sync + Debug {
    /// Open the source named `id` for reading.
    async fn open(&self, id: &str) -> std::io::Result<AsyncSource>;
}

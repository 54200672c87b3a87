//! Async counterpart of [`MultiReader`](crate::MultiReader).

use std::collections::VecDeque;
use std::fmt;
use std::io;

use log::{debug, warn};
use tokio::io::AsyncReadExt;

use crate::error::{SourceError, Stage};
use crate::io::{AsyncFsResolver, AsyncSource, AsyncSourceResolver, async_stdin_source};
use crate::reader::{ReaderState, STDIN_ID};

/// Reads a list of named sources one after another over tokio streams.
///
/// Same contract as [`MultiReader`](crate::MultiReader): lazy in-order opening,
/// `Ok(0)` only once every source has been attempted, failing sources reported
/// once and skipped. Sources are still read strictly one at a time.
pub struct AsyncMultiReader {
    pending: VecDeque<String>,
    current: Option<(String, AsyncSource)>,
    resolver: Box<dyn AsyncSourceResolver>,
    stdin: Option<AsyncSource>,
}

impl AsyncMultiReader {
    /// Create a reader over filesystem paths and the process stdin.
    pub fn new<I, S>(sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_parts(sources, AsyncFsResolver::new(), async_stdin_source())
    }

    /// Create a reader with every collaborator injected.
    pub fn with_parts<I, S, R>(sources: I, resolver: R, stdin: AsyncSource) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        R: AsyncSourceResolver + 'static,
    {
        let mut pending: VecDeque<String> = sources.into_iter().map(Into::into).collect();
        if pending.is_empty() {
            pending.push_back(STDIN_ID.to_string());
        }

        Self {
            pending,
            current: None,
            resolver: Box::new(resolver),
            stdin: Some(stdin),
        }
    }

    pub fn current_source(&self) -> Option<&str> {
        self.current.as_ref().map(|(id, _)| id.as_str())
    }

    pub fn pending(&self) -> impl Iterator<Item = &str> + '_ {
        self.pending.iter().map(String::as_str)
    }

    pub fn state(&self) -> ReaderState {
        match (&self.current, self.pending.is_empty()) {
            (Some(_), _) => ReaderState::Open,
            (None, false) => ReaderState::Idle,
            (None, true) => ReaderState::Exhausted,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.state() == ReaderState::Exhausted
    }

    /// Read up to `buf.len()` bytes from the sequence.
    pub async fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }

        loop {
            let (id, mut stream) = match self.current.take() {
                Some(current) => current,
                None => {
                    let Some(id) = self.pending.pop_front() else {
                        return Ok(0);
                    };
                    let stream = self.open_next(&id).await?;
                    debug!("opened source '{}'", id);
                    (id, stream)
                }
            };

            match stream.read(buf).await {
                Ok(0) => {
                    debug!("released source '{}'", id);
                }
                Ok(n) => {
                    self.current = Some((id, stream));
                    return Ok(n);
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {
                    self.current = Some((id, stream));
                    return Err(e);
                }
                Err(e) => {
                    warn!("skipping source '{}': read failed: {}", id, e);
                    return Err(SourceError::new(Stage::Read, id, e).into());
                }
            }
        }
    }

    /// Read every remaining source into `out`, stopping at the first error.
    ///
    /// The reader stays usable after an error; calling this again resumes with
    /// the next source.
    pub async fn read_to_end(&mut self, out: &mut Vec<u8>) -> io::Result<usize> {
        let mut chunk = [0u8; 8 * 1024];
        let mut total = 0;
        loop {
            match self.read(&mut chunk).await? {
                0 => return Ok(total),
                n => {
                    out.extend_from_slice(&chunk[..n]);
                    total += n;
                }
            }
        }
    }

    /// Release the currently open source, keeping pending ones.
    ///
    /// Async sources are released by dropping them, so unlike
    /// [`MultiReader::close`](crate::MultiReader::close) there is no close
    /// failure to report and this always returns `Ok(())`.
    pub fn close(&mut self) -> io::Result<()> {
        if let Some((id, _)) = self.current.take() {
            debug!("closing source '{}'", id);
        }
        Ok(())
    }

    async fn open_next(&mut self, id: &str) -> io::Result<AsyncSource> {
        let opened = if id == STDIN_ID {
            self.stdin
                .take()
                .ok_or_else(|| io::Error::other("standard input already closed"))
        } else {
            self.resolver.open(id).await
        };

        opened.map_err(|e| {
            warn!("skipping source '{}': failed to open: {}", id, e);
            SourceError::new(Stage::Open, id, e).into()
        })
    }
}

impl fmt::Debug for AsyncMultiReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncMultiReader")
            .field("pending", &self.pending)
            .field("current", &self.current_source())
            .field("resolver", &self.resolver)
            .field("stdin_available", &self.stdin.is_some())
            .finish()
    }
}

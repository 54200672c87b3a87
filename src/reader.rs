//! Sequential reader over multiple named sources.

use std::collections::VecDeque;
use std::fmt;
use std::io::{self, Read};

use log::{debug, warn};

use crate::error::{SourceError, Stage};
use crate::io::{FsResolver, Source, SourceResolver, stdin_source};

/// Identifier that denotes standard input instead of a file.
///
/// It shadows any real file literally named `-`; use `./-` to read such a file.
pub const STDIN_ID: &str = "-";

/// Coarse view of where a [`MultiReader`] is in its source sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReaderState {
    /// Nothing open, more identifiers pending
    Idle,
    /// A source is open and being read
    Open,
    /// Nothing open and nothing pending; every read returns `Ok(0)`
    Exhausted,
}

struct Current {
    id: String,
    stream: Box<dyn Source>,
}

impl Current {
    /// Close the stream and return the identifier.
    ///
    /// Close failures are logged, not returned: the source is gone either way
    /// and the caller is in the middle of reporting something else.
    fn release(mut self) -> String {
        if let Err(e) = self.stream.close() {
            warn!("failed to close source '{}': {}", self.id, e);
        } else {
            debug!("released source '{}'", self.id);
        }
        self.id
    }
}

/// Reads a list of named sources one after another as a single stream.
///
/// Sources are opened lazily, in order, at most one at a time. `"-"` reads
/// from the standard input handle given at construction. An empty source
/// list behaves like `["-"]`.
///
/// `read` only returns `Ok(0)` once every source has been attempted. A source
/// that fails to open or fails mid-read is reported once as an `Err` carrying
/// a [`SourceError`]; calling `read` again continues with the next source.
/// Bytes produced before a read failure have already been returned by
/// earlier calls.
///
/// Standard input is handed over once. After it reaches end-of-stream,
/// fails, or is closed through [`close`](Self::close), a later `"-"` fails to
/// open. Closing only ends this reader's use of the handle; other users of the
/// process stdin are unaffected by this reader but share its position.
pub struct MultiReader {
    pending: VecDeque<String>,
    current: Option<Current>,
    resolver: Box<dyn SourceResolver>,
    stdin: Option<Box<dyn Source>>,
}

impl MultiReader {
    /// Create a reader over filesystem paths and the process stdin.
    pub fn new<I, S>(sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_parts(sources, FsResolver::new(), stdin_source())
    }

    /// Create a reader opening identifiers with `resolver`, stdin for `"-"`.
    pub fn with_resolver<I, S, R>(sources: I, resolver: R) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        R: SourceResolver + 'static,
    {
        Self::with_parts(sources, resolver, stdin_source())
    }

    /// Create a reader with every collaborator injected.
    pub fn with_parts<I, S, R>(sources: I, resolver: R, stdin: Box<dyn Source>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        R: SourceResolver + 'static,
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

    /// Identifier of the source currently open, if any.
    pub fn current_source(&self) -> Option<&str> {
        self.current.as_ref().map(|c| c.id.as_str())
    }

    /// Identifiers not yet attempted, in read order.
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

    /// Close the currently open source.
    ///
    /// Does nothing if no source is open. Pending sources are kept: a later
    /// `read` carries on with the next one. To abandon the sequence, stop
    /// reading or drop the reader.
    pub fn close(&mut self) -> io::Result<()> {
        let Some(mut current) = self.current.take() else {
            return Ok(());
        };
        debug!("closing source '{}'", current.id);
        current
            .stream
            .close()
            .map_err(|e| SourceError::new(Stage::Close, current.id, e).into())
    }

    fn open_next(&mut self, id: String) -> io::Result<Current> {
        let opened = if id == STDIN_ID {
            self.stdin
                .take()
                .ok_or_else(|| io::Error::other("standard input already closed"))
        } else {
            self.resolver.open(&id)
        };

        match opened {
            Ok(stream) => {
                debug!("opened source '{}'", id);
                Ok(Current { id, stream })
            }
            Err(e) => {
                warn!("skipping source '{}': failed to open: {}", id, e);
                Err(SourceError::new(Stage::Open, id, e).into())
            }
        }
    }
}

impl Read for MultiReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        // An empty buffer makes every source report Ok(0); don't mistake it for end-of-stream.
        if buf.is_empty() {
            return Ok(0);
        }

        // Each pass either returns or releases a source that was popped from
        // `pending`, so the loop ends once `pending` runs dry.
        loop {
            let mut current = match self.current.take() {
                Some(current) => current,
                None => {
                    let Some(id) = self.pending.pop_front() else {
                        return Ok(0);
                    };
                    self.open_next(id)?
                }
            };

            match current.stream.read(buf) {
                Ok(0) => {
                    current.release();
                }
                Ok(n) => {
                    self.current = Some(current);
                    return Ok(n);
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {
                    self.current = Some(current);
                    return Err(e);
                }
                Err(e) => {
                    let id = current.release();
                    warn!("skipping source '{}': read failed: {}", id, e);
                    return Err(SourceError::new(Stage::Read, id, e).into());
                }
            }
        }
    }
}

impl Drop for MultiReader {
    fn drop(&mut self) {
        if let Some(current) = self.current.take() {
            current.release();
        }
    }
}

impl fmt::Debug for MultiReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiReader")
            .field("pending", &self.pending)
            .field("current", &self.current_source())
            .field("resolver", &self.resolver)
            .field("stdin_available", &self.stdin.is_some())
            .finish()
    }
}

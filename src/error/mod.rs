//! Error types surfaced by multiread readers.
//!
//! This module provides:
//! - `Stage`: Indicates which step failed for a given source
//! - `SourceError`: A single per-source failure with context
//!
//! Per-source failures travel through `std::io::Error` so that `MultiReader` can
//! implement `std::io::Read`. The original `io::ErrorKind` is kept, and the
//! `SourceError` payload can be recovered with [`SourceError::from_io`].

use std::fmt;
use std::io;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// The source could not be opened
    Open,
    /// The source was open but failed while reading
    Read,
    /// Releasing the source failed
    Close,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Open => write!(f, "Open"),
            Stage::Read => write!(f, "Read"),
            Stage::Close => write!(f, "Close"),
        }
    }
}

/// A failure tied to one source of a multi-source reader.
///
/// The reader has already moved past the source by the time this is returned;
/// calling `read` again continues with the next pending identifier.
#[derive(Debug, Error)]
#[error("[{stage}] {target}: {error}")]
pub struct SourceError {
    /// Stage where the error occurred
    pub stage: Stage,
    /// Identifier of the source (file path, "-" for stdin)
    pub target: String,
    /// The underlying error
    #[source]
    pub error: io::Error,
}

impl SourceError {
    pub fn new(stage: Stage, target: impl Into<String>, error: io::Error) -> Self {
        Self {
            stage,
            target: target.into(),
            error,
        }
    }

    /// Wrap into an `io::Error` with the same kind as the underlying error.
    pub fn into_io(self) -> io::Error {
        io::Error::new(self.error.kind(), self)
    }

    /// Recover the per-source context from an error returned by a reader.
    ///
    /// Returns `None` for errors that did not originate from a source, such as
    /// interrupted reads passed through untouched.
    pub fn from_io(err: &io::Error) -> Option<&SourceError> {
        err.get_ref()?.downcast_ref::<SourceError>()
    }

    /// Shorthand for `SourceError::from_io(err).map(|e| e.stage)`.
    pub fn stage_of(err: &io::Error) -> Option<Stage> {
        Self::from_io(err).map(|e| e.stage)
    }
}

impl From<SourceError> for io::Error {
    fn from(error: SourceError) -> Self {
        error.into_io()
    }
}

#[cfg(feature = "miette")]
mod miette_impl;

#[cfg(feature = "miette")]
pub use miette_impl::*;

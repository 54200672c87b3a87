//! # multiread
//!
//! Read every input named on a command line as one continuous byte stream.
//!
//! ## Overview
//!
//! Text-processing tools conventionally read each file argument in turn, or
//! standard input when there are none. multiread provides that stream:
//! - **Lazy opening**: each source is opened only when the previous one is done
//! - **Stdin convention**: `"-"` means standard input; no sources means `["-"]`
//! - **Skip, don't abort**: a source that fails to open or read is reported once,
//!   then the next read continues with the following source
//! - **No empty reads**: `read` returns `Ok(0)` only after the last source
//! - **Sync and Async**: `std::io::Read` and a tokio-based variant
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::io::Read;
//!
//! use multiread::{MultiReader, SourceError};
//!
//! fn process(chunk: &[u8]) {
//!     print!("{}", String::from_utf8_lossy(chunk));
//! }
//!
//! fn main() {
//!     let args: Vec<String> = std::env::args().skip(1).collect();
//!     let mut input = MultiReader::new(args);
//!     let mut buf = [0u8; 4096];
//!
//!     loop {
//!         match input.read(&mut buf) {
//!             Ok(0) => break,
//!             Ok(n) => process(&buf[..n]),
//!             Err(e) => match SourceError::from_io(&e) {
//!                 Some(source) => eprintln!("skipping {}: {}", source.target, source.error),
//!                 None => eprintln!("{e}"),
//!             },
//!         }
//!     }
//! }
//! ```
//!
//! ## Read semantics
//!
//! - A source that ends is released and the same `read` call moves on to the
//!   next one, so chunks never span two sources but no call returns an empty
//!   chunk in the middle of the sequence.
//! - Failures carry a [`SourceError`] (stage, identifier, cause) inside the
//!   returned `io::Error`, with the original `io::ErrorKind`.
//! - `ErrorKind::Interrupted` is passed through and the source stays open.
//! - [`MultiReader::close`] releases only the open source. Pending sources
//!   are still read by later calls.
//!
//! ## Features
//!
//! - `async` - `AsyncMultiReader` over tokio streams
//! - `miette` - Pretty error reporting with miette

// Core modules
pub mod builder;
pub mod config;
pub mod error;
pub mod io;
pub mod reader;

// Async modules (feature-gated)
#[cfg(feature = "async")]
pub mod reader_async;

// Re-exports for convenience
pub use builder::MultiReaderBuilder;
pub use config::ReaderConfig;
pub use error::{SourceError, Stage};
pub use io::{FsResolver, InMemoryResolver, ReadSource, Source, SourceResolver};
pub use reader::{MultiReader, ReaderState, STDIN_ID};

// Async re-exports
#[cfg(feature = "async")]
pub use io::{AsyncFsResolver, AsyncSource, AsyncSourceResolver};
#[cfg(feature = "async")]
pub use reader_async::AsyncMultiReader;

/// Build a MultiReader from a ReaderConfig, reading `"-"` from the process stdin.
pub fn build_reader_from_config(config: ReaderConfig) -> MultiReader {
    MultiReaderBuilder::from_config(config).build()
}

/// Build a MultiReader from a ReaderConfig, allowing the caller to further
/// customize the builder, e.g. to inject a resolver or a stdin replacement.
pub fn build_reader_from_config_with<F>(config: ReaderConfig, customize: F) -> MultiReader
where
    F: FnOnce(MultiReaderBuilder) -> MultiReaderBuilder,
{
    customize(MultiReaderBuilder::from_config(config)).build()
}

// Miette re-exports
#[cfg(feature = "miette")]
pub use error::IoDiagnostic;

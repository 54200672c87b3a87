//! Source abstractions for multi-source readers.
//!
//! This module provides:
//! - `Source`: A readable stream with an explicit close step
//! - `SourceResolver`: Trait mapping identifiers to opened sources
//! - `FsResolver`: Filesystem implementation, plus the process stdin handle
//! - `InMemoryResolver`: In-memory implementation for testing

mod input;
mod memory;
mod std_io;

pub use input::{ReadSource, Source, SourceResolver};
pub use memory::InMemoryResolver;
pub use std_io::{FsResolver, stdin_source};

// Async I/O support
#[cfg(feature = "async")]
mod async_input;
#[cfg(feature = "async")]
mod async_std_io;

#[cfg(feature = "async")]
pub use async_input::{AsyncSource, AsyncSourceResolver};
#[cfg(feature = "async")]
pub use async_std_io::{AsyncFsResolver, async_stdin_source};

//! Source and resolver trait definitions.

use std::fmt::Debug;
use std::io::{self, Cursor, Read};

/// A readable stream that can be explicitly released.
///
/// `close` is called exactly once when the reader is done with the stream:
/// on end-of-stream, after a read failure, or from `MultiReader::close`. The
/// stream is dropped right after, so the default no-op is enough for types
/// that release their resources on drop.
pub trait Source: Read + Send {
    fn close(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Source for std::fs::File {}

impl Source for io::Stdin {}

impl<T: AsRef<[u8]> + Send> Source for Cursor<T> {}

impl Source for &'static [u8] {}

impl<S: Source + ?Sized> Source for Box<S> {
    fn close(&mut self) -> io::Result<()> {
        (**self).close()
    }
}

/// Adapter turning any `Read + Send` into a [`Source`] with a no-op close.
#[derive(Debug)]
pub struct ReadSource<R>(pub R);

impl<R: Read> Read for ReadSource<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.0.read(buf)
    }
}

impl<R: Read + Send> Source for ReadSource<R> {}

/// Trait for opening named sources.
///
/// Implementors map a source identifier (usually a file path) to a freshly
/// opened stream. The `"-"` identifier never reaches a resolver: the reader
/// serves it from its standard input handle.
pub trait SourceResolver: Send + Debug {
    /// Open the source named `id` for reading.
    fn open(&self, id: &str) -> io::Result<Box<dyn Source>>;
}

impl<R: SourceResolver + ?Sized> SourceResolver for Box<R> {
    fn open(&self, id: &str) -> io::Result<Box<dyn Source>> {
        (**self).open(id)
    }
}

//! Builder for creating MultiReader instances.

use std::path::PathBuf;

use crate::config::ReaderConfig;
use crate::io::{FsResolver, Source, SourceResolver, stdin_source};
use crate::reader::MultiReader;

pub struct MultiReaderBuilder {
    sources: Vec<String>,
    base_dir: Option<PathBuf>,
    resolver: Option<Box<dyn SourceResolver>>,
    stdin: Option<Box<dyn Source>>,
}

impl MultiReaderBuilder {
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
            base_dir: None,
            resolver: None,
            stdin: None,
        }
    }

    pub fn from_config(config: ReaderConfig) -> Self {
        Self {
            sources: config.sources,
            base_dir: config.base_dir,
            ..Self::new()
        }
    }

    /// Replace the source list with already-extracted arguments.
    pub fn sources_from_args(mut self, args: &[String]) -> Self {
        self.sources = args.to_vec();
        self
    }

    pub fn add_source(mut self, id: impl Into<String>) -> Self {
        self.sources.push(id.into());
        self
    }

    /// Resolve relative paths under `base_dir`. Ignored when a custom resolver is set.
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(base_dir.into());
        self
    }

    pub fn with_resolver(mut self, resolver: impl SourceResolver + 'static) -> Self {
        self.resolver = Some(Box::new(resolver));
        self
    }

    /// Serve `"-"` from `stdin` instead of the process standard input.
    pub fn with_stdin(mut self, stdin: impl Source + 'static) -> Self {
        self.stdin = Some(Box::new(stdin));
        self
    }

    pub fn build(self) -> MultiReader {
        let stdin = self.stdin.unwrap_or_else(stdin_source);
        match self.resolver {
            Some(resolver) => MultiReader::with_parts(self.sources, resolver, stdin),
            None => {
                let resolver = match self.base_dir {
                    Some(dir) => FsResolver::with_base_dir(dir),
                    None => FsResolver::new(),
                };
                MultiReader::with_parts(self.sources, resolver, stdin)
            }
        }
    }
}

impl Default for MultiReaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//! Scriptable sources for exercising reader edge cases.

use std::collections::HashMap;
use std::io::{self, Read};
use std::sync::{Arc, Mutex};

use crate::io::{Source, SourceResolver};

/// How a fake source behaves once opened.
#[derive(Debug, Clone, Default)]
pub struct Script {
    pub data: Vec<u8>,
    /// Fail to open with this kind
    pub open_error: Option<io::ErrorKind>,
    /// After `data` is drained, fail with this kind instead of reporting end-of-stream
    pub read_error: Option<io::ErrorKind>,
    /// Report `Interrupted` on the first read
    pub interrupt_first: bool,
    /// Fail on close
    pub close_error: bool,
}

impl Script {
    pub fn data(data: &[u8]) -> Self {
        Self {
            data: data.to_vec(),
            ..Self::default()
        }
    }

    pub fn missing() -> Self {
        Self {
            open_error: Some(io::ErrorKind::NotFound),
            ..Self::default()
        }
    }

    pub fn fails_after(data: &[u8], kind: io::ErrorKind) -> Self {
        Self {
            data: data.to_vec(),
            read_error: Some(kind),
            ..Self::default()
        }
    }
}

/// Shared record of open/close events, e.g. `["open:a", "close:a"]`.
pub type EventLog = Arc<Mutex<Vec<String>>>;

#[derive(Debug, Clone, Default)]
pub struct ScriptedResolver {
    scripts: HashMap<String, Script>,
    pub events: EventLog,
}

impl ScriptedResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, id: &str, script: Script) -> Self {
        self.scripts.insert(id.to_string(), script);
        self
    }

    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

impl SourceResolver for ScriptedResolver {
    fn open(&self, id: &str) -> io::Result<Box<dyn Source>> {
        let script = self
            .scripts
            .get(id)
            .cloned()
            .unwrap_or_else(Script::missing);
        if let Some(kind) = script.open_error {
            return Err(io::Error::new(kind, format!("cannot open {id}")));
        }
        self.events.lock().unwrap().push(format!("open:{id}"));
        Ok(Box::new(ScriptedSource::new(id, script, self.events.clone())))
    }
}

#[derive(Debug)]
pub struct ScriptedSource {
    id: String,
    script: Script,
    pos: usize,
    events: EventLog,
}

impl ScriptedSource {
    pub fn new(id: &str, script: Script, events: EventLog) -> Self {
        Self {
            id: id.to_string(),
            script,
            pos: 0,
            events,
        }
    }
}

impl Read for ScriptedSource {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.script.interrupt_first {
            self.script.interrupt_first = false;
            return Err(io::ErrorKind::Interrupted.into());
        }
        let remaining = &self.script.data[self.pos..];
        if remaining.is_empty() {
            return match self.script.read_error {
                Some(kind) => Err(io::Error::new(kind, format!("{} broke", self.id))),
                None => Ok(0),
            };
        }
        let n = remaining.len().min(buf.len());
        buf[..n].copy_from_slice(&remaining[..n]);
        self.pos += n;
        Ok(n)
    }
}

impl Source for ScriptedSource {
    fn close(&mut self) -> io::Result<()> {
        self.events.lock().unwrap().push(format!("close:{}", self.id));
        if self.script.close_error {
            Err(io::Error::other(format!("{} refused to close", self.id)))
        } else {
            Ok(())
        }
    }
}

/// Outcome of a single `read` call.
#[derive(Debug)]
pub enum Step {
    Bytes(Vec<u8>),
    Failed(io::Error),
    End,
}

/// Read until `Ok(0)`, recording every call. Gives up after `limit` calls.
pub fn drain(reader: &mut impl Read, buf_size: usize, limit: usize) -> Vec<Step> {
    let mut buf = vec![0u8; buf_size];
    let mut steps = Vec::new();
    for _ in 0..limit {
        match reader.read(&mut buf) {
            Ok(0) => {
                steps.push(Step::End);
                return steps;
            }
            Ok(n) => steps.push(Step::Bytes(buf[..n].to_vec())),
            Err(e) => steps.push(Step::Failed(e)),
        }
    }
    panic!("reader did not reach end-of-stream within {limit} calls");
}

/// Concatenate the bytes of every successful step.
pub fn bytes_of(steps: &[Step]) -> Vec<u8> {
    steps
        .iter()
        .filter_map(|s| match s {
            Step::Bytes(b) => Some(b.as_slice()),
            _ => None,
        })
        .flatten()
        .copied()
        .collect()
}

pub fn errors_of(steps: &[Step]) -> Vec<&io::Error> {
    steps
        .iter()
        .filter_map(|s| match s {
            Step::Failed(e) => Some(e),
            _ => None,
        })
        .collect()
}

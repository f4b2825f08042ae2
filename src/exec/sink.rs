// src/exec/sink.rs

//! Destinations for forwarded process output.
//!
//! A drainer hands every line it reads to a [`LineSink`]. The sink is owned
//! by the drain task for the lifetime of the execution, so implementations
//! that callers want to inspect afterwards (like [`SharedBuffer`]) keep their
//! state behind a shared handle.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;

/// Something that accepts output one line at a time.
///
/// `line` never contains the line terminator; text sinks append a single
/// `'\n'` themselves.
pub trait LineSink: Send + 'static {
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

/// In-memory text capture that can be cloned and read after the run.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    inner: Arc<Mutex<String>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything written so far.
    pub fn contents(&self) -> String {
        match self.inner.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.contents().is_empty()
    }

    /// A boxed handle writing into this buffer.
    pub fn sink(&self) -> Box<dyn LineSink> {
        Box::new(self.clone())
    }
}

impl LineSink for SharedBuffer {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|_| io::Error::other("shared buffer lock poisoned"))?;
        guard.push_str(line);
        guard.push('\n');
        Ok(())
    }
}

/// Forwards lines into any [`std::io::Write`], flushing after each line.
///
/// Used by the CLI to pass child output straight through to its own
/// stdout/stderr.
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: W,
}

impl<W: Write + Send + 'static> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + 'static> LineSink for WriterSink<W> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()
    }
}

/// Channel sink: each line is sent without its terminator.
///
/// A dropped receiver surfaces as a `BrokenPipe` write error.
impl LineSink for mpsc::UnboundedSender<String> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.send(line.to_owned())
            .map_err(|_| io::Error::new(io::ErrorKind::BrokenPipe, "line receiver dropped"))
    }
}

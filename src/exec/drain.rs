// src/exec/drain.rs

//! Stream drainer: consumes one child output stream line by line.
//!
//! Lines end at `"\n"`, `"\r\n"` or a lone `'\r'`, so progress output
//! that rewrites a line with carriage returns arrives as separate lines.
//!
//! Every child stream gets its own drainer running as its own Tokio task, so
//! stdout and stderr are emptied concurrently with each other and with the
//! process. Draining them one after the other can deadlock once the child
//! fills the OS pipe buffer of the stream nobody is reading.
//!
//! A drainer never reports a failure to its owner:
//! - a read error ends the drain (no retry) and is logged at `warn`;
//! - a sink write error is logged once, and the remaining lines are still
//!   read (so the child never blocks on a full pipe) but discarded.
//!
//! Either way the completion flag flips to `true` exactly once, after the
//! last read.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::exec::sink::LineSink;
use crate::io::split_lines;

/// One stream plus the place its lines go.
pub struct Drainer<R> {
    label: &'static str,
    reader: R,
    sink: Option<Box<dyn LineSink>>,
    complete: Arc<AtomicBool>,
}

/// Handle to a spawned drain task.
#[derive(Debug)]
pub struct DrainHandle {
    label: &'static str,
    complete: Arc<AtomicBool>,
    task: JoinHandle<u64>,
}

impl<R> Drainer<R>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    /// `label` is only used in log fields (e.g. `"stdout"`).
    pub fn new(label: &'static str, reader: R, sink: Option<Box<dyn LineSink>>) -> Self {
        Self {
            label,
            reader,
            sink,
            complete: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Start draining on a new Tokio task.
    pub fn spawn(self) -> DrainHandle {
        let label = self.label;
        let complete = Arc::clone(&self.complete);
        let task = tokio::spawn(self.run());

        DrainHandle {
            label,
            complete,
            task,
        }
    }

    /// Drain to end-of-stream on the current task, returning the number of
    /// lines read.
    pub async fn run(self) -> u64 {
        let Drainer {
            label,
            reader,
            mut sink,
            complete,
        } = self;

        let mut reader = BufReader::new(reader);
        let mut buf = Vec::new();
        let mut lines_read = 0u64;

        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf).await {
                Ok(0) => break,
                Ok(_) => {
                    for raw in split_lines(&buf) {
                        lines_read += 1;
                        let line = String::from_utf8_lossy(raw);

                        if let Some(target) = sink.as_mut() {
                            if let Err(e) = target.write_line(&line) {
                                warn!(
                                    stream = label,
                                    error = %e,
                                    "sink write failed; discarding the rest of this stream"
                                );
                                sink = None;
                            }
                        }
                    }
                }
                Err(e) => {
                    warn!(
                        stream = label,
                        error = %e,
                        "read failed; abandoning stream"
                    );
                    break;
                }
            }
        }

        complete.store(true, Ordering::Release);
        debug!(stream = label, lines = lines_read, "drain finished");

        lines_read
    }
}

impl DrainHandle {
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Whether the drainer has seen end-of-stream (or given up on a read
    /// error). Once `true`, stays `true`.
    pub fn is_complete(&self) -> bool {
        self.complete.load(Ordering::Acquire)
    }

    /// Wait for the drain task to finish.
    ///
    /// Returns the number of lines read, or `None` if the task panicked or
    /// was aborted.
    pub async fn join(self) -> Option<u64> {
        match self.task.await {
            Ok(lines) => Some(lines),
            Err(e) => {
                debug!(stream = self.label, error = %e, "drain task did not finish cleanly");
                None
            }
        }
    }
}

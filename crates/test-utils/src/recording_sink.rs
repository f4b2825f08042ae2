use std::io;
use std::sync::{Arc, Mutex};

use supportkit::exec::LineSink;

/// A sink that:
/// - records every line it accepts (without terminator)
/// - optionally starts failing after a fixed number of lines, to exercise
///   the drainer's write-error path.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    lines: Arc<Mutex<Vec<String>>>,
    fail_after: Option<usize>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept `n` lines, then return an error for every further write.
    pub fn failing_after(n: usize) -> Self {
        Self {
            lines: Arc::default(),
            fail_after: Some(n),
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl LineSink for RecordingSink {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        let mut guard = self.lines.lock().unwrap();
        if let Some(limit) = self.fail_after {
            if guard.len() >= limit {
                return Err(io::Error::other("recording sink is full"));
            }
        }
        guard.push(line.to_string());
        Ok(())
    }
}

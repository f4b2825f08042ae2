// src/io.rs

//! Text I/O helpers.

use std::io::{self, BufRead, BufReader, Read, Write};

use tracing::{debug, warn};

/// Read `reader` to the end as text, one `'\n'`-terminated line at a time.
///
/// Lines end at `"\n"`, `"\r\n"` or a lone `'\r'`; each is normalised to
/// `'\n'`, and a final unterminated line gets one too. A read error
/// (including invalid UTF-8) stops reading; the text read up to that point
/// is returned.
pub fn read_to_string<R: Read>(reader: R) -> String {
    read_to_string_limited(reader, 0)
}

/// Like [`read_to_string`], but stop before the line that would take the
/// result past `limit` characters (each line counts its characters plus one
/// for the terminator). A `limit` of `0` means no limit.
pub fn read_to_string_limited<R: Read>(reader: R, limit: usize) -> String {
    let mut reader = BufReader::new(reader);
    let mut buf = Vec::new();
    let mut out = String::new();
    let mut total = 0usize;

    'read: loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {
                for raw in split_lines(&buf) {
                    let line = match std::str::from_utf8(raw) {
                        Ok(line) => line,
                        Err(e) => {
                            warn!(error = %e, "invalid UTF-8; returning text read so far");
                            break 'read;
                        }
                    };
                    let len = line.chars().count();
                    if limit > 0 && total + len > limit {
                        break 'read;
                    }
                    out.push_str(line);
                    out.push('\n');
                    total += len + 1;
                }
            }
            Err(e) => {
                warn!(error = %e, "read failed; returning text read so far");
                break;
            }
        }
    }

    out
}

/// Split one `read_until(b'\n')` chunk into lines.
///
/// The chunk holds at most one `'\n'`, at its end. A trailing `"\n"` or
/// `"\r\n"` ends the last line; every other `'\r'` ends a line of its own.
pub(crate) fn split_lines(chunk: &[u8]) -> impl Iterator<Item = &[u8]> {
    let chunk = chunk.strip_suffix(b"\n").unwrap_or(chunk);
    let chunk = chunk.strip_suffix(b"\r").unwrap_or(chunk);
    chunk.split(|&b| b == b'\r')
}

/// Copy everything from `reader` to `writer`, returning the byte count.
pub fn copy_stream<R, W>(reader: &mut R, writer: &mut W) -> io::Result<u64>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    io::copy(reader, writer)
}

/// Flush and drop `writer`, ignoring any error.
pub fn close_quietly<W: Write>(mut writer: W) {
    if let Err(e) = writer.flush() {
        debug!(error = %e, "ignoring flush error on close");
    }
}

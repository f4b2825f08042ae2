// tests/collections_io_fs.rs

use std::io::{self, Cursor, Read};

use supportkit::collections::{is_empty, is_not_empty, unique_list};
use supportkit::io::{close_quietly, copy_stream, read_to_string, read_to_string_limited};

#[test]
fn test_non_unique_list_removal() {
    assert_eq!(unique_list(&["a", "b", "c", "b"]), vec!["a", "b", "c"]);
}

#[test]
fn test_non_unique_list_retains_order() {
    assert_eq!(unique_list(&["a", "b", "b", "c"]), vec!["a", "b", "c"]);
    assert_eq!(unique_list(&[3, 1, 3, 2, 1]), vec![3, 1, 2]);
}

#[test]
fn test_unique_list_unchanged() {
    let items = vec!["a".to_string(), "b".to_string(), "c".to_string()];
    assert_eq!(unique_list(&items), items);
}

#[test]
fn test_collection_emptiness() {
    let none: Option<&[&str]> = None;
    assert!(is_empty(none));
    assert!(is_empty::<&str>(Some(&[][..])));
    assert!(!is_empty(Some(&["string"][..])));

    assert!(is_not_empty(Some(&["string"][..])));
    assert!(!is_not_empty(none));
    assert!(!is_not_empty::<&str>(Some(&[][..])));
}

#[test]
fn test_read_to_string_normalises_line_endings() {
    let text = read_to_string(Cursor::new("one\r\ntwo\nthree"));
    assert_eq!(text, "one\ntwo\nthree\n");
}

#[test]
fn test_read_to_string_treats_lone_carriage_return_as_line_end() {
    assert_eq!(read_to_string(Cursor::new("a\rb\n")), "a\nb\n");
    assert_eq!(read_to_string(Cursor::new("x\r\r\ny\r")), "x\n\ny\n");
}

#[test]
fn test_read_to_string_limit_applies_to_carriage_return_lines() {
    let text = read_to_string_limited(Cursor::new("10%\r20%\rdone\n"), 8);
    assert_eq!(text, "10%\n20%\n");
}

#[test]
fn test_read_to_string_empty() {
    assert_eq!(read_to_string(io::empty()), "");
}

#[test]
fn test_read_to_string_limited_stops_before_overflowing_line() {
    // "abc\n" = 4, "de\n" = 3, "fghij\n" would make 13 > 10.
    let text = read_to_string_limited(Cursor::new("abc\nde\nfghij\nk\n"), 10);
    assert_eq!(text, "abc\nde\n");

    let unlimited = read_to_string_limited(Cursor::new("abc\nde\nfghij\nk\n"), 0);
    assert_eq!(unlimited, "abc\nde\nfghij\nk\n");
}

#[test]
fn test_read_to_string_limit_counts_characters() {
    // Four characters, eight bytes.
    let text = read_to_string_limited(Cursor::new("éééé\nx\n"), 4);
    assert_eq!(text, "éééé\n");
}

/// Returns one line, then fails.
struct BrokenReader {
    sent: bool,
}

impl Read for BrokenReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.sent {
            return Err(io::Error::other("broken"));
        }
        self.sent = true;
        let data = b"kept\n";
        buf[..data.len()].copy_from_slice(data);
        Ok(data.len())
    }
}

#[test]
fn test_read_error_returns_partial_text() {
    assert_eq!(read_to_string(BrokenReader { sent: false }), "kept\n");
}

#[test]
fn test_copy_stream() {
    let mut input = Cursor::new(vec![7u8; 10_000]);
    let mut output = Vec::new();

    let copied = copy_stream(&mut input, &mut output).unwrap();

    assert_eq!(copied, 10_000);
    assert_eq!(output, vec![7u8; 10_000]);
}

struct FailingFlush;

impl io::Write for FailingFlush {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::other("flush failed"))
    }
}

#[test]
fn test_close_quietly_ignores_errors() {
    close_quietly(FailingFlush);
    close_quietly(Vec::<u8>::new());
}

#[cfg(unix)]
mod path_lookup {
    use supportkit::fs::{lookup_grandparent_in_path, lookup_in_path, lookup_parent_in_path};

    #[test]
    fn test_lookup_in_path() {
        let sh = lookup_in_path("sh").expect("sh on PATH");
        assert!(sh.is_absolute());
        assert!(sh.ends_with("sh"));
    }

    #[test]
    fn test_lookup_chain_is_consistent() {
        let exe = lookup_in_path("sh").unwrap();
        let dir = lookup_parent_in_path("sh").unwrap();
        let grand = lookup_grandparent_in_path("sh").unwrap();

        assert_eq!(exe.parent(), Some(dir.as_path()));
        assert_eq!(dir.parent(), Some(grand.as_path()));
    }

    #[test]
    fn test_lookup_missing() {
        assert_eq!(lookup_in_path("so-never-gonna-call-a-file-this"), None);
        assert_eq!(lookup_parent_in_path("so-never-gonna-call-a-file-this"), None);
    }
}

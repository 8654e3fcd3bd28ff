//! Whole-stream and whole-buffer conversion built on [`read_line`].

use std::{
    io::{self, Read, Write},
    string::FromUtf8Error,
};

use crate::{line_buffer::LineBuffer, line_reader::read_line, pushback::PushbackReader, Eol};

/// Copy every line of `reader` to `writer`, each followed by `eol`.
///
/// `line` is scratch space that callers reuse across sources. Returns the
/// number of lines written. Nothing is written for an empty stream.
///
/// # Errors
///
/// Propagates read errors from `reader` and write errors from `writer`.
pub fn convert_stream<R: Read, W: Write + ?Sized>(
    reader: R,
    writer: &mut W,
    eol: Eol,
    line: &mut LineBuffer,
) -> io::Result<u64> {
    let mut reader = PushbackReader::new(reader);
    let terminator = eol.as_bytes();
    let mut count = 0;
    while let Some(bytes) = read_line(line, &mut reader)? {
        writer.write_all(bytes)?;
        writer.write_all(terminator)?;
        count += 1;
    }
    Ok(count)
}

/// Convert a whole byte slice, returning an owned `Vec<u8>`.
#[must_use]
pub fn convert(input: &[u8], eol: Eol) -> Vec<u8> {
    let mut output = Vec::with_capacity(input.len() + eol.as_bytes().len());
    convert_stream(input, &mut output, eol, &mut LineBuffer::new())
        .unwrap_or_else(|err| unreachable!("{err} (in-memory I/O cannot fail)"));
    output
}

/// Convert a UTF-8 string and return an owned `String`.
#[must_use]
pub fn convert_str(input: &str, eol: Eol) -> String {
    // only ASCII CR/LF bytes are removed or inserted, so UTF-8 stays valid
    String::from_utf8(convert(input.as_bytes(), eol)).unwrap_or_else(|FromUtf8Error { .. }| {
        unreachable!("conversion produced invalid UTF-8 (should be impossible)")
    })
}

/// The logical lines of `input`, terminators removed.
#[must_use]
pub fn lines(input: &[u8]) -> Vec<Vec<u8>> {
    let mut reader = PushbackReader::new(input);
    let mut line = LineBuffer::new();
    let mut lines = Vec::new();
    while let Ok(Some(bytes)) = read_line(&mut line, &mut reader) {
        lines.push(bytes.to_vec());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_produces_no_output() {
        for eol in Eol::ALL {
            assert!(convert(b"", eol).is_empty());
        }
    }

    #[test]
    fn mixed_input_to_each_convention() {
        let input = b"a\r\nb\rc\nd";
        assert_eq!(convert(input, Eol::Msdos), b"a\r\nb\r\nc\r\nd\r\n");
        assert_eq!(convert(input, Eol::Unix), b"a\nb\nc\nd\n");
        assert_eq!(convert(input, Eol::Mac), b"a\rb\rc\rd\r");
    }

    #[test]
    fn trailing_lone_cr_yields_one_line() {
        assert_eq!(convert(b"x\r", Eol::Unix), b"x\n");
        assert_eq!(lines(b"x\r"), vec![b"x".to_vec()]);
    }

    #[test]
    fn consecutive_terminators() {
        assert_eq!(convert(b"a\n\nb", Eol::Msdos), b"a\r\n\r\nb\r\n");
    }

    #[test]
    fn stream_counts_lines_and_reuses_buffer() {
        let mut line = LineBuffer::new();
        let mut out = Vec::new();
        let first = convert_stream(&b"p\n"[..], &mut out, Eol::Unix, &mut line).unwrap();
        let second = convert_stream(&b"q"[..], &mut out, Eol::Unix, &mut line).unwrap();
        assert_eq!((first, second), (1, 1));
        assert_eq!(out, b"p\nq\n");
    }

    #[test]
    fn str_conversion_keeps_unicode() {
        assert_eq!(
            convert_str("こんにちは\r\nмир\rhello", Eol::Unix),
            "こんにちは\nмир\nhello\n"
        );
    }
}

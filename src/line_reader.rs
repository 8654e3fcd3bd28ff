//! Reading logical lines terminated by any mix of `\r\n`, `\n` and `\r`.

use std::io::{self, BufRead, Read};

use memchr::memchr2;

use crate::{
    line_buffer::LineBuffer,
    pushback::PushbackReader,
    types::{CR, LF},
};

/// Read the next logical line from `reader` into `line`.
///
/// The terminator (`\r\n`, `\n` or a lone `\r`) is consumed and not stored.
/// Terminators may be mixed freely within one stream; each one closes exactly
/// one line, so consecutive terminators produce empty lines. A final line
/// without a terminator is still returned, and a lone `\r` at end-of-stream
/// counts as a terminator rather than content.
///
/// Returns `Ok(None)` when the stream was already exhausted before this call
/// read anything. The returned slice borrows `line` and is valid until the
/// buffer is next written.
///
/// # Errors
///
/// Propagates read errors from the underlying stream.
pub fn read_line<'a, R: Read>(
    line: &'a mut LineBuffer,
    reader: &mut PushbackReader<R>,
) -> io::Result<Option<&'a [u8]>> {
    line.clear();
    let mut saw_any = false;

    loop {
        let chunk = reader.fill_buf()?;
        if chunk.is_empty() {
            break;
        }
        saw_any = true;

        let Some(i) = memchr2(CR, LF, chunk) else {
            // We found:
            // - no terminator in the buffered bytes, the line continues
            let bytes_now = chunk.len();
            line.extend_from_slice(chunk);
            reader.consume(bytes_now);
            continue;
        };

        line.extend_from_slice(&chunk[..i]);
        match (chunk[i], chunk.get(i + 1).copied()) {
            (LF, _) => {
                // We found:
                // - a LF, with or without a CR before it
                reader.consume(i + 1);
            }
            (CR, Some(LF)) => {
                // We found:
                // - a CR followed by a LF
                reader.consume(i + 2);
            }
            (CR, Some(_)) => {
                // We found:
                // - a lone CR; the byte after it starts the next line
                reader.consume(i + 1);
            }
            (CR, None) => {
                // We found:
                // - a CR at the end of the buffered bytes
                // Look one byte past it and push that byte back unless it
                // completes a CRLF.
                reader.consume(i + 1);
                match reader.read_byte()? {
                    Some(LF) | None => {}
                    Some(byte) => reader.unread(byte),
                }
            }
            _ => unreachable!("memchr2 only matches CR or LF"),
        }
        break;
    }

    if line.is_empty() && !saw_any {
        return Ok(None);
    }
    Ok(Some(line.as_bytes()))
}

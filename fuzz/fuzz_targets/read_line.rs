#![no_main]

use eol2eol::{convert, lines, read_line, Eol, LineBuffer, PushbackReader};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    // Control byte layout (data[0]):
    // bits 0-3: chunk size of the pushback reader minus one
    // bits 4-5: output convention
    let control = data[0];
    let buf_size = usize::from(control & 0x0f) + 1;
    let eol = Eol::ALL[usize::from((control >> 4) & 0x03) % Eol::ALL.len()];
    let payload = &data[1..];

    // chunk size must not change the lines we see
    let mut reader = PushbackReader::with_capacity(payload, buf_size);
    let mut line = LineBuffer::new();
    let mut chunked = Vec::new();
    while let Some(bytes) = read_line(&mut line, &mut reader).expect("in-memory read") {
        assert!(!bytes.contains(&b'\r') && !bytes.contains(&b'\n'));
        chunked.push(bytes.to_vec());
    }
    let expected = lines(payload);
    assert_eq!(chunked, expected);

    // converting twice is the same as converting once
    let once = convert(payload, eol);
    assert_eq!(convert(&once, eol), once);
    assert_eq!(lines(&once), expected);
});

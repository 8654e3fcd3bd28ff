use std::io::{self, Read};

/// A reader that hands out its input in the given pieces, one piece per
/// `read` call at most, so tests can place chunk boundaries precisely.
pub struct PiecewiseReader<R, I> {
    readers: I,
    current: Option<R>,
}

impl<R: Read, I: Iterator<Item = R>> PiecewiseReader<R, I> {
    pub fn new(mut readers: I) -> PiecewiseReader<R, I> {
        let current = readers.next();
        PiecewiseReader { readers, current }
    }
}

impl<R: Read, I: Iterator<Item = R>> Read for PiecewiseReader<R, I> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        loop {
            match self.current {
                Some(ref mut r) => {
                    let n = r.read(buf)?;
                    if n > 0 {
                        return Ok(n);
                    }
                }
                None => return Ok(0),
            }
            self.current = self.readers.next();
        }
    }
}

pub fn pieces<'a>(
    parts: &'a [&'a [u8]],
) -> PiecewiseReader<&'a [u8], impl Iterator<Item = &'a [u8]>> {
    PiecewiseReader::new(parts.iter().copied())
}

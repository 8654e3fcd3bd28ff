//! A buffered byte reader with one byte of pushback.
//!
//! Sources may be pipes or standard input, so "unreading" a byte can't be
//! done by seeking. Instead the reader keeps a single pending byte in front of
//! its chunk buffer and hands it out before anything else.

use std::io::{self, BufRead, Read};

const DEFAULT_BUF_SIZE: usize = 8192;

/// A `std::io::Read` wrapper with an internal chunk buffer and a one-byte
/// pushback slot.
#[derive(Debug)]
pub struct PushbackReader<R> {
    inner: R,
    input_buf: Box<[u8]>,
    input_pos: usize,
    input_size: usize,
    pushed_back: Option<u8>,
}

impl<R: Read> PushbackReader<R> {
    pub fn new(inner: R) -> Self {
        Self::with_capacity(inner, DEFAULT_BUF_SIZE)
    }

    /// Create a reader whose chunk buffer holds `buf_size` bytes.
    ///
    /// # Panics
    ///
    /// Panics if `buf_size` is zero.
    pub fn with_capacity(inner: R, buf_size: usize) -> Self {
        assert!(buf_size > 0, "chunk buffer must hold at least one byte");
        Self {
            inner,
            input_buf: vec![0; buf_size].into_boxed_slice(),
            input_pos: 0,
            input_size: 0,
            pushed_back: None,
        }
    }

    /// Read the next byte, or `None` once the stream is exhausted.
    ///
    /// # Errors
    ///
    /// Propagates any error from the inner reader other than `Interrupted`.
    pub fn read_byte(&mut self) -> io::Result<Option<u8>> {
        if let Some(byte) = self.pushed_back.take() {
            return Ok(Some(byte));
        }
        if self.input_pos >= self.input_size {
            self.refill()?;
        }
        if self.input_pos >= self.input_size {
            return Ok(None);
        }
        let byte = self.input_buf[self.input_pos];
        self.input_pos += 1;
        Ok(Some(byte))
    }

    /// Push `byte` back so the next read returns it first.
    ///
    /// Only one byte may be pending at a time.
    pub fn unread(&mut self, byte: u8) {
        debug_assert!(self.pushed_back.is_none(), "pushback slot already in use");
        self.pushed_back = Some(byte);
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    fn refill(&mut self) -> io::Result<()> {
        self.input_pos = 0;
        self.input_size = 0;
        loop {
            match self.inner.read(&mut self.input_buf) {
                Ok(bytes_read) => {
                    self.input_size = bytes_read;
                    return Ok(());
                }
                Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
                Err(err) => return Err(err),
            }
        }
    }
}

impl<R: Read> Read for PushbackReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let available = self.fill_buf()?;
        let bytes_now = buf.len().min(available.len());
        buf[..bytes_now].copy_from_slice(&available[..bytes_now]);
        self.consume(bytes_now);
        Ok(bytes_now)
    }
}

impl<R: Read> BufRead for PushbackReader<R> {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        if self.pushed_back.is_none() && self.input_pos >= self.input_size {
            self.refill()?;
        }
        match &self.pushed_back {
            Some(byte) => Ok(std::slice::from_ref(byte)),
            None => Ok(&self.input_buf[self.input_pos..self.input_size]),
        }
    }

    fn consume(&mut self, amt: usize) {
        if amt == 0 {
            return;
        }
        if self.pushed_back.take().is_some() {
            // the pushed-back byte is the whole of the slice `fill_buf` returned
            debug_assert!(amt == 1, "consumed past the pushed-back byte");
            return;
        }
        self.input_pos = (self.input_pos + amt).min(self.input_size);
    }
}

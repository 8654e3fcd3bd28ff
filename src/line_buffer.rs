//! Reusable, grow-only byte buffer holding the line currently being read.

/// A growable byte buffer for one logical line.
///
/// The buffer is cleared (not freed) between lines so a single allocation is
/// reused for every line of every source. Whenever bytes are written the
/// capacity is kept at least one byte larger than the content, and when it
/// has to grow it over-allocates by roughly 1% to amortize reallocations.
/// Capacity never shrinks.
#[derive(Debug, Default, Clone)]
pub struct LineBuffer {
    bytes: Vec<u8>,
}

/// Capacity to allocate when `required` bytes no longer fit:
/// `ceil(1.01 * required)`.
#[must_use]
pub fn grown_capacity(required: usize) -> usize {
    required.saturating_add(required.div_ceil(100))
}

impl LineBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(capacity),
        }
    }

    /// Reset the logical length to zero, keeping the allocation.
    pub fn clear(&mut self) {
        self.bytes.clear();
    }

    pub fn extend_from_slice(&mut self, bytes: &[u8]) {
        if bytes.is_empty() {
            return;
        }
        self.reserve_for(bytes.len());
        self.bytes.extend_from_slice(bytes);
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.bytes.capacity()
    }

    fn reserve_for(&mut self, additional: usize) {
        // one spare slot past the content, as if for a terminator
        let required = self.bytes.len() + additional + 1;
        if required > self.bytes.capacity() {
            let target = grown_capacity(required);
            self.bytes.reserve_exact(target - self.bytes.len());
        }
    }
}

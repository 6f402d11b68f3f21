//! Output sink.

/// Initial capacity for a sink created by [`Sink::new`].
pub(crate) const DEFAULT_SIZE: usize = 128;

/// Growable append-only output buffer with a tracked write offset.
///
/// Every encoding path funnels its bytes through a single `Sink`. The buffer
/// only ever grows while encoding; [`Sink::truncate`] may shrink it back to a
/// previously observed offset (container codecs use this to trim a trailing
/// separator), and [`Sink::finish`] consumes the sink, returning exactly the
/// bytes written.
pub struct Sink {
    buf: Vec<u8>,
}

impl Sink {
    /// Creates a sink with the default initial capacity.
    #[inline]
    pub fn new() -> Sink {
        Sink {
            buf: Vec::with_capacity(DEFAULT_SIZE),
        }
    }

    /// Creates a sink with the given initial capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Sink {
        Sink {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Current write offset in bytes.
    #[inline]
    pub fn offset(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Guarantees at least `additional` more bytes can be appended without
    /// reallocation. Growth at least doubles the capacity.
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.buf.reserve(additional);
    }

    #[inline]
    pub fn push_byte(&mut self, byte: u8) {
        debug_assert!(byte.is_ascii());
        self.buf.push(byte);
    }

    #[inline]
    pub fn push_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    #[inline]
    pub fn push_str(&mut self, s: &str) {
        self.buf.extend_from_slice(s.as_bytes());
    }

    /// Last byte written, if any.
    #[inline]
    pub fn last(&self) -> Option<u8> {
        self.buf.last().copied()
    }

    /// Shrinks the write offset back to `offset`.
    ///
    /// # Panics
    ///
    /// Panics if `offset` is beyond the current write offset; a sink never
    /// grows through truncation.
    #[inline]
    pub fn truncate(&mut self, offset: usize) {
        assert!(
            offset <= self.buf.len(),
            "cannot truncate a sink past its write offset: the offset is {} but the request is {}",
            self.buf.len(),
            offset
        );
        self.buf.truncate(offset);
    }

    /// Resets the sink for reuse, keeping the allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Bytes written so far.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consumes the sink, returning exactly the bytes written as text.
    #[inline]
    pub fn finish(self) -> String {
        debug_assert!(std::str::from_utf8(&self.buf).is_ok());
        // SAFETY: every write method only ever appends complete UTF-8
        // sequences, so the buffer is valid UTF-8 at any offset boundary.
        unsafe { String::from_utf8_unchecked(self.buf) }
    }
}

impl Default for Sink {
    #[inline]
    fn default() -> Sink {
        Sink::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_growth() {
        let mut sink = Sink::with_capacity(0);
        assert_eq!(sink.offset(), 0);
        sink.push_str("abcdef");
        sink.push_byte(b',');
        assert_eq!(sink.offset(), 7);
        assert!(sink.capacity() >= 7);
        assert_eq!(sink.finish(), "abcdef,");
    }

    #[test]
    fn test_truncate() {
        let mut sink = Sink::new();
        sink.push_str("[1,2,");
        sink.truncate(sink.offset() - 1);
        sink.push_byte(b']');
        assert_eq!(sink.finish(), "[1,2]");
    }

    #[test]
    #[should_panic]
    fn test_truncate_past_offset() {
        let mut sink = Sink::new();
        sink.push_str("ab");
        sink.truncate(3);
    }
}

//! Fixed-capacity line buffer

use core::str;
use heapless::Vec;

use super::error::Error;

/// The line currently being typed.
///
/// Holds at most `N` bytes. Only ASCII is ever pushed, so the contents are
/// always valid UTF-8.
#[derive(Debug, Clone, Default)]
pub struct LineBuffer<const N: usize> {
    buf: Vec<u8, N>,
}

impl<const N: usize> LineBuffer<N> {
    /// Create an empty buffer.
    pub const fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Append a byte, failing with [`Error::BufferFull`] at capacity.
    pub fn push(&mut self, byte: u8) -> Result<(), Error> {
        self.buf.push(byte).map_err(|_| Error::BufferFull)
    }

    /// Remove and return the last byte.
    pub fn pop(&mut self) -> Option<u8> {
        self.buf.pop()
    }

    /// Shorten the line to `len` bytes. No-op if already shorter.
    pub fn truncate(&mut self, len: usize) {
        self.buf.truncate(len);
    }

    /// Empty the buffer.
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Number of bytes in the line.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether the line is empty.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Whether another byte would overflow.
    pub fn is_full(&self) -> bool {
        self.buf.is_full()
    }

    /// The line as text.
    pub fn as_str(&self) -> &str {
        str::from_utf8(&self.buf).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_until_full() {
        let mut line: LineBuffer<4> = LineBuffer::new();
        for &b in b"abcd" {
            assert_eq!(line.push(b), Ok(()));
        }
        assert!(line.is_full());
        assert_eq!(line.push(b'e'), Err(Error::BufferFull));
        assert_eq!(line.as_str(), "abcd");
    }

    #[test]
    fn pop_and_truncate() {
        let mut line: LineBuffer<16> = LineBuffer::new();
        for &b in b"status" {
            line.push(b).unwrap();
        }
        assert_eq!(line.pop(), Some(b's'));
        line.truncate(2);
        assert_eq!(line.as_str(), "st");
        line.truncate(10);
        assert_eq!(line.len(), 2);
        line.clear();
        assert!(line.is_empty());
        assert_eq!(line.pop(), None);
    }
}

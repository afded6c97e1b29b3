//! Growable byte buffer backing the encoder
//!
//! Append-only between flushes: bytes go in, order is preserved, and `flush`
//! hands the whole accumulation back while resetting the buffer to empty.

/// Append-only octet buffer with amortized O(1) writes
#[derive(Debug, Default)]
pub struct MutableBuffer {
    buf: Vec<u8>,
}

impl MutableBuffer {
    /// Create an empty buffer with room for a typical receipt
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(1024),
        }
    }

    /// Append raw bytes in order
    pub fn write(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Append a string's UTF-8 code units verbatim
    pub fn write_str(&mut self, s: &str) {
        self.buf.extend_from_slice(s.as_bytes());
    }

    /// Append a single byte
    pub fn write_u8(&mut self, n: u8) {
        self.buf.push(n);
    }

    /// Append a 16-bit value, little-endian
    pub fn write_u16_le(&mut self, n: u16) {
        self.buf.extend_from_slice(&n.to_le_bytes());
    }

    /// Number of bytes accumulated since the last flush
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Return everything accumulated, in append order, and reset to empty.
    ///
    /// The returned bytes are a snapshot; later writes never touch them.
    pub fn flush(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_preserve_order() {
        let mut buf = MutableBuffer::new();
        buf.write(&[0x1B, 0x40]);
        buf.write_str("ok");
        buf.write_u8(0x00);
        assert_eq!(buf.flush(), vec![0x1B, 0x40, b'o', b'k', 0x00]);
    }

    #[test]
    fn u16_is_little_endian() {
        let mut buf = MutableBuffer::new();
        buf.write_u16_le(0x0102);
        assert_eq!(buf.flush(), vec![0x02, 0x01]);
    }

    #[test]
    fn flush_resets_and_snapshots() {
        let mut buf = MutableBuffer::new();
        buf.write(b"abc");
        let first = buf.flush();
        assert_eq!(first, b"abc");
        assert!(buf.is_empty());

        // Second flush is empty, and new writes don't leak into the snapshot
        assert!(buf.flush().is_empty());
        buf.write(b"xyz");
        assert_eq!(first, b"abc");
        assert_eq!(buf.flush(), b"xyz");
    }
}

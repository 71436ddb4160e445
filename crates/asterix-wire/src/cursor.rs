use crate::error::WireError;

/// Bounds-checked sequential reader over an immutable byte buffer.
///
/// Every read is all-or-nothing: either exactly the requested bytes are
/// returned and the position advances, or [`WireError::OutOfBounds`] is
/// returned and the position stays where it was.
///
/// A cursor remembers where its buffer starts inside the original input
/// (`base`), so [`position`](Self::position) always reports an absolute
/// offset, even for a [`sub_cursor`](Self::sub_cursor) bounded to one
/// block's payload.
///
/// ```text
///   original input
///   ┌────────────────────────────────────────────────────┐
///   │ CAT LEN LEN │ record record record │ CAT LEN LEN … │
///   └────────────────────────────────────────────────────┘
///                 ▲ base                 ▲ base + buf.len()
///                 └── sub-cursor view ───┘
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
    base: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at offset 0 of `buf`.
    #[must_use]
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            buf,
            pos: 0,
            base: 0,
        }
    }

    /// Absolute offset of the next unread byte in the original input.
    #[must_use]
    pub fn position(&self) -> usize {
        self.base + self.pos
    }

    /// Number of unread bytes left in this view.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// The unread bytes, without advancing.
    #[must_use]
    pub fn rest(&self) -> &'a [u8] {
        &self.buf[self.pos..]
    }

    /// Read exactly `n` bytes.
    ///
    /// # Errors
    ///
    /// [`WireError::OutOfBounds`] if fewer than `n` bytes remain. The
    /// position is not moved in that case.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], WireError> {
        let available = self.remaining();
        if n > available {
            return Err(WireError::OutOfBounds {
                offset: self.position(),
                requested: n,
                available,
            });
        }
        let start = self.pos;
        self.pos += n;
        Ok(&self.buf[start..self.pos])
    }

    /// Read a single byte.
    ///
    /// # Errors
    ///
    /// [`WireError::OutOfBounds`] at end of input.
    pub fn read_u8(&mut self) -> Result<u8, WireError> {
        Ok(self.read_bytes(1)?[0])
    }

    /// Read a big-endian `u16` (ASTERIX is big-endian throughout).
    ///
    /// # Errors
    ///
    /// [`WireError::OutOfBounds`] if fewer than 2 bytes remain.
    pub fn read_u16_be(&mut self) -> Result<u16, WireError> {
        let bytes = self.read_bytes(2)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    /// Split off a view over the next `len` bytes and advance past them.
    ///
    /// The returned cursor cannot read beyond those `len` bytes, which
    /// is how a block's payload is kept from bleeding into the next
    /// block.
    ///
    /// # Errors
    ///
    /// [`WireError::OutOfBounds`] if fewer than `len` bytes remain.
    pub fn sub_cursor(&mut self, len: usize) -> Result<Cursor<'a>, WireError> {
        let base = self.position();
        let buf = self.read_bytes(len)?;
        Ok(Cursor { buf, pos: 0, base })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_bytes_advances() {
        let data = [1, 2, 3, 4, 5];
        let mut cursor = Cursor::new(&data);
        assert_eq!(cursor.read_bytes(2).unwrap(), &[1, 2]);
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.remaining(), 3);
        assert_eq!(cursor.read_bytes(3).unwrap(), &[3, 4, 5]);
        assert!(cursor.is_empty());
    }

    #[test]
    fn read_past_end_leaves_position() {
        let data = [0xAA, 0xBB, 0xCC];
        let mut cursor = Cursor::new(&data);
        cursor.read_u8().unwrap();

        let err = cursor.read_bytes(5).unwrap_err();
        assert_eq!(
            err,
            WireError::OutOfBounds {
                offset: 1,
                requested: 5,
                available: 2,
            }
        );
        // All-or-nothing: nothing was consumed by the failed read
        assert_eq!(cursor.position(), 1);
        assert_eq!(cursor.read_bytes(2).unwrap(), &[0xBB, 0xCC]);
    }

    #[test]
    fn zero_length_read_is_fine_at_end() {
        let mut cursor = Cursor::new(&[]);
        assert_eq!(cursor.read_bytes(0).unwrap(), &[] as &[u8]);
        assert!(cursor.read_u8().is_err());
    }

    #[test]
    fn read_u16_is_big_endian() {
        let mut cursor = Cursor::new(&[0x01, 0x02]);
        assert_eq!(cursor.read_u16_be().unwrap(), 0x0102);
    }

    #[test]
    fn sub_cursor_is_bounded_and_reports_absolute_offsets() {
        let data = [0x30, 0x00, 0x06, 0x80, 0x01, 0x02, 0xFF];
        let mut cursor = Cursor::new(&data);
        cursor.read_bytes(3).unwrap();

        let mut payload = cursor.sub_cursor(3).unwrap();
        assert_eq!(cursor.position(), 6);
        assert_eq!(payload.position(), 3);
        assert_eq!(payload.remaining(), 3);

        payload.read_bytes(2).unwrap();
        let err = payload.read_bytes(2).unwrap_err();
        assert_eq!(
            err,
            WireError::OutOfBounds {
                offset: 5,
                requested: 2,
                available: 1,
            }
        );
        // The parent still sees the trailing byte the view could not reach
        assert_eq!(cursor.read_u8().unwrap(), 0xFF);
    }

    #[test]
    fn sub_cursor_too_long_fails() {
        let mut cursor = Cursor::new(&[1, 2]);
        assert!(matches!(
            cursor.sub_cursor(3),
            Err(WireError::OutOfBounds { requested: 3, .. })
        ));
        assert_eq!(cursor.position(), 0);
    }
}

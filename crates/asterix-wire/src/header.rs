use crate::cursor::Cursor;
use crate::error::WireError;

/// Size of the block header: CAT (1 byte) + LEN (2 bytes).
pub const HEADER_SIZE: usize = 3;

/// The header in front of every ASTERIX data block.
///
/// ```text
/// ┌────────┬─────────┬──────────────────────────────────────────┐
/// │ Offset │ Size    │ Description                              │
/// ├────────┼─────────┼──────────────────────────────────────────┤
/// │ 0x00   │ 1 byte  │ CAT: data category                       │
/// │ 0x01   │ 2 bytes │ LEN: block length, big-endian, including │
/// │        │         │      these 3 header bytes                │
/// └────────┴─────────┴──────────────────────────────────────────┘
/// ```
///
/// LEN is the one structural anchor that survives a category the
/// decoder knows nothing about: skipping LEN bytes always lands on the
/// next block header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockHeader {
    pub category: u8,
    pub declared_len: u16,
}

impl BlockHeader {
    /// Read the 3-byte header.
    ///
    /// # Errors
    ///
    /// [`WireError::OutOfBounds`] if fewer than 3 bytes remain.
    pub fn read_from(cursor: &mut Cursor<'_>) -> Result<Self, WireError> {
        let bytes = cursor.read_bytes(HEADER_SIZE)?;
        Ok(Self {
            category: bytes[0],
            declared_len: u16::from_be_bytes([bytes[1], bytes[2]]),
        })
    }

    /// Payload length (LEN minus the header), or `None` when LEN is too
    /// small to even cover the header.
    #[must_use]
    pub fn payload_len(&self) -> Option<usize> {
        usize::from(self.declared_len).checked_sub(HEADER_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_category_and_length() {
        let mut cursor = Cursor::new(&[0x30, 0x00, 0x2A, 0xFF]);
        let header = BlockHeader::read_from(&mut cursor).unwrap();
        assert_eq!(header.category, 48);
        assert_eq!(header.declared_len, 42);
        assert_eq!(header.payload_len(), Some(39));
        assert_eq!(cursor.position(), HEADER_SIZE);
    }

    #[test]
    fn header_only_block_has_empty_payload() {
        let header = BlockHeader {
            category: 34,
            declared_len: 3,
        };
        assert_eq!(header.payload_len(), Some(0));
    }

    #[test]
    fn length_below_header_size() {
        let header = BlockHeader {
            category: 34,
            declared_len: 2,
        };
        assert_eq!(header.payload_len(), None);
    }

    #[test]
    fn truncated_header() {
        let mut cursor = Cursor::new(&[0x30, 0x00]);
        assert!(matches!(
            BlockHeader::read_from(&mut cursor),
            Err(WireError::OutOfBounds { requested: 3, available: 2, .. })
        ));
    }
}

use crate::cursor::Cursor;
use crate::error::WireError;

/// Field indices that fit in one presence byte (bit 0 is FX).
pub const FIELDS_PER_BYTE: usize = 7;

/// Longest presence field that still yields `u8` field indices.
/// 36 × 7 = 252 ≤ 255.
pub const MAX_FSPEC_BYTES: usize = 36;

/// A decoded presence field (FSPEC).
///
/// ```text
///   byte 0                     byte 1
///   ┌──┬──┬──┬──┬──┬──┬──┬──┐  ┌──┬──┬──┬──┬──┬──┬──┬──┐
///   │ 1│ 2│ 3│ 4│ 5│ 6│ 7│FX│  │ 8│ 9│10│11│12│13│14│FX│ …
///   └──┴──┴──┴──┴──┴──┴──┴──┘  └──┴──┴──┴──┴──┴──┴──┴──┘
///    MSB                 LSB
/// ```
///
/// Field indices are 1-based and continue across byte boundaries. The
/// chain ends at the first byte whose FX bit is clear.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fspec {
    /// Present field indices in ascending order.
    pub indices: Vec<u8>,
    /// Number of presence bytes consumed.
    pub len: usize,
}

impl Fspec {
    #[must_use]
    pub fn contains(&self, index: u8) -> bool {
        self.indices.binary_search(&index).is_ok()
    }
}

/// Decode a presence field from the cursor.
///
/// The chain ends at the first byte whose FX bit is clear, however many
/// bytes that takes. Whether each flagged index exists is for the caller
/// to check against its profile. The only bound is [`MAX_FSPEC_BYTES`],
/// past which indices would no longer fit in a `u8`.
///
/// # Errors
///
/// - [`WireError::OutOfBounds`] if the cursor is already empty.
/// - [`WireError::TruncatedPresence`] if FX is set on the last byte the
///   cursor holds.
/// - [`WireError::PresenceTooLong`] if FX is still set on byte
///   [`MAX_FSPEC_BYTES`].
pub fn decode_fspec(cursor: &mut Cursor<'_>) -> Result<Fspec, WireError> {
    let start = cursor.position();

    let mut indices = Vec::new();
    let mut len = 0;

    loop {
        let offset = cursor.position();
        let byte = cursor.read_u8()?;

        for bit in 0..FIELDS_PER_BYTE {
            if byte & (0x80 >> bit) != 0 {
                // len < MAX_FSPEC_BYTES keeps this below 253
                indices.push((len * FIELDS_PER_BYTE + bit + 1) as u8);
            }
        }
        len += 1;

        if byte & 0x01 == 0 {
            return Ok(Fspec { indices, len });
        }
        if cursor.is_empty() {
            return Err(WireError::TruncatedPresence { offset });
        }
        if len == MAX_FSPEC_BYTES {
            return Err(WireError::PresenceTooLong {
                offset: start,
                max_bytes: MAX_FSPEC_BYTES,
            });
        }
    }
}

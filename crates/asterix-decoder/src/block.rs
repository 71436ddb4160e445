use asterix_types::{Block, ProfileRegistry};
use asterix_wire::{BlockHeader, Cursor};
use log::debug;

use crate::error::{DecodeError, Incomplete};
use crate::record::decode_record;

/// Decode one data block starting at the cursor.
///
/// Decoding proceeds in three steps:
///
///   1. **Header**: read CAT and LEN. LEN must cover at least the header
///      and must fit in the bytes left in the input.
///   2. **Profile**: look up CAT. Without a profile the payload is
///      consumed and returned inside [`DecodeError::UnknownCategory`].
///   3. **Records**: bound a sub-cursor to the `LEN − 3` payload bytes
///      and decode records until it is empty. A record that needs bytes
///      past the payload overruns LEN and fails as
///      [`DecodeError::MalformedBlock`], with the short read as `source`.
///
/// Whenever a block header was read, the cursor ends up exactly LEN
/// bytes further on if decoding succeeded or the category was unknown.
///
/// # Errors
///
/// Returns the error paired with the partially decoded block, if one
/// exists yet:
///
/// - `partial = None`: [`DecodeError::Wire`] for a truncated header,
///   [`DecodeError::MalformedBlock`], [`DecodeError::UnknownCategory`].
/// - `partial = Some(block)`: a record failed; `block.records` holds the
///   records decoded before it, followed by the partial failing record.
pub fn decode_block(
    cursor: &mut Cursor<'_>,
    registry: &ProfileRegistry,
) -> Result<Block, Incomplete<Option<Block>>> {
    let offset = cursor.position();
    let header = BlockHeader::read_from(cursor).map_err(|e| Incomplete::new(None, e.into()))?;

    let available = cursor.remaining();
    let payload_len = match header.payload_len() {
        Some(len) if len <= available => len,
        _ => {
            return Err(Incomplete::new(
                None,
                DecodeError::MalformedBlock {
                    offset,
                    category: header.category,
                    declared_len: header.declared_len,
                    available: available + asterix_wire::HEADER_SIZE,
                    source: None,
                },
            ));
        }
    };

    // LEN was checked against `available` above
    let mut payload = cursor
        .sub_cursor(payload_len)
        .map_err(|e| Incomplete::new(None, e.into()))?;

    let Some(profile) = registry.get(header.category) else {
        return Err(Incomplete::new(
            None,
            DecodeError::UnknownCategory {
                offset,
                category: header.category,
                declared_len: header.declared_len,
                payload: payload.rest().to_vec(),
            },
        ));
    };

    let mut block = Block {
        category: header.category,
        declared_len: header.declared_len,
        offset,
        records: Vec::new(),
    };

    while !payload.is_empty() {
        let remaining = payload.remaining();
        match decode_record(&mut payload, profile) {
            Ok(record) => block.records.push(record),
            Err(failure) => {
                block.records.push(failure.partial);
                // LEN fits the input, so a short read means the record overran LEN
                let error = if failure.error.is_truncation() {
                    DecodeError::MalformedBlock {
                        offset,
                        category: header.category,
                        declared_len: header.declared_len,
                        available: remaining,
                        source: Some(Box::new(failure.error)),
                    }
                } else {
                    failure.error
                };
                return Err(Incomplete::new(Some(block), error));
            }
        }
    }

    debug!(
        "CAT{:03} block at {offset}: {} records, {} bytes",
        block.category,
        block.records.len(),
        block.declared_len
    );
    Ok(block)
}

use asterix_types::{CategoryProfile, Field, Record};
use asterix_wire::{Cursor, decode_fspec};
use log::trace;

use crate::error::{DecodeError, Incomplete};
use crate::item::decode_item;

/// Decode one record: presence field, then each flagged item in
/// ascending field index order.
///
/// ```text
///   decode_fspec ──▶ [1, 2, 4, …] ──▶ profile.field(i) ──▶ decode_item
///                                          │
///                                   UnknownField if absent
/// ```
///
/// On success `record.consumed` is exactly how far the cursor moved.
///
/// # Errors
///
/// Returns the error paired with the record built so far: every item
/// decoded before the failing one is kept, and `consumed` covers the
/// presence field plus those items.
pub fn decode_record(
    cursor: &mut Cursor<'_>,
    profile: &CategoryProfile,
) -> Result<Record, Incomplete<Record>> {
    let offset = cursor.position();
    let mut record = Record {
        offset,
        ..Record::default()
    };

    let fspec = match decode_fspec(cursor) {
        Ok(fspec) => fspec,
        Err(e) => return Err(Incomplete::new(record, e.into())),
    };
    record.fspec_len = fspec.len;

    for index in fspec.indices {
        let item = profile
            .field(index)
            .ok_or(DecodeError::UnknownField {
                category: profile.category,
                field: index,
                subfield: None,
                offset,
            })
            .and_then(|spec| decode_item(cursor, profile.category, spec));

        match item {
            Ok(item) => record.fields.push(Field { index, item }),
            Err(error) => {
                record.consumed = record.fspec_len
                    + record
                        .fields
                        .iter()
                        .map(|f| f.item.wire_len())
                        .sum::<usize>();
                return Err(Incomplete::new(record, error));
            }
        }
    }

    record.consumed = cursor.position() - offset;
    trace!(
        "CAT{:03} record at {offset}: {} fields, {} bytes",
        profile.category,
        record.fields.len(),
        record.consumed
    );
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use asterix_types::{FieldSpec, Item};
    use asterix_wire::WireError;

    fn profile() -> CategoryProfile {
        CategoryProfile::new(
            255,
            "test",
            vec![
                FieldSpec::fixed(1, "SACSIC", 2),
                FieldSpec::fixed(2, "HEM", 3),
                FieldSpec::extended(3, "SPE", 1, 1),
                FieldSpec::fixed(4, "NIVC", 4),
                FieldSpec::repetitive(5, "TXTC", 1),
            ],
        )
    }

    #[test]
    fn decodes_fields_in_presence_order() {
        // FSPEC 1001_0000: fields 1 and 4
        let bytes = [0x90, 0x08, 0x11, 0x00, 0x64, 0x01, 0x2C];
        let mut cursor = Cursor::new(&bytes);
        let record = decode_record(&mut cursor, &profile()).unwrap();

        assert_eq!(record.indices().collect::<Vec<_>>(), vec![1, 4]);
        assert_eq!(record.fspec_len, 1);
        assert_eq!(record.consumed, bytes.len());
        assert_eq!(
            record.get(4),
            Some(&Item::Fixed {
                data: vec![0x00, 0x64, 0x01, 0x2C]
            })
        );
    }

    #[test]
    fn consumed_matches_item_lengths() {
        // fields 1, 2, 3 (with one secondary), 5
        let bytes = [
            0xE8, 0x08, 0x11, 0x00, 0x00, 0x80, 0x03, 0x40, 0x02, b'o', b'k',
        ];
        let mut cursor = Cursor::new(&bytes);
        let record = decode_record(&mut cursor, &profile()).unwrap();

        let items: usize = record.fields.iter().map(|f| f.item.wire_len()).sum();
        assert_eq!(record.fspec_len + items, record.consumed);
        assert_eq!(record.consumed, cursor.position());
        assert_eq!(record.len(), 4);
    }

    #[test]
    fn unknown_field_keeps_partial_record() {
        // fields 1 and 6; the profile has no 6
        let bytes = [0x84, 0x08, 0x11, 0xFF];
        let mut cursor = Cursor::new(&bytes);
        let failure = decode_record(&mut cursor, &profile()).unwrap_err();

        assert_eq!(
            failure.error,
            DecodeError::UnknownField {
                category: 255,
                field: 6,
                subfield: None,
                offset: 0,
            }
        );
        assert_eq!(failure.partial.indices().collect::<Vec<_>>(), vec![1]);
        assert_eq!(failure.partial.consumed, 3);
    }

    #[test]
    fn truncated_item_keeps_partial_record() {
        // fields 1 and 2, but HEM is cut short
        let bytes = [0xC0, 0x08, 0x11, 0x00];
        let mut cursor = Cursor::new(&bytes);
        let failure = decode_record(&mut cursor, &profile()).unwrap_err();

        assert!(matches!(
            failure.error,
            DecodeError::TruncatedItem {
                field: 2,
                offset: 3,
                ..
            }
        ));
        assert_eq!(failure.partial.len(), 1);
    }

    #[test]
    fn presence_extending_past_profile() {
        // fields 1 and 8; the profile stops at 5
        let bytes = [0x81, 0x80, 0x08, 0x11];
        let mut cursor = Cursor::new(&bytes);
        let failure = decode_record(&mut cursor, &profile()).unwrap_err();
        assert_eq!(
            failure.error,
            DecodeError::UnknownField {
                category: 255,
                field: 8,
                subfield: None,
                offset: 0,
            }
        );
        assert_eq!(failure.partial.indices().collect::<Vec<_>>(), vec![1]);
        assert_eq!(failure.partial.consumed, 4);
    }

    #[test]
    fn empty_extension_byte_ends_presence() {
        let bytes = [0x81, 0x00, 0x08, 0x11];
        let mut cursor = Cursor::new(&bytes);
        let record = decode_record(&mut cursor, &profile()).unwrap();
        assert_eq!(record.indices().collect::<Vec<_>>(), vec![1]);
        assert_eq!(record.fspec_len, 2);
        assert_eq!(record.consumed, 4);
    }

    #[test]
    fn endless_presence_is_rejected() {
        let bytes = [0xFF; 48];
        let mut cursor = Cursor::new(&bytes);
        let failure = decode_record(&mut cursor, &profile()).unwrap_err();
        assert!(matches!(
            failure.error,
            DecodeError::Wire(WireError::PresenceTooLong { .. })
        ));
        assert!(failure.partial.is_empty());
    }
}

use asterix_types::profile::find_field;
use asterix_types::{Field, FieldSpec, Item, Shape};
use asterix_wire::{Cursor, WireError, decode_fspec};

use crate::error::DecodeError;

/// Decode one data item according to its declared shape.
///
/// `category` is only used for error context. The cursor is left just
/// past the item on success; on failure its position is unspecified and
/// the caller is expected to stop reading.
///
/// # Errors
///
/// - [`DecodeError::TruncatedItem`] if the shape needs more bytes than
///   the cursor holds (including a truncated compound presence field).
///   A sub-item that runs short is reported against this item's index,
///   with `subfield` set.
/// - [`DecodeError::UnknownField`] if a compound item flags a sub-item
///   its nested profile does not declare.
/// - [`DecodeError::Wire`] with [`WireError::PresenceTooLong`] if a
///   compound presence field never ends.
pub fn decode_item(
    cursor: &mut Cursor<'_>,
    category: u8,
    spec: &FieldSpec,
) -> Result<Item, DecodeError> {
    let offset = cursor.position();
    let truncated = |source: WireError| match source {
        WireError::PresenceTooLong { .. } => DecodeError::Wire(source),
        _ => DecodeError::TruncatedItem {
            category,
            field: spec.index,
            subfield: None,
            name: spec.name,
            offset,
            source,
        },
    };

    match &spec.shape {
        Shape::Fixed(len) => {
            let data = cursor.read_bytes(usize::from(*len)).map_err(truncated)?;
            Ok(Item::Fixed {
                data: data.to_vec(),
            })
        }

        Shape::Extended { primary, secondary } => {
            let first = cursor
                .read_bytes(usize::from(*primary))
                .map_err(truncated)?;
            let mut more = has_fx(first);
            let mut secondaries = Vec::new();
            while more {
                let sub = cursor
                    .read_bytes(usize::from(*secondary))
                    .map_err(truncated)?;
                more = has_fx(sub);
                secondaries.push(sub.to_vec());
            }
            Ok(Item::Extended {
                primary: first.to_vec(),
                secondaries,
            })
        }

        Shape::Repetitive(unit_len) => {
            let count = cursor.read_u8().map_err(truncated)?;
            let total = usize::from(count) * usize::from(*unit_len);
            let data = cursor.read_bytes(total).map_err(truncated)?;
            Ok(Item::Repetitive {
                count,
                unit_len: *unit_len,
                data: data.to_vec(),
            })
        }

        Shape::Compound(nested) => {
            let fspec = decode_fspec(cursor).map_err(truncated)?;
            let mut fields = Vec::with_capacity(fspec.indices.len());
            for index in fspec.indices {
                let sub_spec = find_field(nested, index).ok_or(DecodeError::UnknownField {
                    category,
                    field: spec.index,
                    subfield: Some(index),
                    offset,
                })?;
                let item = decode_item(cursor, category, sub_spec)
                    .map_err(|e| within_compound(e, spec.index, index))?;
                fields.push(Field { index, item });
            }
            Ok(Item::Compound {
                fspec_len: fspec.len,
                fields,
            })
        }

        Shape::Explicit => {
            let len = cursor.read_u8().map_err(truncated)?;
            let data = cursor.read_bytes(usize::from(len)).map_err(truncated)?;
            Ok(Item::Explicit {
                len,
                data: data.to_vec(),
            })
        }
    }
}

/// Re-address an error from inside a compound item to the compound's
/// own index, keeping the failing sub-item as `subfield`.
fn within_compound(error: DecodeError, field: u8, subfield: u8) -> DecodeError {
    match error {
        DecodeError::TruncatedItem {
            category,
            name,
            offset,
            source,
            ..
        } => DecodeError::TruncatedItem {
            category,
            field,
            subfield: Some(subfield),
            name,
            offset,
            source,
        },
        DecodeError::UnknownField {
            category, offset, ..
        } => DecodeError::UnknownField {
            category,
            field,
            subfield: Some(subfield),
            offset,
        },
        other => other,
    }
}

/// Low bit of the last byte of a subfield: another subfield follows.
fn has_fx(subfield: &[u8]) -> bool {
    subfield.last().is_some_and(|b| b & 0x01 != 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(bytes: &[u8], spec: &FieldSpec) -> (Result<Item, DecodeError>, usize) {
        let mut cursor = Cursor::new(bytes);
        let result = decode_item(&mut cursor, 1, spec);
        (result, cursor.position())
    }

    #[test]
    fn fixed_reads_exact_length() {
        let spec = FieldSpec::fixed(1, "I001/010", 2);
        let (item, consumed) = decode(&[0x08, 0x11, 0xFF], &spec);
        assert_eq!(
            item.unwrap(),
            Item::Fixed {
                data: vec![0x08, 0x11]
            }
        );
        assert_eq!(consumed, 2);
    }

    #[test]
    fn extended_primary_only() {
        let spec = FieldSpec::extended(3, "I001/020", 1, 1);
        let (item, consumed) = decode(&[0b1010_0000, 0xFF], &spec);
        assert_eq!(
            item.unwrap(),
            Item::Extended {
                primary: vec![0b1010_0000],
                secondaries: vec![],
            }
        );
        assert_eq!(consumed, 1);
    }

    #[test]
    fn extended_with_one_secondary() {
        let spec = FieldSpec::extended(3, "I001/020", 1, 1);
        let (item, consumed) = decode(&[0b0100_0001, 0b1000_0000, 0x55], &spec);
        match item.unwrap() {
            Item::Extended {
                primary,
                secondaries,
            } => {
                assert_eq!(primary, vec![0x41]);
                assert_eq!(secondaries, vec![vec![0x80]]);
            }
            other => panic!("expected Extended, got {other:?}"),
        }
        assert_eq!(consumed, 2);
    }

    #[test]
    fn extended_chain_of_secondaries() {
        let spec = FieldSpec::extended(3, "I001/020", 1, 1);
        let (item, _) = decode(&[0x01, 0x03, 0x05, 0x40], &spec);
        match item.unwrap() {
            Item::Extended { secondaries, .. } => {
                assert_eq!(secondaries, vec![vec![0x03], vec![0x05], vec![0x40]]);
            }
            other => panic!("expected Extended, got {other:?}"),
        }
    }

    #[test]
    fn extended_with_wider_secondary() {
        // FX of a multi-byte subfield is the low bit of its last byte
        let spec = FieldSpec::extended(3, "I001/020", 2, 1);
        let (item, consumed) = decode(&[0x00, 0x01, 0x00], &spec);
        assert_eq!(
            item.unwrap(),
            Item::Extended {
                primary: vec![0x00, 0x01],
                secondaries: vec![vec![0x00]],
            }
        );
        assert_eq!(consumed, 3);
    }

    #[test]
    fn extended_fx_at_end_of_input_is_truncated() {
        let spec = FieldSpec::extended(3, "I001/020", 1, 1);
        let (item, _) = decode(&[0x01, 0x01], &spec);
        assert!(matches!(
            item,
            Err(DecodeError::TruncatedItem {
                field: 3,
                offset: 0,
                ..
            })
        ));
    }

    #[test]
    fn repetitive_consumes_count_times_unit() {
        let spec = FieldSpec::repetitive(7, "BIAIS", 10);
        let mut bytes = vec![3];
        bytes.extend((0..30).map(|i| i as u8));
        bytes.push(0xEE);

        let (item, consumed) = decode(&bytes, &spec);
        match item.unwrap() {
            Item::Repetitive {
                count,
                unit_len,
                data,
            } => {
                assert_eq!(count, 3);
                assert_eq!(unit_len, 10);
                assert_eq!(data.len(), 30);
                assert_eq!(data[29], 29);
            }
            other => panic!("expected Repetitive, got {other:?}"),
        }
        assert_eq!(consumed, 31);
    }

    #[test]
    fn repetitive_short_buffer_is_truncated() {
        let spec = FieldSpec::repetitive(7, "BIAIS", 10);
        let mut bytes = vec![3];
        bytes.extend([0u8; 24]);
        assert_eq!(bytes.len(), 25);

        let (item, _) = decode(&bytes, &spec);
        assert_eq!(
            item.unwrap_err(),
            DecodeError::TruncatedItem {
                category: 1,
                field: 7,
                subfield: None,
                name: "BIAIS",
                offset: 0,
                source: WireError::OutOfBounds {
                    offset: 1,
                    requested: 30,
                    available: 24,
                },
            }
        );
    }

    #[test]
    fn repetitive_zero_count() {
        let spec = FieldSpec::repetitive(5, "TXTC", 1);
        let (item, consumed) = decode(&[0x00], &spec);
        assert_eq!(
            item.unwrap(),
            Item::Repetitive {
                count: 0,
                unit_len: 1,
                data: vec![],
            }
        );
        assert_eq!(consumed, 1);
    }

    #[test]
    fn explicit_reads_length_then_data() {
        let spec = FieldSpec::explicit(27, "I048/SP");
        let (item, consumed) = decode(&[0x02, 0xAB, 0xCD, 0xEF], &spec);
        assert_eq!(
            item.unwrap(),
            Item::Explicit {
                len: 2,
                data: vec![0xAB, 0xCD],
            }
        );
        assert_eq!(consumed, 3);
    }

    #[test]
    fn explicit_missing_length_byte() {
        let spec = FieldSpec::explicit(27, "I048/SP");
        let (item, _) = decode(&[], &spec);
        assert!(matches!(item, Err(DecodeError::TruncatedItem { .. })));
    }

    #[test]
    fn explicit_data_shorter_than_length() {
        let spec = FieldSpec::explicit(27, "I048/SP");
        let (item, _) = decode(&[0x04, 0xAB, 0xCD], &spec);
        assert_eq!(
            item.unwrap_err(),
            DecodeError::TruncatedItem {
                category: 1,
                field: 27,
                subfield: None,
                name: "I048/SP",
                offset: 0,
                source: WireError::OutOfBounds {
                    offset: 1,
                    requested: 4,
                    available: 2,
                },
            }
        );
    }

    fn compound_spec() -> FieldSpec {
        FieldSpec::compound(
            20,
            "I048/120",
            vec![
                FieldSpec::fixed(1, "CAL", 2),
                FieldSpec::repetitive(2, "RDS", 6),
            ],
        )
    }

    #[test]
    fn compound_decodes_flagged_subfields() {
        // presence: CAL only
        let (item, consumed) = decode(&[0b1000_0000, 0x03, 0xE8], &compound_spec());
        let item = item.unwrap();
        assert_eq!(
            item.subfield(1),
            Some(&Item::Fixed {
                data: vec![0x03, 0xE8]
            })
        );
        assert!(item.subfield(2).is_none());
        assert_eq!(consumed, 3);
        assert_eq!(item.wire_len(), 3);
    }

    #[test]
    fn compound_with_nested_repetitive() {
        let mut bytes = vec![0b1100_0000, 0x00, 0x10, 0x01];
        bytes.extend([0xAA; 6]);
        let (item, consumed) = decode(&bytes, &compound_spec());
        let item = item.unwrap();
        assert_eq!(item.subfield(2).unwrap().units().count(), 1);
        assert_eq!(consumed, bytes.len());
        assert_eq!(item.wire_len(), bytes.len());
    }

    #[test]
    fn compound_unknown_subfield() {
        // bit for nested index 3 set, nested profile only has 1 and 2
        let (item, _) = decode(&[0b0010_0000, 0x00], &compound_spec());
        assert!(matches!(
            item,
            Err(DecodeError::UnknownField {
                field: 20,
                subfield: Some(3),
                ..
            })
        ));
    }

    #[test]
    fn compound_presence_with_empty_extension() {
        // CAL, then an extension byte flagging nothing
        let (item, consumed) = decode(&[0b1000_0001, 0x00, 0x03, 0xE8], &compound_spec());
        let item = item.unwrap();
        assert_eq!(
            item.subfield(1),
            Some(&Item::Fixed {
                data: vec![0x03, 0xE8]
            })
        );
        assert_eq!(consumed, 4);
        assert_eq!(item.wire_len(), 4);
    }

    #[test]
    fn compound_presence_past_nested_profile_is_unknown_subfield() {
        // second presence byte flags nested index 8
        let (item, _) = decode(&[0b0000_0001, 0b1000_0000], &compound_spec());
        assert!(matches!(
            item,
            Err(DecodeError::UnknownField {
                field: 20,
                subfield: Some(8),
                ..
            })
        ));
    }

    #[test]
    fn compound_presence_without_end() {
        let (item, _) = decode(&[0x01; 40], &compound_spec());
        assert!(matches!(
            item,
            Err(DecodeError::Wire(WireError::PresenceTooLong { .. }))
        ));
    }

    #[test]
    fn truncated_subfield_names_the_compound() {
        // CAL flagged, one of its two bytes present
        let (item, _) = decode(&[0b1000_0000, 0x03], &compound_spec());
        let err = item.unwrap_err();
        assert_eq!(
            err,
            DecodeError::TruncatedItem {
                category: 1,
                field: 20,
                subfield: Some(1),
                name: "CAL",
                offset: 1,
                source: WireError::OutOfBounds {
                    offset: 1,
                    requested: 2,
                    available: 1,
                },
            }
        );
        assert!(err.to_string().starts_with("CAT001 field 20 subfield 1 (CAL) truncated"));
    }

    #[test]
    fn compound_truncated_presence() {
        let spec = FieldSpec::compound(
            7,
            "I001/130",
            (1..=14)
                .map(|i| FieldSpec::fixed(i, "SUB", 1))
                .collect(),
        );
        let (item, _) = decode(&[0x01], &spec);
        assert!(matches!(
            item,
            Err(DecodeError::TruncatedItem {
                field: 7,
                source: WireError::TruncatedPresence { offset: 0 },
                ..
            })
        ));
    }
}

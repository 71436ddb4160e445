use crate::record::Field;

/// One decoded data item: the raw bytes of a field, tagged with the
/// shape it was read with.
///
/// The decoder never interprets the bytes; that is left to the
/// category transforms. What the variant does capture is the structure
/// needed to find the bytes again: which subfield came from the
/// extension chain, how many repetitions there were, which compound
/// sub-items were present.
///
/// ```text
/// ┌────────────┬───────────────────────────────────────────────────┐
/// │ Variant    │ Wire layout                                       │
/// ├────────────┼───────────────────────────────────────────────────┤
/// │ Fixed      │ data [L]                                          │
/// │ Extended   │ primary [P] (FX=1) secondary [S] (FX=1) … (FX=0)  │
/// │ Repetitive │ REP (1 byte) │ data [REP × U]                     │
/// │ Compound   │ presence field │ sub-item │ sub-item │ …         │
/// │ Explicit   │ LEN (1 byte) │ data [LEN]                         │
/// └────────────┴───────────────────────────────────────────────────┘
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Item {
    Fixed {
        data: Vec<u8>,
    },
    Extended {
        primary: Vec<u8>,
        /// Secondary subfields in wire order. Every one except the last
        /// has its low bit set.
        secondaries: Vec<Vec<u8>>,
    },
    /// The repetitions are kept as one contiguous buffer of
    /// `count × unit_len` bytes. Use [`Item::units`] to walk them.
    Repetitive {
        count: u8,
        unit_len: u8,
        data: Vec<u8>,
    },
    Compound {
        /// Length of the nested presence field.
        fspec_len: usize,
        fields: Vec<Field>,
    },
    Explicit {
        len: u8,
        data: Vec<u8>,
    },
}

impl Item {
    /// Number of bytes this item occupied on the wire, including count,
    /// length and nested presence octets.
    #[must_use]
    pub fn wire_len(&self) -> usize {
        match self {
            Self::Fixed { data } => data.len(),
            Self::Extended {
                primary,
                secondaries,
            } => primary.len() + secondaries.iter().map(Vec::len).sum::<usize>(),
            Self::Repetitive { data, .. } | Self::Explicit { data, .. } => 1 + data.len(),
            Self::Compound { fspec_len, fields } => {
                fspec_len + fields.iter().map(|f| f.item.wire_len()).sum::<usize>()
            }
        }
    }

    /// Short name of the variant, for diagnostics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Fixed { .. } => "fixed",
            Self::Extended { .. } => "extended",
            Self::Repetitive { .. } => "repetitive",
            Self::Compound { .. } => "compound",
            Self::Explicit { .. } => "explicit",
        }
    }

    /// The bytes of a fixed item.
    #[must_use]
    pub fn as_fixed(&self) -> Option<&[u8]> {
        match self {
            Self::Fixed { data } => Some(data),
            _ => None,
        }
    }

    /// Iterate the repetitions of a repetitive item, `unit_len` bytes
    /// each. Empty for every other variant.
    pub fn units(&self) -> impl Iterator<Item = &[u8]> {
        let (data, unit_len) = match self {
            Self::Repetitive { data, unit_len, .. } => (data.as_slice(), usize::from(*unit_len)),
            _ => (&[][..], 1),
        };
        data.chunks_exact(unit_len.max(1))
    }

    /// Look up a sub-item of a compound item by nested index.
    #[must_use]
    pub fn subfield(&self, index: u8) -> Option<&Item> {
        match self {
            Self::Compound { fields, .. } => fields
                .iter()
                .find(|f| f.index == index)
                .map(|f| &f.item),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_len_per_variant() {
        assert_eq!(Item::Fixed { data: vec![0; 3] }.wire_len(), 3);
        assert_eq!(
            Item::Extended {
                primary: vec![0x01],
                secondaries: vec![vec![0x03], vec![0x00]],
            }
            .wire_len(),
            3
        );
        assert_eq!(
            Item::Repetitive {
                count: 3,
                unit_len: 10,
                data: vec![0; 30],
            }
            .wire_len(),
            31
        );
        assert_eq!(
            Item::Explicit {
                len: 4,
                data: vec![0; 4],
            }
            .wire_len(),
            5
        );
    }

    #[test]
    fn compound_wire_len_counts_nested_presence() {
        let item = Item::Compound {
            fspec_len: 1,
            fields: vec![
                Field {
                    index: 1,
                    item: Item::Fixed { data: vec![0x10] },
                },
                Field {
                    index: 4,
                    item: Item::Fixed {
                        data: vec![0x20, 0x21],
                    },
                },
            ],
        };
        assert_eq!(item.wire_len(), 4);
        assert_eq!(
            item.subfield(4),
            Some(&Item::Fixed {
                data: vec![0x20, 0x21]
            })
        );
        assert!(item.subfield(2).is_none());
    }

    #[test]
    fn units_split_repetitions() {
        let item = Item::Repetitive {
            count: 2,
            unit_len: 2,
            data: vec![1, 2, 3, 4],
        };
        let units: Vec<&[u8]> = item.units().collect();
        assert_eq!(units, vec![&[1, 2][..], &[3, 4][..]]);
        assert_eq!(Item::Fixed { data: vec![1] }.units().count(), 0);
    }
}

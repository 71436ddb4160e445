use crate::item::Item;

/// A field index paired with its decoded item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    /// 1-based field reference number (FRN) within the category, or the
    /// nested index within a compound item.
    pub index: u8,
    pub item: Item,
}

/// One decoded ASTERIX record.
///
/// ```text
/// ┌──────────────────┬──────────┬──────────┬─────┐
/// │ presence (FSPEC) │ item FRN │ item FRN │ …   │
/// └──────────────────┴──────────┴──────────┴─────┘
///   fspec_len bytes    ascending field index order
/// ```
///
/// `fields` is in ascending index order, which is the order the items
/// appear on the wire. `fspec_len` plus the wire length of every item
/// always equals `consumed`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Record {
    /// Absolute offset of the record's first presence byte in the input.
    pub offset: usize,
    pub fspec_len: usize,
    pub fields: Vec<Field>,
    /// Total bytes the record occupied, presence field included.
    pub consumed: usize,
}

impl Record {
    /// Look up a field by index.
    #[must_use]
    pub fn get(&self, index: u8) -> Option<&Item> {
        self.fields
            .binary_search_by_key(&index, |f| f.index)
            .ok()
            .map(|pos| &self.fields[pos].item)
    }

    /// Field indices present in this record, ascending.
    pub fn indices(&self) -> impl Iterator<Item = u8> + '_ {
        self.fields.iter().map(|f| f.index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_finds_fields_by_index() {
        let record = Record {
            offset: 3,
            fspec_len: 1,
            fields: vec![
                Field {
                    index: 1,
                    item: Item::Fixed {
                        data: vec![0x01, 0x02],
                    },
                },
                Field {
                    index: 4,
                    item: Item::Fixed { data: vec![0x7F] },
                },
            ],
            consumed: 4,
        };
        assert_eq!(record.get(4), Some(&Item::Fixed { data: vec![0x7F] }));
        assert!(record.get(2).is_none());
        assert_eq!(record.indices().collect::<Vec<_>>(), vec![1, 4]);
        assert_eq!(record.len(), 2);
    }
}

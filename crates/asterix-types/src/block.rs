use crate::record::Record;

/// One decoded ASTERIX data block.
///
/// ```text
/// ┌─────┬─────────┬────────┬────────┬─────┐
/// │ CAT │ LEN (2) │ record │ record │ …   │
/// └─────┴─────────┴────────┴────────┴─────┘
///   ◀──────────── declared_len ──────────▶
/// ```
///
/// `declared_len` is copied from the wire and includes the 3 header
/// bytes. When a record fails to decode, the block handed back alongside
/// the error holds only the records decoded before it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
  pub category: u8,
  pub declared_len: u16,
  /// Absolute offset of the CAT byte in the input.
  pub offset: usize,
  pub records: Vec<Record>,
}

impl Block {
  /// Payload bytes covered by the decoded records.
  #[must_use]
  pub fn records_len(&self) -> usize {
    self.records.iter().map(|r| r.consumed).sum()
  }
}

/// Errors raised while assembling category profiles into a registry.
///
/// Profiles are static layout data, so these only ever surface when a
/// caller builds a custom [`ProfileRegistry`](crate::ProfileRegistry)
/// with a table that cannot drive the decoder.
///
/// ```text
/// ┌───────────────────┬──────────────────────────────────────────┐
/// │ Variant           │ Cause                                    │
/// ├───────────────────┼──────────────────────────────────────────┤
/// │ DuplicateCategory │ two profiles registered for one CAT      │
/// │ InvalidFieldIndex │ index 0, or an index beyond 252          │
/// │ UnsortedFields    │ indices not strictly ascending           │
/// │ ZeroLength        │ a shape that would consume no bytes      │
/// └───────────────────┴──────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypeError {
  #[error("category {category} is already registered")]
  DuplicateCategory { category: u8 },

  #[error("category {category}: invalid field index {index}")]
  InvalidFieldIndex { category: u8, index: u8 },

  /// Field specs must be listed in strictly ascending index order,
  /// matching presence-bit order.
  #[error("category {category}: field index {index} is out of order or duplicated")]
  UnsortedFields { category: u8, index: u8 },

  #[error("category {category}: field {name} declares a zero length")]
  ZeroLength { category: u8, name: &'static str },
}

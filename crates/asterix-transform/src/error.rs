/// Errors raised while turning a decoded record into a semantic model.
///
/// The decoder already guarantees every item matches its profile, so
/// these only surface when the values inside an item make no sense or
/// when a transform is handed a record laid out by a different profile.
///
/// ```text
/// ┌──────────────────────┬───────────────────────────────────────────┐
/// │ Variant              │ Cause                                     │
/// ├──────────────────────┼───────────────────────────────────────────┤
/// │ InvalidEnumValue     │ a coded value outside its defined range   │
/// │ UnexpectedShape      │ item kind or length not what FRN implies  │
/// │ NoTransform          │ no transform registered for the category  │
/// │ DuplicateTransform   │ two transforms registered for one CAT     │
/// └──────────────────────┴───────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransformError {
  /// A coded field held a value its enumeration does not define.
  ///
  /// Unknown codes are reported rather than mapped to a placeholder so
  /// that a corrupt or newer message is never mistaken for a valid one.
  #[error("invalid {enum_name} value: {value}")]
  InvalidEnumValue { enum_name: &'static str, value: u8 },

  #[error("category {category} field {field}: expected {expected}, found {found}")]
  UnexpectedShape {
    category: u8,
    field: u8,
    expected: String,
    found: String,
  },

  #[error("no transform registered for category {category}")]
  NoTransform { category: u8 },

  #[error("a transform for category {category} is already registered")]
  DuplicateTransform { category: u8 },
}

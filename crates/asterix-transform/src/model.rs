use serde::Serialize;

use crate::cat034::Cat034Model;
use crate::cat048::Cat048Model;
use crate::cat255::Cat255StrModel;

/// The semantic view of one record, tagged by category.
///
/// Serializes with a `category` tag:
///
/// ```text
/// { "category": "cat255", "source": { "sac": 8, "sic": 17 }, ... }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum SemanticModel {
    Cat034(Cat034Model),
    Cat048(Cat048Model),
    Cat255(Cat255StrModel),
}

impl SemanticModel {
    #[must_use]
    pub fn category(&self) -> u8 {
        match self {
            Self::Cat034(_) => crate::cat034::CATEGORY,
            Self::Cat048(_) => crate::cat048::CATEGORY,
            Self::Cat255(_) => crate::cat255::CATEGORY,
        }
    }
}

/// Compact JSON for one model.
///
/// # Errors
///
/// Propagates [`serde_json::Error`]; the built-in models always
/// serialize.
pub fn to_json(model: &SemanticModel) -> serde_json::Result<String> {
    serde_json::to_string(model)
}

/// Indented JSON for one model.
///
/// # Errors
///
/// See [`to_json`].
pub fn to_json_pretty(model: &SemanticModel) -> serde_json::Result<String> {
    serde_json::to_string_pretty(model)
}

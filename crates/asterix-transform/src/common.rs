//! Decoders for values shared by several categories, plus the item
//! accessors every transform uses to check a field's layout.

use asterix_types::{Field, Item};
use serde::Serialize;

use crate::error::TransformError;

/// System Area Code / System Identification Code pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SourceIdentifier {
    pub sac: u8,
    pub sic: u8,
}

impl SourceIdentifier {
    #[must_use]
    pub fn from_bytes(data: [u8; 2]) -> Self {
        Self {
            sac: data[0],
            sic: data[1],
        }
    }
}

/// Time of day in seconds since midnight, from 3 bytes in units of
/// 1/128 s.
#[must_use]
pub fn time_of_day(data: [u8; 3]) -> f64 {
    let raw = u32::from_be_bytes([0, data[0], data[1], data[2]]);
    f64::from(raw) / 128.0
}

/// The bytes of a fixed item, checked against the expected length.
pub(crate) fn fixed<const N: usize>(category: u8, field: &Field) -> Result<[u8; N], TransformError> {
    field
        .item
        .as_fixed()
        .and_then(|data| <[u8; N]>::try_from(data).ok())
        .ok_or_else(|| unexpected(category, field, format!("fixed {N}")))
}

/// The units of a repetitive item, checked against the expected unit
/// length.
pub(crate) fn repetitive(
    category: u8,
    field: &Field,
    unit_len: u8,
) -> Result<impl Iterator<Item = &[u8]>, TransformError> {
    match &field.item {
        Item::Repetitive { unit_len: len, .. } if *len == unit_len => Ok(field.item.units()),
        _ => Err(unexpected(category, field, format!("repetitive {unit_len}"))),
    }
}

/// Primary and secondary subfields of an extended item.
pub(crate) fn extended(category: u8, field: &Field) -> Result<(&[u8], &[Vec<u8>]), TransformError> {
    match &field.item {
        Item::Extended {
            primary,
            secondaries,
        } => Ok((primary.as_slice(), secondaries.as_slice())),
        _ => Err(unexpected(category, field, "extended".to_string())),
    }
}

pub(crate) fn unexpected(category: u8, field: &Field, expected: String) -> TransformError {
    TransformError::UnexpectedShape {
        category,
        field: field.index,
        expected,
        found: format!("{} {}", field.item.kind(), field.item.wire_len()),
    }
}

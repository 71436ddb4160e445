//! Category 034: transmission of monoradar service messages.

use crate::profile::{CategoryProfile, FieldSpec};

pub const CATEGORY: u8 = 34;

/// I034/050 System Configuration and Status. Bits 7, 6 and 2 of the
/// primary subfield are spare, hence the gaps.
fn system_configuration() -> Vec<FieldSpec> {
    vec![
        FieldSpec::fixed(1, "COM", 1),
        FieldSpec::fixed(4, "PSR", 1),
        FieldSpec::fixed(5, "SSR", 1),
        FieldSpec::fixed(6, "MDS", 2),
    ]
}

/// I034/060 System Processing Mode.
fn system_processing_mode() -> Vec<FieldSpec> {
    vec![
        FieldSpec::fixed(1, "COM", 1),
        FieldSpec::fixed(4, "PSR", 1),
        FieldSpec::fixed(5, "SSR", 1),
        FieldSpec::fixed(6, "MDS", 1),
    ]
}

#[must_use]
pub fn profile() -> CategoryProfile {
    CategoryProfile::new(
        CATEGORY,
        "1.27",
        vec![
            FieldSpec::fixed(1, "I034/010", 2),
            FieldSpec::fixed(2, "I034/000", 1),
            FieldSpec::fixed(3, "I034/030", 3),
            FieldSpec::fixed(4, "I034/020", 1),
            FieldSpec::fixed(5, "I034/041", 2),
            FieldSpec::compound(6, "I034/050", system_configuration()),
            FieldSpec::compound(7, "I034/060", system_processing_mode()),
            // FX
            FieldSpec::repetitive(8, "I034/070", 2),
            FieldSpec::fixed(9, "I034/100", 8),
            FieldSpec::fixed(10, "I034/110", 1),
            FieldSpec::fixed(11, "I034/120", 8),
            FieldSpec::fixed(12, "I034/090", 2),
            FieldSpec::explicit(13, "I034/RE"),
            FieldSpec::explicit(14, "I034/SP"),
        ],
    )
}

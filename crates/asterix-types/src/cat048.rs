//! Category 048: monoradar target reports.
//!
//! Standard UAP, 28 field reference numbers over four presence bytes.

use crate::profile::{CategoryProfile, FieldSpec};

pub const CATEGORY: u8 = 48;

/// I048/130 Radar Plot Characteristics: seven optional 1-byte subfields.
fn radar_plot_characteristics() -> Vec<FieldSpec> {
    vec![
        FieldSpec::fixed(1, "SRL", 1),
        FieldSpec::fixed(2, "SRR", 1),
        FieldSpec::fixed(3, "SAM", 1),
        FieldSpec::fixed(4, "PRL", 1),
        FieldSpec::fixed(5, "PAM", 1),
        FieldSpec::fixed(6, "RPD", 1),
        FieldSpec::fixed(7, "APD", 1),
    ]
}

/// I048/120 Radial Doppler Speed: calculated speed plus raw Doppler
/// repetitions.
fn radial_doppler_speed() -> Vec<FieldSpec> {
    vec![
        FieldSpec::fixed(1, "CAL", 2),
        FieldSpec::repetitive(2, "RDS", 6),
    ]
}

#[must_use]
pub fn profile() -> CategoryProfile {
    CategoryProfile::new(
        CATEGORY,
        "1.31",
        vec![
            FieldSpec::fixed(1, "I048/010", 2),
            FieldSpec::fixed(2, "I048/140", 3),
            FieldSpec::extended(3, "I048/020", 1, 1),
            FieldSpec::fixed(4, "I048/040", 4),
            FieldSpec::fixed(5, "I048/070", 2),
            FieldSpec::fixed(6, "I048/090", 2),
            FieldSpec::compound(7, "I048/130", radar_plot_characteristics()),
            // FX
            FieldSpec::fixed(8, "I048/220", 3),
            FieldSpec::fixed(9, "I048/240", 6),
            FieldSpec::repetitive(10, "I048/250", 8),
            FieldSpec::fixed(11, "I048/161", 2),
            FieldSpec::fixed(12, "I048/042", 4),
            FieldSpec::fixed(13, "I048/200", 4),
            FieldSpec::extended(14, "I048/170", 1, 1),
            // FX
            FieldSpec::fixed(15, "I048/210", 4),
            FieldSpec::extended(16, "I048/030", 1, 1),
            FieldSpec::fixed(17, "I048/080", 2),
            FieldSpec::fixed(18, "I048/100", 4),
            FieldSpec::fixed(19, "I048/110", 2),
            FieldSpec::compound(20, "I048/120", radial_doppler_speed()),
            FieldSpec::fixed(21, "I048/230", 2),
            // FX
            FieldSpec::fixed(22, "I048/260", 7),
            FieldSpec::fixed(23, "I048/055", 1),
            FieldSpec::fixed(24, "I048/050", 2),
            FieldSpec::fixed(25, "I048/065", 1),
            FieldSpec::fixed(26, "I048/060", 2),
            FieldSpec::explicit(27, "I048/SP"),
            FieldSpec::explicit(28, "I048/RE"),
        ],
    )
}

//! Category 255: STR surveillance cards (national use).
//!
//! One presence byte, seven items:
//!
//! ```text
//! ┌─────┬────────┬───────────────────────────────────────┬────────────────┐
//! │ FRN │ Item   │ Content                               │ Shape          │
//! ├─────┼────────┼───────────────────────────────────────┼────────────────┤
//! │ 1   │ SACSIC │ source identifier                     │ fixed 2        │
//! │ 2   │ HEM    │ emission time of day                  │ fixed 3        │
//! │ 3   │ SPE    │ STR/STPV presence and status          │ extended 1 + 1 │
//! │ 4   │ NIVC   │ optional card level range             │ fixed 4        │
//! │ 5   │ TXTC   │ optional card text                    │ repetitive 1   │
//! │ 6   │ CART   │ card activation (name + order)        │ fixed 9        │
//! │ 7   │ BIAIS  │ current radar bias corrections        │ repetitive 10  │
//! └─────┴────────┴───────────────────────────────────────┴────────────────┘
//! ```

use crate::profile::{CategoryProfile, FieldSpec};

pub const CATEGORY: u8 = 255;

#[must_use]
pub fn profile() -> CategoryProfile {
    CategoryProfile::new(
        CATEGORY,
        "STR 5.1",
        vec![
            FieldSpec::fixed(1, "SACSIC", 2),
            FieldSpec::fixed(2, "HEM", 3),
            FieldSpec::extended(3, "SPE", 1, 1),
            FieldSpec::fixed(4, "NIVC", 4),
            FieldSpec::repetitive(5, "TXTC", 1),
            FieldSpec::fixed(6, "CART", 9),
            FieldSpec::repetitive(7, "BIAIS", 10),
        ],
    )
}

//! Hex fixtures shared by the integration tests and benches.
//!
//! Every fixture is one complete data block. Concatenate them with
//! [`stream`] to build multi-block inputs.
//!
//! | Name               | Contents                                        |
//! |--------------------|-------------------------------------------------|
//! | `CAT255_SACSIC`    | CAT 255, one record with SAC/SIC only           |
//! | `CAT255_FULL`      | CAT 255, one record with all seven items        |
//! | `CAT034_EMPTY`     | CAT 034 header, no records                      |
//! | `CAT034_NORTH`     | CAT 034 north marker                            |
//! | `CAT048_PLOT`      | CAT 048 plot with extended and compound items   |
//! | `CAT200_UNKNOWN`   | CAT 200 (no profile), LEN 10                    |

pub const CAT255_SACSIC: &str = "ff0006800811";

/// SAC/SIC 8/17, HEM 12:00:00, SPE v1 principal + evaluation,
/// NIVC 100..300, TXTC "TEST", CART ZONE1 activation, one BIAIS unit.
pub const CAT255_FULL: &str = concat!(
    "ff0028",
    "fe",
    "0811",
    "546000",
    "2180",
    "0064012c",
    "0454455354",
    "5a4f4e453120202000",
    "01",
    "081218f0fffe00000200",
);

pub const CAT034_EMPTY: &str = "220003";

/// SAC/SIC 8/17, north marker, 12:00:00, rotation period 4 s.
pub const CAT034_NORTH: &str = "22000ce80811015460000200";

/// I048/010, I048/140, I048/020, I048/040 and I048/130 with SRL only.
pub const CAT048_PLOT: &str = "300010f208115460002040002000800a";

pub const CAT200_UNKNOWN: &str = "c8000a55555555555555";

/// Decode one hex fixture. Whitespace is ignored.
///
/// # Panics
///
/// On malformed hex; fixtures are compile-time constants.
#[must_use]
pub fn fixture(hex_str: &str) -> Vec<u8> {
    let compact: String = hex_str.split_whitespace().collect();
    hex::decode(&compact).unwrap_or_else(|e| panic!("bad fixture {hex_str:?}: {e}"))
}

/// Concatenate fixtures into one buffer.
#[must_use]
pub fn stream(blocks: &[&str]) -> Vec<u8> {
    blocks.iter().flat_map(|b| fixture(b)).collect()
}

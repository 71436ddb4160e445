//! Category 048: monoradar target reports.
//!
//! ```text
//! ┌─────┬──────────┬─────────────────────────┬──────────────────────────┐
//! │ FRN │ Item     │ Model field             │ Scaling                  │
//! ├─────┼──────────┼─────────────────────────┼──────────────────────────┤
//! │ 1   │ I048/010 │ source                  │                          │
//! │ 2   │ I048/140 │ time_of_day             │ 1/128 s                  │
//! │ 3   │ I048/020 │ descriptor              │ bit fields               │
//! │ 4   │ I048/040 │ position                │ 1/256 NM, 360/2^16 deg   │
//! │ 5   │ I048/070 │ mode_3a                 │ octal code               │
//! │ 6   │ I048/090 │ flight_level            │ 1/4 FL, signed 14 bits   │
//! │ 8   │ I048/220 │ aircraft_address        │ 24-bit hex               │
//! │ 9   │ I048/240 │ aircraft_identification │ 6-bit characters         │
//! │ 11  │ I048/161 │ track_number            │ 12 bits                  │
//! └─────┴──────────┴─────────────────────────┴──────────────────────────┘
//! ```

use asterix_types::Record;
use log::debug;
use serde::Serialize;

use crate::common::{SourceIdentifier, extended, fixed, time_of_day, unexpected};
use crate::enums::DetectionType;
use crate::error::TransformError;
use crate::model::SemanticModel;
use crate::transform::CategoryTransform;

pub const CATEGORY: u8 = 48;

const RHO_DIVISOR: f64 = 256.0;
const THETA_STEP: f64 = 360.0 / 65_536.0;

/// I048/020: target report descriptor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TargetDescriptor {
    pub detection: DetectionType,
    pub simulated: bool,
    /// RDP chain, 1 or 2.
    pub rdp_chain: u8,
    pub special_position: bool,
    /// Report from a field monitor (fixed transponder).
    pub fixed_transponder: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<DescriptorExtension>,
}

/// First extension of I048/020.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DescriptorExtension {
    pub test_target: bool,
    pub extended_range: bool,
    pub x_pulse: bool,
    pub military_emergency: bool,
    pub military_identification: bool,
}

/// I048/040: measured position in slant polar coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PolarPosition {
    /// Nautical miles.
    pub rho: f64,
    /// Degrees from north.
    pub theta: f64,
}

/// I048/070: Mode-3/A code.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Mode3A {
    /// Four octal digits.
    pub code: String,
    pub validated: bool,
    pub garbled: bool,
    /// Code derived from the track rather than the last reply.
    pub smoothed: bool,
}

/// I048/090: flight level from Mode C.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FlightLevel {
    pub level: f64,
    pub validated: bool,
    pub garbled: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Cat048Model {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceIdentifier>,
    /// Seconds since midnight.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_of_day: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descriptor: Option<TargetDescriptor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<PolarPosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode_3a: Option<Mode3A>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flight_level: Option<FlightLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aircraft_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aircraft_identification: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_number: Option<u16>,
}

impl Cat048Model {
    /// Build the model from a record laid out by the CAT 048 profile.
    ///
    /// # Errors
    ///
    /// - [`TransformError::UnexpectedShape`] for a mis-sized item.
    /// - [`TransformError::InvalidEnumValue`] for a character outside the
    ///   identification alphabet.
    pub fn from_record(record: &Record) -> Result<Self, TransformError> {
        let mut model = Self::default();
        for field in &record.fields {
            match field.index {
                1 => model.source = Some(SourceIdentifier::from_bytes(fixed(CATEGORY, field)?)),
                2 => model.time_of_day = Some(time_of_day(fixed(CATEGORY, field)?)),
                3 => {
                    let (primary, secondaries) = extended(CATEGORY, field)?;
                    let first = primary
                        .first()
                        .copied()
                        .ok_or_else(|| unexpected(CATEGORY, field, "extended 1".to_string()))?;
                    let second = secondaries.first().and_then(|s| s.first().copied());
                    model.descriptor = Some(descriptor(first, second)?);
                }
                4 => model.position = Some(position(fixed(CATEGORY, field)?)),
                5 => model.mode_3a = Some(mode_3a(fixed(CATEGORY, field)?)),
                6 => model.flight_level = Some(flight_level(fixed(CATEGORY, field)?)),
                8 => {
                    let [a, b, c] = fixed::<3>(CATEGORY, field)?;
                    model.aircraft_address = Some(format!("{a:02X}{b:02X}{c:02X}"));
                }
                9 => model.aircraft_identification = Some(identification(fixed(CATEGORY, field)?)?),
                11 => {
                    let raw = u16::from_be_bytes(fixed(CATEGORY, field)?);
                    model.track_number = Some(raw & 0x0FFF);
                }
                other => debug!("CAT{CATEGORY:03}: ignoring field {other}"),
            }
        }
        Ok(model)
    }
}

fn descriptor(primary: u8, secondary: Option<u8>) -> Result<TargetDescriptor, TransformError> {
    Ok(TargetDescriptor {
        detection: DetectionType::from_code(primary >> 5)?,
        simulated: primary & 0x10 != 0,
        rdp_chain: if primary & 0x08 == 0 { 1 } else { 2 },
        special_position: primary & 0x04 != 0,
        fixed_transponder: primary & 0x02 != 0,
        extension: secondary.map(|b| DescriptorExtension {
            test_target: b & 0x80 != 0,
            extended_range: b & 0x40 != 0,
            x_pulse: b & 0x20 != 0,
            military_emergency: b & 0x10 != 0,
            military_identification: b & 0x08 != 0,
        }),
    })
}

fn position(data: [u8; 4]) -> PolarPosition {
    let rho = u16::from_be_bytes([data[0], data[1]]);
    let theta = u16::from_be_bytes([data[2], data[3]]);
    PolarPosition {
        rho: f64::from(rho) / RHO_DIVISOR,
        theta: f64::from(theta) * THETA_STEP,
    }
}

fn mode_3a(data: [u8; 2]) -> Mode3A {
    let raw = u16::from_be_bytes(data);
    Mode3A {
        code: format!("{:04o}", raw & 0x0FFF),
        validated: raw & 0x8000 == 0,
        garbled: raw & 0x4000 != 0,
        smoothed: raw & 0x2000 != 0,
    }
}

fn flight_level(data: [u8; 2]) -> FlightLevel {
    let raw = u16::from_be_bytes(data);
    // sign-extend the low 14 bits
    let level = (i16::from_be_bytes(data) << 2) >> 2;
    FlightLevel {
        level: f64::from(level) / 4.0,
        validated: raw & 0x8000 == 0,
        garbled: raw & 0x4000 != 0,
    }
}

/// Eight 6-bit characters, trailing spaces trimmed.
fn identification(data: [u8; 6]) -> Result<String, TransformError> {
    let raw = data
        .iter()
        .fold(0u64, |acc, &b| (acc << 8) | u64::from(b));
    let mut callsign = String::with_capacity(8);
    for i in 0..8 {
        // masked to 6 bits
        let code = ((raw >> (42 - 6 * i)) & 0x3F) as u8;
        let c = match code {
            1..=26 => char::from(b'A' + code - 1),
            32 => ' ',
            48..=57 => char::from(code),
            other => {
                return Err(TransformError::InvalidEnumValue {
                    enum_name: "IdentificationChar",
                    value: other,
                });
            }
        };
        callsign.push(c);
    }
    Ok(callsign.trim_end().to_string())
}

/// [`CategoryTransform`] producing [`SemanticModel::Cat048`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Cat048Transform;

impl CategoryTransform for Cat048Transform {
    fn category(&self) -> u8 {
        CATEGORY
    }

    fn transform(&self, record: &Record) -> Result<SemanticModel, TransformError> {
        Cat048Model::from_record(record).map(SemanticModel::Cat048)
    }
}

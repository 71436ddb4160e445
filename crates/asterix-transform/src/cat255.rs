//! Category 255: STR surveillance cards.
//!
//! ```text
//! ┌─────┬────────┬──────────────────────┬──────────────────────────────┐
//! │ FRN │ Item   │ Model field          │ Scaling                      │
//! ├─────┼────────┼──────────────────────┼──────────────────────────────┤
//! │ 1   │ SACSIC │ source               │                              │
//! │ 2   │ HEM    │ emission_time        │ 1/128 s                      │
//! │ 3   │ SPE    │ presence             │ bit fields                   │
//! │ 4   │ NIVC   │ levels               │ two signed 16-bit values     │
//! │ 5   │ TXTC   │ text                 │ one character per unit       │
//! │ 6   │ CART   │ card                 │ 8-char name, 3-bit order     │
//! │ 7   │ BIAIS  │ biases               │ one entry per 10-byte unit   │
//! └─────┴────────┴──────────────────────┴──────────────────────────────┘
//! ```

use asterix_types::Record;
use log::debug;
use serde::Serialize;

use crate::common::{SourceIdentifier, extended, fixed, repetitive, time_of_day, unexpected};
use crate::enums::{CardOrder, ServerRole, StationMode, StpvLink};
use crate::error::TransformError;
use crate::model::SemanticModel;
use crate::transform::CategoryTransform;

pub const CATEGORY: u8 = 255;

const BIAS_UNIT: u8 = 10;
const GAIN_DIVISOR: f64 = 6384.0;
const AZIMUTH_STEP: f64 = 0.0055;
const TIMING_DIVISOR: f64 = 1024.0;

/// SPE: STR/STPV presence and status.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StpvPresence {
    pub version: u8,
    pub nap: u8,
    pub ns: ServerRole,
    /// Only present when the secondary subfield is.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub st: Option<StationMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ps: Option<StpvLink>,
}

/// NIVC: level range assigned to a dynamic card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CardLevels {
    pub nivinf: i16,
    pub nivsup: i16,
}

/// CART: dynamic card activation order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CardActivation {
    pub name: String,
    pub ord: CardOrder,
}

/// One BIAIS unit: the current bias corrections of one radar.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BiasEntry {
    pub source: SourceIdentifier,
    pub gain_distance: f64,
    pub distance_bias: f64,
    pub azimuth_bias: f64,
    pub timing_bias: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Cat255StrModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceIdentifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emission_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presence: Option<StpvPresence>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub levels: Option<CardLevels>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<CardActivation>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub biases: Vec<BiasEntry>,
}

impl Cat255StrModel {
    /// Build the model from a record laid out by the CAT 255 profile.
    ///
    /// Field indices the model does not cover are ignored.
    ///
    /// # Errors
    ///
    /// - [`TransformError::UnexpectedShape`] if an item does not have the
    ///   layout its index implies.
    /// - [`TransformError::InvalidEnumValue`] for an undefined NS or ORD
    ///   code.
    pub fn from_record(record: &Record) -> Result<Self, TransformError> {
        let mut model = Self::default();
        for field in &record.fields {
            match field.index {
                1 => model.source = Some(SourceIdentifier::from_bytes(fixed(CATEGORY, field)?)),
                2 => model.emission_time = Some(time_of_day(fixed(CATEGORY, field)?)),
                3 => {
                    let (primary, secondaries) = extended(CATEGORY, field)?;
                    let first = primary
                        .first()
                        .copied()
                        .ok_or_else(|| unexpected(CATEGORY, field, "extended 1".to_string()))?;
                    let second = secondaries.first().and_then(|s| s.first().copied());
                    model.presence = Some(presence(first, second)?);
                }
                4 => model.levels = Some(levels(fixed(CATEGORY, field)?)),
                5 => {
                    let text: Vec<u8> = repetitive(CATEGORY, field, 1)?.flatten().copied().collect();
                    model.text = Some(String::from_utf8_lossy(&text).into_owned());
                }
                6 => model.card = Some(card(fixed(CATEGORY, field)?)?),
                7 => {
                    model.biases = repetitive(CATEGORY, field, BIAS_UNIT)?
                        .map(|unit| {
                            <[u8; 10]>::try_from(unit)
                                .map(|unit| bias_entry(&unit))
                                .map_err(|_| unexpected(CATEGORY, field, "repetitive 10".to_string()))
                        })
                        .collect::<Result<_, _>>()?;
                }
                other => debug!("CAT{CATEGORY:03}: ignoring field {other}"),
            }
        }
        Ok(model)
    }
}

fn presence(primary: u8, secondary: Option<u8>) -> Result<StpvPresence, TransformError> {
    let (st, ps) = match secondary {
        Some(b) => (
            Some(StationMode::from_code((b >> 7) & 0x01)?),
            Some(StpvLink::from_code((b >> 6) & 0x01)?),
        ),
        None => (None, None),
    };
    Ok(StpvPresence {
        version: (primary & 0xE0) >> 5,
        nap: (primary & 0x18) >> 3,
        ns: ServerRole::from_code((primary & 0x06) >> 1)?,
        st,
        ps,
    })
}

fn levels(data: [u8; 4]) -> CardLevels {
    CardLevels {
        nivinf: i16::from_be_bytes([data[0], data[1]]),
        nivsup: i16::from_be_bytes([data[2], data[3]]),
    }
}

fn card(data: [u8; 9]) -> Result<CardActivation, TransformError> {
    let name = String::from_utf8_lossy(&data[..8])
        .trim_end_matches([' ', '\0'])
        .to_string();
    Ok(CardActivation {
        name,
        ord: CardOrder::from_code(data[8] >> 5)?,
    })
}

fn bias_entry(unit: &[u8; 10]) -> BiasEntry {
    let gain = u16::from_be_bytes([unit[2], unit[3]]);
    let distance = i16::from_be_bytes([unit[4], unit[5]]);
    let azimuth = i16::from_be_bytes([unit[6], unit[7]]);
    let timing = i16::from_be_bytes([unit[8], unit[9]]);
    BiasEntry {
        source: SourceIdentifier::from_bytes([unit[0], unit[1]]),
        gain_distance: f64::from(gain) / GAIN_DIVISOR,
        distance_bias: f64::from(distance),
        azimuth_bias: f64::from(azimuth) * AZIMUTH_STEP,
        timing_bias: f64::from(timing) / TIMING_DIVISOR,
    }
}

/// [`CategoryTransform`] producing [`SemanticModel::Cat255`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Cat255Transform;

impl CategoryTransform for Cat255Transform {
    fn category(&self) -> u8 {
        CATEGORY
    }

    fn transform(&self, record: &Record) -> Result<SemanticModel, TransformError> {
        Cat255StrModel::from_record(record).map(SemanticModel::Cat255)
    }
}

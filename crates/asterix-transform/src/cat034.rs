//! Category 034: monoradar service messages.

use asterix_types::Record;
use log::debug;
use serde::Serialize;

use crate::common::{SourceIdentifier, fixed, time_of_day};
use crate::enums::MessageType;
use crate::error::TransformError;
use crate::model::SemanticModel;
use crate::transform::CategoryTransform;

pub const CATEGORY: u8 = 34;

/// One sector of I034/020 is 360/256 degrees.
const SECTOR_STEP: f64 = 360.0 / 256.0;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Cat034Model {
    /// I034/010
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceIdentifier>,
    /// I034/000
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_type: Option<MessageType>,
    /// I034/030, seconds since midnight.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_of_day: Option<f64>,
    /// I034/020, degrees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector_azimuth: Option<f64>,
    /// I034/041, seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub antenna_rotation_period: Option<f64>,
}

impl Cat034Model {
    /// Build the model from a record laid out by the CAT 034 profile.
    ///
    /// # Errors
    ///
    /// [`TransformError::UnexpectedShape`] for a mis-sized item, and
    /// [`TransformError::InvalidEnumValue`] for an undefined message type.
    pub fn from_record(record: &Record) -> Result<Self, TransformError> {
        let mut model = Self::default();
        for field in &record.fields {
            match field.index {
                1 => model.source = Some(SourceIdentifier::from_bytes(fixed(CATEGORY, field)?)),
                2 => {
                    let [code] = fixed::<1>(CATEGORY, field)?;
                    model.message_type = Some(MessageType::from_code(code)?);
                }
                3 => model.time_of_day = Some(time_of_day(fixed(CATEGORY, field)?)),
                4 => {
                    let [sector] = fixed::<1>(CATEGORY, field)?;
                    model.sector_azimuth = Some(f64::from(sector) * SECTOR_STEP);
                }
                5 => {
                    let period = u16::from_be_bytes(fixed(CATEGORY, field)?);
                    model.antenna_rotation_period = Some(f64::from(period) / 128.0);
                }
                other => debug!("CAT{CATEGORY:03}: ignoring field {other}"),
            }
        }
        Ok(model)
    }
}

/// [`CategoryTransform`] producing [`SemanticModel::Cat034`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Cat034Transform;

impl CategoryTransform for Cat034Transform {
    fn category(&self) -> u8 {
        CATEGORY
    }

    fn transform(&self, record: &Record) -> Result<SemanticModel, TransformError> {
        Cat034Model::from_record(record).map(SemanticModel::Cat034)
    }
}

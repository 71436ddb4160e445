#![warn(clippy::pedantic)]

//! Semantic views over decoded ASTERIX records.
//!
//! The decoder stops at byte layout. This crate turns records of the
//! categories it knows into typed, serializable models:
//!
//! ```text
//!   Record ──▶ TransformRegistry ──▶ CategoryTransform ──▶ SemanticModel ──▶ JSON
//!                 (by category)        (per FRN match)
//! ```

pub mod error;
pub mod enums;
pub mod common;
pub mod cat034;
pub mod cat048;
pub mod cat255;
pub mod model;
pub mod transform;

pub use cat034::{Cat034Model, Cat034Transform};
pub use cat048::{
    Cat048Model, Cat048Transform, DescriptorExtension, FlightLevel, Mode3A, PolarPosition,
    TargetDescriptor,
};
pub use cat255::{BiasEntry, Cat255StrModel, Cat255Transform, CardActivation, CardLevels, StpvPresence};
pub use common::SourceIdentifier;
pub use enums::{CardOrder, DetectionType, MessageType, ServerRole, StationMode, StpvLink};
pub use error::TransformError;
pub use model::{SemanticModel, to_json, to_json_pretty};
pub use transform::{CategoryTransform, TransformRegistry};

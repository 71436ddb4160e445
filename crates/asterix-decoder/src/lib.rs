#![warn(clippy::pedantic)]

pub mod error;
pub mod config;
pub mod item;
pub mod record;
pub mod block;
pub mod decoder;

pub use config::DecoderConfig;
pub use decoder::{DecodedStream, Decoder, SkippedBlock, decode};
pub use error::{DecodeError, Incomplete};

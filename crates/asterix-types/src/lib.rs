#![warn(clippy::pedantic)]

pub mod error;
pub mod item;
pub mod record;
pub mod block;
pub mod profile;
pub mod registry;
pub mod cat034;
pub mod cat048;
pub mod cat255;

pub use block::Block;
pub use error::TypeError;
pub use item::Item;
pub use profile::{CategoryProfile, FieldSpec, Shape};
pub use record::{Field, Record};
pub use registry::{ProfileRegistry, RegistryBuilder};

#![warn(clippy::pedantic)]

pub mod cursor;
pub mod error;
pub mod fspec;
pub mod header;

pub use cursor::Cursor;
pub use error::WireError;
pub use fspec::{FIELDS_PER_BYTE, Fspec, MAX_FSPEC_BYTES, decode_fspec};
pub use header::{BlockHeader, HEADER_SIZE};

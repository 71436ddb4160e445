use std::fmt;

use asterix_wire::WireError;

/// Errors that can occur while decoding an ASTERIX stream.
///
/// Malformed input is an expected condition on a surveillance feed, so
/// none of these ever panic and every one carries the absolute offset
/// where decoding went wrong.
///
/// ```text
///   DecodeError
///   ├── Wire(WireError)     ← OutOfBounds, TruncatedPresence, PresenceTooLong
///   ├── TruncatedItem       ← a field's declared shape ran past the data
///   ├── UnknownField        ← presence bit set for an index the profile lacks
///   ├── MalformedBlock      ← LEN inconsistent with the input or with a record
///   └── UnknownCategory     ← no profile for CAT (recoverable: skip LEN bytes)
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// A low-level read failure from `asterix-wire`, surfaced unchanged.
    #[error(transparent)]
    Wire(#[from] WireError),

    /// A field needed more bytes than were left.
    ///
    /// `offset` is where the (sub-)item started; `source` says how far
    /// the read got. Inside a compound item `field` is the compound's
    /// index and `subfield` the sub-item that ran short, named by `name`.
    #[error("CAT{category:03} field {field}{} ({name}) truncated at offset {offset}: {source}", subfield_suffix(.subfield))]
    TruncatedItem {
        category: u8,
        field: u8,
        subfield: Option<u8>,
        name: &'static str,
        offset: usize,
        source: WireError,
    },

    /// A presence bit flagged a field index with no profile entry.
    ///
    /// Without the shape the item's length is unknown, so the rest of
    /// the record (and block) cannot be located.
    #[error("CAT{category:03} field {field}{} not in profile (record at offset {offset})", subfield_suffix(.subfield))]
    UnknownField {
        category: u8,
        field: u8,
        /// Set when the unknown index was inside a compound item.
        subfield: Option<u8>,
        offset: usize,
    },

    /// The block's LEN is below the 3-byte header, beyond the bytes left
    /// in the input, or too short for a record that starts inside it.
    ///
    /// `available` is what the block could still supply: the input from
    /// the block's offset on for a bad LEN, the payload left at the
    /// failing record for an overrun. `source` is set for an overrun and
    /// holds the read that hit the end of the payload.
    #[error("malformed CAT{category:03} block at offset {offset}: declared length {declared_len}, {available} bytes available{}", overrun_suffix(.source))]
    MalformedBlock {
        offset: usize,
        category: u8,
        declared_len: u16,
        available: usize,
        source: Option<Box<DecodeError>>,
    },

    /// No profile is registered for the block's category. The payload
    /// is kept so a caller can still inspect or forward it.
    #[error("unknown category {category} at offset {offset} ({declared_len} bytes)")]
    UnknownCategory {
        offset: usize,
        category: u8,
        declared_len: u16,
        payload: Vec<u8>,
    },
}

#[allow(clippy::ref_option)]
fn subfield_suffix(subfield: &Option<u8>) -> String {
    subfield.map(|s| format!(" subfield {s}")).unwrap_or_default()
}

#[allow(clippy::ref_option)]
fn overrun_suffix(source: &Option<Box<DecodeError>>) -> String {
    source
        .as_ref()
        .map(|e| format!(" (record overruns LEN: {e})"))
        .unwrap_or_default()
}

impl DecodeError {
    /// Whether the stream decoder can carry on past this error.
    ///
    /// Only an unknown category is: its LEN still points at the next
    /// block. Every other failure leaves record boundaries unknown.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::UnknownCategory { .. })
    }

    /// Whether this is a read that ran off the end of the bytes it was
    /// given, as opposed to a structural mismatch with the profile.
    #[must_use]
    pub fn is_truncation(&self) -> bool {
        matches!(
            self,
            Self::TruncatedItem { .. }
                | Self::Wire(WireError::OutOfBounds { .. } | WireError::TruncatedPresence { .. })
        )
    }
}

/// A decode failure paired with everything decoded before it.
///
/// Record, block and stream decoding all return this on failure so a
/// bad item late in a capture never throws away the good data in front
/// of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Incomplete<T> {
    pub partial: T,
    pub error: DecodeError,
}

impl<T> Incomplete<T> {
    pub fn new(partial: T, error: DecodeError) -> Self {
        Self { partial, error }
    }

    /// Replace the partial value, keeping the error.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Incomplete<U> {
        Incomplete {
            partial: f(self.partial),
            error: self.error,
        }
    }
}

impl<T> fmt::Display for Incomplete<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "decoding stopped early: {}", self.error)
    }
}

impl<T: fmt::Debug> std::error::Error for Incomplete<T> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrun_display_includes_the_short_read() {
        let error = DecodeError::MalformedBlock {
            offset: 0,
            category: 255,
            declared_len: 5,
            available: 2,
            source: Some(Box::new(DecodeError::TruncatedItem {
                category: 255,
                field: 1,
                subfield: None,
                name: "SACSIC",
                offset: 4,
                source: WireError::OutOfBounds {
                    offset: 4,
                    requested: 2,
                    available: 1,
                },
            })),
        };
        let text = error.to_string();
        assert!(text.starts_with("malformed CAT255 block at offset 0: declared length 5, 2 bytes available"));
        assert!(text.contains("(record overruns LEN: CAT255 field 1 (SACSIC) truncated at offset 4"));
        assert!(std::error::Error::source(&error).is_some());
        assert!(!error.is_recoverable());
    }

    #[test]
    fn truncations_are_told_apart_from_profile_mismatches() {
        assert!(DecodeError::Wire(WireError::TruncatedPresence { offset: 3 }).is_truncation());
        assert!(
            !DecodeError::Wire(WireError::PresenceTooLong {
                offset: 3,
                max_bytes: 36,
            })
            .is_truncation()
        );
        assert!(
            !DecodeError::UnknownField {
                category: 34,
                field: 15,
                subfield: None,
                offset: 3,
            }
            .is_truncation()
        );
    }
}

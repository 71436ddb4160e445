/// Errors raised while reading raw ASTERIX bytes.
///
/// These are the lowest-level failures in the workspace: a read ran past
/// the end of the available bytes, or a presence field (FSPEC) never
/// terminated. Every variant carries the absolute byte offset into the
/// original input so a failure deep inside a block can still be located
/// in a capture file.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WireError {
    /// A read asked for more bytes than the cursor has left.
    ///
    /// The cursor position is left unchanged when this is returned.
    #[error("out of bounds at offset {offset}: requested {requested} bytes, {available} available")]
    OutOfBounds {
        offset: usize,
        requested: usize,
        available: usize,
    },

    /// A presence byte had its FX bit set but the input ended.
    #[error("presence field truncated: FX bit set on last byte at offset {offset}")]
    TruncatedPresence { offset: usize },

    /// A presence field kept extending past the longest chain whose
    /// indices still fit in a `u8`.
    #[error("presence field at offset {offset} exceeds {max_bytes} bytes")]
    PresenceTooLong { offset: usize, max_bytes: usize },
}

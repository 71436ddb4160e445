use asterix_types::{Block, ProfileRegistry, Record};
use asterix_wire::Cursor;
use log::{debug, warn};

use crate::block::decode_block;
use crate::config::DecoderConfig;
use crate::error::{DecodeError, Incomplete};

/// A block the decoder stepped over because its category has no
/// profile. The raw payload is kept as-is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedBlock {
    pub offset: usize,
    pub category: u8,
    pub declared_len: u16,
    pub payload: Vec<u8>,
}

/// The result of decoding a buffer of concatenated data blocks.
///
/// ```text
/// ┌────────────────────────────────────────────────────────┐
/// │ DecodedStream                                          │
/// │   blocks:  Vec<Block>        ← wire order              │
/// │   skipped: Vec<SkippedBlock> ← unknown categories      │
/// └────────────────────────────────────────────────────────┘
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DecodedStream {
    pub blocks: Vec<Block>,
    pub skipped: Vec<SkippedBlock>,
}

impl DecodedStream {
    /// Every record of every block, in wire order.
    pub fn records(&self) -> impl Iterator<Item = (u8, &Record)> {
        self.blocks
            .iter()
            .flat_map(|b| b.records.iter().map(move |r| (b.category, r)))
    }
}

/// Synchronous ASTERIX stream decoder.
///
/// Reads a fully materialized buffer of concatenated data blocks and
/// produces a [`DecodedStream`]. The decoder holds only a shared
/// reference to a read-only [`ProfileRegistry`] and its configuration,
/// so one decoder (or many) can run on separate buffers from any number
/// of threads.
///
/// Decoding walks the buffer block by block:
///
///   1. Decode the block at the current offset.
///   2. On success, keep it and move on by its LEN.
///   3. On [`DecodeError::UnknownCategory`], record a [`SkippedBlock`]
///      and move on by its LEN (unless configured to stop).
///   4. On any other error stop: record boundaries past a failed parse
///      step are unknown.
///
/// # Example
///
/// ```rust
/// use asterix_decoder::Decoder;
///
/// // CAT 255, LEN 6, one record carrying SAC/SIC
/// let bytes = [0xFF, 0x00, 0x06, 0x80, 0x08, 0x11];
/// let stream = Decoder::standard().decode(&bytes).unwrap();
/// assert_eq!(stream.blocks.len(), 1);
/// assert_eq!(stream.blocks[0].records[0].len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct Decoder<'r> {
    registry: &'r ProfileRegistry,
    config: DecoderConfig,
}

impl Decoder<'static> {
    /// A decoder over the process-wide standard registry.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(ProfileRegistry::standard())
    }
}

impl<'r> Decoder<'r> {
    #[must_use]
    pub fn new(registry: &'r ProfileRegistry) -> Self {
        Self {
            registry,
            config: DecoderConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: DecoderConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn registry(&self) -> &'r ProfileRegistry {
        self.registry
    }

    /// Decode every block in `buf`.
    ///
    /// # Errors
    ///
    /// Returns the first non-recoverable error together with everything
    /// decoded before it. A block whose record failed is included with
    /// the records decoded up to the failure.
    pub fn decode(&self, buf: &[u8]) -> Result<DecodedStream, Incomplete<DecodedStream>> {
        let mut cursor = Cursor::new(buf);
        let mut stream = DecodedStream::default();

        while !cursor.is_empty() {
            if self
                .config
                .max_blocks
                .is_some_and(|max| stream.blocks.len() >= max)
            {
                debug!("block limit reached at offset {}", cursor.position());
                break;
            }

            match decode_block(&mut cursor, self.registry) {
                Ok(block) => stream.blocks.push(block),
                Err(Incomplete {
                    partial: None,
                    error:
                        DecodeError::UnknownCategory {
                            offset,
                            category,
                            declared_len,
                            payload,
                        },
                }) if self.config.skip_unknown_categories => {
                    warn!("skipping unknown category {category} at offset {offset}");
                    stream.skipped.push(SkippedBlock {
                        offset,
                        category,
                        declared_len,
                        payload,
                    });
                }
                Err(failure) => {
                    warn!(
                        "decoding stopped at offset {}: {}",
                        cursor.position(),
                        failure.error
                    );
                    if let Some(block) = failure.partial {
                        stream.blocks.push(block);
                    }
                    return Err(Incomplete::new(stream, failure.error));
                }
            }
        }

        debug!(
            "decoded {} blocks ({} skipped) from {} bytes",
            stream.blocks.len(),
            stream.skipped.len(),
            buf.len()
        );
        Ok(stream)
    }
}

/// Decode `buf` with the standard registry and default configuration.
///
/// # Errors
///
/// See [`Decoder::decode`].
pub fn decode(buf: &[u8]) -> Result<DecodedStream, Incomplete<DecodedStream>> {
    Decoder::standard().decode(buf)
}

/// Configuration for the stream decoder.
///
/// ```text
/// ┌─────────────────────────┬────────────────────────────────────────────┐
/// │ Field                   │ Purpose                                    │
/// ├─────────────────────────┼────────────────────────────────────────────┤
/// │ skip_unknown_categories │ Skip blocks without a profile using LEN    │
/// │                         │ (default) or stop with UnknownCategory     │
/// │ max_blocks              │ Stop cleanly after this many decoded       │
/// │                         │ blocks; skipped blocks do not count        │
/// └─────────────────────────┴────────────────────────────────────────────┘
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecoderConfig {
    pub skip_unknown_categories: bool,
    pub max_blocks: Option<usize>,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            skip_unknown_categories: true,
            max_blocks: None,
        }
    }
}

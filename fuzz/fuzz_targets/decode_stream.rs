#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: stream decoding with the standard registry.
//
// Catches bugs in:
// - Block LEN below the header or past the input
// - Presence fields running off the block
// - Items overrunning their block's payload
// - Partial-result bookkeeping on failure
fuzz_target!(|data: &[u8]| {
    match asterix_decoder::decode(data) {
        Ok(stream) => {
            for (_, record) in stream.records() {
                let items: usize = record.fields.iter().map(|f| f.item.wire_len()).sum();
                assert_eq!(record.fspec_len + items, record.consumed);
            }
        }
        Err(failure) => assert!(!failure.error.is_recoverable()),
    }
});

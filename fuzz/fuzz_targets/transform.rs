#![no_main]

use asterix_transform::TransformRegistry;
use libfuzzer_sys::fuzz_target;

// Fuzz target: semantic transforms over whatever the decoder accepts.
//
// Catches bugs in:
// - Bit-field extraction on short subfields
// - Repetitive unit walking
// - Enum code mapping
fuzz_target!(|data: &[u8]| {
    let stream = match asterix_decoder::decode(data) {
        Ok(stream) => stream,
        Err(failure) => failure.partial,
    };
    for block in &stream.blocks {
        for model in TransformRegistry::standard().transform_block(block).into_iter().flatten() {
            let _ = asterix_transform::to_json(&model);
        }
    }
});

#![no_main]

use arbitrary::Arbitrary;
use asterix_types::FieldSpec;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum FuzzShape {
    Fixed(u8),
    Extended { primary: u8, secondary: u8 },
    Repetitive(u8),
    Explicit,
}

#[derive(Debug, Arbitrary)]
struct FuzzItem {
    shape: FuzzShape,
    bytes: Vec<u8>,
}

// Fuzz target: single item decoding against an arbitrary shape.
//
// On success the item's wire length must equal the bytes consumed.
fuzz_target!(|input: FuzzItem| {
    let spec = match input.shape {
        FuzzShape::Fixed(len) => FieldSpec::fixed(1, "FUZZ", len.max(1)),
        FuzzShape::Extended { primary, secondary } => {
            FieldSpec::extended(1, "FUZZ", primary.max(1), secondary.max(1))
        }
        FuzzShape::Repetitive(unit) => FieldSpec::repetitive(1, "FUZZ", unit.max(1)),
        FuzzShape::Explicit => FieldSpec::explicit(1, "FUZZ"),
    };

    let mut cursor = asterix_wire::Cursor::new(&input.bytes);
    if let Ok(item) = asterix_decoder::item::decode_item(&mut cursor, 0, &spec) {
        assert_eq!(item.wire_len(), cursor.position());
    }
});

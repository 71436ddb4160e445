#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: presence field decoding.
//
// The whole input is the presence field; whatever follows the chain is
// left unread.
fuzz_target!(|data: &[u8]| {
    let mut cursor = asterix_wire::Cursor::new(data);
    if let Ok(fspec) = asterix_wire::decode_fspec(&mut cursor) {
        assert_eq!(cursor.position(), fspec.len);
        assert!(fspec.len <= asterix_wire::MAX_FSPEC_BYTES);
        assert!(fspec.indices.windows(2).all(|w| w[0] < w[1]));
    }
});

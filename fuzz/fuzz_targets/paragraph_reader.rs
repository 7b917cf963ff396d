#![no_main]

use std::io::Cursor;

use hlp_decoder::{DecoderConfig, ParagraphDecoder};
use libfuzzer_sys::fuzz_target;

// Fuzz target: decoding through a reader must agree with decoding the
// same bytes from a slice.
fuzz_target!(|data: &[u8]| {
    let from_slice = ParagraphDecoder::decode(data);
    let from_reader =
        ParagraphDecoder::decode_reader(Cursor::new(data), data.len(), &DecoderConfig::default());
    match (from_slice, from_reader) {
        (Ok(a), Ok(b)) => assert_eq!(a, b),
        (Err(a), Err(b)) => assert_eq!(a.to_string(), b.to_string()),
        (a, b) => panic!("slice gave {a:?}, reader gave {b:?}"),
    }
});

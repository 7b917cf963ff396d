#![no_main]

use hlp_decoder::ParagraphDecoder;
use libfuzzer_sys::fuzz_target;

// Fuzz target: full paragraph stream decode from arbitrary bytes.
//
// Catches bugs in:
// - Opcode dispatch
// - Payload length accounting across items
// - Text decoding with the default code page
//
// Decoding the same bytes twice must give the same answer.
fuzz_target!(|data: &[u8]| {
    let first = ParagraphDecoder::decode(data);
    let second = ParagraphDecoder::decode(data);
    match (first, second) {
        (Ok(a), Ok(b)) => assert_eq!(a, b),
        (Err(a), Err(b)) => assert_eq!(a.to_string(), b.to_string()),
        _ => panic!("decode is not repeatable"),
    }
});

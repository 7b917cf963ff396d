#![no_main]

use arbitrary::Arbitrary;
use hlp_decoder::{DecoderConfig, DecoderEvent, ItemStream, ParagraphDecoder};
use hlp_types::TextFraming;
use hlp_wire::SliceSource;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    length_prefixed: bool,
    max_items: Option<u8>,
    data: Vec<u8>,
}

// Fuzz target: ItemStream must yield exactly what ParagraphDecoder
// returns, and fail whenever it fails.
fuzz_target!(|input: FuzzInput| {
    let mut config = DecoderConfig::default();
    if input.length_prefixed {
        config = config.with_text_framing(TextFraming::LengthPrefixed);
    }
    if let Some(limit) = input.max_items {
        config = config.with_max_items(usize::from(limit));
    }

    let batch = ParagraphDecoder::decode_with_config(&input.data, &config);

    let mut src = SliceSource::new(&input.data);
    let mut settings = None;
    let mut items = Vec::new();
    let mut failed = None;
    for event in ItemStream::new(&mut src, &config) {
        match event {
            Ok(DecoderEvent::Settings(s)) => settings = Some(s),
            Ok(DecoderEvent::Item(item)) => items.push(item),
            Err(err) => failed = Some(err),
        }
    }

    match (batch, failed) {
        (Ok(decoded), None) => {
            assert_eq!(settings, Some(decoded.settings));
            assert_eq!(items, decoded.items);
        }
        (Err(a), Some(b)) => assert_eq!(a.to_string(), b.to_string()),
        (a, b) => panic!("batch gave {a:?}, stream gave {b:?}"),
    }
});

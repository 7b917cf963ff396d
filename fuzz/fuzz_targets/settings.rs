#![no_main]

use hlp_types::settings::ParagraphSettings;
use hlp_wire::{ByteSource, SliceSource};
use libfuzzer_sys::fuzz_target;

// Fuzz target: ParagraphSettings::read_from on arbitrary bytes.
//
// Catches bugs in:
// - Border sub-record sentinel checks
// - Truncation at every offset inside the record
//
// On success the record must have consumed 4 bytes without a border and
// 7 with one.
fuzz_target!(|data: &[u8]| {
    let mut src = SliceSource::new(data);
    if let Ok(settings) = ParagraphSettings::read_from(&mut src) {
        let expected = if settings.border().is_some() { 7 } else { 4 };
        assert_eq!(src.position(), expected);
        assert_eq!(settings.border().is_some(), settings.setup().has_border());
    }
});

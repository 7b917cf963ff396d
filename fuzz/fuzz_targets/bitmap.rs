#![no_main]

use hlp_types::bitmap::{BitmapAlignment, BitmapRef};
use hlp_wire::sentinel::BITMAP_RECORD_SIZE;
use hlp_wire::{ByteSource, SliceSource};
use libfuzzer_sys::fuzz_target;

// Fuzz target: BitmapRef::read_from with the alignment picked by the
// first input byte.
fuzz_target!(|data: &[u8]| {
    let Some((&selector, record)) = data.split_first() else {
        return;
    };
    let alignment = match selector % 3 {
        0 => BitmapAlignment::Current,
        1 => BitmapAlignment::Left,
        _ => BitmapAlignment::Right,
    };

    let mut src = SliceSource::new(record);
    if let Ok(bitmap) = BitmapRef::read_from(&mut src, alignment) {
        assert_eq!(bitmap.alignment, alignment);
        assert_eq!(src.position(), BITMAP_RECORD_SIZE);
    }
});

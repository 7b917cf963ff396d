use crate::error::WireError;
use crate::source::ByteSource;

// Fixed bytes that carry no meaning beyond framing. They are the only
// integrity check the paragraph format has, so every one of them is
// compared, never skipped.

/// First byte of the border sub-record.
pub const BORDER_HEADER: u8 = 0x01;

/// Last byte of the border sub-record.
pub const BORDER_FOOTER: u8 = 0x51;

/// The one bitmap subtype this decoder understands.
pub const BITMAP_SUBTYPE: u8 = 0x22;

/// Fixed bytes following the bitmap subtype, in wire order.
pub const BITMAP_LEAD: u8 = 0x08;
pub const BITMAP_MARK: u8 = 0x80;
pub const BITMAP_TRAIL: u8 = 0x02;

/// Embed flag value announcing inline bitmap data.
pub const BITMAP_EMBEDDED: u16 = 0x0001;

/// Size of the setup flag word.
pub const SETUP_SIZE: usize = 4;

/// Size of the border sub-record (header, flags, footer).
pub const BORDER_SIZE: usize = 3;

/// Size of a bitmap record: subtype, three fixed bytes, embed flag and
/// bitmap number.
///
/// ```text
/// ┌────────┬─────────┬──────────────────────────────┐
/// │ Offset │ Size    │ Description                  │
/// ├────────┼─────────┼──────────────────────────────┤
/// │ 0x00   │ 1 byte  │ Subtype (0x22)               │
/// │ 0x01   │ 1 byte  │ 0x08                         │
/// │ 0x02   │ 1 byte  │ 0x80                         │
/// │ 0x03   │ 1 byte  │ 0x02                         │
/// │ 0x04   │ 2 bytes │ Embed flag (u16 LE)          │
/// │ 0x06   │ 2 bytes │ Bitmap number (u16 LE)       │
/// └────────┴─────────┴──────────────────────────────┘
/// ```
pub const BITMAP_RECORD_SIZE: usize = 8;

/// Read one byte and require it to equal `expected`.
///
/// # Errors
///
/// - [`WireError::MalformedFraming`] naming `field` on mismatch, with the
///   offset of the offending byte.
/// - [`WireError::TruncatedStream`] if the window is already exhausted.
pub fn expect_byte<S: ByteSource + ?Sized>(
    src: &mut S,
    field: &'static str,
    expected: u8,
) -> Result<(), WireError> {
    let offset = src.position();
    let found = src.read_u8()?;
    if found != expected {
        return Err(WireError::MalformedFraming {
            field,
            expected,
            found,
            offset,
        });
    }
    Ok(())
}

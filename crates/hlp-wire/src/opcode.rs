//! Opcode bytes that select a paragraph item.
//!
//! These are the raw discriminators as they appear on the wire. The
//! `hlp-types` crate maps them onto its typed `Opcode` enum.
//!
//! ```text
//! ┌──────┬──────────────────┬──────────────────────────┐
//! │ Byte │ Item             │ Payload                  │
//! ├──────┼──────────────────┼──────────────────────────┤
//! │ 0x01 │ Text             │ text run                 │
//! │ 0x80 │ FontChange       │ u16 font descriptor      │
//! │ 0x81 │ NewLine          │ none                     │
//! │ 0x82 │ NewParagraph     │ none                     │
//! │ 0x83 │ Tab              │ none                     │
//! │ 0x86 │ Bitmap (current) │ 8-byte bitmap record     │
//! │ 0x87 │ Bitmap (left)    │ 8-byte bitmap record     │
//! │ 0x88 │ Bitmap (right)   │ 8-byte bitmap record     │
//! └──────┴──────────────────┴──────────────────────────┘
//! ```

pub const TEXT: u8 = 0x01;
pub const FONT_CHANGE: u8 = 0x80;
pub const NEW_LINE: u8 = 0x81;
pub const NEW_PARAGRAPH: u8 = 0x82;
pub const TAB: u8 = 0x83;
pub const BITMAP_CURRENT: u8 = 0x86;
pub const BITMAP_LEFT: u8 = 0x87;
pub const BITMAP_RIGHT: u8 = 0x88;

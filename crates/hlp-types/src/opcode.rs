use hlp_wire::opcode;

use crate::bitmap::BitmapAlignment;

/// Typed paragraph item discriminator.
///
/// Each variant maps to one wire byte from `hlp_wire::opcode`. The three
/// bitmap opcodes collapse into one variant carrying the alignment they
/// select; alignment is never encoded inside the bitmap record itself.
///
/// The set is closed. A byte outside it is a decode error, not a
/// forward-compatible unknown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Opcode {
    Text,
    FontChange,
    NewLine,
    NewParagraph,
    Tab,
    Bitmap(BitmapAlignment),
}

impl Opcode {
    /// Return the wire byte for this opcode.
    #[must_use]
    pub fn wire_byte(self) -> u8 {
        match self {
            Self::Text => opcode::TEXT,
            Self::FontChange => opcode::FONT_CHANGE,
            Self::NewLine => opcode::NEW_LINE,
            Self::NewParagraph => opcode::NEW_PARAGRAPH,
            Self::Tab => opcode::TAB,
            Self::Bitmap(BitmapAlignment::Current) => opcode::BITMAP_CURRENT,
            Self::Bitmap(BitmapAlignment::Left) => opcode::BITMAP_LEFT,
            Self::Bitmap(BitmapAlignment::Right) => opcode::BITMAP_RIGHT,
        }
    }

    /// Parse a wire byte. `None` for bytes that select no item.
    #[must_use]
    pub fn from_wire_byte(byte: u8) -> Option<Self> {
        match byte {
            opcode::TEXT => Some(Self::Text),
            opcode::FONT_CHANGE => Some(Self::FontChange),
            opcode::NEW_LINE => Some(Self::NewLine),
            opcode::NEW_PARAGRAPH => Some(Self::NewParagraph),
            opcode::TAB => Some(Self::Tab),
            opcode::BITMAP_CURRENT => Some(Self::Bitmap(BitmapAlignment::Current)),
            opcode::BITMAP_LEFT => Some(Self::Bitmap(BitmapAlignment::Left)),
            opcode::BITMAP_RIGHT => Some(Self::Bitmap(BitmapAlignment::Right)),
            _ => None,
        }
    }
}

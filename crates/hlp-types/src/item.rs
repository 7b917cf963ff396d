use std::fmt;

use hlp_wire::ByteSource;

use crate::bitmap::BitmapRef;
use crate::error::TypeError;
use crate::opcode::Opcode;
use crate::text::TextFormat;

/// One content item of a paragraph stream.
///
/// The set of variants is fixed by the file format. Each variant owns
/// exactly the bytes of its payload:
///
/// ```text
/// ┌──────────────┬───────────────────────────────────────┐
/// │ Variant      │ Payload after the opcode              │
/// ├──────────────┼───────────────────────────────────────┤
/// │ Text         │ text run (see TextFraming)            │
/// │ FontChange   │ 2 bytes, u16 LE font descriptor       │
/// │ NewLine      │ none                                  │
/// │ NewParagraph │ none                                  │
/// │ Tab          │ none                                  │
/// │ Bitmap       │ 8-byte bitmap record                  │
/// └──────────────┴───────────────────────────────────────┘
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ParagraphItem {
    /// A run of literal text.
    Text(String),
    /// Switch to the font with this descriptor index.
    FontChange(u16),
    /// Soft line break inside the paragraph.
    NewLine,
    /// Hard paragraph break.
    NewParagraph,
    Tab,
    Bitmap(BitmapRef),
}

impl ParagraphItem {
    /// Decode the payload selected by `opcode`. The opcode byte itself has
    /// already been consumed by the caller.
    ///
    /// # Errors
    ///
    /// Whatever the selected payload decoder reports; see
    /// [`TextFormat::read`] and [`BitmapRef::read_from`]. A font change
    /// fails only with a truncated stream.
    pub fn read_payload<S: ByteSource + ?Sized>(
        src: &mut S,
        opcode: Opcode,
        text: &TextFormat,
    ) -> Result<Self, TypeError> {
        Ok(match opcode {
            Opcode::Text => Self::Text(text.read(src)?),
            Opcode::FontChange => Self::FontChange(src.read_u16_le()?),
            Opcode::NewLine => Self::NewLine,
            Opcode::NewParagraph => Self::NewParagraph,
            Opcode::Tab => Self::Tab,
            Opcode::Bitmap(alignment) => Self::Bitmap(BitmapRef::read_from(src, alignment)?),
        })
    }

    /// The opcode that introduces this item on the wire.
    #[must_use]
    pub fn opcode(&self) -> Opcode {
        match self {
            Self::Text(_) => Opcode::Text,
            Self::FontChange(_) => Opcode::FontChange,
            Self::NewLine => Opcode::NewLine,
            Self::NewParagraph => Opcode::NewParagraph,
            Self::Tab => Opcode::Tab,
            Self::Bitmap(bitmap) => Opcode::Bitmap(bitmap.alignment),
        }
    }
}

impl fmt::Display for ParagraphItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "text {text:?}"),
            Self::FontChange(descriptor) => write!(f, "font {descriptor}"),
            Self::NewLine => f.write_str("newline"),
            Self::NewParagraph => f.write_str("paragraph"),
            Self::Tab => f.write_str("tab"),
            Self::Bitmap(bitmap) => write!(f, "bitmap {} #{}", bitmap.alignment, bitmap.number),
        }
    }
}

#[cfg(test)]
mod tests {
    use hlp_wire::{SliceSource, WireError};

    use super::*;
    use crate::bitmap::BitmapAlignment;

    fn read(opcode: Opcode, payload: &[u8]) -> (Result<ParagraphItem, TypeError>, usize) {
        let mut src = SliceSource::new(payload);
        let result = ParagraphItem::read_payload(&mut src, opcode, &TextFormat::default());
        (result, src.position())
    }

    #[test]
    fn font_change_reads_two_bytes() {
        let (item, consumed) = read(Opcode::FontChange, &[0x07, 0x00, 0x82]);
        assert_eq!(item.unwrap(), ParagraphItem::FontChange(7));
        assert_eq!(consumed, 2);
    }

    #[test]
    fn markers_read_nothing() {
        for (opcode, expected) in [
            (Opcode::NewLine, ParagraphItem::NewLine),
            (Opcode::NewParagraph, ParagraphItem::NewParagraph),
            (Opcode::Tab, ParagraphItem::Tab),
        ] {
            let (item, consumed) = read(opcode, &[0xAA, 0xBB]);
            assert_eq!(item.unwrap(), expected);
            assert_eq!(consumed, 0, "{opcode:?} must not consume payload");
        }
    }

    #[test]
    fn bitmap_alignment_comes_from_opcode() {
        let payload = [0x22, 0x08, 0x80, 0x02, 0x00, 0x00, 0x03, 0x00];
        let (item, consumed) = read(Opcode::Bitmap(BitmapAlignment::Right), &payload);
        assert_eq!(
            item.unwrap(),
            ParagraphItem::Bitmap(BitmapRef {
                alignment: BitmapAlignment::Right,
                number: 3
            })
        );
        assert_eq!(consumed, 8);
    }

    #[test]
    fn text_uses_format() {
        let (item, consumed) = read(Opcode::Text, b"Hi\0");
        assert_eq!(item.unwrap(), ParagraphItem::Text("Hi".to_string()));
        assert_eq!(consumed, 3);
    }

    #[test]
    fn half_a_font_descriptor() {
        let (item, _) = read(Opcode::FontChange, &[0x07]);
        assert!(matches!(
            item,
            Err(TypeError::Wire(WireError::TruncatedStream { needed: 1, .. }))
        ));
    }

    #[test]
    fn opcode_matches_variant() {
        let bitmap = ParagraphItem::Bitmap(BitmapRef {
            alignment: BitmapAlignment::Left,
            number: 1,
        });
        assert_eq!(bitmap.opcode(), Opcode::Bitmap(BitmapAlignment::Left));
        assert_eq!(ParagraphItem::Tab.opcode(), Opcode::Tab);
    }

    #[test]
    fn display_forms() {
        assert_eq!(ParagraphItem::Text("a\"b".into()).to_string(), r#"text "a\"b""#);
        assert_eq!(ParagraphItem::FontChange(3).to_string(), "font 3");
        assert_eq!(
            ParagraphItem::Bitmap(BitmapRef {
                alignment: BitmapAlignment::Current,
                number: 12
            })
            .to_string(),
            "bitmap current #12"
        );
    }
}

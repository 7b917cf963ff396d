use std::fmt;

use hlp_wire::ByteSource;
use hlp_wire::sentinel::{
    BITMAP_EMBEDDED, BITMAP_LEAD, BITMAP_MARK, BITMAP_SUBTYPE, BITMAP_TRAIL, expect_byte,
};
use log::trace;

use crate::error::{Feature, TypeError};

/// Where an inline bitmap sits relative to the text around it.
///
/// Chosen by the opcode that introduced the bitmap, not by any byte of
/// the bitmap record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BitmapAlignment {
    /// Inline at the current text position.
    Current,
    Left,
    Right,
}

impl fmt::Display for BitmapAlignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Current => "current",
            Self::Left => "left",
            Self::Right => "right",
        })
    }
}

/// Reference to a bitmap stored elsewhere in the help file.
///
/// `number` is resolved to image data by the caller's bitmap table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BitmapRef {
    pub alignment: BitmapAlignment,
    pub number: u16,
}

impl BitmapRef {
    /// Decode the 8-byte bitmap record that follows a bitmap opcode.
    ///
    /// Validation order follows the wire order, so the first problem in
    /// the record is the one reported.
    ///
    /// # Errors
    ///
    /// - [`TypeError::UnsupportedBitmapType`] if the subtype is not `0x22`.
    /// - [`TypeError::Wire`] wrapping `MalformedFraming` if any of the
    ///   fixed bytes `0x08 0x80 0x02` is wrong.
    /// - [`TypeError::UnsupportedFeature`] with [`Feature::EmbeddedBitmap`]
    ///   if the embed flag is `1`.
    /// - [`TypeError::Wire`] wrapping `TruncatedStream` on a short record.
    pub fn read_from<S: ByteSource + ?Sized>(
        src: &mut S,
        alignment: BitmapAlignment,
    ) -> Result<Self, TypeError> {
        let subtype = src.read_u8()?;
        if subtype != BITMAP_SUBTYPE {
            return Err(TypeError::UnsupportedBitmapType { subtype });
        }

        expect_byte(src, "bitmap lead", BITMAP_LEAD)?;
        expect_byte(src, "bitmap mark", BITMAP_MARK)?;
        expect_byte(src, "bitmap trail", BITMAP_TRAIL)?;

        let embed_flag = src.read_u16_le()?;
        if embed_flag == BITMAP_EMBEDDED {
            return Err(TypeError::UnsupportedFeature(Feature::EmbeddedBitmap));
        }

        let number = src.read_u16_le()?;
        trace!("bitmap #{number} aligned {alignment}");
        Ok(Self { alignment, number })
    }
}

#[cfg(test)]
mod tests {
    use hlp_wire::sentinel::BITMAP_RECORD_SIZE;
    use hlp_wire::{SliceSource, WireError};

    use super::*;

    fn record(embed_flag: u16, number: u16) -> Vec<u8> {
        let mut buf = vec![0x22, 0x08, 0x80, 0x02];
        buf.extend_from_slice(&embed_flag.to_le_bytes());
        buf.extend_from_slice(&number.to_le_bytes());
        buf
    }

    #[test]
    fn decodes_left_aligned_reference() {
        let bytes = record(0, 0x002A);
        let mut src = SliceSource::new(&bytes);
        let bitmap = BitmapRef::read_from(&mut src, BitmapAlignment::Left).unwrap();
        assert_eq!(
            bitmap,
            BitmapRef {
                alignment: BitmapAlignment::Left,
                number: 42
            }
        );
        assert_eq!(src.position(), BITMAP_RECORD_SIZE);
    }

    #[test]
    fn consumes_exactly_its_record() {
        let mut bytes = record(0, 7);
        bytes.extend_from_slice(&[0x82, 0x83]);
        let mut src = SliceSource::new(&bytes);
        BitmapRef::read_from(&mut src, BitmapAlignment::Current).unwrap();
        assert_eq!(src.rest(), &[0x82, 0x83]);
    }

    #[test]
    fn other_subtype_is_unsupported() {
        // Only the subtype byte matters; the rest is garbage.
        let bytes = [0x23, 0xFF, 0xFF, 0xFF];
        let mut src = SliceSource::new(&bytes);
        let result = BitmapRef::read_from(&mut src, BitmapAlignment::Right);
        assert!(matches!(
            result,
            Err(TypeError::UnsupportedBitmapType { subtype: 0x23 })
        ));
    }

    #[test]
    fn embedded_bitmap_is_unsupported_feature() {
        let bytes = record(1, 5);
        let mut src = SliceSource::new(&bytes);
        let result = BitmapRef::read_from(&mut src, BitmapAlignment::Current);
        assert!(matches!(
            result,
            Err(TypeError::UnsupportedFeature(Feature::EmbeddedBitmap))
        ));
    }

    #[test]
    fn other_embed_flags_are_references() {
        let bytes = record(2, 9);
        let mut src = SliceSource::new(&bytes);
        let bitmap = BitmapRef::read_from(&mut src, BitmapAlignment::Current).unwrap();
        assert_eq!(bitmap.number, 9);
    }

    #[test]
    fn each_fixed_byte_is_checked() {
        for (idx, field) in [(1, "bitmap lead"), (2, "bitmap mark"), (3, "bitmap trail")] {
            let mut bytes = record(0, 1);
            bytes[idx] ^= 0xFF;
            let mut src = SliceSource::new(&bytes);
            let err = BitmapRef::read_from(&mut src, BitmapAlignment::Left).unwrap_err();
            match err {
                TypeError::Wire(WireError::MalformedFraming {
                    field: f, offset, ..
                }) => {
                    assert_eq!(f, field);
                    assert_eq!(offset, idx);
                }
                other => panic!("expected MalformedFraming for {field}, got {other:?}"),
            }
        }
    }

    #[test]
    fn short_record_is_truncated() {
        let bytes = record(0, 1);
        let mut src = SliceSource::new(&bytes[..7]);
        let result = BitmapRef::read_from(&mut src, BitmapAlignment::Left);
        assert!(matches!(
            result,
            Err(TypeError::Wire(WireError::TruncatedStream { offset: 6, needed: 1 }))
        ));
    }
}

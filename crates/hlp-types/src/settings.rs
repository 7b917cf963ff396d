use hlp_wire::ByteSource;
use hlp_wire::sentinel::{BORDER_FOOTER, BORDER_HEADER, expect_byte};
use log::trace;

use crate::border::ParagraphBorder;
use crate::error::TypeError;
use crate::setup::ParagraphSetup;

/// Paragraph-level attributes at the head of a paragraph sub-stream.
///
/// ```text
/// ┌────────────────────────────────────────────────────────┐
/// │ setup   u32 LE                  (always, 4 bytes)      │
/// │ 0x01    border header  ┐                               │
/// │ border  u8 flags       ├ only when setup.has_border()  │
/// │ 0x51    border footer  ┘                               │
/// └────────────────────────────────────────────────────────┘
/// ```
///
/// The border is not stored as an independent `Option`. [`border`]
/// derives presence from the setup word, so a value with the border bit
/// clear can never report a border and vice versa.
///
/// Other optional sub-records announced by the setup word (spacing,
/// indents, tab stops) are outside this record and are not decoded here.
///
/// [`border`]: ParagraphSettings::border
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ParagraphSettings {
    setup: ParagraphSetup,
    border: ParagraphBorder,
}

impl ParagraphSettings {
    /// Build settings from parts.
    ///
    /// `border` is ignored when `setup` lacks the border bit. When the bit
    /// is set and `border` is `None`, the border reads back as an empty
    /// flag set.
    #[must_use]
    pub fn new(setup: ParagraphSetup, border: Option<ParagraphBorder>) -> Self {
        let border = if setup.has_border() {
            border.unwrap_or_default()
        } else {
            ParagraphBorder::NONE
        };
        Self { setup, border }
    }

    #[must_use]
    pub fn setup(&self) -> ParagraphSetup {
        self.setup
    }

    /// The border flags, present exactly when the setup word says so.
    #[must_use]
    pub fn border(&self) -> Option<ParagraphBorder> {
        self.setup.has_border().then_some(self.border)
    }

    /// Decode the settings record.
    ///
    /// Consumes exactly 4 bytes, or exactly 7 when the border bit is set.
    ///
    /// # Errors
    ///
    /// - [`TypeError::Wire`] wrapping `MalformedFraming` if the border
    ///   header is not `0x01` or the footer is not `0x51`.
    /// - [`TypeError::Wire`] wrapping `TruncatedStream` if the window ends
    ///   inside the record.
    pub fn read_from<S: ByteSource + ?Sized>(src: &mut S) -> Result<Self, TypeError> {
        let setup = ParagraphSetup::from_raw(src.read_u32_le()?);

        if !setup.has_border() {
            trace!("paragraph setup {setup}");
            return Ok(Self {
                setup,
                border: ParagraphBorder::NONE,
            });
        }

        expect_byte(src, "border header", BORDER_HEADER)?;
        let border = ParagraphBorder::from_raw(src.read_u8()?);
        expect_byte(src, "border footer", BORDER_FOOTER)?;

        trace!("paragraph setup {setup}, border {border}");
        Ok(Self { setup, border })
    }
}

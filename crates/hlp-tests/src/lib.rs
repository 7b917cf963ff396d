//! Fixture tooling shared by the integration tests and benches.
//!
//! [`StreamBuilder`] lays out paragraph sub-stream bytes by hand so tests
//! can state inputs as items instead of hex. It also records where every
//! record ends, which the boundary tests use to tell a clean cut from a
//! cut through the middle of a record.
//!
//! Text is written as raw bytes of the given `&str`, so fixtures stay
//! ASCII unless a test is deliberately exercising a code page.

#![allow(clippy::pedantic)]

use hlp_types::bitmap::BitmapAlignment;
use hlp_types::opcode::Opcode;
use hlp_types::setup::ParagraphSetup;
use hlp_wire::sentinel::{
    BITMAP_LEAD, BITMAP_MARK, BITMAP_SUBTYPE, BITMAP_TRAIL, BORDER_FOOTER, BORDER_HEADER,
};

/// Install `env_logger` for the test binary. Safe to call from every test.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Parse a whitespace-separated hex fixture such as `"00 00 00 01 82"`.
pub fn hex_fixture(text: &str) -> Vec<u8> {
    let compact: String = text.split_whitespace().collect();
    hex::decode(compact).unwrap_or_else(|e| panic!("bad hex fixture {text:?}: {e}"))
}

/// Hand-assembles a paragraph sub-stream.
#[derive(Clone, Debug)]
pub struct StreamBuilder {
    buf: Vec<u8>,
    boundaries: Vec<usize>,
}

impl StreamBuilder {
    /// Start with a settings record that has no border.
    ///
    /// The border bit is cleared from `setup` so the bytes stay
    /// consistent.
    pub fn new(setup: ParagraphSetup) -> Self {
        let raw = setup.raw() & !ParagraphSetup::HAS_BORDER.raw();
        let mut builder = Self {
            buf: raw.to_le_bytes().to_vec(),
            boundaries: Vec::new(),
        };
        builder.mark();
        builder
    }

    /// Start with a settings record carrying a border sub-record.
    pub fn with_border(setup: ParagraphSetup, border: u8) -> Self {
        let raw = setup.raw() | ParagraphSetup::HAS_BORDER.raw();
        let mut buf = raw.to_le_bytes().to_vec();
        buf.extend_from_slice(&[BORDER_HEADER, border, BORDER_FOOTER]);
        let mut builder = Self {
            buf,
            boundaries: Vec::new(),
        };
        builder.mark();
        builder
    }

    fn mark(&mut self) {
        self.boundaries.push(self.buf.len());
    }

    fn op(&mut self, opcode: Opcode) {
        self.buf.push(opcode.wire_byte());
    }

    /// NUL-terminated text run.
    pub fn text(mut self, text: &str) -> Self {
        self.op(Opcode::Text);
        self.buf.extend_from_slice(text.as_bytes());
        self.buf.push(0);
        self.mark();
        self
    }

    /// Length-prefixed text run.
    pub fn text_prefixed(mut self, text: &str) -> Self {
        self.op(Opcode::Text);
        let len = u16::try_from(text.len()).expect("fixture text fits in u16");
        self.buf.extend_from_slice(&len.to_le_bytes());
        self.buf.extend_from_slice(text.as_bytes());
        self.mark();
        self
    }

    pub fn font(mut self, descriptor: u16) -> Self {
        self.op(Opcode::FontChange);
        self.buf.extend_from_slice(&descriptor.to_le_bytes());
        self.mark();
        self
    }

    pub fn new_line(mut self) -> Self {
        self.op(Opcode::NewLine);
        self.mark();
        self
    }

    pub fn new_paragraph(mut self) -> Self {
        self.op(Opcode::NewParagraph);
        self.mark();
        self
    }

    pub fn tab(mut self) -> Self {
        self.op(Opcode::Tab);
        self.mark();
        self
    }

    /// Bitmap reference with the given embed flag word.
    pub fn bitmap_with_flag(mut self, alignment: BitmapAlignment, embed: u16, number: u16) -> Self {
        self.op(Opcode::Bitmap(alignment));
        self.buf
            .extend_from_slice(&[BITMAP_SUBTYPE, BITMAP_LEAD, BITMAP_MARK, BITMAP_TRAIL]);
        self.buf.extend_from_slice(&embed.to_le_bytes());
        self.buf.extend_from_slice(&number.to_le_bytes());
        self.mark();
        self
    }

    pub fn bitmap(self, alignment: BitmapAlignment, number: u16) -> Self {
        self.bitmap_with_flag(alignment, 0, number)
    }

    /// Append bytes verbatim. Does not record a boundary.
    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.buf.extend_from_slice(bytes);
        self
    }

    /// Offsets at which a record ends: after the settings record, then
    /// after each item.
    pub fn boundaries(&self) -> &[usize] {
        &self.boundaries
    }

    pub fn bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn build(self) -> Vec<u8> {
        self.buf
    }
}

use std::fmt;
use std::io::Read;

use hlp_types::item::ParagraphItem;
use hlp_types::settings::ParagraphSettings;
use hlp_wire::{ByteSource, IoSource, SliceSource};
use log::{debug, warn};

use crate::config::DecoderConfig;
use crate::error::DecodeError;
use crate::item_reader::ItemReader;

/// The result of decoding one topic's paragraph stream.
///
/// ```text
/// ┌──────────────────────────────────────────────────────────┐
/// │ ParagraphItems                                           │
/// │   settings: ParagraphSettings ← layout for the stream    │
/// │   items: Vec<ParagraphItem>   ← content in reading order │
/// └──────────────────────────────────────────────────────────┘
/// ```
///
/// `settings` applies to every item. Order in `items` is the document's
/// reading order and is exactly the wire order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParagraphItems {
    pub settings: ParagraphSettings,
    pub items: Vec<ParagraphItem>,
}

impl ParagraphItems {
    /// Concatenated text with line and paragraph breaks as `\n` and tabs as
    /// `\t`. Font changes and bitmaps contribute nothing.
    #[must_use]
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for item in &self.items {
            match item {
                ParagraphItem::Text(text) => out.push_str(text),
                ParagraphItem::NewLine | ParagraphItem::NewParagraph => out.push('\n'),
                ParagraphItem::Tab => out.push('\t'),
                ParagraphItem::FontChange(_) | ParagraphItem::Bitmap(_) => {}
            }
        }
        out
    }

    /// Items grouped into paragraphs, split at each `NewParagraph`.
    ///
    /// The markers themselves are dropped. A break at the very end closes
    /// the last paragraph rather than opening an empty one.
    #[must_use]
    pub fn paragraphs(&self) -> Vec<&[ParagraphItem]> {
        let mut out: Vec<&[ParagraphItem]> = self
            .items
            .split(|item| *item == ParagraphItem::NewParagraph)
            .collect();
        if out.last().is_some_and(|last| last.is_empty()) {
            out.pop();
        }
        out
    }

    /// Distinct font descriptors in order of first use, for the caller's
    /// font table.
    #[must_use]
    pub fn font_descriptors(&self) -> Vec<u16> {
        let mut out = Vec::new();
        for item in &self.items {
            if let ParagraphItem::FontChange(descriptor) = item {
                if !out.contains(descriptor) {
                    out.push(*descriptor);
                }
            }
        }
        out
    }

    /// Distinct bitmap numbers in order of first use, for the caller's
    /// bitmap table.
    #[must_use]
    pub fn bitmap_numbers(&self) -> Vec<u16> {
        let mut out = Vec::new();
        for item in &self.items {
            if let ParagraphItem::Bitmap(bitmap) = item {
                if !out.contains(&bitmap.number) {
                    out.push(bitmap.number);
                }
            }
        }
        out
    }
}

impl fmt::Display for ParagraphItems {
    /// One line for the setup, one for the border when present, then one
    /// indented line per item.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "setup: {}", self.settings.setup())?;
        if let Some(border) = self.settings.border() {
            writeln!(f, "border: {border}")?;
        }
        write!(f, "items: {}", self.items.len())?;
        for item in &self.items {
            write!(f, "\n  {item}")?;
        }
        Ok(())
    }
}

/// Synchronous paragraph stream decoder.
///
/// Decoding is a strict forward read over one bounded sub-stream:
///
///   1. **Settings**: one settings record (4 or 7 bytes).
///   2. **Items**: opcode + payload, repeated until the window is
///      exhausted exactly between two items.
///
/// There is no terminator item and no item count; the window boundary
/// supplied by the container layer is the only end marker. If that
/// boundary is off, the decode fails with a truncated stream or an
/// unknown opcode rather than guessing.
///
/// # Example
///
/// ```rust
/// use hlp_decoder::ParagraphDecoder;
/// use hlp_types::ParagraphItem;
///
/// // setup word without border, font change to 7, paragraph break
/// let bytes = [0x00, 0x00, 0x00, 0x00, 0x80, 0x07, 0x00, 0x82];
/// let decoded = ParagraphDecoder::decode(&bytes).unwrap();
/// assert_eq!(
///     decoded.items,
///     vec![ParagraphItem::FontChange(7), ParagraphItem::NewParagraph]
/// );
/// ```
pub struct ParagraphDecoder;

impl ParagraphDecoder {
    /// Decode an in-memory sub-stream with the default configuration.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::Wire`] for truncation or a bad sentinel.
    /// - [`DecodeError::Type`] for an unsupported bitmap.
    /// - [`DecodeError::UnknownOpcode`] for a byte that selects no item.
    pub fn decode(buf: &[u8]) -> Result<ParagraphItems, DecodeError> {
        Self::decode_with_config(buf, &DecoderConfig::default())
    }

    /// Decode an in-memory sub-stream.
    ///
    /// # Errors
    ///
    /// All errors from [`decode`](Self::decode), plus
    /// [`DecodeError::ItemLimitExceeded`] when `config.max_items` is set.
    pub fn decode_with_config(
        buf: &[u8],
        config: &DecoderConfig,
    ) -> Result<ParagraphItems, DecodeError> {
        let mut src = SliceSource::new(buf);
        Self::decode_from(&mut src, config)
    }

    /// Decode `len` bytes from a reader positioned at the start of the
    /// sub-stream. The reader is left wherever decoding stopped.
    ///
    /// # Errors
    ///
    /// As [`decode_with_config`](Self::decode_with_config); reader
    /// failures other than end of data surface as `WireError::Io`.
    pub fn decode_reader<R: Read>(
        reader: R,
        len: usize,
        config: &DecoderConfig,
    ) -> Result<ParagraphItems, DecodeError> {
        let mut src = IoSource::new(reader, len);
        Self::decode_from(&mut src, config)
    }

    /// Decode from any bounded byte source.
    ///
    /// # Errors
    ///
    /// As [`decode_with_config`](Self::decode_with_config).
    pub fn decode_from<S: ByteSource + ?Sized>(
        src: &mut S,
        config: &DecoderConfig,
    ) -> Result<ParagraphItems, DecodeError> {
        let result = Self::decode_inner(src, config);
        if let Err(err) = &result {
            warn!(
                "paragraph stream abandoned at offset {}: {err}",
                src.position()
            );
        }
        result
    }

    fn decode_inner<S: ByteSource + ?Sized>(
        src: &mut S,
        config: &DecoderConfig,
    ) -> Result<ParagraphItems, DecodeError> {
        let settings = ParagraphSettings::read_from(src)?;

        let mut items = Vec::new();
        let mut reader = ItemReader::new(src, config.text_format());
        while let Some(item) = reader.next_item()? {
            if let Some(limit) = config.max_items {
                if items.len() >= limit {
                    return Err(DecodeError::ItemLimitExceeded { limit });
                }
            }
            items.push(item);
        }

        debug!(
            "decoded paragraph stream: {} bytes, {} items, setup {}",
            reader.position(),
            items.len(),
            settings.setup()
        );
        Ok(ParagraphItems { settings, items })
    }
}

use encoding_rs::{Encoding, WINDOWS_1252};
use hlp_types::text::{TextFormat, TextFraming};

/// Configuration for the paragraph decoder.
///
/// ```text
/// ┌──────────────┬──────────────────────────────────────────────────┐
/// │ Field        │ Purpose                                          │
/// ├──────────────┼──────────────────────────────────────────────────┤
/// │ text_framing │ NUL-terminated or u16-length-prefixed text runs  │
/// │ encoding     │ ANSI code page text bytes are decoded with       │
/// │ max_items    │ Optional cap on items per paragraph stream       │
/// └──────────────┴──────────────────────────────────────────────────┘
/// ```
///
/// The defaults match files written by the stock help compiler on a
/// Western-European system: NUL-terminated Windows-1252 text and no item
/// cap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecoderConfig {
    pub text_framing: TextFraming,

    /// Code page for text runs. Take it from the help file's system
    /// record when the container exposes one.
    pub encoding: &'static Encoding,

    /// Upper bound on items in one stream. `None` decodes everything the
    /// window holds.
    pub max_items: Option<usize>,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            text_framing: TextFraming::NulTerminated,
            encoding: WINDOWS_1252,
            max_items: None,
        }
    }
}

impl DecoderConfig {
    #[must_use]
    pub fn with_text_framing(mut self, framing: TextFraming) -> Self {
        self.text_framing = framing;
        self
    }

    #[must_use]
    pub fn with_encoding(mut self, encoding: &'static Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    #[must_use]
    pub fn with_max_items(mut self, limit: usize) -> Self {
        self.max_items = Some(limit);
        self
    }

    pub(crate) fn text_format(&self) -> TextFormat {
        TextFormat::new(self.text_framing, self.encoding)
    }
}

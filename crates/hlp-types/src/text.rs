use encoding_rs::{Encoding, WINDOWS_1252};
use hlp_wire::ByteSource;
use log::debug;

use crate::error::TypeError;

/// How a text run's extent is marked on the wire.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextFraming {
    /// Bytes up to a `0x00` terminator. The terminator is consumed and
    /// not part of the text.
    #[default]
    NulTerminated,
    /// A `u16` LE byte count followed by that many bytes.
    LengthPrefixed,
}

/// Framing plus code page for text runs.
///
/// Help files store text in the author's ANSI code page; the caller picks
/// it (the container's system record usually says which). Undecodable
/// bytes are replaced with U+FFFD rather than failing the topic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextFormat {
    pub framing: TextFraming,
    pub encoding: &'static Encoding,
}

impl Default for TextFormat {
    fn default() -> Self {
        Self {
            framing: TextFraming::default(),
            encoding: WINDOWS_1252,
        }
    }
}

impl TextFormat {
    #[must_use]
    pub fn new(framing: TextFraming, encoding: &'static Encoding) -> Self {
        Self { framing, encoding }
    }

    /// Read one text run.
    ///
    /// # Errors
    ///
    /// [`TypeError::Wire`] wrapping `TruncatedStream` when the terminator
    /// or the announced byte count runs past the window.
    pub fn read<S: ByteSource + ?Sized>(&self, src: &mut S) -> Result<String, TypeError> {
        let raw = match self.framing {
            TextFraming::NulTerminated => src.read_until(0)?,
            TextFraming::LengthPrefixed => {
                let len = src.read_u16_le()?;
                src.read_bytes(usize::from(len))?
            }
        };

        let (text, had_errors) = self.encoding.decode_without_bom_handling(&raw);
        if had_errors {
            debug!(
                "text run of {} bytes had sequences invalid in {}",
                raw.len(),
                self.encoding.name()
            );
        }
        Ok(text.into_owned())
    }
}

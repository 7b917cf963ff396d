use hlp_types::item::ParagraphItem;
use hlp_types::opcode::Opcode;
use hlp_types::text::TextFormat;
use hlp_wire::ByteSource;
use log::trace;

use crate::error::DecodeError;

/// Cursor-style reader for the item sequence after the settings record.
///
/// `ItemReader` borrows the byte source and pulls one item per call: an
/// opcode byte, then exactly the payload that opcode owns. There is no
/// length prefix for the sequence and no terminator item; the reader is
/// done when the source's window is exhausted between items.
///
/// # Usage pattern
///
/// ```text
///   let mut reader = ItemReader::new(&mut src, TextFormat::default());
///   while let Some(item) = reader.next_item()? {
///       match item { /* ... */ }
///   }
/// ```
pub struct ItemReader<'s, S: ?Sized> {
  src: &'s mut S,
  text: TextFormat,
}

impl<'s, S: ByteSource + ?Sized> ItemReader<'s, S> {
  /// Create a reader positioned just after the settings record.
  pub fn new(src: &'s mut S, text: TextFormat) -> Self {
    Self { src, text }
  }

  /// Read the next item.
  ///
  /// Returns `Ok(None)` when the window ends exactly on an item
  /// boundary. Ending anywhere inside an item is an error.
  ///
  /// # Errors
  ///
  /// - [`DecodeError::UnknownOpcode`] if the opcode byte selects nothing.
  /// - [`DecodeError::Wire`] for truncation or a bad sentinel inside the
  ///   payload.
  /// - [`DecodeError::Type`] for an unsupported bitmap.
  pub fn next_item(&mut self) -> Result<Option<ParagraphItem>, DecodeError> {
    if self.src.is_exhausted() {
      return Ok(None);
    }

    let offset = self.src.position();
    let byte = self.src.read_u8()?;
    let opcode =
      Opcode::from_wire_byte(byte).ok_or(DecodeError::UnknownOpcode { opcode: byte, offset })?;

    let item = ParagraphItem::read_payload(&mut *self.src, opcode, &self.text)?;
    trace!("item at offset {offset}: {item}");
    Ok(Some(item))
  }

  /// Bytes consumed from the window so far, settings record included.
  #[must_use]
  pub fn position(&self) -> usize {
    self.src.position()
  }
}

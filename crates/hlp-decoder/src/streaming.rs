use hlp_types::item::ParagraphItem;
use hlp_types::settings::ParagraphSettings;
use hlp_types::text::TextFormat;
use hlp_wire::ByteSource;
use log::{debug, warn};

use crate::config::DecoderConfig;
use crate::error::DecodeError;
use crate::item_reader::ItemReader;

/// Events emitted by the streaming decoder.
///
/// The stream yields `Settings` once, then one `Item` per decoded item
/// in wire order, then ends.
///
/// ```text
///   Settings(ParagraphSettings)
///   Item(ParagraphItem)
///   Item(ParagraphItem)
///   ... (stream ends at the window boundary)
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DecoderEvent {
  /// The settings record has been read and validated.
  Settings(ParagraphSettings),

  /// An item has been fully decoded.
  Item(ParagraphItem),
}

/// Pull-based paragraph decoder. Yields events one at a time instead
/// of collecting the whole stream.
///
/// Useful for a renderer that lays out items as they arrive, or that
/// wants to stop early. Produces exactly the same items, in the same
/// order, as [`ParagraphDecoder`](crate::ParagraphDecoder).
///
/// After the first error the iterator is fused: every later call to
/// `next` returns `None`. The items already yielded stay valid, but the
/// stream as a whole must be treated as failed.
///
/// # Example
///
/// ```rust
/// use hlp_decoder::{DecoderConfig, DecoderEvent, ItemStream};
/// use hlp_wire::SliceSource;
///
/// let bytes = [0x00, 0x00, 0x00, 0x00, 0x83, 0x81];
/// let mut src = SliceSource::new(&bytes);
/// let events: Vec<_> = ItemStream::new(&mut src, &DecoderConfig::default())
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(events.len(), 3);
/// assert!(matches!(events[0], DecoderEvent::Settings(_)));
/// ```
pub struct ItemStream<'s, S: ?Sized> {
  src: &'s mut S,
  text: TextFormat,
  max_items: Option<usize>,
  yielded: usize,
  state: StreamState,
}

/// Internal state machine for the streaming decoder.
///
/// ```text
///   ReadSettings → ReadItems → Done
/// ```
///
/// Any error moves straight to `Done`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum StreamState {
  ReadSettings,
  ReadItems,
  Done,
}

impl<'s, S: ByteSource + ?Sized> ItemStream<'s, S> {
  /// Create a stream over a source positioned at the start of a
  /// paragraph sub-stream.
  pub fn new(src: &'s mut S, config: &DecoderConfig) -> Self {
    Self {
      src,
      text: config.text_format(),
      max_items: config.max_items,
      yielded: 0,
      state: StreamState::ReadSettings,
    }
  }

  fn read_settings(&mut self) -> Result<DecoderEvent, DecodeError> {
    let settings = ParagraphSettings::read_from(&mut *self.src)?;
    self.state = StreamState::ReadItems;
    Ok(DecoderEvent::Settings(settings))
  }

  fn read_next_item(&mut self) -> Option<Result<DecoderEvent, DecodeError>> {
    let mut reader = ItemReader::new(&mut *self.src, self.text);
    match reader.next_item() {
      Ok(None) => {
        debug!("item stream finished after {} items", self.yielded);
        self.state = StreamState::Done;
        None
      }
      Ok(Some(item)) => {
        if let Some(limit) = self.max_items {
          if self.yielded >= limit {
            return Some(Err(DecodeError::ItemLimitExceeded { limit }));
          }
        }
        self.yielded += 1;
        Some(Ok(DecoderEvent::Item(item)))
      }
      Err(err) => Some(Err(err)),
    }
  }
}

impl<S: ByteSource + ?Sized> Iterator for ItemStream<'_, S> {
  type Item = Result<DecoderEvent, DecodeError>;

  fn next(&mut self) -> Option<Self::Item> {
    let event = match self.state {
      StreamState::ReadSettings => Some(self.read_settings()),
      StreamState::ReadItems => self.read_next_item(),
      StreamState::Done => None,
    };
    if let Some(Err(err)) = &event {
      warn!("item stream failed at offset {}: {err}", self.src.position());
      self.state = StreamState::Done;
    }
    event
  }
}

impl<S: ByteSource + ?Sized> std::iter::FusedIterator for ItemStream<'_, S> {}

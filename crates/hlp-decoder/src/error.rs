use hlp_types::error::TypeError;
use hlp_wire::WireError;

/// Errors that can occur while decoding a paragraph stream.
///
/// Every error is fatal to the current decode call: nothing is retried
/// and no partial [`ParagraphItems`](crate::ParagraphItems) is returned.
/// The caller decides whether a failed topic is skipped, shown with a
/// placeholder, or aborts the whole load.
///
/// ```text
///   DecodeError
///   ├── UnknownOpcode        ← byte in opcode position selects no item
///   ├── ItemLimitExceeded    ← DecoderConfig::max_items tripped
///   ├── Type(TypeError)      ← unsupported bitmap subtype / embedded bitmap
///   └── Wire(WireError)      ← TruncatedStream, MalformedFraming, Io
/// ```
///
/// Wire errors are never nested inside `Type`: the `From<TypeError>`
/// conversion lifts them to `Wire`, so truncation and framing failures
/// always match at the same place regardless of which record hit them.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// A byte in opcode position does not select any paragraph item.
    #[error("unknown paragraph opcode {opcode:#04X} at offset {offset}")]
    UnknownOpcode { opcode: u8, offset: usize },

    /// The stream holds more items than the configured limit.
    #[error("paragraph stream exceeds item limit of {limit}")]
    ItemLimitExceeded { limit: usize },

    /// A record uses a format variant this decoder does not implement.
    #[error(transparent)]
    Type(TypeError),

    /// Truncation, sentinel mismatch, or reader failure.
    #[error(transparent)]
    Wire(#[from] WireError),
}

impl From<TypeError> for DecodeError {
    fn from(err: TypeError) -> Self {
        match err {
            TypeError::Wire(wire) => Self::Wire(wire),
            other => Self::Type(other),
        }
    }
}

impl DecodeError {
    /// The sub-stream ended inside a record.
    ///
    /// Usually means the container layer computed the wrong boundary.
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        matches!(self, Self::Wire(WireError::TruncatedStream { .. }))
    }

    /// Stream corruption: a bad sentinel or an opcode that selects nothing.
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            Self::Wire(WireError::MalformedFraming { .. }) | Self::UnknownOpcode { .. }
        )
    }

    /// A recognised but unimplemented format variant. The data is likely
    /// fine; this decoder just cannot show it.
    #[must_use]
    pub fn is_unsupported(&self) -> bool {
        matches!(
            self,
            Self::Type(TypeError::UnsupportedBitmapType { .. } | TypeError::UnsupportedFeature(_))
        )
    }
}

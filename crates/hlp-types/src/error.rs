use std::fmt;

use hlp_wire::WireError;

/// Errors raised while decoding a typed record out of the byte stream.
///
/// These sit one level above [`WireError`]: the bytes were there and
/// framed correctly, but they describe something this decoder does not
/// implement. A `TypeError` wraps a `WireError` when the failure is a
/// short read or a bad sentinel inside the record.
///
/// ```text
/// ┌──────────────────────────────────────────────────────────┐
/// │ TypeError (this crate)                                   │
/// │   ├── UnsupportedBitmapType  subtype byte is not 0x22    │
/// │   ├── UnsupportedFeature     known capability gap        │
/// │   └── Wire(WireError)        truncation, bad sentinel    │
/// └──────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, thiserror::Error)]
pub enum TypeError {
    /// The bitmap subtype byte names a format variant that exists but is
    /// not implemented.
    #[error("unsupported bitmap subtype {subtype:#04X}, only 0x22 is supported")]
    UnsupportedBitmapType { subtype: u8 },

    /// The record uses a feature this decoder deliberately does not
    /// handle. This is not corruption.
    #[error("unsupported feature: {0}")]
    UnsupportedFeature(Feature),

    #[error(transparent)]
    Wire(#[from] WireError),
}

/// Capabilities the format has but this decoder leaves out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feature {
    /// Bitmap data stored inline in the topic rather than referenced by
    /// number.
    EmbeddedBitmap,
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmbeddedBitmap => f.write_str("embedded bitmap"),
        }
    }
}

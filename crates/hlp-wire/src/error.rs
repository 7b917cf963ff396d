/// Errors raised while pulling raw bytes out of a paragraph sub-stream.
///
/// These are the lowest-level failures: the window ran out, a fixed
/// sentinel byte did not match, or the underlying reader failed.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// The bounded window ended before a record was complete.
    ///
    /// `offset` is the position (from the start of the window) at which
    /// the short read began; `needed` is how many bytes were missing.
    #[error("truncated stream at offset {offset}: {needed} more byte(s) needed")]
    TruncatedStream { offset: usize, needed: usize },

    /// A fixed sentinel byte did not carry its expected constant.
    #[error("malformed framing at offset {offset}: {field} was {found:#04X}, expected {expected:#04X}")]
    MalformedFraming {
        field: &'static str,
        expected: u8,
        found: u8,
        offset: usize,
    },

    /// I/O error from the underlying reader, other than end of data.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

// End of data is never reported as `Io`. Both byte sources translate it
// into `TruncatedStream` so callers have one variant to match for "the
// container handed us too few bytes".

use crate::error::WireError;

/// A bounded, forward-only source of bytes.
///
/// Every decoder in the workspace reads through this trait. The window
/// it describes is exactly one topic's paragraph sub-stream: the
/// container layer decides where it starts and ends, and `remaining()`
/// reaching zero is the only end-of-stream signal the decoders use.
///
/// ```text
///   ┌───────────────────────── window ─────────────────────────┐
///   │ consumed (position())   │ remaining()                     │
///   └─────────────────────────┴─────────────────────────────────┘
/// ```
///
/// Implementors supply [`read_exact`](Self::read_exact); the fixed-width
/// little-endian readers are built on top of it.
pub trait ByteSource {
    /// Number of bytes consumed since the start of the window.
    fn position(&self) -> usize;

    /// Number of bytes left before the window boundary.
    fn remaining(&self) -> usize;

    /// Fill `buf` completely from the window.
    ///
    /// # Errors
    ///
    /// [`WireError::TruncatedStream`] if fewer than `buf.len()` bytes
    /// remain. The position after a failed read is unspecified.
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), WireError>;

    /// True once the whole window has been consumed.
    fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// Read a single byte.
    ///
    /// # Errors
    ///
    /// [`WireError::TruncatedStream`] at the window boundary.
    fn read_u8(&mut self) -> Result<u8, WireError> {
        let mut b = [0u8; 1];
        self.read_exact(&mut b)?;
        Ok(b[0])
    }

    /// Read a little-endian `u16`.
    ///
    /// # Errors
    ///
    /// [`WireError::TruncatedStream`] if fewer than 2 bytes remain.
    fn read_u16_le(&mut self) -> Result<u16, WireError> {
        let mut b = [0u8; 2];
        self.read_exact(&mut b)?;
        Ok(u16::from_le_bytes(b))
    }

    /// Read a little-endian `u32`.
    ///
    /// # Errors
    ///
    /// [`WireError::TruncatedStream`] if fewer than 4 bytes remain.
    fn read_u32_le(&mut self) -> Result<u32, WireError> {
        let mut b = [0u8; 4];
        self.read_exact(&mut b)?;
        Ok(u32::from_le_bytes(b))
    }

    /// Read exactly `len` bytes into a new buffer.
    ///
    /// The length is checked against the window before allocating, so a
    /// corrupt length prefix cannot trigger a huge allocation.
    ///
    /// # Errors
    ///
    /// [`WireError::TruncatedStream`] if fewer than `len` bytes remain.
    fn read_bytes(&mut self, len: usize) -> Result<Vec<u8>, WireError> {
        let available = self.remaining();
        if len > available {
            return Err(WireError::TruncatedStream {
                offset: self.position(),
                needed: len - available,
            });
        }
        let mut out = vec![0u8; len];
        self.read_exact(&mut out)?;
        Ok(out)
    }

    /// Read bytes up to and including `terminator`, returning them
    /// without the terminator.
    ///
    /// # Errors
    ///
    /// [`WireError::TruncatedStream`] if the window ends before the
    /// terminator is seen.
    fn read_until(&mut self, terminator: u8) -> Result<Vec<u8>, WireError> {
        let mut out = Vec::new();
        loop {
            let byte = self.read_u8()?;
            if byte == terminator {
                return Ok(out);
            }
            out.push(byte);
        }
    }
}

/// [`ByteSource`] over an in-memory slice.
///
/// The slice is the window: its length is the boundary the container
/// layer established.
#[derive(Clone, Debug)]
pub struct SliceSource<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> SliceSource<'a> {
    #[must_use]
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// The unread tail of the window.
    #[must_use]
    pub fn rest(&self) -> &'a [u8] {
        &self.buf[self.pos..]
    }
}

impl ByteSource for SliceSource<'_> {
    fn position(&self) -> usize {
        self.pos
    }

    fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    fn read_exact(&mut self, out: &mut [u8]) -> Result<(), WireError> {
        let available = self.remaining();
        if out.len() > available {
            return Err(WireError::TruncatedStream {
                offset: self.pos,
                needed: out.len() - available,
            });
        }
        let end = self.pos + out.len();
        out.copy_from_slice(&self.buf[self.pos..end]);
        self.pos = end;
        Ok(())
    }

    fn read_until(&mut self, terminator: u8) -> Result<Vec<u8>, WireError> {
        let rest = self.rest();
        let Some(idx) = rest.iter().position(|&b| b == terminator) else {
            return Err(WireError::TruncatedStream {
                offset: self.buf.len(),
                needed: 1,
            });
        };
        let out = rest[..idx].to_vec();
        self.pos += idx + 1;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_little_endian_integers() {
        let buf = [0x2A, 0x34, 0x12, 0x78, 0x56, 0x34, 0x12];
        let mut src = SliceSource::new(&buf);
        assert_eq!(src.read_u8().unwrap(), 0x2A);
        assert_eq!(src.read_u16_le().unwrap(), 0x1234);
        assert_eq!(src.read_u32_le().unwrap(), 0x1234_5678);
        assert_eq!(src.position(), 7);
        assert!(src.is_exhausted());
    }

    #[test]
    fn short_read_is_truncated_stream() {
        let buf = [0x01, 0x02, 0x03];
        let mut src = SliceSource::new(&buf);
        src.read_u8().unwrap();
        let result = src.read_u32_le();
        assert!(matches!(
            result,
            Err(WireError::TruncatedStream {
                offset: 1,
                needed: 2
            })
        ));
    }

    #[test]
    fn empty_window_is_exhausted() {
        let src = SliceSource::new(&[]);
        assert!(src.is_exhausted());
        assert_eq!(src.remaining(), 0);
    }

    #[test]
    fn read_until_consumes_terminator() {
        let buf = b"abc\0def";
        let mut src = SliceSource::new(buf);
        assert_eq!(src.read_until(0).unwrap(), b"abc");
        assert_eq!(src.position(), 4);
        assert_eq!(src.rest(), b"def");
    }

    #[test]
    fn read_until_without_terminator_fails() {
        let mut src = SliceSource::new(b"abc");
        assert!(matches!(
            src.read_until(0),
            Err(WireError::TruncatedStream { offset: 3, .. })
        ));
    }

    #[test]
    fn read_bytes_checks_window_before_allocating() {
        let mut src = SliceSource::new(&[0xAA; 4]);
        assert!(matches!(
            src.read_bytes(usize::MAX),
            Err(WireError::TruncatedStream { offset: 0, .. })
        ));
        assert_eq!(src.read_bytes(4).unwrap(), vec![0xAA; 4]);
    }
}

use std::io::{ErrorKind, Read};

use byteorder::{LittleEndian, ReadBytesExt};

use crate::error::WireError;
use crate::source::ByteSource;

/// [`ByteSource`] over any [`Read`] implementation, bounded to `len`
/// bytes.
///
/// The container layer knows how long a topic's paragraph sub-stream is;
/// that length becomes the window. Reads never go past it even when the
/// inner reader has more data, so a decoder cannot wander into the next
/// record.
///
/// End of data from the inner reader is reported as
/// [`WireError::TruncatedStream`], the same as running into the window
/// boundary. Other I/O failures surface as [`WireError::Io`].
#[derive(Debug)]
pub struct IoSource<R> {
    inner: R,
    len: usize,
    pos: usize,
}

impl<R: Read> IoSource<R> {
    /// Wrap `inner`, treating the next `len` bytes as the window.
    pub fn new(inner: R, len: usize) -> Self {
        Self { inner, len, pos: 0 }
    }

    /// Give back the inner reader. Its position is wherever decoding
    /// stopped.
    pub fn into_inner(self) -> R {
        self.inner
    }

    fn ensure(&self, needed: usize) -> Result<(), WireError> {
        let available = self.len - self.pos;
        if needed > available {
            return Err(WireError::TruncatedStream {
                offset: self.pos,
                needed: needed - available,
            });
        }
        Ok(())
    }

    fn map_eof(&self, err: std::io::Error, needed: usize) -> WireError {
        if err.kind() == ErrorKind::UnexpectedEof {
            WireError::TruncatedStream {
                offset: self.pos,
                needed,
            }
        } else {
            WireError::Io(err)
        }
    }
}

impl<R: Read> ByteSource for IoSource<R> {
    fn position(&self) -> usize {
        self.pos
    }

    fn remaining(&self) -> usize {
        self.len - self.pos
    }

    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), WireError> {
        self.ensure(buf.len())?;
        self.inner
            .read_exact(buf)
            .map_err(|e| self.map_eof(e, buf.len()))?;
        self.pos += buf.len();
        Ok(())
    }

    fn read_u8(&mut self) -> Result<u8, WireError> {
        self.ensure(1)?;
        let v = self.inner.read_u8().map_err(|e| self.map_eof(e, 1))?;
        self.pos += 1;
        Ok(v)
    }

    fn read_u16_le(&mut self) -> Result<u16, WireError> {
        self.ensure(2)?;
        let v = self
            .inner
            .read_u16::<LittleEndian>()
            .map_err(|e| self.map_eof(e, 2))?;
        self.pos += 2;
        Ok(v)
    }

    fn read_u32_le(&mut self) -> Result<u32, WireError> {
        self.ensure(4)?;
        let v = self
            .inner
            .read_u32::<LittleEndian>()
            .map_err(|e| self.map_eof(e, 4))?;
        self.pos += 4;
        Ok(v)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn window_stops_before_inner_end() {
        let data = [0x07, 0x00, 0xFF, 0xFF];
        let mut src = IoSource::new(Cursor::new(&data[..]), 2);
        assert_eq!(src.read_u16_le().unwrap(), 7);
        assert!(src.is_exhausted());
        assert!(matches!(
            src.read_u8(),
            Err(WireError::TruncatedStream {
                offset: 2,
                needed: 1
            })
        ));
        // The bytes past the window are still in the reader.
        assert_eq!(src.into_inner().position(), 2);
    }

    #[test]
    fn inner_eof_maps_to_truncated_stream() {
        // Window claims 8 bytes but the reader only has 3.
        let data = [0x01, 0x02, 0x03];
        let mut src = IoSource::new(Cursor::new(&data[..]), 8);
        assert!(matches!(
            src.read_u32_le(),
            Err(WireError::TruncatedStream { offset: 0, .. })
        ));
    }

    #[test]
    fn reads_match_slice_source() {
        let data = [0x00, 0x00, 0x00, 0x01, 0x01, 0x05, 0x51];
        let mut src = IoSource::new(Cursor::new(&data[..]), data.len());
        assert_eq!(src.read_u32_le().unwrap(), 0x0100_0000);
        assert_eq!(src.read_u8().unwrap(), 0x01);
        assert_eq!(src.read_u8().unwrap(), 0x05);
        assert_eq!(src.read_u8().unwrap(), 0x51);
        assert_eq!(src.position(), 7);
    }

    #[test]
    fn other_io_errors_pass_through() {
        struct Broken;
        impl Read for Broken {
            fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("disk on fire"))
            }
        }

        let mut src = IoSource::new(Broken, 4);
        assert!(matches!(src.read_u8(), Err(WireError::Io(_))));
    }
}

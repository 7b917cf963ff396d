#![warn(clippy::pedantic)]

pub mod error;
pub mod io_source;
pub mod opcode;
pub mod sentinel;
pub mod source;

pub use error::WireError;
pub use io_source::IoSource;
pub use source::{ByteSource, SliceSource};

#![warn(clippy::pedantic)]

pub mod config;
pub mod decoder;
pub mod error;
pub mod item_reader;
pub mod streaming;

pub use config::DecoderConfig;
pub use decoder::{ParagraphDecoder, ParagraphItems};
pub use error::DecodeError;
pub use item_reader::ItemReader;
pub use streaming::{DecoderEvent, ItemStream};

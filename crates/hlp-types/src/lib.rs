#![warn(clippy::pedantic)]

pub mod error;
pub mod setup;
pub mod border;
pub mod settings;
pub mod opcode;
pub mod bitmap;
pub mod text;
pub mod item;

pub use bitmap::{BitmapAlignment, BitmapRef};
pub use border::ParagraphBorder;
pub use error::{Feature, TypeError};
pub use item::ParagraphItem;
pub use opcode::Opcode;
pub use settings::ParagraphSettings;
pub use setup::{Justification, ParagraphSetup};
pub use text::{TextFormat, TextFraming};

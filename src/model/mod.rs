//! Data model for enums and their entries.

mod entry;
mod enum_block;
mod enum_map;
mod identifier;

pub use entry::EnumEntry;
pub use enum_block::EnumBlock;
pub use enum_map::EnumMap;
pub use identifier::{is_valid_identifier, Identifier};

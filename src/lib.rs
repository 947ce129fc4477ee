//! enumsplice - edit enum declarations embedded in source files
//!
//! This library finds enum blocks inside brace-structured source text, reads
//! their entries into an editable model, and writes regenerated blocks back
//! while leaving every other line of the file untouched.
//!
//! # Features
//!
//! - **Locate**: find the line span of a named enum by brace counting
//! - **Scan**: read every enum of a file and its entries in one pass
//! - **Rewrite**: update, insert or delete an enum in a line sequence
//! - **Sessions**: collect edits and save them with conflict detection
//!
//! # Example
//!
//! ```no_run
//! use enumsplice::interface::{Context, EnumSession};
//!
//! let ctx = Context::from_current_dir().unwrap();
//! let mut session = EnumSession::load(&ctx, "Assets/Scripts/Enums.cs").unwrap();
//! session.add_entry("Color", Some("Purple")).unwrap();
//! session.save(&ctx, false).unwrap();
//! ```

pub mod commands;
pub mod config;
pub mod errors;
pub mod interface;
pub mod io;
pub mod model;
pub mod readers;
pub mod text_location;
pub mod writers;

#[cfg(test)]
mod test_utils;

// Re-export commonly used types
pub use config::Config;
pub use errors::{EnumSpliceError, Result};
pub use interface::{Context, EnumSession};
pub use model::{EnumBlock, EnumEntry, EnumMap, Identifier};
pub use readers::{locate, scan, BlockSpan};
pub use writers::{delete_enum, insert_enum, update_enum, Rewrite};

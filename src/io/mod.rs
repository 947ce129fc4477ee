//! I/O for source files: line handling, hashing and atomic write-back.

mod file_cache;
mod source_text;
mod stat;
mod transaction;

pub use file_cache::{FileCache, RealFileCache, VirtualFS};
pub use source_text::{LineEnding, SourceText};
pub use stat::{hexdigest_file, hexdigest_str, FileData, Stat};
pub use transaction::{Action, Transaction, WriteAction};

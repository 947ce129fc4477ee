//! Readers for locating and scanning enums in source text.

mod classify;
mod locate;
mod patterns;
mod scan;

pub use classify::{
    classify_line, parse_entry, parse_inline_entries, unwritable_comment, unwritable_value,
    LineClass, SkipReason,
};
pub use locate::{find_declaration, locate, locate_checked, span_from, BlockSpan};
pub use patterns::{declared_name, leading_indent, DECLARATION, NAMESPACE};
pub use scan::scan;

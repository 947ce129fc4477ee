//! Writers that regenerate enum text and splice it into a line sequence.

mod render;
mod rewrite;

pub use render::{render_block, render_entry};
pub use rewrite::{delete_enum, insert_enum, update_enum, Rewrite};

//! CLI command implementations.

mod entries;
mod enums;
mod helpers;
mod list;
mod show;

pub use entries::{
    add_entry, remove_entry, rename_entry, set_entries, AddEntryOptions, RemoveEntryOptions,
    RenameEntryOptions, SetEntriesOptions,
};
pub use enums::{add_enum, remove_enum, AddEnumOptions, RemoveEnumOptions};
pub use helpers::SaveOptions;
pub use list::{list, ListOptions};
pub use show::{show, ShowOptions};

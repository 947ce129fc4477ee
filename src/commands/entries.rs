//! Commands that edit the entries of one enum.

use std::path::PathBuf;

use crate::errors::{EnumSpliceError, Result};
use crate::interface::{Context, EnumSession};
use crate::model::EnumEntry;

use super::helpers::{save_session, SaveOptions};

/// Options for the add-entry command.
#[derive(Debug, Clone, Default)]
pub struct AddEntryOptions {
    pub file: PathBuf,
    pub enum_name: String,
    /// Entry name; a numbered default name when absent.
    pub name: Option<String>,
    pub value: Option<String>,
    pub comment: Option<String>,
    pub save: SaveOptions,
}

/// Appends an entry to an enum.
pub fn add_entry(ctx: &Context, options: AddEntryOptions) -> Result<()> {
    let mut session = EnumSession::load(ctx, &options.file)?;
    let index = session.add_entry(&options.enum_name, options.name.as_deref())?;
    let name = entry_name_at(&session, &options.enum_name, index)?;
    tracing::info!("Adding {}.{}", options.enum_name, name);

    if let Some(value) = &options.value {
        session.set_value(&options.enum_name, &name, value)?;
    }
    if let Some(comment) = &options.comment {
        session.set_comment(&options.enum_name, &name, comment)?;
    }
    save_session(ctx, &mut session, &options.save)
}

fn entry_name_at(session: &EnumSession, enum_name: &str, index: usize) -> Result<String> {
    session
        .get(enum_name)
        .and_then(|block| block.entries.get(index))
        .map(|entry| entry.name.clone())
        .ok_or_else(|| EnumSpliceError::NotFound(format!("{}[{}]", enum_name, index)))
}

/// Options for the remove-entry command.
#[derive(Debug, Clone, Default)]
pub struct RemoveEntryOptions {
    pub file: PathBuf,
    pub enum_name: String,
    pub name: String,
    pub save: SaveOptions,
}

/// Removes an entry by name.
pub fn remove_entry(ctx: &Context, options: RemoveEntryOptions) -> Result<()> {
    let mut session = EnumSession::load(ctx, &options.file)?;
    let index = session
        .get(&options.enum_name)
        .ok_or_else(|| EnumSpliceError::NotFound(options.enum_name.clone()))?
        .position(&options.name)
        .ok_or_else(|| {
            EnumSpliceError::NotFound(format!("{}.{}", options.enum_name, options.name))
        })?;
    session.remove_entry(&options.enum_name, index)?;
    tracing::info!("Removed {}.{}", options.enum_name, options.name);
    save_session(ctx, &mut session, &options.save)
}

/// Options for the rename-entry command.
#[derive(Debug, Clone, Default)]
pub struct RenameEntryOptions {
    pub file: PathBuf,
    pub enum_name: String,
    pub old: String,
    pub new: String,
    pub save: SaveOptions,
}

/// Renames an entry, keeping its value and comment.
pub fn rename_entry(ctx: &Context, options: RenameEntryOptions) -> Result<()> {
    let mut session = EnumSession::load(ctx, &options.file)?;
    session.rename_entry(&options.enum_name, &options.old, &options.new)?;
    tracing::info!(
        "Renamed {}.{} to {}",
        options.enum_name,
        options.old,
        options.new
    );
    save_session(ctx, &mut session, &options.save)
}

/// Options for the set-entries command.
#[derive(Debug, Clone, Default)]
pub struct SetEntriesOptions {
    pub file: PathBuf,
    pub enum_name: String,
    /// Entry arguments, in the order they are written.
    pub entries: Vec<String>,
    pub save: SaveOptions,
}

/// Replaces every entry of an enum.
pub fn set_entries(ctx: &Context, options: SetEntriesOptions) -> Result<()> {
    let mut session = EnumSession::load(ctx, &options.file)?;
    let entries = options
        .entries
        .iter()
        .map(|arg| EnumEntry::from_arg(arg))
        .collect();
    session.set_entries(&options.enum_name, entries)?;
    save_session(ctx, &mut session, &options.save)
}

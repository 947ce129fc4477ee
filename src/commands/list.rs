//! List command implementation.

use std::fmt::Write;
use std::path::PathBuf;

use crate::errors::Result;
use crate::interface::{Context, EnumSession};
use crate::model::EnumBlock;

/// Options for the list command.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub file: PathBuf,
    /// Print JSON instead of text.
    pub json: bool,
}

/// Prints every enum of a file with its entries.
pub fn list(ctx: &Context, options: ListOptions) -> Result<()> {
    let session = EnumSession::load(ctx, &options.file)?;
    let blocks: Vec<&EnumBlock> = session.enums().iter().collect();
    if options.json {
        println!("{}", serde_json::to_string_pretty(&blocks)?);
    } else {
        print!("{}", format_listing(&blocks));
    }
    Ok(())
}

fn format_listing(blocks: &[&EnumBlock]) -> String {
    let mut out = String::new();
    for block in blocks {
        let _ = match &block.location {
            Some(location) => writeln!(out, "{} ({})", block.name, location),
            None => writeln!(out, "{}", block.name),
        };
        for entry in &block.entries {
            let _ = writeln!(out, "    {}", entry);
        }
    }
    out
}

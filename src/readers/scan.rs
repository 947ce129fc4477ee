//! Document scanner.
//!
//! Builds the in-memory model from a whole file in a single pass, tracking
//! brace depth per character across the document.

use super::classify::{classify_line, parse_entry, parse_inline_entries, LineClass, SkipReason};
use super::patterns::DECLARATION;
use crate::config::{BraceCounting, Config, DuplicatePolicy};
use crate::errors::{EnumSpliceError, Result};
use crate::model::{EnumBlock, EnumMap, Identifier};
use crate::text_location::TextLocation;

/// An enum whose body is still being read.
struct OpenBlock {
    block: EnumBlock,
    /// Document depth before the declaration line.
    outer_depth: i32,
}

/// Scans lines and returns every enum found, in order of first appearance.
///
/// Lines inside an enum body that do not look like entries are skipped. With
/// [`DuplicatePolicy::LastWins`] a repeated name replaces the earlier block;
/// with [`DuplicatePolicy::Reject`] it is an error.
pub fn scan<S: AsRef<str>>(lines: &[S], config: &Config) -> Result<EnumMap> {
    let mut enums = EnumMap::new();
    let mut depth: i32 = 0;
    let mut open: Option<OpenBlock> = None;

    for (index, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        let trimmed = line.trim();

        let before = depth;
        depth += BraceCounting::PerCharacter.delta(trimmed);

        if config.is_skipped_line(trimmed) {
            continue;
        }

        if let Some(caps) = DECLARATION.captures(line) {
            if let Some(unfinished) = open.take() {
                tracing::debug!(
                    "Enum {} was not closed before the next declaration",
                    unfinished.block.name
                );
                finish(&mut enums, unfinished.block, config)?;
            }

            let Ok(name) = Identifier::parse(&caps["name"]) else {
                tracing::debug!("Ignoring enum with unsupported name at line {}", index + 1);
                continue;
            };
            let mut block = EnumBlock::new(name).with_location(TextLocation::from_index(index));

            // Anything after `{` on the declaration line belongs to the body
            let decl_end = caps.get(0).map(|m| m.end()).unwrap_or(0);
            if let Some(brace) = line[decl_end..].find('{').map(|pos| decl_end + pos) {
                let body = &line[brace + 1..];
                if depth <= before && body.contains('}') {
                    let inner = &body[..body.rfind('}').unwrap_or(body.len())];
                    block.entries = parse_inline_entries(inner);
                    finish(&mut enums, block, config)?;
                    continue;
                }
                if let Some(entry) = parse_entry(body) {
                    block.entries.push(entry);
                }
            }

            open = Some(OpenBlock {
                block,
                outer_depth: before,
            });
            continue;
        }

        let Some(current) = open.as_mut() else {
            continue;
        };

        match classify_line(trimmed, depth, current.outer_depth) {
            LineClass::Entry(entry) => current.block.entries.push(entry),
            LineClass::Skip(SkipReason::Unrecognized) => {
                tracing::debug!(
                    "Ignoring unrecognized line {} in enum {}: {}",
                    index + 1,
                    current.block.name,
                    trimmed
                );
            }
            LineClass::Skip(_) => {}
            LineClass::ScopeEnd => {
                if let Some(mut done) = open.take() {
                    // Entries written before the closing brace, as in `Off }`
                    let before_close = &trimmed[..trimmed.find('}').unwrap_or(0)];
                    done.block
                        .entries
                        .extend(parse_inline_entries(before_close.trim_start_matches('{')));
                    finish(&mut enums, done.block, config)?;
                }
            }
        }
    }

    if let Some(unfinished) = open {
        tracing::warn!("Enum {} is never closed", unfinished.block.name);
        finish(&mut enums, unfinished.block, config)?;
    }

    Ok(enums)
}

fn finish(enums: &mut EnumMap, block: EnumBlock, config: &Config) -> Result<()> {
    if let Some(existing) = enums.get(block.name.as_str()) {
        let first = existing.location.clone().unwrap_or_default();
        let second = block.location.clone().unwrap_or_default();
        match config.duplicates {
            DuplicatePolicy::Reject => {
                return Err(EnumSpliceError::AmbiguousDocument {
                    name: block.name.to_string(),
                    first,
                    second,
                });
            }
            DuplicatePolicy::LastWins => {
                tracing::warn!(
                    "Enum {} declared again at {}, replacing the one at {}",
                    block.name,
                    second,
                    first
                );
            }
        }
    }
    enums.insert(block);
    Ok(())
}

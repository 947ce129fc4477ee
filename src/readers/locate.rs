//! Block locator.
//!
//! Finds the line span of a named enum by following brace nesting from its
//! declaration. This is deliberately not a language parser: braces inside
//! strings or block comments are counted like any other.

use std::ops::RangeInclusive;

use super::patterns::declared_name;
use crate::config::BraceCounting;
use crate::errors::{EnumSpliceError, Result};

/// Line span of a located block (0-indexed, inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockSpan {
    /// Line holding the declaration.
    pub decl_line: usize,
    /// First line at or after the declaration containing `{`.
    pub open_line: usize,
    /// Line where the brace counter returns to zero.
    pub close_line: usize,
}

impl BlockSpan {
    /// Returns the full span from declaration to closing brace.
    pub fn range(&self) -> RangeInclusive<usize> {
        self.decl_line..=self.close_line
    }

    /// Returns the number of lines in the span.
    pub fn len(&self) -> usize {
        self.close_line - self.decl_line + 1
    }

    /// Always false: a span covers at least its declaration line.
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Locates the first declaration of `name` and its brace span.
///
/// Returns `None` when there is no declaration, when no `{` follows it, or
/// when the braces never balance before the end of input.
pub fn locate<S: AsRef<str>>(
    name: &str,
    lines: &[S],
    counting: BraceCounting,
) -> Option<BlockSpan> {
    let decl_line = find_declaration(name, lines)?;
    let span = span_from(decl_line, lines, counting);
    if span.is_none() {
        tracing::debug!(
            "Declaration of {} at line {} has no balanced braces",
            name,
            decl_line + 1
        );
    }
    span
}

/// Like [`locate`], but tells a missing declaration (`NotFound`) apart from
/// one whose braces never balance (`Malformed`).
pub fn locate_checked<S: AsRef<str>>(
    name: &str,
    lines: &[S],
    counting: BraceCounting,
) -> Result<BlockSpan> {
    let decl_line = find_declaration(name, lines)
        .ok_or_else(|| EnumSpliceError::NotFound(name.to_string()))?;
    span_from(decl_line, lines, counting)
        .ok_or_else(|| EnumSpliceError::Malformed(name.to_string()))
}

/// Returns the index of the first line declaring `name`.
pub fn find_declaration<S: AsRef<str>>(name: &str, lines: &[S]) -> Option<usize> {
    lines
        .iter()
        .position(|line| declared_name(line.as_ref()) == Some(name))
}

/// Follows braces from the line at `start` to the end of the block it opens.
pub fn span_from<S: AsRef<str>>(
    start: usize,
    lines: &[S],
    counting: BraceCounting,
) -> Option<BlockSpan> {
    let open_line = (start..lines.len()).find(|&i| lines[i].as_ref().contains('{'))?;

    let mut counter = 0;
    for (i, line) in lines.iter().enumerate().skip(open_line) {
        let line = line.as_ref();
        let text = if i == open_line {
            // Braces before the opening one belong to whatever precedes the block
            line.find('{').map(|pos| &line[pos..]).unwrap_or(line)
        } else {
            line
        };
        counter += counting.delta(text);
        if counter <= 0 {
            return Some(BlockSpan {
                decl_line: start,
                open_line,
                close_line: i,
            });
        }
    }

    None
}

//! Line-sequence rewriters for updating, inserting and deleting enums.
//!
//! Each operation takes the current lines by reference and returns a new
//! sequence. Lines outside the affected span are copied unchanged.

use super::render::render_block;
use crate::config::{BraceCounting, Config, InsertPosition};
use crate::errors::{EnumSpliceError, Result};
use crate::model::EnumEntry;
use crate::readers::{find_declaration, leading_indent, locate, span_from, NAMESPACE};

/// Outcome of an update or delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rewrite {
    /// The enum was located and the lines were rewritten.
    Applied(Vec<String>),
    /// The enum could not be located; these are the input lines, untouched.
    NotFound(Vec<String>),
}

impl Rewrite {
    /// Returns true if the lines were rewritten.
    pub fn is_applied(&self) -> bool {
        matches!(self, Rewrite::Applied(_))
    }

    /// Returns the resulting lines.
    pub fn lines(&self) -> &[String] {
        match self {
            Rewrite::Applied(lines) | Rewrite::NotFound(lines) => lines,
        }
    }

    /// Consumes the outcome and returns the resulting lines.
    pub fn into_lines(self) -> Vec<String> {
        match self {
            Rewrite::Applied(lines) | Rewrite::NotFound(lines) => lines,
        }
    }
}

/// Replaces the enum `name` with freshly generated text for `entries`.
///
/// The declaration keeps its original indentation. Entries are written in the
/// order given.
pub fn update_enum<S: AsRef<str>>(
    lines: &[S],
    name: &str,
    entries: &[EnumEntry],
    config: &Config,
) -> Rewrite {
    let Some(span) = locate(name, lines, config.brace_counting) else {
        return Rewrite::NotFound(to_owned_lines(lines));
    };

    let indent = leading_indent(lines[span.decl_line].as_ref());
    let block = render_block(name, entries, indent, config);

    let mut out = Vec::with_capacity(lines.len() - span.len() + block.len());
    out.extend(lines[..span.decl_line].iter().map(|l| l.as_ref().to_string()));
    out.extend(block);
    out.extend(lines[span.close_line + 1..].iter().map(|l| l.as_ref().to_string()));

    tracing::debug!(
        "Rewrote enum {} (lines {}-{})",
        name,
        span.decl_line + 1,
        span.close_line + 1
    );
    Rewrite::Applied(out)
}

/// Removes the enum `name`, along with one blank line directly above it.
pub fn delete_enum<S: AsRef<str>>(lines: &[S], name: &str, config: &Config) -> Rewrite {
    let Some(span) = locate(name, lines, config.brace_counting) else {
        return Rewrite::NotFound(to_owned_lines(lines));
    };

    let mut start = span.decl_line;
    if start > 0 && lines[start - 1].as_ref().trim().is_empty() {
        start -= 1;
    }

    let mut out = Vec::with_capacity(lines.len() - (span.close_line + 1 - start));
    out.extend(lines[..start].iter().map(|l| l.as_ref().to_string()));
    out.extend(lines[span.close_line + 1..].iter().map(|l| l.as_ref().to_string()));

    tracing::debug!(
        "Removed enum {} (lines {}-{})",
        name,
        start + 1,
        span.close_line + 1
    );
    Rewrite::Applied(out)
}

/// Adds a new enum `name` after a blank separator line.
///
/// Indentation follows the last top-level namespace (one `indent` unit deeper),
/// or none if there is no namespace. Fails with `DuplicateName` if the file
/// already declares `name`; existing enums must go through [`update_enum`].
pub fn insert_enum<S: AsRef<str>>(
    lines: &[S],
    name: &str,
    entries: &[EnumEntry],
    config: &Config,
) -> Result<Vec<String>> {
    if find_declaration(name, lines).is_some() {
        return Err(EnumSpliceError::DuplicateName(name.to_string()));
    }

    let namespace = last_top_level_namespace(lines, config.brace_counting);
    let indent = match &namespace {
        Some(ns) if ns.file_scoped => ns.indent.clone(),
        Some(ns) => format!("{}{}", ns.indent, config.indent),
        None => String::new(),
    };

    let mut block = Vec::with_capacity(entries.len() + 4);
    block.push(String::new());
    block.extend(render_block(name, entries, &indent, config));

    let mut out = to_owned_lines(lines);
    let at = match (config.insert_position, &namespace) {
        (InsertPosition::Namespace, Some(ns)) if !ns.file_scoped => {
            span_from(ns.line, lines, config.brace_counting).map(|span| span.close_line)
        }
        _ => None,
    };

    match at {
        Some(close_line) => {
            out.splice(close_line..close_line, block);
        }
        None => out.extend(block),
    }

    tracing::debug!("Inserted enum {}", name);
    Ok(out)
}

/// A namespace declared outside any braces.
#[derive(Debug, Clone, PartialEq, Eq)]
struct NamespaceLine {
    line: usize,
    indent: String,
    /// `namespace X;` form, whose members are not indented.
    file_scoped: bool,
}

fn last_top_level_namespace<S: AsRef<str>>(
    lines: &[S],
    counting: BraceCounting,
) -> Option<NamespaceLine> {
    let mut depth = 0;
    let mut found = None;

    for (i, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        if depth == 0 {
            if let Some(caps) = NAMESPACE.captures(line) {
                found = Some(NamespaceLine {
                    line: i,
                    indent: caps["indent"].to_string(),
                    file_scoped: caps.name("tail").map(|m| m.as_str()) == Some(";"),
                });
            }
        }
        depth += counting.delta(line.trim());
    }

    found
}

fn to_owned_lines<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    lines.iter().map(|l| l.as_ref().to_string()).collect()
}

//! Classification of lines inside an enum body.

use crate::model::EnumEntry;

/// Why a line inside an enum body produced no entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Empty or whitespace only.
    Blank,
    /// A line or block comment.
    Comment,
    /// A preprocessor directive such as `#region`.
    Directive,
    /// Only braces or separators.
    Punctuation,
    /// Not nested deeper than the enum itself (e.g. a base-type line before `{`).
    OutsideBody,
    /// Text that does not have the shape of an entry.
    Unrecognized,
}

/// Result of classifying one line while an enum is being scanned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    /// The line declares an entry.
    Entry(EnumEntry),
    /// The line contributes nothing to the enum.
    Skip(SkipReason),
    /// The line closes the enum body.
    ScopeEnd,
}

/// Classifies a trimmed line of an enum body.
///
/// `depth` is the document nesting depth after the line's braces are counted
/// and `outer_depth` the depth the enum was declared at.
pub fn classify_line(trimmed: &str, depth: i32, outer_depth: i32) -> LineClass {
    if depth <= outer_depth {
        return if trimmed.contains('}') {
            LineClass::ScopeEnd
        } else {
            LineClass::Skip(SkipReason::OutsideBody)
        };
    }

    if trimmed.is_empty() {
        return LineClass::Skip(SkipReason::Blank);
    }
    if is_comment(trimmed) {
        return LineClass::Skip(SkipReason::Comment);
    }
    if trimmed.starts_with('#') {
        return LineClass::Skip(SkipReason::Directive);
    }

    let body = trimmed.trim_start_matches('{').trim_start();
    if body.chars().all(|c| matches!(c, '{' | '}' | ',' | ';') || c.is_whitespace()) {
        return LineClass::Skip(SkipReason::Punctuation);
    }

    match parse_entry(body) {
        Some(entry) => LineClass::Entry(entry),
        None => LineClass::Skip(SkipReason::Unrecognized),
    }
}

fn is_comment(trimmed: &str) -> bool {
    trimmed.starts_with("//") || trimmed.starts_with("/*") || trimmed.starts_with('*')
}

/// Parses `Name [= value] [,] [//comment]`.
///
/// The value runs up to the first comma or `//` outside parentheses, brackets
/// and quotes. Returns `None` if anything else is left over.
pub fn parse_entry(text: &str) -> Option<EnumEntry> {
    let text = text.trim();
    let name_len = identifier_len(text)?;
    let name = &text[..name_len];
    let mut rest = text[name_len..].trim_start();

    let mut value = "";
    if let Some(after_eq) = rest.strip_prefix('=') {
        let end = value_end(after_eq);
        value = after_eq[..end].trim();
        if value.is_empty() {
            return None;
        }
        rest = after_eq[end..].trim_start();
    }

    if let Some(after_comma) = rest.strip_prefix(',') {
        rest = after_comma.trim_start();
    }

    let mut comment = "";
    if let Some(line_comment) = rest.strip_prefix("//") {
        comment = line_comment.trim_end();
        rest = "";
    } else if let Some(block) = rest.strip_prefix("/*").and_then(|r| r.strip_suffix("*/")) {
        comment = block.trim_end();
        rest = "";
    }

    if !rest.is_empty() {
        return None;
    }

    Some(
        EnumEntry::new(name)
            .with_value(value)
            .with_comment(comment),
    )
}

/// Splits the inside of a one-line body (`A, B = 2`) into entries.
pub fn parse_inline_entries(body: &str) -> Vec<EnumEntry> {
    let mut entries = Vec::new();
    let mut rest = body;
    while !rest.trim().is_empty() {
        let end = value_end(rest);
        let piece = rest[..end].trim();
        if !piece.is_empty() {
            match parse_entry(piece) {
                Some(entry) => entries.push(entry),
                None => tracing::debug!("Ignoring inline enum text: {}", piece),
            }
        }
        if end >= rest.len() || rest[end..].starts_with("//") {
            break;
        }
        // Skip the comma
        rest = &rest[end + 1..];
    }
    entries
}

/// Returns why `value` would not read back unchanged as an entry value.
///
/// A value must stay on one line and must not contain a top-level `,` or
/// `//`. Unclosed quotes or brackets swallow the trailing comma.
pub fn unwritable_value(value: &str) -> Option<&'static str> {
    if value.contains(['\r', '\n']) {
        return Some("line breaks are not allowed");
    }
    if value_end(value) < value.len() {
        return Some("top-level ',' or '//' would end the value early");
    }
    let written = format!("{},", value);
    if value_end(&written) != value.len() {
        return Some("unbalanced quotes or brackets");
    }
    None
}

/// Returns why `comment` cannot be written after an entry, if it cannot.
pub fn unwritable_comment(comment: &str) -> Option<&'static str> {
    if comment.contains(['\r', '\n']) {
        return Some("line breaks are not allowed");
    }
    None
}

fn identifier_len(text: &str) -> Option<usize> {
    let mut chars = text.char_indices();
    match chars.next() {
        Some((_, c)) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return None,
    }
    let len = chars
        .find(|&(_, c)| !(c.is_ascii_alphanumeric() || c == '_'))
        .map(|(i, _)| i)
        .unwrap_or(text.len());
    Some(len)
}

/// Byte offset of the first top-level `,` or `//` in `text`, or its length.
fn value_end(text: &str) -> usize {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let bytes = text.as_bytes();

    for (i, c) in text.char_indices() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '"' | '\'' => quote = Some(c),
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => return i,
            '/' if depth == 0 && bytes.get(i + 1) == Some(&b'/') => return i,
            _ => {}
        }
    }
    text.len()
}

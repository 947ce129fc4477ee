//! Text generation for enum blocks.

use crate::config::Config;
use crate::model::EnumEntry;

/// Renders a single entry line: `<indent><unit><name>[ = <value>],[ //<comment>]`.
pub fn render_entry(entry: &EnumEntry, indent: &str, unit: &str) -> String {
    let mut line = format!("{}{}{}", indent, unit, entry.name.trim());
    let value = entry.value.trim();
    if !value.is_empty() {
        line.push_str(" = ");
        line.push_str(value);
    }
    line.push(',');
    let comment = entry.comment.trim_end();
    if !comment.trim().is_empty() {
        line.push_str(" //");
        line.push_str(comment);
    }
    line
}

/// Renders a whole enum: declaration, opening brace, entries and closing
/// brace, all at `indent`. Entries with a blank name are left out.
pub fn render_block(
    name: &str,
    entries: &[EnumEntry],
    indent: &str,
    config: &Config,
) -> Vec<String> {
    let mut lines = Vec::with_capacity(entries.len() + 3);
    lines.push(format!("{}{} {}", indent, config.declaration_keyword(), name));
    lines.push(format!("{}{{", indent));
    lines.extend(
        entries
            .iter()
            .filter(|e| e.has_name())
            .map(|e| render_entry(e, indent, &config.indent)),
    );
    lines.push(format!("{}}}", indent));
    lines
}

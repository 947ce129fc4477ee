//! Line patterns shared by the locator, the scanner and the rewriters.

use once_cell::sync::Lazy;
use regex::Regex;

/// Pattern for enum declaration lines.
///
/// Matches: `    public enum Color`, `enum Color {`, `internal enum Flags : byte`
pub static DECLARATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<indent>\s*)(?:(?:public|private|internal|protected|new)\s+)*enum\s+(?P<name>[A-Za-z_]\w*)\b",
    )
    .unwrap()
});

/// Pattern for namespace declaration lines.
///
/// Matches: `namespace Game.Data`, `namespace Game {`, `namespace Game;`
pub static NAMESPACE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<indent>\s*)namespace\s+[\w.]+\s*(?P<tail>[{;])?").unwrap()
});

/// Returns the enum name declared on this line, if any.
pub fn declared_name(line: &str) -> Option<&str> {
    DECLARATION
        .captures(line)
        .and_then(|caps| caps.name("name"))
        .map(|m| m.as_str())
}

/// Returns the leading whitespace of a line.
pub fn leading_indent(line: &str) -> &str {
    let trimmed = line.trim_start();
    &line[..line.len() - trimmed.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_name() {
        assert_eq!(declared_name("enum Color"), Some("Color"));
        assert_eq!(declared_name("    public enum Color"), Some("Color"));
        assert_eq!(declared_name("\tinternal enum Flags : byte"), Some("Flags"));
        assert_eq!(declared_name("protected internal enum State {"), Some("State"));
        assert_eq!(declared_name("private enum Mode { A, B }"), Some("Mode"));
    }

    #[test]
    fn test_not_declarations() {
        assert_eq!(declared_name("// public enum Color"), None);
        assert_eq!(declared_name("var enumerable = list;"), None);
        assert_eq!(declared_name("public class Enum"), None);
        assert_eq!(declared_name("enum"), None);
    }

    #[test]
    fn test_namespace() {
        let caps = NAMESPACE.captures("  namespace Game.Data {").unwrap();
        assert_eq!(&caps["indent"], "  ");
        assert_eq!(&caps["tail"], "{");

        let caps = NAMESPACE.captures("namespace Game;").unwrap();
        assert_eq!(&caps["tail"], ";");

        let caps = NAMESPACE.captures("namespace Game").unwrap();
        assert!(caps.name("tail").is_none());
    }

    #[test]
    fn test_leading_indent() {
        assert_eq!(leading_indent("    enum A"), "    ");
        assert_eq!(leading_indent("\t enum A"), "\t ");
        assert_eq!(leading_indent("enum A"), "");
        assert_eq!(leading_indent("   "), "   ");
    }
}

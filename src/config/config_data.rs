//! Configuration data structures.

use serde::{Deserialize, Serialize};

use super::policies::{BraceCounting, DuplicatePolicy, InsertPosition};

/// Main configuration structure for enumsplice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Brace counter used to find the end of a located block.
    #[serde(default)]
    pub brace_counting: BraceCounting,

    /// Handling of enums declared more than once.
    #[serde(default)]
    pub duplicates: DuplicatePolicy,

    /// Placement of newly created enums.
    #[serde(default)]
    pub insert_position: InsertPosition,

    /// Access modifier written on regenerated declarations.
    #[serde(default = "default_access_modifier")]
    pub access_modifier: String,

    /// Indentation unit for entries and namespace members.
    #[serde(default = "default_indent")]
    pub indent: String,

    /// Entry given to a freshly created enum.
    #[serde(default = "default_entry")]
    pub default_entry: String,

    /// Base name for entries added without an explicit name.
    #[serde(default = "default_new_entry")]
    pub new_entry: String,

    /// Line prefixes (after trimming) the scanner ignores entirely.
    #[serde(default = "default_skip_prefixes")]
    pub skip_prefixes: Vec<String>,
}

fn default_access_modifier() -> String {
    "public".to_string()
}

fn default_indent() -> String {
    "    ".to_string()
}

fn default_entry() -> String {
    "DefaultValue".to_string()
}

fn default_new_entry() -> String {
    "NewValue".to_string()
}

fn default_skip_prefixes() -> Vec<String> {
    vec!["using ".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            brace_counting: BraceCounting::default(),
            duplicates: DuplicatePolicy::default(),
            insert_position: InsertPosition::default(),
            access_modifier: default_access_modifier(),
            indent: default_indent(),
            default_entry: default_entry(),
            new_entry: default_new_entry(),
            skip_prefixes: default_skip_prefixes(),
        }
    }
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the declaration prefix, e.g. `public enum`.
    pub fn declaration_keyword(&self) -> String {
        let modifier = self.access_modifier.trim();
        if modifier.is_empty() {
            "enum".to_string()
        } else {
            format!("{} enum", modifier)
        }
    }

    /// Returns true if the scanner should ignore this (trimmed) line.
    pub fn is_skipped_line(&self, trimmed: &str) -> bool {
        self.skip_prefixes
            .iter()
            .any(|prefix| trimmed.starts_with(prefix.as_str()))
    }
}

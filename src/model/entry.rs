//! Enum entries.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One named value inside an enum.
///
/// `value` and `comment` are kept as raw text. The value is never evaluated,
/// and the comment excludes its leading `//` marker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumEntry {
    /// Entry name.
    pub name: String,
    /// Explicit value expression, empty when absent.
    #[serde(default)]
    pub value: String,
    /// Trailing comment text, empty when absent.
    #[serde(default)]
    pub comment: String,
}

impl EnumEntry {
    /// Creates an entry with the given name and no value or comment.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: String::new(),
            comment: String::new(),
        }
    }

    /// Returns a new entry with the given value.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Returns a new entry with the given comment.
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Returns true if the entry has a non-blank name.
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Parses the command-line entry syntax: `Name`, `Name=Value`, either
    /// optionally followed by `//Comment`.
    pub fn from_arg(arg: &str) -> Self {
        let (body, comment) = match arg.find("//") {
            Some(pos) => (&arg[..pos], arg[pos + 2..].to_string()),
            None => (arg, String::new()),
        };
        let (name, value) = match body.split_once('=') {
            Some((name, value)) => (name.trim(), value.trim()),
            None => (body.trim(), ""),
        };
        Self {
            name: name.to_string(),
            value: value.to_string(),
            comment,
        }
    }
}

impl fmt::Display for EnumEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.value.trim().is_empty() {
            write!(f, " = {}", self.value)?;
        }
        if !self.comment.trim().is_empty() {
            write!(f, " //{}", self.comment)?;
        }
        Ok(())
    }
}

//! Behavioral switches for scanning and rewriting.

use serde::{Deserialize, Serialize};

/// How brace nesting is counted when looking for the end of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BraceCounting {
    /// Each line counts at most once in each direction, regardless of how many
    /// braces it holds. A line with one `{` and one `}` nets to zero.
    #[default]
    PerLine,

    /// Every brace character counts.
    PerCharacter,
}

impl BraceCounting {
    /// Returns the change in nesting depth contributed by `text`.
    pub fn delta(&self, text: &str) -> i32 {
        match self {
            BraceCounting::PerLine => {
                let mut delta = 0;
                if text.contains('{') {
                    delta += 1;
                }
                if text.contains('}') {
                    delta -= 1;
                }
                delta
            }
            BraceCounting::PerCharacter => text.chars().fold(0, |acc, c| match c {
                '{' => acc + 1,
                '}' => acc - 1,
                _ => acc,
            }),
        }
    }
}

/// What the scanner does when the same enum name is declared twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicatePolicy {
    /// The later declaration replaces the earlier one in the model.
    #[default]
    LastWins,

    /// The document is rejected as ambiguous.
    Reject,
}

/// Where newly created enums are placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InsertPosition {
    /// Appended after the last line of the file.
    #[default]
    End,

    /// Before the closing brace of the last top-level namespace, or at the end
    /// of the file when there is none.
    Namespace,
}

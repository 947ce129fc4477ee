//! Splitting file text into lines and joining it back.

use serde::{Deserialize, Serialize};

/// Line terminator used by a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineEnding {
    /// `\n`
    #[default]
    Lf,
    /// `\r\n`
    CrLf,
}

impl LineEnding {
    /// Returns the terminator text.
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }

    /// Picks the ending of the first line break in `text`.
    pub fn detect(text: &str) -> Self {
        match text.find('\n') {
            Some(pos) if pos > 0 && text.as_bytes()[pos - 1] == b'\r' => LineEnding::CrLf,
            _ => LineEnding::Lf,
        }
    }
}

/// A file's content as a line sequence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SourceText {
    /// Lines without terminators.
    pub lines: Vec<String>,
    /// Terminator used when rendering.
    pub line_ending: LineEnding,
    /// Whether the text ends with a terminator.
    pub trailing_newline: bool,
}

impl SourceText {
    /// Splits `text` into lines.
    pub fn parse(text: &str) -> Self {
        let line_ending = LineEnding::detect(text);
        let lines = text
            .lines()
            .map(|l| l.strip_suffix('\r').unwrap_or(l).to_string())
            .collect();
        Self {
            lines,
            line_ending,
            trailing_newline: text.is_empty() || text.ends_with('\n'),
        }
    }

    /// Creates a text from owned lines with default settings.
    pub fn from_lines(lines: Vec<String>) -> Self {
        Self {
            lines,
            line_ending: LineEnding::Lf,
            trailing_newline: true,
        }
    }

    /// Returns the same settings with different lines.
    pub fn with_lines(&self, lines: Vec<String>) -> Self {
        Self {
            lines,
            line_ending: self.line_ending,
            trailing_newline: self.trailing_newline,
        }
    }

    /// Joins the lines back into file text.
    pub fn render(&self) -> String {
        if self.lines.is_empty() {
            return String::new();
        }
        let ending = self.line_ending.as_str();
        let mut text = self.lines.join(ending);
        if self.trailing_newline {
            text.push_str(ending);
        }
        text
    }
}

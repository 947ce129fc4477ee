//! Enum blocks.

use serde::{Deserialize, Serialize};

use super::entry::EnumEntry;
use super::identifier::{is_valid_identifier, Identifier};
use crate::errors::{EnumSpliceError, Result};
use crate::text_location::TextLocation;

/// A named enum and its ordered entries.
///
/// Entry order is significant: it is the order in which entries are written
/// back to the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumBlock {
    /// Enum name, unique within a document.
    pub name: Identifier,
    /// Entries in declaration order.
    pub entries: Vec<EnumEntry>,
    /// Declaration line in the scanned file, if the block came from one.
    #[serde(skip)]
    pub location: Option<TextLocation>,
}

impl EnumBlock {
    /// Creates an empty block with no file location.
    pub fn new(name: Identifier) -> Self {
        Self {
            name,
            entries: Vec::new(),
            location: None,
        }
    }

    /// Creates a block with the given entries.
    pub fn with_entries(name: Identifier, entries: Vec<EnumEntry>) -> Self {
        Self {
            name,
            entries,
            location: None,
        }
    }

    /// Sets the declaration location.
    pub fn with_location(mut self, location: TextLocation) -> Self {
        self.location = Some(location);
        self
    }

    /// Returns the entry with the given name.
    pub fn entry(&self, name: &str) -> Option<&EnumEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Returns the entry with the given name mutably.
    pub fn entry_mut(&mut self, name: &str) -> Option<&mut EnumEntry> {
        self.entries.iter_mut().find(|e| e.name == name)
    }

    /// Returns the index of the entry with the given name.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.name == name)
    }

    /// Checks that `name` could be given to an entry of this block.
    ///
    /// `except` names an entry index that is ignored in the uniqueness check,
    /// which is how a rename to the same name is allowed.
    pub fn check_entry_name(&self, name: &str, except: Option<usize>) -> Result<()> {
        if !is_valid_identifier(name) {
            return Err(EnumSpliceError::invalid_name(
                name,
                "entry names must be identifiers",
            ));
        }
        let taken = self
            .entries
            .iter()
            .enumerate()
            .any(|(i, e)| Some(i) != except && e.name == name);
        if taken {
            return Err(EnumSpliceError::DuplicateName(format!(
                "{}.{}",
                self.name, name
            )));
        }
        Ok(())
    }

    /// Returns `base`, or `base` followed by the smallest number that makes it
    /// unique among this block's entries.
    pub fn unique_entry_name(&self, base: &str) -> String {
        if self.entry(base).is_none() {
            return base.to_string();
        }
        (1..)
            .map(|n| format!("{}{}", base, n))
            .find(|candidate| self.entry(candidate).is_none())
            .unwrap_or_else(|| base.to_string())
    }

    /// Returns entries with a non-blank name, in order.
    pub fn named_entries(&self) -> impl Iterator<Item = &EnumEntry> {
        self.entries.iter().filter(|e| e.has_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{entry, make_enum};

    #[test]
    fn test_lookup() {
        let block = make_enum("Color", vec![entry("Red"), entry("Green")]);
        assert_eq!(block.position("Green"), Some(1));
        assert!(block.entry("Blue").is_none());
    }

    #[test]
    fn test_check_entry_name() {
        let block = make_enum("Color", vec![entry("Red"), entry("Green")]);

        assert!(block.check_entry_name("Blue", None).is_ok());
        assert!(matches!(
            block.check_entry_name("Red", None),
            Err(EnumSpliceError::DuplicateName(_))
        ));
        // Renaming entry 0 to its own name is allowed
        assert!(block.check_entry_name("Red", Some(0)).is_ok());
        assert!(matches!(
            block.check_entry_name("9lives", None),
            Err(EnumSpliceError::InvalidName { .. })
        ));
    }

    #[test]
    fn test_unique_entry_name() {
        let block = make_enum("Color", vec![entry("NewValue"), entry("NewValue1")]);
        assert_eq!(block.unique_entry_name("NewValue"), "NewValue2");
        assert_eq!(block.unique_entry_name("Other"), "Other");
    }

    #[test]
    fn test_named_entries_skips_blank() {
        let block = make_enum("Color", vec![entry("Red"), entry(""), entry("Blue")]);
        let names: Vec<_> = block.named_entries().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Red", "Blue"]);
    }
}

//! Ordered collection of enum blocks.

use indexmap::IndexMap;

use super::enum_block::EnumBlock;
use super::identifier::Identifier;

/// Enum blocks keyed by name, in order of first appearance.
///
/// Replacing a block keeps its original position, so a document scanned with
/// the last-wins duplicate policy still lists names in first-encounter order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnumMap {
    blocks: IndexMap<Identifier, EnumBlock>,
}

impl EnumMap {
    /// Creates a new empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a block, returning the block it replaced, if any.
    pub fn insert(&mut self, block: EnumBlock) -> Option<EnumBlock> {
        self.blocks.insert(block.name.clone(), block)
    }

    /// Gets a block by name.
    pub fn get(&self, name: &str) -> Option<&EnumBlock> {
        self.blocks.get(name)
    }

    /// Gets a block by name mutably.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut EnumBlock> {
        self.blocks.get_mut(name)
    }

    /// Removes a block, preserving the order of the others.
    pub fn remove(&mut self, name: &str) -> Option<EnumBlock> {
        self.blocks.shift_remove(name)
    }

    /// Checks if a block with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.blocks.contains_key(name)
    }

    /// Returns block names in order.
    pub fn names(&self) -> impl Iterator<Item = &Identifier> {
        self.blocks.keys()
    }

    /// Iterates over blocks in order.
    pub fn iter(&self) -> impl Iterator<Item = &EnumBlock> {
        self.blocks.values()
    }

    /// Returns the number of blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Returns true if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Removes all blocks.
    pub fn clear(&mut self) {
        self.blocks.clear();
    }
}

impl<'a> IntoIterator for &'a EnumMap {
    type Item = &'a EnumBlock;
    type IntoIter = indexmap::map::Values<'a, Identifier, EnumBlock>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.values()
    }
}

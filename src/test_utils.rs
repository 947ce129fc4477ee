//! Shared test utilities.

use crate::model::{EnumBlock, EnumEntry, Identifier};

/// Creates an entry with only a name.
pub fn entry(name: &str) -> EnumEntry {
    EnumEntry::new(name)
}

/// Creates an entry with a name, value and comment.
pub fn full_entry(name: &str, value: &str, comment: &str) -> EnumEntry {
    EnumEntry::new(name).with_value(value).with_comment(comment)
}

/// Creates an in-memory enum block.
pub fn make_enum(name: &str, entries: Vec<EnumEntry>) -> EnumBlock {
    EnumBlock::with_entries(Identifier::parse(name).unwrap(), entries)
}

/// Converts string literals into an owned line sequence.
pub fn lines(text: &[&str]) -> Vec<String> {
    text.iter().map(|l| l.to_string()).collect()
}

/// A namespace holding a single `Color` enum.
pub fn color_document() -> Vec<String> {
    lines(&[
        "namespace N",
        "{",
        "    enum Color",
        "    {",
        "        Red,",
        "        Green = 2, //ok",
        "    }",
        "}",
    ])
}

/// A file with two enums inside a class inside a namespace.
pub fn two_enum_document() -> Vec<String> {
    lines(&[
        "using System;",
        "",
        "namespace Game.Data",
        "{",
        "    public class Tables",
        "    {",
        "        public enum Weapon",
        "        {",
        "            Sword = 1,",
        "            Bow = 2, //ranged",
        "        }",
        "",
        "        private int count = 0;",
        "",
        "        internal enum Armor",
        "        {",
        "            Leather,",
        "            Plate,",
        "        }",
        "    }",
        "}",
    ])
}

//! Edit sessions over a single source file.
//!
//! A session holds the scanned model of one file plus the changes made to it
//! since it was loaded. Saving re-reads the file and replays the changes in a
//! fixed order: pending deletes, then updates of file-backed enums, then
//! inserts of newly created enums.

use std::path::{Path, PathBuf};

use indexmap::IndexSet;
use serde::Serialize;

use super::Context;
use crate::config::Config;
use crate::errors::{EnumSpliceError, Result};
use crate::io::{FileData, SourceText, Transaction};
use crate::model::{EnumBlock, EnumEntry, EnumMap, Identifier};
use crate::readers::{locate_checked, scan, unwritable_comment, unwritable_value};
use crate::writers::{delete_enum, insert_enum, update_enum, Rewrite};

/// What a save did, or would do, to each enum.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SaveReport {
    pub deleted: Vec<String>,
    pub updated: Vec<String>,
    pub inserted: Vec<String>,
    /// Enums that could no longer be located in the file.
    pub missing: Vec<String>,
}

/// The result of replaying a session's changes onto the current file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavePlan {
    /// Resolved path of the backing file.
    pub path: PathBuf,
    /// Full new file text.
    pub text: String,
    /// False when `text` equals what is on disk.
    pub changed: bool,
    pub report: SaveReport,
}

/// The enums of one file and the pending edits to them.
#[derive(Debug, Clone)]
pub struct EnumSession {
    path: PathBuf,
    config: Config,
    enums: EnumMap,
    /// Enums that exist only in memory so far.
    created: IndexSet<String>,
    /// File-backed enums removed from the model.
    pending_deletes: IndexSet<String>,
    /// Snapshot of the file as loaded; `None` if it did not exist.
    loaded: Option<FileData>,
}

impl EnumSession {
    /// Reads and scans `path`. A missing file loads as an empty document.
    pub fn load(ctx: &Context, path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let (text, loaded) = match read_text(ctx, &path)? {
            Some((text, data)) => (text, Some(data)),
            None => {
                tracing::info!("{} does not exist yet", path.display());
                (String::new(), None)
            }
        };
        let source = SourceText::parse(&text);
        let enums = scan(&source.lines, &ctx.config)?;
        tracing::info!("Loaded {} enums from {}", enums.len(), path.display());

        Ok(Self {
            path,
            config: ctx.config.clone(),
            enums,
            created: IndexSet::new(),
            pending_deletes: IndexSet::new(),
            loaded,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Visible enums, in file order followed by creation order.
    pub fn enums(&self) -> &EnumMap {
        &self.enums
    }

    pub fn get(&self, name: &str) -> Option<&EnumBlock> {
        self.enums.get(name)
    }

    /// True if `name` was created in this session and is not in the file.
    pub fn is_new(&self, name: &str) -> bool {
        self.created.contains(name)
    }

    pub fn pending_deletes(&self) -> impl Iterator<Item = &str> {
        self.pending_deletes.iter().map(|s| s.as_str())
    }

    /// Digest of the file as loaded.
    pub fn loaded_digest(&self) -> Option<&str> {
        self.loaded.as_ref().map(|d| d.hexdigest.as_str())
    }

    fn block(&self, name: &str) -> Result<&EnumBlock> {
        self.enums
            .get(name)
            .ok_or_else(|| EnumSpliceError::NotFound(name.to_string()))
    }

    fn block_mut(&mut self, name: &str) -> Result<&mut EnumBlock> {
        self.enums
            .get_mut(name)
            .ok_or_else(|| EnumSpliceError::NotFound(name.to_string()))
    }

    /// Adds a new enum holding the configured default entry.
    ///
    /// Re-creating an enum that is pending deletion cancels the delete, so the
    /// file copy is rewritten instead of duplicated.
    pub fn create_enum(&mut self, name: &str) -> Result<&EnumBlock> {
        let name = Identifier::parse(name)?;
        if self.enums.contains(name.as_str()) {
            return Err(EnumSpliceError::DuplicateName(name.to_string()));
        }

        let key = name.to_string();
        if self.pending_deletes.shift_remove(&key) {
            tracing::debug!("Enum {} was pending deletion, rewriting it instead", key);
        } else {
            self.created.insert(key.clone());
        }
        let default_entry = EnumEntry::new(self.config.default_entry.clone());
        self.enums
            .insert(EnumBlock::with_entries(name, vec![default_entry]));
        self.block(&key)
    }

    /// Removes an enum from the model. File-backed enums are deleted from the
    /// file on the next save.
    pub fn remove_enum(&mut self, name: &str) -> Result<EnumBlock> {
        let block = self
            .enums
            .remove(name)
            .ok_or_else(|| EnumSpliceError::NotFound(name.to_string()))?;
        if !self.created.shift_remove(name) {
            self.pending_deletes.insert(name.to_string());
        }
        Ok(block)
    }

    /// Appends an entry and returns its index. Without a name, the configured
    /// base name is numbered until it is unique.
    pub fn add_entry(&mut self, enum_name: &str, name: Option<&str>) -> Result<usize> {
        let base = self.config.new_entry.clone();
        let block = self.block_mut(enum_name)?;
        let name = match name {
            Some(name) => {
                block.check_entry_name(name, None)?;
                name.to_string()
            }
            None => block.unique_entry_name(&base),
        };
        block.entries.push(EnumEntry::new(name));
        Ok(block.entries.len() - 1)
    }

    pub fn remove_entry(&mut self, enum_name: &str, index: usize) -> Result<EnumEntry> {
        let block = self.block_mut(enum_name)?;
        if index >= block.entries.len() {
            return Err(EnumSpliceError::NotFound(format!(
                "{}[{}]",
                enum_name, index
            )));
        }
        Ok(block.entries.remove(index))
    }

    pub fn rename_entry(&mut self, enum_name: &str, old: &str, new: &str) -> Result<()> {
        let block = self.block_mut(enum_name)?;
        let index = block
            .position(old)
            .ok_or_else(|| EnumSpliceError::NotFound(format!("{}.{}", enum_name, old)))?;
        block.check_entry_name(new, Some(index))?;
        block.entries[index].name = new.to_string();
        Ok(())
    }

    /// Values that would not scan back as the same entry are rejected.
    pub fn set_value(&mut self, enum_name: &str, entry: &str, value: &str) -> Result<()> {
        let value = value.trim();
        check_value(entry, value)?;
        self.entry_mut(enum_name, entry)?.value = value.to_string();
        Ok(())
    }

    pub fn set_comment(&mut self, enum_name: &str, entry: &str, comment: &str) -> Result<()> {
        check_comment(entry, comment)?;
        self.entry_mut(enum_name, entry)?.comment = comment.to_string();
        Ok(())
    }

    /// Replaces all entries of an enum. Nothing changes if any name is invalid
    /// or repeated, or any value or comment cannot be written.
    pub fn set_entries(&mut self, enum_name: &str, entries: Vec<EnumEntry>) -> Result<()> {
        let block = self.block_mut(enum_name)?;
        let mut staged = EnumBlock::new(block.name.clone());
        for entry in entries {
            staged.check_entry_name(&entry.name, None)?;
            check_value(&entry.name, &entry.value)?;
            check_comment(&entry.name, &entry.comment)?;
            staged.entries.push(entry);
        }
        block.entries = staged.entries;
        Ok(())
    }

    fn entry_mut(&mut self, enum_name: &str, entry: &str) -> Result<&mut EnumEntry> {
        self.block_mut(enum_name)?
            .entry_mut(entry)
            .ok_or_else(|| EnumSpliceError::NotFound(format!("{}.{}", enum_name, entry)))
    }

    /// Replays the pending changes onto the file as it is now.
    pub fn plan_save(&self, ctx: &Context) -> Result<SavePlan> {
        let original = read_text(ctx, &self.path)?
            .map(|(text, _)| text)
            .unwrap_or_default();
        let source = SourceText::parse(&original);
        let mut lines = source.lines.clone();
        let mut report = SaveReport::default();

        for name in &self.pending_deletes {
            match delete_enum(&lines, name, &self.config) {
                Rewrite::Applied(next) => {
                    lines = next;
                    report.deleted.push(name.clone());
                }
                Rewrite::NotFound(_) => {
                    self.warn_unlocatable(&lines, name);
                    report.missing.push(name.clone());
                }
            }
        }

        for block in self.enums.iter() {
            let name = block.name.as_str();
            if self.created.contains(name) {
                continue;
            }
            match update_enum(&lines, name, &block.entries, &self.config) {
                Rewrite::Applied(next) => {
                    lines = next;
                    report.updated.push(name.to_string());
                }
                Rewrite::NotFound(_) => {
                    self.warn_unlocatable(&lines, name);
                    report.missing.push(name.to_string());
                }
            }
        }

        for name in &self.created {
            let block = self.block(name)?;
            lines = insert_enum(&lines, name, &block.entries, &self.config)?;
            report.inserted.push(name.clone());
        }

        let text = source.with_lines(lines).render();
        Ok(SavePlan {
            path: ctx.resolve_path(&self.path),
            changed: text != original,
            text,
            report,
        })
    }

    fn warn_unlocatable(&self, lines: &[String], name: &str) {
        match locate_checked(name, lines, self.config.brace_counting) {
            Err(e @ EnumSpliceError::Malformed(_)) => {
                tracing::warn!("{} in {}", e, self.path.display())
            }
            _ => tracing::warn!("Enum {} is not in {}", name, self.path.display()),
        }
    }

    /// Writes the pending changes and reloads the file.
    ///
    /// Unless `force` is set, fails with [`EnumSpliceError::FileConflict`] if
    /// the file changed on disk since it was loaded.
    pub fn save(&mut self, ctx: &Context, force: bool) -> Result<SaveReport> {
        let plan = self.plan_save(ctx)?;

        if plan.changed {
            let mut tx = Transaction::new();
            match &self.loaded {
                Some(data) => tx.write_expecting(&plan.path, plan.text, &data.hexdigest),
                None => {
                    if !force && ctx.file_cache.exists(&self.path) {
                        return Err(EnumSpliceError::FileConflict { path: plan.path });
                    }
                    tx.write(&plan.path, plan.text)
                }
            }
            if force {
                tx.execute_force()?;
            } else {
                tx.execute()?;
            }
            tracing::info!("Saved {}", plan.path.display());
        } else {
            tracing::info!("{} is up to date", plan.path.display());
        }

        *self = Self::load(ctx, self.path.clone())?;
        Ok(plan.report)
    }
}

fn read_text(ctx: &Context, path: &Path) -> Result<Option<(String, FileData)>> {
    if !ctx.file_cache.exists(path) {
        return Ok(None);
    }
    let text = ctx.file_cache.read(path)?;
    let data = ctx.file_cache.file_data(path)?;
    Ok(Some((text, data)))
}

fn check_value(entry: &str, value: &str) -> Result<()> {
    match unwritable_value(value) {
        Some(reason) => Err(EnumSpliceError::InvalidEntryText {
            entry: entry.to_string(),
            field: "value",
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}

fn check_comment(entry: &str, comment: &str) -> Result<()> {
    match unwritable_comment(comment) {
        Some(reason) => Err(EnumSpliceError::InvalidEntryText {
            entry: entry.to_string(),
            field: "comment",
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::VirtualFS;
    use crate::test_utils::{entry, full_entry, lines, two_enum_document};
    use pretty_assertions::assert_eq;
    use std::fs;
    use std::sync::Arc;
    use tempfile::tempdir;

    fn document_text() -> String {
        let mut text = two_enum_document().join("\n");
        text.push('\n');
        text
    }

    fn virtual_context(path: &str, content: &str) -> Context {
        let mut vfs = VirtualFS::new();
        vfs.add_file(path, content);
        Context::default_for_dir(PathBuf::from("/project")).with_file_cache(Arc::new(vfs))
    }

    fn names(session: &EnumSession) -> Vec<&str> {
        session.enums().names().map(|n| n.as_str()).collect()
    }

    #[test]
    fn test_load() {
        let ctx = virtual_context("Tables.cs", &document_text());
        let session = EnumSession::load(&ctx, "Tables.cs").unwrap();

        assert_eq!(names(&session), vec!["Weapon", "Armor"]);
        assert_eq!(
            session.get("Armor").unwrap().entries,
            vec![entry("Leather"), entry("Plate")]
        );
        assert!(session.loaded_digest().is_some());
        assert!(!session.is_new("Weapon"));
    }

    #[test]
    fn test_create_enum() {
        let ctx = virtual_context("Tables.cs", &document_text());
        let mut session = EnumSession::load(&ctx, "Tables.cs").unwrap();

        let shape = session.create_enum("Shape").unwrap();
        assert_eq!(shape.entries, vec![entry("DefaultValue")]);
        assert!(session.is_new("Shape"));

        assert!(matches!(
            session.create_enum("Weapon"),
            Err(EnumSpliceError::DuplicateName(name)) if name == "Weapon"
        ));
        assert!(matches!(
            session.create_enum("2Fast"),
            Err(EnumSpliceError::InvalidName { .. })
        ));
        assert!(matches!(
            session.create_enum("  "),
            Err(EnumSpliceError::InvalidName { .. })
        ));
    }

    #[test]
    fn test_remove_enum() {
        let ctx = virtual_context("Tables.cs", &document_text());
        let mut session = EnumSession::load(&ctx, "Tables.cs").unwrap();

        session.create_enum("Shape").unwrap();
        session.remove_enum("Shape").unwrap();
        session.remove_enum("Armor").unwrap();

        assert_eq!(names(&session), vec!["Weapon"]);
        assert!(!session.is_new("Shape"));
        assert_eq!(session.pending_deletes().collect::<Vec<_>>(), vec!["Armor"]);
        assert!(matches!(
            session.remove_enum("Armor"),
            Err(EnumSpliceError::NotFound(_))
        ));
    }

    #[test]
    fn test_entry_edits() {
        let ctx = virtual_context("Tables.cs", &document_text());
        let mut session = EnumSession::load(&ctx, "Tables.cs").unwrap();

        assert_eq!(session.add_entry("Armor", None).unwrap(), 2);
        assert_eq!(session.add_entry("Armor", None).unwrap(), 3);
        assert!(matches!(
            session.add_entry("Armor", Some("Plate")),
            Err(EnumSpliceError::DuplicateName(name)) if name == "Armor.Plate"
        ));

        session.rename_entry("Armor", "Leather", "Cloth").unwrap();
        session.rename_entry("Armor", "Cloth", "Cloth").unwrap();
        assert!(session.rename_entry("Armor", "Cloth", "Plate").is_err());
        assert!(session.rename_entry("Armor", "Missing", "Other").is_err());

        session.set_value("Armor", "Plate", " 5 ").unwrap();
        session.set_comment("Armor", "Plate", "heavy").unwrap();
        assert_eq!(session.remove_entry("Armor", 3).unwrap(), entry("NewValue1"));
        assert!(matches!(
            session.remove_entry("Armor", 9),
            Err(EnumSpliceError::NotFound(_))
        ));

        assert_eq!(
            session.get("Armor").unwrap().entries,
            vec![
                entry("Cloth"),
                full_entry("Plate", "5", "heavy"),
                entry("NewValue"),
            ]
        );
    }

    #[test]
    fn test_unwritable_values_and_comments_rejected() {
        let ctx = virtual_context("Tables.cs", &document_text());
        let mut session = EnumSession::load(&ctx, "Tables.cs").unwrap();

        for value in ["1, Z", "2 // two", "3\n}", "Make(4"] {
            assert!(matches!(
                session.set_value("Weapon", "Sword", value),
                Err(EnumSpliceError::InvalidEntryText { field: "value", .. })
            ));
        }
        assert!(matches!(
            session.set_comment("Weapon", "Sword", "a\n}\nclass Q {"),
            Err(EnumSpliceError::InvalidEntryText { field: "comment", .. })
        ));
        assert_eq!(
            session.get("Weapon").unwrap().entries[0],
            full_entry("Sword", "1", "")
        );

        session.set_value("Weapon", "Sword", "Combine(1, 2)").unwrap();
        session.set_comment("Weapon", "Sword", " a, b // c").unwrap();
        let plan = session.plan_save(&ctx).unwrap();
        let rescanned = scan(&SourceText::parse(&plan.text).lines, &Config::default()).unwrap();
        assert_eq!(
            rescanned.get("Weapon").unwrap().entries,
            vec![
                full_entry("Sword", "Combine(1, 2)", " a, b // c"),
                full_entry("Bow", "2", "ranged"),
            ]
        );
    }

    #[test]
    fn test_set_entries_rejects_unwritable_text() {
        let ctx = virtual_context("Tables.cs", &document_text());
        let mut session = EnumSession::load(&ctx, "Tables.cs").unwrap();

        let result = session.set_entries(
            "Armor",
            vec![entry("Mail"), full_entry("Scale", "1, B", "")],
        );
        assert!(matches!(
            result,
            Err(EnumSpliceError::InvalidEntryText { entry, .. }) if entry == "Scale"
        ));
        let result = session.set_entries("Armor", vec![full_entry("Mail", "", "x\ny")]);
        assert!(matches!(result, Err(EnumSpliceError::InvalidEntryText { .. })));
        assert_eq!(
            session.get("Armor").unwrap().entries,
            vec![entry("Leather"), entry("Plate")]
        );
    }

    #[test]
    fn test_save_keeps_entry_on_closing_line() {
        let text = "enum Mode {\n    On,\n    Off }\nenum Other {X}\n";
        let ctx = virtual_context("Modes.cs", text);
        let mut session = EnumSession::load(&ctx, "Modes.cs").unwrap();
        assert_eq!(
            session.get("Mode").unwrap().entries,
            vec![entry("On"), entry("Off")]
        );

        session.add_entry("Other", Some("Y")).unwrap();
        let plan = session.plan_save(&ctx).unwrap();
        assert!(plan.text.contains("    On,\n    Off,\n"));

        let rescanned = scan(&SourceText::parse(&plan.text).lines, &Config::default()).unwrap();
        assert_eq!(
            rescanned.get("Mode").unwrap().entries,
            vec![entry("On"), entry("Off")]
        );
        assert_eq!(
            rescanned.get("Other").unwrap().entries,
            vec![entry("X"), entry("Y")]
        );
    }

    #[test]
    fn test_set_entries_is_all_or_nothing() {
        let ctx = virtual_context("Tables.cs", &document_text());
        let mut session = EnumSession::load(&ctx, "Tables.cs").unwrap();

        let result = session.set_entries("Armor", vec![entry("Mail"), entry("Mail")]);
        assert!(matches!(result, Err(EnumSpliceError::DuplicateName(_))));
        assert_eq!(
            session.get("Armor").unwrap().entries,
            vec![entry("Leather"), entry("Plate")]
        );

        session
            .set_entries("Armor", vec![entry("Mail"), full_entry("Scale", "4", "")])
            .unwrap();
        assert_eq!(
            session.get("Armor").unwrap().entries,
            vec![entry("Mail"), full_entry("Scale", "4", "")]
        );
        assert!(session.set_entries("Nothing", Vec::new()).is_err());
    }

    #[test]
    fn test_plan_save_orders_delete_update_insert() {
        let ctx = virtual_context("Tables.cs", &document_text());
        let mut session = EnumSession::load(&ctx, "Tables.cs").unwrap();

        session.set_value("Weapon", "Sword", "10").unwrap();
        session.remove_enum("Armor").unwrap();
        session.create_enum("Shape").unwrap();

        let plan = session.plan_save(&ctx).unwrap();
        assert!(plan.changed);
        assert_eq!(plan.path, PathBuf::from("/project/Tables.cs"));
        assert_eq!(
            plan.report,
            SaveReport {
                deleted: vec!["Armor".to_string()],
                updated: vec!["Weapon".to_string()],
                inserted: vec!["Shape".to_string()],
                missing: Vec::new(),
            }
        );

        let mut expected = lines(&[
            "using System;",
            "",
            "namespace Game.Data",
            "{",
            "    public class Tables",
            "    {",
            "        public enum Weapon",
            "        {",
            "            Sword = 10,",
            "            Bow = 2, //ranged",
            "        }",
            "",
            "        private int count = 0;",
            "    }",
            "}",
            "",
            "    public enum Shape",
            "    {",
            "        DefaultValue,",
            "    }",
        ])
        .join("\n");
        expected.push('\n');
        assert_eq!(plan.text, expected);
    }

    #[test]
    fn test_plan_save_without_edits_is_unchanged() {
        let ctx = virtual_context("Tables.cs", &document_text());
        let session = EnumSession::load(&ctx, "Tables.cs").unwrap();

        let plan = session.plan_save(&ctx).unwrap();
        assert!(!plan.changed);
        assert_eq!(plan.text, document_text());
        assert_eq!(plan.report.updated, vec!["Weapon", "Armor"]);
    }

    #[test]
    fn test_plan_save_reports_missing_enums() {
        let ctx = virtual_context("Tables.cs", &document_text());
        let mut session = EnumSession::load(&ctx, "Tables.cs").unwrap();
        session.remove_enum("Armor").unwrap();

        // The file lost both enums after loading
        let emptied = virtual_context("Tables.cs", "namespace Game.Data\n{\n}\n");
        let plan = session.plan_save(&emptied).unwrap();
        assert!(!plan.changed);
        assert_eq!(plan.report.missing, vec!["Armor", "Weapon"]);
    }

    #[test]
    fn test_recreating_deleted_enum_rewrites_it() {
        let ctx = virtual_context("Tables.cs", &document_text());
        let mut session = EnumSession::load(&ctx, "Tables.cs").unwrap();

        session.remove_enum("Armor").unwrap();
        session.create_enum("Armor").unwrap();
        assert!(!session.is_new("Armor"));
        assert_eq!(session.pending_deletes().count(), 0);

        let plan = session.plan_save(&ctx).unwrap();
        assert_eq!(plan.report.updated, vec!["Weapon", "Armor"]);
        assert!(plan.report.inserted.is_empty());
        assert!(plan.text.contains("        public enum Armor\n        {\n            DefaultValue,\n        }"));
    }

    #[test]
    fn test_save_writes_and_reloads() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Tables.cs");
        fs::write(&path, document_text()).unwrap();
        let ctx = Context::default_for_dir(dir.path().to_path_buf());

        let mut session = EnumSession::load(&ctx, "Tables.cs").unwrap();
        session.add_entry("Armor", Some("Mithril")).unwrap();
        session.create_enum("Shape").unwrap();

        let report = session.save(&ctx, false).unwrap();
        assert_eq!(report.inserted, vec!["Shape"]);

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("            Mithril,\n"));
        assert!(written.ends_with("    public enum Shape\n    {\n        DefaultValue,\n    }\n"));

        // Reloaded from disk: nothing pending any more
        assert!(!session.is_new("Shape"));
        assert_eq!(names(&session), vec!["Weapon", "Armor", "Shape"]);
        assert!(!session.plan_save(&ctx).unwrap().changed);
    }

    #[test]
    fn test_save_refuses_external_changes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Tables.cs");
        fs::write(&path, document_text()).unwrap();
        let ctx = Context::default_for_dir(dir.path().to_path_buf());

        let mut session = EnumSession::load(&ctx, "Tables.cs").unwrap();
        session.add_entry("Armor", Some("Mithril")).unwrap();

        let edited = document_text().replace("Plate,", "Plate,\n            Chain,");
        fs::write(&path, &edited).unwrap();

        assert!(matches!(
            session.save(&ctx, false),
            Err(EnumSpliceError::FileConflict { .. })
        ));
        assert_eq!(fs::read_to_string(&path).unwrap(), edited);

        session.save(&ctx, true).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("Mithril,"));
        assert!(!written.contains("Chain,"));
    }

    #[test]
    fn test_save_creates_missing_file() {
        let dir = tempdir().unwrap();
        let ctx = Context::default_for_dir(dir.path().to_path_buf());

        let mut session = EnumSession::load(&ctx, "New.cs").unwrap();
        assert!(session.enums().is_empty());
        assert!(session.loaded_digest().is_none());

        session.create_enum("Shape").unwrap();
        session
            .set_entries("Shape", vec![entry("Square")])
            .unwrap();
        session.save(&ctx, false).unwrap();

        assert_eq!(
            fs::read_to_string(dir.path().join("New.cs")).unwrap(),
            "\npublic enum Shape\n{\n    Square,\n}\n"
        );
    }
}

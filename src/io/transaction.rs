//! Write-back of edited source files.
//!
//! Every write carries the digest the file had when it was read. The whole
//! transaction is checked before anything is written, and each file is
//! replaced through a temporary sibling and a rename.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use super::stat::hexdigest_file;
use crate::errors::{EnumSpliceError, Result};

/// A file operation that can be part of a [`Transaction`].
pub trait Action: std::fmt::Debug + Send + Sync {
    /// Returns the target file path.
    fn target(&self) -> &Path;

    /// Fails with [`EnumSpliceError::FileConflict`] if the target changed
    /// since it was read.
    fn check_conflict(&self) -> Result<()>;

    fn execute(&self) -> Result<()>;

    /// One-line summary for dry runs.
    fn describe(&self) -> String;

    /// Returns the proposed new content, if any.
    fn proposed_content(&self) -> Option<&str> {
        None
    }
}

/// Replace a file's content.
#[derive(Debug)]
pub struct WriteAction {
    pub path: PathBuf,
    pub content: String,
    /// Digest the file must still have; `None` writes unconditionally.
    pub expected_digest: Option<String>,
}

impl WriteAction {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            expected_digest: None,
        }
    }

    /// Requires the file to still hash to `digest` when the write happens.
    pub fn expecting(mut self, digest: impl Into<String>) -> Self {
        self.expected_digest = Some(digest.into());
        self
    }
}

impl Action for WriteAction {
    fn target(&self) -> &Path {
        &self.path
    }

    fn check_conflict(&self) -> Result<()> {
        let Some(expected) = &self.expected_digest else {
            return Ok(());
        };
        let current = if self.path.exists() {
            Some(hexdigest_file(&self.path)?)
        } else {
            None
        };
        if current.as_deref() != Some(expected.as_str()) {
            tracing::debug!("{} changed on disk since it was read", self.path.display());
            return Err(EnumSpliceError::FileConflict {
                path: self.path.clone(),
            });
        }
        Ok(())
    }

    fn execute(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        atomic_write(&self.path, &self.content)?;
        Ok(())
    }

    fn describe(&self) -> String {
        format!("write {}", self.path.display())
    }

    fn proposed_content(&self) -> Option<&str> {
        Some(&self.content)
    }
}

/// A set of actions checked together and then executed in order.
#[derive(Debug, Default)]
pub struct Transaction {
    actions: Vec<Box<dyn Action>>,
}

impl Transaction {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, action: impl Action + 'static) {
        self.actions.push(Box::new(action));
    }

    /// Adds an unconditional write.
    pub fn write(&mut self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.add(WriteAction::new(path, content));
    }

    /// Adds a write guarded by the digest the file was read with.
    pub fn write_expecting(
        &mut self,
        path: impl Into<PathBuf>,
        content: impl Into<String>,
        digest: impl Into<String>,
    ) {
        self.add(WriteAction::new(path, content).expecting(digest));
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn describe(&self) -> Vec<String> {
        self.actions.iter().map(|a| a.describe()).collect()
    }

    /// Unified diffs of every action against the file currently on disk.
    /// Actions that would not change anything are left out.
    pub fn diffs(&self) -> Vec<String> {
        self.actions
            .iter()
            .filter_map(|action| {
                let new_content = action.proposed_content()?;
                let path = action.target();
                let old_content = fs::read_to_string(path).unwrap_or_default();
                if old_content == new_content {
                    return None;
                }
                let label = path.display().to_string();
                let diff = unified_diff(
                    &old_content,
                    new_content,
                    &format!("a/{}", label),
                    &format!("b/{}", label),
                );
                (!diff.is_empty()).then_some(diff)
            })
            .collect()
    }

    pub fn check_conflicts(&self) -> Result<()> {
        for action in &self.actions {
            action.check_conflict()?;
        }
        Ok(())
    }

    /// Checks every action, then executes them all.
    pub fn execute(&self) -> Result<()> {
        self.check_conflicts()?;
        self.execute_force()
    }

    /// Executes every action without conflict checks.
    pub fn execute_force(&self) -> Result<()> {
        for action in &self.actions {
            tracing::debug!("{}", action.describe());
            action.execute()?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edit {
    Keep(usize, usize),
    Remove(usize, usize),
    Add(usize, usize),
}

impl Edit {
    fn indices(&self) -> (usize, usize) {
        match *self {
            Edit::Keep(o, n) | Edit::Remove(o, n) | Edit::Add(o, n) => (o, n),
        }
    }
}

fn split_lines(text: &str) -> Vec<&str> {
    text.lines().collect()
}

/// Line-based unified diff with three lines of context.
pub(crate) fn unified_diff(old: &str, new: &str, old_label: &str, new_label: &str) -> String {
    const CONTEXT: usize = 3;

    let old_lines = split_lines(old);
    let new_lines = split_lines(new);
    let edits = edit_script(&old_lines, &new_lines);

    let changes: Vec<usize> = edits
        .iter()
        .enumerate()
        .filter(|(_, e)| !matches!(e, Edit::Keep(..)))
        .map(|(i, _)| i)
        .collect();
    let Some(&first) = changes.first() else {
        return String::new();
    };

    // Changes closer than two context windows share a hunk
    let mut groups = vec![(first, first)];
    for &ci in &changes[1..] {
        let last = groups.len() - 1;
        if ci - groups[last].1 <= 2 * CONTEXT {
            groups[last].1 = ci;
        } else {
            groups.push((ci, ci));
        }
    }

    let mut output = vec![format!("--- {}", old_label), format!("+++ {}", new_label)];
    for (start, end) in groups {
        let slice = &edits[start.saturating_sub(CONTEXT)..(end + CONTEXT + 1).min(edits.len())];
        let (old_start, new_start) = slice[0].indices();
        let mut old_count = 0;
        let mut new_count = 0;
        let mut body = Vec::with_capacity(slice.len());
        for edit in slice {
            match *edit {
                Edit::Keep(o, _) => {
                    body.push(format!(" {}", old_lines[o]));
                    old_count += 1;
                    new_count += 1;
                }
                Edit::Remove(o, _) => {
                    body.push(format!("-{}", old_lines[o]));
                    old_count += 1;
                }
                Edit::Add(_, n) => {
                    body.push(format!("+{}", new_lines[n]));
                    new_count += 1;
                }
            }
        }
        output.push(format!(
            "@@ -{},{} +{},{} @@",
            old_start + 1,
            old_count,
            new_start + 1,
            new_count
        ));
        output.extend(body);
    }

    output.join("\n")
}

/// Shortest edit script from the longest common subsequence table.
fn edit_script(old: &[&str], new: &[&str]) -> Vec<Edit> {
    let (m, n) = (old.len(), new.len());
    let mut lcs = vec![vec![0usize; n + 1]; m + 1];
    for i in 1..=m {
        for j in 1..=n {
            lcs[i][j] = if old[i - 1] == new[j - 1] {
                lcs[i - 1][j - 1] + 1
            } else {
                lcs[i - 1][j].max(lcs[i][j - 1])
            };
        }
    }

    let mut edits = Vec::with_capacity(m.max(n));
    let (mut i, mut j) = (m, n);
    while i > 0 || j > 0 {
        if i > 0 && j > 0 && old[i - 1] == new[j - 1] {
            i -= 1;
            j -= 1;
            edits.push(Edit::Keep(i, j));
        } else if j > 0 && (i == 0 || lcs[i][j - 1] >= lcs[i - 1][j]) {
            j -= 1;
            edits.push(Edit::Add(i, j));
        } else {
            i -= 1;
            edits.push(Edit::Remove(i, j));
        }
    }
    edits.reverse();
    edits
}

static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Writes `content` to a temporary sibling of `path` and renames it over.
fn atomic_write(path: &Path, content: &str) -> io::Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let temp_path = parent.join(format!(
        ".enumsplice-tmp-{}-{}",
        std::process::id(),
        TEMP_COUNTER.fetch_add(1, Ordering::Relaxed)
    ));

    {
        let mut file = File::create(&temp_path)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
    }

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }
    Ok(())
}

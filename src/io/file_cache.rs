//! Read access to source files, real or in memory.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use super::stat::{FileData, Stat};

/// Read side of the file system, so edits can be planned against test data.
pub trait FileCache: Send + Sync + std::fmt::Debug {
    /// Reads the contents of a file.
    fn read(&self, path: &Path) -> io::Result<String>;

    /// Checks if a file exists.
    fn exists(&self, path: &Path) -> bool;

    /// Gets size and modification time.
    fn stat(&self, path: &Path) -> io::Result<Stat>;

    /// Gets size, modification time and content digest.
    fn file_data(&self, path: &Path) -> io::Result<FileData>;
}

/// Files on disk, with relative paths taken from `base_dir`.
#[derive(Debug, Clone, Default)]
pub struct RealFileCache {
    pub base_dir: PathBuf,
}

impl RealFileCache {
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Resolves a path relative to the base directory.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }
}

impl FileCache for RealFileCache {
    fn read(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(self.resolve(path))
    }

    fn exists(&self, path: &Path) -> bool {
        self.resolve(path).is_file()
    }

    fn stat(&self, path: &Path) -> io::Result<Stat> {
        Stat::from_path(&self.resolve(path))
    }

    fn file_data(&self, path: &Path) -> io::Result<FileData> {
        FileData::from_path(&self.resolve(path))
    }
}

/// In-memory files keyed by path.
#[derive(Debug, Clone, Default)]
pub struct VirtualFS {
    files: HashMap<PathBuf, VirtualFile>,
}

#[derive(Debug, Clone)]
struct VirtualFile {
    content: String,
    mtime: DateTime<Utc>,
}

impl VirtualFS {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a file.
    pub fn add_file(&mut self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.files.insert(
            path.into(),
            VirtualFile {
                content: content.into(),
                mtime: Utc::now(),
            },
        );
    }

    pub fn remove_file(&mut self, path: &Path) {
        self.files.remove(path);
    }

    fn get(&self, path: &Path) -> io::Result<&VirtualFile> {
        self.files.get(path).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} not found", path.display()),
            )
        })
    }
}

impl FileCache for VirtualFS {
    fn read(&self, path: &Path) -> io::Result<String> {
        self.get(path).map(|f| f.content.clone())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn stat(&self, path: &Path) -> io::Result<Stat> {
        self.get(path)
            .map(|f| Stat::new(f.mtime, f.content.len() as u64))
    }

    fn file_data(&self, path: &Path) -> io::Result<FileData> {
        self.get(path)
            .map(|f| FileData::from_content(&f.content, f.mtime))
    }
}

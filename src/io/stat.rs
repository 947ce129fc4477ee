//! Content digests and file metadata used to detect external edits.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Hex-encoded SHA-256 of `content`.
pub fn hexdigest_str(content: &str) -> String {
    hex::encode(Sha256::digest(content.as_bytes()))
}

/// Hex-encoded SHA-256 of the file at `path`, read in chunks.
pub fn hexdigest_file(path: &Path) -> io::Result<String> {
    let mut file = fs::File::open(path)?;
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; 8192];
    loop {
        let n = file.read(&mut buffer)?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }
    Ok(hex::encode(hasher.finalize()))
}

/// Size and modification time of a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub mtime: DateTime<Utc>,
    pub size: u64,
}

impl Stat {
    pub fn new(mtime: DateTime<Utc>, size: u64) -> Self {
        Self { mtime, size }
    }

    /// Reads the metadata of `path`.
    pub fn from_path(path: &Path) -> io::Result<Self> {
        let metadata = fs::metadata(path)?;
        Ok(Self {
            mtime: metadata.modified()?.into(),
            size: metadata.len(),
        })
    }
}

/// Snapshot of a source file taken when it is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileData {
    pub stat: Stat,
    /// SHA-256 of the content, hex encoded.
    pub hexdigest: String,
}

impl FileData {
    pub fn from_path(path: &Path) -> io::Result<Self> {
        Ok(Self {
            stat: Stat::from_path(path)?,
            hexdigest: hexdigest_file(path)?,
        })
    }

    pub fn from_content(content: &str, mtime: DateTime<Utc>) -> Self {
        Self {
            stat: Stat::new(mtime, content.len() as u64),
            hexdigest: hexdigest_str(content),
        }
    }

    /// True if `content` hashes to the recorded digest.
    pub fn matches(&self, content: &str) -> bool {
        hexdigest_str(content) == self.hexdigest
    }
}

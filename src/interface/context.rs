//! Execution context for enumsplice operations.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::Config;
use crate::errors::Result;
use crate::io::{FileCache, RealFileCache};

/// Configuration plus file access, shared by every command.
pub struct Context {
    pub config: Config,
    /// Read access to source files.
    pub file_cache: Arc<dyn FileCache>,
    /// Directory relative paths are resolved against.
    pub base_dir: PathBuf,
}

impl Context {
    /// Creates a context reading files from disk under `base_dir`.
    pub fn new(config: Config, base_dir: PathBuf) -> Self {
        let file_cache = Arc::new(RealFileCache::new(base_dir.clone()));
        Self {
            config,
            file_cache,
            base_dir,
        }
    }

    /// Replaces the file cache, e.g. with a [`crate::io::VirtualFS`].
    pub fn with_file_cache(mut self, file_cache: Arc<dyn FileCache>) -> Self {
        self.file_cache = file_cache;
        self
    }

    /// Creates a context with default configuration.
    pub fn default_for_dir(base_dir: PathBuf) -> Self {
        Self::new(Config::default(), base_dir)
    }

    /// Creates a context for the current directory, reading the nearest
    /// configuration file.
    pub fn from_current_dir() -> Result<Self> {
        let base_dir = std::env::current_dir()?;
        let config = crate::config::read_config(&base_dir)?;
        Ok(Self::new(config, base_dir))
    }

    /// Resolves a path relative to the base directory.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::VirtualFS;
    use tempfile::tempdir;

    #[test]
    fn test_resolve_path() {
        let dir = tempdir().unwrap();
        let ctx = Context::default_for_dir(dir.path().to_path_buf());

        assert_eq!(
            ctx.resolve_path(Path::new("Scripts/Enums.cs")),
            dir.path().join("Scripts/Enums.cs")
        );
        assert_eq!(
            ctx.resolve_path(Path::new("/absolute/Enums.cs")),
            PathBuf::from("/absolute/Enums.cs")
        );
    }

    #[test]
    fn test_real_cache_reads_under_base_dir() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("Enums.cs"), "enum A {}").unwrap();

        let ctx = Context::default_for_dir(dir.path().to_path_buf());
        assert!(ctx.file_cache.exists(Path::new("Enums.cs")));
    }

    #[test]
    fn test_with_virtual_cache() {
        let mut vfs = VirtualFS::new();
        vfs.add_file("Enums.cs", "enum A {}");

        let ctx = Context::default_for_dir(PathBuf::from("/nowhere"))
            .with_file_cache(Arc::new(vfs));
        assert_eq!(ctx.file_cache.read(Path::new("Enums.cs")).unwrap(), "enum A {}");
    }
}

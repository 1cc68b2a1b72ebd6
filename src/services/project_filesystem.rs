use std::fs;
use std::path::PathBuf;

use crate::domain::AppError;
use crate::ports::ProjectStore;

/// Filesystem-based project store rooted at the application directory.
#[derive(Debug, Clone)]
pub struct FilesystemProjectStore {
    root: PathBuf,
}

impl FilesystemProjectStore {
    /// Create a project store for the given application root.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create a project store for the current directory.
    pub fn current() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd))
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }
}

impl ProjectStore for FilesystemProjectStore {
    fn exists(&self, path: &str) -> bool {
        self.resolve(path).exists()
    }

    fn read_file(&self, path: &str) -> Result<String, AppError> {
        Ok(fs::read_to_string(self.resolve(path))?)
    }

    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        let target = self.resolve(path);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, content)?;
        Ok(())
    }
}

//! Path resolution for the data directory

use std::path::PathBuf;

/// Resolves standard paths under the data directory
#[derive(Debug, Clone)]
pub struct Paths {
    pub root: PathBuf,
}

impl Paths {
    /// Default data directory, `~/.altinat`
    pub fn new() -> std::io::Result<Self> {
        let home = dirs::home_dir().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "home directory not found")
        })?;

        Ok(Self {
            root: home.join(".altinat"),
        })
    }

    /// Use an explicit data directory
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve from an optional override, falling back to the default
    pub fn resolve(root: Option<PathBuf>) -> std::io::Result<Self> {
        match root {
            Some(root) => Ok(Self::with_root(root)),
            None => Self::new(),
        }
    }

    /// Directory holding one JSON file per storage key
    pub fn storage_dir(&self) -> PathBuf {
        self.root.join("storage")
    }

    /// Get config.json path
    pub fn config_file(&self) -> PathBuf {
        self.root.join("config.json")
    }
}

//! Filesystem workspace that owns the on-disk store databases. An explicit
//! value rather than ambient global state, so hosts and tests can point the
//! SDK at any directory.

use {
    crate::error::GhostpassError,
    std::{
        fs,
        path::{Path, PathBuf},
    },
};

/// Directory under the user's home that holds store databases by default.
pub const DEFAULT_DIR_NAME: &str = ".ghostpass";

/// File extension of a persisted secret store.
pub const DB_EXTENSION: &str = "gp";

#[derive(Clone, Debug)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    /// Open the default workspace, `$HOME/.ghostpass`, creating it when
    /// missing.
    pub fn open_default() -> Result<Self, GhostpassError> {
        let home = dirs::home_dir().ok_or_else(|| {
            GhostpassError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "home directory not found",
            ))
        })?;

        Self::at(home.join(DEFAULT_DIR_NAME))
    }

    /// Open a workspace rooted at `root`, creating the directory (0755) when
    /// missing.
    pub fn at(root: impl Into<PathBuf>) -> Result<Self, GhostpassError> {
        let root = root.into();

        if !root.exists() {
            fs::create_dir_all(&root)?;

            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                fs::set_permissions(&root, fs::Permissions::from_mode(0o755))?;
            }
        }

        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the database file backing the store named `name`.
    pub fn dbpath(&self, name: &str) -> PathBuf {
        self.root.join(format!("{name}.{DB_EXTENSION}"))
    }
}

pub(crate) use {
    crate::error::GhostpassCliError,
    anyhow::{anyhow, Result as AnyResult},
    clap::builder::ValueParser,
    colored::Colorize,
    ghostpass_sdk::{SecretBuffer, SecretStore, Workspace},
    std::path::{Path, PathBuf},
};

// Where store databases live by default.
pub(crate) const WORKSPACE_DIR: &str = "~/.ghostpass";

// == Used by clap ==

/// Expands `~/` to the user's home directory in path arguments.
pub(crate) fn expand_tilde(path: &str) -> AnyResult<PathBuf> {
    if path.starts_with("~/") {
        match home::home_dir() {
            Some(home) => return Ok(home.join(&path[2..])),
            None => return Err(anyhow!("Could not find home directory")),
        }
    }

    Ok(path.into())
}

use {
    crate::{display::*, prelude::*},
    thiserror::Error,
};

/// Custom error definitions for the Ghostpass CLI. Takes care of displaying
/// a pretty summary in the console.
#[derive(Debug, Error)]
pub(crate) enum GhostpassCliError {
    #[error("{error}{separator}\n{0}", error = "Store Error".red().bold(), separator = separator())]
    Store(ghostpass_sdk::GhostpassError),
    #[error("{error}{separator}\n{0}", error = "IO Error".red().bold(), separator = separator())]
    Io(std::io::Error),
    #[error("{error}{separator}\n{0}", error = "Error".red().bold(), separator = separator())]
    Any(anyhow::Error),
}

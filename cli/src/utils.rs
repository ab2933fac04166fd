//! Shared helpers for secret input and carrier file handling.

use {
    crate::prelude::*,
    std::fs,
};

/// Prompt for a secret on stdin without echoing and move it straight into a
/// sealed secret buffer.
pub(crate) fn read_secret(prompt: &str) -> AnyResult<SecretBuffer, GhostpassCliError> {
    let input = rpassword::prompt_password(format!(
        "{arrow} {prompt}: ",
        arrow = ">".purple().bold()
    ))
    .map_err(GhostpassCliError::Io)?;

    if input.is_empty() {
        return Err(GhostpassCliError::Any(anyhow!("no input received")));
    }

    Ok(SecretBuffer::from(input).seal())
}

/// Open the workspace backing all store databases.
pub(crate) fn open_workspace(dir: &Path) -> AnyResult<Workspace, GhostpassCliError> {
    log::debug!("opening workspace at {}", dir.display());

    Workspace::at(dir).map_err(GhostpassCliError::Store)
}

/// Read the carrier text used for plainsight encoding or decoding.
pub(crate) fn read_corpus(path: &Path) -> AnyResult<String, GhostpassCliError> {
    let corpus = fs::read_to_string(path).map_err(GhostpassCliError::Io)?;
    log::debug!("read {} byte corpus from {}", corpus.len(), path.display());

    Ok(corpus)
}

#[cfg(test)]
mod tests {
    use {super::*, tempfile::TempDir};

    #[test]
    fn read_corpus_returns_file_contents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("corpus.txt");
        std::fs::write(&path, "The quick brown fox.\n").unwrap();

        assert_eq!(read_corpus(&path).unwrap(), "The quick brown fox.\n");
    }

    #[test]
    fn read_corpus_missing_file_is_an_io_error() {
        let dir = TempDir::new().unwrap();

        assert!(matches!(
            read_corpus(&dir.path().join("nope.txt")),
            Err(GhostpassCliError::Io(_))
        ));
    }

    #[test]
    fn open_workspace_creates_the_directory() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("workspace");

        let workspace = open_workspace(&root).unwrap();
        assert!(workspace.root().is_dir());
    }
}

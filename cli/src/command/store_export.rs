use {
    crate::{command_title, loading, notify_success, prelude::*, utils},
    std::fs,
};

/// Export a secret store as a plainsight artifact hidden inside a carrier
/// text.
pub(crate) fn store_export(
    name: String,
    corpus: PathBuf,
    out: Option<PathBuf>,
    workspace_dir: PathBuf,
) -> AnyResult<(), GhostpassCliError> {
    command_title!("Exporting secret store `{name}` for plainsight distribution");

    let workspace = utils::open_workspace(&workspace_dir)?;
    let passphrase = utils::read_secret("Master passphrase (will not be echoed)")?;

    let open_handle = loading!("Opening secret store...");

    let store = match SecretStore::open(&workspace, &name, passphrase) {
        Ok(store) => store,
        Err(e) => {
            open_handle.error();

            return Err(GhostpassCliError::Store(e));
        }
    };

    open_handle.success();

    let corpus_text = utils::read_corpus(&corpus)?;

    let encode_handle = loading!("Encoding hidden payload into corpus...");

    let artifact = match store.export(&corpus_text) {
        Ok(artifact) => artifact,
        Err(e) => {
            encode_handle.error();

            return Err(GhostpassCliError::Store(e));
        }
    };

    encode_handle.success();

    match out {
        Some(path) => {
            fs::write(&path, artifact).map_err(GhostpassCliError::Io)?;

            notify_success!("Plainsight artifact written to {path}", path = path.display());
        }
        None => println!("{artifact}"),
    }

    Ok(())
}

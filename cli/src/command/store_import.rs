use crate::{command_title, loading, notify_success, prelude::*, utils};

/// Reconstruct a secret store from a plainsight artifact and persist its
/// stationary form.
pub(crate) fn store_import(
    corpus: PathBuf,
    workspace_dir: PathBuf,
) -> AnyResult<(), GhostpassCliError> {
    command_title!("Importing secret store from plainsight corpus");

    let workspace = utils::open_workspace(&workspace_dir)?;
    let corpus_text = utils::read_corpus(&corpus)?;
    let passphrase = utils::read_secret("Master passphrase (will not be echoed)")?;

    let import_handle = loading!("Decoding and decrypting hidden store...");

    let store = match SecretStore::import(&workspace, passphrase, &corpus_text) {
        Ok(store) => store,
        Err(e) => {
            import_handle.error();

            return Err(GhostpassCliError::Store(e));
        }
    };

    match store.commit() {
        Ok(()) => import_handle.success(),
        Err(e) => {
            import_handle.error();

            return Err(GhostpassCliError::Store(e));
        }
    }

    notify_success!(
        "Secret store `{name}` imported and committed",
        name = store.name()
    );
    Ok(())
}

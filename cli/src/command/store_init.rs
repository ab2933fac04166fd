use crate::{command_title, loading, notify_success, prelude::*, utils};

/// Create a new, empty secret store and write it to the workspace.
pub(crate) fn store_init(
    name: String,
    workspace_dir: PathBuf,
) -> AnyResult<(), GhostpassCliError> {
    command_title!("Initializing new secret store `{name}`");

    let workspace = utils::open_workspace(&workspace_dir)?;
    let passphrase = utils::read_secret("Master passphrase (will not be echoed)")?;

    let init_handle = loading!("Creating secret store...");

    let store = match SecretStore::init(&workspace, &name, passphrase) {
        Ok(store) => store,
        Err(e) => {
            init_handle.error();

            return Err(GhostpassCliError::Store(e));
        }
    };

    match store.commit() {
        Ok(()) => init_handle.success(),
        Err(e) => {
            init_handle.error();

            return Err(GhostpassCliError::Store(e));
        }
    }

    notify_success!(
        "Secret store `{name}` ready at {path}",
        path = workspace.dbpath(&name).display()
    );
    Ok(())
}

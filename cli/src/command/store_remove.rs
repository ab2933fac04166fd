use crate::{command_title, loading, notify_success, prelude::*, utils};

/// Remove a credential field from a secret store.
pub(crate) fn store_remove(
    name: String,
    service: String,
    workspace_dir: PathBuf,
) -> AnyResult<(), GhostpassCliError> {
    command_title!("Removing field `{service}` from secret store `{name}`");

    let workspace = utils::open_workspace(&workspace_dir)?;
    let passphrase = utils::read_secret("Master passphrase (will not be echoed)")?;

    let remove_handle = loading!("Removing field...");

    let mut store = match SecretStore::open(&workspace, &name, passphrase) {
        Ok(store) => store,
        Err(e) => {
            remove_handle.error();

            return Err(GhostpassCliError::Store(e));
        }
    };

    if let Err(e) = store.remove_field(&service) {
        remove_handle.error();

        return Err(GhostpassCliError::Store(e));
    }

    match store.commit() {
        Ok(()) => remove_handle.success(),
        Err(e) => {
            remove_handle.error();

            return Err(GhostpassCliError::Store(e));
        }
    }

    notify_success!("Field `{service}` removed from `{name}`");
    Ok(())
}

use crate::{command_title, confirm, loading, notify_success, prelude::*, utils};

/// Permanently delete a secret store after validating the passphrase.
pub(crate) fn store_destruct(
    name: String,
    skip_confirmation: bool,
    workspace_dir: PathBuf,
) -> AnyResult<(), GhostpassCliError> {
    command_title!("Destroying secret store `{name}`");

    let workspace = utils::open_workspace(&workspace_dir)?;
    let passphrase = utils::read_secret("Master passphrase (will not be echoed)")?;

    let open_handle = loading!("Opening secret store...");

    // opening first validates that the store exists and the passphrase
    // matches its fields
    let store = match SecretStore::open(&workspace, &name, passphrase) {
        Ok(store) => store,
        Err(e) => {
            open_handle.error();

            return Err(GhostpassCliError::Store(e));
        }
    };

    open_handle.success();

    if !skip_confirmation {
        confirm!("The secret store will be permanently deleted on this host. Continue?");
    }

    let destroy_handle = loading!("Destroying secret store...");

    match store.destroy() {
        Ok(()) => destroy_handle.success(),
        Err(e) => {
            destroy_handle.error();

            return Err(GhostpassCliError::Store(e));
        }
    }

    notify_success!("Secret store `{name}` nuked");
    Ok(())
}

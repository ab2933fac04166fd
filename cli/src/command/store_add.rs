use crate::{command_title, confirm, loading, notify_success, prelude::*, utils};

/// Add a credential field to a secret store, overwriting on confirmation.
pub(crate) fn store_add(
    name: String,
    service: String,
    username: String,
    skip_confirmation: bool,
    workspace_dir: PathBuf,
) -> AnyResult<(), GhostpassCliError> {
    command_title!("Adding field `{service}` to secret store `{name}`");

    let workspace = utils::open_workspace(&workspace_dir)?;
    let passphrase = utils::read_secret("Master passphrase (will not be echoed)")?;

    let open_handle = loading!("Opening secret store...");

    let mut store = match SecretStore::open(&workspace, &name, passphrase) {
        Ok(store) => store,
        Err(e) => {
            open_handle.error();

            return Err(GhostpassCliError::Store(e));
        }
    };

    open_handle.success();

    if store.field_exists(&service) && !skip_confirmation {
        confirm!("Field `{service}` already exists in the store. Overwrite?");
    }

    let password =
        utils::read_secret(&format!("Password for `{service}` (will not be echoed)"))?;

    let commit_handle = loading!("Encrypting and committing field...");

    if let Err(e) = store.add_field(&service, &username, password) {
        commit_handle.error();

        return Err(GhostpassCliError::Store(e));
    }

    match store.commit() {
        Ok(()) => commit_handle.success(),
        Err(e) => {
            commit_handle.error();

            return Err(GhostpassCliError::Store(e));
        }
    }

    notify_success!("Field `{service}` stored in `{name}`");
    Ok(())
}

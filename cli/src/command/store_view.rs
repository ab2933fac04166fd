use crate::{command_title, loading, prelude::*, utils};

/// Decrypt one credential field and print it.
pub(crate) fn store_view(
    name: String,
    service: String,
    workspace_dir: PathBuf,
) -> AnyResult<(), GhostpassCliError> {
    command_title!("Viewing field `{service}` in secret store `{name}`");

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

    let (service, username, password) = store
        .get_field(&service)
        .map_err(GhostpassCliError::Store)?;

    println!(
        "\n| {service} : {username} : {password} |",
        service = service.bold()
    );
    Ok(())
}

use crate::{command_title, loading, prelude::*, utils};

/// List the service names held in a secret store.
pub(crate) fn store_list(
    name: String,
    workspace_dir: PathBuf,
) -> AnyResult<(), GhostpassCliError> {
    command_title!("Listing services in secret store `{name}`");

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

    let mut services = store.services();
    services.sort_unstable();

    if services.is_empty() {
        println!("\n(no fields stored)");
        return Ok(());
    }

    println!();
    for service in services {
        println!("- {service}");
    }

    Ok(())
}

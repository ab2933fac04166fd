use crate::prelude::*;

mod store_add;
mod store_destruct;
mod store_export;
mod store_import;
mod store_init;
mod store_list;
mod store_remove;
mod store_view;

use {
    store_add::store_add,
    store_destruct::store_destruct,
    store_export::store_export,
    store_import::store_import,
    store_init::store_init,
    store_list::store_list,
    store_remove::store_remove,
    store_view::store_view,
};

#[derive(clap::Subcommand, Clone, Debug)]
pub(crate) enum GhostpassCommand {
    #[command(about = "Create a new secret store.")]
    Init {
        /// Name of the secret store.
        #[arg(long = "name", short = 'n')]
        name: String,

        /// Hidden argument used for testing to override the workspace directory.
        #[arg(
            long = "workspace-dir",
            hide = true,
            default_value = WORKSPACE_DIR,
            value_parser = ValueParser::from(expand_tilde)
        )]
        workspace_dir: PathBuf,
    },

    #[command(about = "Permanently delete a secret store on this host.")]
    Destruct {
        /// Name of the secret store.
        #[arg(long = "name", short = 'n')]
        name: String,

        /// Skip the confirmation prompt.
        #[arg(long = "yes", short = 'y', help = "Skip the confirmation prompt")]
        skip_confirmation: bool,

        /// Hidden argument used for testing to override the workspace directory.
        #[arg(
            long = "workspace-dir",
            hide = true,
            default_value = WORKSPACE_DIR,
            value_parser = ValueParser::from(expand_tilde)
        )]
        workspace_dir: PathBuf,
    },

    #[command(about = "Add or overwrite a credential field in a secret store.")]
    Add {
        /// Name of the secret store.
        #[arg(long = "name", short = 'n')]
        name: String,

        /// Service the credentials belong to.
        #[arg(long = "service", short = 's')]
        service: String,

        /// Username for the service.
        #[arg(long = "username", short = 'u')]
        username: String,

        /// Skip the overwrite confirmation prompt.
        #[arg(long = "yes", short = 'y', help = "Skip the overwrite confirmation prompt")]
        skip_confirmation: bool,

        /// Hidden argument used for testing to override the workspace directory.
        #[arg(
            long = "workspace-dir",
            hide = true,
            default_value = WORKSPACE_DIR,
            value_parser = ValueParser::from(expand_tilde)
        )]
        workspace_dir: PathBuf,
    },

    #[command(about = "Remove a credential field from a secret store.", visible_alias = "rm")]
    Remove {
        /// Name of the secret store.
        #[arg(long = "name", short = 'n')]
        name: String,

        /// Service to remove.
        #[arg(long = "service", short = 's')]
        service: String,

        /// Hidden argument used for testing to override the workspace directory.
        #[arg(
            long = "workspace-dir",
            hide = true,
            default_value = WORKSPACE_DIR,
            value_parser = ValueParser::from(expand_tilde)
        )]
        workspace_dir: PathBuf,
    },

    #[command(about = "Decrypt and view a credential field.")]
    View {
        /// Name of the secret store.
        #[arg(long = "name", short = 'n')]
        name: String,

        /// Service to reveal.
        #[arg(long = "service", short = 's')]
        service: String,

        /// Hidden argument used for testing to override the workspace directory.
        #[arg(
            long = "workspace-dir",
            hide = true,
            default_value = WORKSPACE_DIR,
            value_parser = ValueParser::from(expand_tilde)
        )]
        workspace_dir: PathBuf,
    },

    #[command(about = "List all services in a secret store.")]
    List {
        /// Name of the secret store.
        #[arg(long = "name", short = 'n')]
        name: String,

        /// Hidden argument used for testing to override the workspace directory.
        #[arg(
            long = "workspace-dir",
            hide = true,
            default_value = WORKSPACE_DIR,
            value_parser = ValueParser::from(expand_tilde)
        )]
        workspace_dir: PathBuf,
    },

    #[command(about = "Export a secret store hidden inside a carrier text.")]
    Export {
        /// Name of the secret store.
        #[arg(long = "name", short = 'n')]
        name: String,

        /// Path to the carrier text file.
        #[arg(
            long = "corpus",
            short = 'c',
            value_parser = ValueParser::from(expand_tilde)
        )]
        corpus: PathBuf,

        /// Write the plainsight artifact here instead of stdout.
        #[arg(
            long = "out",
            short = 'o',
            value_parser = ValueParser::from(expand_tilde)
        )]
        out: Option<PathBuf>,

        /// Hidden argument used for testing to override the workspace directory.
        #[arg(
            long = "workspace-dir",
            hide = true,
            default_value = WORKSPACE_DIR,
            value_parser = ValueParser::from(expand_tilde)
        )]
        workspace_dir: PathBuf,
    },

    #[command(about = "Import a secret store from a plainsight carrier text.")]
    Import {
        /// Path to the plainsight artifact.
        #[arg(
            long = "corpus",
            short = 'c',
            value_parser = ValueParser::from(expand_tilde)
        )]
        corpus: PathBuf,

        /// Hidden argument used for testing to override the workspace directory.
        #[arg(
            long = "workspace-dir",
            hide = true,
            default_value = WORKSPACE_DIR,
            value_parser = ValueParser::from(expand_tilde)
        )]
        workspace_dir: PathBuf,
    },
}

/// Handle the provided ghostpass command.
pub(crate) fn handle(cmd: GhostpassCommand) -> AnyResult<(), GhostpassCliError> {
    match cmd {
        GhostpassCommand::Init {
            name,
            workspace_dir,
        } => store_init(name, workspace_dir),
        GhostpassCommand::Destruct {
            name,
            skip_confirmation,
            workspace_dir,
        } => store_destruct(name, skip_confirmation, workspace_dir),
        GhostpassCommand::Add {
            name,
            service,
            username,
            skip_confirmation,
            workspace_dir,
        } => store_add(name, service, username, skip_confirmation, workspace_dir),
        GhostpassCommand::Remove {
            name,
            service,
            workspace_dir,
        } => store_remove(name, service, workspace_dir),
        GhostpassCommand::View {
            name,
            service,
            workspace_dir,
        } => store_view(name, service, workspace_dir),
        GhostpassCommand::List {
            name,
            workspace_dir,
        } => store_list(name, workspace_dir),
        GhostpassCommand::Export {
            name,
            corpus,
            out,
            workspace_dir,
        } => store_export(name, corpus, out, workspace_dir),
        GhostpassCommand::Import {
            corpus,
            workspace_dir,
        } => store_import(corpus, workspace_dir),
    }
}

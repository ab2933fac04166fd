//! Ghostpass command-line interface. All cryptography and persistence lives
//! in `ghostpass-sdk`; this binary only parses arguments, prompts for
//! secrets, and renders results.

mod command;
mod display;
mod error;
mod prelude;
mod utils;

use {
    crate::{command::GhostpassCommand, prelude::*},
    clap::Parser,
};

#[derive(Parser)]
#[command(
    name = "ghostpass",
    about = "Secrets manager cryptosystem with plainsight distribution",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: GhostpassCommand,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = command::handle(cli.command) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

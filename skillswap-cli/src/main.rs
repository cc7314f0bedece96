use std::path::PathBuf;

use clap::{Parser, Subcommand};
use human_panic::setup_panic;
use skillswap_lib::Catalog;
use tracing::error;

mod profile;
mod skill;

#[derive(Parser, Debug)]
#[command(name = "skillswap")]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Path to the TOML dataset
    #[arg(long, global = true, default_value = "data/dataset.toml")]
    data: PathBuf,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Operate on profiles
    #[command(subcommand)]
    Profile(profile::Command),
    /// Operate on skills and ratings
    #[command(subcommand)]
    Skill(skill::Command),
}

fn main() {
    setup_panic!();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let catalog = match Catalog::open(&cli.data) {
        Ok(catalog) => catalog,
        Err(err) => {
            error!("{err}");
            std::process::exit(1);
        }
    };

    match &cli.command {
        Command::Profile(cmd) => profile::handle(&catalog, cmd),
        Command::Skill(cmd) => skill::handle(&catalog, cmd),
    }
}

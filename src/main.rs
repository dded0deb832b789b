mod cli;
mod config;
mod core;
mod query;
mod server;

use colored::Colorize;
use structopt::StructOpt;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::Cli;
use config::Config;
use crate::core::NameStore;
use server::AppState;

///
/// Main loop
///

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(log_filter())
        .init();

    if let Err(e) = run(Cli::from_args()).await {
        eprintln!("{}: {:#}", "error".red(), e);
        std::process::exit(1);
    }
}

/// `RUST_LOG` when set, INFO otherwise.
fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.into_config()?;

    // The store is fully loaded before the listener binds; a missing or empty
    // file still starts the server.
    let store = NameStore::load(&config.data_file);

    server::run(config, AppState::from_store(store)).await
}

mod app;
mod charts;
mod cli;
mod config;
mod consts;
mod core;
mod dashboard;
mod error;
mod output;
mod source;
mod utils;
mod web;

use std::sync::Arc;

use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use app::{CommandContext, handle_charts, handle_serve, handle_summary};
use cli::{Cli, Commands};
use config::Config;
use dashboard::DashboardContext;
use error::AppError;
use source::load_dataset;
use utils::Timezone;

fn init_tracing(debug: bool) {
    let fallback = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let timezone = Timezone::parse(cli.timezone.as_deref())?;
    let path = cli.data_path();
    let dataset = load_dataset(&path, timezone)?;
    if dataset.is_empty() {
        warn!("{} has no rows, charts will be empty", path.display());
    }

    let ctx = CommandContext {
        cli: &cli,
        dashboard: Arc::new(DashboardContext::new(dataset)),
    };

    match &cli.command {
        Some(Commands::Summary) => handle_summary(&ctx),
        Some(Commands::Charts { program, month }) => {
            handle_charts(&ctx, program.as_deref(), month.as_deref())
        }
        Some(Commands::Serve { bind }) => handle_serve(&ctx, bind.as_deref()).await,
        None => handle_serve(&ctx, None).await,
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let config = Config::load();
    let cli = cli.with_config(&config);

    if let Err(e) = run(cli).await {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

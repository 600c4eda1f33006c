//! CLI subcommand definitions

use clap::Subcommand;

/// Main CLI commands
#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Serve the interactive dashboard (default)
    Serve {
        /// Address to bind, HOST:PORT
        #[arg(short, long, env = "VISITDASH_BIND")]
        bind: Option<String>,
    },
    /// Print dataset-wide summary statistics
    Summary,
    /// Compute the seven charts for one program/month selection
    Charts {
        /// Program to select (default: most visited program)
        #[arg(short, long)]
        program: Option<String>,
        /// Month name to select, e.g. "January" (default: first month in the data)
        #[arg(short, long)]
        month: Option<String>,
    },
}

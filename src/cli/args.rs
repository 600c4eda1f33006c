//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{Config, ConfigColorMode};
use crate::consts::DEFAULT_DATA_FILE;

use super::commands::Commands;

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Debug, Parser)]
#[command(name = "visitdash")]
#[command(about = "Interactive office-visit dashboard over a CSV of visit records", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Visit CSV with Time, Program, Course and Interactions columns
    #[arg(short, long, global = true, env = "VISITDASH_DATA", value_name = "PATH")]
    pub(crate) data: Option<PathBuf>,

    /// Convert offset-bearing timestamps into this timezone (e.g. "UTC", "America/New_York")
    #[arg(long, global = true, value_name = "TZ")]
    pub(crate) timezone: Option<String>,

    /// Output as JSON
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub(crate) no_color: bool,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(long, global = true)]
    pub(crate) debug: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        // Boolean flags: config only applies if CLI is false (default)
        if !self.no_color && config.no_color {
            self.no_color = true;
        }

        if let Some(color) = config.color
            && self.color == ColorMode::Auto
        {
            self.color = match color {
                ConfigColorMode::Auto => ColorMode::Auto,
                ConfigColorMode::Always => ColorMode::Always,
                ConfigColorMode::Never => ColorMode::Never,
            };
        }

        if self.data.is_none() {
            self.data = config.data.clone();
        }
        if self.timezone.is_none() {
            self.timezone = config.timezone.clone();
        }
        // Bare invocation serves; clap never saw the Serve args, so read its env var here
        if self.command.is_none() {
            self.command = Some(Commands::Serve {
                bind: std::env::var("VISITDASH_BIND").ok(),
            });
        }
        if let Some(Commands::Serve { bind }) = &mut self.command
            && bind.is_none()
        {
            *bind = config.bind.clone();
        }

        self
    }

    pub(crate) fn data_path(&self) -> PathBuf {
        self.data
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE))
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }
}

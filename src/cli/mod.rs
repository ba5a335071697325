//! Command-line interface definitions.

pub mod check;
pub mod output;
pub mod run;

use clap::{Parser, Subcommand};

/// Autonomous prediction market trading bot for Kalshi.
#[derive(Parser, Debug)]
#[command(name = "kalshibot")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Start the trading bot (default)
    #[default]
    Run,

    /// Validate configuration and print a pass/fail report
    Check,
}

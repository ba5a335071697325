use std::process::ExitCode;

use clap::Parser;
use kalshibot::cli::{check, run, Cli, Commands};
use kalshibot::config::Config;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command.unwrap_or_default() {
        Commands::Check => {
            let (config, diagnostics) = Config::load();
            check::execute_config(&config, &diagnostics)
        }
        Commands::Run => run::execute().await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{:?}", miette::Report::new(e));
            ExitCode::FAILURE
        }
    }
}

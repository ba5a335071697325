//! Handler for the `run` command.

use std::sync::Arc;

use tokio::signal;
use tracing::{info, warn};

use crate::app::Bot;
use crate::cli::check;
use crate::config::Config;
use crate::error::Result;
use crate::logging;

/// Resolve configuration, wire logging, validate, then run until Ctrl-C.
///
/// # Errors
///
/// Fails if the log sink cannot be created or the configuration has errors.
pub async fn execute() -> Result<()> {
    let (config, diagnostics) = Config::load();

    let handle = match logging::init(&config.monitoring) {
        Ok(handle) => handle,
        Err(e) => {
            check::print_diagnostics(&diagnostics);
            return Err(e.into());
        }
    };
    info!(log_file = %handle.log_file().display(), "Logging initialized");

    for warning in diagnostics.warnings() {
        warn!(field = warning.field(), "{warning}");
    }
    if !diagnostics.is_empty() {
        check::print_diagnostics(&diagnostics);
    }

    let bot = Bot::new(Arc::new(config), &diagnostics)?;

    let result = bot
        .run(async {
            if let Err(e) = signal::ctrl_c().await {
                warn!(error = %e, "Failed to listen for shutdown signal");
                std::future::pending::<()>().await;
            }
            info!("Keyboard interrupt received");
        })
        .await;

    let _ = handle.flush();
    result
}

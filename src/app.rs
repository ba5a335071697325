//! Bot lifecycle.
//!
//! Owns the shared configuration snapshot and keeps the process alive until
//! a shutdown signal arrives. Market data, inference, execution and risk
//! subsystems attach here once they exist.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info};

use crate::config::{Config, Diagnostics};
use crate::error::{Error, Result};

const TICK: Duration = Duration::from_secs(1);

/// Main trading bot orchestrator.
#[derive(Debug)]
pub struct Bot {
    config: Arc<Config>,
}

impl Bot {
    /// Accept a resolved snapshot, refusing to start if it has errors.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] when `diagnostics` contains
    /// any error.
    pub fn new(config: Arc<Config>, diagnostics: &Diagnostics) -> Result<Self> {
        info!(
            version = env!("CARGO_PKG_VERSION"),
            "Initializing Kalshi Trading Bot"
        );

        if diagnostics.has_errors() {
            for err in diagnostics.errors() {
                error!(field = err.field(), "{err}");
            }
            return Err(Error::InvalidConfiguration {
                errors: diagnostics.error_count(),
            });
        }

        info!("Configuration validated");
        info!("Live trading: {}", config.trading.live_trading);
        info!("Initial bankroll: ${:.2}", config.trading.initial_bankroll);
        let weights = config.ai.weights();
        info!(
            ensemble = config.ai.ensemble_enabled,
            gpt_weight = weights.primary,
            claude_weight = weights.secondary,
            sandbox = config.kalshi.sandbox,
            "Probability model configured"
        );

        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run until `shutdown` resolves.
    pub async fn run<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()>,
    {
        info!("Starting Kalshi AI Trading Bot");
        info!(
            scan_interval_secs = self.config.market_scan.scan_interval_secs,
            "All systems initialized"
        );

        let mut ticker = tokio::time::interval(TICK);
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                () = &mut shutdown => break,
                _ = ticker.tick() => {}
            }
        }

        self.stop();
        Ok(())
    }

    fn stop(&self) {
        info!("Shutting down");
        info!("Bot shutdown complete");
    }
}

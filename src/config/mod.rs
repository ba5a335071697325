//! Runtime configuration resolution and validation.
//!
//! Configuration comes exclusively from environment inputs (optionally
//! seeded from a `.env` file). [`Config::resolve`] turns an explicit [`Env`]
//! mapping into an immutable snapshot plus the [`Diagnostics`] describing
//! everything wrong with it. Nothing is read from the process at import
//! time; the entry point calls [`Config::load`] once and shares the result.
//!
//! # Example
//!
//! ```
//! use kalshibot::config::{Config, Env};
//!
//! let env = Env::new()
//!     .with("KALSHI_API_KEY", "k1")
//!     .with("KALSHI_API_SECRET", "s1")
//!     .with("OPENAI_API_KEY", "o1");
//! let (config, diagnostics) = Config::resolve(&env);
//!
//! assert!(!diagnostics.has_errors());
//! assert!(!config.ai.ensemble_enabled);
//! ```

mod ai;
mod diagnostic;
mod env;
mod exchange;
mod monitoring;
mod scan;
mod storage;
mod trading;

pub use ai::{derive_ensemble, AiConfig, EnsembleDecision, EnsembleMode, ModelWeights};
pub use diagnostic::{Diagnostic, Diagnostics, Severity};
pub use env::Env;
pub use exchange::{endpoints, ExchangeConfig};
pub use monitoring::{LogLevel, MonitoringConfig};
pub use scan::MarketScanConfig;
pub use storage::StorageConfig;
pub use trading::{TradingConfig, MIN_BANKROLL};

use env::EnvReader;

/// Fully resolved configuration snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub kalshi: ExchangeConfig,
    pub ai: AiConfig,
    pub database: StorageConfig,
    pub trading: TradingConfig,
    pub market_scan: MarketScanConfig,
    pub monitoring: MonitoringConfig,
}

impl Config {
    /// Resolve a snapshot from `env`.
    ///
    /// Deterministic and free of I/O. Every coercion failure and validation
    /// finding is returned; when the diagnostics contain no error the
    /// snapshot satisfies all startup invariants.
    #[must_use]
    pub fn resolve(env: &Env) -> (Self, Diagnostics) {
        let mut reader = EnvReader::new(env);

        let config = Self {
            kalshi: ExchangeConfig::from_env(&mut reader),
            ai: AiConfig::from_env(&mut reader),
            database: StorageConfig::from_env(&mut reader),
            trading: TradingConfig::from_env(&mut reader),
            market_scan: MarketScanConfig::from_env(&mut reader),
            monitoring: MonitoringConfig::from_env(&mut reader),
        };

        let mut diagnostics = reader.finish();
        diagnostics.extend(config.validate());

        (config, diagnostics)
    }

    /// Load `.env` (if present) and resolve from the process environment.
    #[must_use]
    pub fn load() -> (Self, Diagnostics) {
        let _ = dotenvy::dotenv();
        Self::resolve(&Env::from_process())
    }

    /// Check the startup invariants of an already resolved snapshot.
    #[must_use]
    pub fn validate(&self) -> Diagnostics {
        let mut diagnostics = Diagnostics::new();
        self.kalshi.validate(&mut diagnostics);
        self.ai.validate(&mut diagnostics);
        self.trading.validate(&mut diagnostics);
        diagnostics
    }
}

//! Bankroll and risk limits.

use super::diagnostic::Diagnostics;
use super::env::EnvReader;
use crate::error::ConfigError;

/// Smallest bankroll the bot will trade with, in dollars.
pub const MIN_BANKROLL: f64 = 10.0;

/// Trading parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct TradingConfig {
    pub initial_bankroll: f64,
    pub max_risk_per_trade: f64,
    pub max_total_risk: f64,
    pub max_correlated_risk: f64,
    pub max_daily_loss: f64,
    pub fractional_kelly: f64,
    pub min_edge: f64,
    pub max_positions: u32,
    pub drawdown_circuit_breaker: f64,
    pub live_trading: bool,
    pub auto_deposit_profits: bool,
}

impl Default for TradingConfig {
    fn default() -> Self {
        Self {
            initial_bankroll: 50.0,
            max_risk_per_trade: 1.0,
            max_total_risk: 10.0,
            max_correlated_risk: 6.0,
            max_daily_loss: 5.0,
            fractional_kelly: 0.25,
            min_edge: 0.05,
            max_positions: 10,
            drawdown_circuit_breaker: 0.20,
            live_trading: false,
            auto_deposit_profits: false,
        }
    }
}

impl TradingConfig {
    pub(crate) fn from_env(reader: &mut EnvReader<'_>) -> Self {
        let d = Self::default();
        Self {
            initial_bankroll: reader.parse("INITIAL_BANKROLL", d.initial_bankroll),
            max_risk_per_trade: reader.parse("MAX_RISK_PER_TRADE", d.max_risk_per_trade),
            max_total_risk: reader.parse("MAX_TOTAL_RISK", d.max_total_risk),
            max_correlated_risk: reader.parse("MAX_CORRELATED_RISK", d.max_correlated_risk),
            max_daily_loss: reader.parse("MAX_DAILY_LOSS", d.max_daily_loss),
            fractional_kelly: reader.parse("FRACTIONAL_KELLY", d.fractional_kelly),
            min_edge: reader.parse("MIN_EDGE", d.min_edge),
            max_positions: reader.parse("MAX_POSITIONS", d.max_positions),
            drawdown_circuit_breaker: reader
                .parse("DRAWDOWN_CIRCUIT_BREAKER", d.drawdown_circuit_breaker),
            live_trading: reader.flag("LIVE_TRADING", d.live_trading),
            auto_deposit_profits: reader.flag("AUTO_DEPOSIT_PROFITS", d.auto_deposit_profits),
        }
    }

    pub(crate) fn validate(&self, diagnostics: &mut Diagnostics) {
        if self.max_risk_per_trade.is_nan() || self.max_risk_per_trade <= 0.0 {
            diagnostics.push(ConfigError::InvalidValue {
                field: "MAX_RISK_PER_TRADE",
                reason: "must be positive".to_string(),
            });
        }
        if self.max_total_risk.is_nan() || self.max_total_risk < self.max_risk_per_trade {
            diagnostics.push(ConfigError::InvalidValue {
                field: "MAX_TOTAL_RISK",
                reason: "must be >= MAX_RISK_PER_TRADE".to_string(),
            });
        }
        if self.initial_bankroll.is_nan() || self.initial_bankroll < MIN_BANKROLL {
            diagnostics.push(ConfigError::InvalidValue {
                field: "INITIAL_BANKROLL",
                reason: format!("must be at least ${MIN_BANKROLL:.0}"),
            });
        }
    }
}

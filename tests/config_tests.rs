use std::collections::BTreeSet;

use kalshibot::config::{Config, EnsembleMode, Env, LogLevel};
use kalshibot::error::ConfigError;

const REQUIRED: [(&str, &str); 3] = [
    ("KALSHI_API_KEY", "k1"),
    ("KALSHI_API_SECRET", "s1"),
    ("OPENAI_API_KEY", "o1"),
];

fn required() -> Env {
    REQUIRED.into_iter().collect()
}

fn error_fields(env: &Env) -> BTreeSet<&'static str> {
    let (_, diagnostics) = Config::resolve(env);
    diagnostics.errors().map(ConfigError::field).collect()
}

#[test]
fn scenario_a_primary_only() {
    let (config, diagnostics) = Config::resolve(&required());

    assert_eq!(diagnostics.error_count(), 0);
    assert_eq!(diagnostics.warning_count(), 1);
    assert_eq!(
        diagnostics.warnings().next().map(|w| w.field()),
        Some("ANTHROPIC_API_KEY")
    );
    assert!(!config.ai.ensemble_enabled);
    assert_eq!(config.ai.gpt_weight, 1.0);
    assert_eq!(config.ai.claude_weight, 0.0);
}

#[test]
fn scenario_b_both_models() {
    let env = required().with("ANTHROPIC_API_KEY", "a1");
    let (config, diagnostics) = Config::resolve(&env);

    assert!(diagnostics.is_empty(), "{diagnostics}");
    assert!(config.ai.ensemble_enabled);
    assert_eq!(config.ai.ensemble_mode, EnsembleMode::Auto);
    assert_eq!(config.ai.gpt_weight, 0.55);
    assert_eq!(config.ai.claude_weight, 0.45);
}

#[test]
fn scenario_c_non_positive_risk_per_trade() {
    let env = required().with("MAX_RISK_PER_TRADE", "-1");
    let (_, diagnostics) = Config::resolve(&env);

    let errors: Vec<String> = diagnostics.errors().map(ToString::to_string).collect();
    assert_eq!(errors, vec!["MAX_RISK_PER_TRADE must be positive".to_string()]);
}

#[test]
fn scenario_d_bankroll_floor_does_not_short_circuit() {
    let env = required()
        .with("INITIAL_BANKROLL", "5")
        .with("MIN_EDGE", "0.08")
        .with("SCAN_INTERVAL", "60")
        .with("KALSHI_SANDBOX", "true");
    let (config, diagnostics) = Config::resolve(&env);

    let errors: Vec<String> = diagnostics.errors().map(ToString::to_string).collect();
    assert_eq!(errors, vec!["INITIAL_BANKROLL must be at least $10".to_string()]);

    assert_eq!(config.trading.initial_bankroll, 5.0);
    assert_eq!(config.trading.min_edge, 0.08);
    assert_eq!(config.market_scan.scan_interval_secs, 60);
    assert!(config.kalshi.sandbox);
    assert!(config.kalshi.base_url.contains("sandbox"));
}

#[test]
fn all_errors_are_reported_together() {
    let env = Env::new()
        .with("MAX_RISK_PER_TRADE", "0")
        .with("INITIAL_BANKROLL", "1")
        .with("MODEL_MAX_TOKENS", "lots");
    let fields = error_fields(&env);

    let expected: BTreeSet<_> = [
        "KALSHI_API_KEY",
        "KALSHI_API_SECRET",
        "OPENAI_API_KEY",
        "MAX_RISK_PER_TRADE",
        "INITIAL_BANKROLL",
        "MODEL_MAX_TOKENS",
    ]
    .into_iter()
    .collect();
    assert_eq!(fields, expected);
}

#[test]
fn missing_secondary_disables_ensemble_for_every_mode() {
    for mode in ["true", "false", "auto", "TRUE", "Auto"] {
        let env = required()
            .with("PROBABILITY_MODEL_ENSEMBLE", mode)
            .with("GPT_MODEL_WEIGHT", "0.8")
            .with("CLAUDE_MODEL_WEIGHT", "0.9");
        let (config, _) = Config::resolve(&env);

        assert!(!config.ai.ensemble_enabled, "mode {mode}");
        assert_eq!(config.ai.gpt_weight, 1.0, "mode {mode}");
        assert_eq!(config.ai.claude_weight, 0.0, "mode {mode}");
    }
}

#[test]
fn auto_with_secondary_enables_ensemble() {
    for weights in [("0.55", "0.45"), ("0.8", "0.9"), ("0", "0")] {
        let env = required()
            .with("ANTHROPIC_API_KEY", "a1")
            .with("PROBABILITY_MODEL_ENSEMBLE", "auto")
            .with("GPT_MODEL_WEIGHT", weights.0)
            .with("CLAUDE_MODEL_WEIGHT", weights.1);
        let (config, _) = Config::resolve(&env);
        assert!(config.ai.ensemble_enabled, "weights {weights:?}");
    }
}

#[test]
fn false_mode_disables_even_with_secondary() {
    let env = required()
        .with("ANTHROPIC_API_KEY", "a1")
        .with("PROBABILITY_MODEL_ENSEMBLE", "false");
    let (config, diagnostics) = Config::resolve(&env);

    assert!(diagnostics.is_empty());
    assert!(!config.ai.ensemble_enabled);
    assert_eq!(config.ai.gpt_weight, 1.0);
    assert_eq!(config.ai.claude_weight, 0.0);
}

#[test]
fn enabled_weights_are_taken_verbatim() {
    let env = required()
        .with("ANTHROPIC_API_KEY", "a1")
        .with("PROBABILITY_MODEL_ENSEMBLE", "true")
        .with("GPT_MODEL_WEIGHT", "0.7")
        .with("CLAUDE_MODEL_WEIGHT", "0.7");
    let (config, diagnostics) = Config::resolve(&env);

    assert!(diagnostics.is_empty());
    assert_eq!(config.ai.gpt_weight, 0.7);
    assert_eq!(config.ai.claude_weight, 0.7);
}

#[test]
fn adding_a_required_field_never_adds_unrelated_errors() {
    for mask in 0..(1u8 << REQUIRED.len()) {
        let base: Env = REQUIRED
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, kv)| *kv)
            .collect();
        let before = error_fields(&base);

        for (key, value) in REQUIRED {
            let after = error_fields(&base.clone().with(key, value));
            let unrelated_before: BTreeSet<_> = before.iter().filter(|f| **f != key).collect();
            let unrelated_after: BTreeSet<_> = after.iter().filter(|f| **f != key).collect();
            assert!(
                unrelated_after.is_subset(&unrelated_before),
                "adding {key} to mask {mask:#b} added errors"
            );
            assert!(!after.contains(key));
        }
    }
}

#[test]
fn resolution_is_idempotent() {
    let env = required()
        .with("ANTHROPIC_API_KEY", "a1")
        .with("MAX_TOTAL_RISK", "12.5")
        .with("LOG_LEVEL", "warning")
        .with("DISCORD_WEBHOOK_URL", "https://discord.com/api/webhooks/1/x");

    let first = Config::resolve(&env);
    let second = Config::resolve(&env);
    assert_eq!(first, second);
    assert_eq!(first.0.monitoring.log_level, LogLevel::Warning);
}

#[test]
fn documented_defaults() {
    let (config, _) = Config::resolve(&required());

    assert!(!config.kalshi.sandbox);
    assert_eq!(config.kalshi.base_url, "https://trading-api.kalshi.com");
    assert_eq!(config.ai.temperature, 0.3);
    assert_eq!(config.ai.max_tokens, 1000);
    assert_eq!(config.trading.initial_bankroll, 50.0);
    assert_eq!(config.trading.max_risk_per_trade, 1.0);
    assert_eq!(config.trading.max_total_risk, 10.0);
    assert_eq!(config.trading.max_correlated_risk, 6.0);
    assert_eq!(config.trading.max_daily_loss, 5.0);
    assert_eq!(config.trading.fractional_kelly, 0.25);
    assert_eq!(config.trading.max_positions, 10);
    assert_eq!(config.trading.drawdown_circuit_breaker, 0.20);
    assert!(!config.trading.live_trading);
    assert!(!config.trading.auto_deposit_profits);
    assert_eq!(config.market_scan.min_days_to_close, 1);
    assert_eq!(config.market_scan.max_days_to_close, 30);
    assert_eq!(config.market_scan.min_volume_24h, 50.0);
    assert_eq!(config.market_scan.correlation_threshold, 0.70);
    assert_eq!(config.monitoring.prometheus_port, 8000);
    assert_eq!(config.monitoring.log_level, LogLevel::Info);
    assert_eq!(
        config.monitoring.log_file.to_str(),
        Some("/app/logs/trading_bot.log")
    );
    assert!(config.monitoring.log_to_stdout);
    assert_eq!(config.monitoring.log_max_size_mb, 100);
    assert_eq!(config.monitoring.log_backup_count, 5);
    assert!(config.monitoring.discord_webhook_url.is_none());
}

#[test]
fn out_of_range_port_is_a_parse_error() {
    let fields = error_fields(&required().with("PROMETHEUS_PORT", "70000"));
    assert_eq!(fields, ["PROMETHEUS_PORT"].into_iter().collect());
}

#[test]
fn blank_ensemble_mode_is_not_auto() {
    let env = required()
        .with("ANTHROPIC_API_KEY", "a1")
        .with("PROBABILITY_MODEL_ENSEMBLE", "");
    let (config, diagnostics) = Config::resolve(&env);

    assert!(!config.ai.ensemble_enabled);
    assert_eq!(config.ai.ensemble_mode, EnsembleMode::False);
    assert_eq!(config.ai.gpt_weight, 1.0);
    assert_eq!(config.ai.claude_weight, 0.0);
    assert_eq!(
        diagnostics.errors().map(ConfigError::field).collect::<Vec<_>>(),
        vec!["PROBABILITY_MODEL_ENSEMBLE"]
    );
}

#[test]
fn credentials_and_flags_are_read_verbatim() {
    let env = Env::new()
        .with("KALSHI_API_KEY", " k1 ")
        .with("KALSHI_API_SECRET", "s1")
        .with("OPENAI_API_KEY", "o1")
        .with("LIVE_TRADING", " true");
    let (config, diagnostics) = Config::resolve(&env);

    assert!(!diagnostics.has_errors());
    assert_eq!(config.kalshi.api_key, " k1 ");
    assert!(!config.trading.live_trading);
}

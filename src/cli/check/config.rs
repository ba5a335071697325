use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::cli::output;
use crate::config::{Config, Diagnostics};
use crate::error::{Error, Result};

#[derive(Tabled)]
struct SettingRow {
    #[tabled(rename = "Group")]
    group: &'static str,
    #[tabled(rename = "Setting")]
    setting: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

impl SettingRow {
    fn new(group: &'static str, setting: &'static str, value: impl ToString) -> Self {
        Self {
            group,
            setting,
            value: value.to_string(),
        }
    }
}

/// Validate the resolved configuration without starting the bot.
///
/// # Errors
///
/// Returns [`Error::InvalidConfiguration`] if any error was found.
pub fn execute_config(config: &Config, diagnostics: &Diagnostics) -> Result<()> {
    output::header(env!("CARGO_PKG_VERSION"));
    output::section("Configuration Check");
    print_diagnostics(diagnostics);

    output::section("Summary");
    println!("{}", summary(config));

    output::section("Result");
    if diagnostics.has_errors() {
        output::error("Configuration has errors");
        return Err(Error::InvalidConfiguration {
            errors: diagnostics.error_count(),
        });
    }

    output::success("Configuration is valid");
    Ok(())
}

/// Print errors, then warnings, one per line on stderr.
pub fn print_diagnostics(diagnostics: &Diagnostics) {
    if diagnostics.is_empty() {
        output::success("No problems found");
        return;
    }

    for err in diagnostics.errors() {
        output::error(&err.to_string());
    }
    for warning in diagnostics.warnings() {
        output::warning(&warning.to_string());
    }
    output::field(
        "Totals",
        format!(
            "{} error(s), {} warning(s)",
            diagnostics.error_count(),
            diagnostics.warning_count()
        ),
    );
}

fn summary(config: &Config) -> Table {
    let rows = summary_rows(config);
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table
}

fn summary_rows(config: &Config) -> Vec<SettingRow> {
    let kalshi = &config.kalshi;
    let ai = &config.ai;
    let trading = &config.trading;
    let scan = &config.market_scan;
    let monitoring = &config.monitoring;

    vec![
        SettingRow::new("Kalshi", "API key", output::mask_secret(&kalshi.api_key)),
        SettingRow::new("Kalshi", "Sandbox", kalshi.sandbox),
        SettingRow::new("Kalshi", "Base URL", &kalshi.base_url),
        SettingRow::new("AI", "OpenAI key", output::mask_secret(&ai.openai_key)),
        SettingRow::new("AI", "Anthropic key", output::mask_secret(&ai.anthropic_key)),
        SettingRow::new("AI", "Ensemble mode", ai.ensemble_mode),
        SettingRow::new("AI", "Ensemble enabled", ai.ensemble_enabled),
        SettingRow::new(
            "AI",
            "Weights (GPT/Claude)",
            format!("{:.2} / {:.2}", ai.gpt_weight, ai.claude_weight),
        ),
        SettingRow::new("Trading", "Live trading", trading.live_trading),
        SettingRow::new("Trading", "Initial bankroll", format!("${:.2}", trading.initial_bankroll)),
        SettingRow::new(
            "Trading",
            "Risk per trade / total",
            format!("${:.2} / ${:.2}", trading.max_risk_per_trade, trading.max_total_risk),
        ),
        SettingRow::new("Trading", "Max positions", trading.max_positions),
        SettingRow::new("Scan", "Interval (s)", scan.scan_interval_secs),
        SettingRow::new(
            "Scan",
            "Days to close",
            format!("{}-{}", scan.min_days_to_close, scan.max_days_to_close),
        ),
        SettingRow::new("Monitoring", "Log level", monitoring.log_level),
        SettingRow::new("Monitoring", "Log file", monitoring.log_file.display()),
        SettingRow::new(
            "Monitoring",
            "Discord alerts",
            if monitoring.discord_webhook_url.is_some() { "enabled" } else { "disabled" },
        ),
    ]
}

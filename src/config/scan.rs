//! Market scanning cadence and filters.

use super::env::EnvReader;

/// Market scanning configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketScanConfig {
    pub scan_interval_secs: u64,
    pub min_days_to_close: u32,
    pub max_days_to_close: u32,
    pub min_volume_24h: f64,
    pub correlation_threshold: f64,
}

impl Default for MarketScanConfig {
    fn default() -> Self {
        Self {
            scan_interval_secs: 300,
            min_days_to_close: 1,
            max_days_to_close: 30,
            min_volume_24h: 50.0,
            correlation_threshold: 0.70,
        }
    }
}

impl MarketScanConfig {
    pub(crate) fn from_env(reader: &mut EnvReader<'_>) -> Self {
        let d = Self::default();
        Self {
            scan_interval_secs: reader.parse("SCAN_INTERVAL", d.scan_interval_secs),
            min_days_to_close: reader.parse("MARKET_AGE_FILTER_MIN_DAYS", d.min_days_to_close),
            max_days_to_close: reader.parse("MARKET_AGE_FILTER_MAX_DAYS", d.max_days_to_close),
            min_volume_24h: reader.parse("MIN_MARKET_VOLUME_24H", d.min_volume_24h),
            correlation_threshold: reader.parse("CORRELATION_THRESHOLD", d.correlation_threshold),
        }
    }
}

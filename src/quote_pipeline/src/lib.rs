//! Stock quote dashboard backend.
//!
//! Fetches OHLCV bars from a market-data provider, normalizes their
//! timestamps to US/Eastern, attaches SMA/EMA columns and summarizes the
//! period. The [`dashboard`] module keeps per-session state and produces the
//! values a UI shell renders.

use std::path::Path;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod errors;
pub mod models;
pub mod pipeline;
pub mod providers;

pub use config::DashboardConfig;
pub use errors::{ComputationError, Error};
pub use providers::{DataProvider, ProviderError, yahoo_chart::YahooChartProvider};

/// Loads the configuration at `config_path` (defaults when absent) and builds
/// the provider it describes.
pub fn create_client(config_path: Option<&Path>) -> Result<(DashboardConfig, YahooChartProvider), Error> {
    let config = DashboardConfig::load_or_default(config_path)?;
    let provider = YahooChartProvider::with_settings(&config.provider)?;
    Ok((config, provider))
}

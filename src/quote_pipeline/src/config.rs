//! Dashboard configuration.
//!
//! Loaded from a TOML file; every field has a default so a partial (or absent)
//! file is fine. `QUOTE_DASHBOARD_BASE_URL` overrides the provider endpoint.
//!
//! ```toml
//! [provider]
//! base_url = "https://query1.finance.yahoo.com/v8/finance/chart"
//! user_agent = "Mozilla/5.0"
//!
//! [dashboard]
//! default_symbol = "ADBE"
//! default_period = "1d"
//! watchlist = ["AAPL", "GOOGL", "AMZN", "MSFT"]
//!
//! [indicators]
//! window = 20
//! ema_min_periods = 1
//! ```

use std::path::Path;

use serde::Deserialize;
use shared_utils::{
    config::{ConfigError, read_toml},
    env::env_override,
};
use tracing::{info, warn};

use crate::{
    dashboard::watchlist::DEFAULT_WATCHLIST,
    models::period::Period,
    pipeline::indicators::IndicatorSettings,
    providers::yahoo_chart::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT},
};

pub const BASE_URL_ENV: &str = "QUOTE_DASHBOARD_BASE_URL";

pub const DEFAULT_SYMBOL: &str = "ADBE";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProviderSettings {
    pub base_url: String,
    pub user_agent: String,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardSettings {
    /// Ticker shown before the user picks one.
    pub default_symbol: String,
    pub default_period: Period,
    /// Symbols listed in the live-quote sidebar, in display order.
    pub watchlist: Vec<String>,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            default_symbol: DEFAULT_SYMBOL.to_string(),
            default_period: Period::OneDay,
            watchlist: DEFAULT_WATCHLIST.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub provider: ProviderSettings,
    pub dashboard: DashboardSettings,
    pub indicators: IndicatorSettings,
}

impl DashboardConfig {
    /// Reads `path`, applies environment overrides and validates the result.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let mut config: Self = read_toml(path)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Like [`load`](Self::load), but a missing file (or no path at all)
    /// yields the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) if path.exists() => Self::load(path),
            other => {
                if let Some(path) = other {
                    warn!(path = %path.display(), "config file not found, using defaults");
                }
                let mut config = Self::default();
                config.apply_env_overrides();
                config.validate()?;
                Ok(config)
            }
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Some(url) = env_override(BASE_URL_ENV) {
            info!(%url, "provider base url overridden from environment");
            self.provider.base_url = url;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.provider.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid("provider.base_url must not be empty".into()));
        }
        if self.dashboard.default_symbol.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "dashboard.default_symbol must not be empty".into(),
            ));
        }
        if let Some(pos) = self.dashboard.watchlist.iter().position(|s| s.trim().is_empty()) {
            return Err(ConfigError::Invalid(format!(
                "dashboard.watchlist[{pos}] must not be empty"
            )));
        }
        let watchlist = &self.dashboard.watchlist;
        if let Some((pos, symbol)) = watchlist
            .iter()
            .enumerate()
            .find(|(i, s)| watchlist[..*i].iter().any(|prev| prev.trim() == s.trim()))
        {
            return Err(ConfigError::Invalid(format!(
                "dashboard.watchlist[{pos}] repeats {:?}",
                symbol.trim()
            )));
        }
        if self.indicators.window == 0 {
            return Err(ConfigError::Invalid("indicators.window must be at least 1".into()));
        }
        Ok(())
    }
}

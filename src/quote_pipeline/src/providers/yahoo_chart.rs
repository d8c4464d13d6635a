//! Yahoo Finance chart endpoint (`/v8/finance/chart/{symbol}`).

pub mod params;
pub mod provider;
pub mod response;

pub use provider::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT, YahooChartProvider};

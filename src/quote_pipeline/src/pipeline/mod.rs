//! The quote transformation pipeline: Fetch → Normalize → Enrich → Summarize.
//!
//! Every step is a stateless function of its input. [`run`] chains them for
//! one symbol/period the way the dashboard does on each update.

pub mod currency;
pub mod fetch;
pub mod indicators;
pub mod normalize;
pub mod summarize;

use chrono::{DateTime, Utc};
use tracing::info;

pub use currency::{Currency, currency_of};
pub use fetch::{fetch, fetch_request};
pub use indicators::{IndicatorSettings, add_indicators, add_indicators_with};
pub use normalize::{DISPLAY_TIMEZONE, normalize};
pub use summarize::summarize;

use crate::{
    errors::Error,
    models::{enriched::EnrichedSeries, period::Period, summary::SummaryMetrics},
    providers::DataProvider,
};

/// Result of one full pipeline pass.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput {
    pub series: EnrichedSeries,
    pub summary: SummaryMetrics,
}

/// Runs all four steps for `symbol` over `period`.
pub async fn run(
    provider: &dyn DataProvider,
    symbol: &str,
    period: Period,
    now: DateTime<Utc>,
    settings: &IndicatorSettings,
) -> Result<PipelineOutput, Error> {
    let raw = fetch(provider, symbol, period, now).await?;
    let normalized = normalize(&raw);
    let series = add_indicators_with(&normalized, settings);
    let summary = summarize(&normalized)?;

    info!(
        symbol,
        %period,
        bars = normalized.len(),
        last_close = summary.last_close,
        percent_change = summary.percent_change,
        "pipeline complete"
    );
    Ok(PipelineOutput { series, summary })
}

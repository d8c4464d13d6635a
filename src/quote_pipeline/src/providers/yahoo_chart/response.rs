use chrono::{TimeZone, Utc};
use chrono_tz::Tz;
use serde::Deserialize;
use tracing::debug;

use crate::{
    models::{
        bar::{Bar, BarSeries, BarTime},
        request::FetchRequest,
    },
    providers::{ApiSnafu, InternalSnafu, InvalidSymbolSnafu, ProviderError},
};

/// Error code Yahoo uses for unknown or delisted symbols.
const NOT_FOUND_CODE: &str = "Not Found";

#[derive(Deserialize, Debug)]
pub struct ChartEnvelope {
    pub chart: ChartBody,
}

#[derive(Deserialize, Debug)]
pub struct ChartBody {
    pub result: Option<Vec<ChartResult>>,
    pub error: Option<ChartError>,
}

#[derive(Deserialize, Debug)]
pub struct ChartError {
    pub code: String,
    pub description: String,
}

#[derive(Deserialize, Debug)]
pub struct ChartResult {
    pub meta: ChartMeta,
    /// Bar open times, seconds since the Unix epoch. Absent when there are no bars.
    #[serde(default)]
    pub timestamp: Vec<i64>,
    pub indicators: ChartIndicators,
}

#[derive(Deserialize, Debug)]
pub struct ChartMeta {
    pub symbol: String,
    #[serde(rename = "exchangeTimezoneName")]
    pub exchange_timezone_name: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct ChartIndicators {
    #[serde(default)]
    pub quote: Vec<QuoteColumns>,
}

/// Column-oriented OHLCV, parallel to [`ChartResult::timestamp`].
#[derive(Deserialize, Debug, Default)]
pub struct QuoteColumns {
    #[serde(default)]
    pub open: Vec<Option<f64>>,
    #[serde(default)]
    pub high: Vec<Option<f64>>,
    #[serde(default)]
    pub low: Vec<Option<f64>>,
    #[serde(default)]
    pub close: Vec<Option<f64>>,
    #[serde(default)]
    pub volume: Vec<Option<f64>>,
}

/// Turns a decoded envelope into a series, or into the error it carries.
pub fn interpret(envelope: ChartEnvelope, request: &FetchRequest) -> Result<BarSeries, ProviderError> {
    if let Some(error) = envelope.chart.error {
        if error.code == NOT_FOUND_CODE {
            return InvalidSymbolSnafu {
                symbol: &request.symbol,
            }
            .fail();
        }
        return ApiSnafu {
            symbol: &request.symbol,
            message: format!("{}: {}", error.code, error.description),
        }
        .fail();
    }

    match envelope.chart.result.and_then(|r| r.into_iter().next()) {
        Some(result) => into_series(result, request),
        None => Ok(BarSeries::new(request.symbol.clone(), request.interval, Vec::new())),
    }
}

/// Zips the timestamp and quote columns into bars.
///
/// Rows with a missing price are skipped (Yahoo emits them for halted
/// minutes); a missing volume counts as zero. Timestamps are attached to the
/// exchange's own zone when Yahoo names one, UTC otherwise.
pub fn into_series(result: ChartResult, request: &FetchRequest) -> Result<BarSeries, ProviderError> {
    let zone = result
        .meta
        .exchange_timezone_name
        .as_deref()
        .and_then(|name| name.parse::<Tz>().ok())
        .unwrap_or(Tz::UTC);
    let quote = result.indicators.quote.into_iter().next().unwrap_or_default();

    let mut bars = Vec::with_capacity(result.timestamp.len());
    let mut skipped = 0usize;
    for (i, &ts) in result.timestamp.iter().enumerate() {
        let (Some(open), Some(high), Some(low), Some(close)) = (
            cell(&quote.open, i),
            cell(&quote.high, i),
            cell(&quote.low, i),
            cell(&quote.close, i),
        ) else {
            skipped += 1;
            continue;
        };
        let Some(instant) = Utc.timestamp_opt(ts, 0).single() else {
            return InternalSnafu {
                message: format!("timestamp {ts} is out of range"),
            }
            .fail();
        };
        let volume = cell(&quote.volume, i).map_or(0, |v| v.max(0.0).round() as u64);
        bars.push(Bar {
            timestamp: BarTime::Zoned(instant.with_timezone(&zone)),
            open,
            high,
            low,
            close,
            volume,
        });
    }

    debug!(
        symbol = %result.meta.symbol,
        bars = bars.len(),
        skipped,
        zone = %zone,
        "decoded chart response"
    );
    Ok(BarSeries::new(request.symbol.clone(), request.interval, bars))
}

fn cell(column: &[Option<f64>], i: usize) -> Option<f64> {
    column.get(i).copied().flatten()
}

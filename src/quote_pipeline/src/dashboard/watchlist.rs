//! Sidebar of live quotes for a fixed list of symbols.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, warn};

use crate::{
    errors::ComputationError,
    models::{bar::BarSeries, period::Period},
    pipeline::{fetch, normalize},
    providers::{DataProvider, ProviderError},
};

pub const DEFAULT_WATCHLIST: [&str; 4] = ["AAPL", "GOOGL", "AMZN", "MSFT"];

/// Today's move for one symbol, measured from the first bar's open.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LiveQuote {
    pub symbol: String,
    pub last_price: f64,
    pub change: f64,
    pub percent_change: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum QuoteStatus {
    Live(LiveQuote),
    /// The provider had no bars for today; the sidebar skips the symbol.
    NoData,
    Failed { message: String },
}

/// Derives a [`LiveQuote`] from one day of intraday bars.
pub fn live_quote(series: &BarSeries) -> Result<LiveQuote, ComputationError> {
    let (Some(first), Some(last)) = (series.bars.first(), series.bars.last()) else {
        return Err(ComputationError::InsufficientData {
            required: 1,
            actual: 0,
        });
    };
    if first.open == 0.0 {
        return Err(ComputationError::ZeroReferencePrice);
    }
    let change = last.close - first.open;
    Ok(LiveQuote {
        symbol: series.symbol.clone(),
        last_price: last.close,
        change,
        percent_change: change / first.open * 100.0,
    })
}

/// Polls every symbol in order, one provider call at a time.
///
/// A failing symbol is reported in place and does not stop the others. A
/// symbol listed twice is polled once, at its first position.
pub async fn poll_watchlist(
    provider: &dyn DataProvider,
    symbols: &[String],
    now: DateTime<Utc>,
) -> IndexMap<String, QuoteStatus> {
    let mut quotes = IndexMap::with_capacity(symbols.len());
    for symbol in symbols {
        if quotes.contains_key(symbol) {
            debug!(%symbol, "skipping repeated watch-list symbol");
            continue;
        }
        let status = match fetch(provider, symbol, Period::OneDay, now).await {
            Ok(raw) => match live_quote(&normalize(&raw)) {
                Ok(quote) => QuoteStatus::Live(quote),
                Err(e) => QuoteStatus::Failed {
                    message: e.to_string(),
                },
            },
            Err(ProviderError::EmptySeries { .. }) => QuoteStatus::NoData,
            Err(e) => {
                warn!(%symbol, error = %e, "watch-list fetch failed");
                QuoteStatus::Failed {
                    message: e.to_string(),
                }
            }
        };
        quotes.insert(symbol.clone(), status);
    }
    quotes
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;
    use crate::models::{
        bar::{Bar, BarTime},
        interval::Interval,
    };

    fn minute_bars(rows: &[(f64, f64)]) -> BarSeries {
        let start = Utc.with_ymd_and_hms(2024, 1, 16, 14, 30, 0).unwrap();
        let bars = rows
            .iter()
            .enumerate()
            .map(|(i, &(open, close))| Bar {
                timestamp: BarTime::Naive((start + Duration::minutes(i as i64)).naive_utc()),
                open,
                high: open.max(close),
                low: open.min(close),
                close,
                volume: 10,
            })
            .collect();
        BarSeries::new("MSFT", Interval::ONE_MINUTE, bars)
    }

    #[test]
    fn change_is_measured_from_first_open() {
        let q = live_quote(&minute_bars(&[(400.0, 401.0), (401.0, 399.0), (399.0, 410.0)])).unwrap();
        assert_eq!(q.symbol, "MSFT");
        assert_eq!(q.last_price, 410.0);
        assert!((q.change - 10.0).abs() < 1e-12);
        assert!((q.percent_change - 2.5).abs() < 1e-12);
    }

    #[test]
    fn single_bar_is_enough() {
        let q = live_quote(&minute_bars(&[(100.0, 95.0)])).unwrap();
        assert!((q.percent_change + 5.0).abs() < 1e-12);
    }

    #[test]
    fn empty_and_zero_open_are_errors() {
        assert!(matches!(
            live_quote(&minute_bars(&[])),
            Err(ComputationError::InsufficientData { .. })
        ));
        assert_eq!(
            live_quote(&minute_bars(&[(0.0, 1.0)])),
            Err(ComputationError::ZeroReferencePrice)
        );
    }
}

use snafu::ensure;

use crate::{
    models::{
        interval::{Interval, IntervalUnit},
        period::Period,
        request::{FetchRequest, FetchWindow},
    },
    providers::{ProviderError, ValidationSnafu},
};

/// How far back one request may reach with 1-minute bars.
pub const ONE_MINUTE_MAX_DAYS: i64 = 7;
/// Same for other minute intervals.
pub const MINUTE_MAX_DAYS: i64 = 60;
/// Same for hourly intervals.
pub const HOUR_MAX_DAYS: i64 = 730;

const SECONDS_PER_DAY: i64 = 86_400;

/// Yahoo's `range=` keyword for a named period.
///
/// `OneWeek` maps to `5d`, the vendor's trading-week notion; the pipeline
/// normally sends an explicit window for that period instead.
pub const fn range_keyword(period: Period) -> &'static str {
    match period {
        Period::OneDay => "1d",
        Period::OneWeek => "5d",
        Period::OneMonth => "1mo",
        Period::OneYear => "1y",
        Period::Max => "max",
    }
}

/// Upper bound, in days, of the history a named range covers.
const fn named_span_days(period: Period) -> Option<i64> {
    match period {
        Period::OneDay => Some(1),
        Period::OneWeek => Some(7),
        Period::OneMonth => Some(31),
        Period::OneYear => Some(366),
        Period::Max => None,
    }
}

/// Rejects requests Yahoo would answer with an error payload anyway.
pub fn validate_request(request: &FetchRequest) -> Result<(), ProviderError> {
    let symbol = request.symbol.trim();
    ensure!(
        !symbol.is_empty(),
        ValidationSnafu {
            message: "symbol must not be empty"
        }
    );
    ensure!(
        !symbol.contains(|c: char| c.is_whitespace() || c == '/' || c == '?'),
        ValidationSnafu {
            message: format!("symbol {symbol:?} contains invalid characters")
        }
    );

    let span_days = match &request.window {
        FetchWindow::Named(period) => named_span_days(*period),
        FetchWindow::Explicit { start, end } => {
            ensure!(
                start < end,
                ValidationSnafu {
                    message: format!("window start {start} is not before end {end}")
                }
            );
            let seconds = (*end - *start).num_seconds();
            Some((seconds + SECONDS_PER_DAY - 1) / SECONDS_PER_DAY)
        }
    };

    let interval = request.interval;
    if let Some(limit) = intraday_limit_days(interval) {
        ensure!(
            span_days.is_some_and(|days| days <= limit),
            ValidationSnafu {
                message: format!("{interval} bars are limited to {limit} days of history")
            }
        );
    }
    Ok(())
}

/// How many days back Yahoo serves bars of `interval`; `None` for daily and
/// coarser bars, which reach back to the listing date.
pub fn intraday_limit_days(interval: Interval) -> Option<i64> {
    if !interval.unit().is_intraday() {
        return None;
    }
    Some(match interval.unit() {
        IntervalUnit::Minute if interval.amount().get() == 1 => ONE_MINUTE_MAX_DAYS,
        IntervalUnit::Minute => MINUTE_MAX_DAYS,
        _ => HOUR_MAX_DAYS,
    })
}

/// Builds the query string for a chart request.
pub fn construct_params(request: &FetchRequest) -> Vec<(String, String)> {
    let mut query = vec![("interval".to_string(), request.interval.to_string())];
    match &request.window {
        FetchWindow::Named(period) => {
            query.push(("range".to_string(), range_keyword(*period).to_string()));
        }
        FetchWindow::Explicit { start, end } => {
            query.push(("period1".to_string(), start.timestamp().to_string()));
            query.push(("period2".to_string(), end.timestamp().to_string()));
        }
    }
    query.push(("includePrePost".to_string(), "false".to_string()));
    query
}

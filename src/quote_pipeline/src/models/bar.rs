//! Canonical in-memory representation of a price bar (OHLCV).
//!
//! Every [`DataProvider`](crate::providers::DataProvider) returns a
//! [`BarSeries`]; the pipeline steps take one by reference and hand back a new
//! one.

use std::fmt;

use chrono::{DateTime, NaiveDateTime, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use crate::models::interval::Interval;

/// When a bar was sampled.
///
/// Providers do not all attach zone information; a naive timestamp is kept as
/// such until [`normalize`](crate::pipeline::normalize) resolves it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BarTime {
    Naive(NaiveDateTime),
    Zoned(DateTime<Tz>),
}

impl BarTime {
    /// The instant this timestamp denotes, reading naive values as UTC.
    pub fn to_utc(&self) -> DateTime<Utc> {
        match self {
            BarTime::Naive(naive) => naive.and_utc(),
            BarTime::Zoned(dt) => dt.with_timezone(&Utc),
        }
    }

    pub fn in_zone(&self, tz: Tz) -> DateTime<Tz> {
        self.to_utc().with_timezone(&tz)
    }

    pub fn zone(&self) -> Option<Tz> {
        match self {
            BarTime::Naive(_) => None,
            BarTime::Zoned(dt) => Some(dt.timezone()),
        }
    }
}

impl fmt::Display for BarTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BarTime::Naive(naive) => write!(f, "{}", naive.format("%Y-%m-%d %H:%M:%S")),
            BarTime::Zoned(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S%:z")),
        }
    }
}

/// A single OHLCV observation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub timestamp: BarTime,

    /// Opening price.
    pub open: f64,

    /// Highest price during the bar interval.
    pub high: f64,

    /// Lowest price during the bar interval.
    pub low: f64,

    /// Closing price.
    pub close: f64,

    /// Shares traded during the bar interval.
    pub volume: u64,
}

/// All bars of one symbol for one period/interval request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarSeries {
    /// The symbol this data represents (e.g. "ADBE", "PETR4.SA").
    pub symbol: String,
    /// Spacing between consecutive bars.
    pub interval: Interval,
    /// Bars in ascending time order.
    pub bars: Vec<Bar>,
}

impl BarSeries {
    pub fn new(symbol: impl Into<String>, interval: Interval, bars: Vec<Bar>) -> Self {
        Self {
            symbol: symbol.into(),
            interval,
            bars,
        }
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }
}

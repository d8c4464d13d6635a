//! Lookback periods offered by the dashboard and their sampling intervals.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::interval::Interval;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown period {0:?}, expected one of 1d, 1wk, 1mo, 1y, max")]
pub struct UnknownPeriodError(pub String);

/// Total lookback span requested from the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "1d")]
    OneDay,
    #[serde(rename = "1wk")]
    OneWeek,
    #[serde(rename = "1mo")]
    OneMonth,
    #[serde(rename = "1y")]
    OneYear,
    #[serde(rename = "max")]
    Max,
}

impl Period {
    pub const ALL: [Period; 5] = [
        Period::OneDay,
        Period::OneWeek,
        Period::OneMonth,
        Period::OneYear,
        Period::Max,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Period::OneDay => "1d",
            Period::OneWeek => "1wk",
            Period::OneMonth => "1mo",
            Period::OneYear => "1y",
            Period::Max => "max",
        }
    }

    /// Bar spacing used for this period: fine for short windows, coarse for
    /// long ones, so payloads stay bounded.
    pub const fn interval(self) -> Interval {
        match self {
            Period::OneDay => Interval::ONE_MINUTE,
            Period::OneWeek => Interval::THIRTY_MINUTES,
            Period::OneMonth => Interval::ONE_DAY,
            Period::OneYear | Period::Max => Interval::ONE_WEEK,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = UnknownPeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Period::ALL
            .into_iter()
            .find(|p| p.as_str() == s.trim())
            .ok_or_else(|| UnknownPeriodError(s.to_string()))
    }
}

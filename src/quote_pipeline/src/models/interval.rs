//! Sampling interval between consecutive bars.
//!
//! An [`Interval`] pairs a non-zero amount with an [`IntervalUnit`] and renders
//! in the compact notation market-data vendors use on the wire (`"1m"`,
//! `"30m"`, `"1d"`, `"1wk"`, `"1mo"`).
//!
//! ```
//! use quote_pipeline::models::interval::{Interval, IntervalUnit};
//!
//! let iv = Interval::THIRTY_MINUTES;
//! assert_eq!(iv.amount().get(), 30);
//! assert_eq!(iv.unit(), IntervalUnit::Minute);
//! assert_eq!(iv.to_string(), "30m");
//! ```

use std::{fmt, num::NonZeroU32};

use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntervalUnit {
    Minute,
    Hour,
    Day,
    Week,
    Month,
}

impl IntervalUnit {
    const fn suffix(self) -> &'static str {
        match self {
            IntervalUnit::Minute => "m",
            IntervalUnit::Hour => "h",
            IntervalUnit::Day => "d",
            IntervalUnit::Week => "wk",
            IntervalUnit::Month => "mo",
        }
    }

    /// Minute and hour bars are intraday; vendors cap how far back they go.
    pub const fn is_intraday(self) -> bool {
        matches!(self, IntervalUnit::Minute | IntervalUnit::Hour)
    }
}

/// An interval = amount × unit (e.g. 1-Minute, 30-Minute, 1-Week).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    amount: NonZeroU32,
    unit: IntervalUnit,
}

const fn non_zero(n: u32) -> NonZeroU32 {
    match NonZeroU32::new(n) {
        Some(v) => v,
        None => panic!("interval amount must be non-zero"),
    }
}

impl Interval {
    pub const ONE_MINUTE: Interval = Interval::new(non_zero(1), IntervalUnit::Minute);
    pub const THIRTY_MINUTES: Interval = Interval::new(non_zero(30), IntervalUnit::Minute);
    pub const ONE_DAY: Interval = Interval::new(non_zero(1), IntervalUnit::Day);
    pub const ONE_WEEK: Interval = Interval::new(non_zero(1), IntervalUnit::Week);

    pub const fn new(amount: NonZeroU32, unit: IntervalUnit) -> Self {
        Self { amount, unit }
    }

    pub const fn amount(&self) -> NonZeroU32 {
        self.amount
    }

    pub const fn unit(&self) -> IntervalUnit {
        self.unit
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount.get(), self.unit.suffix())
    }
}

impl Serialize for Interval {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_vendor_notation() {
        assert_eq!(Interval::ONE_MINUTE.to_string(), "1m");
        assert_eq!(Interval::THIRTY_MINUTES.to_string(), "30m");
        assert_eq!(Interval::ONE_WEEK.to_string(), "1wk");
    }

    #[test]
    fn only_minutes_and_hours_are_intraday() {
        assert!(IntervalUnit::Minute.is_intraday());
        assert!(IntervalUnit::Hour.is_intraday());
        assert!(!IntervalUnit::Day.is_intraday());
        assert!(!IntervalUnit::Week.is_intraday());
    }
}

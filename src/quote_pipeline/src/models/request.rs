use chrono::{DateTime, Duration, Utc};

use crate::models::{interval::Interval, period::Period};

/// Length of the explicit window used for [`Period::OneWeek`]. Vendors tend
/// to read their own "1wk"/"5d" keyword as five trading days.
pub const WEEK_WINDOW_DAYS: i64 = 7;

/// How much history to ask for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchWindow {
    /// The provider's own named range.
    Named(Period),

    /// Explicit `[start, end]` window (UTC).
    Explicit {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
}

/// Vendor-agnostic parameters for one bar request.
///
/// This is the standard input of every
/// [`DataProvider`](crate::providers::DataProvider) implementation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchRequest {
    /// Ticker symbol as the provider knows it (e.g. `"ADBE"`, `"PETR4.SA"`).
    pub symbol: String,

    /// Period the user picked.
    pub period: Period,

    /// Bar spacing. Validation of allowed values is left to each provider.
    pub interval: Interval,

    /// Window actually requested from the provider.
    pub window: FetchWindow,
}

impl FetchRequest {
    /// Builds the request for `period`, using the period's interval.
    ///
    /// `OneWeek` becomes an explicit seven-calendar-day window ending at
    /// `now`; every other period is requested by name.
    pub fn for_period(symbol: impl Into<String>, period: Period, now: DateTime<Utc>) -> Self {
        let window = match period {
            Period::OneWeek => FetchWindow::Explicit {
                start: now - Duration::days(WEEK_WINDOW_DAYS),
                end: now,
            },
            other => FetchWindow::Named(other),
        };
        Self {
            symbol: symbol.into(),
            period,
            interval: period.interval(),
            window,
        }
    }

    pub fn with_interval(mut self, interval: Interval) -> Self {
        self.interval = interval;
        self
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn week_is_an_explicit_seven_day_window() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 18, 45, 12).unwrap();
        let req = FetchRequest::for_period("ADBE", Period::OneWeek, now);

        assert_eq!(
            req.window,
            FetchWindow::Explicit {
                start: Utc.with_ymd_and_hms(2024, 3, 8, 18, 45, 12).unwrap(),
                end: now,
            }
        );
        assert_eq!(req.interval, Interval::THIRTY_MINUTES);
    }

    #[test]
    fn other_periods_are_requested_by_name() {
        let now = Utc::now();
        for period in [Period::OneDay, Period::OneMonth, Period::OneYear, Period::Max] {
            let req = FetchRequest::for_period("AAPL", period, now);
            assert_eq!(req.window, FetchWindow::Named(period));
            assert_eq!(req.interval, period.interval());
        }
    }

    #[test]
    fn interval_can_be_overridden() {
        let req = FetchRequest::for_period("AAPL", Period::OneMonth, Utc::now())
            .with_interval(Interval::ONE_WEEK);
        assert_eq!(req.interval, Interval::ONE_WEEK);
        assert_eq!(req.window, FetchWindow::Named(Period::OneMonth));
    }
}

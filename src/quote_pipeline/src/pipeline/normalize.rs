use chrono_tz::Tz;

use crate::models::bar::{Bar, BarSeries, BarTime};

/// Zone every normalized timestamp is expressed in (the exchange the
/// dashboard targets).
pub const DISPLAY_TIMEZONE: Tz = chrono_tz::US::Eastern;

/// Re-expresses every bar in [`DISPLAY_TIMEZONE`].
///
/// Naive timestamps are read as UTC. Output bars are ordered by instant; if a
/// provider repeats an instant (Yahoo does for the live bar) the one delivered
/// last wins. Applying this twice gives the same series as applying it once.
pub fn normalize(raw: &BarSeries) -> BarSeries {
    let mut bars: Vec<Bar> = raw
        .bars
        .iter()
        .map(|bar| Bar {
            timestamp: BarTime::Zoned(bar.timestamp.in_zone(DISPLAY_TIMEZONE)),
            ..bar.clone()
        })
        .collect();
    bars.sort_by_key(|bar| bar.timestamp.to_utc());

    let mut unique: Vec<Bar> = Vec::with_capacity(bars.len());
    for bar in bars {
        match unique.last_mut() {
            Some(prev) if prev.timestamp.to_utc() == bar.timestamp.to_utc() => *prev = bar,
            _ => unique.push(bar),
        }
    }

    BarSeries::new(raw.symbol.clone(), raw.interval, unique)
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone, Utc};

    use super::*;
    use crate::models::interval::Interval;

    fn bar(timestamp: BarTime, close: f64) -> Bar {
        Bar {
            timestamp,
            open: close,
            high: close,
            low: close,
            close,
            volume: 100,
        }
    }

    #[test]
    fn naive_timestamps_are_read_as_utc() {
        let naive = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap();
        let raw = BarSeries::new("ADBE", Interval::ONE_DAY, vec![bar(BarTime::Naive(naive), 1.0)]);

        let out = normalize(&raw);
        let BarTime::Zoned(ts) = &out.bars[0].timestamp else {
            panic!("expected a zoned timestamp");
        };
        assert_eq!(ts.timezone(), DISPLAY_TIMEZONE);
        assert_eq!(ts.to_string(), "2024-01-15 09:30:00 EST");
    }

    #[test]
    fn zoned_timestamps_keep_their_instant() {
        let sp = chrono_tz::America::Sao_Paulo
            .with_ymd_and_hms(2024, 7, 1, 10, 0, 0)
            .unwrap();
        let raw = BarSeries::new("PETR4.SA", Interval::ONE_DAY, vec![bar(BarTime::Zoned(sp), 1.0)]);

        let out = normalize(&raw);
        assert_eq!(out.bars[0].timestamp.to_utc(), Utc.with_ymd_and_hms(2024, 7, 1, 13, 0, 0).unwrap());
        assert_eq!(out.bars[0].timestamp.zone(), Some(DISPLAY_TIMEZONE));
    }

    #[test]
    fn sorts_and_keeps_last_duplicate() {
        let t = |h| BarTime::Zoned(Utc.with_ymd_and_hms(2024, 1, 15, h, 0, 0).unwrap().with_timezone(&Tz::UTC));
        let raw = BarSeries::new(
            "ADBE",
            Interval::ONE_DAY,
            vec![bar(t(16), 3.0), bar(t(14), 1.0), bar(t(16), 4.0), bar(t(15), 2.0)],
        );

        let out = normalize(&raw);
        assert_eq!(out.closes(), vec![1.0, 2.0, 4.0]);
    }

    #[test]
    fn does_not_touch_the_input() {
        let naive = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap();
        let raw = BarSeries::new("ADBE", Interval::ONE_DAY, vec![bar(BarTime::Naive(naive), 1.0)]);
        let copy = raw.clone();
        let _ = normalize(&raw);
        assert_eq!(raw, copy);
        assert_eq!(raw.bars[0].timestamp.zone(), None);
    }

    #[test]
    fn idempotent_across_dst_change() {
        let start = Utc.with_ymd_and_hms(2024, 3, 9, 12, 0, 0).unwrap();
        let bars = (0..48)
            .map(|h| {
                let ts = start + chrono::Duration::hours(h);
                bar(BarTime::Naive(ts.naive_utc()), h as f64)
            })
            .collect();
        let raw = BarSeries::new("ADBE", Interval::ONE_DAY, bars);

        let once = normalize(&raw);
        let twice = normalize(&once);
        assert_eq!(once, twice);
        for (a, b) in once.bars.iter().zip(&twice.bars) {
            assert_eq!(a.timestamp.zone(), b.timestamp.zone());
            assert_eq!(a.timestamp.to_string(), b.timestamp.to_string());
        }
    }
}

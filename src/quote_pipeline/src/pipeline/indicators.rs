//! Moving averages over the close series.
//!
//! Both averages follow the conventions of the pandas-based `ta` library:
//!
//! * SMA(i) is the arithmetic mean of the `window` closes ending at `i`; it
//!   has no value for the first `window - 1` positions.
//! * EMA uses `alpha = 2 / (window + 1)`, starts from the first close and
//!   recurses `ema[i] = alpha * close[i] + (1 - alpha) * ema[i - 1]`
//!   (pandas `ewm(adjust=False)`).
//!
//! `ta` additionally hides EMA values until `window` closes have been seen.
//! [`IndicatorSettings::ema_min_periods`] controls that masking; the default
//! of 1 shows the EMA from the first bar.

use serde::{Deserialize, Serialize};

use crate::models::{bar::BarSeries, enriched::EnrichedSeries};

pub const DEFAULT_WINDOW: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorSettings {
    pub window: usize,
    /// Number of closes the EMA must have seen before it reports a value.
    pub ema_min_periods: usize,
}

impl Default for IndicatorSettings {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
            ema_min_periods: 1,
        }
    }
}

impl IndicatorSettings {
    /// Output identical to `ta.trend.ema_indicator` with `fillna=False`.
    pub const fn library_parity(window: usize) -> Self {
        Self {
            window,
            ema_min_periods: window,
        }
    }
}

/// Simple moving average, aligned with `values`.
pub fn sma(values: &[f64], window: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if window == 0 {
        return out;
    }
    for (start, span) in values.windows(window).enumerate() {
        out[start + window - 1] = Some(span.iter().sum::<f64>() / window as f64);
    }
    out
}

/// Exponential moving average, aligned with `values`.
pub fn ema(values: &[f64], window: usize, min_periods: usize) -> Vec<Option<f64>> {
    if window == 0 {
        return vec![None; values.len()];
    }
    let alpha = 2.0 / (window as f64 + 1.0);
    let mut last: Option<f64> = None;
    values
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            let value = match last {
                Some(prev) => alpha * close + (1.0 - alpha) * prev,
                None => close,
            };
            last = Some(value);
            (i + 1 >= min_periods).then_some(value)
        })
        .collect()
}

/// Attaches SMA-20 and EMA-20 columns.
pub fn add_indicators(series: &BarSeries) -> EnrichedSeries {
    add_indicators_with(series, &IndicatorSettings::default())
}

pub fn add_indicators_with(series: &BarSeries, settings: &IndicatorSettings) -> EnrichedSeries {
    let closes = series.closes();
    EnrichedSeries {
        series: series.clone(),
        window: settings.window,
        sma: sma(&closes, settings.window),
        ema: ema(&closes, settings.window, settings.ema_min_periods),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close_enough(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn sma_is_undefined_until_the_window_fills() {
        let values: Vec<f64> = (1..=25).map(f64::from).collect();
        let out = sma(&values, 20);

        assert_eq!(out.len(), 25);
        assert!(out[..19].iter().all(Option::is_none));
        // mean(1..=20) = 10.5, then it slides by one each step
        assert!(close_enough(out[19].unwrap(), 10.5));
        assert!(close_enough(out[24].unwrap(), 15.5));
    }

    #[test]
    fn sma_of_short_input_is_all_none() {
        assert_eq!(sma(&[1.0, 2.0, 3.0], 5), vec![None, None, None]);
        assert!(sma(&[], 20).is_empty());
    }

    #[test]
    fn zero_window_yields_no_values() {
        assert_eq!(sma(&[1.0, 2.0], 0), vec![None, None]);
        assert_eq!(ema(&[1.0, 2.0], 0, 1), vec![None, None]);
    }

    #[test]
    fn ema_is_seeded_by_first_close() {
        let out = ema(&[10.0, 20.0, 20.0], 3, 1);
        // alpha = 0.5
        assert_eq!(out[0], Some(10.0));
        assert!(close_enough(out[1].unwrap(), 15.0));
        assert!(close_enough(out[2].unwrap(), 17.5));
    }

    #[test]
    fn ema_of_constant_series_is_constant() {
        let out = ema(&[42.0; 30], 20, 1);
        assert!(out.iter().all(|v| close_enough(v.unwrap(), 42.0)));
    }

    #[test]
    fn ema_uses_alpha_two_over_window_plus_one() {
        let alpha = 2.0 / 21.0;
        let out = ema(&[100.0, 110.0], 20, 1);
        assert!(close_enough(out[1].unwrap(), alpha * 110.0 + (1.0 - alpha) * 100.0));
    }

    #[test]
    fn library_parity_masks_the_warm_up() {
        let values: Vec<f64> = (0..25).map(|i| 100.0 + i as f64).collect();
        let settings = IndicatorSettings::library_parity(20);
        let masked = ema(&values, settings.window, settings.ema_min_periods);
        let full = ema(&values, 20, 1);

        assert!(masked[..19].iter().all(Option::is_none));
        assert_eq!(&masked[19..], &full[19..]);
    }
}

use crate::{
    errors::ComputationError,
    models::{bar::BarSeries, summary::SummaryMetrics},
};

/// Bars needed to compare the last close with the one before it.
pub const MIN_BARS: usize = 2;

/// Computes the headline numbers of `series`.
///
/// Change figures compare the last close with the immediately preceding one.
/// A preceding close of exactly zero is reported as
/// [`ComputationError::ZeroReferencePrice`] rather than an infinite percentage.
pub fn summarize(series: &BarSeries) -> Result<SummaryMetrics, ComputationError> {
    let [.., previous, last] = series.bars.as_slice() else {
        return Err(ComputationError::InsufficientData {
            required: MIN_BARS,
            actual: series.len(),
        });
    };
    if previous.close == 0.0 {
        return Err(ComputationError::ZeroReferencePrice);
    }

    let price_change = last.close - previous.close;
    Ok(SummaryMetrics {
        last_close: last.close,
        price_change,
        percent_change: price_change / previous.close * 100.0,
        period_high: series.bars.iter().map(|b| b.high).fold(f64::NEG_INFINITY, f64::max),
        period_low: series.bars.iter().map(|b| b.low).fold(f64::INFINITY, f64::min),
        total_volume: series.bars.iter().map(|b| b.volume).sum(),
    })
}

//! A bar series with moving-average columns attached.

use serde::Serialize;

use crate::models::bar::{BarSeries, BarTime};

/// [`BarSeries`] plus SMA and EMA columns, one entry per bar.
///
/// `None` marks positions where the indicator has no value yet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedSeries {
    pub series: BarSeries,
    /// Averaging window both columns were computed with.
    pub window: usize,
    pub sma: Vec<Option<f64>>,
    pub ema: Vec<Option<f64>>,
}

/// One row of the indicator table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorRow<'a> {
    pub timestamp: &'a BarTime,
    pub sma: Option<f64>,
    pub ema: Option<f64>,
}

impl EnrichedSeries {
    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn sma_label(&self) -> String {
        format!("SMA_{}", self.window)
    }

    pub fn ema_label(&self) -> String {
        format!("EMA_{}", self.window)
    }

    pub fn rows(&self) -> impl Iterator<Item = IndicatorRow<'_>> {
        self.series
            .bars
            .iter()
            .zip(self.sma.iter().zip(self.ema.iter()))
            .map(|(bar, (sma, ema))| IndicatorRow {
                timestamp: &bar.timestamp,
                sma: *sma,
                ema: *ema,
            })
    }
}

use serde::Serialize;

/// Headline numbers for one series. Derived on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryMetrics {
    pub last_close: f64,
    /// `last_close - previous close`.
    pub price_change: f64,
    /// `price_change / previous close * 100`.
    pub percent_change: f64,
    pub period_high: f64,
    pub period_low: f64,
    pub total_volume: u64,
}

//! Render-ready descriptions of the dashboard: metric tiles, chart traces and
//! table rows. Nothing here draws; a front-end turns these into widgets.

use serde::Serialize;

use crate::{
    dashboard::{state::Snapshot, watchlist::LiveQuote},
    models::bar::Bar,
    pipeline::Currency,
};

/// Fixed chart height, in pixels.
pub const CHART_HEIGHT: u32 = 600;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ChartKind {
    #[default]
    Candlestick,
    Line,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Overlay {
    Sma,
    Ema,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricTile {
    pub label: String,
    pub value: String,
    pub delta: Option<String>,
}

pub fn format_price(value: f64, currency: Currency) -> String {
    format!("{value:.2} {currency}")
}

pub fn format_delta(change: f64, percent: f64) -> String {
    format!("{change:.2} ({percent:.2}%)")
}

/// `1234567` → `"1,234,567"`.
pub fn format_volume(volume: u64) -> String {
    let digits = volume.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Last price, high, low and volume tiles, in that order.
pub fn metric_tiles(snapshot: &Snapshot) -> Vec<MetricTile> {
    let m = &snapshot.summary;
    let currency = snapshot.currency;
    vec![
        MetricTile {
            label: format!("{} Last Price", snapshot.symbol),
            value: format_price(m.last_close, currency),
            delta: Some(format_delta(m.price_change, m.percent_change)),
        },
        MetricTile {
            label: "High".into(),
            value: format_price(m.period_high, currency),
            delta: None,
        },
        MetricTile {
            label: "Low".into(),
            value: format_price(m.period_low, currency),
            delta: None,
        },
        MetricTile {
            label: "Volume".into(),
            value: format_volume(m.total_volume),
            delta: None,
        },
    ]
}

/// Sidebar tile; watch-list symbols are all US listings.
pub fn quote_tile(quote: &LiveQuote) -> MetricTile {
    MetricTile {
        label: quote.symbol.clone(),
        value: format_price(quote.last_price, Currency::Usd),
        delta: Some(format_delta(quote.change, quote.percent_change)),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandlePoint {
    pub time: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinePoint {
    pub time: String,
    /// `None` leaves a gap (indicator warm-up).
    pub value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Trace {
    Candlestick { name: String, points: Vec<CandlePoint> },
    Line { name: String, points: Vec<LinePoint> },
}

impl Trace {
    pub fn name(&self) -> &str {
        match self {
            Trace::Candlestick { name, .. } | Trace::Line { name, .. } => name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub title: String,
    pub x_axis_title: String,
    pub y_axis_title: String,
    pub height: u32,
    pub traces: Vec<Trace>,
}

impl ChartSpec {
    /// Price trace first, then one line per requested overlay.
    pub fn build(snapshot: &Snapshot, kind: ChartKind, overlays: &[Overlay]) -> Self {
        let enriched = &snapshot.series;
        let bars = &enriched.series.bars;
        let mut traces = Vec::with_capacity(1 + overlays.len());

        traces.push(match kind {
            ChartKind::Candlestick => Trace::Candlestick {
                name: snapshot.symbol.clone(),
                points: bars.iter().map(candle_point).collect(),
            },
            ChartKind::Line => Trace::Line {
                name: "Close".into(),
                points: bars
                    .iter()
                    .map(|b| LinePoint {
                        time: b.timestamp.to_string(),
                        value: Some(b.close),
                    })
                    .collect(),
            },
        });

        for overlay in overlays {
            let (label, column) = match overlay {
                Overlay::Sma => ("SMA", &enriched.sma),
                Overlay::Ema => ("EMA", &enriched.ema),
            };
            traces.push(Trace::Line {
                name: format!("{label} {}", enriched.window),
                points: bars
                    .iter()
                    .zip(column)
                    .map(|(b, v)| LinePoint {
                        time: b.timestamp.to_string(),
                        value: *v,
                    })
                    .collect(),
            });
        }

        Self {
            title: format!("{} {} Chart", snapshot.symbol, snapshot.period.as_str().to_uppercase()),
            x_axis_title: "Time".into(),
            y_axis_title: "Price (USD)".into(),
            height: CHART_HEIGHT,
            traces,
        }
    }
}

fn candle_point(bar: &Bar) -> CandlePoint {
    CandlePoint {
        time: bar.timestamp.to_string(),
        open: bar.open,
        high: bar.high,
        low: bar.low,
        close: bar.close,
    }
}

pub const HISTORICAL_HEADERS: [&str; 6] = ["Datetime", "Open", "High", "Low", "Close", "Volume"];

/// Cells of the "Historical Data" table, one row per bar.
pub fn historical_rows(snapshot: &Snapshot) -> Vec<[String; 6]> {
    snapshot
        .series
        .series
        .bars
        .iter()
        .map(|b| {
            [
                b.timestamp.to_string(),
                format!("{:.2}", b.open),
                format!("{:.2}", b.high),
                format!("{:.2}", b.low),
                format!("{:.2}", b.close),
                b.volume.to_string(),
            ]
        })
        .collect()
}

/// Header and cells of the "Technical Indicators" table.
///
/// Undefined values render as `"-"`. With the default settings the EMA column
/// is filled from the first row; build the state with
/// [`IndicatorSettings::library_parity`](crate::pipeline::IndicatorSettings::library_parity)
/// to blank its warm-up rows the way the `ta` library does.
pub fn indicator_table(snapshot: &Snapshot) -> ([String; 3], Vec<[String; 3]>) {
    let enriched = &snapshot.series;
    let header = ["Datetime".to_string(), enriched.sma_label(), enriched.ema_label()];
    let rows = enriched
        .rows()
        .map(|row| [row.timestamp.to_string(), optional(row.sma), optional(row.ema)])
        .collect();
    (header, rows)
}

fn optional(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.2}"))
}

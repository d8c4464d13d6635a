use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    dashboard::transaction::{TransactionKind, TransactionRecord, register_transaction},
    errors::Error,
    models::{enriched::EnrichedSeries, period::Period, summary::SummaryMetrics},
    pipeline::{self, Currency, IndicatorSettings, currency_of},
    providers::DataProvider,
};

/// Everything the UI renders after a successful update.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub symbol: String,
    pub period: Period,
    pub currency: Currency,
    pub series: EnrichedSeries,
    pub summary: SummaryMetrics,
    pub fetched_at: DateTime<Utc>,
}

/// What the main panel shows.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ViewState {
    /// Nothing fetched yet; the UI renders no metrics, chart or tables.
    #[default]
    Empty,
    Ready(Box<Snapshot>),
}

/// Per-session application state, owned by the UI shell and passed by
/// reference into the pipeline and render code.
#[derive(Debug, Default)]
pub struct DashboardState {
    view: ViewState,
    last_transaction: Option<TransactionRecord>,
    settings: IndicatorSettings,
}

impl DashboardState {
    pub fn new(settings: IndicatorSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        match &self.view {
            ViewState::Ready(snapshot) => Some(snapshot.as_ref()),
            ViewState::Empty => None,
        }
    }

    pub fn last_transaction(&self) -> Option<&TransactionRecord> {
        self.last_transaction.as_ref()
    }

    /// Refreshes the view for `symbol` over `period`.
    ///
    /// All or nothing: on error the previous view stays in place.
    pub async fn update(
        &mut self,
        provider: &dyn DataProvider,
        symbol: &str,
        period: Period,
        now: DateTime<Utc>,
    ) -> Result<(), Error> {
        let output = pipeline::run(provider, symbol, period, now, &self.settings).await?;
        self.view = ViewState::Ready(Box::new(Snapshot {
            symbol: symbol.to_string(),
            period,
            currency: currency_of(symbol),
            series: output.series,
            summary: output.summary,
            fetched_at: now,
        }));
        Ok(())
    }

    /// Records a purchase or sale against the current view.
    pub fn register(&mut self, kind: TransactionKind, at: DateTime<Utc>) -> &TransactionRecord {
        let record = register_transaction(kind, self.snapshot(), at);
        self.last_transaction.insert(record)
    }
}

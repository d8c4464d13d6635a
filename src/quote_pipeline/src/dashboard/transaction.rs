//! "Register sale or purchase": a log entry, not a trade.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::dashboard::state::Snapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum TransactionKind {
    Purchase,
    Sale,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TransactionKind::Purchase => "Purchase",
            TransactionKind::Sale => "Sale",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionRecord {
    pub kind: TransactionKind,
    pub recorded_at: DateTime<Utc>,
    pub current_value: f64,
    pub message: String,
}

/// Value quoted on the registration form: the close of the first bar in
/// view, or 0 when nothing has been fetched.
pub fn current_value(snapshot: Option<&Snapshot>) -> f64 {
    snapshot
        .and_then(|s| s.series.series.bars.first())
        .map_or(0.0, |bar| bar.close)
}

pub fn register_transaction(
    kind: TransactionKind,
    snapshot: Option<&Snapshot>,
    at: DateTime<Utc>,
) -> TransactionRecord {
    let value = current_value(snapshot);
    let message = format!(
        "{kind} registered successfully! Date: {}, Current value: R$ {value:.2}",
        at.format("%Y-%m-%d %H:%M:%S")
    );
    info!(%kind, value, symbol = snapshot.map(|s| s.symbol.as_str()), "transaction registered");
    TransactionRecord {
        kind,
        recorded_at: at,
        current_value: value,
        message,
    }
}

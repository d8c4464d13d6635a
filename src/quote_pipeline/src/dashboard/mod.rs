//! Application state and render-ready views behind the dashboard UI.
//!
//! [`DashboardState`] owns the current view and the last registered
//! transaction. The [`display`] helpers turn a [`Snapshot`] into tiles,
//! chart traces and table rows; [`watchlist`] feeds the live-quote sidebar.

pub mod display;
pub mod state;
pub mod transaction;
pub mod watchlist;

pub use display::{ChartKind, ChartSpec, MetricTile, Overlay, metric_tiles, quote_tile};
pub use state::{DashboardState, Snapshot, ViewState};
pub use transaction::{TransactionKind, TransactionRecord, register_transaction};
pub use watchlist::{DEFAULT_WATCHLIST, LiveQuote, QuoteStatus, live_quote, poll_watchlist};

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::{
    dashboard::{ChartKind, Overlay, TransactionKind},
    models::period::Period,
};

#[derive(Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Path to the config file (quote_dashboard.toml). Defaults apply when absent.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set (e.g. "info", "quote_pipeline=debug")
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch one symbol and print metrics, chart description and tables
    Update {
        /// Ticker symbol (e.g. "ADBE", "PETR4.SA"); falls back to the configured default
        #[arg(short, long)]
        symbol: Option<String>,

        /// Time period: 1d, 1wk, 1mo, 1y or max
        #[arg(short, long)]
        period: Option<Period>,

        #[arg(long, value_enum, default_value_t = ChartKind::Candlestick)]
        chart: ChartKind,

        /// Indicator overlays to draw on the chart (repeatable)
        #[arg(long = "overlay", value_enum)]
        overlays: Vec<Overlay>,

        /// Emit the snapshot as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print live quotes for the watch-list
    Watchlist {
        /// Comma-separated symbols overriding the configured list (e.g. "AAPL,MSFT")
        #[arg(long, value_delimiter = ',')]
        symbols: Vec<String>,

        #[arg(long)]
        json: bool,
    },

    /// Register a purchase or sale against the current quote
    Register {
        #[arg(value_enum)]
        kind: TransactionKind,

        #[arg(short, long)]
        symbol: Option<String>,

        #[arg(short, long)]
        period: Option<Period>,

        #[arg(long)]
        json: bool,
    },
}

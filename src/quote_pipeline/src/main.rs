use std::error::Error;

use chrono::Utc;
use clap::Parser;
use quote_pipeline::{
    cli::{
        commands::{Cli, Commands},
        render::{snapshot_text, watchlist_text},
    },
    create_client,
    dashboard::{ChartSpec, DashboardState, poll_watchlist},
};
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let (config, provider) = create_client(cli.config.as_deref())?;
    let mut state = DashboardState::new(config.indicators);

    match cli.command {
        Commands::Update {
            symbol,
            period,
            chart,
            overlays,
            json,
        } => {
            let symbol = symbol.unwrap_or_else(|| config.dashboard.default_symbol.clone());
            let period = period.unwrap_or(config.dashboard.default_period);
            state.update(&provider, &symbol, period, Utc::now()).await?;

            let snapshot = state.snapshot().ok_or("update produced no snapshot")?;
            let spec = ChartSpec::build(snapshot, chart, &overlays);
            if json {
                let out = serde_json::json!({ "snapshot": snapshot, "chart": spec });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                print!("{}", snapshot_text(snapshot, &spec));
            }
        }

        Commands::Watchlist { symbols, json } => {
            let symbols = if symbols.is_empty() {
                config.dashboard.watchlist.clone()
            } else {
                symbols.into_iter().map(|s| s.trim().to_string()).collect()
            };
            let quotes = poll_watchlist(&provider, &symbols, Utc::now()).await;
            if json {
                println!("{}", serde_json::to_string_pretty(&quotes)?);
            } else {
                print!("{}", watchlist_text(&quotes));
            }
        }

        Commands::Register {
            kind,
            symbol,
            period,
            json,
        } => {
            let symbol = symbol.unwrap_or_else(|| config.dashboard.default_symbol.clone());
            let period = period.unwrap_or(config.dashboard.default_period);
            // A failed refresh still registers, against a value of zero.
            if let Err(e) = state.update(&provider, &symbol, period, Utc::now()).await {
                warn!(%symbol, error = %e, "could not refresh quote before registering");
            }

            let record = state.register(kind, Utc::now());
            if json {
                println!("{}", serde_json::to_string_pretty(record)?);
            } else {
                println!("{}", record.message);
            }
        }
    }
    Ok(())
}

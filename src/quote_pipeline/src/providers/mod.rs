//! Provider abstraction for market data sources.
//!
//! This module defines the [`DataProvider`] trait, the single seam between the
//! quote pipeline and any market-data vendor. Each concrete provider (such as
//! [`yahoo_chart::YahooChartProvider`]) translates a [`FetchRequest`] into the
//! vendor's wire format and hands back a canonical [`BarSeries`].
//!
//! The trait is async and object safe, so callers can pick a provider at
//! runtime and hold it as `Box<dyn DataProvider>`.
//!
//! # Example
//!
//! ```rust
//! use async_trait::async_trait;
//! use quote_pipeline::models::{bar::BarSeries, request::FetchRequest};
//! use quote_pipeline::providers::{DataProvider, ProviderError};
//!
//! struct NoMarket;
//!
//! #[async_trait]
//! impl DataProvider for NoMarket {
//!     async fn fetch_bars(&self, request: &FetchRequest) -> Result<BarSeries, ProviderError> {
//!         Ok(BarSeries::new(request.symbol.clone(), request.interval, vec![]))
//!     }
//! }
//! ```

pub mod yahoo_chart;

use async_trait::async_trait;
use snafu::{Backtrace, Snafu};

use crate::models::{bar::BarSeries, request::FetchRequest};

/// Trait for fetching OHLCV bars from a market data provider.
///
/// One call is one network round-trip; implementations do not retry.
#[async_trait]
pub trait DataProvider: Send + Sync {
    /// Fetches the bars described by `request`, in ascending time order.
    ///
    /// An empty series is a valid answer here; the pipeline decides whether
    /// that is an error.
    async fn fetch_bars(&self, request: &FetchRequest) -> Result<BarSeries, ProviderError>;
}

/// Errors that can occur during the creation of a provider instance.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ProviderInitError {
    /// failed to init reqwest client
    #[snafu(display("Failed to build HTTP client: {source}"))]
    ClientBuild {
        source: reqwest::Error,
        backtrace: Backtrace,
    },

    /// The configured user agent is not a valid header value.
    #[snafu(display("Invalid user agent: {source}"))]
    InvalidUserAgent {
        source: reqwest::header::InvalidHeaderValue,
        backtrace: Backtrace,
    },
}

/// Errors that can occur while fetching bars (the pipeline's fetch errors).
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ProviderError {
    /// The provider could not be reached or the body could not be read.
    #[snafu(display("Request for {symbol} failed: {source}"))]
    Request {
        symbol: String,
        source: reqwest::Error,
        backtrace: Backtrace,
    },

    /// The provider answered with an error payload.
    #[snafu(display("API error for {symbol}: {message}"))]
    Api {
        symbol: String,
        message: String,
        backtrace: Backtrace,
    },

    /// The provider does not know the symbol.
    #[snafu(display("Unknown or delisted symbol: {symbol}"))]
    InvalidSymbol { symbol: String, backtrace: Backtrace },

    /// The request succeeded but carried no bars (e.g. a market holiday).
    #[snafu(display("No bars returned for {symbol}"))]
    EmptySeries { symbol: String, backtrace: Backtrace },

    /// The request parameters were invalid for this specific provider.
    #[snafu(display("Invalid parameters for provider: {message}"))]
    Validation {
        message: String,
        backtrace: Backtrace,
    },

    /// The response could not be turned into bars.
    #[snafu(display("Internal provider error: {message}"))]
    Internal {
        message: String,
        backtrace: Backtrace,
    },
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::models::{
        bar::{Bar, BarTime},
        period::Period,
    };

    struct FixedProvider;
    struct EmptyProvider;

    #[async_trait]
    impl DataProvider for FixedProvider {
        async fn fetch_bars(&self, request: &FetchRequest) -> Result<BarSeries, ProviderError> {
            let bar = Bar {
                timestamp: BarTime::Zoned(Utc::now().with_timezone(&chrono_tz::UTC)),
                open: 1.0,
                high: 1.0,
                low: 1.0,
                close: 1.0,
                volume: 1,
            };
            Ok(BarSeries::new(request.symbol.clone(), request.interval, vec![bar]))
        }
    }

    #[async_trait]
    impl DataProvider for EmptyProvider {
        async fn fetch_bars(&self, request: &FetchRequest) -> Result<BarSeries, ProviderError> {
            Ok(BarSeries::new(request.symbol.clone(), request.interval, vec![]))
        }
    }

    // Decided at runtime, so it has to hand back a trait object.
    fn get_provider(name: &str) -> Box<dyn DataProvider> {
        if name == "fixed" {
            Box::new(FixedProvider)
        } else {
            Box::new(EmptyProvider)
        }
    }

    #[tokio::test]
    async fn providers_are_usable_as_trait_objects() {
        let request = FetchRequest::for_period("ADBE", Period::OneMonth, Utc::now());

        let fixed = get_provider("fixed").fetch_bars(&request).await.unwrap();
        assert_eq!(fixed.symbol, "ADBE");
        assert_eq!(fixed.len(), 1);

        let empty = get_provider("empty").fetch_bars(&request).await.unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn error_messages_name_the_symbol() {
        let err = InvalidSymbolSnafu { symbol: "NOPE" }.build();
        assert_eq!(err.to_string(), "Unknown or delisted symbol: NOPE");

        let err = EmptySeriesSnafu { symbol: "ADBE" }.build();
        assert_eq!(err.to_string(), "No bars returned for ADBE");
    }
}

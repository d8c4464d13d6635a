use shared_utils::config::ConfigError;
use thiserror::Error;

use crate::providers::{ProviderError, ProviderInitError};

/// Arithmetic the pipeline cannot carry out on the data it was given.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ComputationError {
    /// Fewer bars than the computation needs.
    #[error("Insufficient data: need at least {required} bars, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// A change was requested relative to a price of exactly zero.
    #[error("Reference price is zero; percent change is undefined")]
    ZeroReferencePrice,
}

/// The unified error type for the `quote_pipeline` crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Fetching bars failed (network, provider, unknown symbol, no data).
    #[error("Fetch error: {0}")]
    Fetch(#[from] ProviderError),

    /// The provider could not be constructed.
    #[error("Provider setup error: {0}")]
    ProviderInit(#[from] ProviderInitError),

    /// The fetched series could not be summarized.
    #[error("Computation error: {0}")]
    Computation(#[from] ComputationError),

    /// An error related to configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

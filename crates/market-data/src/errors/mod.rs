//! Error types for the market data crate.

use thiserror::Error;

/// Errors that can occur during market data operations.
///
/// The API layer maps each variant onto a wire status: symbol, field and
/// value problems become client errors, everything else is reported as an
/// internal failure.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The symbol failed validation and was never sent to a provider.
    #[error("Invalid stock symbol: '{symbol}'")]
    InvalidSymbol {
        /// The rejected input
        symbol: String,
    },

    /// A required field was absent while reading a row of provider data.
    #[error("Missing data field: {field}")]
    MissingField {
        /// Name of the absent field
        field: &'static str,
    },

    /// A field was present but carried an unusable value.
    #[error("{message}")]
    InvalidValue {
        /// Description of the offending value
        message: String,
    },

    /// A provider-specific error occurred.
    #[error("Provider error: {provider} - {message}")]
    Provider {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

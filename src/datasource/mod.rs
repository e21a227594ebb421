//! Provider abstractions for fetching wallet balances and currency prices.

use crate::domain::{Balance, Currency, PriceTable};
use async_trait::async_trait;
use std::fmt;

pub mod mock;
pub mod remote;

pub use mock::{MockBalanceSource, MockPriceSource};
pub use remote::{RemoteBalanceSource, RemotePriceSource};

/// Provider of raw wallet balances.
///
/// Implementations must validate records at the boundary: a malformed
/// record (non-finite amount, empty identifier) is a fetch error, not a
/// value to pass downstream.
#[async_trait]
pub trait BalanceSource: Send + Sync + fmt::Debug {
    /// Fetch all balances held by a wallet, across chains.
    ///
    /// An unknown wallet yields an empty list, not an error.
    async fn fetch_balances(&self, wallet: &str) -> Result<Vec<Balance>, DataSourceError>;
}

/// Provider of USD unit prices.
#[async_trait]
pub trait PriceSource: Send + Sync + fmt::Debug {
    /// Fetch prices for the given currencies.
    ///
    /// The returned table may be partial or empty; currencies the provider
    /// cannot price are simply absent.
    async fn fetch_prices(&self, currencies: &[Currency]) -> Result<PriceTable, DataSourceError>;
}

/// Error type for provider operations.
#[derive(Debug, Clone)]
pub enum DataSourceError {
    /// Network error (e.g., connection timeout, DNS failure)
    NetworkError(String),
    /// HTTP error (e.g., 429 rate limit, 5xx server error)
    HttpError { status: u16, message: String },
    /// Parsing or validation error (malformed record, invalid JSON)
    ParseError(String),
    /// Rate limit exceeded (caller should implement backoff)
    RateLimited,
    /// Other error
    Other(String),
}

impl fmt::Display for DataSourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSourceError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            DataSourceError::HttpError { status, message } => {
                write!(f, "HTTP error {}: {}", status, message)
            }
            DataSourceError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            DataSourceError::RateLimited => write!(f, "Rate limited"),
            DataSourceError::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for DataSourceError {}

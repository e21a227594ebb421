//! Domain primitives: Currency, ChainId.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Error for invalid currency/chain identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierError {
    #[error("currency identifier must be non-empty")]
    EmptyCurrency,
    #[error("chain identifier must be non-empty")]
    EmptyChain,
}

/// Currency symbol (e.g., "ETH", "OSMO").
///
/// Guaranteed non-empty; surrounding whitespace is stripped on construction.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Currency(String);

impl Currency {
    /// Create a Currency from a string.
    ///
    /// # Errors
    /// Returns an error if the trimmed identifier is empty.
    pub fn new(symbol: impl Into<String>) -> Result<Self, IdentifierError> {
        let symbol = symbol.into();
        let trimmed = symbol.trim();
        if trimmed.is_empty() {
            return Err(IdentifierError::EmptyCurrency);
        }
        Ok(Currency(trimmed.to_string()))
    }

    /// Get the symbol as a string reference.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Currency {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::new(s)
    }
}

impl TryFrom<String> for Currency {
    type Error = IdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Currency::new(value)
    }
}

impl From<Currency> for String {
    fn from(value: Currency) -> Self {
        value.0
    }
}

/// Chain identifier naming the ledger a balance originates from
/// (e.g., "Ethereum", "Osmosis").
///
/// Guaranteed non-empty; surrounding whitespace is stripped on construction.
/// Unrecognized chains are valid identifiers; they simply resolve to the
/// sentinel priority when ranked.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ChainId(String);

impl ChainId {
    /// Create a ChainId from a string.
    ///
    /// # Errors
    /// Returns an error if the trimmed identifier is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, IdentifierError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(IdentifierError::EmptyChain);
        }
        Ok(ChainId(trimmed.to_string()))
    }

    /// Get the chain name as a string reference.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ChainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ChainId {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChainId::new(s)
    }
}

impl TryFrom<String> for ChainId {
    type Error = IdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        ChainId::new(value)
    }
}

impl From<ChainId> for String {
    fn from(value: ChainId) -> Self {
        value.0
    }
}

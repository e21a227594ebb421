//! Balance type representing one wallet holding on one chain.

use crate::domain::{ChainId, Currency, Decimal, IdentifierError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation error for balance records coming from untyped provider data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error(transparent)]
    Identifier(#[from] IdentifierError),
    #[error("amount for {currency} on {chain} is not a finite number: {value}")]
    NonFiniteAmount {
        currency: String,
        chain: String,
        value: f64,
    },
}

/// One wallet's holding of one currency on one chain.
///
/// Immutable once constructed; a recomputation always starts from a fresh
/// list of balances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    /// Currency symbol.
    pub currency: Currency,
    /// Signed holding amount.
    pub amount: Decimal,
    /// Chain the holding lives on.
    pub chain: ChainId,
}

impl Balance {
    /// Create a new Balance from already-validated parts.
    pub fn new(currency: Currency, amount: Decimal, chain: ChainId) -> Self {
        Balance {
            currency,
            amount,
            chain,
        }
    }

    /// Validate and build a Balance from raw provider fields.
    ///
    /// # Errors
    /// Returns an error for empty identifiers or a non-finite amount.
    pub fn from_raw(currency: &str, amount: f64, chain: &str) -> Result<Self, DomainError> {
        let parsed_currency = Currency::new(currency)?;
        let parsed_chain = ChainId::new(chain)?;
        let amount = Decimal::from_f64(amount).ok_or_else(|| DomainError::NonFiniteAmount {
            currency: parsed_currency.to_string(),
            chain: parsed_chain.to_string(),
            value: amount,
        })?;
        Ok(Balance::new(parsed_currency, amount, parsed_chain))
    }

    /// Stable composite identity for rendering.
    ///
    /// Currency alone is not unique: the same currency can be held on
    /// several chains at once.
    pub fn row_key(&self) -> String {
        format!("{}:{}", self.currency, self.chain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_valid() {
        let balance = Balance::from_raw("ETH", 10.0, "Ethereum").unwrap();
        assert_eq!(balance.currency.as_str(), "ETH");
        assert_eq!(balance.chain.as_str(), "Ethereum");
        assert!(balance.amount.is_positive());
    }

    #[test]
    fn test_from_raw_rejects_nan() {
        let err = Balance::from_raw("ETH", f64::NAN, "Ethereum").unwrap_err();
        match err {
            DomainError::NonFiniteAmount { currency, chain, .. } => {
                assert_eq!(currency, "ETH");
                assert_eq!(chain, "Ethereum");
            }
            other => panic!("expected NonFiniteAmount, got {other:?}"),
        }
    }

    #[test]
    fn test_from_raw_rejects_infinity() {
        assert!(Balance::from_raw("ETH", f64::INFINITY, "Ethereum").is_err());
    }

    #[test]
    fn test_from_raw_rejects_empty_identifiers() {
        assert_eq!(
            Balance::from_raw("", 1.0, "Ethereum"),
            Err(DomainError::Identifier(IdentifierError::EmptyCurrency))
        );
        assert_eq!(
            Balance::from_raw("ETH", 1.0, "  "),
            Err(DomainError::Identifier(IdentifierError::EmptyChain))
        );
    }

    #[test]
    fn test_row_key_composite() {
        let balance = Balance::from_raw("USDC", 25.0, "Arbitrum").unwrap();
        assert_eq!(balance.row_key(), "USDC:Arbitrum");
    }

    #[test]
    fn test_negative_amount_is_valid_input() {
        // Negative holdings are valid records; the projection drops them
        // later rather than rejecting them at the boundary.
        let balance = Balance::from_raw("ZIL", -5.0, "Zilliqa").unwrap();
        assert!(balance.amount.is_negative());
    }
}

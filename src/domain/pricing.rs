//! Price table mapping currencies to USD unit prices.

use crate::domain::{Currency, Decimal};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Mapping from currency to non-negative USD unit price.
///
/// Supplied by a price provider and may be partial or empty; a missing
/// entry values the holding at zero rather than failing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTable {
    prices: HashMap<Currency, Decimal>,
}

impl PriceTable {
    /// Create an empty price table.
    pub fn new() -> Self {
        PriceTable {
            prices: HashMap::new(),
        }
    }

    /// Build a table from (currency, price) pairs.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (Currency, Decimal)>) -> Self {
        PriceTable {
            prices: pairs.into_iter().collect(),
        }
    }

    /// Add or replace one currency's price.
    pub fn with_price(mut self, currency: Currency, price: Decimal) -> Self {
        self.prices.insert(currency, price);
        self
    }

    /// Insert one currency's price.
    pub fn insert(&mut self, currency: Currency, price: Decimal) {
        self.prices.insert(currency, price);
    }

    /// Look up a currency's price.
    pub fn get(&self, currency: &Currency) -> Option<Decimal> {
        self.prices.get(currency).copied()
    }

    /// Price for a currency, or zero when the table has no entry.
    pub fn price_or_zero(&self, currency: &Currency) -> Decimal {
        self.get(currency).unwrap_or_else(Decimal::zero)
    }

    /// Number of priced currencies.
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Returns true if no prices are present.
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn currency(symbol: &str) -> Currency {
        Currency::new(symbol).unwrap()
    }

    fn d(s: &str) -> Decimal {
        Decimal::from_str_canonical(s).unwrap()
    }

    #[test]
    fn test_price_lookup() {
        let table = PriceTable::new().with_price(currency("ETH"), d("2000"));
        assert_eq!(table.get(&currency("ETH")), Some(d("2000")));
        assert_eq!(table.get(&currency("OSMO")), None);
    }

    #[test]
    fn test_missing_price_is_zero() {
        let table = PriceTable::new();
        assert!(table.is_empty());
        assert_eq!(table.price_or_zero(&currency("ETH")), Decimal::zero());
    }

    #[test]
    fn test_from_pairs() {
        let table = PriceTable::from_pairs([
            (currency("ETH"), d("2000")),
            (currency("ARB"), d("1.25")),
        ]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.price_or_zero(&currency("ARB")), d("1.25"));
    }
}

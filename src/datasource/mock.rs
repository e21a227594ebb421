//! Mock providers for testing without network calls.

use super::{BalanceSource, DataSourceError, PriceSource};
use crate::domain::{Balance, Currency, Decimal, PriceTable};
use async_trait::async_trait;
use std::collections::HashMap;

/// Mock balance provider returning predefined per-wallet balances.
#[derive(Debug, Clone, Default)]
pub struct MockBalanceSource {
    balances: HashMap<String, Vec<Balance>>,
    fail_with: Option<DataSourceError>,
}

impl MockBalanceSource {
    /// Create a new mock balance source with no wallets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the balances returned for a wallet.
    pub fn with_wallet(mut self, wallet: &str, balances: Vec<Balance>) -> Self {
        self.balances.insert(wallet.to_string(), balances);
        self
    }

    /// Make every fetch fail with the given error.
    pub fn failing(mut self, error: DataSourceError) -> Self {
        self.fail_with = Some(error);
        self
    }
}

#[async_trait]
impl BalanceSource for MockBalanceSource {
    async fn fetch_balances(&self, wallet: &str) -> Result<Vec<Balance>, DataSourceError> {
        if let Some(error) = &self.fail_with {
            return Err(error.clone());
        }
        Ok(self.balances.get(wallet).cloned().unwrap_or_default())
    }
}

/// Mock price provider returning predefined prices.
#[derive(Debug, Clone, Default)]
pub struct MockPriceSource {
    prices: HashMap<Currency, Decimal>,
    fail_with: Option<DataSourceError>,
}

impl MockPriceSource {
    /// Create a new mock price source with no prices.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the price for a currency.
    pub fn with_price(mut self, currency: Currency, price: Decimal) -> Self {
        self.prices.insert(currency, price);
        self
    }

    /// Make every fetch fail with the given error.
    pub fn failing(mut self, error: DataSourceError) -> Self {
        self.fail_with = Some(error);
        self
    }
}

#[async_trait]
impl PriceSource for MockPriceSource {
    async fn fetch_prices(&self, currencies: &[Currency]) -> Result<PriceTable, DataSourceError> {
        if let Some(error) = &self.fail_with {
            return Err(error.clone());
        }
        // Like a real provider: only requested currencies, only known ones.
        Ok(PriceTable::from_pairs(currencies.iter().filter_map(|c| {
            self.prices.get(c).map(|price| (c.clone(), *price))
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn balance(currency: &str, amount: f64, chain: &str) -> Balance {
        Balance::from_raw(currency, amount, chain).unwrap()
    }

    fn currency(symbol: &str) -> Currency {
        Currency::new(symbol).unwrap()
    }

    fn d(s: &str) -> Decimal {
        Decimal::from_str_canonical(s).unwrap()
    }

    #[tokio::test]
    async fn test_mock_balances_per_wallet() {
        let source =
            MockBalanceSource::new().with_wallet("0xabc", vec![balance("ETH", 1.0, "Ethereum")]);

        let known = source.fetch_balances("0xabc").await.unwrap();
        assert_eq!(known.len(), 1);

        let unknown = source.fetch_balances("0xdef").await.unwrap();
        assert!(unknown.is_empty());
    }

    #[tokio::test]
    async fn test_mock_prices_only_requested_and_known() {
        let source = MockPriceSource::new()
            .with_price(currency("ETH"), d("2000"))
            .with_price(currency("ARB"), d("1.25"));

        let table = source
            .fetch_prices(&[currency("ETH"), currency("OSMO")])
            .await
            .unwrap();

        assert_eq!(table.get(&currency("ETH")), Some(d("2000")));
        assert_eq!(table.get(&currency("OSMO")), None);
        assert_eq!(table.get(&currency("ARB")), None);
    }

    #[tokio::test]
    async fn test_mock_failure_mode() {
        let source = MockBalanceSource::new().failing(DataSourceError::RateLimited);
        let err = source.fetch_balances("0xabc").await.unwrap_err();
        assert!(matches!(err, DataSourceError::RateLimited));
    }
}

//! Snapshot orchestration: fetch inputs, run the cached projection.

use crate::datasource::{BalanceSource, DataSourceError, PriceSource};
use crate::domain::{Balance, Currency, PriceTable, PriorityTable};
use crate::engine::{ProjectedRow, ProjectionCache};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::warn;

/// One projected view of a wallet at a point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectedSnapshot {
    pub wallet: String,
    pub as_of: DateTime<Utc>,
    pub rows: Vec<ProjectedRow>,
}

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error(transparent)]
    Source(#[from] DataSourceError),
}

/// Fetches balances and prices and projects them into render-ready rows.
///
/// Recomputation is serialized behind a mutex: at most one projection runs
/// at a time, and a run never observes a partially updated input pair. A
/// failed price fetch degrades to an empty table (zero valuations) instead
/// of failing the snapshot; a failed balance fetch is a real error.
pub struct ProjectionService {
    balances: Arc<dyn BalanceSource>,
    prices: Arc<dyn PriceSource>,
    cache: Mutex<ProjectionCache>,
}

impl ProjectionService {
    pub fn new(
        balances: Arc<dyn BalanceSource>,
        prices: Arc<dyn PriceSource>,
        priorities: PriorityTable,
    ) -> Self {
        Self {
            balances,
            prices,
            cache: Mutex::new(ProjectionCache::new(priorities)),
        }
    }

    /// Produce the current projected snapshot for a wallet.
    pub async fn snapshot(&self, wallet: &str) -> Result<ProjectedSnapshot, SnapshotError> {
        let balances = self.balances.fetch_balances(wallet).await?;

        let currencies = distinct_currencies(&balances);
        let prices = match self.prices.fetch_prices(&currencies).await {
            Ok(table) => table,
            Err(e) => {
                warn!("Price fetch failed, valuing holdings at zero: {}", e);
                PriceTable::new()
            }
        };

        let rows = {
            let mut cache = self.cache.lock().await;
            cache.project(&balances, &prices)
        };

        Ok(ProjectedSnapshot {
            wallet: wallet.to_string(),
            as_of: Utc::now(),
            rows,
        })
    }
}

/// Distinct currencies in input order.
fn distinct_currencies(balances: &[Balance]) -> Vec<Currency> {
    let mut seen = Vec::new();
    for balance in balances {
        if !seen.contains(&balance.currency) {
            seen.push(balance.currency.clone());
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasource::{MockBalanceSource, MockPriceSource};
    use crate::domain::{Balance, Decimal};

    fn balance(currency: &str, amount: f64, chain: &str) -> Balance {
        Balance::from_raw(currency, amount, chain).unwrap()
    }

    fn d(s: &str) -> Decimal {
        Decimal::from_str_canonical(s).unwrap()
    }

    fn service(balances: MockBalanceSource, prices: MockPriceSource) -> ProjectionService {
        ProjectionService::new(
            Arc::new(balances),
            Arc::new(prices),
            PriorityTable::default(),
        )
    }

    #[tokio::test]
    async fn test_snapshot_projects_fetched_inputs() {
        let balances = MockBalanceSource::new().with_wallet(
            "0xabc",
            vec![
                balance("ARB", 20.0, "Arbitrum"),
                balance("ETH", 10.0, "Ethereum"),
            ],
        );
        let prices = MockPriceSource::new().with_price("ETH".parse().unwrap(), d("2000"));

        let snapshot = service(balances, prices).snapshot("0xabc").await.unwrap();

        assert_eq!(snapshot.wallet, "0xabc");
        assert_eq!(snapshot.rows.len(), 2);
        assert_eq!(snapshot.rows[0].currency.as_str(), "ETH");
        assert_eq!(snapshot.rows[0].usd_value, d("20000"));
        assert_eq!(snapshot.rows[1].currency.as_str(), "ARB");
        assert_eq!(snapshot.rows[1].usd_value, Decimal::zero());
    }

    #[tokio::test]
    async fn test_price_failure_degrades_to_zero_valuations() {
        let balances = MockBalanceSource::new()
            .with_wallet("0xabc", vec![balance("ETH", 10.0, "Ethereum")]);
        let prices = MockPriceSource::new().failing(DataSourceError::RateLimited);

        let snapshot = service(balances, prices).snapshot("0xabc").await.unwrap();

        assert_eq!(snapshot.rows.len(), 1);
        assert_eq!(snapshot.rows[0].usd_value, Decimal::zero());
    }

    #[tokio::test]
    async fn test_balance_failure_is_an_error() {
        let balances = MockBalanceSource::new().failing(DataSourceError::RateLimited);
        let prices = MockPriceSource::new();

        let err = service(balances, prices).snapshot("0xabc").await.unwrap_err();
        assert!(matches!(
            err,
            SnapshotError::Source(DataSourceError::RateLimited)
        ));
    }

    #[tokio::test]
    async fn test_unknown_wallet_yields_empty_snapshot() {
        let snapshot = service(MockBalanceSource::new(), MockPriceSource::new())
            .snapshot("0xnobody")
            .await
            .unwrap();
        assert!(snapshot.rows.is_empty());
    }
}

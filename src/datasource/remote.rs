//! HTTP provider clients for wallet balances and currency prices.

use super::{BalanceSource, DataSourceError, PriceSource};
use crate::domain::{Balance, Currency, Decimal, PriceTable};
use async_trait::async_trait;
use backoff::future::retry;
use backoff::ExponentialBackoff;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

/// GET a URL with exponential backoff and decode the JSON body.
///
/// Transient: network failures, 429, 5xx. Permanent: other 4xx and
/// undecodable bodies.
async fn get_json<T: serde::de::DeserializeOwned>(
    client: &Client,
    url: &str,
) -> Result<T, DataSourceError> {
    let backoff = ExponentialBackoff {
        max_elapsed_time: Some(Duration::from_secs(30)),
        ..Default::default()
    };

    retry(backoff, || async {
        let response = client.get(url).send().await.map_err(|e| {
            backoff::Error::transient(DataSourceError::NetworkError(e.to_string()))
        })?;

        let status = response.status();
        if status == 429 {
            return Err(backoff::Error::transient(DataSourceError::RateLimited));
        }
        if status.is_server_error() {
            return Err(backoff::Error::transient(DataSourceError::HttpError {
                status: status.as_u16(),
                message: "Server error".to_string(),
            }));
        }
        if !status.is_success() {
            return Err(backoff::Error::permanent(DataSourceError::HttpError {
                status: status.as_u16(),
                message: "Client error".to_string(),
            }));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| backoff::Error::permanent(DataSourceError::ParseError(e.to_string())))
    })
    .await
}

/// Wire shape of one balance record from the wallet API.
#[derive(Debug, Deserialize)]
struct BalanceRecord {
    currency: String,
    amount: f64,
    chain: String,
}

/// Balance provider backed by a wallet HTTP API.
#[derive(Debug, Clone)]
pub struct RemoteBalanceSource {
    client: Client,
    base_url: String,
}

impl RemoteBalanceSource {
    /// Create a new remote balance source.
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }
}

#[async_trait]
impl BalanceSource for RemoteBalanceSource {
    async fn fetch_balances(&self, wallet: &str) -> Result<Vec<Balance>, DataSourceError> {
        debug!("Fetching balances for wallet={}", wallet);

        let url = format!("{}/v1/wallets/{}/balances", self.base_url, wallet);
        let records: Vec<BalanceRecord> = get_json(&self.client, &url).await?;

        // Malformed records fail the fetch; a silent skip here would turn a
        // provider bug into a wrong-looking wallet.
        let mut balances = Vec::with_capacity(records.len());
        for record in records {
            let balance = Balance::from_raw(&record.currency, record.amount, &record.chain)
                .map_err(|e| DataSourceError::ParseError(e.to_string()))?;
            balances.push(balance);
        }

        Ok(balances)
    }
}

/// Price provider backed by a price HTTP API.
#[derive(Debug, Clone)]
pub struct RemotePriceSource {
    client: Client,
    base_url: String,
}

impl RemotePriceSource {
    /// Create a new remote price source.
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }
}

#[async_trait]
impl PriceSource for RemotePriceSource {
    async fn fetch_prices(&self, currencies: &[Currency]) -> Result<PriceTable, DataSourceError> {
        if currencies.is_empty() {
            return Ok(PriceTable::new());
        }

        let symbols = currencies
            .iter()
            .map(Currency::as_str)
            .collect::<Vec<_>>()
            .join(",");
        debug!("Fetching prices for symbols={}", symbols);

        let url = format!("{}/v1/prices?symbols={}", self.base_url, symbols);
        let raw: HashMap<String, f64> = get_json(&self.client, &url).await?;

        let mut prices = PriceTable::new();
        for (symbol, value) in raw {
            let currency = Currency::new(symbol)
                .map_err(|e| DataSourceError::ParseError(e.to_string()))?;
            let price = Decimal::from_f64(value).ok_or_else(|| {
                DataSourceError::ParseError(format!(
                    "price for {} is not a finite number: {}",
                    currency, value
                ))
            })?;
            if price.is_negative() {
                return Err(DataSourceError::ParseError(format!(
                    "price for {} is negative: {}",
                    currency, price
                )));
            }
            prices.insert(currency, price);
        }

        Ok(prices)
    }
}

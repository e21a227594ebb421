use crate::api::AppState;
use crate::domain::Decimal;
use crate::error::AppError;
use axum::extract::State;
use axum::Json;
use chrono::{DateTime, Utc};
use futures::future::try_join_all;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioResponse {
    pub as_of: DateTime<Utc>,
    pub wallets: Vec<PortfolioEntry>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioEntry {
    pub wallet: String,
    pub total_usd: Decimal,
    pub row_count: usize,
}

/// Aggregate the projected value of every watched wallet.
///
/// Wallets come from configuration (`WATCH_WALLETS`); an empty list yields
/// an empty response rather than an error.
pub async fn get_portfolio(
    State(state): State<AppState>,
) -> Result<Json<PortfolioResponse>, AppError> {
    let snapshots = try_join_all(
        state
            .config
            .watch_wallets
            .iter()
            .map(|wallet| state.service.snapshot(wallet)),
    )
    .await?;

    let wallets = snapshots
        .into_iter()
        .map(|snapshot| {
            let total_usd = snapshot
                .rows
                .iter()
                .fold(Decimal::zero(), |sum, row| sum + row.usd_value);
            PortfolioEntry {
                wallet: snapshot.wallet,
                total_usd,
                row_count: snapshot.rows.len(),
            }
        })
        .collect();

    Ok(Json(PortfolioResponse {
        as_of: Utc::now(),
        wallets,
    }))
}

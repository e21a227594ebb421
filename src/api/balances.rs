use crate::api::AppState;
use crate::domain::Decimal;
use crate::error::AppError;
use crate::orchestration::ProjectedSnapshot;
use axum::extract::{Query, State};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalancesQuery {
    pub wallet: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BalancesResponse {
    pub wallet: String,
    pub as_of: DateTime<Utc>,
    pub rows: Vec<BalanceRowDto>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceRowDto {
    pub currency: String,
    pub chain: String,
    pub amount: Decimal,
    pub formatted_amount: String,
    pub usd_value: Decimal,
    pub row_key: String,
}

impl From<ProjectedSnapshot> for BalancesResponse {
    fn from(snapshot: ProjectedSnapshot) -> Self {
        BalancesResponse {
            wallet: snapshot.wallet,
            as_of: snapshot.as_of,
            rows: snapshot
                .rows
                .into_iter()
                .map(|row| BalanceRowDto {
                    currency: row.currency.to_string(),
                    chain: row.chain.to_string(),
                    amount: row.amount,
                    formatted_amount: row.formatted_amount,
                    usd_value: row.usd_value,
                    row_key: row.row_key,
                })
                .collect(),
        }
    }
}

pub async fn get_balances(
    Query(params): Query<BalancesQuery>,
    State(state): State<AppState>,
) -> Result<Json<BalancesResponse>, AppError> {
    let wallet = params
        .wallet
        .as_deref()
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .ok_or_else(|| AppError::BadRequest("wallet is required".to_string()))?;

    let snapshot = state.service.snapshot(wallet).await?;

    Ok(Json(snapshot.into()))
}

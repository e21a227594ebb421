//! Pure computation engine for the balance projection pipeline.

use crate::domain::{ChainId, Currency, Decimal};
use serde::Serialize;

pub mod cache;
pub mod projection;

pub use cache::ProjectionCache;
pub use projection::{format_rows, project, rank_balances};

/// A render-ready balance row produced by the projection pipeline.
///
/// Recomputed on every pipeline run; carries everything a rendering layer
/// needs, including its own stable identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectedRow {
    /// Currency symbol.
    pub currency: Currency,
    /// Chain the holding lives on.
    pub chain: ChainId,
    /// Raw holding amount (always positive in pipeline output).
    pub amount: Decimal,
    /// Amount rendered with exactly two decimal digits.
    pub formatted_amount: String,
    /// USD valuation: amount times unit price, zero when unpriced.
    pub usd_value: Decimal,
    /// Stable composite identity (currency plus chain).
    pub row_key: String,
}

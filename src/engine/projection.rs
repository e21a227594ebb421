//! The balance projection pipeline: filter, order, format.
//!
//! Split into two pure stages with different inputs. The rank stage
//! (filter + sort) depends only on the balance list and the fixed priority
//! table; the format stage additionally depends on the price table. The
//! split is what lets [`super::ProjectionCache`] skip the O(n log n) rank
//! work when only prices change.

use super::ProjectedRow;
use crate::domain::{Balance, PriceTable, PriorityTable, SENTINEL_PRIORITY};

/// Filter and order balances for display.
///
/// Retains exactly the balances with a positive amount on a recognized
/// chain, ordered by chain priority descending. The sort is stable, so
/// equal-priority balances keep their relative order from the input list.
/// Dropped balances (zero, negative, unrecognized chain) are a normal
/// outcome, not an error.
pub fn rank_balances(balances: &[Balance], priorities: &PriorityTable) -> Vec<Balance> {
    let mut ranked: Vec<Balance> = balances
        .iter()
        .filter(|balance| {
            priorities.priority_of(&balance.chain) > SENTINEL_PRIORITY
                && balance.amount.is_positive()
        })
        .cloned()
        .collect();

    ranked.sort_by(|a, b| {
        priorities
            .priority_of(&b.chain)
            .cmp(&priorities.priority_of(&a.chain))
    });

    ranked
}

/// Map ranked balances to render-ready rows.
///
/// Order is preserved. Unpriced currencies value to zero; the output never
/// contains an undefined valuation.
pub fn format_rows(ranked: &[Balance], prices: &PriceTable) -> Vec<ProjectedRow> {
    ranked
        .iter()
        .map(|balance| ProjectedRow {
            currency: balance.currency.clone(),
            chain: balance.chain.clone(),
            amount: balance.amount,
            formatted_amount: balance.amount.format_fixed2(),
            usd_value: balance.amount * prices.price_or_zero(&balance.currency),
            row_key: balance.row_key(),
        })
        .collect()
}

/// Run the full pipeline: rank, then format.
///
/// Pure function of its inputs; identical inputs yield identical output.
pub fn project(
    balances: &[Balance],
    prices: &PriceTable,
    priorities: &PriorityTable,
) -> Vec<ProjectedRow> {
    format_rows(&rank_balances(balances, priorities), prices)
}

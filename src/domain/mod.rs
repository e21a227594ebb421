//! Domain types for the balance projection service.
//!
//! This module provides:
//! - Decimal numeric handling for amounts and valuations
//! - Domain primitives: Currency, ChainId
//! - Balance records with boundary validation
//! - Chain priority resolution with a sentinel for unknown chains
//! - Price tables with zero-valued fallback for missing entries

pub mod balance;
pub mod decimal;
pub mod pricing;
pub mod primitives;
pub mod priority;

pub use balance::{Balance, DomainError};
pub use decimal::Decimal;
pub use pricing::PriceTable;
pub use primitives::{ChainId, Currency, IdentifierError};
pub use priority::{PriorityTable, SENTINEL_PRIORITY};

pub mod api;
pub mod config;
pub mod datasource;
pub mod domain;
pub mod engine;
pub mod error;
pub mod orchestration;

pub use config::Config;
pub use datasource::{
    BalanceSource, DataSourceError, MockBalanceSource, MockPriceSource, PriceSource,
    RemoteBalanceSource, RemotePriceSource,
};
pub use domain::{
    Balance, ChainId, Currency, Decimal, DomainError, PriceTable, PriorityTable,
    SENTINEL_PRIORITY,
};
pub use engine::{project, ProjectedRow, ProjectionCache};
pub use error::AppError;
pub use orchestration::{ProjectedSnapshot, ProjectionService};

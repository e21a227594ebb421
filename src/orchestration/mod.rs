pub mod service;

pub use service::{ProjectedSnapshot, ProjectionService, SnapshotError};

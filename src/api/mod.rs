pub mod balances;
pub mod health;
pub mod portfolio;

use crate::config::Config;
use crate::orchestration::ProjectionService;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ProjectionService>,
    pub config: Config,
}

impl AppState {
    pub fn new(service: Arc<ProjectionService>, config: Config) -> Self {
        Self { service, config }
    }
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/v1/balances", get(balances::get_balances))
        .route("/v1/portfolio", get(portfolio::get_portfolio))
        .layer(cors)
        .with_state(state)
}

use chainfolio::datasource::{RemoteBalanceSource, RemotePriceSource};
use chainfolio::orchestration::ProjectionService;
use chainfolio::{api, config::Config};
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::INFO.into()),
        )
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let port = config.port;

    // Wire providers and the projection service
    let balances = Arc::new(RemoteBalanceSource::new(config.wallet_api_url.clone()));
    let prices = Arc::new(RemotePriceSource::new(config.price_api_url.clone()));
    let service = Arc::new(ProjectionService::new(
        balances,
        prices,
        config.priority_table(),
    ));

    // Create router
    let app = api::create_router(api::AppState::new(service, config));

    // Bind to address
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Failed to bind to {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    tracing::info!("Server listening on {}", addr);

    // Run server
    if let Err(e) = axum::serve(listener, app).await {
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    }
}

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use llm_driven_booking::config::AppConfig;
use llm_driven_booking::cors::{with_cors, OriginPolicy};
use llm_driven_booking::handlers;
use llm_driven_booking::services::ai::provider_from_config;
use llm_driven_booking::services::catalog::HttpEventCatalog;
use llm_driven_booking::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let llm = provider_from_config(&config);
    tracing::info!("using events service at {}", config.client_base);
    let catalog = HttpEventCatalog::new(config.client_base.clone());
    let policy = OriginPolicy::new(config.allowed_origins.clone());

    let state = Arc::new(AppState {
        config: config.clone(),
        llm,
        catalog: Box::new(catalog),
    });

    let app = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/api/llm/parse", post(handlers::parse::parse_text))
        .route("/api/llm/confirm", post(handlers::confirm::confirm_booking))
        .with_state(state);
    let app = with_cors(app, policy).layer(TraceLayer::new_for_http());

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("llm-driven-booking listening on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

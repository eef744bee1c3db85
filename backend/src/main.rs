//! Station Weather Resilience - Backend Server
//!
//! Fuses multi-source weather observations into per-location risk scores,
//! historical context and operational recommendations for station operators.

use axum::{routing::get, Router};
use shared::builtin_catalog;
use shared::models::SourceId;
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod external;
mod handlers;
mod routes;
mod services;

pub use config::Config;

use external::{HttpFeedSource, ObservationSource};
use services::AssessmentService;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub assessment: Arc<AssessmentService>,
    pub config: Arc<Config>,
    pub source_count: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "swr_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load()?;

    tracing::info!("Starting Station Weather Resilience Server");
    tracing::info!("Environment: {}", config.environment);

    // Build the configured observation sources
    let sources = configured_sources(&config);
    tracing::info!("Observation sources configured: {}", sources.len());

    // Load static reference data
    let locations = AssessmentService::load_locations(&config.reference.locations_file)?;
    tracing::info!("Monitoring {} locations", locations.len());

    let assessment = AssessmentService::new(
        sources.clone(),
        locations,
        builtin_catalog(),
        Duration::from_secs(config.sources.fetch_timeout_secs),
    );

    // Create application state
    let state = AppState {
        assessment: Arc::new(assessment),
        config: Arc::new(config.clone()),
        source_count: sources.len(),
    };

    // Build application
    let app = create_app(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the source list from configuration; empty URLs disable a source
fn configured_sources(config: &Config) -> Vec<Arc<dyn ObservationSource>> {
    let mut sources: Vec<Arc<dyn ObservationSource>> = Vec::new();
    if !config.sources.ground_station_url.is_empty() {
        sources.push(Arc::new(HttpFeedSource::new(
            SourceId::GroundStation,
            config.sources.ground_station_url.clone(),
        )));
    }
    if !config.sources.satellite_url.is_empty() {
        sources.push(Arc::new(HttpFeedSource::new(
            SourceId::Satellite,
            config.sources.satellite_url.clone(),
        )));
    }
    sources
}

/// Create the application router with all routes and middleware
fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Station Weather Resilience API v1.0"
}

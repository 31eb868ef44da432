//! AgriLeaf Advisor - Backend Server
//!
//! Mango leaf disease advisory for smallholder growers: weather driven
//! disease risk, reference information, treatments, care tips and leaf
//! photo diagnosis.

use axum::{routing::get, Router};
use shared::{PhraseCatalog, RiskEvaluator, Translator};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    compression::CompressionLayer,
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
use external::{ClassifierClient, LeafClassifier, WeatherClient, WeatherProvider};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub weather: Arc<dyn WeatherProvider>,
    pub evaluator: Arc<RiskEvaluator>,
    pub translator: Arc<dyn Translator>,
    /// `None` when no classifier endpoint is configured
    pub classifier: Option<Arc<dyn LeafClassifier>>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "agrileaf_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load()?;

    tracing::info!("Starting AgriLeaf Advisor Server");
    tracing::info!("Environment: {}", config.environment);

    if config.weather.api_key.is_empty() {
        tracing::warn!("No weather API key configured; risk endpoints will report unavailable");
    }

    let weather = WeatherClient::with_base_url(
        config.weather.api_key.clone(),
        config.weather.api_endpoint.clone(),
        config.weather.timeout(),
    )?;

    let classifier: Option<Arc<dyn LeafClassifier>> = if config.classifier.is_enabled() {
        tracing::info!("Leaf diagnosis enabled via {}", config.classifier.api_endpoint);
        Some(Arc::new(ClassifierClient::new(
            config.classifier.api_endpoint.clone(),
            config.classifier.api_key.clone(),
            config.classifier.timeout(),
        )?))
    } else {
        tracing::info!("Leaf diagnosis disabled (no classifier endpoint)");
        None
    };

    // Create application state
    let state = AppState {
        config: Arc::new(config.clone()),
        weather: Arc::new(weather),
        evaluator: Arc::new(RiskEvaluator::default()),
        translator: Arc::new(PhraseCatalog::new()),
        classifier,
    };

    // Build application
    let app = create_app(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes and middleware
fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let max_image_bytes = state.config.upload.max_image_bytes;

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/api/v1", routes::api_routes(max_image_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "AgriLeaf Advisor API v1.0"
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

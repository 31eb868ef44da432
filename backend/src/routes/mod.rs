//! Route definitions for the AgriLeaf API

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Multipart framing around the image itself
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Create API routes
pub fn api_routes(max_image_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/weather", weather_routes())
        .nest("/diseases", disease_routes())
        .nest("/treatments", treatment_routes())
        .nest("/care-tips", care_tip_routes())
        .route(
            "/diagnose",
            post(handlers::diagnose_leaf)
                .layer(DefaultBodyLimit::max(max_image_bytes + MULTIPART_OVERHEAD_BYTES)),
        )
}

/// Weather risk routes
fn weather_routes() -> Router<AppState> {
    Router::new()
        .route("/risk", get(handlers::get_weather_risk))
        .route("/forecast", get(handlers::get_forecast_risk))
}

/// Disease reference routes
fn disease_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_diseases))
        .route("/search", get(handlers::search_diseases))
        .route("/:disease", get(handlers::get_disease))
        .route("/:disease/risk", get(handlers::get_disease_risk))
}

/// Treatment recommendation routes
fn treatment_routes() -> Router<AppState> {
    Router::new()
        .route("/:disease", get(handlers::get_treatment))
        .route("/:disease/cost", get(handlers::get_treatment_cost))
        .route("/:disease/comparison", get(handlers::get_treatment_comparison))
        .route("/:disease/organic", get(handlers::get_organic_alternatives))
        .route("/:disease/prevention", get(handlers::get_prevention_schedule))
}

/// Care tip routes
fn care_tip_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_care_tips))
        .route("/seasons/:season", get(handlers::get_seasonal_tips))
        .route("/:category", get(handlers::get_care_tips))
}

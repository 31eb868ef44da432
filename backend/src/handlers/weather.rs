//! HTTP handlers for weather risk endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use shared::{AdvisoryView, ForecastRiskView, Language, Localizer};

use super::{language_param, location_param};
use crate::error::{AppError, AppResult};
use crate::services::AdvisoryService;
use crate::AppState;

/// Query parameters for the current risk advisory
#[derive(Debug, Deserialize)]
pub struct WeatherRiskQuery {
    #[serde(default)]
    pub location: String,
    pub lang: Option<String>,
}

/// Query parameters for the forecast outlook
#[derive(Debug, Deserialize)]
pub struct ForecastQuery {
    #[serde(default)]
    pub location: String,
    pub days: Option<u32>,
    pub lang: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ForecastOutlook {
    pub location: String,
    pub language: Language,
    pub days: u32,
    pub slots: Vec<ForecastRiskView>,
}

/// Current weather and the worst disease risk for a location
pub async fn get_weather_risk(
    State(state): State<AppState>,
    Query(query): Query<WeatherRiskQuery>,
) -> AppResult<Json<AdvisoryView>> {
    let location = location_param(&query.location)?;
    let language = language_param(query.lang.as_deref())?;

    let service = AdvisoryService::new(state.weather.clone(), state.evaluator.clone());
    let advisory = service
        .assess(&location)
        .await
        .ok_or(AppError::WeatherServiceUnavailable)?;

    let localizer = Localizer::new(state.translator.as_ref(), language);
    Ok(Json(localizer.advisory(&location, &advisory)))
}

/// Three-hourly risk outlook for the next few days
pub async fn get_forecast_risk(
    State(state): State<AppState>,
    Query(query): Query<ForecastQuery>,
) -> AppResult<Json<ForecastOutlook>> {
    let location = location_param(&query.location)?;
    let language = language_param(query.lang.as_deref())?;
    let days = query
        .days
        .unwrap_or(state.config.weather.forecast_days)
        .clamp(1, shared::MAX_FORECAST_DAYS);

    let service = AdvisoryService::new(state.weather.clone(), state.evaluator.clone());
    let entries = service
        .forecast_outlook(&location, days)
        .await
        .ok_or(AppError::WeatherServiceUnavailable)?;

    let localizer = Localizer::new(state.translator.as_ref(), language);
    Ok(Json(ForecastOutlook {
        location,
        language,
        days,
        slots: entries.iter().map(|e| localizer.forecast_entry(e)).collect(),
    }))
}

//! Weather API client for fetching weather data
//!
//! Integrates with the OpenWeatherMap API for current conditions and the
//! three-hourly forecast. Every provider failure collapses to
//! [`AppError::WeatherServiceUnavailable`] after being logged.

use async_trait::async_trait;
use chrono::DateTime;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use shared::{validate_humidity, ForecastPoint, WeatherObservation, FORECAST_SLOTS_PER_DAY};
use std::time::Duration;

use crate::error::{AppError, AppResult};

/// Source of weather observations for a free-text location
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Current conditions, one outbound call, no caching
    async fn current(&self, location: &str) -> AppResult<WeatherObservation>;

    /// The first `days` worth of three-hourly forecast slots
    async fn forecast(&self, location: &str, days: u32) -> AppResult<Vec<ForecastPoint>>;
}

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

/// OpenWeatherMap API response for current weather
#[derive(Debug, Deserialize)]
struct OWMCurrentResponse {
    weather: Vec<OWMWeather>,
    main: OWMMain,
    wind: OWMWind,
    rain: Option<OWMRain>,
}

#[derive(Debug, Deserialize)]
struct OWMWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OWMMain {
    temp: f64,
    humidity: i32,
}

#[derive(Debug, Deserialize)]
struct OWMWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OWMRain {
    #[serde(rename = "1h")]
    one_hour: Option<f64>,
    #[serde(rename = "3h")]
    three_hour: Option<f64>,
}

/// OpenWeatherMap API response for forecast
#[derive(Debug, Deserialize)]
struct OWMForecastResponse {
    list: Vec<OWMForecastItem>,
}

#[derive(Debug, Deserialize)]
struct OWMForecastItem {
    dt: i64,
    main: OWMMain,
    weather: Vec<OWMWeather>,
    rain: Option<OWMRain>,
}

/// Provider reading as reported, no rounding; thresholds compare against it
fn to_decimal(value: f64) -> Option<Decimal> {
    Decimal::try_from(value).ok()
}

fn unavailable(context: &str, detail: impl std::fmt::Display) -> AppError {
    tracing::warn!("Weather provider {}: {}", context, detail);
    AppError::WeatherServiceUnavailable
}

impl WeatherClient {
    /// Create a new WeatherClient for an OpenWeatherMap-compatible base URL
    pub fn with_base_url(api_key: String, base_url: String, timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Configuration(format!("Weather HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn fetch<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        location: &str,
    ) -> AppResult<T> {
        let url = format!("{}/{}", self.base_url, path);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", location),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await
            .map_err(|e| unavailable("request failed", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(unavailable("returned an error", format!("{} - {}", status, body)));
        }

        response
            .json()
            .await
            .map_err(|e| unavailable("sent a malformed payload", e))
    }

    /// Fetch current weather conditions for a location such as "Pune, IN"
    pub async fn get_current_weather(&self, location: &str) -> AppResult<WeatherObservation> {
        let data: OWMCurrentResponse = self.fetch("weather", location).await?;
        convert_current_response(data)
    }

    /// Fetch the three-hourly forecast and keep the first `days` worth of slots
    pub async fn get_forecast(&self, location: &str, days: u32) -> AppResult<Vec<ForecastPoint>> {
        let data: OWMForecastResponse = self.fetch("forecast", location).await?;
        convert_forecast_response(data, days as usize * FORECAST_SLOTS_PER_DAY)
    }
}

#[async_trait]
impl WeatherProvider for WeatherClient {
    async fn current(&self, location: &str) -> AppResult<WeatherObservation> {
        self.get_current_weather(location).await
    }

    async fn forecast(&self, location: &str, days: u32) -> AppResult<Vec<ForecastPoint>> {
        self.get_forecast(location, days).await
    }
}

/// Convert OpenWeatherMap current response to our format
fn convert_current_response(data: OWMCurrentResponse) -> AppResult<WeatherObservation> {
    validate_humidity(data.main.humidity).map_err(|e| unavailable("sent bad humidity", e))?;

    let temperature = to_decimal(data.main.temp)
        .ok_or_else(|| unavailable("sent bad temperature", data.main.temp))?;
    let rainfall = data
        .rain
        .and_then(|r| r.one_hour)
        .and_then(to_decimal)
        .unwrap_or(Decimal::ZERO);
    let wind_speed = to_decimal(data.wind.speed)
        .ok_or_else(|| unavailable("sent bad wind speed", data.wind.speed))?;
    let description = data
        .weather
        .into_iter()
        .next()
        .map(|w| w.description)
        .ok_or_else(|| unavailable("sent no weather entry", "empty weather list"))?;

    Ok(WeatherObservation::new(temperature, data.main.humidity, rainfall)
        .with_description(description)
        .with_wind_speed(wind_speed))
}

/// Convert OpenWeatherMap forecast response to our format
fn convert_forecast_response(
    data: OWMForecastResponse,
    slots: usize,
) -> AppResult<Vec<ForecastPoint>> {
    data.list
        .into_iter()
        .take(slots)
        .map(|item| -> AppResult<ForecastPoint> {
            validate_humidity(item.main.humidity)
                .map_err(|e| unavailable("sent bad forecast humidity", e))?;
            let timestamp = DateTime::from_timestamp(item.dt, 0)
                .ok_or_else(|| unavailable("sent bad forecast timestamp", item.dt))?;
            let temperature_celsius = to_decimal(item.main.temp)
                .ok_or_else(|| unavailable("sent bad forecast temperature", item.main.temp))?;
            let description = item
                .weather
                .into_iter()
                .next()
                .map(|w| w.description)
                .ok_or_else(|| unavailable("sent no forecast weather entry", item.dt))?;

            Ok(ForecastPoint {
                timestamp,
                temperature_celsius,
                humidity_percent: item.main.humidity,
                rainfall_mm: item
                    .rain
                    .and_then(|r| r.three_hour)
                    .and_then(to_decimal)
                    .unwrap_or(Decimal::ZERO),
                description,
            })
        })
        .collect()
}

//! Weather data models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Current conditions at a location, as normalized from the weather provider
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherObservation {
    pub temperature_celsius: Decimal,
    pub humidity_percent: i32,
    /// Rainfall over the trailing hour; zero when the provider reports none
    pub rainfall_mm: Decimal,
    pub description: String,
    pub wind_speed_mps: Decimal,
}

impl WeatherObservation {
    pub fn new(
        temperature_celsius: Decimal,
        humidity_percent: i32,
        rainfall_mm: Decimal,
    ) -> Self {
        Self {
            temperature_celsius,
            humidity_percent,
            rainfall_mm,
            description: String::new(),
            wind_speed_mps: Decimal::ZERO,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_wind_speed(mut self, wind_speed_mps: Decimal) -> Self {
        self.wind_speed_mps = wind_speed_mps;
        self
    }
}

/// One three-hourly forecast slot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastPoint {
    pub timestamp: DateTime<Utc>,
    pub temperature_celsius: Decimal,
    pub humidity_percent: i32,
    /// Rainfall over the three-hour slot
    pub rainfall_mm: Decimal,
    pub description: String,
}

impl ForecastPoint {
    /// View the slot as an observation so the same risk rules apply
    pub fn as_observation(&self) -> WeatherObservation {
        WeatherObservation::new(self.temperature_celsius, self.humidity_percent, self.rainfall_mm)
            .with_description(self.description.clone())
    }
}

/// Forecast slots per day from a three-hourly provider
pub const FORECAST_SLOTS_PER_DAY: usize = 8;

/// Maximum forecast horizon the provider serves
pub const MAX_FORECAST_DAYS: u32 = 5;

//! WebAssembly module for AgriLeaf Advisor
//!
//! Provides client-side computation for:
//! - Disease risk from weather readings the browser already has
//! - Decoding on-device classifier scores
//! - Treatment cost estimates
//!
//! Everything here works offline; no call leaves the browser.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Deserialize;
use shared::{decode_scores, estimate_cost, DiseaseId, RiskEvaluator, WeatherObservation};
use wasm_bindgen::prelude::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::log_1(&JsValue::from_str("AgriLeaf advisory module loaded"));
}

/// Weather reading as sent from JavaScript; only temperature and humidity are required
#[derive(Debug, Deserialize)]
struct ObservationInput {
    temperature_celsius: f64,
    humidity_percent: i32,
    #[serde(default)]
    rainfall_mm: f64,
    #[serde(default)]
    description: String,
    #[serde(default)]
    wind_speed_mps: f64,
}

fn parse_observation(observation_json: &str) -> Result<WeatherObservation, String> {
    let input: ObservationInput = serde_json::from_str(observation_json)
        .map_err(|e| format!("Invalid observation JSON: {}", e))?;

    shared::validate_humidity(input.humidity_percent)?;
    let decimal = |value: f64, field: &str| {
        Decimal::try_from(value).map_err(|_| format!("Invalid {}: {}", field, value))
    };

    Ok(WeatherObservation::new(
        decimal(input.temperature_celsius, "temperature")?,
        input.humidity_percent,
        decimal(input.rainfall_mm, "rainfall")?,
    )
    .with_description(input.description)
    .with_wind_speed(decimal(input.wind_speed_mps, "wind speed")?))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| e.to_string())
}

fn disease_risk_json(observation_json: &str, disease: &str) -> Result<String, String> {
    let observation = parse_observation(observation_json)?;
    let disease = DiseaseId::parse(disease).map_err(|e| e.to_string())?;
    to_json(&RiskEvaluator::default().evaluate(Some(&observation), disease))
}

fn advisory_json(observation_json: &str) -> Result<String, String> {
    let observation = parse_observation(observation_json)?;
    to_json(&RiskEvaluator::default().assess(&observation))
}

fn classification_json(scores: &[f32]) -> Result<String, String> {
    let classification = decode_scores(scores)
        .ok_or_else(|| format!("Expected {} finite scores", DiseaseId::ALL.len()))?;
    to_json(&classification)
}

fn treatment_cost(disease: &str, area_sq_ft: f64) -> f64 {
    let area = Decimal::try_from(area_sq_ft).unwrap_or(Decimal::ZERO);
    if area <= Decimal::ZERO {
        return 0.0;
    }
    estimate_cost(DiseaseId::parse(disease).ok(), area)
        .and_then(|cost| cost.to_f64())
        .unwrap_or(0.0)
}

/// Risk assessment JSON for one disease
#[wasm_bindgen]
pub fn evaluate_disease_risk(observation_json: &str, disease: &str) -> Result<String, JsValue> {
    disease_risk_json(observation_json, disease).map_err(|e| JsValue::from_str(&e))
}

/// Consolidated advisory JSON across the monitored diseases
#[wasm_bindgen]
pub fn assess_observation(observation_json: &str) -> Result<String, JsValue> {
    advisory_json(observation_json).map_err(|e| JsValue::from_str(&e))
}

/// Decode raw classifier scores (label order) into `{ disease, confidence_percent }`
#[wasm_bindgen]
pub fn decode_classifier_scores(scores: &[f32]) -> Result<String, JsValue> {
    classification_json(scores).map_err(|e| JsValue::from_str(&e))
}

/// Disease labels in classifier order
#[wasm_bindgen]
pub fn disease_labels() -> js_sys::Array {
    DiseaseId::ALL
        .iter()
        .map(|d| JsValue::from_str(d.label()))
        .collect()
}

/// Estimated treatment cost; unknown diseases use the default rate, and an
/// area too large to price gives 0
#[wasm_bindgen]
pub fn estimate_treatment_cost(disease: &str, area_sq_ft: f64) -> f64 {
    treatment_cost(disease, area_sq_ft)
}

//! Weather-driven disease risk models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::disease::DiseaseId;

/// Risk label attached to a disease profile
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RiskLevel {
    #[serde(rename = "Low")]
    Low,
    #[serde(rename = "Moderate")]
    Moderate,
    #[serde(rename = "High")]
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
    /// Returned when no assessment could be made
    #[serde(rename = "Unknown")]
    Unknown,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
            RiskLevel::VeryHigh => "Very High",
            RiskLevel::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A weather condition found to favor a disease
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RiskFactor {
    #[serde(rename = "Temperature favorable")]
    TemperatureFavorable,
    #[serde(rename = "High humidity")]
    HighHumidity,
    #[serde(rename = "Recent rainfall")]
    RecentRainfall,
}

impl RiskFactor {
    pub fn label(&self) -> &'static str {
        match self {
            RiskFactor::TemperatureFavorable => "Temperature favorable",
            RiskFactor::HighHumidity => "High humidity",
            RiskFactor::RecentRainfall => "Recent rainfall",
        }
    }
}

impl std::fmt::Display for RiskFactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Advice tier, selected by how many risk factors matched
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    /// No factor matched
    ContinueMonitoring,
    /// Exactly one factor matched
    PreventiveMeasures,
    /// Two or more factors matched
    PreventiveFungicide,
    /// No profile or no weather data
    Unassessable,
}

impl Recommendation {
    pub fn for_match_count(count: usize) -> Self {
        match count {
            0 => Recommendation::ContinueMonitoring,
            1 => Recommendation::PreventiveMeasures,
            _ => Recommendation::PreventiveFungicide,
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            Recommendation::ContinueMonitoring => {
                "Low risk conditions. Continue regular monitoring."
            }
            Recommendation::PreventiveMeasures => {
                "Moderate risk. Monitor plants closely and take preventive measures."
            }
            Recommendation::PreventiveFungicide => {
                "High risk conditions detected. Consider preventive fungicide application."
            }
            Recommendation::Unassessable => "Unable to assess risk",
        }
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text())
    }
}

/// Inclusive temperature band in °C
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TemperatureRange {
    pub min_celsius: Decimal,
    pub max_celsius: Decimal,
}

impl TemperatureRange {
    pub fn contains(&self, temperature: Decimal) -> bool {
        self.min_celsius <= temperature && temperature <= self.max_celsius
    }
}

/// Relative humidity band in percent
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct HumidityBand {
    pub min_percent: i32,
    /// Carried with the profile but not evaluated by the rules
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_percent: Option<i32>,
}

/// Weather thresholds for one disease; absent fields are not checked
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiseaseRiskProfile {
    pub temperature: Option<TemperatureRange>,
    pub humidity: Option<HumidityBand>,
    pub rainfall_min_mm: Option<Decimal>,
    pub baseline: RiskLevel,
}

impl DiseaseRiskProfile {
    pub fn new(baseline: RiskLevel) -> Self {
        Self {
            temperature: None,
            humidity: None,
            rainfall_min_mm: None,
            baseline,
        }
    }

    pub fn with_temperature(mut self, min_celsius: i64, max_celsius: i64) -> Self {
        self.temperature = Some(TemperatureRange {
            min_celsius: Decimal::from(min_celsius),
            max_celsius: Decimal::from(max_celsius),
        });
        self
    }

    pub fn with_humidity_floor(mut self, min_percent: i32) -> Self {
        let max_percent = self.humidity.and_then(|h| h.max_percent);
        self.humidity = Some(HumidityBand {
            min_percent,
            max_percent,
        });
        self
    }

    pub fn with_humidity_ceiling(mut self, max_percent: i32) -> Self {
        let min_percent = self.humidity.map(|h| h.min_percent).unwrap_or(0);
        self.humidity = Some(HumidityBand {
            min_percent,
            max_percent: Some(max_percent),
        });
        self
    }

    pub fn with_rainfall_floor(mut self, min_mm: i64) -> Self {
        self.rainfall_min_mm = Some(Decimal::from(min_mm));
        self
    }
}

/// Immutable table of risk profiles, built once at startup
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RiskProfileSet {
    profiles: BTreeMap<DiseaseId, DiseaseRiskProfile>,
}

impl RiskProfileSet {
    /// The profiles for the four weather-sensitive mango diseases
    pub fn standard() -> Self {
        RiskProfileSet::default()
            .with_profile(
                DiseaseId::Anthracnose,
                DiseaseRiskProfile::new(RiskLevel::High)
                    .with_temperature(20, 30)
                    .with_humidity_floor(80)
                    .with_rainfall_floor(5),
            )
            .with_profile(
                DiseaseId::BacterialCanker,
                DiseaseRiskProfile::new(RiskLevel::VeryHigh)
                    .with_temperature(25, 35)
                    .with_humidity_floor(70)
                    .with_rainfall_floor(10),
            )
            .with_profile(
                DiseaseId::PowderyMildew,
                DiseaseRiskProfile::new(RiskLevel::Moderate)
                    .with_temperature(20, 25)
                    .with_humidity_floor(40)
                    .with_humidity_ceiling(70),
            )
            .with_profile(
                DiseaseId::CuttingWeevil,
                DiseaseRiskProfile::new(RiskLevel::Moderate)
                    .with_temperature(25, 30)
                    .with_humidity_floor(60),
            )
    }

    pub fn with_profile(mut self, disease: DiseaseId, profile: DiseaseRiskProfile) -> Self {
        self.profiles.insert(disease, profile);
        self
    }

    pub fn get(&self, disease: DiseaseId) -> Option<&DiseaseRiskProfile> {
        self.profiles.get(&disease)
    }

    pub fn diseases(&self) -> impl Iterator<Item = DiseaseId> + '_ {
        self.profiles.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

/// Outcome of checking one disease against one observation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RiskAssessment {
    pub disease: DiseaseId,
    pub risk_level: RiskLevel,
    pub risk_factors: Vec<RiskFactor>,
    pub recommendation: Recommendation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature_celsius: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub humidity_percent: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rainfall_mm: Option<Decimal>,
}

impl RiskAssessment {
    /// Sentinel for a disease without a profile or without weather data
    pub fn unassessable(disease: DiseaseId) -> Self {
        Self {
            disease,
            risk_level: RiskLevel::Unknown,
            risk_factors: Vec::new(),
            recommendation: Recommendation::Unassessable,
            temperature_celsius: None,
            humidity_percent: None,
            rainfall_mm: None,
        }
    }

    pub fn matched_factor_count(&self) -> usize {
        self.risk_factors.len()
    }

    pub fn is_assessed(&self) -> bool {
        self.recommendation != Recommendation::Unassessable
    }
}

/// Consolidated advisory over the monitored disease set
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdvisoryResult {
    pub temperature_celsius: Decimal,
    pub humidity_percent: i32,
    pub rainfall_mm: Decimal,
    pub description: String,
    pub wind_speed_mps: Decimal,
    pub highest_risk_disease: DiseaseId,
    pub risk_level: RiskLevel,
    pub recommendation: Recommendation,
    /// Per-disease breakdown in monitored order
    pub all_risks: Vec<RiskAssessment>,
}

impl AdvisoryResult {
    pub fn risk_for(&self, disease: DiseaseId) -> Option<&RiskAssessment> {
        self.all_risks.iter().find(|r| r.disease == disease)
    }
}

/// Worst-case risk for one forecast slot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastRiskEntry {
    pub timestamp: DateTime<Utc>,
    pub description: String,
    pub temperature_celsius: Decimal,
    pub humidity_percent: i32,
    pub rainfall_mm: Decimal,
    pub highest_risk_disease: DiseaseId,
    pub risk_level: RiskLevel,
    pub recommendation: Recommendation,
    pub matched_factor_count: usize,
}

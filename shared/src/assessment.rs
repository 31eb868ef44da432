//! Disease risk rules
//!
//! Evaluates weather observations against per-disease thresholds and
//! aggregates the results into a single advisory. Everything here is pure:
//! fetching the weather and localizing the output happen elsewhere.

use crate::models::{
    AdvisoryResult, DiseaseId, ForecastPoint, ForecastRiskEntry, Recommendation, RiskAssessment,
    RiskFactor, RiskProfileSet, WeatherObservation,
};

/// Diseases covered by the consolidated advisory, in tie-break order
pub const MONITORED_DISEASES: [DiseaseId; 4] = [
    DiseaseId::Anthracnose,
    DiseaseId::BacterialCanker,
    DiseaseId::PowderyMildew,
    DiseaseId::CuttingWeevil,
];

/// Applies a fixed set of risk profiles to weather observations
#[derive(Debug, Clone)]
pub struct RiskEvaluator {
    profiles: RiskProfileSet,
}

impl Default for RiskEvaluator {
    fn default() -> Self {
        Self::new(RiskProfileSet::standard())
    }
}

impl RiskEvaluator {
    pub fn new(profiles: RiskProfileSet) -> Self {
        Self { profiles }
    }

    pub fn profiles(&self) -> &RiskProfileSet {
        &self.profiles
    }

    /// Check one disease against an observation.
    ///
    /// Without an observation, or without a profile for `disease`, the result
    /// is the `Unknown` sentinel. Otherwise the reported level is the
    /// profile's baseline whatever the match count; only the recommendation
    /// follows the number of matched factors.
    pub fn evaluate(
        &self,
        observation: Option<&WeatherObservation>,
        disease: DiseaseId,
    ) -> RiskAssessment {
        let (observation, profile) = match (observation, self.profiles.get(disease)) {
            (Some(o), Some(p)) => (o, p),
            _ => return RiskAssessment::unassessable(disease),
        };

        let mut risk_factors = Vec::with_capacity(3);

        if let Some(range) = &profile.temperature {
            if range.contains(observation.temperature_celsius) {
                risk_factors.push(RiskFactor::TemperatureFavorable);
            }
        }

        // Only the floor is enforced; max_percent is informational.
        if let Some(band) = &profile.humidity {
            if observation.humidity_percent >= band.min_percent {
                risk_factors.push(RiskFactor::HighHumidity);
            }
        }

        if let Some(min_mm) = profile.rainfall_min_mm {
            if observation.rainfall_mm >= min_mm {
                risk_factors.push(RiskFactor::RecentRainfall);
            }
        }

        RiskAssessment {
            disease,
            risk_level: profile.baseline,
            recommendation: Recommendation::for_match_count(risk_factors.len()),
            risk_factors,
            temperature_celsius: Some(observation.temperature_celsius),
            humidity_percent: Some(observation.humidity_percent),
            rainfall_mm: Some(observation.rainfall_mm),
        }
    }

    /// Evaluate every monitored disease and pick the worst case
    pub fn assess(&self, observation: &WeatherObservation) -> AdvisoryResult {
        let all_risks: Vec<RiskAssessment> = MONITORED_DISEASES
            .iter()
            .map(|disease| self.evaluate(Some(observation), *disease))
            .collect();

        let worst = highest_risk(&all_risks)
            .cloned()
            .unwrap_or_else(|| RiskAssessment::unassessable(MONITORED_DISEASES[0]));

        AdvisoryResult {
            temperature_celsius: observation.temperature_celsius,
            humidity_percent: observation.humidity_percent,
            rainfall_mm: observation.rainfall_mm,
            description: observation.description.clone(),
            wind_speed_mps: observation.wind_speed_mps,
            highest_risk_disease: worst.disease,
            risk_level: worst.risk_level,
            recommendation: worst.recommendation,
            all_risks,
        }
    }

    /// Worst-case outlook for each forecast slot
    pub fn assess_forecast(&self, forecast: &[ForecastPoint]) -> Vec<ForecastRiskEntry> {
        forecast
            .iter()
            .map(|point| {
                let advisory = self.assess(&point.as_observation());
                let matched = advisory
                    .risk_for(advisory.highest_risk_disease)
                    .map(RiskAssessment::matched_factor_count)
                    .unwrap_or(0);

                ForecastRiskEntry {
                    timestamp: point.timestamp,
                    description: point.description.clone(),
                    temperature_celsius: point.temperature_celsius,
                    humidity_percent: point.humidity_percent,
                    rainfall_mm: point.rainfall_mm,
                    highest_risk_disease: advisory.highest_risk_disease,
                    risk_level: advisory.risk_level,
                    recommendation: advisory.recommendation,
                    matched_factor_count: matched,
                }
            })
            .collect()
    }
}

/// Assessment with the most matched factors; the earliest wins a tie
pub fn highest_risk(assessments: &[RiskAssessment]) -> Option<&RiskAssessment> {
    assessments.iter().fold(None, |best, candidate| match best {
        Some(current) if current.matched_factor_count() >= candidate.matched_factor_count() => {
            Some(current)
        }
        _ => Some(candidate),
    })
}

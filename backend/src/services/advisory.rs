//! Weather risk advisory service
//!
//! Fetches conditions once per request and runs them through the risk rules.

use shared::{
    AdvisoryResult, DiseaseId, ForecastRiskEntry, RiskAssessment, RiskEvaluator, MAX_FORECAST_DAYS,
};
use std::sync::Arc;

use crate::external::WeatherProvider;

/// Combines a weather provider with the disease risk rules
#[derive(Clone)]
pub struct AdvisoryService {
    provider: Arc<dyn WeatherProvider>,
    evaluator: Arc<RiskEvaluator>,
}

impl AdvisoryService {
    pub fn new(provider: Arc<dyn WeatherProvider>, evaluator: Arc<RiskEvaluator>) -> Self {
        Self {
            provider,
            evaluator,
        }
    }

    /// Consolidated advisory across the monitored diseases.
    ///
    /// `None` when the weather provider could not be reached; the cause has
    /// already been logged by the provider.
    pub async fn assess(&self, location: &str) -> Option<AdvisoryResult> {
        let observation = self.provider.current(location).await.ok()?;
        let result = self.evaluator.assess(&observation);

        tracing::debug!(
            location,
            disease = %result.highest_risk_disease,
            risk_level = %result.risk_level,
            "Weather risk assessed"
        );
        Some(result)
    }

    /// Risk for a single disease; the unassessable sentinel when weather is unavailable
    pub async fn disease_risk(&self, location: &str, disease: DiseaseId) -> RiskAssessment {
        let observation = self.provider.current(location).await.ok();
        self.evaluator.evaluate(observation.as_ref(), disease)
    }

    /// Per-slot risk outlook over the next `days` (clamped to what the provider serves)
    pub async fn forecast_outlook(
        &self,
        location: &str,
        days: u32,
    ) -> Option<Vec<ForecastRiskEntry>> {
        let days = days.clamp(1, MAX_FORECAST_DAYS);
        let points = self.provider.forecast(location, days).await.ok()?;
        Some(self.evaluator.assess_forecast(&points))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AppError, AppResult};
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;
    use shared::{ForecastPoint, Recommendation, RiskLevel, WeatherObservation};
    use std::sync::Mutex;

    /// Provider stub that serves a fixed observation and records requested days
    struct StubProvider {
        observation: Option<WeatherObservation>,
        requested_days: Mutex<Vec<u32>>,
    }

    impl StubProvider {
        fn serving(observation: WeatherObservation) -> Self {
            Self {
                observation: Some(observation),
                requested_days: Mutex::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                observation: None,
                requested_days: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl WeatherProvider for StubProvider {
        async fn current(&self, _location: &str) -> AppResult<WeatherObservation> {
            self.observation
                .clone()
                .ok_or(AppError::WeatherServiceUnavailable)
        }

        async fn forecast(&self, _location: &str, days: u32) -> AppResult<Vec<ForecastPoint>> {
            self.requested_days.lock().unwrap().push(days);
            let obs = self
                .observation
                .clone()
                .ok_or(AppError::WeatherServiceUnavailable)?;
            let start = Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap();
            Ok((0..days as i64 * 8)
                .map(|i| ForecastPoint {
                    timestamp: start + chrono::Duration::hours(3 * i),
                    temperature_celsius: obs.temperature_celsius,
                    humidity_percent: obs.humidity_percent,
                    rainfall_mm: obs.rainfall_mm,
                    description: obs.description.clone(),
                })
                .collect())
        }
    }

    fn service(provider: StubProvider) -> (AdvisoryService, Arc<StubProvider>) {
        let provider = Arc::new(provider);
        let service = AdvisoryService::new(provider.clone(), Arc::new(RiskEvaluator::default()));
        (service, provider)
    }

    fn monsoon() -> WeatherObservation {
        WeatherObservation::new(Decimal::from(28), 85, Decimal::from(6))
            .with_description("moderate rain")
    }

    #[tokio::test]
    async fn test_assess_returns_worst_disease() {
        let (service, _) = service(StubProvider::serving(monsoon()));

        let result = service.assess("Ratnagiri").await.unwrap();
        assert_eq!(result.highest_risk_disease, DiseaseId::Anthracnose);
        assert_eq!(result.risk_level, RiskLevel::High);
        assert_eq!(result.recommendation, Recommendation::PreventiveFungicide);
        assert_eq!(result.all_risks.len(), 4);
        assert_eq!(result.description, "moderate rain");
    }

    #[tokio::test]
    async fn test_assess_is_none_when_provider_fails() {
        let (service, _) = service(StubProvider::failing());
        assert!(service.assess("Ratnagiri").await.is_none());
    }

    #[tokio::test]
    async fn test_disease_risk_falls_back_to_sentinel() {
        let (service, _) = service(StubProvider::failing());

        let risk = service.disease_risk("Ratnagiri", DiseaseId::Anthracnose).await;
        assert_eq!(risk.risk_level, RiskLevel::Unknown);
        assert_eq!(risk.recommendation, Recommendation::Unassessable);
        assert!(risk.risk_factors.is_empty());
    }

    #[tokio::test]
    async fn test_disease_risk_without_profile_is_sentinel() {
        let (service, _) = service(StubProvider::serving(monsoon()));

        let risk = service.disease_risk("Ratnagiri", DiseaseId::DieBack).await;
        assert!(!risk.is_assessed());
    }

    #[tokio::test]
    async fn test_forecast_days_are_clamped() {
        let (service, provider) = service(StubProvider::serving(monsoon()));

        let outlook = service.forecast_outlook("Ratnagiri", 0).await.unwrap();
        assert_eq!(outlook.len(), 8);
        service.forecast_outlook("Ratnagiri", 30).await.unwrap();

        assert_eq!(*provider.requested_days.lock().unwrap(), vec![1, MAX_FORECAST_DAYS]);
    }

    #[tokio::test]
    async fn test_forecast_outlook_rates_each_slot() {
        let (service, _) = service(StubProvider::serving(monsoon()));

        let outlook = service.forecast_outlook("Ratnagiri", 2).await.unwrap();
        assert_eq!(outlook.len(), 16);
        assert!(outlook
            .iter()
            .all(|e| e.highest_risk_disease == DiseaseId::Anthracnose && e.matched_factor_count == 3));
    }
}

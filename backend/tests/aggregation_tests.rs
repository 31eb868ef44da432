//! Risk aggregation tests
//!
//! Tests for the consolidated advisory including:
//! - Worst disease chosen by matched-factor count, not by level
//! - Ties resolved by monitored order
//! - Forecast outlook built from the same rules

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;
use shared::{
    highest_risk, DiseaseId, DiseaseRiskProfile, ForecastPoint, Recommendation, RiskEvaluator,
    RiskLevel, RiskProfileSet, WeatherObservation, MONITORED_DISEASES,
};
use std::str::FromStr;

// Helper to create Decimal from string
fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn obs(temp: &str, humidity: i32, rain: &str) -> WeatherObservation {
    WeatherObservation::new(dec(temp), humidity, dec(rain))
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_monitored_order() {
        assert_eq!(
            MONITORED_DISEASES,
            [
                DiseaseId::Anthracnose,
                DiseaseId::BacterialCanker,
                DiseaseId::PowderyMildew,
                DiseaseId::CuttingWeevil,
            ]
        );
    }

    #[test]
    fn test_monsoon_day_picks_anthracnose() {
        let advisory = RiskEvaluator::default().assess(&obs("28", 85, "6").with_description("rain"));

        assert_eq!(advisory.highest_risk_disease, DiseaseId::Anthracnose);
        assert_eq!(advisory.risk_level, RiskLevel::High);
        assert_eq!(advisory.recommendation, Recommendation::PreventiveFungicide);
        assert_eq!(advisory.description, "rain");
        assert_eq!(advisory.humidity_percent, 85);

        let order: Vec<DiseaseId> = advisory.all_risks.iter().map(|r| r.disease).collect();
        assert_eq!(order, MONITORED_DISEASES.to_vec());
    }

    /// Bacterial Canker and Cutting Weevil both match two factors
    #[test]
    fn test_tie_goes_to_first_listed() {
        let advisory = RiskEvaluator::default().assess(&obs("27", 75, "0"));

        assert_eq!(
            advisory.risk_for(DiseaseId::BacterialCanker).unwrap().matched_factor_count(),
            2
        );
        assert_eq!(
            advisory.risk_for(DiseaseId::CuttingWeevil).unwrap().matched_factor_count(),
            2
        );
        assert_eq!(advisory.highest_risk_disease, DiseaseId::BacterialCanker);
        assert_eq!(advisory.risk_level, RiskLevel::VeryHigh);
    }

    /// A lower baseline still wins when it matches more factors
    #[test]
    fn test_count_beats_level() {
        let advisory = RiskEvaluator::default().assess(&obs("22", 50, "0"));

        assert_eq!(advisory.highest_risk_disease, DiseaseId::PowderyMildew);
        assert_eq!(advisory.risk_level, RiskLevel::Moderate);
        assert_eq!(advisory.recommendation, Recommendation::PreventiveFungicide);
    }

    #[test]
    fn test_nothing_matches_reports_first_disease() {
        let advisory = RiskEvaluator::default().assess(&obs("-5", 0, "0"));

        assert_eq!(advisory.highest_risk_disease, DiseaseId::Anthracnose);
        assert_eq!(advisory.risk_level, RiskLevel::High);
        assert_eq!(advisory.recommendation, Recommendation::ContinueMonitoring);
    }

    /// Missing profiles become sentinels without stopping the aggregation
    #[test]
    fn test_partial_profile_set() {
        let profiles = RiskProfileSet::default().with_profile(
            DiseaseId::CuttingWeevil,
            DiseaseRiskProfile::new(RiskLevel::Moderate)
                .with_temperature(25, 30)
                .with_humidity_floor(60),
        );
        let advisory = RiskEvaluator::new(profiles).assess(&obs("27", 10, "0"));

        assert_eq!(advisory.highest_risk_disease, DiseaseId::CuttingWeevil);
        assert_eq!(advisory.all_risks.len(), 4);
        assert_eq!(
            advisory.all_risks.iter().filter(|r| !r.is_assessed()).count(),
            3
        );
    }

    #[test]
    fn test_highest_risk_of_empty_slice() {
        assert!(highest_risk(&[]).is_none());
    }

    #[test]
    fn test_forecast_outlook_per_slot() {
        let start = Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap();
        let slot = |hours: i64, temp: &str, humidity: i32, rain: &str| ForecastPoint {
            timestamp: start + chrono::Duration::hours(hours),
            temperature_celsius: dec(temp),
            humidity_percent: humidity,
            rainfall_mm: dec(rain),
            description: "forecast".to_string(),
        };
        let forecast = vec![slot(0, "28", 85, "6"), slot(3, "27", 75, "0"), slot(6, "-5", 0, "0")];

        let outlook = RiskEvaluator::default().assess_forecast(&forecast);

        assert_eq!(outlook.len(), 3);
        assert_eq!(outlook[0].highest_risk_disease, DiseaseId::Anthracnose);
        assert_eq!(outlook[0].matched_factor_count, 3);
        assert_eq!(outlook[1].highest_risk_disease, DiseaseId::BacterialCanker);
        assert_eq!(outlook[1].matched_factor_count, 2);
        assert_eq!(outlook[2].matched_factor_count, 0);
        assert_eq!(outlook[2].timestamp, start + chrono::Duration::hours(6));
    }
}

// ============================================================================
// Property Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    fn any_observation() -> impl Strategy<Value = WeatherObservation> {
        (-100i64..=500, 0i32..=100, 0i64..=300).prop_map(|(temp, humidity, rain)| {
            WeatherObservation::new(Decimal::new(temp, 1), humidity, Decimal::new(rain, 1))
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// The chosen disease has the highest count and is the first to reach it
        #[test]
        fn prop_worst_is_first_maximum(observation in any_observation()) {
            let advisory = RiskEvaluator::default().assess(&observation);
            let counts: Vec<usize> = advisory.all_risks.iter().map(|r| r.matched_factor_count()).collect();
            let max = counts.iter().copied().max().unwrap();
            let first = counts.iter().position(|c| *c == max).unwrap();

            prop_assert_eq!(advisory.highest_risk_disease, MONITORED_DISEASES[first]);
            prop_assert_eq!(advisory.recommendation, Recommendation::for_match_count(max));
            prop_assert_eq!(advisory.risk_level, advisory.all_risks[first].risk_level);
        }

        /// Shared metrics are echoed untouched
        #[test]
        fn prop_metrics_are_echoed(observation in any_observation()) {
            let advisory = RiskEvaluator::default().assess(&observation);

            prop_assert_eq!(advisory.temperature_celsius, observation.temperature_celsius);
            prop_assert_eq!(advisory.humidity_percent, observation.humidity_percent);
            prop_assert_eq!(advisory.rainfall_mm, observation.rainfall_mm);
            prop_assert_eq!(advisory.all_risks.len(), MONITORED_DISEASES.len());
        }

        /// A forecast slot rates the same as the equivalent observation
        #[test]
        fn prop_forecast_slot_matches_observation(observation in any_observation()) {
            let evaluator = RiskEvaluator::default();
            let point = ForecastPoint {
                timestamp: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
                temperature_celsius: observation.temperature_celsius,
                humidity_percent: observation.humidity_percent,
                rainfall_mm: observation.rainfall_mm,
                description: String::new(),
            };

            let advisory = evaluator.assess(&observation);
            let outlook = evaluator.assess_forecast(&[point]);

            prop_assert_eq!(outlook[0].highest_risk_disease, advisory.highest_risk_disease);
            prop_assert_eq!(outlook[0].recommendation, advisory.recommendation);
        }
    }
}

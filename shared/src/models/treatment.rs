//! Treatment recommendations per disease

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::disease::DiseaseId;

/// A chemical product with its dosage
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Medicine {
    pub name: String,
    pub dosage: String,
}

/// Treatment plan for a disease
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TreatmentPlan {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disease: Option<DiseaseId>,
    pub treatment: String,
    pub medicines: Vec<Medicine>,
    pub organic_options: Vec<String>,
    pub prevention: Vec<String>,
    pub application_schedule: String,
    pub waiting_period: String,
}

/// Chemical vs organic trade-offs for one approach
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApproachSummary {
    pub effectiveness: String,
    pub cost: String,
    pub environmental_impact: String,
    pub waiting_period: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TreatmentComparison {
    pub chemical: ApproachSummary,
    pub organic: ApproachSummary,
}

struct TreatmentEntry {
    treatment: &'static str,
    medicines: &'static [(&'static str, &'static str)],
    organic_options: &'static [&'static str],
    prevention: &'static [&'static str],
    application_schedule: &'static str,
    waiting_period: &'static str,
}

fn entry(id: DiseaseId) -> TreatmentEntry {
    match id {
        DiseaseId::Anthracnose => TreatmentEntry {
            treatment: "Apply fungicide treatment combined with cultural practices",
            medicines: &[
                ("Copper Oxychloride", "2.5g per liter of water"),
                ("Carbendazim", "1g per liter of water"),
                ("Mancozeb", "2g per liter of water"),
            ],
            organic_options: &[
                "Neem oil spray (5ml per liter of water)",
                "Trichoderma harzianum application",
                "Garlic extract spray",
                "Baking soda solution (1 teaspoon per liter)",
            ],
            prevention: &[
                "Remove and destroy infected plant parts",
                "Improve air circulation around plants",
                "Avoid overhead irrigation",
                "Apply balanced fertilizers",
                "Use disease-free planting material",
            ],
            application_schedule: "Spray every 7-10 days during favorable conditions",
            waiting_period: "7 days before harvest",
        },
        DiseaseId::BacterialCanker => TreatmentEntry {
            treatment: "Use copper-based bactericides and cultural practices",
            medicines: &[
                ("Streptomycin + Tetracycline", "100ppm solution"),
                ("Copper Hydroxide", "2g per liter of water"),
                ("Kasugamycin", "1ml per liter of water"),
            ],
            organic_options: &[
                "Copper soap spray",
                "Neem oil with baking soda",
                "Garlic and chili extract",
                "Beneficial bacteria (Bacillus subtilis)",
            ],
            prevention: &[
                "Use disease-free planting material",
                "Disinfect pruning tools between cuts",
                "Avoid working in wet conditions",
                "Improve drainage around plants",
                "Apply copper sprays preventively",
            ],
            application_schedule: "Spray every 5-7 days during wet weather",
            waiting_period: "14 days before harvest",
        },
        DiseaseId::CuttingWeevil => TreatmentEntry {
            treatment: "Integrated pest management approach",
            medicines: &[
                ("Imidacloprid", "0.5ml per liter of water"),
                ("Thiamethoxam", "0.3g per liter of water"),
                ("Fipronil", "1ml per liter of water"),
            ],
            organic_options: &[
                "Neem cake application in soil",
                "Pheromone traps for monitoring",
                "Beneficial nematodes",
                "Beauveria bassiana spray",
            ],
            prevention: &[
                "Remove and destroy infested fruits",
                "Use pheromone traps for monitoring",
                "Maintain orchard sanitation",
                "Collect and destroy fallen fruits",
                "Use resistant varieties",
            ],
            application_schedule: "Spray at fruit set and repeat every 15 days",
            waiting_period: "21 days before harvest",
        },
        DiseaseId::DieBack => TreatmentEntry {
            treatment: "Fungicide application and pruning management",
            medicines: &[
                ("Carbendazim", "1g per liter of water"),
                ("Thiophanate-methyl", "1g per liter of water"),
                ("Propiconazole", "1ml per liter of water"),
            ],
            organic_options: &[
                "Prune affected branches 6 inches below infection",
                "Apply Trichoderma to cut surfaces",
                "Use copper-based fungicides",
                "Improve plant nutrition",
            ],
            prevention: &[
                "Prune during dry weather",
                "Disinfect pruning tools between cuts",
                "Avoid mechanical injuries",
                "Maintain plant vigor",
                "Improve air circulation",
            ],
            application_schedule: "Spray after pruning and repeat every 14 days",
            waiting_period: "7 days before harvest",
        },
        DiseaseId::GallMidge => TreatmentEntry {
            treatment: "Insecticide application and cultural control",
            medicines: &[
                ("Dimethoate", "1.5ml per liter of water"),
                ("Methyl demeton", "1ml per liter of water"),
                ("Acephate", "1.5g per liter of water"),
            ],
            organic_options: &[
                "Neem oil spray (5ml per liter)",
                "Beneficial fungi (Metarhizium)",
                "Sticky traps for adults",
                "Remove and destroy galled leaves",
            ],
            prevention: &[
                "Monitor for adult flies",
                "Remove affected leaves promptly",
                "Maintain orchard hygiene",
                "Encourage natural predators",
                "Use resistant varieties",
            ],
            application_schedule: "Spray at first sign of infestation, repeat weekly",
            waiting_period: "14 days before harvest",
        },
        DiseaseId::Healthy => TreatmentEntry {
            treatment: "Continue good agricultural practices",
            medicines: &[],
            organic_options: &[
                "Regular neem oil spray as preventive",
                "Balanced organic nutrition",
                "Compost tea application",
                "Beneficial microbe application",
            ],
            prevention: &[
                "Maintain regular monitoring",
                "Provide balanced nutrition",
                "Ensure proper irrigation",
                "Practice crop rotation",
                "Maintain orchard hygiene",
            ],
            application_schedule: "Regular preventive sprays every 15-20 days",
            waiting_period: "Not applicable",
        },
        DiseaseId::PowderyMildew => TreatmentEntry {
            treatment: "Fungicide application with sulfur-based products",
            medicines: &[
                ("Wettable sulfur", "2g per liter of water"),
                ("Dinocap", "1ml per liter of water"),
                ("Hexaconazole", "0.5ml per liter of water"),
            ],
            organic_options: &[
                "Potassium bicarbonate spray (3g per liter)",
                "Milk spray (1:10 ratio with water)",
                "Neem oil with baking soda",
                "Sulfur dust application",
            ],
            prevention: &[
                "Improve air circulation",
                "Avoid overhead irrigation",
                "Remove affected plant parts",
                "Maintain proper plant spacing",
                "Apply preventive fungicides",
            ],
            application_schedule: "Spray every 7-10 days during favorable conditions",
            waiting_period: "7 days before harvest",
        },
        DiseaseId::SootyMould => TreatmentEntry {
            treatment: "Control sap-sucking insects and wash plants",
            medicines: &[
                ("Imidacloprid", "0.5ml per liter of water"),
                ("Acephate", "1g per liter of water"),
                ("Thiamethoxam", "0.3g per liter of water"),
            ],
            organic_options: &[
                "Insecticidal soap spray",
                "Neem oil application",
                "Release beneficial insects",
                "Horticultural oil spray",
            ],
            prevention: &[
                "Control ant populations",
                "Monitor for sap-sucking insects",
                "Maintain plant hygiene",
                "Encourage beneficial insects",
                "Regular washing of leaves",
            ],
            application_schedule: "Spray insecticides as needed, wash plants regularly",
            waiting_period: "7 days before harvest",
        },
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl TreatmentPlan {
    /// Generic advice when the disease is not in the catalog
    pub fn consult_expert() -> Self {
        TreatmentPlan {
            disease: None,
            treatment: "Consult local agricultural expert".to_string(),
            medicines: Vec::new(),
            organic_options: vec!["Contact agricultural extension service".to_string()],
            prevention: vec![
                "Monitor plant regularly".to_string(),
                "Maintain good hygiene".to_string(),
            ],
            application_schedule: "As recommended by expert".to_string(),
            waiting_period: "Follow expert advice".to_string(),
        }
    }
}

pub fn treatment_plan(id: DiseaseId) -> TreatmentPlan {
    let e = entry(id);
    TreatmentPlan {
        disease: Some(id),
        treatment: e.treatment.to_string(),
        medicines: e
            .medicines
            .iter()
            .map(|(name, dosage)| Medicine {
                name: name.to_string(),
                dosage: dosage.to_string(),
            })
            .collect(),
        organic_options: owned(e.organic_options),
        prevention: owned(e.prevention),
        application_schedule: e.application_schedule.to_string(),
        waiting_period: e.waiting_period.to_string(),
    }
}

/// Plan for an optional disease; `None` gets the consult-an-expert plan
pub fn treatment_plan_or_default(id: Option<DiseaseId>) -> TreatmentPlan {
    id.map(treatment_plan).unwrap_or_else(TreatmentPlan::consult_expert)
}

pub fn organic_alternatives(id: Option<DiseaseId>) -> Vec<String> {
    treatment_plan_or_default(id).organic_options
}

pub fn prevention_schedule(id: Option<DiseaseId>) -> Vec<String> {
    treatment_plan_or_default(id).prevention
}

/// Base treatment cost per 1000 sq ft
pub fn base_cost_per_thousand_sq_ft(id: Option<DiseaseId>) -> Decimal {
    let cost = match id {
        Some(DiseaseId::Anthracnose) => 1500,
        Some(DiseaseId::BacterialCanker) => 2000,
        Some(DiseaseId::CuttingWeevil) => 1800,
        Some(DiseaseId::DieBack) => 2200,
        Some(DiseaseId::GallMidge) => 1600,
        Some(DiseaseId::PowderyMildew) => 1200,
        Some(DiseaseId::SootyMould) => 1000,
        Some(DiseaseId::Healthy) => 0,
        None => 1500,
    };
    Decimal::from(cost)
}

/// Estimated treatment cost for an orchard area in square feet, `None` when
/// the area is too large to represent the cost
pub fn estimate_cost(id: Option<DiseaseId>, area_sq_ft: Decimal) -> Option<Decimal> {
    base_cost_per_thousand_sq_ft(id)
        .checked_mul(area_sq_ft)?
        .checked_div(Decimal::from(1000))
}

pub fn compare_treatments(id: Option<DiseaseId>) -> TreatmentComparison {
    let plan = treatment_plan_or_default(id);
    TreatmentComparison {
        chemical: ApproachSummary {
            effectiveness: "High (immediate results)".to_string(),
            cost: "Medium to High".to_string(),
            environmental_impact: "Higher".to_string(),
            waiting_period: plan.waiting_period,
        },
        organic: ApproachSummary {
            effectiveness: "Medium to High (gradual results)".to_string(),
            cost: "Low to Medium".to_string(),
            environmental_impact: "Lower".to_string(),
            waiting_period: "0-3 days".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_disease_has_a_plan() {
        for id in DiseaseId::ALL {
            let plan = treatment_plan(id);
            assert_eq!(plan.disease, Some(id));
            assert!(!plan.treatment.is_empty());
            assert!(!plan.prevention.is_empty());
        }
    }

    #[test]
    fn test_healthy_has_no_medicines() {
        let plan = treatment_plan(DiseaseId::Healthy);
        assert!(plan.medicines.is_empty());
        assert_eq!(plan.waiting_period, "Not applicable");
    }

    #[test]
    fn test_unknown_disease_gets_expert_plan() {
        let plan = treatment_plan_or_default(None);
        assert_eq!(plan.treatment, "Consult local agricultural expert");
        assert_eq!(organic_alternatives(None), vec!["Contact agricultural extension service"]);
        assert_eq!(prevention_schedule(None).len(), 2);
    }

    #[test]
    fn test_cost_estimate() {
        assert_eq!(
            estimate_cost(Some(DiseaseId::BacterialCanker), Decimal::from(2500)),
            Some(Decimal::from(5000))
        );
        assert_eq!(
            estimate_cost(Some(DiseaseId::Healthy), Decimal::from(2500)),
            Some(Decimal::ZERO)
        );
        assert_eq!(estimate_cost(None, Decimal::from(500)), Some(Decimal::from(750)));
    }

    #[test]
    fn test_cost_estimate_overflow_is_none() {
        let huge = Decimal::MAX / Decimal::from(100);
        assert_eq!(estimate_cost(Some(DiseaseId::DieBack), huge), None);
        assert_eq!(estimate_cost(None, Decimal::MAX), None);
    }

    #[test]
    fn test_comparison_uses_plan_waiting_period() {
        let comparison = compare_treatments(Some(DiseaseId::CuttingWeevil));
        assert_eq!(comparison.chemical.waiting_period, "21 days before harvest");
        assert_eq!(comparison.organic.waiting_period, "0-3 days");

        let fallback = compare_treatments(None);
        assert_eq!(fallback.chemical.waiting_period, "Follow expert advice");
    }
}

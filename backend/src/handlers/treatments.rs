//! HTTP handlers for treatment recommendations

use axum::{
    extract::{Path, Query, State},
    Json,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::{
    base_cost_per_thousand_sq_ft, compare_treatments, estimate_cost, organic_alternatives,
    prevention_schedule, treatment_plan_or_default, validate_area, DiseaseId, Localizer,
    TreatmentComparison, TreatmentPlan,
};

use super::LangQuery;
use crate::error::{AppError, AppResult};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CostQuery {
    pub area_sq_ft: Option<Decimal>,
}

#[derive(Debug, Serialize)]
pub struct CostEstimate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disease: Option<DiseaseId>,
    pub area_sq_ft: Decimal,
    pub cost_per_thousand_sq_ft: Decimal,
    pub estimated_cost: Decimal,
}

/// Organic options or prevention steps for one disease
#[derive(Debug, Serialize)]
pub struct AdviceList {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disease: Option<DiseaseId>,
    pub advice: Vec<String>,
}

/// Names outside the catalog fall through to the generic plan and cost
fn lookup(name: &str) -> Option<DiseaseId> {
    DiseaseId::parse(name).ok()
}

pub async fn get_treatment(
    State(state): State<AppState>,
    Path(disease): Path<String>,
    Query(query): Query<LangQuery>,
) -> AppResult<Json<TreatmentPlan>> {
    let localizer = Localizer::new(state.translator.as_ref(), query.language()?);
    Ok(Json(localizer.treatment(treatment_plan_or_default(lookup(&disease)))))
}

/// Estimated treatment cost for an orchard area
pub async fn get_treatment_cost(
    Path(disease): Path<String>,
    Query(query): Query<CostQuery>,
) -> AppResult<Json<CostEstimate>> {
    let area = query
        .area_sq_ft
        .ok_or_else(|| AppError::validation("area_sq_ft", "Area is required"))?;
    validate_area(area).map_err(|msg| AppError::validation("area_sq_ft", msg))?;

    let disease = lookup(&disease);
    let estimated_cost = estimate_cost(disease, area)
        .ok_or_else(|| AppError::validation("area_sq_ft", "Area is too large to estimate"))?;
    Ok(Json(CostEstimate {
        disease,
        area_sq_ft: area,
        cost_per_thousand_sq_ft: base_cost_per_thousand_sq_ft(disease),
        estimated_cost,
    }))
}

pub async fn get_treatment_comparison(Path(disease): Path<String>) -> Json<TreatmentComparison> {
    Json(compare_treatments(lookup(&disease)))
}

pub async fn get_organic_alternatives(
    State(state): State<AppState>,
    Path(disease): Path<String>,
    Query(query): Query<LangQuery>,
) -> AppResult<Json<AdviceList>> {
    let localizer = Localizer::new(state.translator.as_ref(), query.language()?);
    let disease = lookup(&disease);
    Ok(Json(AdviceList {
        disease,
        advice: organic_alternatives(disease)
            .iter()
            .map(|item| localizer.text(item))
            .collect(),
    }))
}

pub async fn get_prevention_schedule(
    State(state): State<AppState>,
    Path(disease): Path<String>,
    Query(query): Query<LangQuery>,
) -> AppResult<Json<AdviceList>> {
    let localizer = Localizer::new(state.translator.as_ref(), query.language()?);
    let disease = lookup(&disease);
    Ok(Json(AdviceList {
        disease,
        advice: prevention_schedule(disease)
            .iter()
            .map(|item| localizer.text(item))
            .collect(),
    }))
}

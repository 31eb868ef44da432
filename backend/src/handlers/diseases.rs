//! HTTP handlers for the disease reference catalog

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use shared::{
    all_diseases, disease_info, disease_info_by_name, search_by_symptom, DiseaseId, DiseaseInfo,
    Localizer, RiskAssessmentView,
};

use super::{language_param, location_param, LangQuery};
use crate::error::{AppError, AppResult};
use crate::services::AdvisoryService;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SymptomQuery {
    #[serde(default)]
    pub symptom: String,
}

#[derive(Debug, Deserialize)]
pub struct DiseaseRiskQuery {
    #[serde(default)]
    pub location: String,
    pub lang: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SymptomMatches {
    pub symptom: String,
    pub diseases: Vec<DiseaseId>,
}

/// All catalog entries in label order
pub async fn list_diseases(
    State(state): State<AppState>,
    Query(query): Query<LangQuery>,
) -> AppResult<Json<Vec<DiseaseInfo>>> {
    let localizer = Localizer::new(state.translator.as_ref(), query.language()?);
    let diseases = all_diseases()
        .into_iter()
        .map(|id| localizer.disease_info(disease_info(id)))
        .collect();
    Ok(Json(diseases))
}

/// Diseases with a symptom matching the query text
pub async fn search_diseases(Query(query): Query<SymptomQuery>) -> AppResult<Json<SymptomMatches>> {
    let symptom = query.symptom.trim();
    if symptom.is_empty() {
        return Err(AppError::validation("symptom", "Symptom must not be empty"));
    }

    Ok(Json(SymptomMatches {
        diseases: search_by_symptom(symptom),
        symptom: symptom.to_string(),
    }))
}

/// Reference information; unknown names get the placeholder record
pub async fn get_disease(
    State(state): State<AppState>,
    Path(disease): Path<String>,
    Query(query): Query<LangQuery>,
) -> AppResult<Json<DiseaseInfo>> {
    let localizer = Localizer::new(state.translator.as_ref(), query.language()?);
    Ok(Json(localizer.disease_info(disease_info_by_name(&disease))))
}

/// Weather risk for one disease at a location
pub async fn get_disease_risk(
    State(state): State<AppState>,
    Path(disease): Path<String>,
    Query(query): Query<DiseaseRiskQuery>,
) -> AppResult<Json<RiskAssessmentView>> {
    let disease = DiseaseId::parse(&disease)?;
    let location = location_param(&query.location)?;
    let language = language_param(query.lang.as_deref())?;

    let service = AdvisoryService::new(state.weather.clone(), state.evaluator.clone());
    let assessment = service.disease_risk(&location, disease).await;

    let localizer = Localizer::new(state.translator.as_ref(), language);
    Ok(Json(localizer.risk(&assessment)))
}

//! HTTP handler for leaf image diagnosis

use axum::{
    extract::{Multipart, Query, State},
    Json,
};
use serde::Serialize;
use shared::{validate_image, DiseaseId, DiseaseInfo, Language, Localizer, TreatmentPlan};
use uuid::Uuid;

use super::LangQuery;
use crate::error::{AppError, AppResult};
use crate::services::DiagnosisService;
use crate::AppState;

/// Localized diagnosis response
#[derive(Debug, Serialize)]
pub struct DiagnosisView {
    pub request_id: Uuid,
    pub language: Language,
    pub disease: DiseaseId,
    pub disease_name: String,
    pub confidence_percent: f32,
    pub disease_info: DiseaseInfo,
    pub treatment: TreatmentPlan,
}

/// Classify an uploaded leaf photo (multipart field `image`)
pub async fn diagnose_leaf(
    State(state): State<AppState>,
    Query(query): Query<LangQuery>,
    mut multipart: Multipart,
) -> AppResult<Json<DiagnosisView>> {
    let language = query.language()?;
    let classifier = state
        .classifier
        .clone()
        .ok_or(AppError::ClassifierNotConfigured)?;
    let max_bytes = state.config.upload.max_image_bytes;

    let mut image = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation("image", e.body_text()))?
    {
        if field.name() != Some("image") {
            continue;
        }
        let content_type = field.content_type().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::validation("image", e.body_text()))?;
        validate_image(content_type.as_deref(), bytes.len(), max_bytes)
            .map_err(|msg| AppError::validation("image", msg))?;
        image = Some(bytes);
        break;
    }
    let image = image.ok_or_else(|| AppError::validation("image", "An image file is required"))?;

    let diagnosis = DiagnosisService::new(classifier).diagnose(&image).await?;

    let localizer = Localizer::new(state.translator.as_ref(), language);
    Ok(Json(DiagnosisView {
        request_id: diagnosis.request_id,
        language,
        disease: diagnosis.classification.disease,
        disease_name: localizer.text(diagnosis.classification.disease.label()),
        confidence_percent: diagnosis.classification.confidence_percent,
        disease_info: localizer.disease_info(diagnosis.disease_info),
        treatment: localizer.treatment(diagnosis.treatment),
    }))
}

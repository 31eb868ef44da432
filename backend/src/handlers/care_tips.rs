//! HTTP handlers for leaf care tips

use axum::{
    extract::{Path, Query, State},
    Json,
};
use shared::{
    care_guide, seasonal_tips, tips_for, CareCategory, CareSection, Localizer, Season, SeasonalTips,
};

use super::LangQuery;
use crate::error::AppResult;
use crate::AppState;

/// Every category in display order
pub async fn list_care_tips(
    State(state): State<AppState>,
    Query(query): Query<LangQuery>,
) -> AppResult<Json<Vec<CareSection>>> {
    let localizer = Localizer::new(state.translator.as_ref(), query.language()?);
    Ok(Json(
        care_guide()
            .into_iter()
            .map(|section| localizer.care_section(section))
            .collect(),
    ))
}

pub async fn get_care_tips(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Query(query): Query<LangQuery>,
) -> AppResult<Json<CareSection>> {
    let category = CareCategory::parse(&category)?;
    let localizer = Localizer::new(state.translator.as_ref(), query.language()?);
    Ok(Json(localizer.care_section(CareSection {
        category: category.label().to_string(),
        tips: tips_for(category),
    })))
}

pub async fn get_seasonal_tips(
    State(state): State<AppState>,
    Path(season): Path<String>,
    Query(query): Query<LangQuery>,
) -> AppResult<Json<SeasonalTips>> {
    let season = Season::parse(&season)?;
    let localizer = Localizer::new(state.translator.as_ref(), query.language()?);
    Ok(Json(SeasonalTips {
        season: localizer.text(season.label()),
        tips: seasonal_tips(season)
            .iter()
            .map(|tip| localizer.text(tip))
            .collect(),
    }))
}

//! HTTP handlers for the AgriLeaf API

pub mod care_tips;
pub mod diagnosis;
pub mod diseases;
pub mod health;
pub mod treatments;
pub mod weather;

pub use care_tips::*;
pub use diagnosis::*;
pub use diseases::*;
pub use health::*;
pub use treatments::*;
pub use weather::*;

use serde::Deserialize;
use shared::{validate_location, Language};

use crate::error::{AppError, AppResult};

/// Optional `?lang=` parameter shared by the localized endpoints
#[derive(Debug, Default, Deserialize)]
pub struct LangQuery {
    pub lang: Option<String>,
}

impl LangQuery {
    pub fn language(&self) -> AppResult<Language> {
        language_param(self.lang.as_deref())
    }
}

/// English when absent; an unknown code is a client error
pub(crate) fn language_param(code: Option<&str>) -> AppResult<Language> {
    match code {
        None => Ok(Language::default()),
        Some(code) => Ok(Language::from_code(code)?),
    }
}

pub(crate) fn location_param(raw: &str) -> AppResult<String> {
    validate_location(raw).map_err(|msg| AppError::validation("location", msg))
}

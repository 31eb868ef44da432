//! Common types used across the platform

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Supported display languages
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Hindi,
    Marathi,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unsupported language code: {0}")]
pub struct UnsupportedLanguage(pub String);

impl Language {
    pub const ALL: [Language; 3] = [Language::English, Language::Hindi, Language::Marathi];

    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
            Language::Marathi => "mr",
        }
    }

    /// Name of the language written in that language
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "हिंदी",
            Language::Marathi => "मराठी",
        }
    }

    pub fn from_code(code: &str) -> Result<Self, UnsupportedLanguage> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "hi" | "hindi" => Ok(Language::Hindi),
            "mr" | "marathi" => Ok(Language::Marathi),
            _ => Err(UnsupportedLanguage(code.to_string())),
        }
    }
}

impl std::str::FromStr for Language {
    type Err = UnsupportedLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes_round_trip() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), Ok(lang));
        }
    }

    #[test]
    fn test_language_code_is_case_insensitive() {
        assert_eq!(Language::from_code(" HI "), Ok(Language::Hindi));
        assert_eq!(Language::from_code("Marathi"), Ok(Language::Marathi));
    }

    #[test]
    fn test_unsupported_language() {
        assert!(Language::from_code("th").is_err());
        assert!(Language::from_code("").is_err());
    }
}

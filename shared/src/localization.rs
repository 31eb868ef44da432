//! Display-language localization
//!
//! Risk evaluation and the reference catalogs are computed in English. The
//! types here translate finished results into view structs for display;
//! nothing in the rules depends on the selected language. Phrases missing
//! from a catalog are passed through in English.

use rust_decimal::Decimal;
use serde::Serialize;
use std::borrow::Cow;
use std::collections::HashMap;

use crate::models::{
    AdvisoryResult, CareSection, CareTips, DiseaseId, DiseaseInfo, ForecastRiskEntry,
    RiskAssessment, SeasonalTips, TreatmentPlan,
};
use crate::types::Language;

/// Translates English display phrases
pub trait Translator: Send + Sync {
    fn translate<'a>(&self, text: &'a str, language: Language) -> Cow<'a, str>;
}

/// Static phrase table for the supported Indian languages
#[derive(Debug, Clone)]
pub struct PhraseCatalog {
    phrases: HashMap<Language, HashMap<&'static str, &'static str>>,
}

const HINDI: &[(&str, &str)] = &[
    ("Low", "कम"),
    ("Moderate", "मध्यम"),
    ("High", "उच्च"),
    ("Very High", "बहुत उच्च"),
    ("Unknown", "अज्ञात"),
    ("None", "कोई नहीं"),
    ("Rapid", "तेज़"),
    ("Slow", "धीमा"),
    ("Temperature favorable", "तापमान अनुकूल"),
    ("High humidity", "उच्च आर्द्रता"),
    ("Recent rainfall", "हाल की वर्षा"),
    (
        "Low risk conditions. Continue regular monitoring.",
        "कम जोखिम की स्थिति। नियमित निगरानी जारी रखें।",
    ),
    (
        "Moderate risk. Monitor plants closely and take preventive measures.",
        "मध्यम जोखिम। पौधों की बारीकी से निगरानी करें और निवारक उपाय करें।",
    ),
    (
        "High risk conditions detected. Consider preventive fungicide application.",
        "उच्च जोखिम की स्थिति पाई गई। निवारक फफूंदनाशक छिड़काव पर विचार करें।",
    ),
    ("Unable to assess risk", "जोखिम का आकलन करने में असमर्थ"),
    (
        "Unable to fetch weather data. Please check your location.",
        "मौसम डेटा प्राप्त करने में असमर्थ। कृपया अपना स्थान जांचें।",
    ),
    ("Information not available", "जानकारी उपलब्ध नहीं है"),
    ("Anthracnose", "एन्थ्रेक्नोज"),
    ("Bacterial Canker", "जीवाणु कैंकर"),
    ("Cutting Weevil", "कटिंग वीविल"),
    ("Die Back", "डाई बैक"),
    ("Gall Midge", "गॉल मिज"),
    ("Healthy", "स्वस्थ"),
    ("Healthy Leaf", "स्वस्थ पत्ता"),
    ("Powdery Mildew", "चूर्णिल आसिता"),
    ("Sooty Mould", "काली फफूंद"),
    ("Watering", "सिंचाई"),
    ("Nutrition", "पोषण"),
    ("Pruning", "छंटाई"),
    ("Pest Management", "कीट प्रबंधन"),
    ("General Care", "सामान्य देखभाल"),
    ("Seasonal Care", "मौसमी देखभाल"),
    ("Soil Health", "मिट्टी का स्वास्थ्य"),
    ("Disease Prevention", "रोग की रोकथाम"),
    ("Summer", "गर्मी"),
    ("Monsoon", "मानसून"),
    ("Winter", "सर्दी"),
];

const MARATHI: &[(&str, &str)] = &[
    ("Low", "कमी"),
    ("Moderate", "मध्यम"),
    ("High", "जास्त"),
    ("Very High", "खूप जास्त"),
    ("Unknown", "अज्ञात"),
    ("None", "काही नाही"),
    ("Rapid", "जलद"),
    ("Slow", "मंद"),
    ("Temperature favorable", "तापमान अनुकूल"),
    ("High humidity", "जास्त आर्द्रता"),
    ("Recent rainfall", "अलीकडील पाऊस"),
    (
        "Low risk conditions. Continue regular monitoring.",
        "कमी धोक्याची परिस्थिती. नियमित निरीक्षण सुरू ठेवा.",
    ),
    (
        "Moderate risk. Monitor plants closely and take preventive measures.",
        "मध्यम धोका. झाडांचे बारकाईने निरीक्षण करा आणि प्रतिबंधात्मक उपाय करा.",
    ),
    (
        "High risk conditions detected. Consider preventive fungicide application.",
        "जास्त धोक्याची परिस्थिती आढळली. प्रतिबंधात्मक बुरशीनाशक फवारणीचा विचार करा.",
    ),
    ("Unable to assess risk", "धोक्याचे मूल्यांकन करता आले नाही"),
    (
        "Unable to fetch weather data. Please check your location.",
        "हवामान माहिती मिळू शकली नाही. कृपया तुमचे स्थान तपासा.",
    ),
    ("Information not available", "माहिती उपलब्ध नाही"),
    ("Anthracnose", "अँथ्रॅकनोज"),
    ("Bacterial Canker", "जिवाणूजन्य कँकर"),
    ("Cutting Weevil", "कटिंग भुंगा"),
    ("Die Back", "डाय बॅक"),
    ("Gall Midge", "गाठ माशी"),
    ("Healthy", "निरोगी"),
    ("Healthy Leaf", "निरोगी पान"),
    ("Powdery Mildew", "भुरी रोग"),
    ("Sooty Mould", "काजळी रोग"),
    ("Watering", "पाणी देणे"),
    ("Nutrition", "पोषण"),
    ("Pruning", "छाटणी"),
    ("Pest Management", "कीड व्यवस्थापन"),
    ("General Care", "सामान्य काळजी"),
    ("Seasonal Care", "हंगामी काळजी"),
    ("Soil Health", "मातीचे आरोग्य"),
    ("Disease Prevention", "रोग प्रतिबंध"),
    ("Summer", "उन्हाळा"),
    ("Monsoon", "पावसाळा"),
    ("Winter", "हिवाळा"),
];

impl PhraseCatalog {
    pub fn new() -> Self {
        let phrases = [(Language::Hindi, HINDI), (Language::Marathi, MARATHI)]
            .into_iter()
            .map(|(language, table)| (language, table.iter().copied().collect()))
            .collect();
        Self { phrases }
    }

    /// Number of translated phrases across all languages
    pub fn len(&self) -> usize {
        self.phrases.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for PhraseCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Translator for PhraseCatalog {
    fn translate<'a>(&self, text: &'a str, language: Language) -> Cow<'a, str> {
        if language == Language::English {
            return Cow::Borrowed(text);
        }
        match self.phrases.get(&language).and_then(|table| table.get(text)) {
            Some(translated) => Cow::Borrowed(*translated),
            None => Cow::Borrowed(text),
        }
    }
}

/// Localized view of one disease's risk
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RiskAssessmentView {
    pub disease: DiseaseId,
    pub disease_name: String,
    pub risk_level: String,
    pub risk_factors: Vec<String>,
    pub recommendation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature_celsius: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub humidity_percent: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rainfall_mm: Option<Decimal>,
}

/// Localized consolidated advisory
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AdvisoryView {
    pub location: String,
    pub language: Language,
    pub temperature_celsius: Decimal,
    pub humidity_percent: i32,
    pub rainfall_mm: Decimal,
    pub description: String,
    pub wind_speed_mps: Decimal,
    pub highest_risk_disease: DiseaseId,
    pub risk_level: String,
    pub recommendation: String,
    pub all_risks: Vec<RiskAssessmentView>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ForecastRiskView {
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub description: String,
    pub temperature_celsius: Decimal,
    pub humidity_percent: i32,
    pub rainfall_mm: Decimal,
    pub highest_risk_disease: DiseaseId,
    pub disease_name: String,
    pub risk_level: String,
    pub recommendation: String,
    pub matched_factor_count: usize,
}

/// Applies a translator to finished results for one language
pub struct Localizer<'t> {
    translator: &'t dyn Translator,
    language: Language,
}

impl<'t> Localizer<'t> {
    pub fn new(translator: &'t dyn Translator, language: Language) -> Self {
        Self {
            translator,
            language,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn text(&self, text: &str) -> String {
        self.translator.translate(text, self.language).into_owned()
    }

    fn all(&self, items: &[String]) -> Vec<String> {
        items.iter().map(|s| self.text(s)).collect()
    }

    pub fn risk(&self, assessment: &RiskAssessment) -> RiskAssessmentView {
        RiskAssessmentView {
            disease: assessment.disease,
            disease_name: self.text(assessment.disease.label()),
            risk_level: self.text(assessment.risk_level.label()),
            risk_factors: assessment
                .risk_factors
                .iter()
                .map(|f| self.text(f.label()))
                .collect(),
            recommendation: self.text(assessment.recommendation.text()),
            temperature_celsius: assessment.temperature_celsius,
            humidity_percent: assessment.humidity_percent,
            rainfall_mm: assessment.rainfall_mm,
        }
    }

    pub fn advisory(&self, location: &str, advisory: &AdvisoryResult) -> AdvisoryView {
        AdvisoryView {
            location: location.to_string(),
            language: self.language,
            temperature_celsius: advisory.temperature_celsius,
            humidity_percent: advisory.humidity_percent,
            rainfall_mm: advisory.rainfall_mm,
            description: advisory.description.clone(),
            wind_speed_mps: advisory.wind_speed_mps,
            highest_risk_disease: advisory.highest_risk_disease,
            risk_level: self.text(advisory.risk_level.label()),
            recommendation: self.text(advisory.recommendation.text()),
            all_risks: advisory.all_risks.iter().map(|r| self.risk(r)).collect(),
        }
    }

    pub fn forecast_entry(&self, entry: &ForecastRiskEntry) -> ForecastRiskView {
        ForecastRiskView {
            timestamp: entry.timestamp,
            description: entry.description.clone(),
            temperature_celsius: entry.temperature_celsius,
            humidity_percent: entry.humidity_percent,
            rainfall_mm: entry.rainfall_mm,
            highest_risk_disease: entry.highest_risk_disease,
            disease_name: self.text(entry.highest_risk_disease.label()),
            risk_level: self.text(entry.risk_level.label()),
            recommendation: self.text(entry.recommendation.text()),
            matched_factor_count: entry.matched_factor_count,
        }
    }

    /// Scientific names and image paths are left as-is
    pub fn disease_info(&self, info: DiseaseInfo) -> DiseaseInfo {
        DiseaseInfo {
            name: self.text(&info.name),
            severity: self.text(&info.severity),
            spread_rate: self.text(&info.spread_rate),
            causes: self.all(&info.causes),
            symptoms: self.all(&info.symptoms),
            ..info
        }
    }

    /// Dosages are left as-is
    pub fn treatment(&self, plan: TreatmentPlan) -> TreatmentPlan {
        TreatmentPlan {
            treatment: self.text(&plan.treatment),
            medicines: plan
                .medicines
                .into_iter()
                .map(|mut m| {
                    m.name = self.text(&m.name);
                    m
                })
                .collect(),
            organic_options: self.all(&plan.organic_options),
            prevention: self.all(&plan.prevention),
            application_schedule: self.text(&plan.application_schedule),
            waiting_period: self.text(&plan.waiting_period),
            disease: plan.disease,
        }
    }

    pub fn care_tips(&self, tips: CareTips) -> CareTips {
        match tips {
            CareTips::General(items) => CareTips::General(self.all(&items)),
            CareTips::Seasonal(seasons) => CareTips::Seasonal(
                seasons
                    .into_iter()
                    .map(|s| SeasonalTips {
                        season: self.text(&s.season),
                        tips: self.all(&s.tips),
                    })
                    .collect(),
            ),
        }
    }

    pub fn care_section(&self, section: CareSection) -> CareSection {
        CareSection {
            category: self.text(&section.category),
            tips: self.care_tips(section.tips),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::RiskEvaluator;
    use crate::models::{disease_info, RiskLevel, WeatherObservation};

    fn advisory() -> AdvisoryResult {
        let obs = WeatherObservation::new(Decimal::from(28), 85, Decimal::from(6))
            .with_description("light rain");
        RiskEvaluator::default().assess(&obs)
    }

    #[test]
    fn test_english_is_identity() {
        let catalog = PhraseCatalog::new();
        assert_eq!(catalog.translate("High humidity", Language::English), "High humidity");
    }

    #[test]
    fn test_unknown_phrase_passes_through() {
        let catalog = PhraseCatalog::new();
        assert_eq!(catalog.translate("Mancozeb", Language::Hindi), "Mancozeb");
    }

    #[test]
    fn test_every_hindi_phrase_has_marathi_counterpart() {
        let hindi: Vec<&str> = HINDI.iter().map(|(en, _)| *en).collect();
        let marathi: Vec<&str> = MARATHI.iter().map(|(en, _)| *en).collect();
        assert_eq!(hindi, marathi);
        assert_eq!(PhraseCatalog::new().len(), HINDI.len() * 2);
    }

    #[test]
    fn test_localized_advisory_keeps_numbers() {
        let catalog = PhraseCatalog::new();
        let result = advisory();

        let english = Localizer::new(&catalog, Language::English).advisory("Pune", &result);
        let hindi = Localizer::new(&catalog, Language::Hindi).advisory("Pune", &result);

        assert_eq!(english.risk_level, "High");
        assert_eq!(hindi.risk_level, "उच्च");
        assert_eq!(english.temperature_celsius, hindi.temperature_celsius);
        assert_eq!(english.highest_risk_disease, hindi.highest_risk_disease);
        assert_eq!(english.all_risks.len(), hindi.all_risks.len());
        assert_eq!(hindi.all_risks[0].risk_factors[1], "उच्च आर्द्रता");
    }

    #[test]
    fn test_localized_sentinel() {
        let catalog = PhraseCatalog::new();
        let sentinel = RiskAssessment::unassessable(DiseaseId::DieBack);
        let view = Localizer::new(&catalog, Language::Marathi).risk(&sentinel);

        assert_eq!(view.risk_level, "अज्ञात");
        assert_eq!(view.recommendation, "धोक्याचे मूल्यांकन करता आले नाही");
        assert!(view.risk_factors.is_empty());
        assert_eq!(sentinel.risk_level, RiskLevel::Unknown);
    }

    #[test]
    fn test_localized_disease_info_keeps_scientific_name() {
        let catalog = PhraseCatalog::new();
        let info = Localizer::new(&catalog, Language::Hindi)
            .disease_info(disease_info(DiseaseId::PowderyMildew));
        assert_eq!(info.name, "चूर्णिल आसिता");
        assert_eq!(info.scientific_name, "Oidium mangiferae");
        assert_eq!(info.spread_rate, "तेज़");
    }
}

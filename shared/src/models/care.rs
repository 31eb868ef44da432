//! Healthy leaf care tips

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CareCategory {
    #[serde(rename = "Watering")]
    Watering,
    #[serde(rename = "Nutrition")]
    Nutrition,
    #[serde(rename = "Pruning")]
    Pruning,
    #[serde(rename = "Pest Management")]
    PestManagement,
    #[serde(rename = "General Care")]
    GeneralCare,
    #[serde(rename = "Seasonal Care")]
    SeasonalCare,
    #[serde(rename = "Soil Health")]
    SoilHealth,
    #[serde(rename = "Disease Prevention")]
    DiseasePrevention,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Season {
    Summer,
    Monsoon,
    Winter,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown care tip category or season: {0}")]
pub struct UnknownCareTopic(pub String);

fn normalize(s: &str) -> String {
    s.trim()
        .chars()
        .map(|c| if c == '-' || c == '_' { ' ' } else { c.to_ascii_lowercase() })
        .collect()
}

impl CareCategory {
    pub const ALL: [CareCategory; 8] = [
        CareCategory::Watering,
        CareCategory::Nutrition,
        CareCategory::Pruning,
        CareCategory::PestManagement,
        CareCategory::GeneralCare,
        CareCategory::SeasonalCare,
        CareCategory::SoilHealth,
        CareCategory::DiseasePrevention,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CareCategory::Watering => "Watering",
            CareCategory::Nutrition => "Nutrition",
            CareCategory::Pruning => "Pruning",
            CareCategory::PestManagement => "Pest Management",
            CareCategory::GeneralCare => "General Care",
            CareCategory::SeasonalCare => "Seasonal Care",
            CareCategory::SoilHealth => "Soil Health",
            CareCategory::DiseasePrevention => "Disease Prevention",
        }
    }

    pub fn parse(name: &str) -> Result<Self, UnknownCareTopic> {
        let wanted = normalize(name);
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.label().to_ascii_lowercase() == wanted)
            .ok_or_else(|| UnknownCareTopic(name.to_string()))
    }
}

impl Season {
    pub const ALL: [Season; 3] = [Season::Summer, Season::Monsoon, Season::Winter];

    pub fn label(&self) -> &'static str {
        match self {
            Season::Summer => "Summer",
            Season::Monsoon => "Monsoon",
            Season::Winter => "Winter",
        }
    }

    pub fn parse(name: &str) -> Result<Self, UnknownCareTopic> {
        let wanted = normalize(name);
        Self::ALL
            .iter()
            .copied()
            .find(|s| s.label().to_ascii_lowercase() == wanted)
            .ok_or_else(|| UnknownCareTopic(name.to_string()))
    }
}

/// Tips for one category; seasonal care nests its tips by season
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum CareTips {
    General(Vec<String>),
    Seasonal(Vec<SeasonalTips>),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeasonalTips {
    pub season: String,
    pub tips: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CareSection {
    pub category: String,
    pub tips: CareTips,
}

fn general_tips(category: CareCategory) -> &'static [&'static str] {
    match category {
        CareCategory::Watering => &[
            "Water plants early in the morning or late in the evening to reduce evaporation.",
            "Avoid overwatering to prevent root rot.",
            "Use drip irrigation for efficient water use.",
            "Check soil moisture before watering - stick finger 2 inches into soil.",
            "Water deeply but less frequently to encourage deep root growth.",
        ],
        CareCategory::Nutrition => &[
            "Apply balanced fertilizers based on soil test results.",
            "Use organic compost to improve soil health.",
            "Avoid excessive use of nitrogen fertilizers.",
            "Apply micronutrients like zinc and boron as needed.",
            "Use slow-release fertilizers for sustained nutrition.",
        ],
        CareCategory::Pruning => &[
            "Prune diseased and dead branches regularly.",
            "Maintain proper plant spacing for air circulation.",
            "Use sterilized tools to prevent disease spread.",
            "Prune during dry weather to reduce infection risk.",
            "Make clean cuts at 45-degree angle away from buds.",
        ],
        CareCategory::PestManagement => &[
            "Monitor plants regularly for pest infestation.",
            "Use integrated pest management (IPM) techniques.",
            "Encourage natural predators like ladybugs and spiders.",
            "Use yellow sticky traps for monitoring flying insects.",
            "Apply neem oil as preventive measure every 15 days.",
        ],
        CareCategory::GeneralCare => &[
            "Mulch around plants to retain moisture and suppress weeds.",
            "Rotate crops to prevent soil-borne diseases.",
            "Keep the orchard clean and free from plant debris.",
            "Provide adequate sunlight exposure.",
            "Maintain proper drainage to prevent waterlogging.",
        ],
        CareCategory::SeasonalCare => &[],
        CareCategory::SoilHealth => &[
            "Test soil pH and adjust if needed (6.0-7.0 ideal for most crops).",
            "Add organic matter annually to improve soil structure.",
            "Avoid soil compaction by using proper equipment.",
            "Use cover crops to prevent erosion.",
            "Maintain beneficial microbial activity.",
        ],
        CareCategory::DiseasePrevention => &[
            "Use disease-resistant varieties when available.",
            "Practice crop rotation every 2-3 years.",
            "Remove and destroy infected plant material.",
            "Disinfect tools between plants.",
            "Maintain plant vigor through proper nutrition.",
        ],
    }
}

fn season_tips(season: Season) -> &'static [&'static str] {
    match season {
        Season::Summer => &[
            "Increase watering frequency during hot weather.",
            "Provide shade for young plants.",
            "Apply mulch to retain soil moisture.",
            "Monitor for heat stress symptoms.",
        ],
        Season::Monsoon => &[
            "Improve drainage to prevent waterlogging.",
            "Increase fungicide applications.",
            "Remove fallen leaves promptly.",
            "Check for fungal infections regularly.",
        ],
        Season::Winter => &[
            "Reduce watering frequency.",
            "Protect young plants from frost.",
            "Apply winter fertilizers.",
            "Prune during dormant season.",
        ],
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn seasonal_tips(season: Season) -> Vec<String> {
    owned(season_tips(season))
}

pub fn tips_for(category: CareCategory) -> CareTips {
    match category {
        CareCategory::SeasonalCare => CareTips::Seasonal(
            Season::ALL
                .iter()
                .map(|s| SeasonalTips {
                    season: s.label().to_string(),
                    tips: seasonal_tips(*s),
                })
                .collect(),
        ),
        other => CareTips::General(owned(general_tips(other))),
    }
}

/// Every category in display order
pub fn care_guide() -> Vec<CareSection> {
    CareCategory::ALL
        .iter()
        .map(|c| CareSection {
            category: c.label().to_string(),
            tips: tips_for(*c),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_care_guide_has_every_category() {
        let guide = care_guide();
        assert_eq!(guide.len(), 8);
        assert_eq!(guide[0].category, "Watering");
        assert_eq!(guide[5].category, "Seasonal Care");
        assert!(matches!(guide[5].tips, CareTips::Seasonal(ref s) if s.len() == 3));
    }

    #[test]
    fn test_seasonal_lookup() {
        let monsoon = seasonal_tips(Season::Monsoon);
        assert_eq!(monsoon.len(), 4);
        assert_eq!(monsoon[0], "Improve drainage to prevent waterlogging.");
    }

    #[test]
    fn test_parse_topics() {
        assert_eq!(CareCategory::parse("pest-management"), Ok(CareCategory::PestManagement));
        assert_eq!(CareCategory::parse("Soil Health"), Ok(CareCategory::SoilHealth));
        assert_eq!(Season::parse("WINTER"), Ok(Season::Winter));
        assert!(Season::parse("Autumn").is_err());
    }
}

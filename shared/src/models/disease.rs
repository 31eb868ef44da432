//! Mango leaf disease identifiers and reference information

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Labels the leaf classifier can produce.
///
/// Variant order matches the classifier's output index order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DiseaseId {
    #[serde(rename = "Anthracnose")]
    Anthracnose,
    #[serde(rename = "Bacterial Canker")]
    BacterialCanker,
    #[serde(rename = "Cutting Weevil")]
    CuttingWeevil,
    #[serde(rename = "Die Back")]
    DieBack,
    #[serde(rename = "Gall Midge")]
    GallMidge,
    #[serde(rename = "Healthy")]
    Healthy,
    #[serde(rename = "Powdery Mildew")]
    PowderyMildew,
    #[serde(rename = "Sooty Mould")]
    SootyMould,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown disease: {0}")]
pub struct UnknownDisease(pub String);

impl DiseaseId {
    /// All labels in classifier index order
    pub const ALL: [DiseaseId; 8] = [
        DiseaseId::Anthracnose,
        DiseaseId::BacterialCanker,
        DiseaseId::CuttingWeevil,
        DiseaseId::DieBack,
        DiseaseId::GallMidge,
        DiseaseId::Healthy,
        DiseaseId::PowderyMildew,
        DiseaseId::SootyMould,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DiseaseId::Anthracnose => "Anthracnose",
            DiseaseId::BacterialCanker => "Bacterial Canker",
            DiseaseId::CuttingWeevil => "Cutting Weevil",
            DiseaseId::DieBack => "Die Back",
            DiseaseId::GallMidge => "Gall Midge",
            DiseaseId::Healthy => "Healthy",
            DiseaseId::PowderyMildew => "Powdery Mildew",
            DiseaseId::SootyMould => "Sooty Mould",
        }
    }

    /// URL-friendly form of the label, e.g. `bacterial-canker`
    pub fn slug(&self) -> String {
        self.label().to_ascii_lowercase().replace(' ', "-")
    }

    pub fn from_index(index: usize) -> Option<DiseaseId> {
        Self::ALL.get(index).copied()
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Parse a label or slug, ignoring case and `-`/`_` separators
    pub fn parse(name: &str) -> Result<DiseaseId, UnknownDisease> {
        let normalized: String = name
            .trim()
            .chars()
            .map(|c| if c == '-' || c == '_' { ' ' } else { c.to_ascii_lowercase() })
            .collect();

        Self::ALL
            .iter()
            .copied()
            .find(|id| id.label().to_ascii_lowercase() == normalized)
            .ok_or_else(|| UnknownDisease(name.to_string()))
    }
}

impl std::str::FromStr for DiseaseId {
    type Err = UnknownDisease;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DiseaseId::parse(s)
    }
}

impl std::fmt::Display for DiseaseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Reference information about a disease
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiseaseInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<DiseaseId>,
    pub name: String,
    pub scientific_name: String,
    pub severity: String,
    pub spread_rate: String,
    pub causes: Vec<String>,
    pub symptoms: Vec<String>,
    pub image_path: String,
}

struct DiseaseEntry {
    name: &'static str,
    scientific_name: &'static str,
    severity: &'static str,
    spread_rate: &'static str,
    causes: &'static [&'static str],
    symptoms: &'static [&'static str],
    image_path: &'static str,
}

const ANTHRACNOSE: DiseaseEntry = DiseaseEntry {
    name: "Anthracnose",
    scientific_name: "Colletotrichum gloeosporioides",
    severity: "High",
    spread_rate: "Rapid",
    causes: &[
        "Fungal infection caused by Colletotrichum gloeosporioides",
        "Spread through rain splash and wind",
        "Favored by warm, humid conditions",
        "Infected plant debris and seeds",
    ],
    symptoms: &[
        "Dark brown to black spots on leaves",
        "Sunken lesions with concentric rings",
        "Leaf curling and distortion",
        "Premature leaf drop",
        "Fruit spots with pink spore masses",
    ],
    image_path: "images/anthracnose.jpg",
};

const BACTERIAL_CANKER: DiseaseEntry = DiseaseEntry {
    name: "Bacterial Canker",
    scientific_name: "Xanthomonas campestris pv. mangiferaeindicae",
    severity: "Very High",
    spread_rate: "Moderate to Rapid",
    causes: &[
        "Bacterial infection by Xanthomonas campestris",
        "Spread through rain splash and infected tools",
        "Entry through wounds or natural openings",
        "Favored by warm, wet conditions",
    ],
    symptoms: &[
        "Water-soaked lesions on leaves",
        "Dark brown to black cankers on stems",
        "Gummy exudation from cankers",
        "Leaf wilting and dieback",
        "Fruit drop and black spots",
    ],
    image_path: "images/bacterial_canker.jpg",
};

const CUTTING_WEEVIL: DiseaseEntry = DiseaseEntry {
    name: "Cutting Weevil",
    scientific_name: "Sternochetus mangiferae",
    severity: "Moderate",
    spread_rate: "Slow to Moderate",
    causes: &[
        "Insect pest - mango seed weevil",
        "Adult weevils lay eggs in fruits",
        "Larvae feed on seeds and pulp",
        "Spread through infested fruits",
    ],
    symptoms: &[
        "Small holes in fruits",
        "Premature fruit drop",
        "Damaged seeds inside fruits",
        "Dark streaks on fruit surface",
        "Reduced fruit quality",
    ],
    image_path: "images/cutting_weevil.jpg",
};

const DIE_BACK: DiseaseEntry = DiseaseEntry {
    name: "Die Back",
    scientific_name: "Botryosphaeria spp.",
    severity: "High",
    spread_rate: "Moderate",
    causes: &[
        "Fungal infection by Botryosphaeria species",
        "Stress factors like drought or wounds",
        "Spread through infected pruning tools",
        "Favored by warm, dry conditions",
    ],
    symptoms: &[
        "Progressive death of twigs and branches",
        "Dark brown to black lesions on bark",
        "Gummy exudation from affected parts",
        "Leaf wilting and yellowing",
        "Cankers on stems and branches",
    ],
    image_path: "images/die_back.jpg",
};

const GALL_MIDGE: DiseaseEntry = DiseaseEntry {
    name: "Gall Midge",
    scientific_name: "Procontarinia mangiferae",
    severity: "Moderate",
    spread_rate: "Moderate",
    causes: &[
        "Insect pest - mango gall midge",
        "Adult flies lay eggs in leaf tissue",
        "Larvae induce gall formation",
        "Multiple generations per year",
    ],
    symptoms: &[
        "Small galls or bumps on leaves",
        "Leaf curling and distortion",
        "Premature leaf drop",
        "Reduced photosynthesis",
        "Stunted plant growth",
    ],
    image_path: "images/gall_midge.jpg",
};

const HEALTHY: DiseaseEntry = DiseaseEntry {
    name: "Healthy Leaf",
    scientific_name: "Normal plant condition",
    severity: "None",
    spread_rate: "None",
    causes: &[
        "Proper plant care and maintenance",
        "Balanced nutrition",
        "Adequate water management",
        "Regular monitoring",
    ],
    symptoms: &[
        "Uniform green color",
        "Normal leaf shape and size",
        "No spots or lesions",
        "Proper growth and development",
        "Good fruit production",
    ],
    image_path: "images/healthy.jpg",
};

const POWDERY_MILDEW: DiseaseEntry = DiseaseEntry {
    name: "Powdery Mildew",
    scientific_name: "Oidium mangiferae",
    severity: "Moderate to High",
    spread_rate: "Rapid",
    causes: &[
        "Fungal infection by Oidium mangiferae",
        "Spread through wind-borne spores",
        "Favored by warm, dry conditions",
        "High humidity and poor air circulation",
    ],
    symptoms: &[
        "White powdery coating on leaves",
        "Leaf curling and distortion",
        "Stunted growth of new shoots",
        "Reduced fruit set",
        "Premature leaf drop",
    ],
    image_path: "images/powdery_mildew.jpg",
};

const SOOTY_MOULD: DiseaseEntry = DiseaseEntry {
    name: "Sooty Mould",
    scientific_name: "Capnodium mangiferae",
    severity: "Low to Moderate",
    spread_rate: "Slow",
    causes: &[
        "Fungal growth on honeydew excreted by insects",
        "Associated with sap-sucking insects",
        "Favored by high humidity",
        "Poor air circulation",
    ],
    symptoms: &[
        "Black sooty coating on leaves",
        "Reduced photosynthesis",
        "Sticky honeydew on leaf surface",
        "Presence of ants on plants",
        "Yellowing of leaves",
    ],
    image_path: "images/sooty_mould.jpg",
};

fn entry(id: DiseaseId) -> &'static DiseaseEntry {
    match id {
        DiseaseId::Anthracnose => &ANTHRACNOSE,
        DiseaseId::BacterialCanker => &BACTERIAL_CANKER,
        DiseaseId::CuttingWeevil => &CUTTING_WEEVIL,
        DiseaseId::DieBack => &DIE_BACK,
        DiseaseId::GallMidge => &GALL_MIDGE,
        DiseaseId::Healthy => &HEALTHY,
        DiseaseId::PowderyMildew => &POWDERY_MILDEW,
        DiseaseId::SootyMould => &SOOTY_MOULD,
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl DiseaseInfo {
    /// Placeholder record for a name outside the catalog
    pub fn unknown(name: &str) -> Self {
        DiseaseInfo {
            id: None,
            name: name.to_string(),
            scientific_name: "Unknown".to_string(),
            severity: "Unknown".to_string(),
            spread_rate: "Unknown".to_string(),
            causes: vec!["Information not available".to_string()],
            symptoms: vec!["Information not available".to_string()],
            image_path: "images/unknown.jpg".to_string(),
        }
    }
}

/// Look up reference information for a disease
pub fn disease_info(id: DiseaseId) -> DiseaseInfo {
    let e = entry(id);
    DiseaseInfo {
        id: Some(id),
        name: e.name.to_string(),
        scientific_name: e.scientific_name.to_string(),
        severity: e.severity.to_string(),
        spread_rate: e.spread_rate.to_string(),
        causes: owned(e.causes),
        symptoms: owned(e.symptoms),
        image_path: e.image_path.to_string(),
    }
}

/// Look up by free-text name, falling back to the placeholder record
pub fn disease_info_by_name(name: &str) -> DiseaseInfo {
    match DiseaseId::parse(name) {
        Ok(id) => disease_info(id),
        Err(_) => DiseaseInfo::unknown(name),
    }
}

pub fn all_diseases() -> Vec<DiseaseId> {
    DiseaseId::ALL.to_vec()
}

/// Diseases with at least one symptom containing `symptom` (case-insensitive)
pub fn search_by_symptom(symptom: &str) -> Vec<DiseaseId> {
    let needle = symptom.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    DiseaseId::ALL
        .iter()
        .copied()
        .filter(|id| {
            entry(*id)
                .symptoms
                .iter()
                .any(|s| s.to_lowercase().contains(&needle))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_label_and_slug() {
        assert_eq!(DiseaseId::parse("Bacterial Canker"), Ok(DiseaseId::BacterialCanker));
        assert_eq!(DiseaseId::parse("bacterial-canker"), Ok(DiseaseId::BacterialCanker));
        assert_eq!(DiseaseId::parse("SOOTY_MOULD"), Ok(DiseaseId::SootyMould));
        assert!(DiseaseId::parse("Leaf Rust").is_err());
    }

    #[test]
    fn test_slug_round_trip() {
        for id in DiseaseId::ALL {
            assert_eq!(DiseaseId::parse(&id.slug()), Ok(id));
        }
    }

    #[test]
    fn test_index_order() {
        assert_eq!(DiseaseId::from_index(0), Some(DiseaseId::Anthracnose));
        assert_eq!(DiseaseId::from_index(5), Some(DiseaseId::Healthy));
        assert_eq!(DiseaseId::from_index(7), Some(DiseaseId::SootyMould));
        assert_eq!(DiseaseId::from_index(8), None);
        assert_eq!(DiseaseId::PowderyMildew.index(), 6);
    }

    #[test]
    fn test_serde_uses_display_label() {
        let json = serde_json::to_string(&DiseaseId::DieBack).unwrap();
        assert_eq!(json, "\"Die Back\"");
        let parsed: DiseaseId = serde_json::from_str("\"Gall Midge\"").unwrap();
        assert_eq!(parsed, DiseaseId::GallMidge);
    }

    #[test]
    fn test_healthy_display_name() {
        let info = disease_info(DiseaseId::Healthy);
        assert_eq!(info.name, "Healthy Leaf");
        assert_eq!(info.severity, "None");
    }

    #[test]
    fn test_unknown_name_falls_back() {
        let info = disease_info_by_name("Leaf Rust");
        assert_eq!(info.id, None);
        assert_eq!(info.name, "Leaf Rust");
        assert_eq!(info.causes, vec!["Information not available"]);
        assert_eq!(info.image_path, "images/unknown.jpg");
    }

    #[test]
    fn test_search_by_symptom() {
        let matches = search_by_symptom("premature leaf drop");
        assert_eq!(
            matches,
            vec![DiseaseId::Anthracnose, DiseaseId::GallMidge, DiseaseId::PowderyMildew]
        );

        assert_eq!(search_by_symptom("POWDERY"), vec![DiseaseId::PowderyMildew]);
        assert!(search_by_symptom("   ").is_empty());
    }
}

//! Leaf image classification results

use serde::{Deserialize, Serialize};

use super::disease::DiseaseId;

/// Predicted label for a leaf image
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Classification {
    pub disease: DiseaseId,
    /// Top score as a percentage (0-100)
    pub confidence_percent: f32,
}

/// Decode classifier output scores (one per label, in index order).
///
/// Returns `None` when the score vector does not cover every label or
/// contains a non-finite value. The first maximum wins a tie.
pub fn decode_scores(scores: &[f32]) -> Option<Classification> {
    if scores.len() != DiseaseId::ALL.len() || scores.iter().any(|s| !s.is_finite()) {
        return None;
    }

    let (index, top) = scores
        .iter()
        .copied()
        .enumerate()
        .fold(None, |best: Option<(usize, f32)>, (i, score)| match best {
            Some((_, top)) if top >= score => best,
            _ => Some((i, score)),
        })?;

    Some(Classification {
        disease: DiseaseId::from_index(index)?,
        confidence_percent: top * 100.0,
    })
}

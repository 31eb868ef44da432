//! Leaf diagnosis service

use serde::Serialize;
use shared::{decode_scores, disease_info, treatment_plan, Classification, DiseaseInfo, TreatmentPlan};
use std::sync::Arc;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::external::LeafClassifier;

/// Classifier verdict bundled with what to do about it
#[derive(Debug, Clone, Serialize)]
pub struct Diagnosis {
    pub request_id: Uuid,
    pub classification: Classification,
    pub disease_info: DiseaseInfo,
    pub treatment: TreatmentPlan,
}

#[derive(Clone)]
pub struct DiagnosisService {
    classifier: Arc<dyn LeafClassifier>,
}

impl DiagnosisService {
    pub fn new(classifier: Arc<dyn LeafClassifier>) -> Self {
        Self { classifier }
    }

    pub async fn diagnose(&self, image: &[u8]) -> AppResult<Diagnosis> {
        let scores = self.classifier.scores(image).await?;
        let classification = decode_scores(&scores).ok_or_else(|| {
            AppError::ClassifierError(format!(
                "expected {} finite scores, got {}",
                shared::DiseaseId::ALL.len(),
                scores.len()
            ))
        })?;

        let request_id = Uuid::new_v4();
        tracing::info!(
            %request_id,
            disease = %classification.disease,
            confidence = classification.confidence_percent,
            "Leaf classified"
        );

        Ok(Diagnosis {
            request_id,
            disease_info: disease_info(classification.disease),
            treatment: treatment_plan(classification.disease),
            classification,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use shared::DiseaseId;

    struct FixedScores(Vec<f32>);

    #[async_trait]
    impl LeafClassifier for FixedScores {
        async fn scores(&self, _image: &[u8]) -> AppResult<Vec<f32>> {
            Ok(self.0.clone())
        }
    }

    #[tokio::test]
    async fn test_diagnose_bundles_info_and_treatment() {
        let classifier = FixedScores(vec![0.05, 0.8, 0.05, 0.02, 0.02, 0.02, 0.02, 0.02]);
        let service = DiagnosisService::new(Arc::new(classifier));

        let diagnosis = service.diagnose(b"leaf").await.unwrap();
        assert_eq!(diagnosis.classification.disease, DiseaseId::BacterialCanker);
        assert!((diagnosis.classification.confidence_percent - 80.0).abs() < 0.001);
        assert_eq!(diagnosis.disease_info.name, "Bacterial Canker");
        assert_eq!(diagnosis.treatment.disease, Some(DiseaseId::BacterialCanker));
    }

    #[tokio::test]
    async fn test_wrong_score_count_is_classifier_error() {
        let service = DiagnosisService::new(Arc::new(FixedScores(vec![1.0, 0.0])));

        let result = service.diagnose(b"leaf").await;
        assert!(matches!(result, Err(AppError::ClassifierError(_))));
    }
}

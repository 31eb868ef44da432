//! Leaf classifier client
//!
//! Client for the hosted image model that scores a mango leaf photo against
//! the eight known labels.

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{AppError, AppResult};

/// Anything that can turn image bytes into per-label scores
#[async_trait]
pub trait LeafClassifier: Send + Sync {
    /// Scores in classifier label order
    async fn scores(&self, image: &[u8]) -> AppResult<Vec<f32>>;
}

/// Client for the leaf classifier microservice
#[derive(Clone)]
pub struct ClassifierClient {
    api_endpoint: String,
    api_key: String,
    http_client: Client,
}

/// Request to classify a leaf image
#[derive(Debug, Serialize)]
pub struct ClassifyRequest {
    pub image_base64: String,
}

/// Response from the classifier API
#[derive(Debug, Deserialize)]
pub struct ClassifyResponse {
    pub scores: Vec<f32>,
}

impl ClassifierClient {
    /// Create a new classifier client
    pub fn new(api_endpoint: String, api_key: String, timeout: Duration) -> AppResult<Self> {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Configuration(format!("Classifier HTTP client: {}", e)))?;

        Ok(Self {
            api_endpoint,
            api_key,
            http_client,
        })
    }

    /// Send an image for classification
    pub async fn classify(&self, request: ClassifyRequest) -> AppResult<ClassifyResponse> {
        let response = self
            .http_client
            .post(&self.api_endpoint)
            .header("x-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::ClassifierError(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::ClassifierError(format!(
                "API returned {}: {}",
                status, body
            )));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::ClassifierError(format!("Failed to parse response: {}", e)))
    }
}

#[async_trait]
impl LeafClassifier for ClassifierClient {
    async fn scores(&self, image: &[u8]) -> AppResult<Vec<f32>> {
        let request = ClassifyRequest {
            image_base64: STANDARD.encode(image),
        };
        Ok(self.classify(request).await?.scores)
    }
}

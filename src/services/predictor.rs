use crate::models::{
    ApiErrorBody, EnsemblePredictionResponse, ModelChoice, PredictionRequest,
    SinglePredictionResponse,
};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when calling the prediction service
#[derive(Debug, Error)]
pub enum PredictorError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("{0}")]
    ApiError(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Prediction API client
///
/// Handles all communication with the model-serving backend: POSTs the
/// feature payload to one of the three prediction endpoints and parses the
/// typed response body.
#[derive(Debug, Clone)]
pub struct PredictorClient {
    base_url: String,
    client: Client,
}

impl PredictorClient {
    /// Create a new client for the given service base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.into(),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Call a single-model endpoint (lightgbm or xgboost)
    pub async fn predict_value(
        &self,
        model: ModelChoice,
        request: &PredictionRequest,
    ) -> Result<SinglePredictionResponse, PredictorError> {
        let json = self.post_features(model, request).await?;

        serde_json::from_value(json).map_err(|e| {
            PredictorError::InvalidResponse(format!("Failed to parse prediction: {}", e))
        })
    }

    /// Call the ensemble endpoint
    pub async fn predict_ensemble(
        &self,
        request: &PredictionRequest,
    ) -> Result<EnsemblePredictionResponse, PredictorError> {
        let json = self.post_features(ModelChoice::Ensemble, request).await?;

        serde_json::from_value(json).map_err(|e| {
            PredictorError::InvalidResponse(format!("Failed to parse ensemble prediction: {}", e))
        })
    }

    /// POST the payload to the endpoint for `model` and return the raw
    /// success body
    ///
    /// A non-2xx status becomes an ApiError carrying the service's `detail`
    /// message verbatim when the body provides one.
    async fn post_features(
        &self,
        model: ModelChoice,
        request: &PredictionRequest,
    ) -> Result<Value, PredictorError> {
        let url = format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            model.endpoint_path()
        );

        tracing::debug!("Requesting prediction from: {}", url);

        let response = self.client.post(&url).json(request).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::error!("Prediction request failed: {} - {}", status, body);

            let detail = serde_json::from_str::<ApiErrorBody>(&body)
                .ok()
                .and_then(|b| b.detail);
            return Err(PredictorError::ApiError(detail.unwrap_or_else(|| {
                format!("Prediction request failed: {}", status)
            })));
        }

        let json: Value = response.json().await?;
        Ok(json)
    }
}

use serde::{Deserialize, Serialize};

/// Success body of the single-model endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SinglePredictionResponse {
    pub predicted_median_house_value: f64,
}

/// Success body of the ensemble endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnsemblePredictionResponse {
    pub lightgbm_prediction: f64,
    pub xgboost_prediction: f64,
    pub mean_prediction: f64,
}

/// Error body the prediction service attaches to non-2xx responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

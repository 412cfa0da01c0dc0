//! Valuer Core - prediction client core for the Sun City housing valuer
//!
//! This library provides the form state, feature encoding, and request
//! orchestration behind the housing price front end: it turns free-text
//! feature values into a typed payload, submits it to the model-serving API
//! (LightGBM, XGBoost, or both as an ensemble), and normalizes the response
//! into a displayable outcome.

pub mod config;
pub mod core;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use crate::core::{PredictError, PredictionSession};
pub use crate::models::{
    FormField, HouseForm, ModelChoice, PredictionOutcome, PredictionRequest,
    OCEAN_PROXIMITY_CHOICES,
};
pub use crate::services::{PredictorClient, PredictorError};

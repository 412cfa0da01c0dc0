// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{FormField, HouseForm, ModelChoice, PredictionOutcome, OCEAN_PROXIMITY_CHOICES};
pub use requests::PredictionRequest;
pub use responses::{ApiErrorBody, EnsemblePredictionResponse, SinglePredictionResponse};

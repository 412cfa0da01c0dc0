// Service exports
pub mod predictor;

pub use predictor::{PredictorClient, PredictorError};

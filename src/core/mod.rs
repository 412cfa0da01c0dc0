// Core orchestration exports
pub mod encoding;
pub mod session;

pub use encoding::{build_request, encode_ocean_proximity, parse_feature, OceanProximityEncoding};
pub use session::{PredictError, PredictionSession};

use crate::models::{HouseForm, PredictionRequest};

/// One-hot encoded ocean proximity indicators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OceanProximityEncoding {
    pub one_hour_ocean: u8,
    pub inland: u8,
    pub island: u8,
    pub near_bay: u8,
    pub near_ocean: u8,
}

/// Parse a free-form numeric field
///
/// The form performs no validation of its own; unparseable text becomes NaN
/// and is forwarded, leaving the prediction service to reject it. serde_json
/// serializes a non-finite value as JSON null.
#[inline]
pub fn parse_feature(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(f64::NAN)
}

/// One-hot encode an ocean proximity value against the five known categories
///
/// A value outside the five categories encodes as all zeros.
pub fn encode_ocean_proximity(value: &str) -> OceanProximityEncoding {
    OceanProximityEncoding {
        one_hour_ocean: (value == "<1H OCEAN") as u8,
        inland: (value == "INLAND") as u8,
        island: (value == "ISLAND") as u8,
        near_bay: (value == "NEAR BAY") as u8,
        near_ocean: (value == "NEAR OCEAN") as u8,
    }
}

/// Build the wire payload from the current form state
pub fn build_request(form: &HouseForm) -> PredictionRequest {
    let proximity = encode_ocean_proximity(&form.ocean_proximity);

    PredictionRequest {
        longitude: parse_feature(&form.longitude),
        latitude: parse_feature(&form.latitude),
        housing_median_age: parse_feature(&form.housing_median_age),
        total_rooms: parse_feature(&form.total_rooms),
        total_bedrooms: parse_feature(&form.total_bedrooms),
        population: parse_feature(&form.population),
        households: parse_feature(&form.households),
        median_income: parse_feature(&form.median_income),
        ocean_proximity_1h_ocean: proximity.one_hour_ocean,
        ocean_proximity_inland: proximity.inland,
        ocean_proximity_island: proximity.island,
        ocean_proximity_near_bay: proximity.near_bay,
        ocean_proximity_near_ocean: proximity.near_ocean,
        bedroom_ratio: parse_feature(&form.bedroom_ratio),
        household_rooms: parse_feature(&form.household_rooms),
    }
}

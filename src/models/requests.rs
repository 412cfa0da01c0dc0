use serde::{Deserialize, Serialize};

/// Wire payload for the prediction endpoints
///
/// Field names match the feature columns the models were trained on, with
/// the ocean proximity category expanded into five one-hot indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub longitude: f64,
    pub latitude: f64,
    pub housing_median_age: f64,
    pub total_rooms: f64,
    pub total_bedrooms: f64,
    pub population: f64,
    pub households: f64,
    pub median_income: f64,
    #[serde(rename = "ocean_proximity_1H_OCEAN")]
    pub ocean_proximity_1h_ocean: u8,
    #[serde(rename = "ocean_proximity_INLAND")]
    pub ocean_proximity_inland: u8,
    #[serde(rename = "ocean_proximity_ISLAND")]
    pub ocean_proximity_island: u8,
    #[serde(rename = "ocean_proximity_NEAR_BAY")]
    pub ocean_proximity_near_bay: u8,
    #[serde(rename = "ocean_proximity_NEAR_OCEAN")]
    pub ocean_proximity_near_ocean: u8,
    pub bedroom_ratio: f64,
    pub household_rooms: f64,
}

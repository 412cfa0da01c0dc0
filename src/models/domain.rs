use std::fmt;

/// The five ocean proximity categories the models were trained on
pub const OCEAN_PROXIMITY_CHOICES: [&str; 5] =
    ["NEAR BAY", "<1H OCEAN", "INLAND", "NEAR OCEAN", "ISLAND"];

/// Identifies one editable field of the prediction form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Longitude,
    Latitude,
    HousingMedianAge,
    TotalRooms,
    TotalBedrooms,
    Population,
    Households,
    MedianIncome,
    OceanProximity,
    BedroomRatio,
    HouseholdRooms,
}

/// In-memory state of the prediction form
///
/// Numeric fields are held as free-form text, mirroring the inputs they are
/// bound to, and are only parsed when a prediction is submitted. The ocean
/// proximity field holds one of the five category literals when set through
/// the supported choices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HouseForm {
    pub longitude: String,
    pub latitude: String,
    pub housing_median_age: String,
    pub total_rooms: String,
    pub total_bedrooms: String,
    pub population: String,
    pub households: String,
    pub median_income: String,
    pub ocean_proximity: String,
    pub bedroom_ratio: String,
    pub household_rooms: String,
}

impl HouseForm {
    /// Replace exactly one field, leaving all others unchanged
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Longitude => self.longitude = value,
            FormField::Latitude => self.latitude = value,
            FormField::HousingMedianAge => self.housing_median_age = value,
            FormField::TotalRooms => self.total_rooms = value,
            FormField::TotalBedrooms => self.total_bedrooms = value,
            FormField::Population => self.population = value,
            FormField::Households => self.households = value,
            FormField::MedianIncome => self.median_income = value,
            FormField::OceanProximity => self.ocean_proximity = value,
            FormField::BedroomRatio => self.bedroom_ratio = value,
            FormField::HouseholdRooms => self.household_rooms = value,
        }
    }

    /// Read one field back, for display binding
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Longitude => &self.longitude,
            FormField::Latitude => &self.latitude,
            FormField::HousingMedianAge => &self.housing_median_age,
            FormField::TotalRooms => &self.total_rooms,
            FormField::TotalBedrooms => &self.total_bedrooms,
            FormField::Population => &self.population,
            FormField::Households => &self.households,
            FormField::MedianIncome => &self.median_income,
            FormField::OceanProximity => &self.ocean_proximity,
            FormField::BedroomRatio => &self.bedroom_ratio,
            FormField::HouseholdRooms => &self.household_rooms,
        }
    }
}

impl Default for HouseForm {
    /// Sample block from the California housing dataset (Berkeley, near bay)
    fn default() -> Self {
        Self {
            longitude: "-122.23".to_string(),
            latitude: "37.88".to_string(),
            housing_median_age: "41".to_string(),
            total_rooms: "880".to_string(),
            total_bedrooms: "129".to_string(),
            population: "322".to_string(),
            households: "126".to_string(),
            median_income: "8.3252".to_string(),
            ocean_proximity: "NEAR BAY".to_string(),
            bedroom_ratio: "0.146".to_string(),
            household_rooms: "6.984".to_string(),
        }
    }
}

/// Which prediction endpoint to call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelChoice {
    Lightgbm,
    Xgboost,
    Ensemble,
}

impl ModelChoice {
    /// Path of the endpoint, relative to the service base URL
    pub fn endpoint_path(&self) -> &'static str {
        match self {
            Self::Lightgbm => "/predict/lightgbm",
            Self::Xgboost => "/predict/xgboost",
            Self::Ensemble => "/predict/ensemble",
        }
    }

    /// Human-readable label attached to the outcome
    pub fn label(&self) -> &'static str {
        match self {
            Self::Lightgbm => "LightGBM",
            Self::Xgboost => "XGBoost",
            Self::Ensemble => "Ensemble (LightGBM + XGBoost)",
        }
    }
}

/// Result of a completed prediction, held for display
///
/// A session holds at most one outcome at a time, so storing a new result
/// replaces whichever shape the previous submission produced.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictionOutcome {
    Single {
        value: f64,
        model: &'static str,
    },
    Ensemble {
        lightgbm: f64,
        xgboost: f64,
        mean: f64,
        model: &'static str,
    },
}

impl fmt::Display for PredictionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single { value, model } => {
                write!(f, "{}: {}", model, format_usd(*value))
            }
            Self::Ensemble {
                lightgbm,
                xgboost,
                mean,
                model,
            } => write!(
                f,
                "{}: {} (LightGBM {}, XGBoost {})",
                model,
                format_usd(*mean),
                format_usd(*lightgbm),
                format_usd(*xgboost)
            ),
        }
    }
}

/// Format a dollar amount with thousands separators, cents only when present
fn format_usd(value: f64) -> String {
    let cents = (value * 100.0).round() as i64;
    let whole = (cents / 100).abs();
    let frac = (cents % 100).abs();

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if cents < 0 { "-" } else { "" };
    if frac == 0 {
        format!("{}${}", sign, grouped)
    } else {
        format!("{}${}.{:02}", sign, grouped, frac)
    }
}

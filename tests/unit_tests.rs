// Unit tests for Valuer Core

use valuer_core::core::{build_request, encode_ocean_proximity, parse_feature};
use valuer_core::models::{FormField, HouseForm, ModelChoice, OCEAN_PROXIMITY_CHOICES};

fn indicators(value: &str) -> [u8; 5] {
    let e = encode_ocean_proximity(value);
    [e.one_hour_ocean, e.inland, e.island, e.near_bay, e.near_ocean]
}

#[test]
fn test_each_choice_sets_exactly_one_indicator() {
    for choice in OCEAN_PROXIMITY_CHOICES {
        let set: u8 = indicators(choice).iter().sum();
        assert_eq!(set, 1, "choice {:?} should set exactly one indicator", choice);
    }
}

#[test]
fn test_choices_map_to_distinct_indicators() {
    assert_eq!(indicators("<1H OCEAN"), [1, 0, 0, 0, 0]);
    assert_eq!(indicators("INLAND"), [0, 1, 0, 0, 0]);
    assert_eq!(indicators("ISLAND"), [0, 0, 1, 0, 0]);
    assert_eq!(indicators("NEAR BAY"), [0, 0, 0, 1, 0]);
    assert_eq!(indicators("NEAR OCEAN"), [0, 0, 0, 0, 1]);
}

#[test]
fn test_unknown_category_encodes_all_zeros() {
    // Current behavior: an unrecognized value produces no indicator at all
    assert_eq!(indicators("RIVERSIDE"), [0, 0, 0, 0, 0]);
    assert_eq!(indicators(""), [0, 0, 0, 0, 0]);
    assert_eq!(indicators("near bay"), [0, 0, 0, 0, 0]);
}

#[test]
fn test_parse_feature_accepts_plain_and_padded_numbers() {
    assert_eq!(parse_feature("322"), 322.0);
    assert_eq!(parse_feature("  -122.23"), -122.23);
    assert_eq!(parse_feature("8.3252 "), 8.3252);
}

#[test]
fn test_parse_feature_turns_garbage_into_nan() {
    assert!(parse_feature("eight").is_nan());
    assert!(parse_feature("1.2.3").is_nan());
    assert!(parse_feature("").is_nan());
}

#[test]
fn test_build_request_maps_sample_form() {
    let request = build_request(&HouseForm::default());

    assert_eq!(request.longitude, -122.23);
    assert_eq!(request.latitude, 37.88);
    assert_eq!(request.housing_median_age, 41.0);
    assert_eq!(request.total_rooms, 880.0);
    assert_eq!(request.total_bedrooms, 129.0);
    assert_eq!(request.population, 322.0);
    assert_eq!(request.households, 126.0);
    assert_eq!(request.median_income, 8.3252);
    assert_eq!(request.ocean_proximity_near_bay, 1);
    assert_eq!(request.ocean_proximity_1h_ocean, 0);
    assert_eq!(request.ocean_proximity_inland, 0);
    assert_eq!(request.ocean_proximity_island, 0);
    assert_eq!(request.ocean_proximity_near_ocean, 0);
    assert_eq!(request.bedroom_ratio, 0.146);
    assert_eq!(request.household_rooms, 6.984);
}

#[test]
fn test_build_request_tracks_field_edits() {
    let mut form = HouseForm::default();
    form.set(FormField::MedianIncome, "2.5");
    form.set(FormField::OceanProximity, "INLAND");

    let request = build_request(&form);
    assert_eq!(request.median_income, 2.5);
    assert_eq!(request.ocean_proximity_inland, 1);
    assert_eq!(request.ocean_proximity_near_bay, 0);
}

#[test]
fn test_request_serializes_wire_field_names() {
    let request = build_request(&HouseForm::default());
    let json = serde_json::to_value(&request).expect("request should serialize");
    let object = json.as_object().expect("request should be a JSON object");

    for key in [
        "longitude",
        "latitude",
        "housing_median_age",
        "total_rooms",
        "total_bedrooms",
        "population",
        "households",
        "median_income",
        "ocean_proximity_1H_OCEAN",
        "ocean_proximity_INLAND",
        "ocean_proximity_ISLAND",
        "ocean_proximity_NEAR_BAY",
        "ocean_proximity_NEAR_OCEAN",
        "bedroom_ratio",
        "household_rooms",
    ] {
        assert!(object.contains_key(key), "payload should carry key {:?}", key);
    }
    assert_eq!(object.len(), 15);
}

#[test]
fn test_non_finite_feature_serializes_as_null() {
    let mut form = HouseForm::default();
    form.set(FormField::TotalRooms, "lots");

    let json = serde_json::to_value(build_request(&form)).expect("request should serialize");
    assert!(json["total_rooms"].is_null());
    assert_eq!(json["total_bedrooms"], 129.0);
}

#[test]
fn test_model_choice_endpoints_and_labels() {
    assert_eq!(ModelChoice::Lightgbm.endpoint_path(), "/predict/lightgbm");
    assert_eq!(ModelChoice::Xgboost.endpoint_path(), "/predict/xgboost");
    assert_eq!(ModelChoice::Ensemble.endpoint_path(), "/predict/ensemble");
    assert_eq!(ModelChoice::Lightgbm.label(), "LightGBM");
    assert_eq!(ModelChoice::Xgboost.label(), "XGBoost");
    assert_eq!(ModelChoice::Ensemble.label(), "Ensemble (LightGBM + XGBoost)");
}

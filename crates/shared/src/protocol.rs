use serde::{Deserialize, Serialize};

use crate::domain::FormValue;

pub const LOCATION_NAMES_PATH: &str = "/get_location_names";
pub const PREDICT_HOME_PRICE_PATH: &str = "/predict_home_price";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationNamesResponse {
    pub locations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictHomePriceRequest {
    pub total_sqft: FormValue,
    pub location: String,
    pub bhk: FormValue,
    pub bath: FormValue,
}

/// `estimated_price` stays optional so a body without it can be told apart
/// from a transport failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictHomePriceResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_price: Option<f64>,
}

use serde::{Deserialize, Serialize};

/// One decoded weather payload for a single city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherResponse {
    pub message: String,
    pub status: i64,
    /// Display string, never parsed as a calendar date.
    pub date: String,
    pub time: String,
    #[serde(rename = "cityInfo")]
    pub city_info: CityInfo,
    pub data: WeatherSummary,
}

/// City block of the payload.
///
/// Only `city` is required. The live endpoint also sends the fields below;
/// they are kept when present and skipped on encode when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityInfo {
    pub city: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citykey: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,

    #[serde(
        rename = "updateTime",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub update_time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSummary {
    /// Humidity, e.g. "40%".
    pub shidu: String,
    pub pm25: f64,
    pub pm10: f64,
    pub quality: String,
    /// Temperature without unit.
    pub wendu: String,
    /// Health advisory text.
    pub ganmao: String,
    pub forecast: Vec<Forecast>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub date: String,
    pub high: String,
    pub low: String,
    pub week: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub aqi: i64,
    /// Wind direction.
    pub fx: String,
    /// Wind force.
    pub fl: String,
    pub notice: String,
}

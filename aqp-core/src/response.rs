//! Typed views of the replies each prediction service sends back.

use crate::config::PayloadShape;
use crate::error::PredictError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Reply of the year/month/day service.
///
/// Older deployments only send `average_prediction` and `air_quality`; newer
/// ones add the per-pollutant breakdown.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
pub struct AverageReport {
    pub average_prediction: Option<f64>,
    pub air_quality: Option<String>,
    pub target_date: Option<String>,
    pub predicted_pollutant_levels: Option<BTreeMap<String, f64>>,
    pub dominant_pollutant: Option<String>,
    pub aqi_state: Option<String>,
}

/// Pollutant concentrations predicted for one day.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
pub struct PollutantLevels {
    #[serde(rename = "PM25", alias = "PM2.5")]
    pub pm25: Option<f64>,
    #[serde(rename = "PM10")]
    pub pm10: Option<f64>,
    #[serde(rename = "SO2")]
    pub so2: Option<f64>,
    #[serde(rename = "CO")]
    pub co: Option<f64>,
    #[serde(rename = "O3")]
    pub o3: Option<f64>,
    #[serde(rename = "NO2")]
    pub no2: Option<f64>,
}

impl PollutantLevels {
    /// (label, value) pairs in display order.
    pub fn labelled(&self) -> [(&'static str, Option<f64>); 6] {
        [
            ("PM2.5", self.pm25),
            ("PM10", self.pm10),
            ("SO2", self.so2),
            ("CO", self.co),
            ("O3", self.o3),
            ("NO2", self.no2),
        ]
    }
}

/// One model's entry in a per-model reply. A model can fail on its own
/// while the request as a whole succeeds.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ModelOutcome {
    Failed {
        error: String,
    },
    Predicted {
        #[serde(default)]
        date: Option<String>,
        prediction: PollutantLevels,
    },
}

/// Values of a forecast series: either one value per step or one row per step.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeriesValues {
    Flat(Vec<f64>),
    Nested(Vec<Vec<f64>>),
}

impl SeriesValues {
    pub fn rows(&self) -> Vec<Vec<f64>> {
        match self {
            SeriesValues::Flat(values) => values.iter().map(|v| vec![*v]).collect(),
            SeriesValues::Nested(rows) => rows.clone(),
        }
    }
}

/// Reply of the site forecast service.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeriesReport {
    Single { predictions: SeriesValues },
    PerAlgorithm(BTreeMap<String, SeriesValues>),
}

/// A decoded prediction, whichever service produced it.
#[derive(Debug, PartialEq, Clone, Serialize)]
#[serde(untagged)]
pub enum PredictionResult {
    Average(AverageReport),
    PerModel(BTreeMap<String, ModelOutcome>),
    Series(SeriesReport),
}

impl PredictionResult {
    /// Decode a response body according to the payload shape that produced it.
    pub fn decode(shape: PayloadShape, body: &str) -> Result<Self, PredictError> {
        let decoded = match shape {
            PayloadShape::DateParts => {
                let value: serde_json::Value =
                    serde_json::from_str(body).map_err(|e| PredictError::Decode(e.to_string()))?;
                if !value.is_object() {
                    return Err(PredictError::Decode("expected a JSON object".to_string()));
                }
                serde_json::from_value(value).map(PredictionResult::Average)
            }
            PayloadShape::ModelDate => serde_json::from_str(body).map(PredictionResult::PerModel),
            PayloadShape::Site => serde_json::from_str(body).map(PredictionResult::Series),
        };
        decoded.map_err(|e| PredictError::Decode(e.to_string()))
    }
}

//! Form configuration.
//!
//! One `FormConfig` describes a whole prediction form: where it posts, which
//! fields it shows, and how the request body is shaped. The built-in presets
//! cover the three services the predictor talks to; anything else can be
//! loaded from JSON.

use crate::error::PredictError;
use crate::field::Field;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Names accepted by [`FormConfig::preset`].
pub const PRESET_NAMES: &[&str] = &["daily", "model", "site"];

pub const DAILY_ENDPOINT: &str = "http://127.0.0.1:8000/predict";
pub const MODEL_ENDPOINT: &str =
    "https://air-quality-predictor-backend-git-main-brishar0ns-projects.vercel.app/get_prediction";
pub const SITE_ENDPOINT: &str = "http://127.0.0.1:5000/api/predict";

const ABOUT: &str = "Our Urban Air Quality Predictor is based on deep learning models that \
predict the quality of the air from the year, month and day. The models were trained on \
pollutant and weather data from South Tangerang.";

/// Shape of the request body, which also fixes the shape of the reply.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayloadShape {
    /// `{ year, month, day }` answered by an average prediction.
    DateParts,
    /// `{ model, date: "YYYY-MM-DD" }` answered by a per-model mapping.
    ModelDate,
    /// `{ location, pollutant, algorithm }` answered by a time series.
    Site,
}

impl PayloadShape {
    /// Fields the payload cannot be built without.
    pub fn required_fields(&self) -> &'static [Field] {
        match self {
            PayloadShape::DateParts => &[Field::Year, Field::Month, Field::Day],
            PayloadShape::ModelDate => &[Field::Year, Field::Month, Field::Day, Field::Model],
            PayloadShape::Site => &[Field::Location, Field::Pollutant, Field::Algorithm],
        }
    }
}

/// Inclusive bounds for the year field.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub struct YearRange {
    pub min: i32,
    pub max: i32,
}

impl Default for YearRange {
    fn default() -> Self {
        Self { min: 2023, max: 9999 }
    }
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct FormConfig {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Full URL the form posts to.
    pub endpoint: String,
    pub payload: PayloadShape,
    /// Fields in display order. Empty means "the payload's required fields".
    #[serde(default)]
    pub fields: Vec<Field>,
    /// Duplicate the body fields into the query string.
    #[serde(default)]
    pub query_params: bool,
    #[serde(default)]
    pub show_reset: bool,
    /// Show transport error detail instead of the fixed failure message.
    #[serde(default)]
    pub surface_error_detail: bool,
    #[serde(default)]
    pub year_range: YearRange,
}

impl FormConfig {
    /// Year/month/day form posting to the local GRU service.
    pub fn daily() -> Self {
        Self {
            name: "daily".to_string(),
            title: "Air Quality Prediction".to_string(),
            description: Some(ABOUT.to_string()),
            endpoint: DAILY_ENDPOINT.to_string(),
            payload: PayloadShape::DateParts,
            fields: vec![Field::Year, Field::Month, Field::Day],
            query_params: false,
            show_reset: false,
            surface_error_detail: false,
            year_range: YearRange::default(),
        }
    }

    /// Date plus model selection, answered per model.
    pub fn model_comparison() -> Self {
        Self {
            name: "model".to_string(),
            title: "Air Quality Predictor".to_string(),
            description: Some(ABOUT.to_string()),
            endpoint: MODEL_ENDPOINT.to_string(),
            payload: PayloadShape::ModelDate,
            fields: vec![Field::Year, Field::Month, Field::Day, Field::Model],
            query_params: false,
            show_reset: true,
            surface_error_detail: false,
            year_range: YearRange { min: 2023, max: 2026 },
        }
    }

    /// Location/pollutant/algorithm forecast.
    pub fn site_forecast() -> Self {
        Self {
            name: "site".to_string(),
            title: "Pollutant Forecast".to_string(),
            description: None,
            endpoint: SITE_ENDPOINT.to_string(),
            payload: PayloadShape::Site,
            fields: vec![Field::Location, Field::Pollutant, Field::Algorithm],
            query_params: true,
            show_reset: true,
            surface_error_detail: true,
            year_range: YearRange::default(),
        }
    }

    /// Look up a built-in preset by name.
    pub fn preset(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "daily" => Some(Self::daily()),
            "model" => Some(Self::model_comparison()),
            "site" => Some(Self::site_forecast()),
            _ => None,
        }
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, PredictError> {
        let config: FormConfig =
            serde_json::from_str(json).map_err(|e| PredictError::Config(e.to_string()))?;
        config.validate()
    }

    /// Replace the endpoint URL.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Fields in display order, falling back to the payload's required set.
    pub fn field_list(&self) -> Vec<Field> {
        if self.fields.is_empty() {
            self.payload.required_fields().to_vec()
        } else {
            self.fields.clone()
        }
    }

    pub fn has_field(&self, field: Field) -> bool {
        self.field_list().contains(&field)
    }

    /// Inclusive bounds for a numeric field under this configuration.
    pub fn bounds(&self, field: Field) -> Option<(i32, i32)> {
        match field {
            Field::Year => Some((self.year_range.min, self.year_range.max)),
            other => other.fixed_bounds(),
        }
    }

    /// Check the configuration is usable and return it.
    pub fn validate(self) -> Result<Self, PredictError> {
        if self.endpoint.trim().is_empty() {
            return Err(PredictError::Config("endpoint is empty".to_string()));
        }
        let fields = self.field_list();
        let mut seen = HashSet::new();
        for field in &fields {
            if !seen.insert(*field) {
                return Err(PredictError::Config(format!("field '{}' listed twice", field)));
            }
        }
        for required in self.payload.required_fields() {
            if !seen.contains(required) {
                return Err(PredictError::Config(format!(
                    "{:?} payload needs the '{}' field",
                    self.payload, required
                )));
            }
        }
        if self.year_range.min > self.year_range.max {
            return Err(PredictError::Config(format!(
                "year range {}..={} is empty",
                self.year_range.min, self.year_range.max
            )));
        }
        debug!("Form config '{}' posts to {}", self.name, self.endpoint);
        Ok(self)
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self::daily()
    }
}

//! Validation of a filled-in form and composition of the outgoing request.

use crate::config::{FormConfig, PayloadShape};
use crate::error::PredictError;
use crate::field::{Field, FieldKind};
use crate::form_state::FormState;
use aqp_utils::dates::{calendar_date, date_parts, days_in_month, format_date};
use aqp_utils::error::DateError;
use chrono::NaiveDate;
use serde::Serialize;

/// JSON body sent to the prediction service.
#[derive(Debug, PartialEq, Clone, Serialize)]
#[serde(untagged)]
pub enum RequestPayload {
    DateParts { year: i32, month: u32, day: u32 },
    ModelDate { model: String, date: String },
    Site { location: String, pollutant: String, algorithm: String },
}

/// Everything a transport needs to issue one prediction call.
#[derive(Debug, PartialEq, Clone)]
pub struct PredictionRequest {
    pub url: String,
    pub query: Vec<(String, String)>,
    pub body: RequestPayload,
}

impl PredictionRequest {
    /// Validate `form` against `config` and build the request.
    ///
    /// Checks run in field order: presence of every field, then numeric
    /// ranges and choice membership, then the calendar date as a whole.
    pub fn compose(config: &FormConfig, form: &FormState) -> Result<Self, PredictError> {
        let fields = config.field_list();
        if let Some(missing) = fields.iter().find(|f| form.get(**f).trim().is_empty()) {
            return Err(PredictError::MissingField(*missing));
        }
        for field in &fields {
            check_field(config, *field, form.get(*field).trim())?;
        }

        let body = match config.payload {
            PayloadShape::DateParts => {
                let (year, month, day) = date_parts(&date_from(form)?);
                RequestPayload::DateParts { year, month, day }
            }
            PayloadShape::ModelDate => RequestPayload::ModelDate {
                model: form.get(Field::Model).trim().to_string(),
                date: format_date(&date_from(form)?),
            },
            PayloadShape::Site => RequestPayload::Site {
                location: form.get(Field::Location).trim().to_string(),
                pollutant: form.get(Field::Pollutant).trim().to_string(),
                algorithm: form.get(Field::Algorithm).trim().to_string(),
            },
        };

        let query = if config.query_params {
            query_pairs(&body)
        } else {
            Vec::new()
        };

        Ok(Self {
            url: config.endpoint.clone(),
            query,
            body,
        })
    }
}

fn check_field(config: &FormConfig, field: Field, value: &str) -> Result<(), PredictError> {
    match field.kind() {
        FieldKind::Number => {
            let number = value.parse::<i32>().map_err(|_| PredictError::InvalidNumber {
                field,
                value: value.to_string(),
            })?;
            if let Some((min, max)) = config.bounds(field) {
                if number < min || number > max {
                    return Err(PredictError::OutOfRange { field, min, max });
                }
            }
            Ok(())
        }
        FieldKind::Choice => {
            if field.options().contains(&value) {
                Ok(())
            } else {
                Err(PredictError::InvalidChoice {
                    field,
                    value: value.to_string(),
                })
            }
        }
        FieldKind::Text => Ok(()),
    }
}

/// Numbers are already range-checked, so the casts cannot go negative.
fn date_from(form: &FormState) -> Result<NaiveDate, PredictError> {
    let parse = |field: Field| {
        form.get(field)
            .trim()
            .parse::<i32>()
            .map_err(|_| PredictError::InvalidNumber {
                field,
                value: form.get(field).to_string(),
            })
    };
    let year = parse(Field::Year)?;
    let month = parse(Field::Month)? as u32;
    let day = parse(Field::Day)? as u32;
    calendar_date(year, month, day).map_err(|e| match days_in_month(year, month) {
        Some(last) => PredictError::from(DateError(format!("{year}-{month:02} has {last} days"))),
        None => PredictError::from(e),
    })
}

fn query_pairs(body: &RequestPayload) -> Vec<(String, String)> {
    match body {
        RequestPayload::DateParts { year, month, day } => vec![
            ("year".to_string(), year.to_string()),
            ("month".to_string(), month.to_string()),
            ("day".to_string(), day.to_string()),
        ],
        RequestPayload::ModelDate { model, date } => vec![
            ("model".to_string(), model.clone()),
            ("date".to_string(), date.clone()),
        ],
        RequestPayload::Site {
            location,
            pollutant,
            algorithm,
        } => vec![
            ("location".to_string(), location.clone()),
            ("pollutant".to_string(), pollutant.clone()),
            ("algorithm".to_string(), algorithm.clone()),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn filled(config: &FormConfig, values: &[(Field, &str)]) -> FormState {
        let mut form = FormState::new(&config.field_list());
        for (field, value) in values {
            form.set(*field, *value);
        }
        form
    }

    #[test]
    fn test_date_parts_payload() {
        let config = FormConfig::daily();
        let form = filled(&config, &[(Field::Year, "2024"), (Field::Month, "5"), (Field::Day, "10")]);
        let request = PredictionRequest::compose(&config, &form).unwrap();
        assert_eq!(request.url, "http://127.0.0.1:8000/predict");
        assert!(request.query.is_empty());
        assert_eq!(
            serde_json::to_value(&request.body).unwrap(),
            json!({ "year": 2024, "month": 5, "day": 10 })
        );
    }

    #[test]
    fn test_model_date_payload_pads_date() {
        let config = FormConfig::model_comparison();
        let form = filled(
            &config,
            &[
                (Field::Year, "2025"),
                (Field::Month, "3"),
                (Field::Day, "7"),
                (Field::Model, "GRU_Attention"),
            ],
        );
        let request = PredictionRequest::compose(&config, &form).unwrap();
        assert_eq!(
            serde_json::to_value(&request.body).unwrap(),
            json!({ "model": "GRU_Attention", "date": "2025-03-07" })
        );
    }

    #[test]
    fn test_site_payload_is_duplicated_into_query() {
        let config = FormConfig::site_forecast();
        let form = filled(
            &config,
            &[
                (Field::Location, "South Tangerang"),
                (Field::Pollutant, "SO2"),
                (Field::Algorithm, "lstm"),
            ],
        );
        let request = PredictionRequest::compose(&config, &form).unwrap();
        assert_eq!(
            request.query,
            vec![
                ("location".to_string(), "South Tangerang".to_string()),
                ("pollutant".to_string(), "SO2".to_string()),
                ("algorithm".to_string(), "lstm".to_string()),
            ]
        );
        assert_eq!(
            serde_json::to_value(&request.body).unwrap(),
            json!({ "location": "South Tangerang", "pollutant": "SO2", "algorithm": "lstm" })
        );
    }

    #[test]
    fn test_missing_model_is_reported_first() {
        let config = FormConfig::model_comparison();
        let form = filled(&config, &[(Field::Year, "2025"), (Field::Month, "3"), (Field::Day, "7")]);
        assert_eq!(
            PredictionRequest::compose(&config, &form),
            Err(PredictError::MissingField(Field::Model))
        );
    }

    #[test]
    fn test_numeric_checks() {
        let config = FormConfig::model_comparison();
        let base = [(Field::Month, "3"), (Field::Day, "7"), (Field::Model, "CNN")];

        let mut values = base.to_vec();
        values.push((Field::Year, "2022"));
        assert_eq!(
            PredictionRequest::compose(&config, &filled(&config, &values)),
            Err(PredictError::OutOfRange { field: Field::Year, min: 2023, max: 2026 })
        );

        let mut values = base.to_vec();
        values.push((Field::Year, "twenty"));
        assert!(matches!(
            PredictionRequest::compose(&config, &filled(&config, &values)),
            Err(PredictError::InvalidNumber { field: Field::Year, .. })
        ));
    }

    #[test]
    fn test_impossible_day_is_rejected() {
        let config = FormConfig::daily();
        let form = filled(&config, &[(Field::Year, "2023"), (Field::Month, "2"), (Field::Day, "30")]);
        assert_eq!(
            PredictionRequest::compose(&config, &form),
            Err(PredictError::InvalidDate(DateError("2023-02 has 28 days".to_string())))
        );
    }

    #[test]
    fn test_unknown_choice_is_rejected() {
        let config = FormConfig::model_comparison();
        let form = filled(
            &config,
            &[
                (Field::Year, "2025"),
                (Field::Month, "3"),
                (Field::Day, "7"),
                (Field::Model, "Transformer"),
            ],
        );
        assert!(matches!(
            PredictionRequest::compose(&config, &form),
            Err(PredictError::InvalidChoice { field: Field::Model, .. })
        ));
    }
}

//! Human-readable rendering of prediction results, shared by the web form and
//! the CLI.

use crate::field::POLLUTANTS;
use crate::response::{AverageReport, ModelOutcome, PredictionResult, SeriesReport, SeriesValues};
use std::fmt;

pub const NOT_AVAILABLE: &str = "N/A";

/// A titled group of display lines.
#[derive(Debug, PartialEq, Clone)]
pub struct ResultSection {
    pub title: Option<String>,
    pub lines: Vec<String>,
}

impl fmt::Display for ResultSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(title) = &self.title {
            writeln!(f, "{}", title)?;
        }
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

fn or_na(value: Option<f64>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| v.to_string())
}

impl PredictionResult {
    pub fn sections(&self) -> Vec<ResultSection> {
        match self {
            PredictionResult::Average(report) => vec![average_section(report)],
            PredictionResult::PerModel(models) => models
                .iter()
                .map(|(model, outcome)| model_section(model, outcome))
                .collect(),
            PredictionResult::Series(SeriesReport::Single { predictions }) => {
                vec![series_section("Predictions", predictions)]
            }
            PredictionResult::Series(SeriesReport::PerAlgorithm(series)) => series
                .iter()
                .map(|(algorithm, values)| series_section(algorithm, values))
                .collect(),
        }
    }
}

fn average_section(report: &AverageReport) -> ResultSection {
    let average = report
        .average_prediction
        .map_or_else(|| NOT_AVAILABLE.to_string(), |v| format!("{:.2}", v));
    let quality = report
        .air_quality
        .as_deref()
        .or(report.aqi_state.as_deref())
        .unwrap_or(NOT_AVAILABLE);

    let mut lines = vec![
        format!("Average Prediction: {}", average),
        format!("Air Quality: {}", quality),
    ];
    if let Some(date) = &report.target_date {
        lines.push(format!("Target Date: {}", date));
    }
    if let Some(dominant) = &report.dominant_pollutant {
        lines.push(format!("Dominant Pollutant: {}", dominant));
    }
    if let Some(levels) = &report.predicted_pollutant_levels {
        for label in POLLUTANTS {
            if let Some(value) = levels.get(*label) {
                lines.push(format!("{}: {:.3}", label, value));
            }
        }
        for (label, value) in levels.iter().filter(|(l, _)| !POLLUTANTS.contains(&l.as_str())) {
            lines.push(format!("{}: {:.3}", label, value));
        }
    }
    ResultSection {
        title: None,
        lines,
    }
}

fn model_section(model: &str, outcome: &ModelOutcome) -> ResultSection {
    let lines = match outcome {
        ModelOutcome::Failed { error } => vec![error.clone()],
        ModelOutcome::Predicted { date, prediction } => {
            let mut lines = vec![format!(
                "Prediction Date: {}",
                date.as_deref().unwrap_or(NOT_AVAILABLE)
            )];
            lines.extend(
                prediction
                    .labelled()
                    .iter()
                    .map(|(label, value)| format!("{}: {}", label, or_na(*value))),
            );
            lines
        }
    };
    ResultSection {
        title: Some(model.to_string()),
        lines,
    }
}

fn series_section(title: &str, values: &SeriesValues) -> ResultSection {
    let lines = values
        .rows()
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let joined = row
                .iter()
                .map(|v| format!("{:.2}", v))
                .collect::<Vec<_>>()
                .join(", ");
            format!("Step {}: {}", i + 1, joined)
        })
        .collect();
    ResultSection {
        title: Some(title.to_string()),
        lines,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PayloadShape;

    #[test]
    fn test_average_lines() {
        let result = PredictionResult::decode(
            PayloadShape::DateParts,
            r#"{"average_prediction": 42.567, "air_quality": "Moderate"}"#,
        )
        .unwrap();
        let sections = result.sections();
        assert_eq!(sections.len(), 1);
        assert_eq!(
            sections[0].lines,
            vec!["Average Prediction: 42.57", "Air Quality: Moderate"]
        );
        assert_eq!(
            sections[0].to_string(),
            "Average Prediction: 42.57\nAir Quality: Moderate\n"
        );
    }

    #[test]
    fn test_average_missing_keys_render_na() {
        let result = PredictionResult::decode(PayloadShape::DateParts, "{}").unwrap();
        assert_eq!(
            result.sections()[0].lines,
            vec!["Average Prediction: N/A", "Air Quality: N/A"]
        );
    }

    #[test]
    fn test_average_falls_back_to_aqi_state() {
        let result = PredictionResult::decode(
            PayloadShape::DateParts,
            r#"{"aqi_state": "Unhealthy", "dominant_pollutant": "PM10", "predicted_pollutant_levels": {"PM10": 2.6}}"#,
        )
        .unwrap();
        assert_eq!(
            result.sections()[0].lines,
            vec![
                "Average Prediction: N/A",
                "Air Quality: Unhealthy",
                "Dominant Pollutant: PM10",
                "PM10: 2.600",
            ]
        );
    }

    #[test]
    fn test_pollutant_levels_follow_form_order() {
        let result = PredictionResult::decode(
            PayloadShape::DateParts,
            r#"{
                "average_prediction": 0.0,
                "air_quality": "Good",
                "predicted_pollutant_levels": {
                    "CO": 0.4, "NO2": 0.02, "O3": 0.03, "PM10": 20.0, "PM2.5": 11.25, "SO2": 0.01
                }
            }"#,
        )
        .unwrap();
        assert_eq!(
            result.sections()[0].lines,
            vec![
                "Average Prediction: 0.00",
                "Air Quality: Good",
                "PM2.5: 11.250",
                "PM10: 20.000",
                "SO2: 0.010",
                "CO: 0.400",
                "O3: 0.030",
                "NO2: 0.020",
            ]
        );
    }

    #[test]
    fn test_per_model_sections() {
        let result = PredictionResult::decode(
            PayloadShape::ModelDate,
            r#"{
                "LSTM": {"date": "2024-01-05", "prediction": {"PM25": 18.2, "PM10": 40.0, "CO": 0.5}},
                "CNN": {"error": "No predictions found for 2024-01-05."}
            }"#,
        )
        .unwrap();
        let sections = result.sections();
        assert_eq!(sections[0].title.as_deref(), Some("CNN"));
        assert_eq!(sections[0].lines, vec!["No predictions found for 2024-01-05."]);
        assert_eq!(sections[1].title.as_deref(), Some("LSTM"));
        assert_eq!(
            sections[1].lines,
            vec![
                "Prediction Date: 2024-01-05",
                "PM2.5: 18.2",
                "PM10: 40",
                "SO2: N/A",
                "CO: 0.5",
                "O3: N/A",
                "NO2: N/A",
            ]
        );
    }

    #[test]
    fn test_series_sections() {
        let result =
            PredictionResult::decode(PayloadShape::Site, r#"{"predictions": [[1.234, 5.0], [2.0, 6.789]]}"#)
                .unwrap();
        let sections = result.sections();
        assert_eq!(sections[0].title.as_deref(), Some("Predictions"));
        assert_eq!(sections[0].lines, vec!["Step 1: 1.23, 5.00", "Step 2: 2.00, 6.79"]);
    }
}

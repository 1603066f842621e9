use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Deep-learning models served by the model-comparison backend.
pub const MODELS: &[&str] = &[
    "CNN",
    "CNN_Attention",
    "RNN",
    "RNN_Attention",
    "GRU",
    "GRU_Attention",
    "LSTM",
    "LSTM_Attention",
    "ResNet",
    "ResNet_Attention",
    "ReXNet",
    "ReXNet_Attention",
];

/// Pollutants the services report on, in display order.
pub const POLLUTANTS: &[&str] = &["PM2.5", "PM10", "SO2", "CO", "O3", "NO2"];

/// Forecasting algorithms accepted by the site forecast backend.
pub const ALGORITHMS: &[&str] = &[
    "cnn",
    "cnn_attention",
    "gru",
    "gru_attention",
    "lstm",
    "lstm_attention",
    "resnet",
    "resnet_attention",
    "rexnet",
    "rexnet_attention",
    "rnn",
    "rnn_attention",
    "sarima",
];

/// The SARIMA model is only trained on one pollutant.
pub const SARIMA: &str = "sarima";
pub const SARIMA_POLLUTANT: &str = "PM2.5";

/// Every field a prediction form can carry.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Year,
    Month,
    Day,
    Model,
    Location,
    Pollutant,
    Algorithm,
}

/// How a field is entered.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FieldKind {
    Number,
    Choice,
    Text,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::Year,
        Field::Month,
        Field::Day,
        Field::Model,
        Field::Location,
        Field::Pollutant,
        Field::Algorithm,
    ];

    /// Name used in request bodies, query strings and the CLI.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Year => "year",
            Field::Month => "month",
            Field::Day => "day",
            Field::Model => "model",
            Field::Location => "location",
            Field::Pollutant => "pollutant",
            Field::Algorithm => "algorithm",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Year => "Year",
            Field::Month => "Month",
            Field::Day => "Day",
            Field::Model => "Model",
            Field::Location => "Location",
            Field::Pollutant => "Pollutant",
            Field::Algorithm => "Algorithm",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Field::Year | Field::Month | Field::Day => FieldKind::Number,
            Field::Model | Field::Pollutant | Field::Algorithm => FieldKind::Choice,
            Field::Location => FieldKind::Text,
        }
    }

    /// Allowed values for choice fields; empty for free-form fields.
    pub fn options(&self) -> &'static [&'static str] {
        match self {
            Field::Model => MODELS,
            Field::Pollutant => POLLUTANTS,
            Field::Algorithm => ALGORITHMS,
            _ => &[],
        }
    }

    /// Fixed bounds for month and day. Year bounds come from the form config.
    pub fn fixed_bounds(&self) -> Option<(i32, i32)> {
        match self {
            Field::Month => Some((1, 12)),
            Field::Day => Some((1, 31)),
            _ => None,
        }
    }

    /// Message shown when a required field is left empty.
    pub fn missing_message(&self) -> String {
        match self.kind() {
            FieldKind::Choice => {
                let article = if self.name().starts_with('a') { "an" } else { "a" };
                format!("Please select {} {}.", article, self.name())
            }
            _ => format!("Please enter a {}.", self.name()),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        Field::ALL
            .iter()
            .find(|f| f.name() == lowered)
            .copied()
            .ok_or_else(|| format!("unknown field '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_round_trip() {
        for field in Field::ALL {
            assert_eq!(field.name().parse::<Field>().unwrap(), field);
        }
        assert_eq!(" Model ".parse::<Field>().unwrap(), Field::Model);
        assert!("aqi".parse::<Field>().is_err());
    }

    #[test]
    fn test_missing_messages() {
        assert_eq!(Field::Model.missing_message(), "Please select a model.");
        assert_eq!(Field::Algorithm.missing_message(), "Please select an algorithm.");
        assert_eq!(Field::Year.missing_message(), "Please enter a year.");
        assert_eq!(Field::Location.missing_message(), "Please enter a location.");
    }

    #[test]
    fn test_sarima_is_an_algorithm_and_its_pollutant_exists() {
        assert!(ALGORITHMS.contains(&SARIMA));
        assert!(POLLUTANTS.contains(&SARIMA_POLLUTANT));
        assert_eq!(Field::Model.options().len(), 12);
        assert!(Field::Year.options().is_empty());
    }
}

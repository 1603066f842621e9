use crate::field::Field;
use aqp_utils::error::DateError;
use thiserror::Error;

/// Fixed message shown for any failed request.
pub const REQUEST_FAILED_MESSAGE: &str = "Error predicting air quality. Please try again later.";

/// Errors raised while validating a form or talking to the prediction service.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PredictError {
    /// A required field was left empty.
    #[error("{}", .0.missing_message())]
    MissingField(Field),

    /// A numeric field did not parse.
    #[error("{} must be a whole number, got '{value}'.", .field.label())]
    InvalidNumber { field: Field, value: String },

    /// A numeric field parsed but lies outside its bounds.
    #[error("{} must be between {min} and {max}.", .field.label())]
    OutOfRange { field: Field, min: i32, max: i32 },

    /// A choice field holds a value that is not one of its options.
    #[error("'{value}' is not a known {field}.")]
    InvalidChoice { field: Field, value: String },

    /// Year/month/day do not name a calendar day.
    #[error("Please enter a valid date ({0}).")]
    InvalidDate(#[from] DateError),

    /// A field name that no form knows about.
    #[error("Unknown form field '{0}'.")]
    UnknownField(String),

    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(String),

    /// The service answered with a non-2xx status.
    #[error("Request failed with status code {0}")]
    Status(u16),

    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),

    /// The form configuration itself is unusable.
    #[error("invalid form configuration: {0}")]
    Config(String),
}

impl PredictError {
    /// Message suitable for the form's error area.
    ///
    /// Request failures collapse to [`REQUEST_FAILED_MESSAGE`] unless
    /// `surface_detail` is set.
    pub fn user_message(&self, surface_detail: bool) -> String {
        match self {
            PredictError::Transport(_) | PredictError::Status(_) | PredictError::Decode(_) => {
                if surface_detail {
                    format!("Error predicting air quality: {}", self)
                } else {
                    REQUEST_FAILED_MESSAGE.to_string()
                }
            }
            other => other.to_string(),
        }
    }
}

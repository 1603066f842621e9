//! Form controller, request payloads and typed responses for the air quality
//! prediction services.
//!
//! Enable the `api` feature for the reqwest-backed [`client::ReqwestTransport`].

#[cfg(feature = "api")]
pub mod client;
pub mod config;
pub mod controller;
pub mod display;
pub mod error;
pub mod field;
pub mod form_state;
pub mod payload;
pub mod response;

pub use config::{FormConfig, PayloadShape};
pub use controller::{FormController, Settlement, SubmitTicket, Transport};
pub use error::PredictError;
pub use field::Field;
pub use response::PredictionResult;

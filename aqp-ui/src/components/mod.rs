//! Reusable Dioxus RSX components for the prediction form.

mod error_display;
mod field_input;
mod form_header;
mod loading_spinner;
mod prediction_form;
mod result_panel;

pub use error_display::ErrorDisplay;
pub use field_input::FieldInput;
pub use form_header::FormHeader;
pub use loading_spinner::LoadingSpinner;
pub use prediction_form::PredictionForm;
pub use result_panel::ResultPanel;

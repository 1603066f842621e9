//! The prediction form controller.
//!
//! Owns the form values, the last result, the error message and the loading
//! flag. A submission is split in two halves so that UI event loops can await
//! the network call outside of any borrow:
//!
//! 1. [`FormController::begin_submit`] validates and hands out a [`SubmitTicket`].
//! 2. [`FormController::complete`] applies the outcome if the ticket is still current.
//!
//! Every submission and every reset advances the generation counter, so a
//! response that arrives after a newer submission (or after a reset) is dropped
//! instead of overwriting newer state.

use crate::config::FormConfig;
use crate::error::PredictError;
use crate::field::Field;
use crate::form_state::FormState;
use crate::payload::PredictionRequest;
use crate::response::PredictionResult;
use log::{debug, info, warn};
use std::future::Future;

/// Something that can deliver a prediction request and return the raw body
/// of a successful (2xx) response.
pub trait Transport {
    fn send(&self, request: &PredictionRequest) -> impl Future<Output = Result<String, PredictError>>;
}

/// Proof that a submission was started, carrying the prepared request.
#[derive(Debug, PartialEq, Clone)]
pub struct SubmitTicket {
    generation: u64,
    request: PredictionRequest,
}

impl SubmitTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn request(&self) -> &PredictionRequest {
        &self.request
    }
}

/// What happened when a ticket was completed.
#[derive(Debug, PartialEq, Clone)]
pub enum Settlement {
    Succeeded,
    Failed(PredictError),
    /// A newer submission or a reset superseded this ticket.
    Stale,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormController {
    config: FormConfig,
    form: FormState,
    result: Option<PredictionResult>,
    error: Option<String>,
    loading: bool,
    generation: u64,
}

impl FormController {
    /// Create a controller with an empty form. The config is validated first.
    pub fn new(config: FormConfig) -> Result<Self, PredictError> {
        let config = config.validate()?;
        let form = FormState::new(&config.field_list());
        Ok(Self {
            config,
            form,
            result: None,
            error: None,
            loading: false,
            generation: 0,
        })
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn value(&self, field: Field) -> &str {
        self.form.get(field)
    }

    pub fn result(&self) -> Option<&PredictionResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Set a field value, applying cross-field rules.
    ///
    /// Returns false when the field is not part of this form.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) -> bool {
        let applied = self.form.set(field, value);
        if !applied {
            warn!("Form '{}' has no '{}' field", self.config.name, field);
        }
        applied
    }

    /// Set a field by its wire name.
    pub fn update_named(&mut self, name: &str, value: impl Into<String>) -> Result<(), PredictError> {
        let field: Field = name
            .parse()
            .map_err(|_| PredictError::UnknownField(name.to_string()))?;
        if self.update_field(field, value) {
            Ok(())
        } else {
            Err(PredictError::UnknownField(name.to_string()))
        }
    }

    /// Validate the form and start a submission.
    ///
    /// On a validation failure the error message is set, nothing else
    /// changes, and no request should be sent.
    pub fn begin_submit(&mut self) -> Result<SubmitTicket, PredictError> {
        let request = match PredictionRequest::compose(&self.config, &self.form) {
            Ok(request) => request,
            Err(e) => {
                debug!("Form '{}' failed validation: {}", self.config.name, e);
                self.error = Some(e.user_message(self.config.surface_error_detail));
                return Err(e);
            }
        };
        if self.loading {
            info!(
                "Superseding in-flight request {} on form '{}'",
                self.generation, self.config.name
            );
        }
        self.generation += 1;
        self.loading = true;
        self.error = None;
        self.result = None;
        debug!("Submitting request {} to {}", self.generation, request.url);
        Ok(SubmitTicket {
            generation: self.generation,
            request,
        })
    }

    /// Apply the outcome of the request started with `generation`.
    pub fn complete(&mut self, generation: u64, outcome: Result<String, PredictError>) -> Settlement {
        if generation != self.generation {
            info!(
                "Dropping response for request {} (current is {})",
                generation, self.generation
            );
            return Settlement::Stale;
        }
        self.loading = false;
        let decoded = outcome.and_then(|body| PredictionResult::decode(self.config.payload, &body));
        match decoded {
            Ok(result) => {
                self.result = Some(result);
                self.error = None;
                Settlement::Succeeded
            }
            Err(e) => {
                warn!("Prediction request {} failed: {}", generation, e);
                self.error = Some(e.user_message(self.config.surface_error_detail));
                Settlement::Failed(e)
            }
        }
    }

    /// Validate, send exactly one request, and apply its outcome.
    pub async fn submit<T: Transport>(&mut self, transport: &T) -> Result<(), PredictError> {
        let ticket = self.begin_submit()?;
        let outcome = transport.send(ticket.request()).await;
        match self.complete(ticket.generation(), outcome) {
            Settlement::Failed(e) => Err(e),
            Settlement::Succeeded | Settlement::Stale => Ok(()),
        }
    }

    /// Empty the form and drop the result and error. Any in-flight request
    /// becomes stale.
    pub fn reset(&mut self) {
        self.form.clear();
        self.result = None;
        self.error = None;
        self.loading = false;
        self.generation += 1;
    }
}

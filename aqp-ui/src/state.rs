//! Application state managed via Dioxus context.
//!
//! `AppState` wraps the form controller in a signal and is provided with
//! `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()`.

use aqp_core::client::ReqwestTransport;
use aqp_core::{Field, FormController, Transport};
use dioxus::prelude::*;

/// Shared state for the prediction form.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Form values, result, error and loading flag
    pub controller: Signal<FormController>,
    /// HTTP transport used for submissions
    pub transport: Signal<ReqwestTransport>,
}

impl AppState {
    pub fn new(controller: FormController) -> Self {
        Self {
            controller: Signal::new(controller),
            transport: Signal::new(ReqwestTransport::new()),
        }
    }

    /// Forward an input change to the controller.
    pub fn update_field(mut self, field: Field, value: String) {
        self.controller.write().update_field(field, value);
    }

    /// Validate and, if the form is complete, send the request in the
    /// background. Only the latest submission's response is applied.
    pub fn submit(mut self) {
        let ticket = match self.controller.write().begin_submit() {
            Ok(ticket) => ticket,
            Err(_) => return,
        };
        let transport = self.transport.read().clone();
        spawn(async move {
            let outcome = transport.send(ticket.request()).await;
            self.controller
                .write()
                .complete(ticket.generation(), outcome);
        });
    }

    pub fn reset(mut self) {
        self.controller.write().reset();
    }
}

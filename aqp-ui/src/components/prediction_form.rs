//! The complete prediction form: inputs, submit, error, result and reset.

use crate::components::{ErrorDisplay, FieldInput, FormHeader, LoadingSpinner, ResultPanel};
use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn PredictionForm() -> Element {
    let state = use_context::<AppState>();
    let controller = state.controller.read();
    let config = controller.config().clone();
    let fields = config.field_list();
    let loading = controller.is_loading();
    let error = controller.error().map(str::to_string);
    let sections = controller.result().map(|r| r.sections());
    drop(controller);

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        state.submit();
    };

    let on_reset = move |_| {
        state.reset();
    };

    rsx! {
        div {
            class: "container",
            style: "max-width: 520px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            FormHeader {
                title: config.title.clone(),
                description: config.description.clone().unwrap_or_default(),
            }

            form {
                class: "form",
                onsubmit: on_submit,
                for field in fields.iter() {
                    FieldInput { key: "{field}", field: *field }
                }
                button {
                    class: "submit-button",
                    r#type: "submit",
                    disabled: loading,
                    style: "margin-top: 8px; padding: 10px 16px; font-size: 15px;",
                    if loading { "Loading..." } else { "Predict" }
                }
            }

            if let Some(message) = error {
                ErrorDisplay { message }
            }

            if loading {
                LoadingSpinner {}
            } else if let Some(sections) = sections {
                ResultPanel { sections }
                if config.show_reset {
                    button {
                        class: "reset-button",
                        style: "margin-top: 8px; padding: 8px 14px;",
                        onclick: on_reset,
                        "Reset"
                    }
                }
            }
        }
    }
}

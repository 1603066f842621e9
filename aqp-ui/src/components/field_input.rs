//! Input widget for one form field.

use crate::state::AppState;
use aqp_core::field::{Field, FieldKind};
use dioxus::prelude::*;

const INPUT_STYLE: &str = "width: 100%; padding: 8px; margin: 4px 0; font-size: 15px; border: 1px solid #ccc; border-radius: 4px;";

#[derive(Props, Clone, PartialEq)]
pub struct FieldInputProps {
    pub field: Field,
}

/// Renders a number input, a select, or a text input depending on the
/// field kind, and forwards every change to the controller.
#[component]
pub fn FieldInput(props: FieldInputProps) -> Element {
    let state = use_context::<AppState>();
    let field = props.field;
    let controller = state.controller.read();
    let value = controller.value(field).to_string();
    let bounds = controller.config().bounds(field);
    drop(controller);
    let name = field.name();
    let label = field.label();

    let on_input = move |evt: Event<FormData>| {
        state.update_field(field, evt.value());
    };

    match field.kind() {
        FieldKind::Number => {
            let (min, max) = bounds
                .map(|(lo, hi)| (lo.to_string(), hi.to_string()))
                .unwrap_or_default();
            rsx! {
                input {
                    class: "input",
                    name: name,
                    r#type: "number",
                    placeholder: label,
                    required: true,
                    min: "{min}",
                    max: "{max}",
                    value: "{value}",
                    style: INPUT_STYLE,
                    oninput: on_input,
                }
            }
        }
        FieldKind::Choice => rsx! {
            select {
                class: "input",
                name: name,
                required: true,
                style: INPUT_STYLE,
                onchange: on_input,
                option {
                    value: "",
                    selected: value.is_empty(),
                    "Select {label}"
                }
                for choice in field.options().iter() {
                    option {
                        value: "{choice}",
                        selected: value == *choice,
                        "{choice}"
                    }
                }
            }
        },
        FieldKind::Text => rsx! {
            input {
                class: "input",
                name: name,
                r#type: "text",
                placeholder: label,
                required: true,
                value: "{value}",
                style: INPUT_STYLE,
                oninput: on_input,
            }
        },
    }
}

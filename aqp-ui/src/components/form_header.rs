//! Title and project description shown beside the form.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct FormHeaderProps {
    pub title: String,
    #[props(default = String::new())]
    pub description: String,
}

#[component]
pub fn FormHeader(props: FormHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 12px;",
            if !props.description.is_empty() {
                div {
                    class: "description",
                    h2 { style: "margin: 0 0 4px 0; font-size: 16px;", "About This Project" }
                    p { style: "margin: 0; font-size: 13px; color: #555;", "{props.description}" }
                }
            }
            h1 {
                style: "margin: 12px 0 0 0; font-size: 22px;",
                "{props.title}"
            }
        }
    }
}

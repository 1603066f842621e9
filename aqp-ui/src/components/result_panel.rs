//! Rendered prediction result.

use aqp_core::display::ResultSection;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ResultPanelProps {
    pub sections: Vec<ResultSection>,
}

/// One heading per section (per model or per series), one paragraph per line.
#[component]
pub fn ResultPanel(props: ResultPanelProps) -> Element {
    rsx! {
        div {
            class: "result",
            style: "margin-top: 16px; padding: 12px 16px; background: #F1F8E9; border-radius: 4px;",
            h2 { style: "margin: 0 0 8px 0; font-size: 18px;", "Prediction Result" }
            for section in props.sections.iter() {
                div {
                    if let Some(title) = section.title.as_ref() {
                        h3 { style: "margin: 8px 0 4px 0; font-size: 15px;", "{title}" }
                    }
                    for line in section.lines.iter() {
                        p { style: "margin: 2px 0;", "{line}" }
                    }
                }
            }
        }
    }
}

//! Air quality prediction form.
//!
//! One configurable form replaces the separate per-service pages. The variant
//! comes from the page URL:
//! - `?variant=daily` (default): year/month/day, average prediction
//! - `?variant=model`: year/month/day plus model, per-model pollutant levels
//! - `?variant=site`: location/pollutant/algorithm, forecast series

use aqp_core::{FormConfig, FormController};
use aqp_ui::components::{ErrorDisplay, PredictionForm};
use aqp_ui::page;
use aqp_ui::state::AppState;
use dioxus::prelude::*;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("aqp-root"))
        .launch(App);
}

/// Build the controller for the current page, falling back to the daily form
/// if the selected preset is somehow unusable.
fn controller_for_page() -> (FormController, Option<String>) {
    let config = page::config_from_location();
    log::info!("Mounting '{}' form posting to {}", config.name, config.endpoint);
    match FormController::new(config) {
        Ok(controller) => (controller, None),
        Err(e) => {
            log::error!("Failed to build form: {}", e);
            let fallback = FormController::new(FormConfig::daily())
                .expect("daily preset is always valid");
            (fallback, Some(e.to_string()))
        }
    }
}

#[component]
fn App() -> Element {
    let setup_error = use_hook(|| {
        let (controller, error) = controller_for_page();
        provide_context(AppState::new(controller));
        error
    });

    rsx! {
        div {
            class: "App",
            if let Some(message) = setup_error {
                ErrorDisplay { message }
            }
            PredictionForm {}
        }
    }
}

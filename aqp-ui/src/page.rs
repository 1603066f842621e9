//! Choosing the form variant from the page URL (`?variant=model`).

use aqp_core::config::FormConfig;
use log::warn;

/// Extract the `variant` parameter from a location search string such as
/// `?variant=site&debug=1`.
pub fn variant_from_query(search: &str) -> Option<&str> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "variant")
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
}

/// Resolve a preset from a search string, defaulting to the daily form.
pub fn config_for_query(search: &str) -> FormConfig {
    match variant_from_query(search) {
        Some(name) => FormConfig::preset(name).unwrap_or_else(|| {
            warn!("Unknown form variant '{}', using the daily form", name);
            FormConfig::daily()
        }),
        None => FormConfig::daily(),
    }
}

/// Resolve the preset for the current browser location.
pub fn config_from_location() -> FormConfig {
    let search = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    config_for_query(&search)
}

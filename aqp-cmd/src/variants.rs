//! `variants` subcommand: describe the built-in forms.

use aqp_core::config::{FormConfig, PRESET_NAMES};

/// One line per preset: name, payload shape, fields and endpoint.
pub fn list_variants() -> String {
    PRESET_NAMES
        .iter()
        .filter_map(|name| FormConfig::preset(name))
        .map(|config| {
            let fields = config
                .field_list()
                .iter()
                .map(|f| f.name())
                .collect::<Vec<_>>()
                .join(",");
            format!(
                "{:<6} {:<11} {:<28} {}\n",
                config.name,
                format!("{:?}", config.payload),
                fields,
                config.endpoint
            )
        })
        .collect()
}

//! `predict` subcommand: fill the form, submit once, render the result.

use anyhow::{anyhow, bail, Context};
use aqp_core::client::ReqwestTransport;
use aqp_core::{Field, FormConfig, FormController, PredictionResult};
use aqp_utils::dates::{date_parts, parse_date};
use log::{info, warn};
use std::time::Duration;

/// Everything the `predict` subcommand was given.
#[derive(Debug, Clone, Default)]
pub struct PredictOptions {
    pub variant: String,
    pub config: Option<String>,
    pub endpoint: Option<String>,
    pub date: Option<String>,
    pub year: Option<String>,
    pub month: Option<String>,
    pub day: Option<String>,
    pub model: Option<String>,
    pub location: Option<String>,
    pub pollutant: Option<String>,
    pub algorithm: Option<String>,
    pub json: bool,
    pub timeout_secs: Option<u64>,
}

impl PredictOptions {
    /// Field values in form order. Pollutant comes before algorithm so that
    /// picking sarima still pins the pollutant.
    fn field_values(&self) -> anyhow::Result<Vec<(Field, String)>> {
        let mut values = Vec::new();
        if let Some(date) = &self.date {
            let parsed = parse_date(date).with_context(|| format!("invalid --date '{}'", date))?;
            let (year, month, day) = date_parts(&parsed);
            values.push((Field::Year, year.to_string()));
            values.push((Field::Month, month.to_string()));
            values.push((Field::Day, day.to_string()));
        }
        let explicit = [
            (Field::Year, &self.year),
            (Field::Month, &self.month),
            (Field::Day, &self.day),
            (Field::Model, &self.model),
            (Field::Location, &self.location),
            (Field::Pollutant, &self.pollutant),
            (Field::Algorithm, &self.algorithm),
        ];
        for (field, value) in explicit {
            if let Some(value) = value {
                values.push((field, value.clone()));
            }
        }
        Ok(values)
    }
}

/// Resolve the form configuration from a JSON file or a preset name.
pub async fn load_config(options: &PredictOptions) -> anyhow::Result<FormConfig> {
    let config = match &options.config {
        Some(path) => {
            let json = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("failed to read form config {}", path))?;
            FormConfig::from_json(&json)?
        }
        None => FormConfig::preset(&options.variant).ok_or_else(|| {
            anyhow!(
                "unknown variant '{}' (expected one of: {})",
                options.variant,
                aqp_core::config::PRESET_NAMES.join(", ")
            )
        })?,
    };
    Ok(match &options.endpoint {
        Some(endpoint) => config.with_endpoint(endpoint.clone()),
        None => config,
    })
}

/// Build a controller for `config` with the given values filled in.
pub fn fill_form(config: FormConfig, values: &[(Field, String)]) -> anyhow::Result<FormController> {
    let mut controller = FormController::new(config)?;
    for (field, value) in values {
        if !controller.update_field(*field, value.clone()) {
            warn!(
                "Ignoring --{}: the '{}' form has no such field",
                field,
                controller.config().name
            );
        }
    }
    for (field, value) in values {
        let current = controller.value(*field);
        if controller.config().has_field(*field) && current != value.as_str() {
            info!("--{} '{}' adjusted to '{}'", field, value, current);
        }
    }
    Ok(controller)
}

fn transport(timeout_secs: Option<u64>) -> anyhow::Result<ReqwestTransport> {
    Ok(match timeout_secs {
        Some(secs) => ReqwestTransport::with_client(
            reqwest::Client::builder()
                .timeout(Duration::from_secs(secs))
                .build()?,
        ),
        None => ReqwestTransport::new(),
    })
}

/// Render a result as text sections or as JSON.
pub fn render(result: &PredictionResult, json: bool) -> anyhow::Result<String> {
    if json {
        return Ok(format!("{}\n", serde_json::to_string_pretty(result)?));
    }
    let mut output = String::from("Prediction Result\n");
    for section in result.sections() {
        output.push_str(&section.to_string());
    }
    Ok(output)
}

/// Run the `predict` subcommand and return what should be printed.
pub async fn run_predict(options: &PredictOptions) -> anyhow::Result<String> {
    let config = load_config(options).await?;
    info!("Using '{}' form posting to {}", config.name, config.endpoint);
    let mut controller = fill_form(config, &options.field_values()?)?;
    let transport = transport(options.timeout_secs)?;

    if let Err(e) = controller.submit(&transport).await {
        let message = controller
            .error()
            .map(str::to_string)
            .unwrap_or_else(|| e.to_string());
        bail!("{}", message);
    }

    match controller.result() {
        Some(result) => render(result, options.json),
        None => bail!("the prediction service returned no result"),
    }
}

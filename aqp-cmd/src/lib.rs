//! Command implementations for the air quality prediction CLI.
//!
//! Provides subcommands for submitting a prediction form to one of the
//! prediction services and for listing the built-in form variants.

use clap::Subcommand;

pub mod predict;
pub mod variants;

#[derive(Subcommand)]
pub enum Command {
    /// Fill in a prediction form, submit it once and print the result
    Predict {
        /// Built-in form variant (daily, model, site)
        #[arg(short = 'v', long, default_value = "daily")]
        variant: String,

        /// JSON form configuration to use instead of a built-in variant
        #[arg(short = 'c', long)]
        config: Option<String>,

        /// Override the endpoint URL of the chosen form
        #[arg(short = 'e', long)]
        endpoint: Option<String>,

        /// Target date as YYYY-MM-DD (fills year, month and day)
        #[arg(short = 'd', long)]
        date: Option<String>,

        #[arg(long)]
        year: Option<String>,

        #[arg(long)]
        month: Option<String>,

        #[arg(long)]
        day: Option<String>,

        /// Model name for the model variant (e.g. GRU, LSTM_Attention)
        #[arg(long)]
        model: Option<String>,

        #[arg(long)]
        location: Option<String>,

        /// Pollutant for the site variant (PM2.5, PM10, SO2, CO, O3, NO2)
        #[arg(long)]
        pollutant: Option<String>,

        /// Forecasting algorithm for the site variant (sarima forces PM2.5)
        #[arg(long)]
        algorithm: Option<String>,

        /// Print the decoded response as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Give up on the request after this many seconds
        #[arg(long)]
        timeout_secs: Option<u64>,
    },

    /// List the built-in form variants
    Variants,
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Predict {
            variant,
            config,
            endpoint,
            date,
            year,
            month,
            day,
            model,
            location,
            pollutant,
            algorithm,
            json,
            timeout_secs,
        } => {
            let options = predict::PredictOptions {
                variant,
                config,
                endpoint,
                date,
                year,
                month,
                day,
                model,
                location,
                pollutant,
                algorithm,
                json,
                timeout_secs,
            };
            let output = predict::run_predict(&options).await?;
            print!("{}", output);
            Ok(())
        }
        Command::Variants => {
            print!("{}", variants::list_variants());
            Ok(())
        }
    }
}

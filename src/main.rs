//! Snowcast - snowiness predictor with an HTTP API and a terminal dashboard.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use snowcast::config::{ModelConfig, ServeConfig};
use snowcast::model::{LoadedModel, load_model};
use snowcast::prediction::{Predictor, parse_reading};
use snowcast::ui::cli::dashboard::Dashboard;
use snowcast::ui::cli::drivers::InquireDriver;
use snowcast::web::{self, AppState, PredictResponse};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "snowcast")]
#[command(about = "Predicts snowiness from temperature and humidity")]
struct Cli {
    #[command(flatten)]
    model: ModelConfig,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the JSON API and the web dashboard
    Serve(ServeConfig),
    /// Interactive terminal dashboard
    Dashboard,
    /// Print a single prediction as JSON
    Predict {
        /// Temperature in °C
        #[arg(allow_negative_numbers = true)]
        temperature: String,
        /// Relative humidity in %
        #[arg(allow_negative_numbers = true)]
        humidity: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    snowcast::logging::init("info")?;
    let cli = Cli::parse();
    let model = cli.model;

    match cli.command {
        Command::Serve(serve) => {
            let loaded = blocking(move || load_model(&model).context("failed to train model")).await?;
            info!(classifier = loaded.description.classifier, "model ready");
            web::serve(&serve, AppState::from(loaded)).await
        }
        Command::Dashboard => {
            blocking(move || {
                let predictor = predictor(&model)?;
                let stdout = std::io::stdout();
                Dashboard::new(&InquireDriver, &predictor, stdout.lock()).run()?;
                Ok(())
            })
            .await
        }
        Command::Predict {
            temperature,
            humidity,
        } => {
            let temperature = parse_reading("temperature", &temperature)?;
            let humidity = parse_reading("humidity", &humidity)?;
            let body = blocking(move || {
                let prediction = predictor(&model)?.predict(temperature, humidity)?;
                Ok(serde_json::to_string_pretty(&PredictResponse::from(prediction))?)
            })
            .await?;
            println!("{body}");
            Ok(())
        }
    }
}

/// Runs training, prompts and animation sleeps on the blocking pool.
async fn blocking<T, F>(work: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .context("blocking task panicked")?
}

fn predictor(config: &ModelConfig) -> Result<Predictor> {
    let LoadedModel { classifier, .. } = load_model(config).context("failed to train model")?;
    Ok(Predictor::new(classifier))
}

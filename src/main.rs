use clap::{Parser, ValueEnum};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use valuer_core::config::Settings;
use valuer_core::{HouseForm, ModelChoice, PredictionSession, PredictorClient};

/// Submit one housing price prediction to the model-serving API
#[derive(Debug, Parser)]
#[command(name = "valuer-core", version, about)]
struct Cli {
    /// Prediction model to use
    #[arg(long, value_enum, default_value = "lightgbm")]
    model: ModelArg,

    /// Override the configured prediction service base URL
    #[arg(long)]
    base_url: Option<String>,

    #[arg(long, default_value = "-122.23")]
    longitude: String,

    #[arg(long, default_value = "37.88")]
    latitude: String,

    #[arg(long, default_value = "41")]
    housing_median_age: String,

    #[arg(long, default_value = "880")]
    total_rooms: String,

    #[arg(long, default_value = "129")]
    total_bedrooms: String,

    #[arg(long, default_value = "322")]
    population: String,

    #[arg(long, default_value = "126")]
    households: String,

    #[arg(long, default_value = "8.3252")]
    median_income: String,

    /// Ocean proximity category: NEAR BAY, <1H OCEAN, INLAND, NEAR OCEAN or ISLAND
    #[arg(long, default_value = "NEAR BAY")]
    ocean_proximity: String,

    #[arg(long, default_value = "0.146")]
    bedroom_ratio: String,

    #[arg(long, default_value = "6.984")]
    household_rooms: String,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModelArg {
    Lightgbm,
    Xgboost,
    Ensemble,
}

impl From<ModelArg> for ModelChoice {
    fn from(arg: ModelArg) -> Self {
        match arg {
            ModelArg::Lightgbm => ModelChoice::Lightgbm,
            ModelArg::Xgboost => ModelChoice::Xgboost,
            ModelArg::Ensemble => ModelChoice::Ensemble,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file if present
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    // Initialize logging
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
        )
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    let base_url = cli.base_url.unwrap_or(settings.api.base_url);
    info!("Using prediction service at {}", base_url);

    let form = HouseForm {
        longitude: cli.longitude,
        latitude: cli.latitude,
        housing_median_age: cli.housing_median_age,
        total_rooms: cli.total_rooms,
        total_bedrooms: cli.total_bedrooms,
        population: cli.population,
        households: cli.households,
        median_income: cli.median_income,
        ocean_proximity: cli.ocean_proximity,
        bedroom_ratio: cli.bedroom_ratio,
        household_rooms: cli.household_rooms,
    };

    let session = PredictionSession::with_form(PredictorClient::new(base_url), form);
    let model: ModelChoice = cli.model.into();

    info!("Requesting {} prediction", model.label());

    match session.predict(model).await {
        Ok(outcome) => {
            println!("{}", outcome);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Prediction failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

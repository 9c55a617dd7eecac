use crate::calendar;
use crate::config::Config;
use crate::error::Error;
use std::fs;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Initialize logging with environment-based configuration
pub fn init_logging() -> miette::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| Error::Config(format!("Failed to set up logging: {}", e)))?;

    Ok(())
}

/// Load and validate the application config
pub fn load_config() -> miette::Result<Config> {
    match Config::load() {
        Ok(config) => Ok(config),
        Err(e) => {
            error!("Failed to load configuration: {:?}", e);
            Err(e.into())
        }
    }
}

/// Run the full read, partition, write pipeline.
///
/// The output file is written only after the transformation has fully
/// succeeded, so a failing run never leaves a partial calendar behind.
pub fn run(config: &Config) -> miette::Result<()> {
    info!("Reading calendar from {}", config.input_path);
    let input = fs::read(&config.input_path).map_err(Error::from)?;

    let output = calendar::build_week_calendar(&input, &config.event_color)?;

    fs::write(&config.output_path, output).map_err(Error::from)?;
    info!("ICS file created: {}", config.output_path);

    Ok(())
}

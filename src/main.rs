use tracing::info;
use weekgrid::startup;

fn main() -> miette::Result<()> {
    // Initialize logging
    startup::init_logging()?;

    info!("Starting weekgrid");

    // Load configuration
    let config = startup::load_config()?;

    // Run the pipeline
    startup::run(&config)
}

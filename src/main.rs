mod startup;

use tracing::info;

#[tokio::main]
async fn main() -> miette::Result<()> {
    // Initialize logging
    startup::init_logging()?;

    info!("Starting employee hours report");

    // Load configuration
    let config = startup::load_config()?;

    // Fetch, aggregate and write the reports
    startup::run_reports(&config).await
}

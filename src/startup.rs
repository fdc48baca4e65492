use employee_hours::components::ReportPipeline;
use employee_hours::config::Config;
use employee_hours::error::Error;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Initialize logging with environment-based configuration
pub fn init_logging() -> miette::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,reqwest=warn,hyper=warn")),
        )
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| Error::Config(format!("Failed to set up logging: {}", e)))?;

    Ok(())
}

/// Load the application config
pub fn load_config() -> miette::Result<Config> {
    match Config::load() {
        Ok(config) => {
            info!("Writing reports to {}", config.output_dir.display());
            Ok(config)
        }
        Err(e) => {
            error!("Failed to load configuration: {:?}", e);
            Err(e.into())
        }
    }
}

/// Run the report pipeline once
pub async fn run_reports(config: &Config) -> miette::Result<()> {
    let pipeline = ReportPipeline::from_config(config)?;

    match pipeline.run().await {
        Ok(paths) => {
            info!(
                "Reports ready: {} and {}",
                paths.html.display(),
                paths.png.display()
            );
            Ok(())
        }
        Err(e) => {
            error!("Report generation failed: {}", e);
            Err(e.into())
        }
    }
}

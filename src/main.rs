use anyhow::Context;
use clap::Parser;

use awardreel::cli::Cli;
use awardreel::logging::init_tracing;
use awardreel::ui::runtime;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    let log_path = config.logging.log_path();
    init_tracing(&config.logging.filter, &log_path)?;
    tracing::info!(
        slides = config.slides.len(),
        log = %log_path.display(),
        "Starting awardreel"
    );

    runtime::run(config.slides, config.carousel)
        .await
        .context("terminal host failed")?;

    tracing::info!("Exited cleanly");
    Ok(())
}

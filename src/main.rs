use anyhow::Context;
use clap::Parser;
use splashmark::{init_logging, BatchProcessor, Cli, Config, HttpTransport};
use std::io::IsTerminal;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::from_env().context("Invalid configuration")?;

    init_logging(config.log_file.as_deref())?;
    log::debug!("Image orientation: {}", config.orientation().as_str());

    let transport = HttpTransport::new(&config.access_key)?;
    let batch = BatchProcessor::new(&transport, &config)
        .with_context(|| format!("Failed to set up with logo {}", config.logo_path.display()))?
        .with_progress(std::io::stderr().is_terminal());

    let report = batch
        .run(cli.query.as_deref(), cli.total, cli.bg_blur)
        .context("Failed to fetch image list from Unsplash")?;

    log::info!(
        "Done: {} saved, {} failed",
        report.processed_count(),
        report.failures.len()
    );

    Ok(())
}

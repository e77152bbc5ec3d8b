use anyhow::{Context, Result};
use clap::Parser;

use flyout::cli::{CliArgs, PlacementReport};
use flyout::config::FlyoutConfig;

fn main() -> Result<()> {
    flyout::tracing::init();

    let args = CliArgs::parse();
    let config = FlyoutConfig::load();

    let job = args
        .into_job(&config)
        .map_err(anyhow::Error::msg)
        .context("Invalid placement arguments")?;

    let report = PlacementReport::compute(&job.request, job.list_candidates);
    let output = report
        .render(job.format)
        .map_err(anyhow::Error::msg)
        .context("Failed to serialize placement")?;

    println!("{}", output.trim_end());
    Ok(())
}

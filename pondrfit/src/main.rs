use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::analysis::chart_spec::build_chart_spec;
use crate::cli::Args;
use crate::data_handling::pondrfit::PondrFitScores;
use crate::plotting::pdf_export::{write_pdf, OUTPUT_FILE};
use crate::plotting::render_svg;

mod analysis;
mod cli;
mod data_handling;
mod helper_functions;
mod models;
mod plotting;

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

/// Load the scores, lay out the chart and write it to `output`.
fn run(args: &Args, output: &Path) -> Result<()> {
    let config = args.plot_config();
    debug!("{:?}", config);

    let table = PondrFitScores {
        path: args.file.clone(),
    }
    .load_table()
    .with_context(|| format!("loading scores from {}", args.file.display()))?;

    let spec = build_chart_spec(&table, &config);
    let svg = render_svg(&spec).context("rendering the chart")?;
    write_pdf(&svg, output)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    info!("Plotting PONDR-FIT scores from {}", args.file.display());
    run(&args, Path::new(OUTPUT_FILE))?;
    info!("Done.");
    Ok(())
}

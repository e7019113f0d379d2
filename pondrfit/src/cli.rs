use std::path::PathBuf;

use clap::Parser;
use palette::Srgb;

use crate::analysis::label_placement::DEFAULT_CENTERED_LABEL_START;
use crate::helper_functions::parse_color;
use crate::models::PlotConfig;

#[derive(Parser, Debug)]
#[command(name = "pondrfit")]
#[command(about = "Plot a PONDR-FIT disorder prediction and highlight the disordered regions.", long_about = None)]
#[command(override_usage = "pondrfit --file FILE [options]")]
pub struct Args {
    /// The PONDR-FIT data file to import and plot.
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    pub file: PathBuf,

    /// Title of the plot [default: the file name without extension].
    #[arg(short = 't', long = "title", value_name = "TITLE")]
    pub title: Option<String>,

    /// Colour of the probability curve: a name, #rrggbb, a matplotlib letter, C0-C9 or a grey level.
    #[arg(short = 'c', long = "color", value_name = "COLOR", value_parser = parse_color, default_value = "C0")]
    pub color: Srgb<u8>,

    /// For the predicted disordered regions, show the range numbers.
    #[arg(short = 's', long = "show-range-numbers")]
    pub show_range_numbers: bool,

    /// Centre the range label of the region starting at this position (repeatable).
    #[arg(long = "center-label-at", value_name = "POSITION", default_values_t = [DEFAULT_CENTERED_LABEL_START])]
    pub center_label_at: Vec<f64>,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence.
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn plot_config(&self) -> PlotConfig {
        let title = self.title.clone().unwrap_or_else(|| {
            self.file
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default()
        });
        PlotConfig {
            title,
            color: self.color,
            show_range_numbers: self.show_range_numbers,
            centered_label_starts: self.center_label_at.clone(),
        }
    }
}

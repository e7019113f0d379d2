use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use svg2pdf::usvg::{self, fontdb};
use svg2pdf::{ConversionOptions, PageOptions};
use tracing::{debug, info, warn};

/// Name of the chart written to the working directory.
pub const OUTPUT_FILE: &str = "pondrfit.pdf";

/// Families tried, in order, for the generic `sans-serif` used by the chart.
const PREFERRED_SANS_SERIF: [&str; 5] = [
    "Helvetica",
    "Arial",
    "Liberation Sans",
    "DejaVu Sans",
    "Noto Sans",
];

fn has_family(db: &fontdb::Database, family: &str) -> bool {
    db.faces()
        .any(|face| face.families.iter().any(|(name, _)| name == family))
}

fn svg_options() -> usvg::Options<'static> {
    let mut options = usvg::Options::default();
    let db = options.fontdb_mut();
    db.load_system_fonts();
    let installed = PREFERRED_SANS_SERIF
        .iter()
        .copied()
        .find(|family| has_family(db, family));
    match installed {
        Some(family) => {
            debug!("using {} for sans-serif text", family);
            db.set_sans_serif_family(family);
        }
        None => warn!("none of {:?} is installed; chart text may be missing", PREFERRED_SANS_SERIF),
    }
    options
}

/// Convert an SVG document to a single-page PDF.
pub fn svg_to_pdf(svg: &str) -> Result<Vec<u8>> {
    let tree = usvg::Tree::from_str(svg, &svg_options()).context("parsing the rendered SVG")?;
    svg2pdf::to_pdf(&tree, ConversionOptions::default(), PageOptions::default())
        .map_err(|e| anyhow!("converting the chart to PDF: {:?}", e))
}

pub fn write_pdf(svg: &str, path: &Path) -> Result<()> {
    let pdf = svg_to_pdf(svg)?;
    fs::write(path, pdf).with_context(|| format!("writing {}", path.display()))?;
    info!("Chart saved to {}", path.display());
    Ok(())
}

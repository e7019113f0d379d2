pub mod line_renderer;
pub mod pdf_export;
pub mod region_highlighter;

use anyhow::{Context, Result};
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::analysis::chart_spec::ChartSpec;

/// Figure size in pixels: 8 x 6 inches at 100 dpi.
pub const FIGURE_SIZE: (u32, u32) = (800, 600);

// Room around the plotting area for the title, offset spines and axis text.
const MARGIN_TOP: u32 = 50;
const MARGIN_BOTTOM: u32 = 90;
const MARGIN_LEFT: u32 = 120;
const MARGIN_RIGHT: u32 = 40;

pub type Root<'b> = DrawingArea<SVGBackend<'b>, Shift>;
pub type Chart<'a, 'b> = ChartContext<'a, SVGBackend<'b>, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

pub fn rgb(color: palette::Srgb<u8>) -> RGBColor {
    RGBColor(color.red, color.green, color.blue)
}

/// Draw the whole chart described by `spec` and return it as an SVG document.
pub fn render_svg(spec: &ChartSpec) -> Result<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, FIGURE_SIZE).into_drawing_area();
        root.fill(&WHITE).context("clearing the figure")?;

        let plot_area = root.margin(MARGIN_TOP, MARGIN_BOTTOM, MARGIN_LEFT, MARGIN_RIGHT);
        let (x_lo, x_hi) = spec.x_range;
        let (y_lo, y_hi) = spec.y_range;
        let mut chart = ChartBuilder::on(&plot_area)
            .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)
            .context("setting up the chart axes")?;

        line_renderer::plot_lines(&root, &mut chart, spec)?;
        region_highlighter::highlight_disordered(&root, &mut chart, spec)?;

        root.present().context("finishing the SVG document")?;
    }
    Ok(svg)
}

use anyhow::{Context, Result};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use tracing::{debug, info};

use crate::analysis::chart_spec::ChartSpec;
use crate::analysis::label_placement::{Anchor, RegionLabel};
use crate::plotting::{Chart, Root};

const BAND_GREY: RGBColor = RGBColor(128, 128, 128);
const BAND_OPACITY: f64 = 0.25;
const LABEL_FONT: (&str, u32) = ("sans-serif", 14);
const LABEL_PADDING: i32 = 2;

/// Shade every disordered region, then write its range over it if labels were placed.
pub fn highlight_disordered(root: &Root<'_>, chart: &mut Chart<'_, '_>, spec: &ChartSpec) -> Result<()> {
    let (y_lo, y_hi) = spec.y_range;
    let band_style = BAND_GREY.mix(BAND_OPACITY);

    for (start, stop) in spec.visible_bands() {
        if start == stop {
            // a single residue has no width; keep it visible as a hairline
            chart
                .draw_series(std::iter::once(PathElement::new(
                    vec![(start, y_lo), (start, y_hi)],
                    band_style.stroke_width(1),
                )))
                .context("drawing a single-residue band")?;
        } else {
            chart
                .draw_series(std::iter::once(Rectangle::new(
                    [(start, y_lo), (stop, y_hi)],
                    band_style.filled(),
                )))
                .context("drawing a disordered band")?;
        }
    }
    info!("Highlighted {} disordered regions", spec.regions.len());

    for label in &spec.labels {
        draw_label(root, chart, label).with_context(|| format!("drawing label {}", label.text))?;
    }
    Ok(())
}

/// Top-aligned black text on a white box, anchored at the label's data coordinates.
fn draw_label(root: &Root<'_>, chart: &Chart<'_, '_>, label: &RegionLabel) -> Result<()> {
    let h_pos = match label.anchor {
        Anchor::Left => HPos::Left,
        Anchor::Center => HPos::Center,
        Anchor::Right => HPos::Right,
    };
    let style = TextStyle::from(LABEL_FONT.into_font())
        .color(&BLACK)
        .pos(Pos::new(h_pos, VPos::Top));

    let (x, y) = chart.backend_coord(&(label.x, label.y()));
    let (w, h) = root.estimate_text_size(&label.text, &style)?;
    let (w, h) = (w as i32, h as i32);
    let left = match label.anchor {
        Anchor::Left => x,
        Anchor::Center => x - w / 2,
        Anchor::Right => x - w,
    };
    debug!("label {} at ({}, {}) anchored {:?}", label.text, x, y, label.anchor);

    root.draw(&Rectangle::new(
        [
            (left - LABEL_PADDING, y - LABEL_PADDING),
            (left + w + LABEL_PADDING, y + h + LABEL_PADDING),
        ],
        WHITE.filled(),
    ))?;
    root.draw_text(&label.text, &style, (x, y))?;
    Ok(())
}

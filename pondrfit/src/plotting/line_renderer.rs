use anyhow::{Context, Result};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::FontTransform;
use tracing::debug;

use crate::analysis::chart_spec::{ChartSpec, BOTTOM_SPINE_OFFSET, LEFT_SPINE_OFFSET, X_LABEL, Y_LABEL};
use crate::plotting::{rgb, Chart, Root};

const TICK_LENGTH: i32 = 5;
const TITLE_FONT: (&str, u32) = ("sans-serif", 17);
const AXIS_FONT: (&str, u32) = ("sans-serif", 15);
const TICK_FONT: (&str, u32) = ("sans-serif", 13);

/// Draw the probability curve, the 0.5 reference line and Tufte-style axes.
///
/// Only the bottom and left spines are drawn, each pushed outward from the
/// plotting area; top and right stay open.
pub fn plot_lines(root: &Root<'_>, chart: &mut Chart<'_, '_>, spec: &ChartSpec) -> Result<()> {
    debug!(
        "plotting {} points over x {:?} with {} ticks",
        spec.curve.len(),
        spec.x_range,
        spec.x_ticks.len()
    );

    chart
        .draw_series(LineSeries::new(
            spec.curve.iter().copied(),
            rgb(spec.curve_color).stroke_width(1),
        ))
        .context("drawing the probability curve")?;

    chart
        .draw_series(LineSeries::new(
            spec.curve.iter().map(|&(x, _)| (x, spec.threshold)),
            BLACK.stroke_width(1),
        ))
        .context("drawing the threshold line")?;

    draw_spines(root, chart, spec).context("drawing the axes")?;
    Ok(())
}

fn draw_spines(root: &Root<'_>, chart: &Chart<'_, '_>, spec: &ChartSpec) -> Result<()> {
    let (x_lo, x_hi) = spec.x_range;
    let (y_lo, y_hi) = spec.y_range;
    let (left, bottom) = chart.backend_coord(&(x_lo, y_lo));
    let (right, top) = chart.backend_coord(&(x_hi, y_hi));

    let tick_style = TextStyle::from(TICK_FONT.into_font()).color(&BLACK);

    // ❶ bottom spine with position ticks
    let spine_y = bottom + BOTTOM_SPINE_OFFSET;
    root.draw(&PathElement::new(vec![(left, spine_y), (right, spine_y)], BLACK.stroke_width(1)))?;
    let below = tick_style.pos(Pos::new(HPos::Center, VPos::Top));
    for tick in spec.visible_x_ticks() {
        let (x, _) = chart.backend_coord(&(tick as f64, y_lo));
        root.draw(&PathElement::new(
            vec![(x, spine_y), (x, spine_y + TICK_LENGTH)],
            BLACK.stroke_width(1),
        ))?;
        root.draw_text(&tick.to_string(), &below, (x, spine_y + TICK_LENGTH + 3))?;
    }

    // ❷ left spine with probability ticks
    let spine_x = left - LEFT_SPINE_OFFSET;
    root.draw(&PathElement::new(vec![(spine_x, top), (spine_x, bottom)], BLACK.stroke_width(1)))?;
    let beside = tick_style.pos(Pos::new(HPos::Right, VPos::Center));
    for &tick in &spec.y_ticks {
        let (_, y) = chart.backend_coord(&(x_lo, tick));
        root.draw(&PathElement::new(
            vec![(spine_x - TICK_LENGTH, y), (spine_x, y)],
            BLACK.stroke_width(1),
        ))?;
        root.draw_text(&format!("{:.1}", tick), &beside, (spine_x - TICK_LENGTH - 3, y))?;
    }

    // ❸ axis descriptions and title
    let centre_x = (left + right) / 2;
    let x_desc = TextStyle::from(AXIS_FONT.into_font())
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Top));
    root.draw_text(X_LABEL, &x_desc, (centre_x, spine_y + TICK_LENGTH + 25))?;

    let y_desc = TextStyle::from(AXIS_FONT.into_font().transform(FontTransform::Rotate270))
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Center));
    root.draw_text(Y_LABEL, &y_desc, (spine_x - TICK_LENGTH - 50, (top + bottom) / 2))?;

    let title = TextStyle::from(TITLE_FONT.into_font())
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Bottom));
    root.draw_text(&spec.title, &title, (centre_x, top - 15))?;

    Ok(())
}

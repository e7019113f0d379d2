use palette::Srgb;

use crate::analysis::axis_ticks::{x_range, x_ticks, y_ticks};
use crate::analysis::disordered_regions::{find_disordered_regions, DISORDER_THRESHOLD};
use crate::analysis::label_placement::{place_labels, RegionLabel};
use crate::models::{DisorderedRegion, PlotConfig, ScoreTable};

pub const X_LABEL: &str = "position along protein";
pub const Y_LABEL: &str = "Probability of disorder according to PONDR-FIT";

/// Outward offset of the bottom spine, in pixels.
pub const BOTTOM_SPINE_OFFSET: i32 = 20;
/// Outward offset of the left spine, in pixels.
pub const LEFT_SPINE_OFFSET: i32 = 30;

/// Everything needed to draw the chart, computed up front.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub title: String,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
    pub x_ticks: Vec<usize>,
    pub y_ticks: Vec<f64>,
    pub curve: Vec<(f64, f64)>,
    pub curve_color: Srgb<u8>,
    /// Height of the horizontal reference line.
    pub threshold: f64,
    pub regions: Vec<DisorderedRegion>,
    /// Empty unless range numbers were requested.
    pub labels: Vec<RegionLabel>,
}

pub fn chart_title(title: &str) -> String {
    format!("{} disorder prediction via PONDR-FIT", title)
}

pub fn build_chart_spec(table: &ScoreTable, config: &PlotConfig) -> ChartSpec {
    let regions = find_disordered_regions(table);
    let labels = if config.show_range_numbers {
        place_labels(&regions, table.len(), &config.centered_label_starts)
    } else {
        Vec::new()
    };

    ChartSpec {
        title: chart_title(&config.title),
        x_range: x_range(table),
        y_range: (0.0, 1.0),
        x_ticks: x_ticks(table.len()),
        y_ticks: y_ticks(),
        curve: table.points().collect(),
        curve_color: config.color,
        threshold: DISORDER_THRESHOLD,
        regions,
        labels,
    }
}

impl ChartSpec {
    /// Band extents clipped to the visible x range; bands entirely outside are dropped.
    pub fn visible_bands(&self) -> Vec<(f64, f64)> {
        let (lo, hi) = self.x_range;
        self.regions
            .iter()
            .filter(|r| r.stop >= lo && r.start <= hi)
            .map(|r| (r.start.max(lo), r.stop.min(hi)))
            .collect()
    }

    /// X ticks that fall inside the visible range.
    pub fn visible_x_ticks(&self) -> Vec<usize> {
        let (lo, hi) = self.x_range;
        self.x_ticks
            .iter()
            .copied()
            .filter(|&t| (lo..=hi).contains(&(t as f64)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::label_placement::LabelTier;

    fn config(show_range_numbers: bool) -> PlotConfig {
        PlotConfig {
            title: "p53".to_string(),
            color: Srgb::new(0x1f, 0x77, 0xb4),
            show_range_numbers,
            centered_label_starts: vec![269.0],
        }
    }

    fn table(probabilities: Vec<f64>) -> ScoreTable {
        let positions = (1..=probabilities.len()).map(|p| p as f64).collect();
        ScoreTable::new(positions, probabilities)
    }

    #[test]
    fn ordered_table_has_no_bands_or_labels() {
        let spec = build_chart_spec(&table(vec![0.2; 100]), &config(true));
        assert!(spec.regions.is_empty());
        assert!(spec.labels.is_empty());
        assert!(spec.visible_bands().is_empty());
    }

    #[test]
    fn axes_and_title() {
        let spec = build_chart_spec(&table(vec![0.2; 100]), &config(false));
        assert_eq!(spec.title, "p53 disorder prediction via PONDR-FIT");
        assert_eq!(spec.x_range, (1.0, 100.0));
        assert_eq!(spec.y_range, (0.0, 1.0));
        assert_eq!(spec.x_ticks.first(), Some(&1));
        assert_eq!(spec.x_ticks.last(), Some(&100));
        assert_eq!(spec.threshold, 0.5);
        assert_eq!(spec.curve.len(), 100);
    }

    #[test]
    fn labels_only_when_requested() {
        let mut probabilities = vec![0.1; 40];
        probabilities[9..15].iter_mut().for_each(|p| *p = 0.9);

        let plain = build_chart_spec(&table(probabilities.clone()), &config(false));
        assert_eq!(plain.regions.len(), 1);
        assert!(plain.labels.is_empty());

        let labelled = build_chart_spec(&table(probabilities), &config(true));
        assert_eq!(labelled.labels.len(), 1);
        assert_eq!(labelled.labels[0].text, "10-15");
    }

    #[test]
    fn isolated_residue_label_sits_at_point_two() {
        let mut probabilities = vec![0.1; 100];
        probabilities[2..6].iter_mut().for_each(|p| *p = 0.8);
        probabilities[49] = 0.95;
        probabilities[90..95].iter_mut().for_each(|p| *p = 0.8);

        let spec = build_chart_spec(&table(probabilities), &config(true));
        assert_eq!(spec.regions[1].start, 50.0);
        assert_eq!(spec.regions[1].stop, 50.0);
        assert_eq!(spec.labels[1].tier, LabelTier::High);
        assert_eq!(spec.labels[1].y(), 0.2);
    }

    #[test]
    fn same_input_same_spec() {
        let mut probabilities = vec![0.3; 60];
        probabilities[20..31].iter_mut().for_each(|p| *p = 0.7);
        let t = table(probabilities);
        assert_eq!(build_chart_spec(&t, &config(true)), build_chart_spec(&t, &config(true)));
    }

    #[test]
    fn bands_are_clipped_to_the_x_range() {
        // positions run past the row count, so the last band is partly hidden
        let t = ScoreTable::new(
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
            vec![0.9, 0.1, 0.1, 0.1, 0.1, 0.9],
        );
        let mut spec = build_chart_spec(&t, &config(false));
        spec.regions.push(DisorderedRegion {
            start: 4.0,
            stop: 9.0,
            first_index: 3,
            last_index: 8,
        });
        assert_eq!(spec.visible_bands(), vec![(1.0, 1.0), (6.0, 6.0), (4.0, 6.0)]);
    }
}

//! Placement of the `start-stop` labels drawn over each disordered region.
//!
//! Labels of neighbouring regions are staggered over three heights and
//! anchored at either end of their band so that close regions do not print on
//! top of each other. The choice for a region depends on the one made for the
//! region before it.

use crate::models::DisorderedRegion;

/// Default region start whose label is centred over its band.
///
/// A hand-tuned exception for one protein's layout, kept separate from the
/// general rules and overridable from the command line.
pub const DEFAULT_CENTERED_LABEL_START: f64 = 269.0;

/// Vertical slot of a label, in data coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelTier {
    Low,
    Middle,
    High,
}

impl LabelTier {
    pub fn height(self) -> f64 {
        match self {
            LabelTier::Low => 0.05,
            LabelTier::Middle => 0.125,
            LabelTier::High => 0.2,
        }
    }
}

/// Which side of the label sits on its x coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegionLabel {
    pub text: String,
    pub x: f64,
    pub tier: LabelTier,
    pub anchor: Anchor,
}

impl RegionLabel {
    pub fn y(&self) -> f64 {
        self.tier.height()
    }
}

/// Walks the regions in order, remembering where the previous label went.
struct LabelPlacer<'a> {
    max_gap: f64,
    centered_starts: &'a [f64],
    previous_start: Option<f64>,
    previous_tier: LabelTier,
}

impl<'a> LabelPlacer<'a> {
    fn new(row_count: usize, centered_starts: &'a [f64]) -> Self {
        LabelPlacer {
            max_gap: (row_count / 4) as f64,
            centered_starts,
            previous_start: None,
            previous_tier: LabelTier::Middle,
        }
    }

    fn place(&mut self, region: &DisorderedRegion, is_first: bool, is_last: bool) -> RegionLabel {
        // the first region counts as close, so its label lands above the middle seed tier
        let close_to_previous = self
            .previous_start
            .map_or(true, |previous| region.start - previous < self.max_gap);
        let has_previous = self.previous_start.is_some();
        let single = region.is_single_residue();

        let (anchor, x) = if is_first {
            (Anchor::Left, region.start)
        } else if is_last {
            (Anchor::Right, region.stop)
        } else if single {
            (Anchor::Center, region.start)
        } else if close_to_previous && self.previous_tier == LabelTier::Low {
            (Anchor::Right, region.stop)
        } else if self.centered_starts.contains(&region.start) {
            (Anchor::Center, (region.start + region.stop) / 2.0)
        } else {
            (Anchor::Left, region.start)
        };

        let tier = if single {
            LabelTier::High
        } else if has_previous && close_to_previous && self.previous_tier == LabelTier::Low {
            LabelTier::Middle
        } else if close_to_previous && self.previous_tier == LabelTier::Middle {
            LabelTier::High
        } else {
            LabelTier::Low
        };

        self.previous_start = Some(region.start);
        self.previous_tier = tier;

        RegionLabel {
            text: region.range_label(),
            x,
            tier,
            anchor,
        }
    }
}

/// One label per region, in region order.
///
/// `row_count` is the number of residues in the table; regions whose starts
/// lie less than a quarter of it apart count as close.
pub fn place_labels(
    regions: &[DisorderedRegion],
    row_count: usize,
    centered_starts: &[f64],
) -> Vec<RegionLabel> {
    let mut placer = LabelPlacer::new(row_count, centered_starts);
    let last = regions.len().saturating_sub(1);
    regions
        .iter()
        .enumerate()
        .map(|(i, region)| placer.place(region, i == 0, i == last))
        .collect()
}

use tracing::debug;

use crate::models::{DisorderedRegion, ScoreTable};

/// Probabilities strictly above this mark a residue as disordered.
pub const DISORDER_THRESHOLD: f64 = 0.5;

/// Row indices whose probability exceeds [`DISORDER_THRESHOLD`], in row order.
pub fn disordered_indices(probabilities: &[f64]) -> Vec<usize> {
    probabilities
        .iter()
        .enumerate()
        .filter(|(_, &p)| p > DISORDER_THRESHOLD)
        .map(|(i, _)| i)
        .collect()
}

/// Split a sorted index list into maximal runs of consecutive indices.
fn consecutive_runs(indices: &[usize]) -> Vec<(usize, usize)> {
    let mut runs: Vec<(usize, usize)> = Vec::new();
    for &idx in indices {
        if let Some((_, last)) = runs.last_mut() {
            if *last + 1 == idx {
                *last = idx;
                continue;
            }
        }
        runs.push((idx, idx));
    }
    runs
}

/// Every maximal stretch of disordered residues, ordered along the protein.
pub fn find_disordered_regions(table: &ScoreTable) -> Vec<DisorderedRegion> {
    let positions = table.positions();
    let regions: Vec<DisorderedRegion> = consecutive_runs(&disordered_indices(table.probabilities()))
        .into_iter()
        .map(|(first, last)| DisorderedRegion {
            start: positions[first],
            stop: positions[last],
            first_index: first,
            last_index: last,
        })
        .collect();

    for region in &regions {
        debug!(
            "disordered region {} (rows {}..={})",
            region.range_label(),
            region.first_index,
            region.last_index
        );
    }
    regions
}

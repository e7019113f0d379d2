use crate::models::ScoreTable;

/// Tick step used when a quarter of the table rounds down to zero.
const MIN_TICK_STEP: usize = 10;

/// A quarter of `row_count`, rounded to the nearest multiple of ten with ties to even.
pub fn tick_step(row_count: usize) -> usize {
    let step = (row_count as f64 / 40.0).round_ties_even() as usize * 10;
    if step == 0 {
        MIN_TICK_STEP
    } else {
        step
    }
}

/// X ticks: `0, step, 2*step, ... <= row_count`, with the leading 0 shown as 1
/// and `row_count` appended when the sequence stops short of it.
pub fn x_ticks(row_count: usize) -> Vec<usize> {
    let mut ticks: Vec<usize> = (0..=row_count).step_by(tick_step(row_count)).collect();
    ticks[0] = 1;
    if ticks.last() != Some(&row_count) {
        ticks.push(row_count);
    }
    ticks
}

/// Probability ticks every 0.2.
pub fn y_ticks() -> Vec<f64> {
    (0..=5).map(|i| i as f64 * 0.2).collect()
}

/// The x interval shown: from the first position to the row count.
///
/// Falls back to the last position when that interval would be empty or
/// inverted, and widens a single point by one.
pub fn x_range(table: &ScoreTable) -> (f64, f64) {
    let positions = table.positions();
    let first = positions.first().copied().unwrap_or(0.0);
    let last = positions.last().copied().unwrap_or(first);
    let row_count = table.len() as f64;

    if first < row_count {
        (first, row_count)
    } else if first < last {
        (first, last)
    } else {
        (first, first + 1.0)
    }
}

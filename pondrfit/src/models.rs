use palette::Srgb;
use polars::prelude::*;

/// A source of per-residue scores that can be materialised as a DataFrame.
pub trait Dataset {
    fn load(&self) -> PolarsResult<DataFrame>;
}

/// Wrap any non-polars failure (io, regex, ...) so the data layer can stay on `PolarsResult`.
pub fn polars_err(e: Box<dyn std::error::Error>) -> PolarsError {
    PolarsError::ComputeError(format!("{}", e).into())
}

/// PONDR-FIT scores, one entry per residue, in file order.
///
/// The row index is the vector index. Positions come from the first column of
/// the input file and probabilities from the third.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreTable {
    positions: Vec<f64>,
    probabilities: Vec<f64>,
}

impl ScoreTable {
    pub fn new(positions: Vec<f64>, probabilities: Vec<f64>) -> Self {
        assert_eq!(
            positions.len(),
            probabilities.len(),
            "every position needs exactly one probability"
        );
        ScoreTable {
            positions,
            probabilities,
        }
    }

    /// Build the table from a frame holding `position` and `probability` columns.
    pub fn from_frame(df: &DataFrame) -> PolarsResult<Self> {
        let positions = non_null_f64(df, "position")?;
        let probabilities = non_null_f64(df, "probability")?;
        Ok(ScoreTable::new(positions, probabilities))
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn positions(&self) -> &[f64] {
        &self.positions
    }

    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    /// `(position, probability)` pairs in row order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.positions
            .iter()
            .copied()
            .zip(self.probabilities.iter().copied())
    }
}

fn non_null_f64(df: &DataFrame, name: &str) -> PolarsResult<Vec<f64>> {
    let column = df.column(name)?;
    if column.null_count() > 0 {
        return Err(PolarsError::ComputeError(
            format!(
                "column '{}' has {} value(s) that are not numbers",
                name,
                column.null_count()
            )
            .into(),
        ));
    }
    Ok(column.f64()?.into_no_null_iter().collect())
}

/// A maximal run of consecutive rows whose disorder probability exceeds the threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisorderedRegion {
    /// Position of the first row in the run.
    pub start: f64,
    /// Position of the last row in the run.
    pub stop: f64,
    pub first_index: usize,
    pub last_index: usize,
}

impl DisorderedRegion {
    pub fn is_single_residue(&self) -> bool {
        self.start == self.stop
    }

    pub fn range_label(&self) -> String {
        format!("{}-{}", self.start as i64, self.stop as i64)
    }
}

/// User supplied settings, fixed for the whole run.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    pub title: String,
    pub color: Srgb<u8>,
    pub show_range_numbers: bool,
    /// Region starts whose label is centred over the region instead of using the
    /// usual anchoring rules.
    pub centered_label_starts: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::df;

    #[test]
    fn table_from_frame_keeps_row_order() {
        let df = df![
            "position" => &[1.0, 2.0, 3.0],
            "probability" => &[0.2, 0.8, 0.6]
        ]
        .unwrap();
        let table = ScoreTable::from_frame(&df).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.positions(), &[1.0, 2.0, 3.0]);
        assert_eq!(table.points().nth(1), Some((2.0, 0.8)));
    }

    #[test]
    fn table_from_frame_rejects_nulls() {
        let df = df![
            "position" => &[Some(1.0), Some(2.0)],
            "probability" => &[Some(0.2), None]
        ]
        .unwrap();
        assert!(ScoreTable::from_frame(&df).is_err());
    }

    #[test]
    fn range_label_prints_integers() {
        let region = DisorderedRegion {
            start: 12.0,
            stop: 40.0,
            first_index: 11,
            last_index: 39,
        };
        assert_eq!(region.range_label(), "12-40");
        assert!(!region.is_single_residue());
    }
}

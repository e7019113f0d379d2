use std::path::PathBuf;

use polars::prelude::*;
use tracing::{error, info, warn};

use crate::helper_functions::read_whitespace_table;
use crate::models::{Dataset, ScoreTable};

/// A PONDR-FIT output file: position, residue, disorder probability per line.
pub struct PondrFitScores {
    pub path: PathBuf,
}

/// Keep the position (field 0) and probability (field 2) columns, as floats.
fn select_score_columns(df: DataFrame) -> PolarsResult<DataFrame> {
    if df.width() < 3 {
        return Err(PolarsError::ShapeMismatch(
            format!(
                "expected at least three whitespace separated fields per row, found {}",
                df.width()
            )
            .into(),
        ));
    }

    df.lazy()
        .select([
            col("column_1").cast(DataType::Float64).alias("position"),
            col("column_3").cast(DataType::Float64).alias("probability"),
        ])
        .collect()
}

impl Dataset for PondrFitScores {
    fn load(&self) -> PolarsResult<DataFrame> {
        info!("Reading PONDR-FIT scores from {}", self.path.display());
        let raw = match read_whitespace_table(&self.path) {
            Ok(df) => df,
            Err(e) => {
                error!("Failed to read {}: {}", self.path.display(), e);
                return Err(e);
            }
        };
        select_score_columns(raw)
    }
}

impl PondrFitScores {
    pub fn load_table(&self) -> PolarsResult<ScoreTable> {
        let table = ScoreTable::from_frame(&self.load()?)?;
        info!("Loaded {} residues", table.len());
        warn_on_suspicious_values(&table);
        Ok(table)
    }
}

/// Scores are taken as given; out-of-range values are reported, not rejected.
fn warn_on_suspicious_values(table: &ScoreTable) {
    let out_of_range = table
        .probabilities()
        .iter()
        .filter(|p| !(0.0..=1.0).contains(*p))
        .count();
    if out_of_range > 0 {
        warn!("{} probabilities fall outside [0, 1]", out_of_range);
    }

    if let Some(i) = table
        .positions()
        .windows(2)
        .position(|pair| pair[1] < pair[0])
    {
        warn!(
            "positions decrease at row {} ({} -> {})",
            i + 1,
            table.positions()[i],
            table.positions()[i + 1]
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn scores_file(lines: &[&str]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        for line in lines {
            writeln!(file, "{}", line).unwrap();
        }
        file
    }

    #[test]
    fn loads_position_and_probability() {
        let file = scores_file(&["1 M 0.81", "2 E 0.62", "3 K 0.33"]);
        let table = PondrFitScores {
            path: file.path().to_path_buf(),
        }
        .load_table()
        .unwrap();

        assert_eq!(table.positions(), &[1.0, 2.0, 3.0]);
        assert_eq!(table.probabilities(), &[0.81, 0.62, 0.33]);
    }

    #[test]
    fn ignores_extra_trailing_fields() {
        let file = scores_file(&["1 M 0.81 0.05", "2 E 0.62 0.04"]);
        let table = PondrFitScores {
            path: file.path().to_path_buf(),
        }
        .load_table()
        .unwrap();
        assert_eq!(table.probabilities(), &[0.81, 0.62]);
    }

    #[test]
    fn suspicious_values_are_kept() {
        // out-of-range probabilities and decreasing positions only warn
        let file = scores_file(&["2 M 1.3", "1 E -0.2", "3 K 0.4"]);
        let table = PondrFitScores {
            path: file.path().to_path_buf(),
        }
        .load_table()
        .unwrap();
        assert_eq!(table.positions(), &[2.0, 1.0, 3.0]);
        assert_eq!(table.probabilities(), &[1.3, -0.2, 0.4]);
    }

    #[test]
    fn too_few_fields_is_an_error() {
        let file = scores_file(&["1 0.81", "2 0.62"]);
        let result = PondrFitScores {
            path: file.path().to_path_buf(),
        }
        .load_table();
        assert!(result.is_err());
    }

    #[test]
    fn non_numeric_probability_is_an_error() {
        let file = scores_file(&["1 M 0.81", "2 E high"]);
        let result = PondrFitScores {
            path: file.path().to_path_buf(),
        }
        .load_table();
        assert!(result.is_err());
    }
}

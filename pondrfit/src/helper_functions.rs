use std::fs;
use std::io::Cursor;
use std::path::Path;

use palette::Srgb;
use polars::prelude::*;
use regex::Regex;

use crate::models::polars_err;

/// Read a header-less table whose fields are separated by runs of spaces or tabs.
///
/// Blank lines are skipped and each line is trimmed before splitting, so the
/// right-aligned columns PONDR-FIT writes parse the same as plain ones.
/// Columns come back as `column_1`, `column_2`, ...
pub fn read_whitespace_table(path: &Path) -> PolarsResult<DataFrame> {
    let text = fs::read_to_string(path).map_err(|e| polars_err(Box::new(e)))?;
    let separators = Regex::new(r"[ \t]+").map_err(|e| polars_err(Box::new(e)))?;

    let normalized = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| separators.replace_all(line, " ").into_owned())
        .collect::<Vec<_>>()
        .join("\n");

    if normalized.is_empty() {
        return Err(PolarsError::NoData(
            format!("{} contains no rows", path.display()).into(),
        ));
    }

    CsvReadOptions::default()
        .with_has_header(false)
        .map_parse_options(|opts| {
            opts.with_separator(b' ')
                .with_truncate_ragged_lines(true)
        })
        .into_reader_with_file_handle(Cursor::new(normalized.into_bytes()))
        .finish()
}

/// Single-letter colour codes understood by matplotlib.
const SHORTHAND_COLORS: [(&str, (u8, u8, u8)); 8] = [
    ("b", (0, 0, 255)),
    ("g", (0, 128, 0)),
    ("r", (255, 0, 0)),
    ("c", (0, 191, 191)),
    ("m", (191, 0, 191)),
    ("y", (191, 191, 0)),
    ("k", (0, 0, 0)),
    ("w", (255, 255, 255)),
];

/// The default property cycle, addressed as `C0` .. `C9`.
const CYCLE_COLORS: [(u8, u8, u8); 10] = [
    (0x1f, 0x77, 0xb4),
    (0xff, 0x7f, 0x0e),
    (0x2c, 0xa0, 0x2c),
    (0xd6, 0x27, 0x28),
    (0x94, 0x67, 0xbd),
    (0x8c, 0x56, 0x4b),
    (0xe3, 0x77, 0xc2),
    (0x7f, 0x7f, 0x7f),
    (0xbc, 0xbd, 0x22),
    (0x17, 0xbe, 0xcf),
];

/// Parse a colour the way a matplotlib user would write it.
///
/// Accepts single-letter codes, `C0`..`C9`, a grey level such as `"0.75"`,
/// CSS/X11 colour names and `#rgb` / `#rrggbb` hex codes.
pub fn parse_color(value: &str) -> Result<Srgb<u8>, String> {
    let value = value.trim();

    if let Some((_, (r, g, b))) = SHORTHAND_COLORS.iter().find(|(code, _)| *code == value) {
        return Ok(Srgb::new(*r, *g, *b));
    }

    if let Some(digit) = value.strip_prefix('C') {
        if let Ok(i) = digit.parse::<usize>() {
            if let Some(&(r, g, b)) = CYCLE_COLORS.get(i) {
                return Ok(Srgb::new(r, g, b));
            }
        }
    }

    if let Ok(level) = value.parse::<f64>() {
        if (0.0..=1.0).contains(&level) {
            let v = (level * 255.0).round() as u8;
            return Ok(Srgb::new(v, v, v));
        }
        return Err(format!("grey level {} is outside [0, 1]", value));
    }

    if value.starts_with('#') {
        return value
            .parse::<Srgb<u8>>()
            .map_err(|e| format!("invalid hex colour '{}': {}", value, e));
    }

    palette::named::from_str(&value.to_lowercase())
        .ok_or_else(|| format!("unknown colour '{}'", value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_runs_of_spaces_as_one_separator() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "   1 M    0.9123").unwrap();
        writeln!(file, "   2 S    0.8001").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  10 P\t0.2500").unwrap();

        let df = read_whitespace_table(file.path()).unwrap();
        assert_eq!(df.height(), 3);
        assert_eq!(df.width(), 3);
        let third = df.column("column_3").unwrap().f64().unwrap();
        assert_eq!(third.get(0), Some(0.9123));
        assert_eq!(third.get(2), Some(0.25));
    }

    #[test]
    fn empty_file_is_an_error() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(read_whitespace_table(file.path()).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_whitespace_table(&dir.path().join("absent.txt")).is_err());
    }

    #[test]
    fn parses_matplotlib_style_colors() {
        assert_eq!(parse_color("r").unwrap(), Srgb::new(255, 0, 0));
        assert_eq!(parse_color("C0").unwrap(), Srgb::new(0x1f, 0x77, 0xb4));
        assert_eq!(parse_color("0.5").unwrap(), Srgb::new(128, 128, 128));
        assert_eq!(parse_color("#00ff00").unwrap(), Srgb::new(0, 255, 0));
        assert_eq!(parse_color("SteelBlue").unwrap(), Srgb::new(70, 130, 180));
    }

    #[test]
    fn rejects_unknown_colors() {
        assert!(parse_color("not-a-colour").is_err());
        assert!(parse_color("C12").is_err());
        assert!(parse_color("1.5").is_err());
        assert!(parse_color("#12").is_err());
    }
}

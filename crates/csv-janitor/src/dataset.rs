//! Dataset loading, writing, and missing-value conventions.
//!
//! Every column is read as text (schema inference is disabled) and missing
//! cells are normalised to the empty string, so `""` is the single in-memory
//! representation of "missing". The core modules still accept `None` cells
//! defensively via [`is_missing`].

use polars::io::csv::read::CsvReadOptions;
use polars::prelude::*;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{JanitorError, Result};

/// A cell is missing when it is null or the empty string.
#[inline]
pub fn is_missing(value: Option<&str>) -> bool {
    value.is_none_or(str::is_empty)
}

/// Read a CSV file into an all-string DataFrame.
///
/// The first line is the header and defines the column schema. A file that
/// cannot be read, or that yields no columns, fails with a read error; a file
/// with a header but no data rows loads as a zero-height dataset.
pub fn read_dataset(path: &Path) -> Result<DataFrame> {
    let read_error = |reason: String| JanitorError::DatasetRead {
        path: path.display().to_string(),
        reason,
    };

    let df = CsvReadOptions::default()
        .with_has_header(true)
        // infer_schema_length of 0 disables inference: every column is text
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| read_error(e.to_string()))?
        .finish()
        .map_err(|e| read_error(e.to_string()))?;

    if df.width() == 0 {
        return Err(JanitorError::EmptyDataset);
    }

    debug!(
        "Loaded {} rows x {} columns from {}",
        df.height(),
        df.width(),
        path.display()
    );

    normalize_missing(df)
}

/// Replace nulls with the empty string in every column.
fn normalize_missing(mut df: DataFrame) -> Result<DataFrame> {
    let names: Vec<String> = df
        .get_column_names()
        .into_iter()
        .map(|s| s.to_string())
        .collect();

    for name in &names {
        let (filled, _) = {
            let series = df.column(name)?.as_materialized_series();
            replace_missing(series, "")?
        };
        df.replace(name, filled)?;
    }

    Ok(df)
}

/// Rebuild a string Series with every missing cell replaced by `value`.
///
/// Returns the new Series and the number of cells replaced.
pub(crate) fn replace_missing(series: &Series, value: &str) -> PolarsResult<(Series, usize)> {
    let cells = series.str()?;
    let mut replaced = 0usize;
    let mut out: Vec<Option<String>> = Vec::with_capacity(cells.len());

    for cell in cells.into_iter() {
        if is_missing(cell) {
            replaced += 1;
            out.push(Some(value.to_string()));
        } else {
            out.push(cell.map(str::to_string));
        }
    }

    Ok((Series::new(series.name().clone(), out), replaced))
}

/// Write a dataset to a CSV file with its header.
pub fn write_dataset(df: &mut DataFrame, path: &Path) -> Result<()> {
    let mut file = File::create(path)?;

    CsvWriter::new(&mut file)
        .include_header(true)
        .with_separator(b',')
        .with_quote_char(b'"')
        .finish(df)?;

    info!("Cleaned dataset saved: {}", path.display());
    Ok(())
}

/// Derive the output path for an input file by prefixing its filename.
pub fn derived_output_path(input: &Path, prefix: &str) -> PathBuf {
    let file_name = input
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("dataset.csv");
    input.with_file_name(format!("{prefix}{file_name}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write as _;

    fn write_temp_csv(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_is_missing() {
        assert!(is_missing(None));
        assert!(is_missing(Some("")));
        assert!(!is_missing(Some(" ")));
        assert!(!is_missing(Some("x")));
    }

    #[test]
    fn test_read_all_columns_as_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp_csv(&dir, "input.csv", "id,score\n1,9.5\n2,7.0\n");

        let df = read_dataset(&path).unwrap();
        assert_eq!(df.shape(), (2, 2));
        for col in df.get_columns() {
            assert_eq!(col.dtype(), &DataType::String);
        }
    }

    #[test]
    fn test_read_normalises_empty_cells() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp_csv(&dir, "input.csv", "a,b\n1,\n,2\n");

        let df = read_dataset(&path).unwrap();
        let a = df.column("a").unwrap().as_materialized_series();
        let cells = a.str().unwrap();
        assert_eq!(cells.get(1), Some(""));
        assert_eq!(a.null_count(), 0);
    }

    #[test]
    fn test_read_header_only_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp_csv(&dir, "input.csv", "a,b\n");

        let df = read_dataset(&path).unwrap();
        assert_eq!(df.height(), 0);
        assert_eq!(df.width(), 2);
    }

    #[test]
    fn test_read_missing_file_fails() {
        let err = read_dataset(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, JanitorError::DatasetRead { .. }));
    }

    #[test]
    fn test_round_trip_preserves_cells() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp_csv(&dir, "input.csv", "name,email\nAlice,alice@example.com\nBob,\n");

        let mut df = read_dataset(&path).unwrap();
        let out = dir.path().join("out.csv");
        write_dataset(&mut df, &out).unwrap();

        let round_tripped = read_dataset(&out).unwrap();
        assert_eq!(df, round_tripped);
    }

    #[test]
    fn test_derived_output_path() {
        assert_eq!(
            derived_output_path(Path::new("data/input.csv"), "cleaned_"),
            PathBuf::from("data/cleaned_input.csv")
        );
        assert_eq!(
            derived_output_path(Path::new("input.csv"), "cleaned_"),
            PathBuf::from("cleaned_input.csv")
        );
    }
}

use polars::prelude::*;
use std::collections::HashMap;
use tracing::debug;

use crate::dataset::is_missing;
use crate::error::Result;
use crate::types::{IssueReport, QualityIssue};

/// Reported row numbers are file line numbers: the header occupies line 1,
/// so the row at dataset index 0 sits on line 2.
const HEADER_LINE_OFFSET: usize = 2;

/// Read-only analysis of a dataset for quality issues.
pub struct QualityAnalyzer;

impl QualityAnalyzer {
    /// Scan a dataset and report every detected issue.
    ///
    /// Columns are visited in dataset order; each column contributes its
    /// missing-value count, then a duplicate summary followed by one detail
    /// entry per duplicated value (in first-occurrence order). A zero-row
    /// dataset produces an empty report.
    pub fn analyze(df: &DataFrame) -> Result<IssueReport> {
        let mut report = IssueReport::new();
        if df.height() == 0 {
            return Ok(report);
        }

        for col in df.get_columns() {
            Self::analyze_column(col, &mut report)?;
        }

        let all_missing = Self::count_all_missing_rows(df)?;
        if all_missing > 0 {
            report.push(QualityIssue::AllFieldsMissingRows { count: all_missing });
        }

        debug!("Analysis found {} issue entries", report.len());
        Ok(report)
    }

    fn analyze_column(col: &Column, report: &mut IssueReport) -> Result<()> {
        let column = col.name().to_string();
        let cells = col.as_materialized_series().str()?;

        let missing = cells.into_iter().filter(|cell| is_missing(*cell)).count();
        if missing > 0 {
            report.push(QualityIssue::MissingValues {
                column: column.clone(),
                count: missing,
            });
        }

        // group by value, keeping first-occurrence order; missing cells
        // participate as the empty string, as a value like any other
        let mut order: Vec<&str> = Vec::new();
        let mut rows_by_value: HashMap<&str, Vec<usize>> = HashMap::new();
        for (index, cell) in cells.into_iter().enumerate() {
            let value = cell.unwrap_or("");
            rows_by_value
                .entry(value)
                .or_insert_with(|| {
                    order.push(value);
                    Vec::new()
                })
                .push(index + HEADER_LINE_OFFSET);
        }

        let duplicated: Vec<&str> = order
            .iter()
            .copied()
            .filter(|value| rows_by_value[value].len() > 1)
            .collect();

        if !duplicated.is_empty() {
            report.push(QualityIssue::DuplicateValues {
                column: column.clone(),
                count: duplicated.len(),
            });
            for value in duplicated {
                report.push(QualityIssue::DuplicateDetail {
                    column: column.clone(),
                    value: value.to_string(),
                    rows: rows_by_value[value].clone(),
                });
            }
        }

        Ok(())
    }

    /// Count rows in which every single field is missing.
    fn count_all_missing_rows(df: &DataFrame) -> Result<usize> {
        let columns: Vec<&StringChunked> = df
            .get_columns()
            .iter()
            .map(|col| col.as_materialized_series().str())
            .collect::<PolarsResult<_>>()?;

        let count = (0..df.height())
            .filter(|&row| columns.iter().all(|cells| is_missing(cells.get(row))))
            .count();

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn analyze(df: &DataFrame) -> IssueReport {
        QualityAnalyzer::analyze(df).unwrap()
    }

    #[test]
    fn test_clean_dataset_yields_empty_report() {
        let df = df![
            "id" => ["1", "2", "3"],
            "name" => ["Alice", "Bob", "Carol"],
        ]
        .unwrap();

        assert!(analyze(&df).is_empty());
    }

    #[test]
    fn test_missing_and_duplicate_in_one_column() {
        let df = df!["col" => ["a", "", "a"]].unwrap();

        let report = analyze(&df);
        assert_eq!(
            report.issues(),
            &[
                QualityIssue::MissingValues {
                    column: "col".to_string(),
                    count: 1,
                },
                QualityIssue::DuplicateValues {
                    column: "col".to_string(),
                    count: 1,
                },
                QualityIssue::DuplicateDetail {
                    column: "col".to_string(),
                    value: "a".to_string(),
                    rows: vec![2, 4],
                },
            ]
        );
    }

    #[test]
    fn test_row_numbers_account_for_header_line() {
        let df = df!["col" => ["x", "y", "x"]].unwrap();

        let report = analyze(&df);
        let detail = report
            .iter()
            .find_map(|issue| match issue {
                QualityIssue::DuplicateDetail { value, rows, .. } if value == "x" => Some(rows),
                _ => None,
            })
            .expect("duplicate detail for 'x'");
        assert_eq!(detail, &vec![2, 4]);
    }

    #[test]
    fn test_duplicate_count_is_distinct_values_not_occurrences() {
        let df = df!["col" => ["a", "a", "a", "b", "b", "c"]].unwrap();

        let report = analyze(&df);
        assert!(report.issues().contains(&QualityIssue::DuplicateValues {
            column: "col".to_string(),
            count: 2,
        }));
    }

    #[test]
    fn test_details_follow_first_occurrence_order() {
        let df = df!["col" => ["b", "a", "b", "a"]].unwrap();

        let report = analyze(&df);
        let values: Vec<&str> = report
            .iter()
            .filter_map(|issue| match issue {
                QualityIssue::DuplicateDetail { value, .. } => Some(value.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(values, vec!["b", "a"]);
    }

    #[test]
    fn test_repeated_missing_cells_count_as_duplicates() {
        // two empty cells are two occurrences of the same (empty) value
        let df = df!["col" => ["", "", "x"]].unwrap();

        let report = analyze(&df);
        assert!(report.issues().contains(&QualityIssue::MissingValues {
            column: "col".to_string(),
            count: 2,
        }));
        assert!(report.issues().contains(&QualityIssue::DuplicateDetail {
            column: "col".to_string(),
            value: String::new(),
            rows: vec![2, 3],
        }));
    }

    #[test]
    fn test_all_fields_missing_rows() {
        let df = df![
            "a" => ["", "1", ""],
            "b" => ["", "2", ""],
        ]
        .unwrap();

        let report = analyze(&df);
        assert!(
            report
                .issues()
                .contains(&QualityIssue::AllFieldsMissingRows { count: 2 })
        );
    }

    #[test]
    fn test_partially_missing_row_is_not_all_missing() {
        let df = df![
            "a" => ["", "1"],
            "b" => ["x", "2"],
        ]
        .unwrap();

        let report = analyze(&df);
        assert!(
            !report
                .iter()
                .any(|issue| matches!(issue, QualityIssue::AllFieldsMissingRows { .. }))
        );
    }

    #[test]
    fn test_zero_row_dataset_reports_nothing() {
        let df = df!["col" => Vec::<String>::new()].unwrap();

        assert!(analyze(&df).is_empty());
    }

    #[test]
    fn test_analysis_does_not_mutate_dataset() {
        let df = df!["col" => ["a", "", "a"]].unwrap();
        let before = df.clone();

        let _ = analyze(&df);
        assert_eq!(df, before);
    }
}

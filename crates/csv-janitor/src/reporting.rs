//! Machine-readable analysis report for the `--json` output mode.

use chrono::Local;
use polars::prelude::DataFrame;
use serde::{Deserialize, Serialize};

use crate::types::{CleaningAction, CleaningSummary, IssueReport, QualityIssue};

/// Everything one analysis run produced, in a serializable shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Timestamp when the report was generated.
    pub generated_at: String,
    /// Path to the input file.
    pub input_file: String,
    /// Number of data rows in the input.
    pub rows: usize,
    /// Number of columns in the input.
    pub columns: usize,
    /// Detected issues, in report order.
    pub issues: Vec<QualityIssue>,
    /// Suggested action names, in suggestion order.
    pub suggested_actions: Vec<String>,
    /// Summary of the cleaning run, when one was applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cleaning_summary: Option<CleaningSummary>,
    /// Path the cleaned dataset was written to, when one was applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_file: Option<String>,
}

impl AnalysisReport {
    /// Build a report from one analysis pass.
    pub fn build(
        input_file: &str,
        df: &DataFrame,
        report: &IssueReport,
        suggested: &[CleaningAction],
    ) -> Self {
        Self {
            generated_at: Local::now().to_rfc3339(),
            input_file: input_file.to_string(),
            rows: df.height(),
            columns: df.width(),
            issues: report.issues().to_vec(),
            suggested_actions: suggested
                .iter()
                .map(|a| a.display_name().to_string())
                .collect(),
            cleaning_summary: None,
            output_file: None,
        }
    }

    /// Attach the outcome of an applied cleaning run.
    pub fn with_cleaning(mut self, summary: CleaningSummary, output_file: String) -> Self {
        self.cleaning_summary = Some(summary);
        self.output_file = Some(output_file);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    #[test]
    fn test_report_shape() {
        let df = df!["col" => ["a", "", "a"]].unwrap();
        let issues = crate::quality::QualityAnalyzer::analyze(&df).unwrap();
        let suggested = crate::advisor::suggest(&issues);

        let report = AnalysisReport::build("input.csv", &df, &issues, &suggested);
        assert_eq!(report.rows, 3);
        assert_eq!(report.columns, 1);
        assert_eq!(
            report.suggested_actions,
            vec!["Remove duplicates", "Fill in missing values"]
        );

        let json = serde_json::to_string_pretty(&report).unwrap();
        assert!(json.contains("\"kind\": \"missing_values\""));
        assert!(!json.contains("cleaning_summary"));
    }

    #[test]
    fn test_report_with_cleaning_outcome() {
        let df = df!["col" => ["a", "a"]].unwrap();
        let issues = crate::quality::QualityAnalyzer::analyze(&df).unwrap();
        let suggested = crate::advisor::suggest(&issues);

        let mut summary = CleaningSummary::new();
        summary.rows_before = 2;
        summary.rows_after = 1;
        summary.rows_removed = 1;

        let report = AnalysisReport::build("input.csv", &df, &issues, &suggested)
            .with_cleaning(summary, "cleaned_input.csv".to_string());

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("cleaned_input.csv"));
        assert!(json.contains("\"rows_removed\":1"));
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::JanitorError;

/// A single data-quality issue detected in a dataset.
///
/// Issues are tagged variants rather than description strings, so downstream
/// consumers (the advisor, the JSON report) match on structure instead of
/// text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QualityIssue {
    /// A column contains one or more missing (empty) cells.
    MissingValues { column: String, count: usize },
    /// A column contains values that occur in more than one row.
    /// `count` is the number of distinct duplicated values, not the total
    /// number of occurrences.
    DuplicateValues { column: String, count: usize },
    /// One duplicated value within a column, with the file line numbers it
    /// occupies (1-based, line 1 being the header).
    DuplicateDetail {
        column: String,
        value: String,
        rows: Vec<usize>,
    },
    /// Rows in which every single field is missing.
    AllFieldsMissingRows { count: usize },
}

impl QualityIssue {
    /// Column this issue concerns, if it is column-scoped.
    pub fn column(&self) -> Option<&str> {
        match self {
            Self::MissingValues { column, .. }
            | Self::DuplicateValues { column, .. }
            | Self::DuplicateDetail { column, .. } => Some(column),
            Self::AllFieldsMissingRows { .. } => None,
        }
    }
}

impl fmt::Display for QualityIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingValues { column, count } => {
                write!(f, "- Missing values in {column}: {count}")
            }
            Self::DuplicateValues { column, count } => {
                write!(f, "- Potential duplicates in {column}: {count}")
            }
            Self::DuplicateDetail { value, rows, .. } => {
                let occurrences = rows.len();
                let rows = rows
                    .iter()
                    .map(|r| r.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                let shown = if value.is_empty() { "(empty)" } else { value.as_str() };
                write!(f, "  - {shown} ({occurrences} occurrences): rows {rows}")
            }
            Self::AllFieldsMissingRows { count } => {
                write!(f, "- Rows with all missing values: {count}")
            }
        }
    }
}

/// The full set of issues found in one dataset.
///
/// Issues appear in dataset column order; duplicate details follow their
/// column's summary entry in first-occurrence order of the value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueReport {
    issues: Vec<QualityIssue>,
}

impl IssueReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, issue: QualityIssue) {
        self.issues.push(issue);
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &QualityIssue> {
        self.issues.iter()
    }

    pub fn issues(&self) -> &[QualityIssue] {
        &self.issues
    }

    /// True if any column reported missing cells.
    pub fn has_missing_values(&self) -> bool {
        self.iter()
            .any(|i| matches!(i, QualityIssue::MissingValues { .. }))
    }

    /// True if any column reported duplicated values.
    pub fn has_duplicate_values(&self) -> bool {
        self.iter()
            .any(|i| matches!(i, QualityIssue::DuplicateValues { .. }))
    }
}

impl fmt::Display for IssueReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for issue in &self.issues {
            writeln!(f, "{issue}")?;
        }
        Ok(())
    }
}

/// A named cleaning transform the user can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CleaningAction {
    /// Remove rows that are fully identical to an earlier row.
    RemoveDuplicates,
    /// Fill every missing cell with the column's first non-missing value.
    FillMissing,
}

impl CleaningAction {
    /// The user-facing name of this action.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::RemoveDuplicates => "Remove duplicates",
            Self::FillMissing => "Fill in missing values",
        }
    }
}

impl fmt::Display for CleaningAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for CleaningAction {
    type Err = JanitorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Remove duplicates" => Ok(Self::RemoveDuplicates),
            "Fill in missing values" => Ok(Self::FillMissing),
            other => Err(JanitorError::UnknownAction(other.to_string())),
        }
    }
}

/// Summary of what a cleaning run did to a dataset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CleaningSummary {
    /// Number of rows before cleaning.
    pub rows_before: usize,
    /// Number of rows after cleaning.
    pub rows_after: usize,
    /// Number of rows removed.
    pub rows_removed: usize,
    /// Number of cells that received a fill value.
    pub cells_filled: usize,
    /// Human-readable log of actions taken, in application order.
    pub actions: Vec<String>,
}

impl CleaningSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an action to the log.
    pub fn add_action(&mut self, action: impl Into<String>) {
        self.actions.push(action.into());
    }

    /// Percentage of rows removed by cleaning.
    pub fn rows_removed_percentage(&self) -> f32 {
        if self.rows_before == 0 {
            0.0
        } else {
            (self.rows_removed as f32 / self.rows_before as f32) * 100.0
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

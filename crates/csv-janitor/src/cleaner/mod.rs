//! Cleaning transforms for datasets.
//!
//! This module applies user-selected cleaning actions:
//! - Removing fully-duplicated rows
//! - Filling missing values with a per-column constant

use polars::prelude::*;
use std::collections::HashSet;
use tracing::debug;

use crate::dataset::{is_missing, replace_missing};
use crate::error::{JanitorError, Result};
use crate::types::{CleaningAction, CleaningSummary};

/// Applies cleaning actions to a dataset, producing a new dataset.
pub struct DataCleaner;

impl DataCleaner {
    /// Apply the given actions in order and return the cleaned dataset with
    /// a summary of what was done.
    ///
    /// The action order matters: filling missing values first can make rows
    /// identical that previously differed only in a missing field, so a
    /// later deduplication merges them, while deduplicating first keeps
    /// both. Either ordering is a valid outcome of the caller's selection.
    ///
    /// Fails fast: an action that cannot be applied (a column with missing
    /// cells but no fill value anywhere) aborts the whole call before that
    /// action modifies any column, and no partially-cleaned dataset is
    /// returned.
    pub fn apply(
        &self,
        df: DataFrame,
        actions: &[CleaningAction],
    ) -> Result<(DataFrame, CleaningSummary)> {
        let mut summary = CleaningSummary::new();
        summary.rows_before = df.height();

        let mut df = df;
        for action in actions {
            df = match action {
                CleaningAction::RemoveDuplicates => Self::remove_duplicates(df, &mut summary)?,
                CleaningAction::FillMissing => Self::fill_missing(df, &mut summary)?,
            };
        }

        summary.rows_after = df.height();
        summary.rows_removed = summary.rows_before - summary.rows_after;
        Ok((df, summary))
    }

    /// Remove rows fully identical to an earlier row, keeping the first
    /// occurrence so the surviving rows stay in dataset order.
    fn remove_duplicates(df: DataFrame, summary: &mut CleaningSummary) -> Result<DataFrame> {
        let before = df.height();
        let mask = Self::first_occurrence_mask(&df)?;
        let df = df.filter(&mask)?;
        let removed = before - df.height();

        if removed > 0 {
            summary.add_action(format!("Removed {removed} duplicate rows"));
            debug!("Removed {} duplicate rows", removed);
        } else {
            summary.add_action("No duplicate rows found");
            debug!("No duplicate rows found");
        }

        Ok(df)
    }

    /// Mask that is true for the first row carrying each distinct value
    /// tuple and false for every later identical row.
    fn first_occurrence_mask(df: &DataFrame) -> Result<BooleanChunked> {
        let columns: Vec<&StringChunked> = df
            .get_columns()
            .iter()
            .map(|col| col.as_materialized_series().str())
            .collect::<PolarsResult<_>>()?;

        let mut seen: HashSet<Vec<&str>> = HashSet::with_capacity(df.height());
        let mut keep = Vec::with_capacity(df.height());
        for row in 0..df.height() {
            let key: Vec<&str> = columns
                .iter()
                .map(|cells| cells.get(row).unwrap_or(""))
                .collect();
            keep.push(seen.insert(key));
        }

        Ok(BooleanChunked::from_slice("keep".into(), &keep))
    }

    /// Fill every missing cell with its column's first non-missing value
    /// (scanning in dataset order) - a constant per column, not an
    /// interpolation.
    fn fill_missing(mut df: DataFrame, summary: &mut CleaningSummary) -> Result<DataFrame> {
        // resolve every fill value up front so a column with no usable
        // value aborts before anything is modified
        let mut fills: Vec<(String, String)> = Vec::new();
        for col in df.get_columns() {
            let cells = col.as_materialized_series().str()?;
            let missing = cells.into_iter().filter(|cell| is_missing(*cell)).count();
            if missing == 0 {
                continue;
            }

            match cells.into_iter().flatten().find(|cell| !cell.is_empty()) {
                Some(value) => fills.push((col.name().to_string(), value.to_string())),
                None => {
                    return Err(JanitorError::NoFillValueAvailable {
                        column: col.name().to_string(),
                    });
                }
            }
        }

        if fills.is_empty() {
            summary.add_action("No missing values found");
            debug!("No missing values found");
            return Ok(df);
        }

        for (column, value) in fills {
            let (filled, replaced) = {
                let series = df.column(&column)?.as_materialized_series();
                replace_missing(series, &value)?
            };
            df.replace(&column, filled)?;

            summary.cells_filled += replaced;
            summary.add_action(format!(
                "Filled {replaced} missing cells in '{column}' with '{value}'"
            ));
            debug!("Filled {} missing cells in '{}'", replaced, column);
        }

        Ok(df)
    }
}

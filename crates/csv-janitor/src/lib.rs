//! CSV Data-Quality Inspection and Cleaning Library
//!
//! A small library (and interactive CLI) for finding and fixing data-quality
//! issues in CSV datasets whose cells are plain text.
//!
//! # Overview
//!
//! Three components, consumed in sequence by a caller that owns I/O:
//!
//! - **Analysis**: [`QualityAnalyzer`] scans a dataset and reports missing
//!   values, duplicated values per column, and fully-empty rows.
//! - **Suggestion**: [`advisor::suggest`] maps the report to an ordered list
//!   of cleaning actions.
//! - **Cleaning**: [`DataCleaner`] applies a selected subset of actions,
//!   producing a new dataset and a summary.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use csv_janitor::{advisor, dataset, DataCleaner, QualityAnalyzer};
//! use std::path::Path;
//!
//! let df = dataset::read_dataset(Path::new("data.csv"))?;
//!
//! let report = QualityAnalyzer::analyze(&df)?;
//! if report.is_empty() {
//!     println!("No issues found in the data.");
//!     return Ok(());
//! }
//! print!("{report}");
//!
//! let suggested = advisor::suggest(&report);
//! let (mut cleaned, summary) = DataCleaner.apply(df, &suggested)?;
//! println!("Removed {} rows", summary.rows_removed);
//!
//! dataset::write_dataset(&mut cleaned, Path::new("cleaned_data.csv"))?;
//! ```
//!
//! # Missing-Value Convention
//!
//! Every column is read as text and the empty string is the one missing
//! value representation; there is no distinct null in the data model. See
//! [`dataset`] for the loading rules.

pub mod advisor;
pub mod cleaner;
pub mod config;
pub mod dataset;
pub mod error;
pub mod quality;
pub mod reporting;
pub mod types;

// Re-exports for convenient access
pub use cleaner::DataCleaner;
pub use config::{CleanerConfig, CleanerConfigBuilder, ConfigValidationError};
pub use error::{JanitorError, Result as JanitorResult, ResultExt};
pub use quality::QualityAnalyzer;
pub use reporting::AnalysisReport;
pub use types::{CleaningAction, CleaningSummary, IssueReport, QualityIssue};

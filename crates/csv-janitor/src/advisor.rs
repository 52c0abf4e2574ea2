//! Rule-based suggestion of cleaning actions from an issue report, plus
//! parsing of the user's selection among them.

use crate::error::{JanitorError, Result};
use crate::types::{CleaningAction, IssueReport};

/// Map an issue report to an ordered list of suggested cleaning actions.
///
/// Duplicate removal is suggested before gap-filling when both apply; an
/// empty report yields no suggestions.
pub fn suggest(report: &IssueReport) -> Vec<CleaningAction> {
    let mut actions = Vec::new();

    if report.has_duplicate_values() {
        actions.push(CleaningAction::RemoveDuplicates);
    }
    if report.has_missing_values() {
        actions.push(CleaningAction::FillMissing);
    }

    actions
}

/// Parse a comma-separated list of 1-based step numbers against the
/// suggested actions.
///
/// Malformed input fails with `InvalidSelection`; a well-formed number
/// outside the suggested range fails with `UnknownAction`. Repeated numbers
/// are collapsed, keeping the first occurrence.
pub fn parse_selection(input: &str, suggested: &[CleaningAction]) -> Result<Vec<CleaningAction>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(JanitorError::InvalidSelection(input.to_string()));
    }

    let mut selected = Vec::new();
    for part in trimmed.split(',') {
        let part = part.trim();
        let index: usize = part
            .parse()
            .map_err(|_| JanitorError::InvalidSelection(part.to_string()))?;

        if index == 0 || index > suggested.len() {
            return Err(JanitorError::UnknownAction(format!("step {index}")));
        }

        let action = suggested[index - 1];
        if !selected.contains(&action) {
            selected.push(action);
        }
    }

    Ok(selected)
}

use super::domain::{InvalidInput, OutfitRecord};
use crate::source::DataUnavailable;

/// Result of one catalog query. Only `Matched` carries records; the other
/// variants say why the list is empty.
#[derive(Debug)]
pub enum MatchOutcome {
    Matched(Vec<OutfitRecord>),
    NoMatch,
    InvalidInput(InvalidInput),
    DataUnavailable(DataUnavailable),
}

impl MatchOutcome {
    pub(super) fn from_records(records: Vec<OutfitRecord>) -> Self {
        if records.is_empty() {
            MatchOutcome::NoMatch
        } else {
            MatchOutcome::Matched(records)
        }
    }

    pub fn records(&self) -> &[OutfitRecord] {
        match self {
            MatchOutcome::Matched(records) => records.as_slice(),
            _ => &[],
        }
    }

    pub fn into_records(self) -> Vec<OutfitRecord> {
        match self {
            MatchOutcome::Matched(records) => records,
            _ => Vec::new(),
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, MatchOutcome::Matched(_))
    }

    pub fn label(&self) -> &'static str {
        match self {
            MatchOutcome::Matched(_) => "matched",
            MatchOutcome::NoMatch => "no_match",
            MatchOutcome::InvalidInput(_) => "invalid_input",
            MatchOutcome::DataUnavailable(_) => "data_unavailable",
        }
    }

    /// Diagnostic for the conditions that are not plain results.
    pub fn condition(&self) -> Option<String> {
        match self {
            MatchOutcome::InvalidInput(err) => Some(err.to_string()),
            MatchOutcome::DataUnavailable(err) => Some(err.to_string()),
            MatchOutcome::Matched(_) | MatchOutcome::NoMatch => None,
        }
    }
}

//! Outfit catalog matching.
//!
//! A query selects the rows whose gender, body shape and theme equal the
//! request (ignoring case) and whose height and weight ranges contain the
//! requested measurements, bounds included. Results keep catalog order.

mod domain;
mod outcome;
mod parser;
mod table;

#[cfg(test)]
mod tests;

pub use domain::{InvalidInput, OutfitRecord, PreferenceForm, PreferenceQuery, SUPPORTED_THEMES};
pub use outcome::MatchOutcome;
pub use table::{OutfitTable, RejectedRow};

use crate::source::{DataUnavailable, TableSource};
use tracing::{debug, info, warn};

/// Answers preference queries against the outfit table, re-reading it per call.
#[derive(Debug, Clone)]
pub struct OutfitMatcher {
    source: TableSource,
}

impl OutfitMatcher {
    pub fn new(source: TableSource) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &TableSource {
        &self.source
    }

    pub fn load(&self) -> Result<OutfitTable, DataUnavailable> {
        parser::parse_table(&self.source)
    }

    pub fn filter(&self, form: &PreferenceForm) -> MatchOutcome {
        let query = match form.parse() {
            Ok(query) => query,
            Err(err) => {
                info!(error = %err, "outfit query rejected");
                return MatchOutcome::InvalidInput(err);
            }
        };

        let table = match self.load() {
            Ok(table) => table,
            Err(err) => {
                warn!(source = %self.source.describe(), error = %err, "outfit table unavailable");
                return MatchOutcome::DataUnavailable(err);
            }
        };

        let matches = table.matching(&query);
        debug!(
            scanned = table.len(),
            rejected = table.rejected().len(),
            matched = matches.len(),
            "outfit query evaluated"
        );

        MatchOutcome::from_records(matches)
    }

    /// Five-argument form of [`OutfitMatcher::filter`] that only keeps the
    /// records; every condition degrades to an empty list.
    pub fn recommend(
        &self,
        height: &str,
        weight: &str,
        gender: &str,
        body_shape: &str,
        theme: &str,
    ) -> Vec<OutfitRecord> {
        self.filter(&PreferenceForm::new(
            height, weight, gender, body_shape, theme,
        ))
        .into_records()
    }
}

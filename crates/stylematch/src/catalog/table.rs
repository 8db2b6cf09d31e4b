use super::domain::{OutfitRecord, PreferenceQuery};

/// One consistent snapshot of the outfit catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutfitTable {
    records: Vec<OutfitRecord>,
    rejected: Vec<RejectedRow>,
}

impl OutfitTable {
    pub(super) fn new(records: Vec<OutfitRecord>, rejected: Vec<RejectedRow>) -> Self {
        Self { records, rejected }
    }

    pub fn records(&self) -> &[OutfitRecord] {
        &self.records
    }

    /// Rows set aside because their bounds could not be read.
    pub fn rejected(&self) -> &[RejectedRow] {
        &self.rejected
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Matching rows in table order.
    pub fn matching(&self, query: &PreferenceQuery) -> Vec<OutfitRecord> {
        self.records
            .iter()
            .filter(|record| record.matches(query))
            .cloned()
            .collect()
    }
}

/// Catalog row excluded from matching, with the line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRow {
    pub line: u64,
    pub outfit: String,
    pub reason: String,
}

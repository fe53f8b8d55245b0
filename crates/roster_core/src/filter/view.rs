//! Visible-list derivation.
//!
//! # Invariants
//! - Output keeps store order.
//! - Never mutates input and never fails; no match yields an empty list.

use crate::filter::criteria::FilterCriteria;
use crate::model::user::UserRecord;

/// Returns copies of the records kept by `criteria`, in store order.
pub fn visible_records(records: &[UserRecord], criteria: &FilterCriteria) -> Vec<UserRecord> {
    let needle = criteria.query.to_lowercase();
    records
        .iter()
        .filter(|record| matches_folded(record, criteria, &needle))
        .cloned()
        .collect()
}

/// Returns whether one record passes all three criteria.
pub fn matches(record: &UserRecord, criteria: &FilterCriteria) -> bool {
    matches_folded(record, criteria, &criteria.query.to_lowercase())
}

fn matches_folded(record: &UserRecord, criteria: &FilterCriteria, needle: &str) -> bool {
    criteria.status.accepts(record.completed)
        && criteria.city.accepts(&record.country)
        && (needle.is_empty() || record.search_text().to_lowercase().contains(needle))
}

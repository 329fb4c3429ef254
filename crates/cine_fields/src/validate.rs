//! Record completeness validation.

use crate::types::{CanonicalRecord, FieldLabel, NOT_AVAILABLE};

/// Returns the labels of every missing field, always in [`FieldLabel::ALL`]
/// order regardless of which fields failed. A field is missing when it trims
/// to empty or holds the [`NOT_AVAILABLE`] sentinel. An empty result means
/// the record is complete.
pub fn missing_fields(record: &CanonicalRecord) -> Vec<FieldLabel> {
    FieldLabel::ALL
        .into_iter()
        .filter(|label| is_missing(record.field(*label)))
        .collect()
}

fn is_missing(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty() || trimmed == NOT_AVAILABLE
}

//! The catalogue query engine: free-text filter and multi-field sort.
//!
//! Both operations are pure. They take a borrowed slice and hand back a fresh
//! vector; the input collection is never touched. Callers compose them as
//! sort(filter(records)) so the filter narrows first and the sort only
//! reorders the narrowed set, which keeps `|sort(filter(X))| == |filter(X)|`
//! for the visible list.

use crate::types::SortDirection;
use crate::vehicle::{SortField, SortSpec, VehicleRecord};
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("unknown sort field '{0}'")]
    UnknownSortField(String),

    #[error("duplicate vehicle id '{0}' in catalogue")]
    DuplicateVehicleId(String),
}

/// Case-insensitive substring filter across every record field.
///
/// A term that trims to empty returns the whole collection in its original
/// order. Otherwise a record survives when any of its fields, rendered to
/// decimal text, contains the lower-cased term. Relative order is preserved.
pub fn filter(records: &[VehicleRecord], search_term: &str) -> Vec<VehicleRecord> {
    let needle = search_term.trim();
    if needle.is_empty() {
        return records.to_vec();
    }

    // normalize once per call, not per record
    let needle = needle.to_lowercase();

    records
        .iter()
        .filter(|record| record.matches(&needle))
        .cloned()
        .collect()
}

/// Ascending comparison on a single field. Numeric fields compare
/// numerically, text fields compare case-insensitively.
fn compare_on(field: SortField, a: &VehicleRecord, b: &VehicleRecord) -> Ordering {
    match field {
        SortField::Make => a.make.to_lowercase().cmp(&b.make.to_lowercase()),
        SortField::Model => a.model.to_lowercase().cmp(&b.model.to_lowercase()),
        SortField::Year => a.year.cmp(&b.year),
        SortField::Price => a.price.cmp(&b.price),
        SortField::Mileage => a.mileage.cmp(&b.mileage),
        SortField::Colour => a.colour.to_lowercase().cmp(&b.colour.to_lowercase()),
    }
}

/// Sort into a fresh vector. Descending is the reverse of the ascending
/// ordering, and the underlying sort is stable, so ties keep their relative
/// order across repeated calls.
pub fn sort(
    records: &[VehicleRecord],
    field: SortField,
    direction: SortDirection,
) -> Vec<VehicleRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| direction.apply(compare_on(field, a, b)));
    sorted
}

pub fn sort_with(records: &[VehicleRecord], spec: &SortSpec) -> Vec<VehicleRecord> {
    sort(records, spec.field, spec.direction)
}

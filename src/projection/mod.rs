// ============================================================================
// View projection - pure derivation of the displayed sequence
// ============================================================================

pub mod debounce;

pub use debounce::DebounceAfterFirst;

use crate::core::{ElementRecord, Field};
use std::cmp::Ordering;

/// Sort direction for one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// A requested ordering: one column plus a direction. `None` at the call
/// sites means the store's natural (position) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub field: Field,
    pub direction: SortDirection,
}

impl SortState {
    pub fn ascending(field: Field) -> Self {
        Self { field, direction: SortDirection::Ascending }
    }

    pub fn descending(field: Field) -> Self {
        Self { field, direction: SortDirection::Descending }
    }
}

/// Whether the filter text occurs as a case-sensitive substring of at least
/// one of the record's rendered cell values. An empty filter matches
/// everything.
pub fn matches_filter(record: &ElementRecord, filter: &str) -> bool {
    if filter.is_empty() {
        return true;
    }
    Field::ALL.iter().any(|&field| record.render(field).contains(filter))
}

/// Compares two records by one column: numeric comparison for numeric
/// columns, lexicographic for string columns.
pub fn compare_by(field: Field, a: &ElementRecord, b: &ElementRecord) -> Ordering {
    match field {
        Field::Position => a.position.cmp(&b.position),
        Field::Name => a.name.cmp(&b.name),
        Field::Symbol => a.symbol.cmp(&b.symbol),
        // weights are finite in this domain, so the fallback never decides
        Field::Weight => a.weight.partial_cmp(&b.weight).unwrap_or(Ordering::Equal),
    }
}

/// Derives the displayed sequence from a snapshot, a filter string, and an
/// optional sort. Pure: no side effects, deterministic in its inputs.
///
/// Filtering keeps records matching [`matches_filter`]. Sorting is stable,
/// so records with equal keys keep their relative snapshot order in both
/// directions. Without a sort the snapshot order is preserved.
pub fn project(
    records: &[ElementRecord],
    filter: &str,
    sort: Option<SortState>,
) -> Vec<ElementRecord> {
    let mut rows: Vec<ElementRecord> = records
        .iter()
        .filter(|record| matches_filter(record, filter))
        .cloned()
        .collect();

    if let Some(SortState { field, direction }) = sort {
        rows.sort_by(|a, b| {
            let ordering = compare_by(field, a, b);
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }

    rows
}

// ============================================================================
// View projection tests
// ============================================================================
//
// Covers the pure projection function:
// - case-sensitive substring filtering over all rendered cell values
// - filter idempotence
// - stable sorting in both directions, ties kept in snapshot order
// - natural order when no sort is set
//
// ============================================================================

use elementdb::{ElementRecord, Field, SortState, project, seed_elements};

#[test]
fn empty_filter_keeps_every_record_in_order() {
    let seed = seed_elements();
    let rows = project(&seed, "", None);
    assert_eq!(rows, seed);
}

#[test]
fn filter_matches_substring_of_any_rendered_cell() {
    let seed = seed_elements();

    // "He" only occurs in Helium's name and symbol
    let rows = project(&seed, "He", None);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Helium");

    // "10" occurs in Boron's weight (10.811), Carbon's weight (12.0107),
    // and Neon's position (10)
    let rows = project(&seed, "10", None);
    let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Boron", "Carbon", "Neon"]);
}

#[test]
fn filter_is_case_sensitive() {
    let seed = seed_elements();
    assert!(project(&seed, "he", None).is_empty());
    assert_eq!(project(&seed, "He", None).len(), 1);
}

#[test]
fn filtering_is_idempotent() {
    let seed = seed_elements();
    let once = project(&seed, "o", None);
    let twice = project(&once, "o", None);
    assert_eq!(once, twice);
}

#[test]
fn sort_by_name_both_directions() {
    let seed = seed_elements();

    let ascending = project(&seed, "", Some(SortState::ascending(Field::Name)));
    assert_eq!(ascending[0].name, "Beryllium");
    assert_eq!(ascending[9].name, "Oxygen");

    let descending = project(&seed, "", Some(SortState::descending(Field::Name)));
    assert_eq!(descending[0].name, "Oxygen");
    assert_eq!(descending[9].name, "Beryllium");
}

#[test]
fn sort_by_weight_is_numeric_not_lexicographic() {
    let seed = seed_elements();
    let rows = project(&seed, "", Some(SortState::descending(Field::Weight)));
    assert_eq!(rows[0].name, "Neon");
    assert_eq!(rows[9].name, "Hydrogen");
}

#[test]
fn sort_is_stable_for_equal_keys_in_both_directions() {
    let records = vec![
        ElementRecord::new(1, "Alpha", 5.0, "A"),
        ElementRecord::new(2, "Bravo", 5.0, "B"),
        ElementRecord::new(3, "Charlie", 1.0, "C"),
        ElementRecord::new(4, "Delta", 5.0, "D"),
    ];

    let ascending = project(&records, "", Some(SortState::ascending(Field::Weight)));
    let names: Vec<&str> = ascending.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Charlie", "Alpha", "Bravo", "Delta"]);

    let descending = project(&records, "", Some(SortState::descending(Field::Weight)));
    let names: Vec<&str> = descending.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "Bravo", "Delta", "Charlie"]);
}

#[test]
fn no_sort_preserves_snapshot_order_after_filtering() {
    let seed = seed_elements();
    let rows = project(&seed, "n", None);
    let positions: Vec<u32> = rows.iter().map(|r| r.position).collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
}

#[test]
fn filter_and_sort_compose() {
    let seed = seed_elements();
    // names containing a lowercase "o": Hydrogen, Boron, Carbon, Nitrogen,
    // Fluorine, Neon (not Oxygen, the match is case-sensitive)
    let rows = project(&seed, "o", Some(SortState::ascending(Field::Weight)));
    assert!(rows.len() >= 2);
    for pair in rows.windows(2) {
        assert!(pair[0].weight <= pair[1].weight);
    }
}

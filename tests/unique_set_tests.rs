//! Unit tests for `UniqueSet`.

use orderly::{Collection, CollectionError, ErrorKind, SortDirection, UniqueSet, set_of};
use rstest::rstest;

// =============================================================================
// Uniqueness and construction
// =============================================================================

#[rstest]
fn test_construction_keeps_first_occurrence_order() {
    let set = set_of([5, 3, 5, 1, 3, 5]);
    assert_eq!(set.as_slice(), &[5, 3, 1]);
}

#[rstest]
fn test_uniqueness_is_by_normalized_key() {
    let set = set_of(["a".to_string(), "b".to_string(), "a".to_string()]);
    assert_eq!(set.len(), 2);
    assert!(set.contains(&"a".to_string()));
}

#[rstest]
fn test_add_and_push_all_silently_drop_duplicates() {
    let mut set = set_of([1, 2]);
    set.add(1);
    set.push_all([2, 3, 3, 4]);
    assert_eq!(set.as_slice(), &[1, 2, 3, 4]);
}

// =============================================================================
// Replace-in-place semantics
// =============================================================================

#[rstest]
fn test_set_with_fresh_value_replaces() {
    let mut set = set_of([1, 2, 3]);
    set.set(1, 4).unwrap();
    assert_eq!(set.as_slice(), &[1, 4, 3]);
}

#[rstest]
fn test_set_noop_only_when_occurrence_is_at_index() {
    let mut set = set_of([1, 2, 3, 4]);
    // 4 exists at index 3, so writing it at index 1 is a conflict
    let error = set.set(1, 4).unwrap_err();
    assert_eq!(error, CollectionError::DuplicateValue);
    assert_eq!(error.kind(), ErrorKind::Conflict);

    // Writing 4 where it already sits is fine
    set.set(3, 4).unwrap();
    assert_eq!(set.as_slice(), &[1, 2, 3, 4]);
}

#[rstest]
fn test_set_out_of_range() {
    let mut set = set_of([1]);
    assert_eq!(
        set.set(3, 2),
        Err(CollectionError::IndexOutOfRange { index: 3, length: 1 })
    );
}

// =============================================================================
// Removal keeps both structures in lock-step
// =============================================================================

#[rstest]
fn test_remove_then_lookup_uses_rebuilt_indices() {
    let mut set = set_of(["a", "b", "c", "d"]);
    set.remove(&"b").unwrap();
    assert_eq!(set.as_slice(), &["a", "c", "d"]);
    assert_eq!(set.get(1), Ok(&"c"));

    // Membership map still agrees with the shifted sequence
    set.remove(&"d").unwrap();
    assert_eq!(set.as_slice(), &["a", "c"]);
    assert!(!set.contains(&"d"));
}

#[rstest]
fn test_remove_missing_value_fails() {
    let mut set = set_of([1, 2]);
    let error = set.remove(&7).unwrap_err();
    assert_eq!(error, CollectionError::ValueNotFound);
    assert_eq!(error.kind(), ErrorKind::NotFound);
}

#[rstest]
fn test_unset_removes_by_index() {
    let mut set = set_of([1, 2, 3]);
    assert_eq!(set.unset(0), Ok(1));
    assert_eq!(set.as_slice(), &[2, 3]);
    assert!(!set.contains(&1));
}

#[rstest]
fn test_pop_and_shift_on_empty_fail() {
    let mut set: UniqueSet<i32> = UniqueSet::new();
    assert_eq!(set.pop(), Err(CollectionError::Empty));
    assert_eq!(set.shift(), Err(CollectionError::Empty));
}

#[rstest]
fn test_removed_value_can_be_readded() {
    let mut set = set_of([1, 2, 3]);
    set.shift().unwrap();
    set.add(1);
    assert_eq!(set.as_slice(), &[2, 3, 1]);
}

// =============================================================================
// Sorting and transforms
// =============================================================================

#[rstest]
fn test_sort_directions() {
    let mut set = set_of([2, 3, 1]);
    set.sort(SortDirection::Descending);
    assert_eq!(set.as_slice(), &[3, 2, 1]);
    assert!(set.contains(&1));
}

#[rstest]
fn test_map_reindexes_and_collapses() {
    let set = set_of([1, 2, 3, 4, 5]);
    let collapsed = set.map(|value, _| value / 2);
    assert_eq!(collapsed.as_slice(), &[0, 1, 2]);
}

#[rstest]
fn test_filter_reindexes() {
    let set = set_of([1, 2, 3, 4]);
    let even = set.filter(|value, _| value % 2 == 0);
    assert_eq!(even.as_slice(), &[2, 4]);
    assert_eq!(even.get(0), Ok(&2));
}

#[rstest]
fn test_apply_replaces_each_value() {
    let mut set = set_of([1, 2, 3]);
    set.apply(|value, _| value * 10).unwrap();
    assert_eq!(set.as_slice(), &[10, 20, 30]);
}

#[rstest]
fn test_apply_conflict_stops_with_error() {
    let mut set = set_of([1, 2, 3]);
    assert_eq!(
        set.apply(|_, _| 42),
        Err(CollectionError::DuplicateValue)
    );
}

// =============================================================================
// Conversions
// =============================================================================

#[rstest]
fn test_round_trip_through_list() {
    let set = set_of([3, 1, 2]);
    let list = set.to_list();
    assert_eq!(list.as_slice(), &[3, 1, 2]);
    assert_eq!(list.to_set(), set);
}

#[rstest]
fn test_keys_are_positions() {
    let set = set_of(["x", "y"]);
    assert_eq!(set.keys().as_slice(), &[0, 1]);
}

#[rstest]
fn test_chunk_preserves_order() {
    let set = set_of([1, 2, 3, 4, 5]);
    let chunks = set.chunk(2).unwrap();
    assert_eq!(chunks.len(), 3);
    assert_eq!(chunks.get(0).unwrap().as_slice(), &[1, 2]);
    assert_eq!(chunks.get(2).unwrap().as_slice(), &[5]);
}

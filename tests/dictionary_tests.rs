//! Unit tests for `Dictionary`, including heterogeneous `Key` keying.

use orderly::{
    Collection, CollectionError, Dictionary, ErrorKind, Key, ObjectToken, Pair, SortDirection,
    dictionary_of, list_of, set_of,
};
use rstest::rstest;

// =============================================================================
// Keyed access
// =============================================================================

#[rstest]
fn test_set_upserts_in_place() {
    let mut dictionary = dictionary_of([("a", 1), ("b", 2)]);
    dictionary.set("a", 10);
    dictionary.set("c", 3);

    let keys: Vec<&&str> = dictionary.iter().map(|(key, _)| key).collect();
    assert_eq!(keys, [&"a", &"b", &"c"]);
    assert_eq!(dictionary.get(&"a"), Ok(&10));
}

#[rstest]
fn test_get_and_unset_fail_on_missing_key() {
    let mut dictionary = dictionary_of([("a", 1)]);
    let error = dictionary.get(&"missing").unwrap_err();
    assert_eq!(error.kind(), ErrorKind::NotFound);
    assert_eq!(dictionary.unset(&"missing"), Err(CollectionError::KeyNotFound));
}

#[rstest]
fn test_get_mut_updates_value_in_place() {
    let mut dictionary = dictionary_of([("hits", 1)]);
    *dictionary.get_mut(&"hits").unwrap() += 1;
    assert_eq!(dictionary.get(&"hits"), Ok(&2));
}

#[rstest]
fn test_unset_last_entry_then_interior() {
    let mut dictionary = dictionary_of([("a", 1), ("b", 2), ("c", 3)]);
    assert_eq!(dictionary.unset(&"c"), Ok(3));
    assert_eq!(dictionary.unset(&"a"), Ok(1));
    assert_eq!(dictionary.get(&"b"), Ok(&2));
    assert_eq!(dictionary.len(), 1);
}

#[rstest]
fn test_pop_and_shift_return_values_not_pairs() {
    let mut dictionary = dictionary_of([("a", 1), ("b", 2), ("c", 3)]);
    assert_eq!(dictionary.pop(), Ok(3));
    assert_eq!(dictionary.shift(), Ok(1));
    assert!(!dictionary.contains_key(&"a"));
    assert!(dictionary.contains_key(&"b"));
}

// =============================================================================
// combine
// =============================================================================

#[rstest]
fn test_combine_pairs_positionally() {
    let dictionary =
        Dictionary::combine(&set_of(["one", "two", "three"]), &list_of([1, 2, 3])).unwrap();
    assert_eq!(dictionary.get(&"two"), Ok(&2));
    assert_eq!(dictionary.len(), 3);
}

#[rstest]
fn test_combine_rejects_mismatched_lengths() {
    let error =
        Dictionary::combine(&set_of(["only"]), &list_of([1, 2])).unwrap_err();
    assert_eq!(
        error,
        CollectionError::KeyValueCountMismatch { keys: 1, values: 2 }
    );
    assert_eq!(error.kind(), ErrorKind::TypeMismatch);
}

// =============================================================================
// Heterogeneous keys
// =============================================================================

#[rstest]
fn test_key_enum_mixes_kinds_in_one_dictionary() {
    let mut dictionary: Dictionary<Key, &str> = Dictionary::new();
    dictionary.set(Key::from("name"), "text key");
    dictionary.set(Key::from(7_i64), "integer key");
    dictionary.set(Key::from(true), "bool key");
    dictionary.set(Key::Null, "null key");
    dictionary.set(Key::from(vec![Key::from(1_i64), Key::from(2_i64)]), "composite key");

    assert_eq!(dictionary.len(), 5);
    assert_eq!(dictionary.get(&Key::from("name")), Ok(&"text key"));
    assert_eq!(dictionary.get(&Key::Null), Ok(&"null key"));
    assert_eq!(
        dictionary.get(&Key::from(vec![Key::from(1_i64), Key::from(2_i64)])),
        Ok(&"composite key")
    );
}

#[rstest]
fn test_numeric_and_textual_keys_share_canonical_form() {
    let mut dictionary: Dictionary<Key, i32> = Dictionary::new();
    dictionary.set(Key::from(5_i64), 1);
    dictionary.set(Key::from("5"), 2);
    assert_eq!(dictionary.len(), 1);
    assert_eq!(dictionary.get(&Key::from(5_i64)), Ok(&2));
}

#[rstest]
fn test_object_token_keys_are_identity_keys() {
    let first = ObjectToken::new();
    let second = ObjectToken::new();

    let mut dictionary: Dictionary<Key, i32> = Dictionary::new();
    dictionary.set(Key::from(first.clone()), 1);
    dictionary.set(Key::from(second), 2);

    assert_eq!(dictionary.len(), 2);
    assert_eq!(dictionary.get(&Key::from(first)), Ok(&1));
}

// =============================================================================
// Transforms
// =============================================================================

#[rstest]
fn test_apply_preserves_positions() {
    let mut dictionary = dictionary_of([("a", 1), ("b", 2)]);
    dictionary.apply(|value, key| if *key == "a" { value + 100 } else { *value });
    assert_eq!(dictionary.get(&"a"), Ok(&101));
    assert_eq!(dictionary.get(&"b"), Ok(&2));
}

#[rstest]
fn test_map_keeps_original_keys() {
    let dictionary = dictionary_of([("a", 1), ("b", 2)]);
    let labeled = dictionary.map(|value, key| format!("{key}={value}"));
    assert_eq!(labeled.get(&"b"), Ok(&"b=2".to_string()));
}

#[rstest]
fn test_filter_keeps_original_keys() {
    let dictionary = dictionary_of([("a", 1), ("b", 2), ("c", 3)]);
    let odd = dictionary.filter(|value, _| value % 2 == 1);
    assert_eq!(odd.len(), 2);
    assert!(odd.contains_key(&"a"));
    assert!(!odd.contains_key(&"b"));
}

#[rstest]
fn test_sort_by_pair_comparator() {
    let mut dictionary = dictionary_of([("b", 2), ("a", 1), ("c", 3)]);
    dictionary.sort_by(|left, right| left.key().cmp(right.key()));
    let keys: Vec<&&str> = dictionary.iter().map(|(key, _)| key).collect();
    assert_eq!(keys, [&"a", &"b", &"c"]);
    assert_eq!(dictionary.get(&"c"), Ok(&3));
}

#[rstest]
fn test_sort_by_value_direction() {
    let mut dictionary = dictionary_of([("a", 2), ("b", 1), ("c", 3)]);
    dictionary.sort(SortDirection::Descending);
    let values: Vec<&i32> = dictionary.iter().map(|(_, value)| value).collect();
    assert_eq!(values, [&3, &2, &1]);
}

#[rstest]
fn test_chunk_preserves_keys_and_order() {
    let dictionary = dictionary_of([("a", 1), ("b", 2), ("c", 3)]);
    let chunks = dictionary.chunk(2).unwrap();
    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks.get(0).unwrap().get(&"a"), Ok(&1));
    assert_eq!(chunks.get(1).unwrap().get(&"c"), Ok(&3));
}

// =============================================================================
// Conversions and pairs
// =============================================================================

#[rstest]
fn test_keys_values_and_to_dictionary_copy() {
    let dictionary = dictionary_of([("a", 1), ("b", 2)]);
    assert_eq!(dictionary.keys(), set_of(["a", "b"]));
    assert_eq!(dictionary.values(), list_of([1, 2]));

    let copy = dictionary.to_dictionary();
    assert_eq!(copy, dictionary);

    let mut copy = copy;
    copy.set("c", 3);
    assert_eq!(dictionary.len(), 2);
}

#[rstest]
fn test_pairs_are_immutable_tuples() {
    let dictionary = dictionary_of([("a", 1)]);
    let pair = &dictionary.as_pairs()[0];
    assert_eq!(pair, &Pair::new("a", 1));
    let renamed = pair.with_key("z");
    assert_eq!(renamed, Pair::new("z", 1));
    assert_eq!(dictionary.as_pairs()[0].key(), &"a");
}

#[rstest]
fn test_owned_iteration_yields_insertion_order() {
    let dictionary = dictionary_of([("a", 1), ("b", 2)]);
    let entries: Vec<(&str, i32)> = dictionary.into_iter().collect();
    assert_eq!(entries, [("a", 1), ("b", 2)]);
}

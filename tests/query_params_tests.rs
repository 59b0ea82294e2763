#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Scalar operations and the order-preserving merge algorithm.
///
/// The multi-value grow/shrink scenarios mirror the situations a typed
/// router-facing layer hits in practice: repeated keys interleaved with
/// unrelated ones, updated without disturbing anything else.
use quaere::{Datatype, Integer, Multiple, QueryParams, Text};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

#[test]
fn test_delete_preserves_other_keys() {
    let params = QueryParams::parse("a=1&k=x&a=2&k=y&b=3");
    let updated = params.delete("a");
    assert_eq!(updated.to_query_string(), "k=x&k=y&b=3");
}

#[test]
fn test_set_then_get_round_trip() {
    let params = QueryParams::new().set("n", &Integer, Some(&42));
    let read = params.get("n", &Integer).unwrap();
    assert_eq!(read, 42);
    assert_eq!(
        Integer.serialize(Some(&read)),
        params.get_all("n").to_vec()
    );
}

#[test]
fn test_multi_value_grow() {
    let params = QueryParams::parse("tag=first&other=hey&tag=second&tag=third");
    let tags = Multiple::new(Text);
    let grown = params.set(
        "tag",
        &tags,
        Some(&strings(&["first", "second", "third", "fourth"])),
    );
    assert_eq!(
        grown.to_query_string(),
        "tag=first&other=hey&tag=second&tag=third&tag=fourth"
    );
}

#[test]
fn test_multi_value_shrink_then_sort() {
    let params = QueryParams::parse("tag=first&other=hey&tag=second&tag=third&tag=fourth");
    let tags = Multiple::new(Text);
    let shrunk = params.set("tag", &tags, Some(&strings(&["a", "b"])));
    assert_eq!(shrunk.to_query_string(), "tag=a&other=hey&tag=b");
    assert_eq!(shrunk.sort().to_query_string(), "other=hey&tag=a&tag=b");
}

#[test]
fn test_occurrence_count_invariant() {
    // n = 3 original occurrences of k, interleaved with other keys
    let params = QueryParams::parse("k=1&x=a&k=2&y=b&k=3");
    let multi = Multiple::new(Text);

    // m > n: first n slots keep their position, extras go at the end
    let grown = params.set("k", &multi, Some(&strings(&["p", "q", "r", "s", "t"])));
    assert_eq!(grown.to_query_string(), "k=p&x=a&k=q&y=b&k=r&k=s&k=t");
    assert_eq!(grown.get_all("k").len(), 5);

    // m < n: the last n - m original slots are removed
    let shrunk = params.set("k", &multi, Some(&strings(&["p", "q"])));
    assert_eq!(shrunk.to_query_string(), "k=p&x=a&k=q&y=b");
    assert_eq!(shrunk.get_all("k").len(), 2);

    // m = 0: equivalent to delete, routed through the same merge path
    let emptied = params.set("k", &multi, None);
    assert_eq!(emptied.to_query_string(), "x=a&y=b");
}

#[test]
fn test_sort_is_idempotent() {
    let params = QueryParams::parse("z=1&a=2&z=3&a=4&m=5");
    let once = params.sort();
    let twice = once.sort();
    assert_eq!(once.to_query_string(), twice.to_query_string());
}

#[test]
fn test_sort_is_stable_for_duplicate_keys() {
    let params = QueryParams::parse("z=1&a=2&z=3&a=4");
    assert_eq!(params.sort().to_query_string(), "a=2&a=4&z=1&z=3");
}

#[test]
fn test_append_adds_trailing_entries() {
    let params = QueryParams::parse("a=1&b=2");
    let appended = params.append("a", &Integer, Some(&3));
    assert_eq!(appended.to_query_string(), "a=1&b=2&a=3");
}

#[test]
fn test_append_multi_value() {
    let params = QueryParams::parse("a=1");
    let tags = Multiple::new(Text);
    let appended = params.append("tag", &tags, Some(&strings(&["x", "y"])));
    assert_eq!(appended.to_query_string(), "a=1&tag=x&tag=y");
}

#[test]
fn test_get_conflates_absent_and_invalid() {
    let params = QueryParams::parse("a=hey");
    assert_eq!(params.get("a", &Integer), None);
    assert_eq!(params.get("missing", &Integer), None);
}

#[test]
fn test_try_get_distinguishes_absent_from_invalid() {
    let params = QueryParams::parse("a=hey");
    // absence parses as the missing value: a success
    assert_eq!(params.try_get("missing", &Integer), Ok(None));
    // malformed input is a structured failure
    let err = params.try_get("a", &Integer).unwrap_err();
    assert_eq!(err.property, "a");
    assert_eq!(err.datatype, "Integer");
    assert_eq!(err.values, strings(&["hey"]));
}

#[test]
fn test_has_requires_presence_and_valid_parse() {
    let params = QueryParams::parse("a=hey&b=2");
    assert!(params.has("b", &Integer));
    assert!(!params.has("a", &Integer));
    assert!(params.has("a", &Text));
    assert!(!params.has("missing", &Text));
}

#[test]
fn test_immutability_across_operations() {
    let original = QueryParams::parse("a=1&b=2&a=3");
    let _ = original.set("a", &Integer, Some(&9));
    let _ = original.delete("b");
    let _ = original.sort();
    let _ = original.append("c", &Integer, Some(&4));
    assert_eq!(original.to_query_string(), "a=1&b=2&a=3");
}

#[test]
fn test_single_valued_set_keeps_first_slot() {
    let params = QueryParams::parse("a=1&b=2&a=3");
    let updated = params.set("a", &Integer, Some(&7));
    // one serialized value replaces the first occurrence, the second is dropped
    assert_eq!(updated.to_query_string(), "a=7&b=2");
}

#[test]
fn test_construction_forms_normalize() {
    let from_str = QueryParams::parse("a=1&b=2");
    let from_pairs: QueryParams = vec![("a", "1"), ("b", "2")].into_iter().collect();
    let from_map: QueryParams = std::collections::BTreeMap::from([("a", "1"), ("b", "2")])
        .into_iter()
        .collect();
    let from_instance = QueryParams::from(from_str.as_search_params().clone());
    assert_eq!(from_str.to_query_string(), "a=1&b=2");
    assert_eq!(from_pairs.to_query_string(), "a=1&b=2");
    assert_eq!(from_map.to_query_string(), "a=1&b=2");
    assert_eq!(from_instance.to_query_string(), "a=1&b=2");
}

#[test]
fn test_display_matches_query_string() {
    let params = QueryParams::parse("a=1&name=J%C3%BCrgen");
    assert_eq!(params.to_string(), params.to_query_string());
}

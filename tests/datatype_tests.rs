#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Datatype behavior as seen through the typed facade.
use quaere::{Flag, Integer, Multiple, Number, OneOf, Pattern, QueryParams, Required, Text};

#[test]
fn test_single_valued_reads_are_first_wins() {
    let params = QueryParams::parse("a=1&a=2&a=3");
    assert_eq!(params.get("a", &Integer), Some(1));
    assert_eq!(params.get("a", &Text), Some("1".to_string()));
}

#[test]
fn test_multiple_reads_every_occurrence() {
    let params = QueryParams::parse("a=1&b=x&a=2&a=3");
    let numbers = Multiple::new(Integer);
    assert_eq!(params.get("a", &numbers), Some(vec![1, 2, 3]));
}

#[test]
fn test_multiple_fails_closed_through_facade() {
    let params = QueryParams::parse("a=1&a=nope&a=3");
    let numbers = Multiple::new(Integer);
    assert_eq!(params.get("a", &numbers), None);
    let err = params.try_get("a", &numbers).unwrap_err();
    assert_eq!(err.datatype, "Multiple<Integer>");
    assert_eq!(err.values.len(), 3);
}

#[test]
fn test_required_rejects_absent_key() {
    let params = QueryParams::parse("a=1");
    let required = Required::new(Integer);
    assert_eq!(params.try_get("a", &required), Ok(Some(1)));
    let err = params.try_get("missing", &required).unwrap_err();
    assert_eq!(err.datatype, "Required<Integer>");
    assert_eq!(err.error.message(), "missing required value");
}

#[test]
fn test_number_read_and_write() {
    let params = QueryParams::new().set("ratio", &Number, Some(&0.5));
    assert_eq!(params.to_query_string(), "ratio=0.5");
    assert_eq!(params.get("ratio", &Number), Some(0.5));
}

#[test]
fn test_flag_read_and_write() {
    let on = QueryParams::new().set("strict", &Flag, Some(&true));
    assert_eq!(on.to_query_string(), "strict=");
    assert_eq!(on.get("strict", &Flag), Some(true));

    let off = on.set("strict", &Flag, Some(&false));
    assert_eq!(off.to_query_string(), "");
    assert_eq!(off.get("strict", &Flag), Some(false));
}

#[test]
fn test_one_of_through_facade() {
    let order = OneOf::new(["asc", "desc"]);
    let params = QueryParams::parse("order=desc");
    assert_eq!(params.get("order", &order), Some("desc".to_string()));

    let bad = QueryParams::parse("order=sideways");
    assert_eq!(bad.get("order", &order), None);
    let err = bad.try_get("order", &order).unwrap_err();
    assert_eq!(err.datatype, "OneOf");
}

#[test]
fn test_pattern_through_facade() {
    let id = Pattern::new("^[0-9a-f]{8}$").unwrap();
    let params = QueryParams::parse("id=deadbeef&other=x");
    assert_eq!(params.get("id", &id), Some("deadbeef".to_string()));
    assert!(QueryParams::parse("id=nope").get("id", &id).is_none());
}

#[test]
fn test_update_cycle_round_trip() {
    // set then get, re-serialized, yields the same raw list
    let tags = Multiple::new(Text);
    let value = vec!["a b".to_string(), "c&d".to_string()];
    let params = QueryParams::new().set("tag", &tags, Some(&value));
    assert_eq!(params.get("tag", &tags), Some(value.clone()));
    assert_eq!(params.get_all("tag").to_vec(), value);
}

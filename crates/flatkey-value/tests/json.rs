use std::collections::BTreeMap;

use flatkey_value::Value;
use serde_json::json;

#[test]
fn json_scalars_map_onto_value_kinds() {
    assert_eq!(Value::from(json!(null)), Value::Null);
    assert_eq!(Value::from(json!(true)), Value::Bool(true));
    assert_eq!(Value::from(json!("hi")), Value::Str("hi".into()));
}

#[test]
fn json_numbers_classify_signed_then_unsigned_then_float() {
    assert_eq!(Value::from(json!(-3)), Value::Int(-3));
    assert_eq!(Value::from(json!(3)), Value::Int(3));
    assert_eq!(Value::from(json!(u64::MAX)), Value::Uint(u64::MAX));
    assert_eq!(Value::from(json!(2.5)), Value::Float(2.5));
}

#[test]
fn json_containers_become_seqs_and_maps() {
    assert_eq!(
        Value::from(json!([1, "a"])),
        Value::Seq(vec![Value::Int(1), Value::Str("a".into())])
    );

    let mut expected = BTreeMap::new();
    expected.insert("a".to_string(), Value::Int(1));
    expected.insert("b".to_string(), Value::Null);
    assert_eq!(Value::from(json!({"a": 1, "b": null})), Value::Map(expected));
}

#[test]
fn nested_json_converts_recursively() {
    let value = Value::from(json!({"user": {"tags": ["x"]}}));

    let mut tags = BTreeMap::new();
    tags.insert(
        "tags".to_string(),
        Value::Seq(vec![Value::Str("x".into())]),
    );
    let mut expected = BTreeMap::new();
    expected.insert("user".to_string(), Value::Map(tags));
    assert_eq!(value, Value::Map(expected));
}

use flatkey_core::{flatten, flatten_compare, FlattenOptions, Record, Value};

fn no_options() -> FlattenOptions {
    FlattenOptions::new()
}

fn user(id: i64, name: &str, email: &str) -> Value {
    Value::from(
        Record::new("User")
            .field("ID", id)
            .field("Name", name)
            .field("Email", email),
    )
}

#[test]
fn every_value_compares_equal_to_itself() {
    let values = [
        Value::Null,
        Value::from(42i64),
        Value::from("hello"),
        Value::from(vec![1i64, 2, 3]),
        user(1, "Alice", "alice@example.com"),
    ];
    for value in &values {
        assert!(flatten_compare(value, value, &no_options()));
    }
}

#[test]
fn field_declaration_order_does_not_matter() {
    let forward = Value::from(Record::new("User").field("Name", "Alice").field("Age", 30i64));
    let reversed = Value::from(Record::new("User").field("Age", 30i64).field("Name", "Alice"));
    assert!(flatten_compare(&forward, &reversed, &no_options()));
    assert_eq!(flatten(&forward, &no_options()), flatten(&reversed, &no_options()));
}

#[test]
fn differing_values_compare_unequal() {
    assert!(!flatten_compare(
        &user(1, "Alice", "a@example.com"),
        &user(2, "Alice", "a@example.com"),
        &no_options()
    ));
    assert!(!flatten_compare(&Value::from(1i64), &Value::from(2i64), &no_options()));
}

#[test]
fn nil_comparisons() {
    assert!(flatten_compare(&Value::Null, &Value::Null, &no_options()));
    assert!(flatten_compare(&Value::Null, &Value::null_reference(), &no_options()));
    assert!(!flatten_compare(&Value::Null, &Value::from("value"), &no_options()));
}

#[test]
fn references_compare_equal_to_their_targets() {
    let plain = user(1, "Alice", "a@example.com");
    let wrapped = Value::reference(user(1, "Alice", "a@example.com"));
    assert!(flatten_compare(&plain, &wrapped, &no_options()));
}

#[test]
fn include_filter_narrows_the_comparison() {
    let a = user(1, "Alice", "alice@example.com");
    let b = user(1, "Alice", "alice@different.com");

    let options = FlattenOptions::new().include_fields(["ID", "Name"]);
    assert!(flatten_compare(&a, &b, &options));

    let c = user(1, "Bob", "alice@example.com");
    assert!(!flatten_compare(&a, &c, &options));
}

#[test]
fn exclude_filter_ignores_the_differing_field() {
    let a = user(1, "Alice", "alice@example.com");
    let b = user(1, "Alice", "alice@different.com");

    let options = FlattenOptions::new().exclude_fields(["Email"]);
    assert!(flatten_compare(&a, &b, &options));

    let c = user(1, "Bob", "alice@example.com");
    assert!(!flatten_compare(&a, &c, &options));
}

#[test]
fn comparison_agrees_with_joined_canonical_forms() {
    let a = Value::from(vec!["x", "y"]);
    let b = Value::from(vec!["y", "x"]);

    // Same multiset of entries, so the joined canonical forms match.
    assert_eq!(flatten(&a, &no_options()), flatten(&b, &no_options()));
    assert!(flatten_compare(&a, &b, &no_options()));
}

#[test]
fn sequence_order_is_invisible_to_comparison() {
    let a = Value::from(vec![1i64, 2, 3]);
    let b = Value::from(vec![3i64, 2, 1]);
    assert!(flatten_compare(&a, &b, &no_options()));
}

#[test]
fn structurally_different_nestings_compare_unequal() {
    let mut tags = std::collections::BTreeMap::new();
    tags.insert("color", "red");
    let a = Value::from(Record::new("Item").field("Tags", tags));
    let b = Value::from(Record::new("Item").field("Tags", Value::Null));
    assert!(!flatten_compare(&a, &b, &no_options()));
}

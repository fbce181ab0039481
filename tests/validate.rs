//! End-to-end validation behavior over the default registry

use fieldgate::prelude::*;
use serde_json::json;

fn set_of(fields: &[(&str, FieldSpec)]) -> ConstraintSet {
    let mut builder = default_registry().set();
    for (name, spec) in fields {
        builder = builder.field(*name, spec.clone());
    }
    builder.build().expect("registered fields only")
}

#[test]
fn missing_required_field_names_the_field() {
    let set = set_of(&[("name", required())]);
    assert_eq!(
        set.validate(&json!({})).unwrap_err(),
        ValidationError::MissingRequiredField {
            field: "name".to_string()
        }
    );
}

#[test]
fn absent_optional_field_takes_its_default() {
    let set = set_of(&[
        ("name", required()),
        ("damage", optional().default_value(15)),
    ]);
    let output = set.validate(&json!({"name": "Water Wheel"})).unwrap();
    assert_eq!(output.get("damage"), Some(&json!(15)));
}

#[test]
fn unrecognized_fields_never_leak_or_fail() {
    let set = set_of(&[("name", required())]);
    let output = set
        .validate(&json!({"name": "Water Wheel", "attacks": [], "level": 3}))
        .unwrap();
    assert_eq!(output.len(), 1);
    assert!(output.contains_key("name"));
}

#[test]
fn valid_input_narrows_and_trims() {
    let set = set_of(&[("name", required()), ("id", required())]);
    let output = set
        .validate(&json!({"name": "  Water Wheel  ", "id": " 42 ", "noise": true}))
        .unwrap();
    assert_eq!(output.get("name"), Some(&json!("Water Wheel")));
    assert_eq!(output.get("id"), Some(&json!("42")));
    assert_eq!(output.len(), 2);
}

#[test]
fn revalidating_a_normalized_record_is_a_fixed_point() {
    let set = set_of(&[
        ("name", required()),
        ("roles", optional().default_value(json!([]))),
        (
            "embed_title",
            optional().allow(Value::Null).default_value(Value::Null),
        ),
    ]);
    let first = set
        .validate(&json!({"name": " Hinokami Kagura ", "extra": "dropped"}))
        .unwrap();
    let second = set.validate(&Value::Object(first.clone())).unwrap();
    assert_eq!(first, second);
}

#[test]
fn allow_listed_null_bypasses_the_string_rule() {
    let set = set_of(&[
        ("name", required()),
        ("embed_title", optional().allow(Value::Null)),
    ]);
    let output = set
        .validate(&json!({"name": "Water Wheel", "embed_title": null}))
        .unwrap();
    assert_eq!(output.get("embed_title"), Some(&Value::Null));
}

// === The five concrete scenarios ===

#[test]
fn scenario_name_and_id_pass_through() {
    let set = set_of(&[("name", required()), ("id", required())]);
    let output = set
        .validate(&json!({"name": "Fire Strike", "id": "123"}))
        .unwrap();
    assert_eq!(
        Value::Object(output),
        json!({"name": "Fire Strike", "id": "123"})
    );
}

#[test]
fn scenario_empty_body_reports_missing_name() {
    let set = set_of(&[("name", required())]);
    assert_eq!(
        set.validate(&json!({})).unwrap_err(),
        ValidationError::MissingRequiredField {
            field: "name".to_string()
        }
    );
}

#[test]
fn scenario_nullable_embed_title_round_trips() {
    let set = set_of(&[(
        "embed_title",
        optional().allow(Value::Null).default_value(Value::Null),
    )]);
    let output = set.validate(&json!({"embed_title": null})).unwrap();
    assert_eq!(output.get("embed_title"), Some(&Value::Null));
}

#[test]
fn scenario_fully_unrecognized_body_is_rejected_as_a_whole() {
    let set = set_of(&[("name", required())]);
    assert_eq!(
        set.validate(&json!({"unrelated_field": "x"})).unwrap_err(),
        ValidationError::EmptyValidatedObject
    );
}

#[test]
fn scenario_non_numeric_id_violates_the_pattern() {
    let set = set_of(&[("id", required())]);
    match set.validate(&json!({"id": "abc"})).unwrap_err() {
        ValidationError::FieldConstraintViolation { field, rule, .. } => {
            assert_eq!(field, "id");
            assert_eq!(rule, ViolatedRule::Pattern);
        }
        other => panic!("expected a pattern violation, got {:?}", other),
    }
}

// === Error body contract ===

#[test]
fn failures_serialize_to_the_client_body_shape() {
    let set = set_of(&[("id", required())]);
    let err = set.validate(&json!({"id": "abc"})).unwrap_err();
    let body = serde_json::to_value(err.to_response()).unwrap();
    assert_eq!(body["key"], "id");
    assert_eq!(body["type"], "pattern");

    let err = set.validate(&json!("just a string")).unwrap_err();
    let body = serde_json::to_value(err.to_response()).unwrap();
    assert_eq!(body["key"], "object");
    assert_eq!(body["type"], "object.base");
}

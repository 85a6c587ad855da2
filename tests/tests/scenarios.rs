//! Reference scenarios against `{"name": "John", "age": 30}`.
//!
//! Each scenario goes through the dynamic `mutate_value` entry point, the way
//! an untyped caller would use it, and checks the source is left untouched.

use mapmut_tests::prelude::*;
use pretty_assertions::assert_eq;

fn person() -> Value {
    Value::Map(mapping! { "name" => "John", "age" => 30 })
}

#[test]
fn test_add_city() {
    // GIVEN
    let d = person();

    // WHEN
    let result = mutate_value(&d, "add", Some("city"), Some("New York".into())).unwrap();

    // THEN
    assert_eq!(
        result,
        Value::Map(mapping! { "name" => "John", "age" => 30, "city" => "New York" })
    );
    assert_eq!(d, person());
}

#[test]
fn test_update_age() {
    let d = person();

    let result = mutate_value(&d, "update", Some("age"), Some(Value::Int(31))).unwrap();

    assert_eq!(result, Value::Map(mapping! { "name" => "John", "age" => 31 }));
    assert_eq!(d, person());
}

#[test]
fn test_delete_age() {
    let d = person();

    let result = mutate_value(&d, "delete", Some("age"), None).unwrap();

    assert_eq!(result, Value::Map(mapping! { "name" => "John" }));
    assert_eq!(d, person());
}

#[test]
fn test_invalid_operation() {
    let d = person();

    let err = expect_kind(
        mutate_value(&d, "invalid", None, None),
        MutationErrorKind::InvalidOperation,
    );

    assert!(err.to_string().contains("'invalid'"));
    assert_eq!(d, person());
}

#[test]
fn test_add_existing_key() {
    let d = person();

    let err = expect_kind(
        mutate_value(&d, "add", Some("name"), Some("Jane".into())),
        MutationErrorKind::DuplicateKey,
    );

    assert_eq!(err.to_string(), "Key \"name\" already exists. Use update to modify it");
    assert_eq!(d, person());
}

#[test]
fn test_update_missing_key() {
    let d = person();

    let err = expect_kind(
        mutate_value(&d, "update", Some("invalid_key"), Some("value".into())),
        MutationErrorKind::KeyNotFound,
    );

    assert_eq!(err.to_string(), "Key \"invalid_key\" not found. Use add to insert it");
    assert_eq!(d, person());
}

mod validation_order {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_type_mismatch_first() {
        for target in [Value::Null, Value::Int(3), Value::List(vec![person()])] {
            expect_kind(
                mutate_value(&target, "bogus", None, None),
                MutationErrorKind::TypeMismatch,
            );
        }
    }

    #[test]
    fn test_invalid_operation_before_missing_arguments() {
        expect_kind(
            mutate_value(&person(), "remove", None, None),
            MutationErrorKind::InvalidOperation,
        );
    }

    #[test]
    fn test_missing_key_before_missing_value() {
        let err = expect_kind(
            mutate_value(&person(), "add", None, None),
            MutationErrorKind::MissingArgument,
        );
        assert_eq!(err, MutationError::missing_argument("key", Operation::Add));
    }

    #[test]
    fn test_missing_value_for_add_and_update() {
        for tag in ["add", "update"] {
            let err = expect_kind(
                mutate_value(&person(), tag, Some("age"), None),
                MutationErrorKind::MissingArgument,
            );
            assert!(err.to_string().starts_with("Missing argument: value"));
        }
    }

    #[test]
    fn test_null_value_counts_as_missing() {
        for tag in ["add", "update"] {
            expect_kind(
                mutate_value(&person(), tag, Some("age"), Some(Value::Null)),
                MutationErrorKind::MissingArgument,
            );
        }
        let result = mutate_value(&person(), "delete", Some("age"), Some(Value::Null)).unwrap();
        assert_eq!(result, Value::Map(mapping! { "name" => "John" }));
    }

    #[test]
    fn test_missing_key_for_delete() {
        expect_kind(
            mutate_value(&person(), "delete", None, None),
            MutationErrorKind::MissingArgument,
        );
    }

    #[test]
    fn test_missing_arguments_checked_before_key_presence() {
        // "zip" is absent, but the missing value is reported first
        expect_kind(
            mutate_value(&person(), "update", Some("zip"), None),
            MutationErrorKind::MissingArgument,
        );
    }
}

#[test]
fn test_delete_ignores_supplied_value() {
    let result = mutate_value(&person(), "delete", Some("name"), Some(Value::Int(1))).unwrap();
    assert_eq!(result, Value::Map(mapping! { "age" => 30 }));
}

#[test]
fn test_delete_missing_key_has_no_suggestion() {
    let err = expect_kind(
        mutate_value(&person(), "delete", Some("city"), None),
        MutationErrorKind::KeyNotFound,
    );
    assert_eq!(err.to_string(), "Key \"city\" not found");
}

#[test]
fn test_nested_mapping_values_are_copied_shallowly() {
    // GIVEN a mapping holding another mapping
    let inner = mapping! { "street" => "Main St" };
    let d = Value::Map(mapping! { "address" => inner.clone() });

    // WHEN the outer key is replaced
    let result = mutate_value(&d, "update", Some("address"), Some("Elm St".into())).unwrap();

    // THEN the source still holds the original nested mapping
    assert_eq!(result, Value::Map(mapping! { "address" => "Elm St" }));
    assert_eq!(d.as_map().and_then(|m| m.get("address")), Some(&Value::Map(inner)));
}

#![cfg(feature = "serde")]

//! Integration tests for serde support.
//!
//! Values round-trip through JSON; groupings and errors serialize into a
//! readable shape.

use lambars_seq::collection::{GroupKey, collate_by_size, group_by_all};
use lambars_seq::error::SequenceError;
use lambars_seq::ordering::Value;
use rstest::rstest;
use rust_decimal_macros::dec;

// =============================================================================
// Value
// =============================================================================

#[rstest]
#[case(Value::Null)]
#[case(Value::Bool(true))]
#[case(Value::Int(-3))]
#[case(Value::Long(1 << 40))]
#[case(Value::Double(2.5))]
#[case(Value::Decimal(dec!(10.25)))]
#[case(Value::Char('x'))]
#[case(Value::from("text"))]
#[case(Value::List(vec![Value::Int(1), Value::Null]))]
fn test_value_json_roundtrip(#[case] value: Value) {
    let json = serde_json::to_string(&value).unwrap();
    let restored: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value, restored);
    assert_eq!(value.type_name(), restored.type_name());
}

// =============================================================================
// Grouping
// =============================================================================

#[rstest]
fn test_grouping_serializes_as_nested_objects() {
    let words = vec!["apple", "banana", "avocado", "blueberry"];
    let initial: GroupKey<'_, &str, String> = &|word| word[..1].to_string();
    let grouping = group_by_all(&words, &[initial]);
    let json = serde_json::to_value(&grouping).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "a": ["apple", "avocado"], "b": ["banana", "blueberry"] })
    );
}

#[rstest]
fn test_windows_serialize_as_arrays() {
    let windows = collate_by_size(&[1, 2, 3], 2);
    assert_eq!(serde_json::to_string(&windows).unwrap(), "[[1,2],[3]]");
}

// =============================================================================
// SequenceError
// =============================================================================

#[rstest]
fn test_error_serializes_its_fields() {
    let error = lambars_seq::collection::first(&Vec::<i32>::new()).unwrap_err();
    assert!(matches!(error, SequenceError::EmptyStructure(_)));
    let json = serde_json::to_value(&error).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "EmptyStructure": { "operation": "first", "structure": "List" } })
    );
}

//! Integration tests for the ordering rules and number-aware equality.

use lambars_seq::collection::{intersect, max, sort_in_place, to_sorted, unique};
use lambars_seq::impl_number_aware_by_ord;
use lambars_seq::ordering::{
    Callback, NumberAware, NumberAwareEquality, OrderingAdapter, OrderingSpec, Value,
};
use rstest::rstest;
use rust_decimal_macros::dec;
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct Version(u16, u16);

impl_number_aware_by_ord!(Version);

#[derive(Debug, Clone, PartialEq)]
struct Point {
    x: i32,
    y: f64,
}

fn point(x: i32, y: f64) -> Point {
    Point { x, y }
}

fn by_x<'a>() -> OrderingSpec<'a, Point> {
    OrderingSpec::comparator(|left: &Point, right: &Point| left.x.cmp(&right.x))
}

// =============================================================================
// NumberAwareEquality
// =============================================================================

#[rstest]
#[case(Value::Int(7), Value::Long(7))]
#[case(Value::Long(7), Value::Double(7.0))]
#[case(Value::Double(0.1), Value::Double(0.1))]
#[case(Value::Decimal(dec!(7.0)), Value::Int(7))]
#[case(Value::Char('q'), Value::from("q"))]
#[case(Value::Null, Value::Null)]
fn test_equal(#[case] left: Value, #[case] right: Value) {
    assert!(NumberAwareEquality::equal(&left, &right));
    assert!(NumberAwareEquality::equal(&right, &left));
}

#[rstest]
#[case(Value::Int(1), Value::from("1"))]
#[case(Value::Bool(true), Value::Int(1))]
#[case(Value::Null, Value::Int(0))]
#[case(Value::Decimal(dec!(0.1)), Value::Decimal(dec!(0.2)))]
fn test_not_equal(#[case] left: Value, #[case] right: Value) {
    assert!(!NumberAwareEquality::equal(&left, &right));
}

#[rstest]
fn test_compare_is_antisymmetric() {
    let values = [
        Value::Null,
        Value::Bool(false),
        Value::Int(-4),
        Value::Double(3.5),
        Value::Decimal(dec!(3.25)),
        Value::from("a"),
        Value::List(vec![Value::Int(1)]),
    ];
    for left in &values {
        for right in &values {
            assert_eq!(
                NumberAwareEquality::compare(left, right),
                NumberAwareEquality::compare(right, left).reverse()
            );
        }
    }
}

#[rstest]
fn test_float_edge_cases() {
    assert!(NumberAwareEquality::equal(&0.0_f64, &-0.0_f64));
    assert_eq!(NumberAwareEquality::compare(&f64::NAN, &f64::NAN), Ordering::Equal);
    assert_eq!(NumberAwareEquality::compare(&1.0_f32, &2.0_f32), Ordering::Less);
}

#[rstest]
fn test_composite_types() {
    assert!(NumberAwareEquality::equal(&(1, "a"), &(1, "a")));
    assert_eq!(NumberAwareEquality::compare(&None, &Some(0)), Ordering::Less);
    assert_eq!(
        NumberAwareEquality::compare(&vec![1, 2], &vec![1, 2, 0]),
        Ordering::Less
    );
}

// =============================================================================
// Opting in with the macro
// =============================================================================

#[rstest]
fn test_user_type_via_macro() {
    assert!(Version(1, 2).number_aware_cmp(&Version(1, 10)).is_lt());
    let versions = vec![Version(2, 0), Version(1, 5), Version(2, 0)];
    assert_eq!(
        unique(&versions, OrderingSpec::natural()),
        vec![Version(2, 0), Version(1, 5)]
    );
    assert_eq!(
        to_sorted(&versions, OrderingSpec::natural()),
        vec![Version(1, 5), Version(2, 0), Version(2, 0)]
    );
}

// =============================================================================
// OrderingAdapter and Callback
// =============================================================================

#[rstest]
#[case(0, 1)]
#[case(1, 1)]
#[case(2, 2)]
#[case(3, 1)]
fn test_arity_decides_the_interpretation(#[case] arity: usize, #[case] expected: usize) {
    let callback = Callback::from_arity(arity, |arguments: &[&i32]| Value::from(*arguments[0]));
    assert_eq!(callback.declared_arity(), expected);
}

#[rstest]
fn test_adapter_with_non_numeric_comparator_result_treats_all_as_equal() {
    let callback = Callback::from_arity(2, |_: &[&i32]| Value::from("not a number"));
    let compare = OrderingAdapter::build(OrderingSpec::from(callback));
    assert_eq!(compare(&1, &2), Ordering::Equal);
}

#[rstest]
fn test_adapter_equality() {
    let equal = OrderingAdapter::equality(OrderingSpec::by_key(|text: &String| text.to_lowercase()));
    assert!(equal(&"Hello".to_string(), &"HELLO".to_string()));
    assert!(!equal(&"Hello".to_string(), &"World".to_string()));
}

#[rstest]
fn test_spec_default_is_natural() {
    let spec: OrderingSpec<'_, i32> = OrderingSpec::default();
    assert!(spec.is_natural());
    assert!(!OrderingSpec::by_key(|value: &i32| *value).is_natural());
}

#[rstest]
fn test_key_extractor_keys_are_number_aware() {
    let compare = OrderingAdapter::build(OrderingSpec::by_key(|pair: &(&str, f64)| pair.1));
    assert_eq!(compare(&("a", 2.0), &("b", 2.0)), Ordering::Equal);
    let compare = OrderingAdapter::build(OrderingSpec::by_key(|pair: &(&str, i64)| pair.1));
    assert_eq!(compare(&("a", 3), &("b", 2)), Ordering::Greater);
}

// =============================================================================
// Element types without a natural order
// =============================================================================

#[rstest]
fn test_comparator_orders_a_type_without_natural_order() {
    let points = vec![point(3, 0.5), point(1, 2.0), point(3, 9.0), point(2, 1.0)];
    assert_eq!(
        to_sorted(&points, by_x()),
        vec![point(1, 2.0), point(2, 1.0), point(3, 0.5), point(3, 9.0)]
    );
    assert_eq!(
        unique(&points, by_x()),
        vec![point(3, 0.5), point(1, 2.0), point(2, 1.0)]
    );
    assert_eq!(max(&points, by_x()), Some(point(3, 0.5)));

    let mut in_place = points.clone();
    sort_in_place(&mut in_place, OrderingSpec::by_key(|point: &Point| point.y));
    assert_eq!(in_place[0], point(3, 0.5));
}

#[rstest]
fn test_comparator_intersects_a_type_without_natural_order() {
    let left = vec![point(1, 0.0), point(2, 0.0), point(3, 0.0)];
    let right = vec![point(3, 7.0), point(1, 7.0)];
    assert_eq!(
        intersect(&left, &right, by_x()),
        vec![point(1, 0.0), point(3, 0.0)]
    );
}

use orientqb::{Direction, Value, ValueError};
use rust_decimal::Decimal;
use serde_json::json;

#[test]
fn test_integers_widen() {
    assert_eq!(Value::from(7u8), Value::Integer(7));
    assert_eq!(Value::from(-3i32), Value::Integer(-3));
}

#[test]
fn test_wide_integers() {
    assert_eq!(Value::from(5usize), Value::Integer(5));
    assert_eq!(Value::from(-5isize), Value::Integer(-5));
    assert_eq!(Value::from(5u64), Value::Integer(5));
    assert_eq!(Value::from(5i128), Value::Integer(5));
}

#[test]
fn test_wide_integers_out_of_i64_range() {
    assert_eq!(Value::from(u64::MAX), Value::Decimal(Decimal::from(u64::MAX)));
    assert_eq!(Value::from(u64::MAX).to_string(), "18446744073709551615");
    assert!(matches!(Value::from(i128::MAX), Value::Float(_)));
}

#[test]
fn test_f32_keeps_short_form() {
    assert_eq!(Value::from(5.1f32), Value::Float(5.1));
}

#[test]
fn test_option_none_is_null() {
    assert!(Value::from(None::<i32>).is_null());
    assert_eq!(Value::from(Some("x")), Value::String("x".into()));
}

#[test]
fn test_direction_is_label() {
    assert_eq!(Value::from(Direction::Both), Value::Label("BOTH".into()));
}

#[test]
fn test_json_scalars() {
    assert_eq!(Value::try_from(json!(null)), Ok(Value::Null));
    assert_eq!(Value::try_from(json!(true)), Ok(Value::Boolean(true)));
    assert_eq!(Value::try_from(json!(42)), Ok(Value::Integer(42)));
    assert_eq!(Value::try_from(json!("a")), Ok(Value::String("a".into())));
}

#[test]
fn test_json_float_becomes_decimal() {
    let value = Value::try_from(json!(5.1)).unwrap();
    assert_eq!(value, Value::Decimal("5.1".parse().unwrap()));
}

#[test]
fn test_json_array_becomes_list() {
    let value = Value::try_from(json!(["a", 1])).unwrap();
    assert_eq!(
        value,
        Value::List(vec![Value::String("a".into()), Value::Integer(1)])
    );
}

#[test]
fn test_json_object_rejected() {
    assert_eq!(
        Value::try_from(json!({"k": 1})),
        Err(ValueError::UnsupportedObject)
    );
}

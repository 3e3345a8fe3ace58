use variant_box::json::{from_json, from_json_raw, to_json, TypeToken};
use variant_box::{Number, VariantBox, VarianceError};

const JSON: &str = r#"{"value" : 1.5}"#;

#[test]
fn typed_decode() {
    let doubles: VariantBox<f64> = from_json(JSON).unwrap();
    assert_eq!(doubles.get_value(), Some(&1.5));

    let doubles = TypeToken::<f64>::new().decode(JSON).unwrap();
    assert_eq!(doubles.get_value().copied(), Some(1.5f64));
}

#[test]
fn raw_decode_with_the_right_cast() {
    let doubles = from_json_raw(JSON).unwrap().assume::<f64>();
    assert_eq!(doubles.get_value().unwrap(), Some(&1.5));
}

#[test]
fn raw_decode_with_the_wrong_cast() {
    // decoding and casting both succeed
    let ints = from_json_raw(JSON).unwrap().assume::<i32>();
    assert!(!ints.is_empty());

    assert!(matches!(
        ints.get_value(),
        Err(VarianceError::TypeMismatch { expected: "i32", found: "f64" })
    ));
}

#[test]
fn round_trip() {
    let numbers = VariantBox::with_value(Number::Integer(20));
    let json = to_json(&numbers).unwrap();
    assert_eq!(json, r#"{"value":20}"#);
    assert_eq!(from_json::<Number>(&json).unwrap(), numbers);

    let empty: VariantBox<Number> = VariantBox::new();
    let json = to_json(&empty).unwrap();
    assert!(from_json::<Number>(&json).unwrap().is_empty());
    assert!(from_json_raw(&json).unwrap().is_empty());
}

#[test]
fn missing_value_without_a_default() {
    let numbers = TypeToken::<Number>::new().decode(r#"{"value": 1.5}"#).unwrap();
    assert_eq!(numbers.get_value(), Some(&Number::Double(1.5)));

    let empty = from_json::<Number>("{}").unwrap();
    assert!(empty.is_empty());
}

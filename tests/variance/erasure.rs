use variant_box::{ErasedBox, Number, VariantBox, VarianceError};

#[test]
fn unchecked_cast_fails_on_extraction() {
    let mut numbers: VariantBox<Number> = VariantBox::new();
    numbers.set_value(Number::Float(1.2));

    // upcast to the untyped view, no problem
    let obj: ErasedBox = numbers.into();
    assert!(!obj.is_empty());

    // the cast itself is accepted
    let ints = obj.assume::<i32>();

    let err = ints.get_value().unwrap_err();
    assert!(matches!(err, VarianceError::TypeMismatch { expected: "i32", found: "f32" }));
    assert!(err.is_type_error());
}

#[test]
fn erased_number_keeps_its_concrete_class() {
    let obj = VariantBox::with_value(Number::Float(1.2)).erase();
    assert_eq!(obj.class_name(), Some("f32"));

    let floats = obj.assume::<f32>();
    assert_eq!(floats.get_value().unwrap(), Some(&1.2));

    let numbers = floats.erase().assume::<Number>();
    assert_eq!(numbers.get_value().unwrap(), Some(&Number::Float(1.2)));
}

#[test]
fn star_projection_reads_objects_only() {
    let words = VariantBox::with_value(String::from("box")).erase();
    let value = words.get_value().unwrap();
    assert!(value.is::<String>());
    assert_eq!(value.downcast_ref::<String>().unwrap(), "box");
    assert!(value.downcast_ref::<&str>().is_err());
}

#[test]
fn checked_conversion_round_trips() {
    let erased = VariantBox::with_value(vec![1u8, 2]).erase();
    let bytes = erased.assume::<Vec<u8>>().into_checked().unwrap();
    assert_eq!(bytes.get_value(), Some(&vec![1, 2]));

    let erased = bytes.erase();
    assert!(matches!(
        erased.assume::<Vec<i8>>().into_checked(),
        Err(VarianceError::TypeMismatch { .. })
    ));
}

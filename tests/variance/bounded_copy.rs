use rstest::rstest;
use std::rc::Rc;
use variant_box::{Consume, InBox, Number, OutBox, Produce, VariantBox};

#[test]
fn producer_then_consumer() {
    let mut int_box: VariantBox<i32> = VariantBox::new();
    int_box.set_value(20i32);

    let mut number_box: VariantBox<Number> = VariantBox::new();
    number_box.copy_from_producer(&int_box);
    assert_eq!(number_box.get_value(), Some(&Number::Integer(20)));

    let mut double_box: VariantBox<f64> = VariantBox::new();
    double_box.set_value(1.0f64);
    double_box.copy_to_consumer(&mut number_box);
    assert_eq!(number_box.get_value(), Some(&Number::Double(1.0)));

    // sources are only read
    assert_eq!(int_box.get_value(), Some(&20));
    assert_eq!(double_box.get_value(), Some(&1.0));
}

#[rstest]
#[case::integer(VariantBox::with_value(Number::Integer(3)), Some(Number::Integer(3)))]
#[case::double(VariantBox::with_value(Number::Double(0.5)), Some(Number::Double(0.5)))]
#[case::empty(VariantBox::new(), None)]
fn exact_pair_keeps_the_element_type(
    #[case] source: VariantBox<Number>,
    #[case] expected: Option<Number>,
) {
    let mut from: VariantBox<Number> = VariantBox::with_value(Number::Long(9));
    from.copy_from_exact(&source);
    assert_eq!(from.get_value(), expected.as_ref());

    let mut to: VariantBox<Number> = VariantBox::with_value(Number::Long(9));
    source.copy_to_exact(&mut to);
    assert_eq!(to.get_value(), expected.as_ref());
}

#[test]
fn empty_producer_empties_the_destination() {
    let empty: VariantBox<f32> = VariantBox::new();
    let mut numbers = VariantBox::with_value(Number::Integer(1));
    numbers.copy_from_producer(&empty);
    assert!(numbers.is_empty());
}

#[test]
fn reflexive_bound_shares_the_instance() {
    let shared = Rc::new(String::from("shared"));
    let source = VariantBox::with_value(Rc::clone(&shared));

    let mut dest: VariantBox<Rc<String>> = VariantBox::new();
    dest.copy_from_producer(&source);
    assert!(Rc::ptr_eq(dest.get_value().unwrap(), &shared));

    let mut other: VariantBox<Rc<String>> = VariantBox::new();
    source.copy_to_consumer(&mut other);
    assert_eq!(Rc::strong_count(&shared), 4);
}

// A generic helper that only reads uses the covariant bound, one that only
// writes uses the contravariant one.
fn sum_all<P: Produce<Number>>(producers: &[&P]) -> f64 {
    producers
        .iter()
        .filter_map(|p| p.produce())
        .map(|n| n.as_f64())
        .sum()
}

fn reset_all(consumers: &mut [&mut dyn Consume<i32>]) {
    for c in consumers.iter_mut() {
        c.consume(Some(0));
    }
}

#[test]
fn roles_as_bounds() {
    let a = VariantBox::with_value(1i32);
    let b = VariantBox::with_value(2i32);
    let c = VariantBox::<i32>::new();
    assert_eq!(sum_all(&[&a, &b, &c]), 3.0);

    let mut numbers: VariantBox<Number> = VariantBox::new();
    let mut ints: VariantBox<i32> = VariantBox::with_value(5);
    let mut sink = InBox::new(Number::Double(2.0));
    reset_all(&mut [&mut numbers, &mut ints, &mut sink]);
    assert_eq!(numbers.get_value(), Some(&Number::Integer(0)));
    assert_eq!(ints.get_value(), Some(&0));
    assert_eq!(sink.to_string(), "InBox[0]");
}

#[test]
fn out_box_as_a_producer() {
    let out = OutBox::new(7i64);
    let mut numbers: VariantBox<Number> = VariantBox::new();
    numbers.copy_from_producer(&out);
    assert_eq!(numbers.get_value(), Some(&Number::Long(7)));
    assert_eq!(out.widen::<Number>().value(), &Number::Long(7));
}

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use variant_box::json::{from_json, from_json_raw};
use variant_box::{InBox, Number, OutBox, TypedArray, VariantBox};

fn main() -> variant_box::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    bounded_copies();
    projections();
    covariant_array();
    erased_cast();
    json_round_trip()?;
    Ok(())
}

fn bounded_copies() {
    let ints = VariantBox::with_value(20i32);
    let mut numbers: VariantBox<Number> = VariantBox::new();
    // numbers.copy_from_exact(&ints) does not compile: VariantBox<i32> is not VariantBox<Number>
    numbers.copy_from_producer(&ints);
    info!(%ints, %numbers, "copied from producer");

    let doubles = VariantBox::with_value(1.0f64);
    doubles.copy_to_consumer(&mut numbers);
    info!(%doubles, %numbers, "copied to consumer");
}

fn projections() {
    let ints = OutBox::new(10i32);
    let numbers: OutBox<Number> = ints.clone().widen();
    info!(%ints, %numbers, "widened out box");

    let mut sink = InBox::new(Number::Integer(0));
    sink.narrow::<f32>().consume(Some(0.5));
    info!(%sink, "narrowed in box");
}

fn covariant_array() {
    let mut ints: TypedArray<i32> = TypedArray::from(vec![1, 2, 3]);
    let stored = ints.as_objects().store(0, "abc");
    if let Err(err) = stored {
        warn!(%err, %ints, "store rejected");
    }
    let filled = ints.as_objects().fill(String::from("1"));
    if let Err(err) = filled {
        warn!(%err, %ints, "fill rejected");
    }
}

fn erased_cast() {
    let numbers = VariantBox::with_value(Number::Float(1.2));
    let ints = numbers.erase().assume::<i32>();
    info!(?ints, "unchecked cast accepted");
    match ints.get_value() {
        Ok(value) => info!(?value, "read through the cast"),
        Err(err) => warn!(%err, "read through the cast"),
    }
}

fn json_round_trip() -> variant_box::Result<()> {
    let json = r#"{"value" : 1.5}"#;

    let doubles: VariantBox<f64> = from_json(json)?;
    info!(%doubles, "typed decode");

    let ints = from_json_raw(json)?.assume::<i32>();
    match ints.get_value() {
        Ok(value) => info!(?value, "raw decode read as i32"),
        Err(err) => warn!(%err, "raw decode read as i32"),
    }
    Ok(())
}

//! JSON codecs for [`VariantBox`].
//!
//! A box is written as `{"value": <T>}`, an empty one as `{"value": null}`.
//! There are two ways back:
//!
//! * the typed path, [`from_json`] or a [`TypeToken`], where the element type
//!   drives the decoder and a value that does not fit `T` is an error right
//!   away;
//! * the raw path, [`from_json_raw`], which knows no element type. Every
//!   value is decoded to its natural class and the result is an
//!   [`ErasedBox`]. Casting that to the wrong `T` is only noticed when the
//!   value is read.

use std::any::type_name;
use std::fmt;
use std::marker::PhantomData;

use indexmap::IndexMap;
use serde::de::{DeserializeOwned, Error as _};
use serde::Serialize;
use serde_json::Value;

use crate::erased::ErasedBox;
use crate::error::Result;
use crate::object::Object;
use crate::variant_box::VariantBox;

/// Decoded JSON object on the raw path, in document order.
pub type RawMap = IndexMap<String, Option<Object>>;

/// Decoded JSON array on the raw path.
pub type RawList = Vec<Option<Object>>;

pub fn to_json<T: Serialize>(value: &VariantBox<T>) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

pub fn to_json_pretty<T: Serialize>(value: &VariantBox<T>) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<VariantBox<T>> {
    serde_json::from_str(json).map_err(|err| {
        tracing::debug!(target_type = type_name::<T>(), %err, "typed decode failed");
        err.into()
    })
}

/// The element type of a box, carried as a value.
///
/// ```
/// use variant_box::json::TypeToken;
///
/// let doubles = TypeToken::<f64>::new().decode(r#"{"value": 1.5}"#).unwrap();
/// assert_eq!(doubles.get_value(), Some(&1.5));
/// ```
pub struct TypeToken<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> TypeToken<T> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }

    pub fn type_name(&self) -> &'static str {
        type_name::<T>()
    }
}

impl<T: DeserializeOwned> TypeToken<T> {
    pub fn decode(&self, json: &str) -> Result<VariantBox<T>> {
        from_json(json)
    }
}

impl<T> Default for TypeToken<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for TypeToken<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TypeToken<T> {}

impl<T> fmt::Debug for TypeToken<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeToken<{}>", type_name::<T>())
    }
}

/// Decode without an element type.
pub fn from_json_raw(json: &str) -> Result<ErasedBox> {
    let Value::Object(mut fields) = serde_json::from_str::<Value>(json)? else {
        return Err(serde_json::Error::custom("expected a JSON object").into());
    };
    let value = fields.remove("value").unwrap_or(Value::Null);
    let erased = ErasedBox::from_object(into_object(value));
    tracing::debug!(class = ?erased.class_name(), "raw decode");
    Ok(erased)
}

fn into_object(value: Value) -> Option<Object> {
    match value {
        Value::Null => None,
        Value::Bool(b) => Some(Object::new(b)),
        Value::Number(n) => number_object(&n),
        Value::String(s) => Some(Object::new(s)),
        Value::Array(items) => Some(Object::new(
            items.into_iter().map(into_object).collect::<RawList>(),
        )),
        Value::Object(map) => Some(Object::new(
            map.into_iter()
                .map(|(k, v)| (k, into_object(v)))
                .collect::<RawMap>(),
        )),
    }
}

/// Smallest class that holds the number: `i32`, then `i64`, then `u64`,
/// anything with a fraction or exponent is `f64`.
fn number_object(n: &serde_json::Number) -> Option<Object> {
    if let Some(i) = n.as_i64() {
        return Some(match i32::try_from(i) {
            Ok(small) => Object::new(small),
            Err(_) => Object::new(i),
        });
    }
    if let Some(u) = n.as_u64() {
        return Some(Object::new(u));
    }
    n.as_f64().map(Object::new)
}

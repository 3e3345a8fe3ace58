//! A single-slot box with an invariant and a variance-aware pair of copy
//! operations.
//!
//! The variance-aware pair follows producer-upper-bound, consumer-lower-bound:
//! a box that is only read from may hold any subtype of the element type, a
//! box that is only written to may accept any supertype.
//!
//! ```
//! use variant_box::{Number, VariantBox};
//!
//! let ints = VariantBox::with_value(20i32);
//! let mut numbers: VariantBox<Number> = VariantBox::new();
//! numbers.copy_from_producer(&ints);
//! assert_eq!(numbers.get_value(), Some(&Number::Integer(20)));
//!
//! let doubles = VariantBox::with_value(1.0f64);
//! doubles.copy_to_consumer(&mut numbers);
//! assert_eq!(numbers.get_value(), Some(&Number::Double(1.0)));
//! ```
//!
//! The invariant pair only accepts a box of the very same element type. A
//! box of `i32` is not a box of `Number`:
//!
//! ```compile_fail
//! use variant_box::{Number, VariantBox};
//!
//! let ints = VariantBox::with_value(20i32);
//! let mut numbers: VariantBox<Number> = VariantBox::new();
//! numbers.copy_from_exact(&ints);
//! ```
//!
//! ```compile_fail
//! use variant_box::{Number, VariantBox};
//!
//! let doubles = VariantBox::with_value(1.0f64);
//! let mut numbers: VariantBox<Number> = VariantBox::new();
//! doubles.copy_to_exact(&mut numbers);
//! ```
//!
//! And the bounds of the variance-aware pair are checked too:
//!
//! ```compile_fail
//! use variant_box::{Number, VariantBox};
//!
//! let words = VariantBox::with_value(String::from("twenty"));
//! let mut numbers: VariantBox<Number> = VariantBox::new();
//! numbers.copy_from_producer(&words);
//! ```
//!
//! ```compile_fail
//! use variant_box::{Number, VariantBox};
//!
//! // Number is a supertype of i32, not a subtype.
//! let numbers = VariantBox::with_value(Number::Integer(1));
//! let mut ints: VariantBox<i32> = VariantBox::new();
//! numbers.copy_to_consumer(&mut ints);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::subtype::Subtype;

/// Read-only role: yields values assignable to `T`.
pub trait Produce<T> {
    fn produce(&self) -> Option<T>;
}

/// Write-only role: accepts values of type `T`.
pub trait Consume<T> {
    fn consume(&mut self, value: Option<T>);
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantBox<T> {
    #[serde(rename = "value")]
    slot: Option<T>,
}

impl<T> Default for VariantBox<T> {
    fn default() -> Self {
        Self { slot: None }
    }
}

impl<T> VariantBox<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: T) -> Self {
        Self { slot: Some(value) }
    }

    #[inline]
    pub fn get_value(&self) -> Option<&T> {
        self.slot.as_ref()
    }

    /// Replace the content. Passing `None` empties the box.
    #[inline]
    pub fn set_value<V: Into<Option<T>>>(&mut self, value: V) {
        self.slot = value.into();
    }

    #[inline]
    pub fn clear(&mut self) {
        self.slot = None;
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }

    pub fn take(&mut self) -> Option<T> {
        self.slot.take()
    }

    pub fn into_inner(self) -> Option<T> {
        self.slot
    }
}

impl<T: Clone> VariantBox<T> {
    pub fn copy_from_exact(&mut self, source: &VariantBox<T>) {
        tracing::trace!(empty = source.is_empty(), "copy_from_exact");
        self.slot = source.slot.clone();
    }

    pub fn copy_to_exact(&self, dest: &mut VariantBox<T>) {
        tracing::trace!(empty = self.is_empty(), "copy_to_exact");
        dest.slot = self.slot.clone();
    }

    /// Overwrite this box with whatever `source` produces, upcast to `T`.
    pub fn copy_from_producer<P>(&mut self, source: &P)
    where
        P: Produce<T> + ?Sized,
    {
        self.slot = source.produce();
        tracing::trace!(empty = self.is_empty(), "copy_from_producer");
    }

    /// Hand this box's content to `dest`, which must accept `T`.
    pub fn copy_to_consumer<C>(&self, dest: &mut C)
    where
        C: Consume<T> + ?Sized,
    {
        tracing::trace!(empty = self.is_empty(), "copy_to_consumer");
        dest.consume(self.slot.clone());
    }
}

impl<T, U> Produce<T> for VariantBox<U>
where
    U: Subtype<T> + Clone,
{
    fn produce(&self) -> Option<T> {
        self.slot.clone().map(<U as Subtype<T>>::upcast)
    }
}

impl<T, U> Consume<T> for VariantBox<U>
where
    T: Subtype<U>,
{
    fn consume(&mut self, value: Option<T>) {
        self.slot = value.map(<T as Subtype<U>>::upcast);
    }
}

impl<T> From<T> for VariantBox<T> {
    fn from(value: T) -> Self {
        Self::with_value(value)
    }
}

impl<T: fmt::Display> fmt::Display for VariantBox<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.slot {
            Some(v) => write!(f, "VariantBox[{v}]"),
            None => f.write_str("VariantBox[]"),
        }
    }
}

//! Boxes whose variance is fixed by what they allow, not by the caller.
//!
//! `OutBox` can only be read, so it is covariant: an `OutBox<i32>` widens to
//! an `OutBox<Number>`. `InBox` can only be written, so it is contravariant:
//! an `InBox<Number>` serves as a consumer of `i32`.

use std::fmt;

use crate::subtype::Subtype;
use crate::variant_box::{Consume, Produce};

#[derive(Debug, Clone, PartialEq)]
pub struct OutBox<T> {
    value: T,
}

impl<T> OutBox<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }

    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_value(self) -> T {
        self.value
    }

    pub fn widen<U>(self) -> OutBox<U>
    where
        T: Subtype<U>,
    {
        OutBox {
            value: self.value.upcast(),
        }
    }
}

impl<T, U> Produce<U> for OutBox<T>
where
    T: Subtype<U> + Clone,
{
    fn produce(&self) -> Option<U> {
        Some(self.value.clone().upcast())
    }
}

impl<T: fmt::Display> fmt::Display for OutBox<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OutBox[{}]", self.value)
    }
}

/// Write-only holder. There is deliberately no getter; `Display` is the only
/// way to observe the content.
#[derive(Debug, Clone)]
pub struct InBox<T> {
    value: Option<T>,
}

impl<T> InBox<T> {
    pub fn new(value: T) -> Self {
        Self { value: Some(value) }
    }

    pub fn set_value<V: Subtype<T>>(&mut self, value: V) {
        self.value = Some(value.upcast());
    }

    /// View this box as a consumer of the narrower type `U`.
    pub fn narrow<U>(&mut self) -> &mut (dyn Consume<U> + '_)
    where
        U: Subtype<T>,
    {
        self
    }
}

impl<T, U> Consume<U> for InBox<T>
where
    U: Subtype<T>,
{
    fn consume(&mut self, value: Option<U>) {
        self.value = value.map(<U as Subtype<T>>::upcast);
    }
}

impl<T: fmt::Display> fmt::Display for InBox<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(v) => write!(f, "InBox[{v}]"),
            None => f.write_str("InBox[]"),
        }
    }
}

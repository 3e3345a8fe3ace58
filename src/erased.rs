//! Boxes seen through an untyped reference.
//!
//! Generics are reified in Rust, so the element type only disappears when a
//! box is erased on purpose. Once it is gone, casting back is unchecked and
//! a wrong guess surfaces later, at the first read that needs the real type:
//!
//! ```
//! use variant_box::{Number, VariantBox, VarianceError};
//!
//! let numbers = VariantBox::with_value(Number::Float(1.2));
//! let ints = numbers.erase().assume::<i32>(); // accepted
//! assert!(matches!(
//!     ints.get_value(),
//!     Err(VarianceError::TypeMismatch { expected: "i32", found: "f32" })
//! ));
//!
//! // The number really is an f32, so that guess reads fine.
//! let floats = ints.erase().assume::<f32>();
//! assert_eq!(floats.get_value().unwrap(), Some(&1.2));
//! ```

use std::any::Any;
use std::fmt;
use std::marker::PhantomData;

use crate::error::{Result, VarianceError};
use crate::object::Object;
use crate::variant_box::VariantBox;

/// The raw box: holds any value, reads only as [`Object`].
#[derive(Debug, Default)]
pub struct ErasedBox {
    slot: Option<Object>,
}

impl ErasedBox {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_object(slot: Option<Object>) -> Self {
        Self { slot }
    }

    #[inline]
    pub fn get_value(&self) -> Option<&Object> {
        self.slot.as_ref()
    }

    /// Raw write: nothing ties the value to what the box held before.
    pub fn set_value<V: Any>(&mut self, value: V) {
        self.slot = Some(Object::new(value));
    }

    #[inline]
    pub fn clear(&mut self) {
        self.slot = None;
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }

    pub fn class_name(&self) -> Option<&'static str> {
        self.slot.as_ref().map(Object::class_name)
    }

    /// Unchecked cast to a typed view. Always succeeds.
    pub fn assume<T: Any>(self) -> UncheckedBox<T> {
        tracing::trace!(
            target_type = std::any::type_name::<T>(),
            class = ?self.class_name(),
            "unchecked cast"
        );
        UncheckedBox {
            inner: self,
            _marker: PhantomData,
        }
    }
}

impl<T: Any> VariantBox<T> {
    pub fn erase(self) -> ErasedBox {
        ErasedBox::from_object(self.into_inner().map(Object::new))
    }
}

impl<T: Any> From<VariantBox<T>> for ErasedBox {
    fn from(value: VariantBox<T>) -> Self {
        value.erase()
    }
}

/// An erased box that was cast to `VariantBox<T>` without a check.
///
/// Writes are typed. Reads check the stored class and fail with
/// [`VarianceError::TypeMismatch`] when the cast was wrong.
pub struct UncheckedBox<T> {
    inner: ErasedBox,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Any> UncheckedBox<T> {
    pub fn get_value(&self) -> Result<Option<&T>> {
        match &self.inner.slot {
            Some(obj) => obj.downcast_ref::<T>().map(Some),
            None => Ok(None),
        }
    }

    pub fn set_value(&mut self, value: T) {
        self.inner.set_value(value);
    }

    #[inline]
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Checked conversion into a real `VariantBox<T>`.
    pub fn into_checked(self) -> Result<VariantBox<T>> {
        match self.inner.slot {
            None => Ok(VariantBox::new()),
            Some(obj) => obj
                .downcast::<T>()
                .map(VariantBox::with_value)
                .map_err(|obj| mismatch::<T>(&obj)),
        }
    }

    pub fn erase(self) -> ErasedBox {
        self.inner
    }
}

fn mismatch<T>(obj: &Object) -> VarianceError {
    tracing::debug!(
        expected = std::any::type_name::<T>(),
        found = obj.class_name(),
        "type mismatch"
    );
    VarianceError::type_mismatch::<T>(obj.class_name())
}

impl<T> fmt::Debug for UncheckedBox<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UncheckedBox")
            .field("assumed", &std::any::type_name::<T>())
            .field("inner", &self.inner)
            .finish()
    }
}

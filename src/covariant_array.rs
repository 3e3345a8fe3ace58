//! A covariant reference over an invariant array.
//!
//! Rust slices are invariant, `[i32]` is never a `[dyn Any]`. `ObjectArray`
//! is the widened view: it lets any value be handed to `store`, and the
//! backing `TypedArray` checks the runtime class of every element written
//! through it. A wrong class is a [`VarianceError::StoreViolation`] at the
//! write, and the slot keeps its previous content.

use std::any::{type_name, Any};
use std::fmt;

use itertools::Itertools;

use crate::error::{Result, VarianceError};
use crate::object::Object;

/// The storage side of an array, seen without its element type.
pub trait ArrayStore {
    fn component_type(&self) -> &'static str;

    fn len(&self) -> usize;

    fn load(&self, index: usize) -> Result<Option<&dyn Any>>;

    fn store(&mut self, index: usize, value: Object) -> Result<()>;
}

/// Fixed-size array of `T`. Slots start out empty.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedArray<T> {
    slots: Vec<Option<T>>,
}

impl<T> TypedArray<T> {
    pub fn new(len: usize) -> Self {
        Self {
            slots: std::iter::repeat_with(|| None).take(len).collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        let len = self.slots.len();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(VarianceError::IndexOutOfBounds { index, len })?;
        *slot = Some(value);
        Ok(())
    }
}

impl<T: Any> TypedArray<T> {
    /// Widen the reference: the array is now addressed as holding objects.
    pub fn as_objects(&mut self) -> ObjectArray<'_> {
        ObjectArray { inner: self }
    }
}

impl<T> From<Vec<T>> for TypedArray<T> {
    fn from(values: Vec<T>) -> Self {
        Self {
            slots: values.into_iter().map(Some).collect(),
        }
    }
}

impl<T: Any> ArrayStore for TypedArray<T> {
    fn component_type(&self) -> &'static str {
        type_name::<T>()
    }

    fn len(&self) -> usize {
        self.slots.len()
    }

    fn load(&self, index: usize) -> Result<Option<&dyn Any>> {
        let len = self.slots.len();
        let slot = self
            .slots
            .get(index)
            .ok_or(VarianceError::IndexOutOfBounds { index, len })?;
        Ok(slot.as_ref().map(|v| v as &dyn Any))
    }

    fn store(&mut self, index: usize, value: Object) -> Result<()> {
        let len = self.slots.len();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(VarianceError::IndexOutOfBounds { index, len })?;
        match value.downcast::<T>() {
            Ok(v) => {
                *slot = Some(v);
                Ok(())
            }
            Err(rejected) => {
                tracing::debug!(
                    index,
                    component = type_name::<T>(),
                    found = rejected.class_name(),
                    "array store violation"
                );
                Err(VarianceError::StoreViolation {
                    index,
                    component: type_name::<T>(),
                    found: rejected.class_name(),
                })
            }
        }
    }
}

impl<T: fmt::Display> fmt::Display for TypedArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body = self.slots.iter().format_with(", ", |slot, emit| match slot {
            Some(v) => emit(v),
            None => emit(&"_"),
        });
        write!(f, "[{body}]")
    }
}

/// An array addressed through its widest element type.
pub struct ObjectArray<'a> {
    inner: &'a mut dyn ArrayStore,
}

impl<'a> ObjectArray<'a> {
    pub fn new(inner: &'a mut dyn ArrayStore) -> Self {
        Self { inner }
    }

    pub fn component_type(&self) -> &'static str {
        self.inner.component_type()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.len() == 0
    }

    /// Reading is always safe: whatever the array holds is an object.
    pub fn load(&self, index: usize) -> Result<Option<&dyn Any>> {
        self.inner.load(index)
    }

    pub fn store<V: Any>(&mut self, index: usize, value: V) -> Result<()> {
        self.inner.store(index, Object::new(value))
    }

    /// Store `value` into every slot, front to back. Stops at the first
    /// failure.
    pub fn fill<V: Any + Clone>(&mut self, value: V) -> Result<()> {
        (0..self.inner.len()).try_for_each(|i| self.inner.store(i, Object::new(value.clone())))
    }
}

impl fmt::Debug for ObjectArray<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectArray")
            .field("component", &self.component_type())
            .field("len", &self.len())
            .finish()
    }
}

use std::any::{type_name, Any};
use std::fmt;

use crate::error::{Result, VarianceError};
use crate::subtype::Number;

/// A value behind an untyped reference.
///
/// The static type is gone, only the runtime class survives: a `TypeId`
/// inside the `dyn Any` and the class name kept for error messages.
///
/// A [`Number`] has no class of its own at runtime. It reports the class of
/// the variant it holds and reads both as `Number` and as that variant.
pub struct Object {
    value: Box<dyn Any>,
    class: &'static str,
}

impl Object {
    pub fn new<V: Any>(value: V) -> Self {
        let value: Box<dyn Any> = Box::new(value);
        let class = match value.downcast_ref::<Number>() {
            Some(n) => n.class_name(),
            None => type_name::<V>(),
        };
        Self { value, class }
    }

    fn concrete(&self) -> Option<&dyn Any> {
        self.value.downcast_ref::<Number>().map(Number::concrete)
    }

    #[inline]
    pub fn class_name(&self) -> &'static str {
        self.class
    }

    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.value.is::<T>() || self.concrete().is_some_and(|v| v.is::<T>())
    }

    /// Checked cast, performed at the point of use.
    pub fn downcast_ref<T: Any>(&self) -> Result<&T> {
        let direct = self.value.downcast_ref::<T>();
        direct.or_else(|| self.concrete()?.downcast_ref::<T>()).ok_or_else(|| {
            tracing::debug!(expected = type_name::<T>(), found = self.class, "type mismatch");
            VarianceError::type_mismatch::<T>(self.class)
        })
    }

    pub fn downcast<T: Any>(self) -> Result<T, Self> {
        let Self { value, class } = self;
        let value = match value.downcast::<T>() {
            Ok(v) => return Ok(*v),
            Err(value) => value,
        };
        let narrows = value
            .downcast_ref::<Number>()
            .is_some_and(|n| n.concrete().is::<T>());
        if !narrows {
            return Err(Self { value, class });
        }
        let value = match value.downcast::<Number>() {
            Ok(n) => n.into_concrete(),
            Err(value) => value,
        };
        value.downcast::<T>().map(|v| *v).map_err(|value| Self { value, class })
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Object").field("class", &self.class).finish_non_exhaustive()
    }
}

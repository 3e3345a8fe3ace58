//! An explicit subtype relation between element types.
//!
//! Outside of lifetimes Rust has no subtyping, so `S <: T` is written as
//! `S: Subtype<T>`. The relation is reflexive, and `upcast` is the
//! (always successful) widening conversion.

use std::any::Any;
use std::fmt;

use serde::{Deserialize, Serialize};

pub trait Subtype<Super>: Sized {
    fn upcast(self) -> Super;
}

impl<T> Subtype<T> for T {
    #[inline]
    fn upcast(self) -> T {
        self
    }
}

/// Root of the boxed-number tower.
///
/// `i32`, `i64`, `f32` and `f64` are its subtypes. Serialized untagged, so a
/// JSON number decodes to the first variant that can hold it.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Integer(i32),
    Long(i64),
    Double(f64),
    Float(f32),
}

impl Number {
    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::Integer(v) => v as f64,
            Number::Long(v) => v as f64,
            Number::Float(v) => v as f64,
            Number::Double(v) => v,
        }
    }

    /// Name of the concrete class behind the number.
    pub fn class_name(&self) -> &'static str {
        match self {
            Number::Integer(_) => std::any::type_name::<i32>(),
            Number::Long(_) => std::any::type_name::<i64>(),
            Number::Float(_) => std::any::type_name::<f32>(),
            Number::Double(_) => std::any::type_name::<f64>(),
        }
    }

    /// The concrete value behind the number.
    pub fn concrete(&self) -> &dyn Any {
        match self {
            Number::Integer(v) => v as &dyn Any,
            Number::Long(v) => v as &dyn Any,
            Number::Float(v) => v as &dyn Any,
            Number::Double(v) => v as &dyn Any,
        }
    }

    pub fn into_concrete(self) -> Box<dyn Any> {
        match self {
            Number::Integer(v) => Box::new(v),
            Number::Long(v) => Box::new(v),
            Number::Float(v) => Box::new(v),
            Number::Double(v) => Box::new(v),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(v) => write!(f, "{v}"),
            Number::Long(v) => write!(f, "{v}"),
            Number::Float(v) => write!(f, "{v:?}"),
            Number::Double(v) => write!(f, "{v:?}"),
        }
    }
}

macro_rules! number_subtype {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl Subtype<Number> for $ty {
                #[inline]
                fn upcast(self) -> Number {
                    Number::$variant(self)
                }
            }

            impl From<$ty> for Number {
                fn from(value: $ty) -> Self {
                    value.upcast()
                }
            }
        )*
    };
}

number_subtype! {
    i32 => Integer,
    i64 => Long,
    f32 => Float,
    f64 => Double,
}

pub mod covariant_array;
pub mod erased;
pub mod error;
pub mod json;
pub mod object;
pub mod projection;
pub mod subtype;
mod variance;
pub mod variant_box;

pub use covariant_array::{ObjectArray, TypedArray};
pub use erased::{ErasedBox, UncheckedBox};
pub use error::{Result, VarianceError};
pub use object::Object;
pub use projection::{InBox, OutBox};
pub use subtype::{Number, Subtype};
pub use variant_box::{Consume, Produce, VariantBox};

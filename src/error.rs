use thiserror::Error;

pub type Result<T, E = VarianceError> = std::result::Result<T, E>;

/// Runtime failures of the type-erased paths.
///
/// Static mismatches never show up here: the copy operations reject them at
/// compile time.
#[derive(Debug, Error)]
pub enum VarianceError {
    /// The erased value was inspected as a type it does not have.
    #[error("{found} cannot be cast to {expected}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// An element of the wrong class was written through a covariant array view.
    #[error("cannot store {found} at index {index} of an array of {component}")]
    StoreViolation {
        index: usize,
        component: &'static str,
        found: &'static str,
    },

    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

impl VarianceError {
    pub fn type_mismatch<T>(found: &'static str) -> Self {
        Self::TypeMismatch {
            expected: std::any::type_name::<T>(),
            found,
        }
    }

    /// True for the two dynamic type errors, the ones a reified type system
    /// would have caught earlier.
    pub fn is_type_error(&self) -> bool {
        matches!(self, Self::TypeMismatch { .. } | Self::StoreViolation { .. })
    }
}

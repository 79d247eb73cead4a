// src/numerics/types/error.rs

/// Errors raised while building a vector from untyped data.
///
/// Arithmetic on vectors never fails; this only covers construction from
/// slices whose length is not known at compile time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VectorError {
    #[error("Dimension mismatch: expected {expected} components, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

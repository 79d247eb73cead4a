// src/numerics/mod.rs
// Top-level numerics module. Exposes a `types` namespace with submodules.

pub mod fast_math;

pub mod types {
    // The submodules live in src/numerics/types/*.rs
    pub mod error;
    pub mod traits;
    pub mod vector;
    pub mod vector4;
}

pub use types::error::VectorError;
pub use types::traits::FloatingPoint;
pub use types::vector::{Vec3, Vector3};
pub use types::vector4::{Vec4, Vector4};

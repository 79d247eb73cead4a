//! # vecmath
//!
//! Fixed-size vector algebra for two value types:
//!
//! - [`Vec3`]: three `f64` components
//! - [`Vec4`]: four `f32` components
//!
//! Both support addition, subtraction, dot and cross products and
//! normalization. `Vec4` additionally offers
//! [`normalize_fast`](Vec4::normalize_fast), which trades a bounded amount of
//! accuracy for an approximate reciprocal square root. The [`throughput`]
//! module measures how many of each operation run per second.
//!
//! ```rust
//! use vecmath::{Vec3, Vec4};
//!
//! let sum = Vec3::new(1.0, 2.0, 3.0) + Vec3::new(4.0, 5.0, 6.0);
//! assert_eq!(sum, Vec3::new(5.0, 7.0, 9.0));
//!
//! let unit = Vec4::new(3.0, 4.0, 0.0, 0.0).normalize();
//! assert_eq!(unit, Vec4::new(0.6, 0.8, 0.0, 0.0));
//!
//! // The zero vector stays zero instead of turning into NaN.
//! assert_eq!(Vec3::zero().normalize(), Vec3::zero());
//! ```

pub mod numerics;
pub mod throughput;

pub use numerics::{FloatingPoint, Vec3, Vec4, Vector3, Vector4, VectorError};
pub use throughput::{measure, measure_all, Operation, OpStats, ThroughputConfig, ThroughputError};

/// Version information for the vecmath crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

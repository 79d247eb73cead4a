// src/numerics/fast_math.rs
//! Approximate square root routines for single precision.
//!
//! The reciprocal square root starts from a bit-level guess (the exponent is
//! halved and negated by subtracting the shifted bit pattern from a magic
//! constant) and is refined by one Newton-Raphson step with tuned
//! coefficients. For positive normal inputs the maximum relative error is
//! [`FAST_INV_SQRT_MAX_RELATIVE_ERROR`].
//!
//! Inputs outside the positive normal range (zero, subnormals, negatives,
//! infinities, NaN) produce meaningless results; callers check
//! [`f32::is_normal`] first.

/// Upper bound of `|fast_inv_sqrt(x) * x.sqrt() - 1|` over positive normal `x`.
///
/// The approximation itself peaks at about 6.502e-4; the bound leaves room
/// for single precision rounding in the comparison.
pub const FAST_INV_SQRT_MAX_RELATIVE_ERROR: f32 = 6.6e-4;

const MAGIC: u32 = 0x5F1F_FFF9;
const NEWTON_SCALE: f32 = 0.703_952_25;
const NEWTON_OFFSET: f32 = 2.389_244_6;

/// Approximate `1 / sqrt(x)`.
#[inline]
pub fn fast_inv_sqrt(x: f32) -> f32 {
    let guess = f32::from_bits(MAGIC.wrapping_sub(x.to_bits() >> 1));
    guess * (NEWTON_SCALE * (NEWTON_OFFSET - x * guess * guess))
}

/// Approximate `sqrt(x)` as `x * fast_inv_sqrt(x)`.
#[inline]
pub fn fast_sqrt(x: f32) -> f32 {
    x * fast_inv_sqrt(x)
}

// src/numerics/types/traits.rs
// FloatingPoint trait shared by the vector types.

/// FloatingPoint is the minimal set of capabilities the vector types need
/// from their component type.
///
/// Note: We require Copy, PartialOrd, the basic arithmetic ops on Self and a
/// correctly rounded square root. Implemented for `f32` and `f64`.
pub trait FloatingPoint:
    Copy
    + PartialOrd
    + core::fmt::Debug
    + core::ops::Add<Output = Self>
    + core::ops::Sub<Output = Self>
    + core::ops::Mul<Output = Self>
    + core::ops::Div<Output = Self>
    + core::ops::Neg<Output = Self>
{
    fn zero() -> Self;
    fn one() -> Self;

    /// Square root from the standard library.
    fn sqrt(self) -> Self;
}

impl FloatingPoint for f32 {
    #[inline]
    fn zero() -> Self { 0.0 }
    #[inline]
    fn one() -> Self { 1.0 }
    #[inline]
    fn sqrt(self) -> Self { f32::sqrt(self) }
}

impl FloatingPoint for f64 {
    #[inline]
    fn zero() -> Self { 0.0 }
    #[inline]
    fn one() -> Self { 1.0 }
    #[inline]
    fn sqrt(self) -> Self { f64::sqrt(self) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hypotenuse<T: FloatingPoint>(a: T, b: T) -> T {
        (a * a + b * b).sqrt()
    }

    #[test]
    fn test_zero_and_one() {
        assert_eq!(<f32 as FloatingPoint>::zero(), 0.0_f32);
        assert_eq!(<f64 as FloatingPoint>::one(), 1.0_f64);
    }

    #[test]
    fn test_generic_sqrt_matches_std() {
        assert_eq!(hypotenuse(3.0_f64, 4.0_f64), 5.0);
        assert_eq!(hypotenuse(3.0_f32, 4.0_f32), 5.0);
        assert_eq!(FloatingPoint::sqrt(2.0_f32), 2.0_f32.sqrt());
    }
}

// src/numerics/types/vector4.rs
// Vector4 generic implementation with default precision f32.

use core::ops::{Add, Mul, Neg, Sub};

use super::error::VectorError;
use super::traits::FloatingPoint;
use crate::numerics::fast_math::fast_inv_sqrt;

/// Vector4 is a 4D vector value type with template-able numeric type.
///
/// The cross product only looks at x, y and z: the vector is treated as a 3D
/// direction padded with a fourth component, and the result's `w` is always
/// zero.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vector4<T: FloatingPoint = f32> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

/// Single precision 4-component vector.
pub type Vec4 = Vector4<f32>;

impl<T: FloatingPoint> Vector4<T> {
    /// Construct a new Vector4
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    /// Vector of all zeros
    #[inline]
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::zero())
    }

    /// Vector of all ones
    #[inline]
    pub fn one() -> Self {
        Self::new(T::one(), T::one(), T::one(), T::one())
    }

    /// Return the squared length (avoids sqrt)
    #[inline]
    pub fn length_squared(&self) -> T {
        self.dot(self)
    }

    /// Return the Euclidean length over all four components.
    #[inline]
    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// 3D cross product of the x, y, z parts. `w` of the result is zero
    /// whatever the operands' `w` are.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
            T::zero(),
        )
    }

    /// Scale to unit length using the standard library square root.
    ///
    /// A vector whose length is exactly zero normalizes to the zero vector.
    #[inline]
    pub fn normalize(&self) -> Self {
        let length = self.length();
        if length == T::zero() {
            return Self::zero();
        }
        Self::new(
            self.x / length,
            self.y / length,
            self.z / length,
            self.w / length,
        )
    }
}

impl Vector4<f32> {
    /// Scale to unit length using the approximate reciprocal square root.
    ///
    /// Agrees with [`normalize`](Self::normalize) to within
    /// [`FAST_INV_SQRT_MAX_RELATIVE_ERROR`](crate::numerics::fast_math::FAST_INV_SQRT_MAX_RELATIVE_ERROR)
    /// relative error per component. When the squared length is not a normal
    /// float (zero, subnormal, infinite or NaN) the precise path is taken, so
    /// the zero vector still maps to the zero vector.
    #[inline]
    pub fn normalize_fast(&self) -> Self {
        let length_squared = self.length_squared();
        if !length_squared.is_normal() {
            return self.normalize();
        }
        *self * fast_inv_sqrt(length_squared)
    }
}

impl<T: FloatingPoint> Default for Vector4<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: FloatingPoint> Add for Vector4<T> {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(
            self.x + other.x,
            self.y + other.y,
            self.z + other.z,
            self.w + other.w,
        )
    }
}

impl<T: FloatingPoint> Sub for Vector4<T> {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(
            self.x - other.x,
            self.y - other.y,
            self.z - other.z,
            self.w - other.w,
        )
    }
}

impl<T: FloatingPoint> Neg for Vector4<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl<T: FloatingPoint> Mul<T> for Vector4<T> {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: T) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar, self.w * scalar)
    }
}

impl<T: FloatingPoint> From<(T, T, T, T)> for Vector4<T> {
    fn from(tuple: (T, T, T, T)) -> Self {
        Self::new(tuple.0, tuple.1, tuple.2, tuple.3)
    }
}

impl<T: FloatingPoint> From<Vector4<T>> for (T, T, T, T) {
    fn from(v: Vector4<T>) -> Self {
        (v.x, v.y, v.z, v.w)
    }
}

impl<T: FloatingPoint> From<[T; 4]> for Vector4<T> {
    fn from(array: [T; 4]) -> Self {
        Self::new(array[0], array[1], array[2], array[3])
    }
}

impl<T: FloatingPoint> From<Vector4<T>> for [T; 4] {
    fn from(v: Vector4<T>) -> Self {
        [v.x, v.y, v.z, v.w]
    }
}

impl<T: FloatingPoint> From<&[T; 4]> for Vector4<T> {
    fn from(array: &[T; 4]) -> Self {
        Self::from(*array)
    }
}

impl<T: FloatingPoint> From<&Vector4<T>> for [T; 4] {
    fn from(v: &Vector4<T>) -> Self {
        [v.x, v.y, v.z, v.w]
    }
}

impl<T: FloatingPoint> TryFrom<&[T]> for Vector4<T> {
    type Error = VectorError;

    fn try_from(slice: &[T]) -> Result<Self, Self::Error> {
        match *slice {
            [x, y, z, w] => Ok(Self::new(x, y, z, w)),
            _ => Err(VectorError::DimensionMismatch {
                expected: 4,
                actual: slice.len(),
            }),
        }
    }
}

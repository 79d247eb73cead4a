// src/numerics/types/vector.rs
// Vector3 generic implementation with default precision f64.
// Uses the FloatingPoint trait from super::traits.

use core::ops::{Add, Mul, Neg, Sub};

use super::error::VectorError;
use super::traits::FloatingPoint;

/// Vector3 is a 3D vector value type with template-able numeric type.
///
/// Every operation returns a new vector; operands are never mutated.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vector3<T: FloatingPoint = f64> {
    pub x: T,
    pub y: T,
    pub z: T,
}

/// Double precision 3-component vector.
pub type Vec3 = Vector3<f64>;

impl<T: FloatingPoint> Vector3<T> {
    /// Construct a new Vector3
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Vector of all zeros
    #[inline]
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    /// Vector of all ones
    #[inline]
    pub fn one() -> Self {
        Self::new(T::one(), T::one(), T::one())
    }

    /// Return the squared length (avoids sqrt)
    #[inline]
    pub fn length_squared(&self) -> T {
        self.dot(self)
    }

    /// Return the Euclidean length.
    #[inline]
    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    /// Sum of component-wise products.
    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Scale to unit length.
    ///
    /// A vector whose length is exactly zero normalizes to the zero vector
    /// instead of dividing by zero.
    #[inline]
    pub fn normalize(&self) -> Self {
        let length = self.length();
        if length == T::zero() {
            return Self::zero();
        }
        Self::new(self.x / length, self.y / length, self.z / length)
    }
}

impl<T: FloatingPoint> Default for Vector3<T> {
    fn default() -> Self {
        Self::zero()
    }
}

// Implement operator + for Vector3<T>
impl<T: FloatingPoint> Add for Vector3<T> {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

// Implement operator - for Vector3<T>
impl<T: FloatingPoint> Sub for Vector3<T> {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl<T: FloatingPoint> Neg for Vector3<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl<T: FloatingPoint> Mul<T> for Vector3<T> {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: T) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

// Conversions between Vector3<T> and tuples

impl<T: FloatingPoint> From<(T, T, T)> for Vector3<T> {
    fn from(tuple: (T, T, T)) -> Self {
        Self::new(tuple.0, tuple.1, tuple.2)
    }
}

impl<T: FloatingPoint> From<Vector3<T>> for (T, T, T) {
    fn from(v: Vector3<T>) -> Self {
        (v.x, v.y, v.z)
    }
}

// Conversions between Vector3<T> and arrays [T; 3]

impl<T: FloatingPoint> From<[T; 3]> for Vector3<T> {
    fn from(array: [T; 3]) -> Self {
        Self::new(array[0], array[1], array[2])
    }
}

impl<T: FloatingPoint> From<Vector3<T>> for [T; 3] {
    fn from(v: Vector3<T>) -> Self {
        [v.x, v.y, v.z]
    }
}

// Conversions from references to Vector3<T>

impl<T: FloatingPoint> From<&(T, T, T)> for Vector3<T> {
    fn from(tuple: &(T, T, T)) -> Self {
        Self::from(*tuple)
    }
}

impl<T: FloatingPoint> From<&[T; 3]> for Vector3<T> {
    fn from(array: &[T; 3]) -> Self {
        Self::from(*array)
    }
}

// Reverse conversions: from &Vector3<T> into tuples and arrays

impl<T: FloatingPoint> From<&Vector3<T>> for (T, T, T) {
    fn from(v: &Vector3<T>) -> Self {
        (v.x, v.y, v.z)
    }
}

impl<T: FloatingPoint> From<&Vector3<T>> for [T; 3] {
    fn from(v: &Vector3<T>) -> Self {
        [v.x, v.y, v.z]
    }
}

impl<T: FloatingPoint> TryFrom<&[T]> for Vector3<T> {
    type Error = VectorError;

    fn try_from(slice: &[T]) -> Result<Self, Self::Error> {
        match *slice {
            [x, y, z] => Ok(Self::new(x, y, z)),
            _ => Err(VectorError::DimensionMismatch {
                expected: 3,
                actual: slice.len(),
            }),
        }
    }
}

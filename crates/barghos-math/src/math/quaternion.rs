// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Provides the [`Quaternion`] value type.

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Mul, MulAssign, Neg};

use super::provider::MathProvider;
use super::tuple::{ReadableQuaternion, WritableQuaternion};
use super::{quat_util, MathError};

/// A quaternion `(w; x, y, z)` with `f32` components.
///
/// `w` is the scalar part and `[x, y, z]` the vector part. Nothing constrains
/// the magnitude: non-unit quaternions are valid values, and normalization only
/// happens when asked for (or as part of [`mul`](Self::mul_by)).
///
/// The memory layout is `[w, x, y, z]`, identical to the flat buffers accepted
/// by [`quat_util`].
#[derive(
    Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable, Serialize, Deserialize,
)]
#[repr(C)]
pub struct Quaternion {
    w: f32,
    x: f32,
    y: f32,
    z: f32,
}

impl Quaternion {
    /// The identity quaternion, representing no rotation.
    pub const IDENTITY: Quaternion = Quaternion {
        w: 1.0,
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Returns [`Quaternion::IDENTITY`].
    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Creates a new quaternion from its raw components.
    #[inline]
    pub const fn new(w: f32, x: f32, y: f32, z: f32) -> Self {
        Self { w, x, y, z }
    }

    /// Copies the components of any quaternion-shaped value.
    #[inline]
    pub fn from_readable<Q: ReadableQuaternion + ?Sized>(other: &Q) -> Self {
        Self::new(other.w(), other.x(), other.y(), other.z())
    }

    /// Reads a quaternion from the first four elements of `buffer`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::Length`] if `buffer` holds fewer than four elements.
    pub fn from_slice(buffer: &[f32]) -> Result<Self, MathError> {
        MathError::check_len(buffer.len())?;
        Ok(Self::new(buffer[0], buffer[1], buffer[2], buffer[3]))
    }

    // --- Accessors ---

    /// The scalar part.
    #[inline]
    pub const fn w(&self) -> f32 {
        self.w
    }

    /// The x component of the vector part.
    #[inline]
    pub const fn x(&self) -> f32 {
        self.x
    }

    /// The y component of the vector part.
    #[inline]
    pub const fn y(&self) -> f32 {
        self.y
    }

    /// The z component of the vector part.
    #[inline]
    pub const fn z(&self) -> f32 {
        self.z
    }

    /// Views the components as a `[w, x, y, z]` array.
    #[inline]
    pub fn as_array(&self) -> &[f32; 4] {
        bytemuck::cast_ref(self)
    }

    /// Mutable counterpart of [`as_array`](Self::as_array).
    #[inline]
    pub fn as_array_mut(&mut self) -> &mut [f32; 4] {
        bytemuck::cast_mut(self)
    }

    // --- Mutators ---

    /// Sets the scalar part.
    #[inline]
    pub fn set_w(&mut self, w: f32) -> &mut Self {
        self.w = w;
        self
    }

    /// Sets the x component.
    #[inline]
    pub fn set_x(&mut self, x: f32) -> &mut Self {
        self.x = x;
        self
    }

    /// Sets the y component.
    #[inline]
    pub fn set_y(&mut self, y: f32) -> &mut Self {
        self.y = y;
        self
    }

    /// Sets the z component.
    #[inline]
    pub fn set_z(&mut self, z: f32) -> &mut Self {
        self.z = z;
        self
    }

    /// Overwrites all four components.
    #[inline]
    pub fn set(&mut self, w: f32, x: f32, y: f32, z: f32) -> &mut Self {
        *self = Self::new(w, x, y, z);
        self
    }

    /// Copies the components of any quaternion-shaped value.
    #[inline]
    pub fn set_from<Q: ReadableQuaternion + ?Sized>(&mut self, other: &Q) -> &mut Self {
        self.set(other.w(), other.x(), other.y(), other.z())
    }

    /// Overwrites the component at `index`, where `0` is `w` and `3` is `z`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::Index`] if `index > 3`, leaving `self` untouched.
    pub fn set_by_index(&mut self, index: usize, value: f32) -> Result<&mut Self, MathError> {
        MathError::check_index(index)?;
        self.as_array_mut()[index] = value;
        Ok(self)
    }

    /// Returns an independent copy of this quaternion.
    #[inline]
    pub fn copy(&self) -> Self {
        *self
    }

    // --- Scalars ---

    /// Calculates the squared length.
    #[inline]
    pub fn length_squared(&self) -> f32 {
        quat_util::squared_length(self)
    }

    /// Calculates the length using the default provider.
    #[inline]
    pub fn length(&self) -> f32 {
        quat_util::length(self)
    }

    /// Calculates the length using `provider`.
    #[inline]
    pub fn length_by<P: MathProvider + ?Sized>(&self, provider: &P) -> f32 {
        quat_util::length_by(self, provider)
    }

    /// Calculates the reciprocal length using the default provider.
    #[inline]
    pub fn inverse_length(&self) -> f32 {
        quat_util::inverse_length(self)
    }

    /// Calculates the reciprocal length using `provider`.
    #[inline]
    pub fn inverse_length_by<P: MathProvider + ?Sized>(&self, provider: &P) -> f32 {
        quat_util::inverse_length_by(self, provider)
    }

    /// Computes the dot product with any quaternion-shaped value.
    #[inline]
    pub fn dot<Q: ReadableQuaternion + ?Sized>(&self, other: &Q) -> f32 {
        quat_util::dot(self, other)
    }

    // --- In-place algebra ---

    /// Negates the vector part in place.
    pub fn conjugate(&mut self) -> &mut Self {
        let src = *self;
        quat_util::conjugate_into(&src, self)
    }

    /// Replaces `self` with its multiplicative inverse.
    ///
    /// A zero quaternion becomes non-finite.
    pub fn inverse(&mut self) -> &mut Self {
        let src = *self;
        quat_util::inverse_into(&src, self)
    }

    /// Scales `self` to unit length using the default provider.
    pub fn normalize(&mut self) -> &mut Self {
        let src = *self;
        quat_util::normalize_into(&src, self)
    }

    /// Scales `self` to unit length using `provider`.
    pub fn normalize_by<P: MathProvider + ?Sized>(&mut self, provider: &P) -> &mut Self {
        let src = *self;
        quat_util::normalize_into_by(&src, provider, self)
    }

    // --- Non-mutating algebra ---

    /// Returns the conjugate.
    #[inline]
    #[must_use]
    pub fn conjugated(&self) -> Self {
        quat_util::conjugate_map(self, Self::new)
    }

    /// Returns the multiplicative inverse.
    #[inline]
    #[must_use]
    pub fn inversed(&self) -> Self {
        quat_util::inverse_map(self, Self::new)
    }

    /// Returns a copy scaled to unit length using the default provider.
    #[inline]
    #[must_use]
    pub fn normalized(&self) -> Self {
        quat_util::normalize_map(self, Self::new)
    }

    /// Returns a copy scaled to unit length using `provider`.
    #[inline]
    #[must_use]
    pub fn normalized_by<P: MathProvider + ?Sized>(&self, provider: &P) -> Self {
        quat_util::normalize_map_by(self, provider, Self::new)
    }

    /// Returns the Hamilton product `self * rhs`, renormalized with `provider`.
    #[inline]
    #[must_use]
    pub fn mul_by<Q, P>(&self, rhs: &Q, provider: &P) -> Self
    where
        Q: ReadableQuaternion + ?Sized,
        P: MathProvider + ?Sized,
    {
        quat_util::mul_map_by(self, rhs, provider, Self::new)
    }

    /// Returns the raw Hamilton product `self * rhs`.
    #[inline]
    #[must_use]
    pub fn mul_unnormalized<Q: ReadableQuaternion + ?Sized>(&self, rhs: &Q) -> Self {
        quat_util::mul_unnormalized_map(self, rhs, Self::new)
    }
}

// --- Contracts ---

impl ReadableQuaternion for Quaternion {
    #[inline]
    fn w(&self) -> f32 {
        self.w
    }
    #[inline]
    fn x(&self) -> f32 {
        self.x
    }
    #[inline]
    fn y(&self) -> f32 {
        self.y
    }
    #[inline]
    fn z(&self) -> f32 {
        self.z
    }
}

impl WritableQuaternion for Quaternion {
    #[inline]
    fn set(&mut self, w: f32, x: f32, y: f32, z: f32) {
        Quaternion::set(self, w, x, y, z);
    }

    fn set_by_index(&mut self, index: usize, value: f32) -> Result<(), MathError> {
        Quaternion::set_by_index(self, index, value).map(|_| ())
    }

    /// A quaternion has no meaningful single-scalar broadcast, so this always
    /// fails and leaves `self` untouched.
    fn fill(&mut self, _value: f32) -> Result<(), MathError> {
        Err(MathError::UnsupportedOperation {
            operation: "scalar assignment to a quaternion",
        })
    }
}

// --- Conversions ---

impl From<[f32; 4]> for Quaternion {
    #[inline]
    fn from(v: [f32; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }
}

impl From<Quaternion> for [f32; 4] {
    #[inline]
    fn from(q: Quaternion) -> Self {
        *q.as_array()
    }
}

impl TryFrom<&[f32]> for Quaternion {
    type Error = MathError;

    fn try_from(buffer: &[f32]) -> Result<Self, Self::Error> {
        Self::from_slice(buffer)
    }
}

// --- Operator Overloads ---

impl Default for Quaternion {
    /// Returns the identity quaternion, representing no rotation.
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<Quaternion> for Quaternion {
    type Output = Self;
    /// Combines two rotations with the Hamilton product, renormalized with the
    /// default provider.
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        quat_util::mul_map(&self, &rhs, Self::new)
    }
}

impl MulAssign<Quaternion> for Quaternion {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Neg for Quaternion {
    type Output = Self;
    /// Negates all components of the quaternion.
    #[inline]
    fn neg(self) -> Self::Output {
        Self::new(-self.w, -self.x, -self.y, -self.z)
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}; {}, {}, {})", self.w, self.x, self.y, self.z)
    }
}

// --- Approximate comparison ---

impl AbsDiffEq for Quaternion {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.as_array()
            .iter()
            .zip(other.as_array().iter())
            .all(|(a, b)| f32::abs_diff_eq(a, b, epsilon))
    }
}

impl RelativeEq for Quaternion {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.as_array()
            .iter()
            .zip(other.as_array().iter())
            .all(|(a, b)| f32::relative_eq(a, b, epsilon, max_relative))
    }
}

impl UlpsEq for Quaternion {
    fn default_max_ulps() -> u32 {
        f32::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: f32, max_ulps: u32) -> bool {
        self.as_array()
            .iter()
            .zip(other.as_array().iter())
            .all(|(a, b)| f32::ulps_eq(a, b, epsilon, max_ulps))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::provider::{ExactMathProvider, FastMathProvider};
    use crate::math::EPSILON;
    use approx::assert_relative_eq;

    #[test]
    fn test_identity_and_default() {
        let q_ident = Quaternion::IDENTITY;
        let q_def = Quaternion::default();
        assert_eq!(q_ident, q_def);
        assert_eq!(Quaternion::identity(), q_ident);
        assert_relative_eq!(q_ident.w(), 1.0);
        assert_relative_eq!(q_ident.x(), 0.0);
        assert_relative_eq!(q_ident.y(), 0.0);
        assert_relative_eq!(q_ident.z(), 0.0);
        assert_relative_eq!(q_ident.length(), 1.0, epsilon = EPSILON);
    }

    #[test]
    fn test_constructors() {
        let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(Quaternion::from([1.0, 2.0, 3.0, 4.0]), q);
        assert_eq!(Quaternion::from_readable(&[1.0f32, 2.0, 3.0, 4.0]), q);
        assert_eq!(Quaternion::from_readable(&q), q);
        assert_eq!(Quaternion::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0]), Ok(q));
        assert_eq!(<[f32; 4]>::from(q), [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_from_short_buffer_fails() {
        let short: &[f32] = &[1.0, 2.0, 3.0];
        assert_eq!(
            Quaternion::try_from(short),
            Err(MathError::Length {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn test_fluent_setters() {
        let mut q = Quaternion::default();
        q.set_w(4.0).set_x(3.0).set_y(2.0).set_z(1.0);
        assert_eq!(q, Quaternion::new(4.0, 3.0, 2.0, 1.0));

        q.set(0.0, 0.0, 0.0, 0.0).set_y(5.0);
        assert_eq!(q.as_array(), &[0.0, 0.0, 5.0, 0.0]);

        q.set_from(&[9.0f32, 8.0, 7.0, 6.0]);
        assert_eq!(q, Quaternion::new(9.0, 8.0, 7.0, 6.0));
    }

    #[test]
    fn test_set_by_index() {
        let mut q = Quaternion::default();
        q.set_by_index(0, 2.0).unwrap().set_by_index(3, -1.0).unwrap();
        assert_eq!(q, Quaternion::new(2.0, 0.0, 0.0, -1.0));
        assert_eq!(q.get_by_index(3), Ok(-1.0));

        assert_eq!(
            q.set_by_index(4, 1.0).map(|q| *q),
            Err(MathError::Index { index: 4 })
        );
        assert_eq!(q, Quaternion::new(2.0, 0.0, 0.0, -1.0));
    }

    #[test]
    fn test_scalar_assignment_is_unsupported() {
        let mut q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        let err = WritableQuaternion::fill(&mut q, 5.0).unwrap_err();
        assert!(matches!(err, MathError::UnsupportedOperation { .. }));
        assert_eq!(q, Quaternion::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn test_copy_is_independent() {
        let original = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        let mut copy = original.copy();
        copy.set_x(-7.0);
        assert_eq!(original.x(), 2.0);
        assert_eq!(copy.x(), -7.0);
    }

    #[test]
    fn test_conjugate_in_place_and_copy() {
        let q = Quaternion::new(0.5, 1.0, -2.0, 3.0);
        assert_eq!(q.conjugated(), Quaternion::new(0.5, -1.0, 2.0, -3.0));
        assert_eq!(q.conjugated().conjugated(), q);

        let mut m = q;
        m.conjugate().conjugate();
        assert_eq!(m, q);
    }

    #[test]
    fn test_conjugate_and_inverse_unit() {
        let q = Quaternion::new(1.0, 2.0, 3.0, 4.0).normalized();
        let q_conj = q.conjugated();
        let q_inv = q.inversed();
        assert_relative_eq!(q_conj, q_inv, epsilon = EPSILON);
    }

    #[test]
    fn test_multiplication_inverse() {
        let q = Quaternion::new(1.0, -2.0, 0.5, 3.0);
        let q_inv = q.inversed();

        let forward = q.mul_unnormalized(&q_inv);
        let backward = q_inv.mul_unnormalized(&q);
        assert_relative_eq!(forward, Quaternion::IDENTITY, epsilon = EPSILON);
        assert_relative_eq!(backward, Quaternion::IDENTITY, epsilon = EPSILON);

        let mut in_place = q;
        in_place.inverse();
        assert_eq!(in_place, q_inv);
    }

    #[test]
    fn test_multiplication_identity() {
        let q = Quaternion::new(0.2, 0.4, -0.1, 0.3).normalized();
        assert_relative_eq!(q * Quaternion::IDENTITY, q, epsilon = EPSILON);
        assert_relative_eq!(Quaternion::IDENTITY * q, q, epsilon = EPSILON);
    }

    #[test]
    fn test_mul_operator_renormalizes() {
        let a = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        let b = Quaternion::new(5.0, 6.0, 7.0, 8.0);
        let product = a * b;
        assert_relative_eq!(product.length(), 1.0, epsilon = EPSILON);
        assert_eq!(product, a.mul_by(&b, &ExactMathProvider));

        let mut acc = a;
        acc *= b;
        assert_eq!(acc, product);

        assert_eq!(a.mul_unnormalized(&b), Quaternion::new(-60.0, 12.0, 30.0, 24.0));
    }

    #[test]
    fn test_normalization() {
        let q_non_unit = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        let q_norm = q_non_unit.normalized();
        assert_relative_eq!(q_norm.length(), 1.0, epsilon = EPSILON);

        let mut q_mut = q_non_unit;
        q_mut.normalize();
        assert_eq!(q_mut, q_norm);

        let mut q_fast = q_non_unit;
        q_fast.normalize_by(&FastMathProvider::new(2));
        assert_relative_eq!(q_fast, q_norm, epsilon = EPSILON);
        assert_relative_eq!(
            q_non_unit.normalized_by(&ExactMathProvider),
            q_norm,
            epsilon = EPSILON
        );
    }

    #[test]
    fn test_inverse_length_with_explicit_provider() {
        let q = Quaternion::new(0.0, 3.0, 0.0, 4.0);
        assert_eq!(q.inverse_length_by(&ExactMathProvider), 0.2);
        assert_eq!(q.inverse_length_by(&ExactMathProvider), q.inverse_length());
        assert_relative_eq!(
            q.inverse_length_by(&FastMathProvider::new(2)),
            0.2,
            max_relative = 1e-5
        );
    }

    #[test]
    fn test_normalize_zero_quaternion_is_nan() {
        let q_zero = Quaternion::new(0.0, 0.0, 0.0, 0.0);
        let q_norm = q_zero.normalized();
        assert!(q_norm.as_array().iter().all(|c| c.is_nan()));
    }

    #[test]
    fn test_dot_product() {
        let q1 = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        let q2 = Quaternion::new(-1.0, 0.5, 2.0, -0.25);
        assert_relative_eq!(q1.dot(&q2), 5.0);
        assert_eq!(q1.dot(&q2), q2.dot(&q1));
        assert_relative_eq!(q1.dot(&q1), q1.length_squared());
    }

    #[test]
    fn test_neg_and_display() {
        let q = Quaternion::new(1.0, -2.0, 0.5, 0.0);
        assert_eq!(-q, Quaternion::new(-1.0, 2.0, -0.5, -0.0));
        assert_eq!(q.to_string(), "(1; -2, 0.5, 0)");
    }

    #[test]
    fn test_serde_round_trip_keeps_component_names() {
        let q = Quaternion::new(1.0, 0.0, -0.5, 2.0);
        let json = serde_json::to_string(&q).unwrap();
        assert_eq!(json, r#"{"w":1.0,"x":0.0,"y":-0.5,"z":2.0}"#);
        let back: Quaternion = serde_json::from_str(&json).unwrap();
        assert_eq!(back, q);
    }

    #[test]
    fn test_unit_quaternion_end_to_end() {
        let q = Quaternion::new(1.0, 0.0, 0.0, 0.0);
        assert_eq!(q.length_squared(), 1.0);
        assert_eq!(q.length(), 1.0);
        assert_eq!(q.conjugated(), Quaternion::new(1.0, 0.0, 0.0, 0.0));
    }
}

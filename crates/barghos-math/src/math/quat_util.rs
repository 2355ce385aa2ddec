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

//! Stateless quaternion algebra.
//!
//! Each operation is implemented once against [`ReadableQuaternion`] and is
//! offered through two entry points:
//!
//! * `*_into` writes the result into any [`WritableQuaternion`] (a
//!   `[f32; 4]`, a [`QuatSliceMut`](super::QuatSliceMut) over a caller buffer,
//!   or a [`Quaternion`](super::Quaternion)) and returns that same destination.
//! * `*_map` hands the four result scalars `(w, x, y, z)` to a combining
//!   function and returns whatever it builds.
//!
//! Both channels produce identical values. Operations that need a square root
//! come in a `*_by` flavour taking an explicit [`MathProvider`]; the plain
//! flavour resolves [`default_provider`].
//!
//! Nothing here guards against zero-length input: `inverse`, `normalize` and
//! `inverse_length` of a zero quaternion yield infinities or NaNs.

use super::provider::{default_provider, MathProvider};
use super::tuple::{ReadableQuaternion, WritableQuaternion};

// --- Scalars ---

/// Computes `w² + x² + y² + z²`.
#[inline]
pub fn squared_length<Q: ReadableQuaternion + ?Sized>(q: &Q) -> f32 {
    q.w() * q.w() + q.x() * q.x() + q.y() * q.y() + q.z() * q.z()
}

/// Computes the length using the default provider.
#[inline]
pub fn length<Q: ReadableQuaternion + ?Sized>(q: &Q) -> f32 {
    length_by(q, default_provider())
}

/// Computes the length using `provider`.
#[inline]
pub fn length_by<Q, P>(q: &Q, provider: &P) -> f32
where
    Q: ReadableQuaternion + ?Sized,
    P: MathProvider + ?Sized,
{
    provider.sqrt(squared_length(q))
}

/// Computes the reciprocal length using the default provider.
#[inline]
pub fn inverse_length<Q: ReadableQuaternion + ?Sized>(q: &Q) -> f32 {
    inverse_length_by(q, default_provider())
}

/// Computes the reciprocal length using `provider`.
#[inline]
pub fn inverse_length_by<Q, P>(q: &Q, provider: &P) -> f32
where
    Q: ReadableQuaternion + ?Sized,
    P: MathProvider + ?Sized,
{
    provider.inv_sqrt(squared_length(q))
}

/// Computes the four-component dot product.
#[inline]
pub fn dot<A, B>(a: &A, b: &B) -> f32
where
    A: ReadableQuaternion + ?Sized,
    B: ReadableQuaternion + ?Sized,
{
    a.w() * b.w() + a.x() * b.x() + a.y() * b.y() + a.z() * b.z()
}

// --- Conjugate ---

/// Negates the vector part: `(w, -x, -y, -z)`.
#[inline]
pub fn conjugate_map<Q, R>(q: &Q, f: impl FnOnce(f32, f32, f32, f32) -> R) -> R
where
    Q: ReadableQuaternion + ?Sized,
{
    f(q.w(), -q.x(), -q.y(), -q.z())
}

/// Writes the conjugate of `q` into `dest`.
#[inline]
pub fn conjugate_into<'d, Q, D>(q: &Q, dest: &'d mut D) -> &'d mut D
where
    Q: ReadableQuaternion + ?Sized,
    D: WritableQuaternion + ?Sized,
{
    conjugate_map(q, |w, x, y, z| dest.set(w, x, y, z));
    dest
}

// --- Inverse ---

/// Computes the multiplicative inverse: the conjugate divided by the squared
/// length.
#[inline]
pub fn inverse_map<Q, R>(q: &Q, f: impl FnOnce(f32, f32, f32, f32) -> R) -> R
where
    Q: ReadableQuaternion + ?Sized,
{
    let inv = 1.0 / squared_length(q);
    f(q.w() * inv, -q.x() * inv, -q.y() * inv, -q.z() * inv)
}

/// Writes the inverse of `q` into `dest`.
#[inline]
pub fn inverse_into<'d, Q, D>(q: &Q, dest: &'d mut D) -> &'d mut D
where
    Q: ReadableQuaternion + ?Sized,
    D: WritableQuaternion + ?Sized,
{
    inverse_map(q, |w, x, y, z| dest.set(w, x, y, z));
    dest
}

// --- Normalize ---

/// Scales `q` to unit length using `provider`.
#[inline]
pub fn normalize_map_by<Q, P, R>(
    q: &Q,
    provider: &P,
    f: impl FnOnce(f32, f32, f32, f32) -> R,
) -> R
where
    Q: ReadableQuaternion + ?Sized,
    P: MathProvider + ?Sized,
{
    let inv = inverse_length_by(q, provider);
    f(q.w() * inv, q.x() * inv, q.y() * inv, q.z() * inv)
}

/// Scales `q` to unit length using the default provider.
#[inline]
pub fn normalize_map<Q, R>(q: &Q, f: impl FnOnce(f32, f32, f32, f32) -> R) -> R
where
    Q: ReadableQuaternion + ?Sized,
{
    normalize_map_by(q, default_provider(), f)
}

/// Writes `q` scaled to unit length into `dest`, using `provider`.
#[inline]
pub fn normalize_into_by<'d, Q, P, D>(q: &Q, provider: &P, dest: &'d mut D) -> &'d mut D
where
    Q: ReadableQuaternion + ?Sized,
    P: MathProvider + ?Sized,
    D: WritableQuaternion + ?Sized,
{
    normalize_map_by(q, provider, |w, x, y, z| dest.set(w, x, y, z));
    dest
}

/// Writes `q` scaled to unit length into `dest`, using the default provider.
#[inline]
pub fn normalize_into<'d, Q, D>(q: &Q, dest: &'d mut D) -> &'d mut D
where
    Q: ReadableQuaternion + ?Sized,
    D: WritableQuaternion + ?Sized,
{
    normalize_into_by(q, default_provider(), dest)
}

// --- Hamilton product ---

/// Computes the raw Hamilton product `a * b`, without renormalization.
#[inline]
pub fn mul_unnormalized_map<A, B, R>(
    a: &A,
    b: &B,
    f: impl FnOnce(f32, f32, f32, f32) -> R,
) -> R
where
    A: ReadableQuaternion + ?Sized,
    B: ReadableQuaternion + ?Sized,
{
    let (w1, x1, y1, z1) = (a.w(), a.x(), a.y(), a.z());
    let (w2, x2, y2, z2) = (b.w(), b.x(), b.y(), b.z());
    f(
        w1 * w2 - x1 * x2 - y1 * y2 - z1 * z2,
        w1 * x2 + w2 * x1 + y1 * z2 - z1 * y2,
        w1 * y2 + w2 * y1 + z1 * x2 - x1 * z2,
        w1 * z2 + w2 * z1 + x1 * y2 - y1 * x2,
    )
}

/// Writes the raw Hamilton product `a * b` into `dest`.
#[inline]
pub fn mul_unnormalized_into<'d, A, B, D>(a: &A, b: &B, dest: &'d mut D) -> &'d mut D
where
    A: ReadableQuaternion + ?Sized,
    B: ReadableQuaternion + ?Sized,
    D: WritableQuaternion + ?Sized,
{
    mul_unnormalized_map(a, b, |w, x, y, z| dest.set(w, x, y, z));
    dest
}

/// Computes the Hamilton product `a * b` and renormalizes it with `provider`.
///
/// Chained products drift away from unit length; renormalizing every step
/// keeps rotations composed this way on the unit sphere. Use
/// [`mul_unnormalized_map`] for the raw product.
#[inline]
pub fn mul_map_by<A, B, P, R>(
    a: &A,
    b: &B,
    provider: &P,
    f: impl FnOnce(f32, f32, f32, f32) -> R,
) -> R
where
    A: ReadableQuaternion + ?Sized,
    B: ReadableQuaternion + ?Sized,
    P: MathProvider + ?Sized,
{
    let product = mul_unnormalized_map(a, b, |w, x, y, z| [w, x, y, z]);
    normalize_map_by(&product, provider, f)
}

/// Computes the renormalized Hamilton product using the default provider.
#[inline]
pub fn mul_map<A, B, R>(a: &A, b: &B, f: impl FnOnce(f32, f32, f32, f32) -> R) -> R
where
    A: ReadableQuaternion + ?Sized,
    B: ReadableQuaternion + ?Sized,
{
    mul_map_by(a, b, default_provider(), f)
}

/// Writes the renormalized Hamilton product `a * b` into `dest`, using `provider`.
#[inline]
pub fn mul_into_by<'d, A, B, P, D>(a: &A, b: &B, provider: &P, dest: &'d mut D) -> &'d mut D
where
    A: ReadableQuaternion + ?Sized,
    B: ReadableQuaternion + ?Sized,
    P: MathProvider + ?Sized,
    D: WritableQuaternion + ?Sized,
{
    mul_map_by(a, b, provider, |w, x, y, z| dest.set(w, x, y, z));
    dest
}

/// Writes the renormalized Hamilton product `a * b` into `dest`, using the
/// default provider.
#[inline]
pub fn mul_into<'d, A, B, D>(a: &A, b: &B, dest: &'d mut D) -> &'d mut D
where
    A: ReadableQuaternion + ?Sized,
    B: ReadableQuaternion + ?Sized,
    D: WritableQuaternion + ?Sized,
{
    mul_into_by(a, b, default_provider(), dest)
}

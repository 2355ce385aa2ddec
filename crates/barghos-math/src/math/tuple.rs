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

//! The minimal read/write contracts for quaternion-shaped values.
//!
//! Every algebra function in [`quat_util`](super::quat_util) is written once
//! against [`ReadableQuaternion`] and [`WritableQuaternion`]. The concrete
//! [`Quaternion`](super::Quaternion), fixed `[f32; 4]` arrays, and validated
//! slice views all plug into the same code path.
//!
//! Flat buffers store components in `[w, x, y, z]` order.

use super::{MathError, QUAT_LEN};

/// Read access to the four components of a quaternion-shaped value.
pub trait ReadableQuaternion {
    /// The scalar part.
    fn w(&self) -> f32;
    /// The first component of the vector part.
    fn x(&self) -> f32;
    /// The second component of the vector part.
    fn y(&self) -> f32;
    /// The third component of the vector part.
    fn z(&self) -> f32;

    /// Alias of [`w`](Self::w).
    #[inline]
    fn v0(&self) -> f32 {
        self.w()
    }

    /// Alias of [`x`](Self::x).
    #[inline]
    fn v1(&self) -> f32 {
        self.x()
    }

    /// Alias of [`y`](Self::y).
    #[inline]
    fn v2(&self) -> f32 {
        self.y()
    }

    /// Alias of [`z`](Self::z).
    #[inline]
    fn v3(&self) -> f32 {
        self.z()
    }

    /// Reads the component at `index`, where `0` is `w` and `3` is `z`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::Index`] if `index > 3`.
    fn get_by_index(&self, index: usize) -> Result<f32, MathError> {
        match index {
            0 => Ok(self.w()),
            1 => Ok(self.x()),
            2 => Ok(self.y()),
            3 => Ok(self.z()),
            _ => Err(MathError::Index { index }),
        }
    }

    /// Copies the components into a `[w, x, y, z]` array.
    #[inline]
    fn to_array(&self) -> [f32; 4] {
        [self.w(), self.x(), self.y(), self.z()]
    }
}

/// Write access to the four components of a quaternion-shaped value.
pub trait WritableQuaternion {
    /// Overwrites all four components.
    fn set(&mut self, w: f32, x: f32, y: f32, z: f32);

    /// Overwrites the component at `index`, where `0` is `w` and `3` is `z`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::Index`] if `index > 3`. Nothing is written in that case.
    fn set_by_index(&mut self, index: usize, value: f32) -> Result<(), MathError>;

    /// Broadcasts `value` into every component.
    ///
    /// # Errors
    ///
    /// Implementors without a meaningful broadcast return
    /// [`MathError::UnsupportedOperation`].
    fn fill(&mut self, value: f32) -> Result<(), MathError> {
        self.set(value, value, value, value);
        Ok(())
    }
}

impl<T: ReadableQuaternion + ?Sized> ReadableQuaternion for &T {
    fn w(&self) -> f32 {
        (**self).w()
    }
    fn x(&self) -> f32 {
        (**self).x()
    }
    fn y(&self) -> f32 {
        (**self).y()
    }
    fn z(&self) -> f32 {
        (**self).z()
    }
}

// --- Fixed arrays ---

impl ReadableQuaternion for [f32; 4] {
    #[inline]
    fn w(&self) -> f32 {
        self[0]
    }
    #[inline]
    fn x(&self) -> f32 {
        self[1]
    }
    #[inline]
    fn y(&self) -> f32 {
        self[2]
    }
    #[inline]
    fn z(&self) -> f32 {
        self[3]
    }
}

impl WritableQuaternion for [f32; 4] {
    #[inline]
    fn set(&mut self, w: f32, x: f32, y: f32, z: f32) {
        *self = [w, x, y, z];
    }

    fn set_by_index(&mut self, index: usize, value: f32) -> Result<(), MathError> {
        MathError::check_index(index)?;
        self[index] = value;
        Ok(())
    }
}

// --- Slice views ---

/// A read-only view over the first four elements of an `f32` slice.
///
/// The length is checked once, on construction. Elements past the fourth are
/// ignored.
#[derive(Debug, Clone, Copy)]
pub struct QuatSlice<'a> {
    data: &'a [f32; 4],
}

impl<'a> QuatSlice<'a> {
    /// Wraps `data`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::Length`] if `data` holds fewer than four elements.
    pub fn new(data: &'a [f32]) -> Result<Self, MathError> {
        let data = data
            .first_chunk::<QUAT_LEN>()
            .ok_or(MathError::Length {
                expected: QUAT_LEN,
                actual: data.len(),
            })?;
        Ok(Self { data })
    }
}

impl ReadableQuaternion for QuatSlice<'_> {
    fn w(&self) -> f32 {
        self.data[0]
    }
    fn x(&self) -> f32 {
        self.data[1]
    }
    fn y(&self) -> f32 {
        self.data[2]
    }
    fn z(&self) -> f32 {
        self.data[3]
    }
}

/// A mutable view over the first four elements of an `f32` slice.
///
/// This is the flat-buffer output channel: algebra functions write their
/// result through it and hand the same view back to the caller.
#[derive(Debug)]
pub struct QuatSliceMut<'a> {
    data: &'a mut [f32; 4],
}

impl<'a> QuatSliceMut<'a> {
    /// Wraps `data`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::Length`] if `data` holds fewer than four elements.
    pub fn new(data: &'a mut [f32]) -> Result<Self, MathError> {
        let actual = data.len();
        let data = data
            .first_chunk_mut::<QUAT_LEN>()
            .ok_or(MathError::Length {
                expected: QUAT_LEN,
                actual,
            })?;
        Ok(Self { data })
    }

    /// The four wrapped components, in `[w, x, y, z]` order.
    pub fn as_array(&self) -> &[f32; 4] {
        self.data
    }
}

impl ReadableQuaternion for QuatSliceMut<'_> {
    fn w(&self) -> f32 {
        self.data[0]
    }
    fn x(&self) -> f32 {
        self.data[1]
    }
    fn y(&self) -> f32 {
        self.data[2]
    }
    fn z(&self) -> f32 {
        self.data[3]
    }
}

impl WritableQuaternion for QuatSliceMut<'_> {
    fn set(&mut self, w: f32, x: f32, y: f32, z: f32) {
        self.data.set(w, x, y, z);
    }

    fn set_by_index(&mut self, index: usize, value: f32) -> Result<(), MathError> {
        self.data.set_by_index(index, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_read_order() {
        let q = [1.0, 2.0, 3.0, 4.0];
        assert_eq!((q.w(), q.x(), q.y(), q.z()), (1.0, 2.0, 3.0, 4.0));
        assert_eq!((q.v0(), q.v1(), q.v2(), q.v3()), (1.0, 2.0, 3.0, 4.0));
        assert_eq!(q.get_by_index(2), Ok(3.0));
        assert_eq!(q.get_by_index(4), Err(MathError::Index { index: 4 }));
    }

    #[test]
    fn test_array_write() {
        let mut q = [0.0f32; 4];
        q.set(1.0, 2.0, 3.0, 4.0);
        assert_eq!(q, [1.0, 2.0, 3.0, 4.0]);
        q.set_by_index(3, 9.0).unwrap();
        assert_eq!(q, [1.0, 2.0, 3.0, 9.0]);
        assert_eq!(q.set_by_index(4, 1.0), Err(MathError::Index { index: 4 }));
        assert_eq!(q, [1.0, 2.0, 3.0, 9.0]);
    }

    #[test]
    fn test_array_fill_broadcasts() {
        let mut q = [0.0f32; 4];
        q.fill(2.5).unwrap();
        assert_eq!(q, [2.5; 4]);
    }

    #[test]
    fn test_slice_view_rejects_short_buffer() {
        let short = [1.0f32, 2.0, 3.0];
        assert_eq!(
            QuatSlice::new(&short).unwrap_err(),
            MathError::Length {
                expected: 4,
                actual: 3
            }
        );
        let mut short_mut = [1.0f32; 2];
        assert_eq!(
            QuatSliceMut::new(&mut short_mut).unwrap_err(),
            MathError::Length {
                expected: 4,
                actual: 2
            }
        );
    }

    #[test]
    fn test_slice_view_ignores_trailing_elements() {
        let data = [1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0];
        let view = QuatSlice::new(&data).unwrap();
        assert_eq!(view.to_array(), [1.0, 2.0, 3.0, 4.0]);

        let mut buf = [0.0f32; 5];
        {
            let mut view = QuatSliceMut::new(&mut buf).unwrap();
            view.set(1.0, 2.0, 3.0, 4.0);
            assert_eq!(view.as_array(), &[1.0, 2.0, 3.0, 4.0]);
        }
        assert_eq!(buf, [1.0, 2.0, 3.0, 4.0, 0.0]);
    }

    #[test]
    fn test_slice_view_set_by_index() {
        let mut buf = vec![0.0f32; 4];
        let mut view = QuatSliceMut::new(&mut buf).unwrap();
        view.set_by_index(1, 7.0).unwrap();
        assert_eq!(view.set_by_index(8, 1.0), Err(MathError::Index { index: 8 }));
        assert_eq!(buf, vec![0.0, 7.0, 0.0, 0.0]);
    }
}

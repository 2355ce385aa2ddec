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

//! Defines the validation errors raised by the quaternion layer.
//!
//! Only boundary validation is reported here. Numeric edge cases such as a
//! zero-length quaternion are not errors: they flow through as IEEE-754
//! infinities and NaNs.

use thiserror::Error;

/// An error raised at the boundary of a quaternion operation, before any
/// output has been written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    /// A buffer-shaped input or output holds fewer components than required.
    #[error("buffer too short: expected at least {expected} components, got {actual}")]
    Length {
        /// The minimum number of components.
        expected: usize,
        /// The number of components actually supplied.
        actual: usize,
    },
    /// A component index lies outside `[0, 3]`.
    #[error("component index {index} out of range [0, 3]")]
    Index {
        /// The rejected index.
        index: usize,
    },
    /// The operation is deliberately not supported by the receiver.
    #[error("unsupported operation: {operation}")]
    UnsupportedOperation {
        /// A short name of the rejected operation.
        operation: &'static str,
    },
    /// The process-wide default provider is already fixed, either by an earlier
    /// installation or because it was resolved by a first use.
    #[error("the default math provider is already set")]
    DefaultProviderAlreadySet,
}

impl MathError {
    /// Checks that a buffer of `actual` components can hold a quaternion.
    pub(crate) fn check_len(actual: usize) -> Result<(), MathError> {
        if actual < super::QUAT_LEN {
            Err(MathError::Length {
                expected: super::QUAT_LEN,
                actual,
            })
        } else {
            Ok(())
        }
    }

    /// Checks that `index` addresses one of the four components.
    pub(crate) fn check_index(index: usize) -> Result<(), MathError> {
        if index < super::QUAT_LEN {
            Ok(())
        } else {
            Err(MathError::Index { index })
        }
    }
}

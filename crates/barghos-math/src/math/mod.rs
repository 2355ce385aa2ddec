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

//! Provides the quaternion algebra and the square-root providers it runs on.
//!
//! The module is split into a leaf provider layer ([`provider`]), the minimal
//! read/write contracts shared by quaternion-shaped values ([`tuple`]), the
//! [`Quaternion`] value type, and the stateless algebra functions in
//! [`quat_util`].

// --- Fundamental Constants ---

/// A small constant for floating-point comparisons.
pub const EPSILON: f32 = 1e-5;

/// The number of components in a quaternion-shaped value.
pub const QUAT_LEN: usize = 4;

// --- Declare Sub-Modules ---

pub mod error;
pub mod provider;
pub mod quat_util;
pub mod quaternion;
pub mod settings;
pub mod tuple;

// --- Re-export Principal Types ---

pub use self::error::MathError;
pub use self::provider::{
    default_provider, is_default_provider_set, set_default_provider, set_default_provider_boxed,
    ExactMathProvider, FastMathProvider, MathProvider,
};
pub use self::quaternion::Quaternion;
pub use self::settings::{MathSettings, ProviderKind, SettingsError};
pub use self::tuple::{QuatSlice, QuatSliceMut, ReadableQuaternion, WritableQuaternion};

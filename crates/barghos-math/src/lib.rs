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

//! # Barghos Math
//!
//! Quaternion algebra built on a pluggable square-root provider. Every algebra
//! operation is written once against the readable/writable quaternion contracts
//! and can write into a flat buffer, into a quaternion object, or hand its four
//! result scalars to a caller-supplied combining function.

#![warn(missing_docs)]

pub mod math;

pub use math::{
    default_provider, set_default_provider, MathError, MathProvider, MathSettings, Quaternion,
    ReadableQuaternion, WritableQuaternion,
};

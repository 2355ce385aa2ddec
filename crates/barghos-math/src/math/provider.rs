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

//! Square-root providers and the process-wide default provider.
//!
//! A [`MathProvider`] supplies `sqrt` and `inv_sqrt`, letting callers trade
//! accuracy for speed. Algebra functions take a provider explicitly; the
//! convenience entry points resolve [`default_provider`] instead.

use std::fmt;
use std::sync::OnceLock;

use super::MathError;

/// A pure source of square roots and reciprocal square roots.
///
/// Implementations must be stateless (or immutable after construction) so they
/// can be shared freely across threads.
pub trait MathProvider: Send + Sync + fmt::Debug {
    /// Returns the non-negative square root of `x`. The result for negative
    /// input is unspecified.
    fn sqrt(&self, x: f32) -> f32;

    /// Returns `1 / sqrt(x)`. Must not panic for `x == 0`.
    fn inv_sqrt(&self, x: f32) -> f32;

    /// A short human-readable name, used in logs.
    fn name(&self) -> &'static str;
}

/// Uses the platform's correctly rounded `sqrt`.
///
/// `inv_sqrt(0.0)` is `+inf`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExactMathProvider;

impl MathProvider for ExactMathProvider {
    #[inline]
    fn sqrt(&self, x: f32) -> f32 {
        x.sqrt()
    }

    #[inline]
    fn inv_sqrt(&self, x: f32) -> f32 {
        1.0 / x.sqrt()
    }

    fn name(&self) -> &'static str {
        "exact"
    }
}

/// Approximates the reciprocal square root from a bit-level initial guess
/// refined by Newton-Raphson steps.
///
/// One step gives a relative error below `2e-3`, two steps below `5e-6`.
/// `sqrt` is derived as `x * inv_sqrt(x)`, so `sqrt(0.0)` is exactly `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FastMathProvider {
    iterations: u32,
}

impl FastMathProvider {
    /// The magic constant for the initial guess.
    const MAGIC: u32 = 0x5f37_59df;

    /// The largest number of Newton-Raphson steps. Further steps no longer
    /// change an `f32` result.
    pub const MAX_ITERATIONS: u32 = 4;

    /// Creates a provider performing `iterations` Newton-Raphson steps,
    /// clamped to `1..=MAX_ITERATIONS`.
    pub const fn new(iterations: u32) -> Self {
        let iterations = if iterations == 0 {
            1
        } else if iterations > Self::MAX_ITERATIONS {
            Self::MAX_ITERATIONS
        } else {
            iterations
        };
        Self { iterations }
    }

    /// The number of Newton-Raphson steps performed per call.
    pub const fn iterations(&self) -> u32 {
        self.iterations
    }
}

impl Default for FastMathProvider {
    fn default() -> Self {
        Self::new(1)
    }
}

impl MathProvider for FastMathProvider {
    #[inline]
    fn sqrt(&self, x: f32) -> f32 {
        x * self.inv_sqrt(x)
    }

    #[inline]
    fn inv_sqrt(&self, x: f32) -> f32 {
        let half = 0.5 * x;
        let mut y = f32::from_bits(Self::MAGIC.wrapping_sub(x.to_bits() >> 1));
        for _ in 0..self.iterations {
            y *= 1.5 - half * y * y;
        }
        y
    }

    fn name(&self) -> &'static str {
        "fast"
    }
}

// --- Process-wide default ---

static DEFAULT_PROVIDER: OnceLock<Box<dyn MathProvider>> = OnceLock::new();

/// Returns the process-wide default provider.
///
/// The first call fixes the default: if nothing was installed beforehand,
/// [`ExactMathProvider`] is installed and every later call to
/// [`set_default_provider`] fails.
pub fn default_provider() -> &'static dyn MathProvider {
    DEFAULT_PROVIDER
        .get_or_init(|| Box::new(ExactMathProvider))
        .as_ref()
}

/// Installs `provider` as the process-wide default.
///
/// This must happen at startup, before any code resolves the default. Once the
/// default is fixed it cannot be replaced.
///
/// # Errors
///
/// Returns [`MathError::DefaultProviderAlreadySet`] if a default was already
/// installed or already resolved by [`default_provider`].
pub fn set_default_provider<P: MathProvider + 'static>(provider: P) -> Result<(), MathError> {
    set_default_provider_boxed(Box::new(provider))
}

/// Boxed counterpart of [`set_default_provider`], for providers chosen at runtime.
pub fn set_default_provider_boxed(provider: Box<dyn MathProvider>) -> Result<(), MathError> {
    let name = provider.name();
    match DEFAULT_PROVIDER.set(provider) {
        Ok(()) => {
            log::info!("Default math provider set to '{name}'.");
            Ok(())
        }
        Err(rejected) => {
            log::warn!(
                "Ignoring '{}' as default math provider: '{}' is already in use.",
                rejected.name(),
                default_provider().name()
            );
            Err(MathError::DefaultProviderAlreadySet)
        }
    }
}

/// Returns `true` once the process-wide default is fixed.
pub fn is_default_provider_set() -> bool {
    DEFAULT_PROVIDER.get().is_some()
}

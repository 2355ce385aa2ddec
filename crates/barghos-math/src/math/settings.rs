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

//! Configuration for the process-wide math provider.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::provider::{
    set_default_provider_boxed, ExactMathProvider, FastMathProvider, MathProvider,
};
use super::MathError;

/// The family of square-root implementation to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Platform `sqrt`, correctly rounded.
    #[default]
    Exact,
    /// Bit-level estimate refined by Newton-Raphson steps.
    Fast,
}

/// An error produced while loading or validating [`MathSettings`].
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings document is not valid JSON for [`MathSettings`].
    #[error("failed to parse math settings: {0}")]
    Parse(#[from] serde_json::Error),
    /// A field holds a value outside its allowed range.
    #[error("invalid math setting '{field}': {reason}")]
    Invalid {
        /// The offending field.
        field: &'static str,
        /// Why the value was rejected.
        reason: &'static str,
    },
}

/// Selects and tunes the process-wide default [`MathProvider`].
///
/// Missing fields fall back to their [`Default`] values, so `{}` is a valid
/// document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MathSettings {
    /// Which provider family to install.
    pub provider: ProviderKind,
    /// Newton-Raphson steps for [`ProviderKind::Fast`], in
    /// `1..=FastMathProvider::MAX_ITERATIONS`.
    pub newton_iterations: u32,
}

impl Default for MathSettings {
    fn default() -> Self {
        Self {
            provider: ProviderKind::Exact,
            newton_iterations: 1,
        }
    }
}

impl MathSettings {
    /// Parses and validates settings from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Checks that every field is within range.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(1..=FastMathProvider::MAX_ITERATIONS).contains(&self.newton_iterations) {
            return Err(SettingsError::Invalid {
                field: "newton_iterations",
                reason: "must be between 1 and 4",
            });
        }
        Ok(())
    }

    /// Builds the provider these settings describe.
    pub fn build_provider(&self) -> Box<dyn MathProvider> {
        log::debug!(
            "Building '{:?}' math provider ({} Newton iteration(s)).",
            self.provider,
            self.newton_iterations
        );
        match self.provider {
            ProviderKind::Exact => Box::new(ExactMathProvider),
            ProviderKind::Fast => Box::new(FastMathProvider::new(self.newton_iterations)),
        }
    }

    /// Builds the provider and installs it as the process-wide default.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::DefaultProviderAlreadySet`] if the default is already fixed.
    pub fn install(&self) -> Result<(), MathError> {
        set_default_provider_boxed(self.build_provider())
    }
}

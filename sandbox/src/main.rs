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

use anyhow::{Context, Result};
use barghos_math::math::quat_util::{mul_into, mul_unnormalized_into};
use barghos_math::math::ExactMathProvider;
use barghos_math::{default_provider, MathSettings, Quaternion};

const STEPS: usize = 100_000;

/// Loads settings from the JSON file given as first argument, or defaults.
fn load_settings() -> Result<MathSettings> {
    match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("reading math settings from '{path}'"))?;
            let settings = MathSettings::from_json_str(&json)
                .with_context(|| format!("parsing math settings from '{path}'"))?;
            log::info!("Loaded math settings from '{path}': {settings:?}");
            Ok(settings)
        }
        None => Ok(MathSettings::default()),
    }
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();

    load_settings()?.install()?;
    log::info!("Composing {STEPS} rotations with the '{}' provider.", default_provider().name());

    // A small rotation about a skewed axis, slightly off unit length.
    let step = Quaternion::new(0.999_95, 0.005, -0.003, 0.008);

    let mut renormalized = Quaternion::IDENTITY;
    let mut raw = Quaternion::IDENTITY;
    for i in 1..=STEPS {
        let prev = renormalized;
        mul_into(&prev, &step, &mut renormalized);
        let prev = raw;
        mul_unnormalized_into(&prev, &step, &mut raw);

        if i % (STEPS / 5) == 0 {
            log::debug!("step {i}: mul = {renormalized}, mul_unnormalized = {raw}");
        }
    }

    log::info!(
        "mul: {renormalized} (length {:.7})",
        renormalized.length_by(&ExactMathProvider)
    );
    log::info!(
        "mul_unnormalized: {raw} (length {:.7})",
        raw.length_by(&ExactMathProvider)
    );
    Ok(())
}

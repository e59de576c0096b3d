// Copyright 2024 OctoFHIR Team
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

//! Registry configuration options

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// How `arrayItem` validation compares the position against the array length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundsCheck {
    /// Reject positions at or past the end (`len <= position`)
    #[default]
    Strict,
    /// Reject only positions past the end (`len < position`), letting
    /// `position == len` through to evaluation
    Legacy,
}

/// How `arrayAddItem` decides whether a key was supplied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyPolicy {
    /// Any non-null key is used, including `0` and `""`
    #[default]
    Presence,
    /// Only truthy keys are used; falsy keys append instead
    Truthy,
}

/// Configuration for operator validation and evaluation behavior
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Bounds comparison used when validating `arrayItem`
    pub array_item_bounds: BoundsCheck,

    /// Key detection used by `arrayAddItem`
    pub add_item_key: KeyPolicy,

    /// Seed for `arrayRandom`; unseeded draws use the thread-local generator
    pub random_seed: Option<u64>,
}

impl RegistryConfig {
    /// Configuration reproducing the historical boundary and key behavior
    pub fn legacy() -> Self {
        Self {
            array_item_bounds: BoundsCheck::Legacy,
            add_item_key: KeyPolicy::Truthy,
            random_seed: None,
        }
    }

    /// Configuration for tests: strict checks and a fixed random seed
    pub fn testing() -> Self {
        Self {
            random_seed: Some(0x5EED),
            ..Self::default()
        }
    }

    /// Parse a configuration from JSON; missing fields take their defaults
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Set the random seed
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }
}

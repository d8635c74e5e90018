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

//! Settings that steer capability synthesis.

use super::limits::BaselineLimits;
use crate::error::CapsError;
use serde::{Deserialize, Serialize};

/// A collection of settings consulted once per synthesis call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthesisSettings {
    /// The constants used for every baseline-tier limit.
    pub baseline: BaselineLimits,
    /// If `true`, the headline limits are logged at `info` level after synthesis.
    pub log_summary: bool,
}

impl SynthesisSettings {
    /// Parses settings from a JSON document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, CapsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the settings to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, CapsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for SynthesisSettings {
    fn default() -> Self {
        Self {
            baseline: BaselineLimits::default(),
            log_summary: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn empty_document_gives_defaults() {
        let settings = SynthesisSettings::from_json("{}").unwrap();
        assert_eq!(settings, SynthesisSettings::default());
    }

    #[test]
    fn partial_baseline_override() {
        let settings = SynthesisSettings::from_json(
            r#"{ "log_summary": true, "baseline": { "max_renderbuffer_size": 4096, "max_lod_bias": 15.5 } }"#,
        )
        .unwrap();
        assert!(settings.log_summary);
        assert_eq!(settings.baseline.max_renderbuffer_size, 4096);
        assert_relative_eq!(settings.baseline.max_lod_bias, 15.5);
        assert_eq!(settings.baseline.max_vertex_attributes, 16);
    }

    #[test]
    fn json_round_trip() {
        let settings = SynthesisSettings::default();
        let json = settings.to_json().unwrap();
        assert_eq!(SynthesisSettings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn malformed_document_is_an_error() {
        let err = SynthesisSettings::from_json("{ \"log_summary\": 3 }").unwrap_err();
        assert!(matches!(err, CapsError::InvalidSettings(_)));
    }
}

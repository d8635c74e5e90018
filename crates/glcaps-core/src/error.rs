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

//! Error types for identifier parsing and settings loading.
//!
//! Capability synthesis itself has no failure path: whatever the native query
//! layer answers is passed through. These errors only arise at the edges, when
//! text or raw native enum values are turned into the strongly typed
//! identifiers used by the rest of the crate.

use std::fmt;

/// An error raised while converting external input into capability identifiers.
#[derive(Debug)]
pub enum CapsError {
    /// A native limit name (e.g. `"MAX_TEXTURE_SIZE"`) was not recognized.
    UnknownLimitName(String),
    /// A pixel format name (e.g. `"RGB565"`) was not recognized.
    UnknownFormatName(String),
    /// An extension string (e.g. `"GL_OES_texture_npot"`) was not recognized.
    UnknownExtensionName(String),
    /// A raw native enum value does not map to any known identifier.
    UnrecognizedNativeEnum {
        /// What kind of identifier the value was expected to be.
        kind: &'static str,
        /// The raw value reported by the native layer.
        value: u32,
    },
    /// A settings document could not be parsed.
    InvalidSettings(String),
}

impl fmt::Display for CapsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CapsError::UnknownLimitName(name) => write!(f, "Unknown native limit '{name}'"),
            CapsError::UnknownFormatName(name) => write!(f, "Unknown pixel format '{name}'"),
            CapsError::UnknownExtensionName(name) => write!(f, "Unknown extension '{name}'"),
            CapsError::UnrecognizedNativeEnum { kind, value } => {
                write!(f, "Unrecognized native {kind} enum: {value:#06x}")
            }
            CapsError::InvalidSettings(msg) => write!(f, "Invalid synthesis settings: {msg}"),
        }
    }
}

impl std::error::Error for CapsError {}

impl From<serde_json::Error> for CapsError {
    fn from(err: serde_json::Error) -> Self {
        CapsError::InvalidSettings(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_name_display() {
        let err = CapsError::UnknownLimitName("MAX_FOO".to_string());
        assert_eq!(format!("{err}"), "Unknown native limit 'MAX_FOO'");
    }

    #[test]
    fn native_enum_display_is_hex() {
        let err = CapsError::UnrecognizedNativeEnum {
            kind: "pixel format",
            value: 0x8d62,
        };
        assert_eq!(
            format!("{err}"),
            "Unrecognized native pixel format enum: 0x8d62"
        );
    }

    #[test]
    fn settings_error_from_json() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: CapsError = json_err.into();
        assert!(matches!(err, CapsError::InvalidSettings(_)));
    }
}

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

//! Capability data: limits, shader precisions, texture formats and extensions.
//!
//! - **[`limits`]**: the descriptor and its native, baseline and derived tiers.
//! - **[`precision`]**: shader numeric precision descriptors.
//! - **[`format`]**: pixel formats and the per-format capability table.
//! - **[`extensions`]**: the extension flag set.
//! - **[`settings`]**: synthesis settings.

pub mod extensions;
pub mod format;
pub mod limits;
pub mod precision;
pub mod settings;

pub use self::extensions::*;
pub use self::format::*;
pub use self::limits::*;
pub use self::precision::*;
pub use self::settings::*;

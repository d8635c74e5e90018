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

//! # glcaps Core
//!
//! Backend-agnostic capability descriptors and the synthesizer that builds them
//! from a native driver's integer limits.
//!
//! The native binding layer implements [`NativeQuery`]; everything else here is
//! pure computation over its answers. See `glcaps-infra` for concrete adapters.

#![warn(missing_docs)]

pub mod caps;
pub mod error;
pub mod query;
pub mod synth;

pub use caps::{Caps, Extension, Extensions, PixelFormat, TextureCaps, TextureCapsMap};
pub use error::CapsError;
pub use query::{NativeLimit, NativeQuery};
pub use synth::{synthesize_capabilities, synthesize_capabilities_with, SynthesizedCaps};

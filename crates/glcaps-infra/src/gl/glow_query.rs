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

use super::conversions::IntoGl;
use glcaps_core::{NativeLimit, NativeQuery};
use glow::HasContext;

/// A lost context can report `CONTEXT_LOST` forever.
const MAX_PENDING_ERRORS: usize = 32;

/// Answers native limit queries with `glGetIntegerv` on a live GL context.
///
/// The GL error state is left untouched: an unrecognized limit yields whatever
/// the driver writes (typically zero) and a pending `GL_INVALID_ENUM` that the
/// caller may inspect with [`GlowQuery::drain_errors`].
pub struct GlowQuery<'a, C: HasContext> {
    gl: &'a C,
}

impl<'a, C: HasContext> GlowQuery<'a, C> {
    /// Wraps `gl` for capability queries.
    ///
    /// # Safety
    ///
    /// The context behind `gl` must be current on the calling thread for as
    /// long as the returned adapter is used.
    pub unsafe fn new(gl: &'a C) -> Self {
        let version = gl.get_parameter_string(glow::VERSION);
        let renderer = gl.get_parameter_string(glow::RENDERER);
        log::info!("Querying capabilities of \"{renderer}\" ({version})");
        Self { gl }
    }

    /// Pops every pending GL error code, oldest first.
    pub fn drain_errors(&self) -> Vec<u32> {
        let mut errors = Vec::new();
        for _ in 0..MAX_PENDING_ERRORS {
            // SAFETY: the context is current, as promised to `new`.
            let error = unsafe { self.gl.get_error() };
            if error == glow::NO_ERROR {
                break;
            }
            errors.push(error);
        }
        errors
    }
}

impl<C: HasContext> NativeQuery for GlowQuery<'_, C> {
    fn get_integer(&self, limit: NativeLimit) -> i32 {
        // SAFETY: the context is current, as promised to `new`.
        unsafe { self.gl.get_parameter_i32(limit.into_gl()) }
    }
}

impl<C: HasContext> std::fmt::Debug for GlowQuery<'_, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlowQuery").finish_non_exhaustive()
    }
}

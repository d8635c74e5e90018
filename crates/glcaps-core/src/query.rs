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

//! The scalar query contract between the synthesizer and the native binding layer.
//!
//! Every native call site sits behind [`NativeQuery`]. The synthesizer never
//! talks to a driver directly; it asks for one [`NativeLimit`] at a time through
//! [`query_limit`] and takes the answer as-is.

use crate::error::CapsError;
use std::fmt;
use std::str::FromStr;

/// An implementation-defined integer limit that the native driver can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NativeLimit {
    /// Largest width, height or depth of a 3D texture.
    Max3DTextureSize,
    /// Largest width or height of a 2D texture.
    MaxTextureSize,
    /// Largest width or height of a cube map face.
    MaxCubeMapTextureSize,
    /// Largest number of layers in an array texture.
    MaxArrayTextureLayers,
    /// Largest number of simultaneous draw buffers.
    MaxDrawBuffers,
    /// Largest number of color attachments on a framebuffer.
    MaxColorAttachments,
    /// Number of texture image units reachable from the vertex stage.
    MaxVertexTextureImageUnits,
    /// Number of texture image units reachable from the fragment stage.
    MaxTextureImageUnits,
}

impl NativeLimit {
    /// Every limit the synthesizer reads from the driver.
    pub const ALL: [NativeLimit; 8] = [
        NativeLimit::Max3DTextureSize,
        NativeLimit::MaxTextureSize,
        NativeLimit::MaxCubeMapTextureSize,
        NativeLimit::MaxArrayTextureLayers,
        NativeLimit::MaxDrawBuffers,
        NativeLimit::MaxColorAttachments,
        NativeLimit::MaxVertexTextureImageUnits,
        NativeLimit::MaxTextureImageUnits,
    ];

    /// The stable name of the limit, matching the native enum name without its `GL_` prefix.
    pub const fn name(self) -> &'static str {
        match self {
            NativeLimit::Max3DTextureSize => "MAX_3D_TEXTURE_SIZE",
            NativeLimit::MaxTextureSize => "MAX_TEXTURE_SIZE",
            NativeLimit::MaxCubeMapTextureSize => "MAX_CUBE_MAP_TEXTURE_SIZE",
            NativeLimit::MaxArrayTextureLayers => "MAX_ARRAY_TEXTURE_LAYERS",
            NativeLimit::MaxDrawBuffers => "MAX_DRAW_BUFFERS",
            NativeLimit::MaxColorAttachments => "MAX_COLOR_ATTACHMENTS",
            NativeLimit::MaxVertexTextureImageUnits => "MAX_VERTEX_TEXTURE_IMAGE_UNITS",
            NativeLimit::MaxTextureImageUnits => "MAX_TEXTURE_IMAGE_UNITS",
        }
    }
}

impl fmt::Display for NativeLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NativeLimit {
    type Err = CapsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.strip_prefix("GL_").unwrap_or(s);
        NativeLimit::ALL
            .into_iter()
            .find(|limit| limit.name() == trimmed)
            .ok_or_else(|| CapsError::UnknownLimitName(s.to_string()))
    }
}

/// A source of native integer limits, supplied by the native binding layer.
///
/// Implementations answer a single query per call. If the driver does not
/// recognize a limit, the answer is whatever the native API defines for an
/// invalid query; implementations are not required to validate it, and the
/// synthesizer will not either.
pub trait NativeQuery {
    /// Returns the integer the driver reports for `limit`.
    fn get_integer(&self, limit: NativeLimit) -> i32;
}

impl<F> NativeQuery for F
where
    F: Fn(NativeLimit) -> i32,
{
    fn get_integer(&self, limit: NativeLimit) -> i32 {
        self(limit)
    }
}

/// Issues a single native query and returns the raw result, unconverted.
pub fn query_limit<Q: NativeQuery + ?Sized>(query: &Q, limit: NativeLimit) -> i32 {
    let value = query.get_integer(limit);
    log::trace!("Native query {limit} -> {value}");
    value
}

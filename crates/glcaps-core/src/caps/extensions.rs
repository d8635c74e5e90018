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

//! The extension flag set and its derivation from the texture capability table.

use super::format::{PixelFormat, TextureCaps, TextureCapsMap};
use crate::error::CapsError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// An optional feature a context may advertise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Extension {
    /// Sized 8-bit RGB and RGBA render targets.
    Rgb8Rgba8,
    /// BGRA 8-bit textures.
    TextureFormatBgra8888,
    /// Half-float textures.
    TextureHalfFloat,
    /// Linear filtering of half-float textures.
    TextureHalfFloatLinear,
    /// Float textures.
    TextureFloat,
    /// Linear filtering of float textures.
    TextureFloatLinear,
    /// One- and two-channel textures.
    TextureRg,
    /// Depth textures.
    DepthTexture,
    /// Packed 24-bit depth / 8-bit stencil attachments.
    PackedDepthStencil,
    /// sRGB textures and render targets.
    Srgb,
    /// Stencil-only textures.
    TextureStencil8,
    /// Full non-power-of-two texture support.
    TextureNpot,
    /// Immutable texture storage.
    TextureStorage,
}

impl Extension {
    /// Every extension the flag set tracks.
    pub const ALL: [Extension; 13] = [
        Extension::Rgb8Rgba8,
        Extension::TextureFormatBgra8888,
        Extension::TextureHalfFloat,
        Extension::TextureHalfFloatLinear,
        Extension::TextureFloat,
        Extension::TextureFloatLinear,
        Extension::TextureRg,
        Extension::DepthTexture,
        Extension::PackedDepthStencil,
        Extension::Srgb,
        Extension::TextureStencil8,
        Extension::TextureNpot,
        Extension::TextureStorage,
    ];

    /// The extension string a context advertises for this feature.
    pub const fn name(self) -> &'static str {
        match self {
            Extension::Rgb8Rgba8 => "GL_OES_rgb8_rgba8",
            Extension::TextureFormatBgra8888 => "GL_EXT_texture_format_BGRA8888",
            Extension::TextureHalfFloat => "GL_OES_texture_half_float",
            Extension::TextureHalfFloatLinear => "GL_OES_texture_half_float_linear",
            Extension::TextureFloat => "GL_OES_texture_float",
            Extension::TextureFloatLinear => "GL_OES_texture_float_linear",
            Extension::TextureRg => "GL_EXT_texture_rg",
            Extension::DepthTexture => "GL_ANGLE_depth_texture",
            Extension::PackedDepthStencil => "GL_OES_packed_depth_stencil",
            Extension::Srgb => "GL_EXT_sRGB",
            Extension::TextureStencil8 => "GL_OES_texture_stencil8",
            Extension::TextureNpot => "GL_OES_texture_npot",
            Extension::TextureStorage => "GL_EXT_texture_storage",
        }
    }

    /// The formats this extension needs, and what each must support.
    ///
    /// Returns `None` for extensions decided by synthesis policy rather than
    /// by the format table.
    pub fn format_requirement(self) -> Option<(&'static [PixelFormat], TextureCaps)> {
        const TEXTURE: TextureCaps = TextureCaps {
            texturable: true,
            filterable: false,
            renderable: false,
        };
        const FILTER: TextureCaps = TextureCaps {
            texturable: true,
            filterable: true,
            renderable: false,
        };
        const RENDER: TextureCaps = TextureCaps {
            texturable: false,
            filterable: false,
            renderable: true,
        };
        const ALL: TextureCaps = TextureCaps::fully_supported();

        let requirement: (&'static [PixelFormat], TextureCaps) = match self {
            Extension::Rgb8Rgba8 => (&[PixelFormat::Rgb8, PixelFormat::Rgba8], ALL),
            Extension::TextureFormatBgra8888 => (&[PixelFormat::Bgra8], FILTER),
            Extension::TextureHalfFloat => (&[PixelFormat::Rgba16F], TEXTURE),
            Extension::TextureHalfFloatLinear => (&[PixelFormat::Rgba16F], FILTER),
            Extension::TextureFloat => (&[PixelFormat::Rgba32F], TEXTURE),
            Extension::TextureFloatLinear => (&[PixelFormat::Rgba32F], FILTER),
            Extension::TextureRg => (&[PixelFormat::R8, PixelFormat::Rg8], FILTER),
            Extension::DepthTexture => (
                &[
                    PixelFormat::DepthComponent16,
                    PixelFormat::DepthComponent32,
                    PixelFormat::Depth24Stencil8,
                ],
                TEXTURE,
            ),
            Extension::PackedDepthStencil => (&[PixelFormat::Depth24Stencil8], RENDER),
            Extension::Srgb => (&[PixelFormat::Srgb8Alpha8], ALL),
            Extension::TextureStencil8 => (&[PixelFormat::StencilIndex8], TEXTURE),
            Extension::TextureNpot | Extension::TextureStorage => return None,
        };
        Some(requirement)
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Extension {
    type Err = CapsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Extension::ALL
            .into_iter()
            .find(|ext| ext.name() == s)
            .ok_or_else(|| CapsError::UnknownExtensionName(s.to_string()))
    }
}

/// Map from every known [`Extension`] to whether the context supports it.
///
/// Every extension always has an entry, so an unsupported feature reads as
/// `false` rather than missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extensions {
    flags: HashMap<Extension, bool>,
}

impl Extensions {
    /// Creates a set with every extension unsupported.
    pub fn none() -> Self {
        Self {
            flags: Extension::ALL.into_iter().map(|ext| (ext, false)).collect(),
        }
    }

    /// Sets every format-derived flag from `texture_caps`.
    ///
    /// An extension is enabled when every format it requires is present and
    /// satisfies the required capabilities. Policy flags are left untouched.
    pub fn set_texture_extension_support(&mut self, texture_caps: &TextureCapsMap) {
        for ext in Extension::ALL {
            if let Some((formats, required)) = ext.format_requirement() {
                let supported = formats
                    .iter()
                    .all(|format| texture_caps.supports(*format, required));
                self.set(ext, supported);
            }
        }
    }

    /// Returns whether `ext` is supported.
    pub fn is_supported(&self, ext: Extension) -> bool {
        self.flags.get(&ext).copied().unwrap_or(false)
    }

    /// Sets the support flag of `ext`.
    pub fn set(&mut self, ext: Extension, supported: bool) {
        self.flags.insert(ext, supported);
    }

    /// Iterates over every extension with its flag, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Extension, bool)> + '_ {
        Extension::ALL
            .into_iter()
            .map(move |ext| (ext, self.is_supported(ext)))
    }

    /// The sorted extension strings a context would advertise.
    pub fn supported_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self
            .iter()
            .filter(|(_, supported)| *supported)
            .map(|(ext, _)| ext.name())
            .collect();
        names.sort_unstable();
        names
    }
}

impl Default for Extensions {
    fn default() -> Self {
        Self::none()
    }
}

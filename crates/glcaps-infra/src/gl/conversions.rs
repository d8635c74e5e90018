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

//! Mapping between core identifiers and raw GL enum values.

use glcaps_core::{CapsError, NativeLimit, PixelFormat};

/// Raw GL enum values.
///
/// Core names come from `glow` when it is enabled. The two extension tokens
/// are not in its generated tables and are always listed here.
pub mod consts {
    #[cfg(feature = "glow")]
    pub use glow::{
        DEPTH24_STENCIL8, DEPTH_COMPONENT16, MAX_3D_TEXTURE_SIZE, MAX_ARRAY_TEXTURE_LAYERS,
        MAX_COLOR_ATTACHMENTS, MAX_CUBE_MAP_TEXTURE_SIZE, MAX_DRAW_BUFFERS,
        MAX_TEXTURE_IMAGE_UNITS, MAX_TEXTURE_SIZE, MAX_VERTEX_TEXTURE_IMAGE_UNITS, R8, RG8,
        RGB565, RGB5_A1, RGB8, RGBA16F, RGBA32F, RGBA4, RGBA8, SRGB8_ALPHA8, STENCIL_INDEX8,
    };

    #[cfg(not(feature = "glow"))]
    pub use self::headers::*;

    /// Values from the GL ES 3.0 header, for builds without `glow`.
    #[cfg(not(feature = "glow"))]
    mod headers {
        pub const MAX_3D_TEXTURE_SIZE: u32 = 0x8073;
        pub const MAX_TEXTURE_SIZE: u32 = 0x0D33;
        pub const MAX_CUBE_MAP_TEXTURE_SIZE: u32 = 0x851C;
        pub const MAX_ARRAY_TEXTURE_LAYERS: u32 = 0x88FF;
        pub const MAX_DRAW_BUFFERS: u32 = 0x8824;
        pub const MAX_COLOR_ATTACHMENTS: u32 = 0x8CDF;
        pub const MAX_VERTEX_TEXTURE_IMAGE_UNITS: u32 = 0x8B4C;
        pub const MAX_TEXTURE_IMAGE_UNITS: u32 = 0x8872;

        pub const RGB565: u32 = 0x8D62;
        pub const RGBA4: u32 = 0x8056;
        pub const RGB5_A1: u32 = 0x8057;
        pub const RGB8: u32 = 0x8051;
        pub const RGBA8: u32 = 0x8058;
        pub const SRGB8_ALPHA8: u32 = 0x8C43;
        pub const R8: u32 = 0x8229;
        pub const RG8: u32 = 0x822B;
        pub const RGBA16F: u32 = 0x881A;
        pub const RGBA32F: u32 = 0x8814;
        pub const DEPTH_COMPONENT16: u32 = 0x81A5;
        pub const DEPTH24_STENCIL8: u32 = 0x88F0;
        pub const STENCIL_INDEX8: u32 = 0x8D48;
    }

    /// `GL_EXT_texture_storage` sized BGRA.
    pub const BGRA8_EXT: u32 = 0x93A1;
    /// `GL_OES_depth32`; same value as desktop `GL_DEPTH_COMPONENT32`.
    pub const DEPTH_COMPONENT32_OES: u32 = 0x81A7;
}

/// A local extension trait to convert core identifiers into GL enum values.
pub trait IntoGl {
    /// Returns the GL enum value for `self`.
    fn into_gl(self) -> u32;
}

/// The reverse of [`IntoGl`], for values reported by the driver.
pub trait FromGl: Sized {
    /// Maps a raw GL enum value back to a core identifier.
    fn from_gl(value: u32) -> Result<Self, CapsError>;
}

impl IntoGl for NativeLimit {
    fn into_gl(self) -> u32 {
        match self {
            NativeLimit::Max3DTextureSize => consts::MAX_3D_TEXTURE_SIZE,
            NativeLimit::MaxTextureSize => consts::MAX_TEXTURE_SIZE,
            NativeLimit::MaxCubeMapTextureSize => consts::MAX_CUBE_MAP_TEXTURE_SIZE,
            NativeLimit::MaxArrayTextureLayers => consts::MAX_ARRAY_TEXTURE_LAYERS,
            NativeLimit::MaxDrawBuffers => consts::MAX_DRAW_BUFFERS,
            NativeLimit::MaxColorAttachments => consts::MAX_COLOR_ATTACHMENTS,
            NativeLimit::MaxVertexTextureImageUnits => consts::MAX_VERTEX_TEXTURE_IMAGE_UNITS,
            NativeLimit::MaxTextureImageUnits => consts::MAX_TEXTURE_IMAGE_UNITS,
        }
    }
}

impl FromGl for NativeLimit {
    fn from_gl(value: u32) -> Result<Self, CapsError> {
        NativeLimit::ALL
            .into_iter()
            .find(|limit| limit.into_gl() == value)
            .ok_or(CapsError::UnrecognizedNativeEnum {
                kind: "limit",
                value,
            })
    }
}

impl IntoGl for PixelFormat {
    fn into_gl(self) -> u32 {
        match self {
            PixelFormat::Rgb565 => consts::RGB565,
            PixelFormat::Rgba4 => consts::RGBA4,
            PixelFormat::Rgb5A1 => consts::RGB5_A1,
            PixelFormat::Rgb8 => consts::RGB8,
            PixelFormat::Rgba8 => consts::RGBA8,
            PixelFormat::Bgra8 => consts::BGRA8_EXT,
            PixelFormat::Srgb8Alpha8 => consts::SRGB8_ALPHA8,
            PixelFormat::R8 => consts::R8,
            PixelFormat::Rg8 => consts::RG8,
            PixelFormat::Rgba16F => consts::RGBA16F,
            PixelFormat::Rgba32F => consts::RGBA32F,
            PixelFormat::DepthComponent16 => consts::DEPTH_COMPONENT16,
            PixelFormat::DepthComponent32 => consts::DEPTH_COMPONENT32_OES,
            PixelFormat::Depth24Stencil8 => consts::DEPTH24_STENCIL8,
            PixelFormat::StencilIndex8 => consts::STENCIL_INDEX8,
        }
    }
}

impl FromGl for PixelFormat {
    fn from_gl(value: u32) -> Result<Self, CapsError> {
        PixelFormat::ALL
            .into_iter()
            .find(|format| format.into_gl() == value)
            .ok_or(CapsError::UnrecognizedNativeEnum {
                kind: "pixel format",
                value,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glcaps_core::caps::BASELINE_FORMATS;
    use std::collections::HashSet;

    #[test]
    fn limits_map_back_and_forth() {
        for limit in NativeLimit::ALL {
            assert_eq!(NativeLimit::from_gl(limit.into_gl()).unwrap(), limit);
        }
    }

    #[test]
    fn gl_values_are_unique() {
        let limits: HashSet<_> = NativeLimit::ALL.iter().map(|l| l.into_gl()).collect();
        assert_eq!(limits.len(), NativeLimit::ALL.len());
        let formats: HashSet<_> = PixelFormat::ALL.iter().map(|f| f.into_gl()).collect();
        assert_eq!(formats.len(), PixelFormat::ALL.len());
    }

    #[test]
    fn baseline_formats_have_their_header_values() {
        let values: Vec<u32> = BASELINE_FORMATS.iter().map(|f| f.into_gl()).collect();
        assert_eq!(
            values,
            vec![0x8D62, 0x8056, 0x8057, 0x8051, 0x8058, 0x81A5, 0x8D48]
        );
    }

    #[test]
    fn limits_have_their_header_values() {
        let values: Vec<u32> = NativeLimit::ALL.iter().map(|l| l.into_gl()).collect();
        assert_eq!(
            values,
            vec![0x8073, 0x0D33, 0x851C, 0x88FF, 0x8824, 0x8CDF, 0x8B4C, 0x8872]
        );
    }

    #[test]
    fn unknown_value_is_an_error() {
        // GL_MAX_SAMPLES is a real limit, but not one the synthesizer reads.
        let err = NativeLimit::from_gl(0x8D57).unwrap_err();
        assert!(matches!(
            err,
            CapsError::UnrecognizedNativeEnum { kind: "limit", value: 0x8D57 }
        ));
        assert!(PixelFormat::from_gl(0).is_err());
    }
}

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

//! Portable pixel formats and the per-format capability table.

use crate::error::CapsError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// A sized internal format the portable layer can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PixelFormat {
    // 16-bit packed color
    /// 5-6-5 bit RGB.
    Rgb565,
    /// 4-4-4-4 bit RGBA.
    Rgba4,
    /// 5-5-5 bit RGB with a 1-bit alpha.
    Rgb5A1,
    // 8 bits per channel
    /// 8-bit RGB.
    Rgb8,
    /// 8-bit RGBA.
    Rgba8,
    /// 8-bit BGRA.
    Bgra8,
    /// 8-bit sRGB with linear 8-bit alpha.
    Srgb8Alpha8,
    /// One 8-bit red channel.
    R8,
    /// Two 8-bit channels.
    Rg8,
    // Floating point
    /// Four 16-bit float channels.
    Rgba16F,
    /// Four 32-bit float channels.
    Rgba32F,
    // Depth/stencil
    /// 16-bit depth.
    DepthComponent16,
    /// 32-bit depth.
    DepthComponent32,
    /// 24-bit depth with 8-bit stencil.
    Depth24Stencil8,
    /// 8-bit stencil.
    StencilIndex8,
}

/// The formats every conformant driver must texture, filter and render to.
pub const BASELINE_FORMATS: [PixelFormat; 7] = [
    PixelFormat::Rgb565,
    PixelFormat::Rgba4,
    PixelFormat::Rgb5A1,
    PixelFormat::Rgb8,
    PixelFormat::Rgba8,
    PixelFormat::DepthComponent16,
    PixelFormat::StencilIndex8,
];

impl PixelFormat {
    /// Every format the portable layer can name.
    pub const ALL: [PixelFormat; 15] = [
        PixelFormat::Rgb565,
        PixelFormat::Rgba4,
        PixelFormat::Rgb5A1,
        PixelFormat::Rgb8,
        PixelFormat::Rgba8,
        PixelFormat::Bgra8,
        PixelFormat::Srgb8Alpha8,
        PixelFormat::R8,
        PixelFormat::Rg8,
        PixelFormat::Rgba16F,
        PixelFormat::Rgba32F,
        PixelFormat::DepthComponent16,
        PixelFormat::DepthComponent32,
        PixelFormat::Depth24Stencil8,
        PixelFormat::StencilIndex8,
    ];

    /// The stable name of the format.
    pub const fn name(self) -> &'static str {
        match self {
            PixelFormat::Rgb565 => "RGB565",
            PixelFormat::Rgba4 => "RGBA4",
            PixelFormat::Rgb5A1 => "RGB5_A1",
            PixelFormat::Rgb8 => "RGB8",
            PixelFormat::Rgba8 => "RGBA8",
            PixelFormat::Bgra8 => "BGRA8",
            PixelFormat::Srgb8Alpha8 => "SRGB8_ALPHA8",
            PixelFormat::R8 => "R8",
            PixelFormat::Rg8 => "RG8",
            PixelFormat::Rgba16F => "RGBA16F",
            PixelFormat::Rgba32F => "RGBA32F",
            PixelFormat::DepthComponent16 => "DEPTH_COMPONENT16",
            PixelFormat::DepthComponent32 => "DEPTH_COMPONENT32",
            PixelFormat::Depth24Stencil8 => "DEPTH24_STENCIL8",
            PixelFormat::StencilIndex8 => "STENCIL_INDEX8",
        }
    }

    /// Returns `true` if the format belongs to [`BASELINE_FORMATS`].
    pub fn is_baseline(self) -> bool {
        BASELINE_FORMATS.contains(&self)
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PixelFormat {
    type Err = CapsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.strip_prefix("GL_").unwrap_or(s);
        PixelFormat::ALL
            .into_iter()
            .find(|format| format.name() == trimmed)
            .ok_or_else(|| CapsError::UnknownFormatName(s.to_string()))
    }
}

/// What a context can do with one pixel format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextureCaps {
    /// The format can be sampled from.
    pub texturable: bool,
    /// The format supports linear filtering.
    pub filterable: bool,
    /// The format can be a framebuffer attachment.
    pub renderable: bool,
}

impl TextureCaps {
    /// Texturable, filterable and renderable.
    pub const fn fully_supported() -> Self {
        Self {
            texturable: true,
            filterable: true,
            renderable: true,
        }
    }

    /// Returns `true` if every capability set in `required` is also set here.
    pub const fn satisfies(&self, required: TextureCaps) -> bool {
        (self.texturable || !required.texturable)
            && (self.filterable || !required.filterable)
            && (self.renderable || !required.renderable)
    }
}

/// Map from pixel format to its [`TextureCaps`].
///
/// Formats absent from the map are unsupported. Entries are only ever added.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextureCapsMap {
    formats: HashMap<PixelFormat, TextureCaps>,
}

impl TextureCapsMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the capabilities of `format`, replacing any earlier record for it.
    pub fn insert(&mut self, format: PixelFormat, caps: TextureCaps) {
        self.formats.insert(format, caps);
    }

    /// Returns the capabilities of `format`, or `None` if it is unsupported.
    pub fn get(&self, format: PixelFormat) -> Option<TextureCaps> {
        self.formats.get(&format).copied()
    }

    /// Returns `true` if `format` is present and satisfies `required`.
    pub fn supports(&self, format: PixelFormat, required: TextureCaps) -> bool {
        self.get(format).is_some_and(|caps| caps.satisfies(required))
    }

    /// Returns `true` if `format` has a record.
    pub fn contains(&self, format: PixelFormat) -> bool {
        self.formats.contains_key(&format)
    }

    /// Number of formats with a record.
    pub fn len(&self) -> usize {
        self.formats.len()
    }

    /// Returns `true` if no format has a record.
    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }

    /// The recorded formats in a stable order.
    pub fn formats(&self) -> Vec<PixelFormat> {
        let mut formats: Vec<_> = self.formats.keys().copied().collect();
        formats.sort();
        formats
    }

    /// Iterates over all records in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (PixelFormat, TextureCaps)> + '_ {
        self.formats.iter().map(|(format, caps)| (*format, *caps))
    }
}

/// Builds the capability table for the minimum guaranteed profile.
///
/// Every format in [`BASELINE_FORMATS`] is texturable, filterable and
/// renderable on a conformant driver, so nothing is queried.
pub fn build_baseline_texture_caps() -> TextureCapsMap {
    let mut map = TextureCapsMap::new();
    for format in PixelFormat::ALL.into_iter().filter(|f| f.is_baseline()) {
        map.insert(format, TextureCaps::fully_supported());
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baseline_table_is_exactly_the_fixed_set() {
        let map = build_baseline_texture_caps();
        assert_eq!(map.len(), 7);
        for format in PixelFormat::ALL {
            if format.is_baseline() {
                assert_eq!(map.get(format), Some(TextureCaps::fully_supported()));
            } else {
                assert!(!map.contains(format), "{format} should be absent");
            }
        }
    }

    #[test]
    fn baseline_set_covers_each_family() {
        for color in [
            PixelFormat::Rgb565,
            PixelFormat::Rgba4,
            PixelFormat::Rgb5A1,
            PixelFormat::Rgb8,
            PixelFormat::Rgba8,
        ] {
            assert!(color.is_baseline(), "{color} should be in the baseline");
        }
        assert!(BASELINE_FORMATS.contains(&PixelFormat::DepthComponent16));
        assert!(BASELINE_FORMATS.contains(&PixelFormat::StencilIndex8));
    }

    #[test]
    fn satisfies_checks_each_flag() {
        let texture_only = TextureCaps {
            texturable: true,
            ..Default::default()
        };
        assert!(texture_only.satisfies(TextureCaps::default()));
        assert!(texture_only.satisfies(texture_only));
        assert!(!texture_only.satisfies(TextureCaps::fully_supported()));
        assert!(TextureCaps::fully_supported().satisfies(texture_only));
    }

    #[test]
    fn absent_format_is_not_supported() {
        let map = build_baseline_texture_caps();
        assert!(!map.supports(PixelFormat::Bgra8, TextureCaps::default()));
        assert!(map.supports(PixelFormat::Rgba8, TextureCaps::fully_supported()));
    }

    #[test]
    fn format_names_parse() {
        assert_eq!("RGB5_A1".parse::<PixelFormat>().unwrap(), PixelFormat::Rgb5A1);
        assert_eq!(
            "GL_STENCIL_INDEX8".parse::<PixelFormat>().unwrap(),
            PixelFormat::StencilIndex8
        );
        assert!("RGB9_E5".parse::<PixelFormat>().is_err());
    }

    #[test]
    fn formats_are_sorted() {
        let formats = build_baseline_texture_caps().formats();
        let mut sorted = formats.clone();
        sorted.sort();
        assert_eq!(formats, sorted);
        assert_eq!(formats.first(), Some(&PixelFormat::Rgb565));
    }
}

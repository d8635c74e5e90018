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

//! The capability synthesizer.
//!
//! Runs once per graphics context, synchronously, before the context is shared.
//! The result is a single owned value; nothing the caller held before is
//! read or partially overwritten.

use crate::caps::{
    build_baseline_texture_caps, BaselineLimits, Caps, DerivedLimits, Extension, Extensions,
    NativeLimits, ShaderPrecisions, SynthesisSettings, TextureCapsMap,
};
use crate::query::{NativeLimit, NativeQuery};

/// Everything one synthesis call produces.
///
/// The three parts are independent values; cross-references between them are
/// resolved during synthesis, not at query time.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesizedCaps {
    /// The capability descriptor.
    pub caps: Caps,
    /// Per-format texture capabilities.
    pub texture_caps: TextureCapsMap,
    /// Extension support flags.
    pub extensions: Extensions,
}

/// Builds the capabilities of a context from its native driver, using the
/// default baseline constants.
pub fn synthesize_capabilities<Q: NativeQuery + ?Sized>(query: &Q) -> SynthesizedCaps {
    synthesize_capabilities_with(query, &SynthesisSettings::default())
}

/// Builds the capabilities of a context from its native driver.
///
/// Native answers are passed through verbatim, including zero or negative
/// values; derived limits inherit whatever the driver reported.
pub fn synthesize_capabilities_with<Q: NativeQuery + ?Sized>(
    query: &Q,
    settings: &SynthesisSettings,
) -> SynthesizedCaps {
    // --- 1. Native limits ---
    let native = NativeLimits::query(query);
    log::debug!("Queried {} native limits.", NativeLimit::ALL.len());

    // --- 2. Baseline limits ---
    let baseline: BaselineLimits = settings.baseline;

    // --- 3. Derived limits ---
    let derived = DerivedLimits::compute(&native, &baseline);

    // --- 4. Shader precisions ---
    let shader_precisions = ShaderPrecisions::baseline();

    let caps = Caps::from_tiers(&native, &baseline, &derived, shader_precisions);

    // --- 5. Texture formats ---
    let texture_caps = build_baseline_texture_caps();
    log::debug!("Texture caps populated for {} formats.", texture_caps.len());

    // --- 6. Extensions ---
    let mut extensions = Extensions::none();
    extensions.set_texture_extension_support(&texture_caps);
    extensions.set(Extension::TextureNpot, true);
    extensions.set(Extension::TextureStorage, true);
    log::debug!("Extensions: {:?}", extensions.supported_names());

    if settings.log_summary {
        log::info!(
            "Capabilities: max texture {}, viewport {}x{}, draw buffers {}, color attachments {}, combined texture units {}",
            caps.max_2d_texture_size,
            caps.max_viewport_width,
            caps.max_viewport_height,
            caps.max_draw_buffers,
            caps.max_color_attachments,
            caps.max_combined_texture_image_units
        );
    }

    SynthesizedCaps {
        caps,
        texture_caps,
        extensions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::caps::{
        NumericKind, PixelFormat, PrecisionQualifier, ShaderStage, TextureCaps, TypePrecision,
        BASELINE_FORMATS,
    };
    use approx::assert_relative_eq;

    fn scenario_driver(limit: NativeLimit) -> i32 {
        match limit {
            NativeLimit::MaxTextureSize => 4096,
            NativeLimit::MaxDrawBuffers => 8,
            NativeLimit::MaxColorAttachments => 8,
            NativeLimit::MaxVertexTextureImageUnits => 16,
            NativeLimit::MaxTextureImageUnits => 16,
            NativeLimit::Max3DTextureSize => 2048,
            NativeLimit::MaxCubeMapTextureSize => 4096,
            NativeLimit::MaxArrayTextureLayers => 256,
        }
    }

    #[test]
    fn end_to_end_scenario() {
        let result = synthesize_capabilities(&scenario_driver);
        let caps = &result.caps;

        assert_eq!(caps.max_2d_texture_size, 4096);
        assert_eq!(caps.max_viewport_width, 4096);
        assert_eq!(caps.max_viewport_height, 4096);
        assert_eq!(caps.max_draw_buffers, 8);
        assert_eq!(caps.max_color_attachments, 8);
        assert_eq!(caps.max_combined_texture_image_units, 32);
    }

    #[test]
    fn native_limits_are_passed_through() {
        let result = synthesize_capabilities(&scenario_driver);
        let caps = &result.caps;
        assert_eq!(caps.max_3d_texture_size, 2048);
        assert_eq!(caps.max_cube_map_texture_size, 4096);
        assert_eq!(caps.max_array_texture_layers, 256);
        assert_eq!(caps.max_vertex_texture_image_units, 16);
        assert_eq!(caps.max_texture_image_units, 16);
    }

    #[test]
    fn baseline_ignores_the_driver() {
        let huge = synthesize_capabilities(&|_: NativeLimit| -> i32 { 1 << 20 });
        let zero = synthesize_capabilities(&|_: NativeLimit| -> i32 { 0 });

        for caps in [&huge.caps, &zero.caps] {
            assert_eq!(caps.max_element_index, i64::from(u32::MAX));
            assert_relative_eq!(caps.max_lod_bias, 2.0);
            assert_eq!(caps.max_renderbuffer_size, 2048);
            assert_relative_eq!(caps.min_aliased_point_size, 1.0);
            assert_relative_eq!(caps.max_aliased_point_size, 1.0);
            assert_relative_eq!(caps.min_aliased_line_width, 1.0);
            assert_relative_eq!(caps.max_aliased_line_width, 1.0);
            assert_eq!(caps.max_elements_indices, 0);
            assert_eq!(caps.max_elements_vertices, 0);
            assert_eq!(caps.max_server_wait_timeout, 0);
            assert_eq!(caps.max_vertex_attributes, 16);
            assert_eq!(caps.max_vertex_uniform_vectors, 256);
            assert_eq!(caps.max_vertex_uniform_blocks, 12);
            assert_eq!(caps.max_vertex_output_components, 64);
            assert_eq!(caps.max_fragment_uniform_components, 896);
            assert_eq!(caps.max_fragment_uniform_vectors, 224);
            assert_eq!(caps.max_fragment_uniform_blocks, 12);
            assert_eq!(caps.max_fragment_input_components, 60);
            assert_eq!(caps.min_program_texel_offset, -8);
            assert_eq!(caps.max_program_texel_offset, 7);
            assert_eq!(caps.max_uniform_buffer_bindings, 24);
            assert_eq!(caps.max_uniform_block_size, 16384);
            assert_eq!(caps.uniform_buffer_offset_alignment, 1);
            assert_eq!(caps.max_combined_uniform_blocks, 24);
            assert_eq!(caps.max_varying_components, 60);
            assert_eq!(caps.max_varying_vectors, 15);
            assert_eq!(caps.max_transform_feedback_interleaved_components, 64);
            assert_eq!(caps.max_transform_feedback_separate_attributes, 4);
            assert_eq!(caps.max_transform_feedback_separate_components, 4);
        }
        assert_eq!(huge.caps.max_combined_fragment_uniform_components, 50_048);
    }

    #[test]
    fn degenerate_answers_propagate_into_derived_limits() {
        let result = synthesize_capabilities(&|limit: NativeLimit| -> i32 {
            match limit {
                NativeLimit::MaxTextureSize => -1,
                NativeLimit::MaxVertexTextureImageUnits => 0,
                NativeLimit::MaxTextureImageUnits => -4,
                _ => 0,
            }
        });
        assert_eq!(result.caps.max_draw_buffers, 0);
        assert_eq!(result.caps.max_viewport_width, -1);
        assert_eq!(result.caps.max_viewport_height, -1);
        assert_eq!(result.caps.max_combined_texture_image_units, -4);
    }

    #[test]
    fn every_precision_is_baseline() {
        let result = synthesize_capabilities(&scenario_driver);
        let precisions = &result.caps.shader_precisions;
        for stage in ShaderStage::ALL {
            for qualifier in PrecisionQualifier::ALL {
                assert_eq!(
                    precisions.get(stage, qualifier, NumericKind::Float),
                    TypePrecision::ieee_float()
                );
                assert_eq!(
                    precisions.get(stage, qualifier, NumericKind::Int),
                    TypePrecision::twos_complement_int(32)
                );
            }
        }
    }

    #[test]
    fn format_table_is_the_fixed_set() {
        let result = synthesize_capabilities(&scenario_driver);
        let mut expected = BASELINE_FORMATS.to_vec();
        expected.sort();
        assert_eq!(result.texture_caps.formats(), expected);
        for (_, caps) in result.texture_caps.iter() {
            assert_eq!(caps, TextureCaps::fully_supported());
        }
        assert!(!result.texture_caps.contains(PixelFormat::Bgra8));
    }

    #[test]
    fn policy_extensions_are_always_on() {
        for answer in [-1, 0, 1, 4096] {
            let result = synthesize_capabilities(&move |_: NativeLimit| -> i32 { answer });
            assert!(result.extensions.is_supported(Extension::TextureNpot));
            assert!(result.extensions.is_supported(Extension::TextureStorage));
            assert!(result.extensions.is_supported(Extension::Rgb8Rgba8));
            assert!(!result.extensions.is_supported(Extension::DepthTexture));
        }
    }

    #[test]
    fn synthesis_is_idempotent() {
        let first = synthesize_capabilities(&scenario_driver);
        let second = synthesize_capabilities(&scenario_driver);
        assert_eq!(first, second);
    }

    #[test]
    fn settings_upgrade_a_baseline_field() {
        let mut settings = SynthesisSettings::default();
        settings.baseline.max_renderbuffer_size = 16384;
        settings.log_summary = true;
        let result = synthesize_capabilities_with(&scenario_driver, &settings);
        assert_eq!(result.caps.max_renderbuffer_size, 16384);
        assert_eq!(result.caps.max_combined_texture_image_units, 32);
    }
}

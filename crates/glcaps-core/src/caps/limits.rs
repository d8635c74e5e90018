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

//! The capability descriptor and the three tiers it is assembled from.
//!
//! Every limit belongs to exactly one tier:
//!
//! - [`NativeLimits`]: read once from the driver and kept verbatim.
//! - [`BaselineLimits`]: minimum-conformance constants, never queried.
//! - [`DerivedLimits`]: computed from the other two tiers.
//!
//! Moving a limit from baseline to native means moving one field between
//! structs; the synthesizer itself does not change shape.

use super::precision::ShaderPrecisions;
use crate::query::{query_limit, NativeLimit, NativeQuery};
use serde::{Deserialize, Serialize};

/// Bytes per 32-bit uniform component.
const BYTES_PER_UNIFORM_COMPONENT: i64 = 4;

/// Which tier a descriptor field comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LimitTier {
    /// Answered by the native driver.
    Native(NativeLimit),
    /// A minimum-conformance constant.
    Baseline,
    /// Computed from other fields.
    Derived,
}

/// Limits read from the native driver, unconverted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NativeLimits {
    /// `MAX_3D_TEXTURE_SIZE`
    pub max_3d_texture_size: i32,
    /// `MAX_TEXTURE_SIZE`
    pub max_2d_texture_size: i32,
    /// `MAX_CUBE_MAP_TEXTURE_SIZE`
    pub max_cube_map_texture_size: i32,
    /// `MAX_ARRAY_TEXTURE_LAYERS`
    pub max_array_texture_layers: i32,
    /// `MAX_DRAW_BUFFERS`
    pub max_draw_buffers: i32,
    /// `MAX_COLOR_ATTACHMENTS`
    pub max_color_attachments: i32,
    /// `MAX_VERTEX_TEXTURE_IMAGE_UNITS`
    pub max_vertex_texture_image_units: i32,
    /// `MAX_TEXTURE_IMAGE_UNITS`
    pub max_texture_image_units: i32,
}

impl NativeLimits {
    /// Issues one native query per field.
    pub fn query<Q: NativeQuery + ?Sized>(query: &Q) -> Self {
        let mut limits = Self::default();
        for limit in NativeLimit::ALL {
            *limits.field_mut(limit) = query_limit(query, limit);
        }
        limits
    }

    /// Returns the stored answer for `limit`.
    pub fn get(&self, limit: NativeLimit) -> i32 {
        match limit {
            NativeLimit::Max3DTextureSize => self.max_3d_texture_size,
            NativeLimit::MaxTextureSize => self.max_2d_texture_size,
            NativeLimit::MaxCubeMapTextureSize => self.max_cube_map_texture_size,
            NativeLimit::MaxArrayTextureLayers => self.max_array_texture_layers,
            NativeLimit::MaxDrawBuffers => self.max_draw_buffers,
            NativeLimit::MaxColorAttachments => self.max_color_attachments,
            NativeLimit::MaxVertexTextureImageUnits => self.max_vertex_texture_image_units,
            NativeLimit::MaxTextureImageUnits => self.max_texture_image_units,
        }
    }

    /// Iterates over every native limit with its stored answer.
    pub fn iter(&self) -> impl Iterator<Item = (NativeLimit, i32)> + '_ {
        NativeLimit::ALL
            .into_iter()
            .map(move |limit| (limit, self.get(limit)))
    }

    fn field_mut(&mut self, limit: NativeLimit) -> &mut i32 {
        match limit {
            NativeLimit::Max3DTextureSize => &mut self.max_3d_texture_size,
            NativeLimit::MaxTextureSize => &mut self.max_2d_texture_size,
            NativeLimit::MaxCubeMapTextureSize => &mut self.max_cube_map_texture_size,
            NativeLimit::MaxArrayTextureLayers => &mut self.max_array_texture_layers,
            NativeLimit::MaxDrawBuffers => &mut self.max_draw_buffers,
            NativeLimit::MaxColorAttachments => &mut self.max_color_attachments,
            NativeLimit::MaxVertexTextureImageUnits => &mut self.max_vertex_texture_image_units,
            NativeLimit::MaxTextureImageUnits => &mut self.max_texture_image_units,
        }
    }
}

/// Limits the portable layer guarantees without asking the driver.
///
/// [`Default`] yields the OpenGL ES 3.0 minimums (tables 6.28 to 6.34).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaselineLimits {
    // Table 6.28
    /// Largest index value for indexed draws.
    pub max_element_index: i64,
    /// Largest absolute texture level-of-detail bias.
    pub max_lod_bias: f32,
    /// Largest renderbuffer width or height.
    pub max_renderbuffer_size: i32,
    /// Smallest aliased point size.
    pub min_aliased_point_size: f32,
    /// Largest aliased point size.
    pub max_aliased_point_size: f32,
    /// Smallest aliased line width.
    pub min_aliased_line_width: f32,
    /// Largest aliased line width.
    pub max_aliased_line_width: f32,

    // Table 6.29
    /// Recommended maximum index count for `DrawRangeElements`.
    pub max_elements_indices: i32,
    /// Recommended maximum vertex count for `DrawRangeElements`.
    pub max_elements_vertices: i32,
    /// Largest timeout accepted by `glWaitSync`, in nanoseconds.
    pub max_server_wait_timeout: i64,

    // Table 6.31
    /// Number of generic vertex attributes.
    pub max_vertex_attributes: i32,
    /// Default-block uniform components in the vertex stage.
    pub max_vertex_uniform_components: i32,
    /// Default-block uniform vectors in the vertex stage.
    pub max_vertex_uniform_vectors: i32,
    /// Uniform blocks in the vertex stage.
    pub max_vertex_uniform_blocks: i32,
    /// Output components written by the vertex stage.
    pub max_vertex_output_components: i32,

    // Table 6.32
    /// Default-block uniform components in the fragment stage.
    pub max_fragment_uniform_components: i32,
    /// Default-block uniform vectors in the fragment stage.
    pub max_fragment_uniform_vectors: i32,
    /// Uniform blocks in the fragment stage.
    pub max_fragment_uniform_blocks: i32,
    /// Input components read by the fragment stage.
    pub max_fragment_input_components: i32,
    /// Smallest texel offset for offset texture lookups.
    pub min_program_texel_offset: i32,
    /// Largest texel offset for offset texture lookups.
    pub max_program_texel_offset: i32,

    // Table 6.33
    /// Uniform buffer binding points.
    pub max_uniform_buffer_bindings: i32,
    /// Largest uniform block, in bytes.
    pub max_uniform_block_size: i64,
    /// Required alignment of uniform buffer offsets, in bytes.
    pub uniform_buffer_offset_alignment: i32,
    /// Uniform blocks across all stages of a program.
    pub max_combined_uniform_blocks: i32,
    /// Varying components between stages.
    pub max_varying_components: i32,
    /// Varying vectors between stages.
    pub max_varying_vectors: i32,

    // Table 6.34
    /// Components captured in interleaved transform feedback mode.
    pub max_transform_feedback_interleaved_components: i32,
    /// Attributes captured in separate transform feedback mode.
    pub max_transform_feedback_separate_attributes: i32,
    /// Components per attribute in separate transform feedback mode.
    pub max_transform_feedback_separate_components: i32,
}

impl Default for BaselineLimits {
    fn default() -> Self {
        Self {
            max_element_index: i64::from(u32::MAX),
            max_lod_bias: 2.0,
            max_renderbuffer_size: 2048,
            min_aliased_point_size: 1.0,
            max_aliased_point_size: 1.0,
            min_aliased_line_width: 1.0,
            max_aliased_line_width: 1.0,

            max_elements_indices: 0,
            max_elements_vertices: 0,
            max_server_wait_timeout: 0,

            max_vertex_attributes: 16,
            // ES 3.0 minimum, not zero, so the combined vertex total is 50,176.
            max_vertex_uniform_components: 1024,
            // Historically assigned 1024 and then overwritten with 256; the
            // final value is kept. 256 is the ES 3.0 minimum, 1024 is not.
            max_vertex_uniform_vectors: 256,
            max_vertex_uniform_blocks: 12,
            max_vertex_output_components: 64,

            max_fragment_uniform_components: 896,
            max_fragment_uniform_vectors: 224,
            max_fragment_uniform_blocks: 12,
            max_fragment_input_components: 60,
            min_program_texel_offset: -8,
            max_program_texel_offset: 7,

            max_uniform_buffer_bindings: 24,
            max_uniform_block_size: 16384,
            uniform_buffer_offset_alignment: 1,
            max_combined_uniform_blocks: 24,
            max_varying_components: 60,
            max_varying_vectors: 15,

            max_transform_feedback_interleaved_components: 64,
            max_transform_feedback_separate_attributes: 4,
            max_transform_feedback_separate_components: 4,
        }
    }
}

/// Limits computed from the native and baseline tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DerivedLimits {
    /// Equal to the largest 2D texture size.
    pub max_viewport_width: i32,
    /// Equal to the viewport width.
    pub max_viewport_height: i32,
    /// Uniform components reachable from the vertex stage, blocks included.
    pub max_combined_vertex_uniform_components: i64,
    /// Uniform components reachable from the fragment stage, blocks included.
    pub max_combined_fragment_uniform_components: i64,
    /// Vertex plus fragment texture image units.
    pub max_combined_texture_image_units: i64,
}

impl DerivedLimits {
    /// Computes every derived limit in dependency order.
    pub fn compute(native: &NativeLimits, baseline: &BaselineLimits) -> Self {
        let max_viewport_width = native.max_2d_texture_size;
        let max_viewport_height = max_viewport_width;

        Self {
            max_viewport_width,
            max_viewport_height,
            max_combined_vertex_uniform_components: combined_uniform_components(
                baseline.max_vertex_uniform_blocks,
                baseline.max_uniform_block_size,
                baseline.max_vertex_uniform_components,
            ),
            max_combined_fragment_uniform_components: combined_uniform_components(
                baseline.max_fragment_uniform_blocks,
                baseline.max_uniform_block_size,
                baseline.max_fragment_uniform_components,
            ),
            max_combined_texture_image_units: combined_texture_image_units(
                native.max_vertex_texture_image_units,
                native.max_texture_image_units,
            ),
        }
    }
}

/// `blocks * (block_size / 4) + components`, with truncating division.
pub fn combined_uniform_components(blocks: i32, block_size: i64, components: i32) -> i64 {
    i64::from(blocks) * (block_size / BYTES_PER_UNIFORM_COMPONENT) + i64::from(components)
}

/// `vertex_units + fragment_units`, widened so no input pair can overflow.
pub fn combined_texture_image_units(vertex_units: i32, fragment_units: i32) -> i64 {
    i64::from(vertex_units) + i64::from(fragment_units)
}

/// Every implementation limit the portable layer may rely on for one context.
///
/// Built once by the synthesizer and read-only afterward. Each field carries
/// the meaning of the same-named field in [`NativeLimits`], [`BaselineLimits`]
/// or [`DerivedLimits`]; [`Caps::tier_of`] tells which.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Caps {
    // Table 6.28
    /// Largest index value usable in an indexed draw.
    pub max_element_index: i64,
    /// Largest width, height or depth of a 3D texture.
    pub max_3d_texture_size: i32,
    /// Largest width or height of a 2D texture.
    pub max_2d_texture_size: i32,
    /// Largest face size of a cube map texture.
    pub max_cube_map_texture_size: i32,
    /// Largest layer count of an array texture.
    pub max_array_texture_layers: i32,
    /// Largest absolute texture level-of-detail bias.
    pub max_lod_bias: f32,
    /// Largest width or height of a renderbuffer.
    pub max_renderbuffer_size: i32,
    /// Number of simultaneous fragment shader outputs.
    pub max_draw_buffers: i32,
    /// Number of color attachment points on a framebuffer.
    pub max_color_attachments: i32,
    /// Largest viewport width; equals the 2D texture size.
    pub max_viewport_width: i32,
    /// Largest viewport height; equals the 2D texture size.
    pub max_viewport_height: i32,
    /// Smallest aliased point size.
    pub min_aliased_point_size: f32,
    /// Largest aliased point size.
    pub max_aliased_point_size: f32,
    /// Narrowest aliased line width.
    pub min_aliased_line_width: f32,
    /// Widest aliased line width.
    pub max_aliased_line_width: f32,

    // Table 6.29
    /// Recommended maximum index count; 0 means no recommendation.
    pub max_elements_indices: i32,
    /// Recommended maximum vertex count; 0 means no recommendation.
    pub max_elements_vertices: i32,
    /// Precision of every stage, qualifier and numeric kind.
    pub shader_precisions: ShaderPrecisions,
    /// Largest server-side sync wait, in nanoseconds.
    pub max_server_wait_timeout: i64,

    // Table 6.31
    /// Number of generic vertex attributes.
    pub max_vertex_attributes: i32,
    /// Default-block uniform components in a vertex shader.
    pub max_vertex_uniform_components: i32,
    /// Default-block uniform vectors in a vertex shader.
    pub max_vertex_uniform_vectors: i32,
    /// Uniform blocks per vertex shader.
    pub max_vertex_uniform_blocks: i32,
    /// Output components written by a vertex shader.
    pub max_vertex_output_components: i32,
    /// Texture units reachable from a vertex shader.
    pub max_vertex_texture_image_units: i32,

    // Table 6.32
    /// Default-block uniform components in a fragment shader.
    pub max_fragment_uniform_components: i32,
    /// Default-block uniform vectors in a fragment shader.
    pub max_fragment_uniform_vectors: i32,
    /// Uniform blocks per fragment shader.
    pub max_fragment_uniform_blocks: i32,
    /// Input components read by a fragment shader.
    pub max_fragment_input_components: i32,
    /// Texture units reachable from a fragment shader.
    pub max_texture_image_units: i32,
    /// Most negative texel offset in a texture lookup.
    pub min_program_texel_offset: i32,
    /// Most positive texel offset in a texture lookup.
    pub max_program_texel_offset: i32,

    // Table 6.33
    /// Number of uniform buffer binding points.
    pub max_uniform_buffer_bindings: i32,
    /// Largest uniform block, in bytes.
    pub max_uniform_block_size: i64,
    /// Required alignment of uniform buffer offsets, in bytes.
    pub uniform_buffer_offset_alignment: i32,
    /// Uniform blocks across all stages of a program.
    pub max_combined_uniform_blocks: i32,
    /// Vertex uniform components across blocks and the default block.
    pub max_combined_vertex_uniform_components: i64,
    /// Fragment uniform components across blocks and the default block.
    pub max_combined_fragment_uniform_components: i64,
    /// Interpolated components passed between stages.
    pub max_varying_components: i32,
    /// Interpolated vectors passed between stages.
    pub max_varying_vectors: i32,
    /// Texture units across all stages.
    pub max_combined_texture_image_units: i64,

    // Table 6.34
    /// Components captured in interleaved transform feedback.
    pub max_transform_feedback_interleaved_components: i32,
    /// Attributes captured in separate transform feedback.
    pub max_transform_feedback_separate_attributes: i32,
    /// Components per attribute in separate transform feedback.
    pub max_transform_feedback_separate_components: i32,
}

impl Caps {
    /// Flattens the three tiers and the precision table into one descriptor.
    pub fn from_tiers(
        native: &NativeLimits,
        baseline: &BaselineLimits,
        derived: &DerivedLimits,
        shader_precisions: ShaderPrecisions,
    ) -> Self {
        Self {
            max_element_index: baseline.max_element_index,
            max_3d_texture_size: native.max_3d_texture_size,
            max_2d_texture_size: native.max_2d_texture_size,
            max_cube_map_texture_size: native.max_cube_map_texture_size,
            max_array_texture_layers: native.max_array_texture_layers,
            max_lod_bias: baseline.max_lod_bias,
            max_renderbuffer_size: baseline.max_renderbuffer_size,
            max_draw_buffers: native.max_draw_buffers,
            max_color_attachments: native.max_color_attachments,
            max_viewport_width: derived.max_viewport_width,
            max_viewport_height: derived.max_viewport_height,
            min_aliased_point_size: baseline.min_aliased_point_size,
            max_aliased_point_size: baseline.max_aliased_point_size,
            min_aliased_line_width: baseline.min_aliased_line_width,
            max_aliased_line_width: baseline.max_aliased_line_width,

            max_elements_indices: baseline.max_elements_indices,
            max_elements_vertices: baseline.max_elements_vertices,
            shader_precisions,
            max_server_wait_timeout: baseline.max_server_wait_timeout,

            max_vertex_attributes: baseline.max_vertex_attributes,
            max_vertex_uniform_components: baseline.max_vertex_uniform_components,
            max_vertex_uniform_vectors: baseline.max_vertex_uniform_vectors,
            max_vertex_uniform_blocks: baseline.max_vertex_uniform_blocks,
            max_vertex_output_components: baseline.max_vertex_output_components,
            max_vertex_texture_image_units: native.max_vertex_texture_image_units,

            max_fragment_uniform_components: baseline.max_fragment_uniform_components,
            max_fragment_uniform_vectors: baseline.max_fragment_uniform_vectors,
            max_fragment_uniform_blocks: baseline.max_fragment_uniform_blocks,
            max_fragment_input_components: baseline.max_fragment_input_components,
            max_texture_image_units: native.max_texture_image_units,
            min_program_texel_offset: baseline.min_program_texel_offset,
            max_program_texel_offset: baseline.max_program_texel_offset,

            max_uniform_buffer_bindings: baseline.max_uniform_buffer_bindings,
            max_uniform_block_size: baseline.max_uniform_block_size,
            uniform_buffer_offset_alignment: baseline.uniform_buffer_offset_alignment,
            max_combined_uniform_blocks: baseline.max_combined_uniform_blocks,
            max_combined_vertex_uniform_components: derived.max_combined_vertex_uniform_components,
            max_combined_fragment_uniform_components: derived
                .max_combined_fragment_uniform_components,
            max_varying_components: baseline.max_varying_components,
            max_varying_vectors: baseline.max_varying_vectors,
            max_combined_texture_image_units: derived.max_combined_texture_image_units,

            max_transform_feedback_interleaved_components: baseline
                .max_transform_feedback_interleaved_components,
            max_transform_feedback_separate_attributes: baseline
                .max_transform_feedback_separate_attributes,
            max_transform_feedback_separate_components: baseline
                .max_transform_feedback_separate_components,
        }
    }

    /// Reports which tier produced the field called `field`.
    ///
    /// Returns `None` for unknown names and for `shader_precisions`, which is
    /// a table rather than a scalar.
    pub fn tier_of(field: &str) -> Option<LimitTier> {
        let tier = match field {
            "max_3d_texture_size" => LimitTier::Native(NativeLimit::Max3DTextureSize),
            "max_2d_texture_size" => LimitTier::Native(NativeLimit::MaxTextureSize),
            "max_cube_map_texture_size" => LimitTier::Native(NativeLimit::MaxCubeMapTextureSize),
            "max_array_texture_layers" => LimitTier::Native(NativeLimit::MaxArrayTextureLayers),
            "max_draw_buffers" => LimitTier::Native(NativeLimit::MaxDrawBuffers),
            "max_color_attachments" => LimitTier::Native(NativeLimit::MaxColorAttachments),
            "max_vertex_texture_image_units" => {
                LimitTier::Native(NativeLimit::MaxVertexTextureImageUnits)
            }
            "max_texture_image_units" => LimitTier::Native(NativeLimit::MaxTextureImageUnits),
            "max_viewport_width"
            | "max_viewport_height"
            | "max_combined_vertex_uniform_components"
            | "max_combined_fragment_uniform_components"
            | "max_combined_texture_image_units" => LimitTier::Derived,
            "max_element_index"
            | "max_lod_bias"
            | "max_renderbuffer_size"
            | "min_aliased_point_size"
            | "max_aliased_point_size"
            | "min_aliased_line_width"
            | "max_aliased_line_width"
            | "max_elements_indices"
            | "max_elements_vertices"
            | "max_server_wait_timeout"
            | "max_vertex_attributes"
            | "max_vertex_uniform_components"
            | "max_vertex_uniform_vectors"
            | "max_vertex_uniform_blocks"
            | "max_vertex_output_components"
            | "max_fragment_uniform_components"
            | "max_fragment_uniform_vectors"
            | "max_fragment_uniform_blocks"
            | "max_fragment_input_components"
            | "min_program_texel_offset"
            | "max_program_texel_offset"
            | "max_uniform_buffer_bindings"
            | "max_uniform_block_size"
            | "uniform_buffer_offset_alignment"
            | "max_combined_uniform_blocks"
            | "max_varying_components"
            | "max_varying_vectors"
            | "max_transform_feedback_interleaved_components"
            | "max_transform_feedback_separate_attributes"
            | "max_transform_feedback_separate_components" => LimitTier::Baseline,
            _ => return None,
        };
        Some(tier)
    }
}

// Copyright 2025 the opal authors
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

//! The declarative pipeline-state descriptor.
//!
//! A [`PipelineDescriptor`] aggregates everything the pipeline-state
//! compiler needs; it is pure data, owned by the caller, and may be dropped
//! once the compiled state exists.

use super::enums::*;
use super::viewport::{Scissor, Viewport};
use crate::traits::ShaderStageSet;
use bitflags::bitflags;
use std::borrow::Cow;

/// Describes the depth test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DepthDescriptor {
    /// Whether the depth test is enabled.
    pub test_enabled: bool,
    /// Whether depth values are written to the depth buffer.
    pub write_enabled: bool,
    /// The comparison function for the depth test.
    pub compare: CompareFunction,
}

/// Describes the stencil test and operations for one primitive face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StencilFaceDescriptor {
    /// The operation when the stencil test fails.
    pub fail_op: StencilOperation,
    /// The operation when the stencil test passes but the depth test fails.
    pub depth_fail_op: StencilOperation,
    /// The operation when both stencil and depth tests pass.
    pub depth_pass_op: StencilOperation,
    /// The comparison function for the stencil test.
    pub compare: CompareFunction,
    /// The reference value compared against.
    pub reference: u32,
    /// Bitmask applied when reading the stencil buffer.
    pub read_mask: u32,
    /// Bitmask applied when writing the stencil buffer.
    pub write_mask: u32,
}

/// Describes the stencil test for both faces independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StencilDescriptor {
    /// Whether the stencil test is enabled.
    pub test_enabled: bool,
    /// State for front-facing primitives.
    pub front: StencilFaceDescriptor,
    /// State for back-facing primitives.
    pub back: StencilFaceDescriptor,
}

/// Describes depth biasing, used to avoid z-fighting for coplanar geometry.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DepthBiasDescriptor {
    /// A constant value added to each fragment's depth.
    pub constant_factor: f32,
    /// A factor scaling with the fragment's depth slope.
    pub slope_factor: f32,
    /// The maximum bias that can be applied.
    pub clamp: f32,
}

/// Describes multisampling for the rasterizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MultisampleDescriptor {
    /// Whether multisampling is enabled.
    pub enabled: bool,
    /// A bitmask selecting which samples are affected.
    pub sample_mask: u32,
}

impl Default for MultisampleDescriptor {
    fn default() -> Self {
        Self {
            enabled: false,
            sample_mask: !0,
        }
    }
}

/// Describes the rasterizer stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RasterizerDescriptor {
    /// The polygon fill mode.
    pub polygon_mode: PolygonMode,
    /// The face culling mode; `None` disables culling.
    pub cull_mode: Option<CullMode>,
    /// The winding order that determines the front face.
    pub front_face: FrontFace,
    /// Whether fragments outside the depth range are clamped instead of
    /// clipped.
    pub depth_clamp_enabled: bool,
    /// Whether the scissor test is enabled.
    pub scissor_test_enabled: bool,
    /// Multisampling configuration.
    pub multisample: MultisampleDescriptor,
    /// Whether anti-aliased line rasterization is enabled.
    pub line_smooth_enabled: bool,
    /// The rasterized line width in pixels.
    pub line_width: f32,
    /// Depth-bias configuration.
    pub depth_bias: DepthBiasDescriptor,
    /// Whether conservative rasterization is requested. Requires device
    /// support; negotiated against [`crate::DeviceLimits`] at compile time.
    pub conservative_raster: bool,
}

impl Default for RasterizerDescriptor {
    fn default() -> Self {
        Self {
            polygon_mode: PolygonMode::Fill,
            cull_mode: None,
            front_face: FrontFace::Ccw,
            depth_clamp_enabled: false,
            scissor_test_enabled: false,
            multisample: MultisampleDescriptor::default(),
            line_smooth_enabled: false,
            line_width: 1.0,
            depth_bias: DepthBiasDescriptor::default(),
            conservative_raster: false,
        }
    }
}

bitflags! {
    /// A bitmask enabling writes to individual color channels.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ColorWrites: u8 {
        /// Enable writes to the red channel.
        const R = 0b0001;
        /// Enable writes to the green channel.
        const G = 0b0010;
        /// Enable writes to the blue channel.
        const B = 0b0100;
        /// Enable writes to the alpha channel.
        const A = 0b1000;
        /// Enable writes to all channels.
        const ALL = Self::R.bits() | Self::G.bits() | Self::B.bits() | Self::A.bits();
    }
}

/// Describes the blend equations for a single color target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlendTargetDescriptor {
    /// Source factor for the color components.
    pub src_color: BlendFactor,
    /// Destination factor for the color components.
    pub dst_color: BlendFactor,
    /// Operation combining the color terms.
    pub color_op: BlendOperation,
    /// Source factor for the alpha component.
    pub src_alpha: BlendFactor,
    /// Destination factor for the alpha component.
    pub dst_alpha: BlendFactor,
    /// Operation combining the alpha terms.
    pub alpha_op: BlendOperation,
    /// Which color channels this target writes.
    pub color_mask: ColorWrites,
}

impl Default for BlendTargetDescriptor {
    fn default() -> Self {
        Self {
            src_color: BlendFactor::SrcAlpha,
            dst_color: BlendFactor::InvSrcAlpha,
            color_op: BlendOperation::Add,
            src_alpha: BlendFactor::SrcAlpha,
            dst_alpha: BlendFactor::InvSrcAlpha,
            alpha_op: BlendOperation::Add,
            color_mask: ColorWrites::ALL,
        }
    }
}

/// Describes blending across all color targets.
#[derive(Debug, Clone, PartialEq)]
pub struct BlendDescriptor<'a> {
    /// Whether blending is enabled.
    pub blend_enabled: bool,
    /// The constant blend color, consumed by the constant blend factors.
    pub blend_color: [f32; 4],
    /// Per-target blend equations.
    pub targets: Cow<'a, [BlendTargetDescriptor]>,
    /// The color logic operation; `Disabled` skips logic ops entirely.
    pub logic_op: LogicOperation,
    /// Whether the fragment's alpha value contributes to sample coverage.
    pub alpha_to_coverage_enabled: bool,
}

impl Default for BlendDescriptor<'_> {
    fn default() -> Self {
        Self {
            blend_enabled: false,
            blend_color: [0.0; 4],
            targets: Cow::Borrowed(&[]),
            logic_op: LogicOperation::Disabled,
            alpha_to_coverage_enabled: false,
        }
    }
}

/// A complete descriptor for a graphics pipeline state.
#[derive(Debug, Clone)]
pub struct PipelineDescriptor<'a> {
    /// An optional debug label.
    pub label: Option<Cow<'a, str>>,
    /// The compiled shader-stage set this pipeline binds. Required.
    pub shader_stages: Option<&'a dyn ShaderStageSet>,
    /// The primitive topology.
    pub topology: PrimitiveTopology,
    /// Depth-test configuration.
    pub depth: DepthDescriptor,
    /// Stencil-test configuration.
    pub stencil: StencilDescriptor,
    /// Rasterizer configuration.
    pub rasterizer: RasterizerDescriptor,
    /// Blend configuration.
    pub blend: BlendDescriptor<'a>,
    /// Static viewports baked into the pipeline state; empty means
    /// viewports are set dynamically.
    pub viewports: Cow<'a, [Viewport]>,
    /// Static scissors baked into the pipeline state; empty means scissors
    /// are set dynamically.
    pub scissors: Cow<'a, [Scissor]>,
}

impl Default for PipelineDescriptor<'_> {
    fn default() -> Self {
        Self {
            label: None,
            shader_stages: None,
            topology: PrimitiveTopology::TriangleList,
            depth: DepthDescriptor::default(),
            stencil: StencilDescriptor::default(),
            rasterizer: RasterizerDescriptor::default(),
            blend: BlendDescriptor::default(),
            viewports: Cow::Borrowed(&[]),
            scissors: Cow::Borrowed(&[]),
        }
    }
}

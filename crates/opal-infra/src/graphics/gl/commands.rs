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

//! The recorded GL command stream.
//!
//! Each variant corresponds to one native state call the context would
//! execute; the [`GlStateCache`](super::GlStateCache) only records the
//! transitions that actually change context state.

use opal_core::state::{DepthRangeRecord, ScissorRecord, ViewportRecord};

// Context capabilities (glEnable/glDisable).
pub(crate) const GL_LINE_SMOOTH: u32 = 0x0B20;
pub(crate) const GL_CULL_FACE: u32 = 0x0B44;
pub(crate) const GL_DEPTH_TEST: u32 = 0x0B71;
pub(crate) const GL_STENCIL_TEST: u32 = 0x0B90;
pub(crate) const GL_BLEND: u32 = 0x0BE2;
pub(crate) const GL_COLOR_LOGIC_OP: u32 = 0x0BF2;
pub(crate) const GL_SCISSOR_TEST: u32 = 0x0C11;
pub(crate) const GL_POLYGON_OFFSET_POINT: u32 = 0x2A01;
pub(crate) const GL_POLYGON_OFFSET_LINE: u32 = 0x2A02;
pub(crate) const GL_POLYGON_OFFSET_FILL: u32 = 0x8037;
pub(crate) const GL_MULTISAMPLE: u32 = 0x809D;
pub(crate) const GL_SAMPLE_ALPHA_TO_COVERAGE: u32 = 0x809E;
pub(crate) const GL_DEPTH_CLAMP: u32 = 0x864F;
pub(crate) const GL_RASTERIZER_DISCARD: u32 = 0x8C89;
pub(crate) const GL_CONSERVATIVE_RASTERIZATION_NV: u32 = 0x9346;

// Face selectors for the separate stencil calls.
pub(crate) const GL_FRONT: u32 = 0x0404;
pub(crate) const GL_BACK: u32 = 0x0405;

/// One native GL state call.
#[derive(Debug, Clone, PartialEq)]
pub enum GlCommand {
    /// `glUseProgram`.
    UseProgram {
        /// The linked program object.
        program: u64,
    },
    /// `glEnable`.
    Enable {
        /// The context capability.
        capability: u32,
    },
    /// `glDisable`.
    Disable {
        /// The context capability.
        capability: u32,
    },
    /// `glPatchParameteri(GL_PATCH_VERTICES, ..)`.
    PatchVertices {
        /// Control points per patch.
        count: u32,
    },
    /// `glDepthFunc`.
    DepthFunc {
        /// The comparison function.
        func: u32,
    },
    /// `glDepthMask`.
    DepthMask {
        /// Whether depth writes are enabled.
        write: bool,
    },
    /// `glStencilFuncSeparate`.
    StencilFuncSeparate {
        /// `GL_FRONT` or `GL_BACK`.
        face: u32,
        /// The comparison function.
        func: u32,
        /// The reference value.
        reference: i32,
        /// The read mask.
        read_mask: u32,
    },
    /// `glStencilOpSeparate`.
    StencilOpSeparate {
        /// `GL_FRONT` or `GL_BACK`.
        face: u32,
        /// Operation on stencil fail.
        fail: u32,
        /// Operation on depth fail.
        depth_fail: u32,
        /// Operation on pass.
        pass: u32,
    },
    /// `glStencilMaskSeparate`.
    StencilMaskSeparate {
        /// `GL_FRONT` or `GL_BACK`.
        face: u32,
        /// The write mask.
        write_mask: u32,
    },
    /// `glPolygonMode(GL_FRONT_AND_BACK, ..)`.
    PolygonMode {
        /// The fill mode.
        mode: u32,
    },
    /// `glFrontFace`.
    FrontFace {
        /// The winding order.
        winding: u32,
    },
    /// `glCullFace`.
    CullFace {
        /// The culled face set.
        mode: u32,
    },
    /// `glPolygonOffsetClamp` (or `glPolygonOffset` when clamp is zero).
    PolygonOffset {
        /// Slope-scaled factor.
        factor: f32,
        /// Constant offset units.
        units: f32,
        /// Offset clamp.
        clamp: f32,
    },
    /// `glLineWidth`.
    LineWidth {
        /// Width in pixels.
        width: f32,
    },
    /// `glBlendFuncSeparate`, applied to all draw buffers.
    BlendFuncSeparate {
        /// Source color factor.
        src_color: u32,
        /// Destination color factor.
        dst_color: u32,
        /// Source alpha factor.
        src_alpha: u32,
        /// Destination alpha factor.
        dst_alpha: u32,
    },
    /// `glBlendEquationSeparate`, applied to all draw buffers.
    BlendEquationSeparate {
        /// Color equation.
        color_op: u32,
        /// Alpha equation.
        alpha_op: u32,
    },
    /// `glBlendFuncSeparatei`, one draw buffer.
    BlendFuncSeparateIndexed {
        /// The draw-buffer index.
        buffer: u32,
        /// Source color factor.
        src_color: u32,
        /// Destination color factor.
        dst_color: u32,
        /// Source alpha factor.
        src_alpha: u32,
        /// Destination alpha factor.
        dst_alpha: u32,
    },
    /// `glBlendEquationSeparatei`, one draw buffer.
    BlendEquationSeparateIndexed {
        /// The draw-buffer index.
        buffer: u32,
        /// Color equation.
        color_op: u32,
        /// Alpha equation.
        alpha_op: u32,
    },
    /// `glColorMask`, applied to all draw buffers.
    ColorMask {
        /// Red channel writes.
        red: bool,
        /// Green channel writes.
        green: bool,
        /// Blue channel writes.
        blue: bool,
        /// Alpha channel writes.
        alpha: bool,
    },
    /// `glColorMaski`, one draw buffer.
    ColorMaskIndexed {
        /// The draw-buffer index.
        buffer: u32,
        /// Red channel writes.
        red: bool,
        /// Green channel writes.
        green: bool,
        /// Blue channel writes.
        blue: bool,
        /// Alpha channel writes.
        alpha: bool,
    },
    /// `glBlendColor`.
    BlendColor {
        /// The constant blend color.
        color: [f32; 4],
    },
    /// `glLogicOp`.
    LogicOp {
        /// The logic operation.
        op: u32,
    },
    /// `glViewportArrayv`.
    ViewportArray {
        /// First viewport index.
        first: u32,
        /// The viewport rectangles.
        viewports: Vec<ViewportRecord>,
    },
    /// `glDepthRangeArrayv`.
    DepthRangeArray {
        /// First viewport index.
        first: u32,
        /// The depth ranges.
        ranges: Vec<DepthRangeRecord>,
    },
    /// `glScissorArrayv`.
    ScissorArray {
        /// First scissor index.
        first: u32,
        /// The scissor rectangles.
        scissors: Vec<ScissorRecord>,
    },
    /// `glBlitFramebuffer` resolving a multisample surface into a texture
    /// subresource.
    BlitResolve {
        /// The source surface object.
        source: usize,
        /// The destination texture object.
        destination: usize,
        /// The destination subresource index.
        subresource: u32,
    },
}

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

//! The mutable device-context state sink the pipeline-state binder drives.

use crate::api::NativeHandle;
use crate::state::static_state::{DepthRangeRecord, ScissorRecord, ViewportRecord};
use crate::state::{BlendTargetState, StencilState};
use crate::traits::enum_table::NativeEnum;

/// A backend-neutral context capability that can be enabled or disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateToggle {
    /// Discard primitives before rasterization (no fragment stage bound).
    RasterizerDiscard,
    /// The depth test.
    DepthTest,
    /// The stencil test.
    StencilTest,
    /// Face culling.
    CullFace,
    /// The scissor test.
    ScissorTest,
    /// Depth clamping.
    DepthClamp,
    /// Multisample rasterization.
    Multisample,
    /// Anti-aliased line rasterization.
    LineSmooth,
    /// Blending.
    Blend,
    /// Color logic operations.
    ColorLogicOp,
    /// Alpha-to-coverage.
    AlphaToCoverage,
    /// Polygon offset for filled polygons.
    PolygonOffsetFill,
    /// Polygon offset for wireframe polygons.
    PolygonOffsetLine,
    /// Polygon offset for point-rasterized polygons.
    PolygonOffsetPoint,
    /// Depth bias on explicit backends, independent of fill mode.
    DepthBias,
    /// Conservative rasterization.
    ConservativeRaster,
}

/// Selects which primitive face a stencil-state update applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StencilFaceSelect {
    /// Front-facing primitives.
    Front,
    /// Back-facing primitives.
    Back,
}

/// The device-context state tracker a compiled pipeline state is applied
/// against.
///
/// The binder presents the complete, ordered set of desired states on every
/// call; implementations deduplicate redundant transitions before touching
/// the native context. None of these operations can fail: the compiler
/// already validated everything that reaches this seam.
pub trait StateTracker {
    /// Binds the shader program for all subsequent draws.
    fn bind_shader_program(&mut self, program: NativeHandle);

    /// Enables or disables a context capability.
    fn set_toggle(&mut self, toggle: StateToggle, enabled: bool);

    /// Sets the number of control points per tessellation patch.
    fn set_patch_vertices(&mut self, count: u32);

    /// Sets the depth comparison function.
    fn set_depth_func(&mut self, func: NativeEnum);

    /// Enables or disables depth writes.
    fn set_depth_write(&mut self, enabled: bool);

    /// Sets the full stencil state for one face.
    fn set_stencil_state(&mut self, face: StencilFaceSelect, state: &StencilState);

    /// Sets the polygon fill mode.
    fn set_polygon_mode(&mut self, mode: NativeEnum);

    /// Sets the front-face winding order.
    fn set_front_face(&mut self, winding: NativeEnum);

    /// Sets which faces are culled. Only called while culling is enabled.
    fn set_cull_face(&mut self, mode: NativeEnum);

    /// Sets the polygon-offset factors. Only called while the matching
    /// offset toggle is enabled.
    fn set_polygon_offset(&mut self, factor: f32, units: f32, clamp: f32);

    /// Sets the rasterized line width.
    fn set_line_width(&mut self, width: f32);

    /// Sets the per-target blend equations. `blend_enabled` mirrors the
    /// blend toggle so trackers can skip equation uploads while blending is
    /// off.
    fn set_blend_targets(&mut self, targets: &[BlendTargetState], blend_enabled: bool);

    /// Sets the constant blend color. Only issued when some blend factor
    /// actually consumes it.
    fn set_blend_color(&mut self, color: [f32; 4]);

    /// Sets the color logic operation. Only called while logic ops are
    /// enabled.
    fn set_logic_op(&mut self, op: NativeEnum);

    /// Sets a contiguous range of viewports starting at index `first`.
    fn set_viewports(&mut self, first: u32, viewports: &[ViewportRecord]);

    /// Sets a contiguous range of viewport depth ranges starting at `first`.
    fn set_depth_ranges(&mut self, first: u32, ranges: &[DepthRangeRecord]);

    /// Sets a contiguous range of scissor rectangles starting at `first`.
    fn set_scissors(&mut self, first: u32, scissors: &[ScissorRecord]);
}

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

//! The pipeline-state compiler and binder.
//!
//! [`CompiledPipelineState::compile`] turns a declarative
//! [`PipelineDescriptor`] into an immutable bundle of backend-ready values;
//! [`CompiledPipelineState::bind`] replays that bundle against a device
//! context's [`StateTracker`] before a draw. Compilation performs all
//! validation and enum mapping, so binding never fails.

use crate::api::{
    BlendDescriptor, ColorWrites, NativeHandle, PipelineDescriptor, StencilFaceDescriptor,
};
use crate::error::GraphicsError;
use crate::limits::{DeviceLimits, MAX_VIEWPORTS_AND_SCISSORS};
use crate::state::static_state::{
    packed_size, DepthRangeRecord, ScissorRecord, StaticStateBuffer, StaticStateWriter,
    ViewportRecord,
};
use crate::traits::{EnumTable, NativeEnum, StateTracker, StateToggle, StencilFaceSelect};
use log::debug;

/// Backend-ready stencil state for one primitive face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StencilState {
    /// Operation when the stencil test fails.
    pub fail_op: NativeEnum,
    /// Operation when the stencil test passes but the depth test fails.
    pub depth_fail_op: NativeEnum,
    /// Operation when both tests pass.
    pub depth_pass_op: NativeEnum,
    /// The comparison function.
    pub func: NativeEnum,
    /// The reference value.
    pub reference: i32,
    /// Read bitmask.
    pub read_mask: u32,
    /// Write bitmask.
    pub write_mask: u32,
}

/// Backend-ready blend equations for one color target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlendTargetState {
    /// Source color factor.
    pub src_color: NativeEnum,
    /// Destination color factor.
    pub dst_color: NativeEnum,
    /// Color combine operation.
    pub color_op: NativeEnum,
    /// Source alpha factor.
    pub src_alpha: NativeEnum,
    /// Destination alpha factor.
    pub dst_alpha: NativeEnum,
    /// Alpha combine operation.
    pub alpha_op: NativeEnum,
    /// Channel write mask.
    pub color_mask: ColorWrites,
}

/// An immutable, backend-ready graphics pipeline state.
///
/// Safe to share across threads once construction completes; binding reads
/// it without mutation.
#[derive(Debug)]
pub struct CompiledPipelineState {
    label: Option<String>,

    shader_program: NativeHandle,
    has_fragment_stage: bool,

    draw_mode: NativeEnum,
    patch_vertices: u32,

    depth_test_enabled: bool,
    depth_write_enabled: bool,
    depth_func: NativeEnum,

    stencil_test_enabled: bool,
    stencil_front: StencilState,
    stencil_back: StencilState,

    polygon_mode: NativeEnum,
    cull_face: Option<NativeEnum>,
    front_face: NativeEnum,
    scissor_test_enabled: bool,
    depth_clamp_enabled: bool,
    multisample_enabled: bool,
    sample_mask: u32,
    line_smooth_enabled: bool,
    line_width: f32,
    polygon_offset_enabled: bool,
    polygon_offset_toggle: StateToggle,
    polygon_offset_factor: f32,
    polygon_offset_units: f32,
    polygon_offset_clamp: f32,
    conservative_raster: bool,
    conservative_raster_supported: bool,

    blend_enabled: bool,
    blend_color: [f32; 4],
    blend_color_needed: bool,
    blend_targets: Vec<BlendTargetState>,
    alpha_to_coverage: bool,
    logic_op: Option<NativeEnum>,

    static_state: Option<StaticStateBuffer>,
}

/// True iff blending is on and any factor of any target reads the constant
/// blend color, in which case the blend-color command must be issued at
/// bind time.
fn blend_color_needed(blend: &BlendDescriptor) -> bool {
    if !blend.blend_enabled {
        return false;
    }
    blend.targets.iter().any(|target| {
        target.src_color.uses_blend_color()
            || target.src_alpha.uses_blend_color()
            || target.dst_color.uses_blend_color()
            || target.dst_alpha.uses_blend_color()
    })
}

fn convert_stencil_face(
    table: &dyn EnumTable,
    face: &StencilFaceDescriptor,
) -> Result<StencilState, GraphicsError> {
    Ok(StencilState {
        fail_op: table.stencil_operation(face.fail_op)?,
        depth_fail_op: table.stencil_operation(face.depth_fail_op)?,
        depth_pass_op: table.stencil_operation(face.depth_pass_op)?,
        func: table.compare_function(face.compare)?,
        reference: face.reference as i32,
        read_mask: face.read_mask,
        write_mask: face.write_mask,
    })
}

impl CompiledPipelineState {
    /// Compiles a pipeline descriptor against a backend's enum table and
    /// device limits.
    ///
    /// Fails with [`GraphicsError::InvalidArgument`] for malformed or
    /// unsupported descriptor combinations and
    /// [`GraphicsError::LimitExceeded`] when a count exceeds a device
    /// limit. On failure, nothing is allocated and no partial state
    /// escapes.
    pub fn compile(
        descriptor: &PipelineDescriptor,
        limits: &DeviceLimits,
        table: &dyn EnumTable,
    ) -> Result<Self, GraphicsError> {
        let stages = descriptor
            .shader_stages
            .ok_or_else(|| GraphicsError::invalid("pipeline state requires a shader stage set"))?;

        let draw_mode = table.primitive_topology(descriptor.topology)?;
        let patch_vertices = match descriptor.topology.patch_control_points() {
            Some(control_points) => {
                if control_points > limits.max_patch_vertices {
                    return Err(GraphicsError::LimitExceeded {
                        what: "patch control points",
                        requested: control_points,
                        limit: limits.max_patch_vertices,
                    });
                }
                control_points
            }
            None => 0,
        };

        let raster = &descriptor.rasterizer;
        if raster.conservative_raster && !limits.conservative_raster_supported {
            return Err(GraphicsError::invalid(
                "conservative rasterization is not supported by this device",
            ));
        }

        let bias = &raster.depth_bias;
        // Clamp alone has no effect without the other two factors.
        let polygon_offset_enabled = bias.slope_factor != 0.0 || bias.constant_factor != 0.0;

        let blend = &descriptor.blend;
        let blend_targets = blend
            .targets
            .iter()
            .map(|target| {
                Ok(BlendTargetState {
                    src_color: table.blend_factor(target.src_color)?,
                    dst_color: table.blend_factor(target.dst_color)?,
                    color_op: table.blend_operation(target.color_op)?,
                    src_alpha: table.blend_factor(target.src_alpha)?,
                    dst_alpha: table.blend_factor(target.dst_alpha)?,
                    alpha_op: table.blend_operation(target.alpha_op)?,
                    color_mask: target.color_mask,
                })
            })
            .collect::<Result<Vec<_>, GraphicsError>>()?;

        let logic_op = if blend.logic_op == crate::api::LogicOperation::Disabled {
            None
        } else {
            Some(table.logic_operation(blend.logic_op)?)
        };

        let static_state = Self::build_static_state(descriptor)?;

        let state = Self {
            label: descriptor.label.as_ref().map(|label| label.to_string()),
            shader_program: stages.native_handle(),
            has_fragment_stage: stages.has_fragment_stage(),
            draw_mode,
            patch_vertices,
            depth_test_enabled: descriptor.depth.test_enabled,
            depth_write_enabled: descriptor.depth.write_enabled,
            depth_func: table.compare_function(descriptor.depth.compare)?,
            stencil_test_enabled: descriptor.stencil.test_enabled,
            stencil_front: convert_stencil_face(table, &descriptor.stencil.front)?,
            stencil_back: convert_stencil_face(table, &descriptor.stencil.back)?,
            polygon_mode: table.polygon_mode(raster.polygon_mode)?,
            cull_face: raster
                .cull_mode
                .map(|mode| table.cull_mode(mode))
                .transpose()?,
            front_face: table.front_face(raster.front_face)?,
            scissor_test_enabled: raster.scissor_test_enabled,
            depth_clamp_enabled: raster.depth_clamp_enabled,
            multisample_enabled: raster.multisample.enabled,
            sample_mask: raster.multisample.sample_mask,
            line_smooth_enabled: raster.line_smooth_enabled,
            line_width: raster.line_width,
            polygon_offset_enabled,
            polygon_offset_toggle: table.polygon_offset_toggle(raster.polygon_mode)?,
            polygon_offset_factor: bias.slope_factor,
            polygon_offset_units: bias.constant_factor,
            polygon_offset_clamp: bias.clamp,
            conservative_raster: raster.conservative_raster,
            conservative_raster_supported: limits.conservative_raster_supported,
            blend_enabled: blend.blend_enabled,
            blend_color: blend.blend_color,
            blend_color_needed: blend_color_needed(blend),
            blend_targets,
            alpha_to_coverage: blend.alpha_to_coverage_enabled,
            logic_op,
            static_state,
        };

        debug!(
            "compiled pipeline state '{}' ({} blend targets, {} static viewports, {} static scissors)",
            state.label.as_deref().unwrap_or("unnamed"),
            state.blend_targets.len(),
            state
                .static_state
                .as_ref()
                .map_or(0, StaticStateBuffer::num_viewports),
            state
                .static_state
                .as_ref()
                .map_or(0, StaticStateBuffer::num_scissors),
        );
        Ok(state)
    }

    /// Packs static viewports and scissors into one exact-sized buffer:
    /// viewport records, then depth ranges, then scissors. Counts are
    /// validated against the hardware limit before anything is allocated.
    fn build_static_state(
        descriptor: &PipelineDescriptor,
    ) -> Result<Option<StaticStateBuffer>, GraphicsError> {
        let viewports = descriptor.viewports.as_ref();
        let scissors = descriptor.scissors.as_ref();
        if viewports.is_empty() && scissors.is_empty() {
            return Ok(None);
        }

        if viewports.len() > MAX_VIEWPORTS_AND_SCISSORS {
            return Err(GraphicsError::LimitExceeded {
                what: "static viewports",
                requested: viewports.len() as u32,
                limit: MAX_VIEWPORTS_AND_SCISSORS as u32,
            });
        }
        if scissors.len() > MAX_VIEWPORTS_AND_SCISSORS {
            return Err(GraphicsError::LimitExceeded {
                what: "static scissors",
                requested: scissors.len() as u32,
                limit: MAX_VIEWPORTS_AND_SCISSORS as u32,
            });
        }

        let mut writer =
            StaticStateWriter::with_exact_size(packed_size(viewports.len(), scissors.len()));

        for viewport in viewports {
            writer.write(&ViewportRecord {
                x: viewport.x,
                y: viewport.y,
                width: viewport.width,
                height: viewport.height,
            });
        }
        for viewport in viewports {
            writer.write(&DepthRangeRecord {
                min_depth: f64::from(viewport.min_depth),
                max_depth: f64::from(viewport.max_depth),
            });
        }
        for scissor in scissors {
            writer.write(&ScissorRecord {
                x: scissor.x,
                y: scissor.y,
                width: scissor.width,
                height: scissor.height,
            });
        }

        Ok(Some(StaticStateBuffer::new(
            writer,
            viewports.len() as u32,
            scissors.len() as u32,
        )))
    }

    /// Applies every field of this state against a context state tracker.
    ///
    /// The tracker deduplicates redundant transitions; this method's job is
    /// to present the complete, ordered set of desired states. The order
    /// matters: the shader program is bound before the rasterizer-discard
    /// decision, and only the polygon-offset toggle matching the compiled
    /// fill mode is touched.
    pub fn bind(&self, tracker: &mut dyn StateTracker) {
        // Shader program first; a stage set without a fragment stage
        // rasterizes nothing.
        tracker.bind_shader_program(self.shader_program);
        tracker.set_toggle(StateToggle::RasterizerDiscard, !self.has_fragment_stage);

        if self.patch_vertices > 0 {
            tracker.set_patch_vertices(self.patch_vertices);
        }

        if self.depth_test_enabled {
            tracker.set_toggle(StateToggle::DepthTest, true);
            tracker.set_depth_func(self.depth_func);
        } else {
            tracker.set_toggle(StateToggle::DepthTest, false);
        }
        tracker.set_depth_write(self.depth_write_enabled);

        if self.stencil_test_enabled {
            tracker.set_toggle(StateToggle::StencilTest, true);
            tracker.set_stencil_state(StencilFaceSelect::Front, &self.stencil_front);
            tracker.set_stencil_state(StencilFaceSelect::Back, &self.stencil_back);
        } else {
            tracker.set_toggle(StateToggle::StencilTest, false);
        }

        tracker.set_polygon_mode(self.polygon_mode);
        tracker.set_front_face(self.front_face);

        match self.cull_face {
            Some(mode) => {
                tracker.set_toggle(StateToggle::CullFace, true);
                tracker.set_cull_face(mode);
            }
            None => tracker.set_toggle(StateToggle::CullFace, false),
        }

        if self.polygon_offset_enabled {
            tracker.set_toggle(self.polygon_offset_toggle, true);
            tracker.set_polygon_offset(
                self.polygon_offset_factor,
                self.polygon_offset_units,
                self.polygon_offset_clamp,
            );
        } else {
            tracker.set_toggle(self.polygon_offset_toggle, false);
        }

        tracker.set_toggle(StateToggle::ScissorTest, self.scissor_test_enabled);
        tracker.set_toggle(StateToggle::DepthClamp, self.depth_clamp_enabled);
        tracker.set_toggle(StateToggle::Multisample, self.multisample_enabled);
        tracker.set_toggle(StateToggle::LineSmooth, self.line_smooth_enabled);
        tracker.set_line_width(self.line_width);
        // Devices without conservative rasterization never see the toggle.
        if self.conservative_raster_supported {
            tracker.set_toggle(StateToggle::ConservativeRaster, self.conservative_raster);
        }

        tracker.set_toggle(StateToggle::Blend, self.blend_enabled);
        tracker.set_blend_targets(&self.blend_targets, self.blend_enabled);
        if self.blend_color_needed {
            tracker.set_blend_color(self.blend_color);
        }

        if self.multisample_enabled {
            tracker.set_toggle(StateToggle::AlphaToCoverage, self.alpha_to_coverage);
        }

        match self.logic_op {
            Some(op) => {
                tracker.set_toggle(StateToggle::ColorLogicOp, true);
                tracker.set_logic_op(op);
            }
            None => tracker.set_toggle(StateToggle::ColorLogicOp, false),
        }

        if let Some(static_state) = &self.static_state {
            self.bind_static_state(static_state, tracker);
        }
    }

    /// Replays packed viewport/depth-range/scissor records in compile-time
    /// order as batched array commands.
    fn bind_static_state(&self, buffer: &StaticStateBuffer, tracker: &mut dyn StateTracker) {
        let mut cursor = buffer.cursor();

        let num_viewports = buffer.num_viewports() as usize;
        if num_viewports > 0 {
            let mut viewports = [ViewportRecord::default(); MAX_VIEWPORTS_AND_SCISSORS];
            for slot in viewports.iter_mut().take(num_viewports) {
                *slot = cursor.next();
            }
            let mut ranges = [DepthRangeRecord::default(); MAX_VIEWPORTS_AND_SCISSORS];
            for slot in ranges.iter_mut().take(num_viewports) {
                *slot = cursor.next();
            }
            tracker.set_viewports(0, &viewports[..num_viewports]);
            tracker.set_depth_ranges(0, &ranges[..num_viewports]);
        }

        let num_scissors = buffer.num_scissors() as usize;
        if num_scissors > 0 {
            let mut scissors = [ScissorRecord::default(); MAX_VIEWPORTS_AND_SCISSORS];
            for slot in scissors.iter_mut().take(num_scissors) {
                *slot = cursor.next();
            }
            tracker.set_scissors(0, &scissors[..num_scissors]);
        }
    }

    /// The optional debug label.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// The native draw mode for this pipeline's topology, consumed by the
    /// draw-submission path rather than by binding.
    pub fn draw_mode(&self) -> NativeEnum {
        self.draw_mode
    }

    /// The multisample coverage mask from the descriptor.
    pub fn sample_mask(&self) -> u32 {
        self.sample_mask
    }

    /// Whether the blend-constant-color command is issued at bind time.
    pub fn blend_color_needed(&self) -> bool {
        self.blend_color_needed
    }

    /// Whether polygon offset is applied for this pipeline's fill mode.
    pub fn polygon_offset_enabled(&self) -> bool {
        self.polygon_offset_enabled
    }
}

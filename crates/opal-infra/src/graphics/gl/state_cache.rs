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

//! The redundancy-eliminating GL state cache.
//!
//! The pipeline-state binder presents the complete desired state on every
//! bind; this cache remembers what the context already holds and records
//! only real transitions as [`GlCommand`]s. Binding the same pipeline state
//! twice in a row therefore emits nothing the second time.

use super::commands::{
    GlCommand, GL_BACK, GL_BLEND, GL_COLOR_LOGIC_OP, GL_CONSERVATIVE_RASTERIZATION_NV,
    GL_CULL_FACE, GL_DEPTH_CLAMP, GL_DEPTH_TEST, GL_FRONT, GL_LINE_SMOOTH, GL_MULTISAMPLE,
    GL_POLYGON_OFFSET_FILL, GL_POLYGON_OFFSET_LINE, GL_POLYGON_OFFSET_POINT,
    GL_RASTERIZER_DISCARD, GL_SAMPLE_ALPHA_TO_COVERAGE, GL_SCISSOR_TEST, GL_STENCIL_TEST,
};
use log::trace;
use opal_core::api::{ColorWrites, NativeHandle};
use opal_core::state::{
    BlendTargetState, DepthRangeRecord, ScissorRecord, StencilState, ViewportRecord,
};
use opal_core::traits::{NativeEnum, StateTracker, StateToggle, StencilFaceSelect};
use std::collections::HashMap;

/// The native capability behind a backend-neutral toggle.
fn capability(toggle: StateToggle) -> u32 {
    match toggle {
        StateToggle::RasterizerDiscard => GL_RASTERIZER_DISCARD,
        StateToggle::DepthTest => GL_DEPTH_TEST,
        StateToggle::StencilTest => GL_STENCIL_TEST,
        StateToggle::CullFace => GL_CULL_FACE,
        StateToggle::ScissorTest => GL_SCISSOR_TEST,
        StateToggle::DepthClamp => GL_DEPTH_CLAMP,
        StateToggle::Multisample => GL_MULTISAMPLE,
        StateToggle::LineSmooth => GL_LINE_SMOOTH,
        StateToggle::Blend => GL_BLEND,
        StateToggle::ColorLogicOp => GL_COLOR_LOGIC_OP,
        StateToggle::AlphaToCoverage => GL_SAMPLE_ALPHA_TO_COVERAGE,
        StateToggle::PolygonOffsetFill => GL_POLYGON_OFFSET_FILL,
        StateToggle::PolygonOffsetLine => GL_POLYGON_OFFSET_LINE,
        StateToggle::PolygonOffsetPoint => GL_POLYGON_OFFSET_POINT,
        // Explicit-style depth bias folds onto the fill-mode capability.
        StateToggle::DepthBias => GL_POLYGON_OFFSET_FILL,
        StateToggle::ConservativeRaster => GL_CONSERVATIVE_RASTERIZATION_NV,
    }
}

fn face_enum(face: StencilFaceSelect) -> u32 {
    match face {
        StencilFaceSelect::Front => GL_FRONT,
        StencilFaceSelect::Back => GL_BACK,
    }
}

/// A [`StateTracker`] over a GL-style context that records only actual
/// state transitions into a command stream.
#[derive(Debug, Default)]
pub struct GlStateCache {
    commands: Vec<GlCommand>,

    program: Option<u64>,
    toggles: HashMap<StateToggle, bool>,
    patch_vertices: Option<u32>,
    depth_func: Option<u32>,
    depth_write: Option<bool>,
    stencil_front: Option<StencilState>,
    stencil_back: Option<StencilState>,
    polygon_mode: Option<u32>,
    front_face: Option<u32>,
    cull_face: Option<u32>,
    polygon_offset: Option<(f32, f32, f32)>,
    line_width: Option<f32>,
    blend_targets: Option<(Vec<BlendTargetState>, bool)>,
    blend_color: Option<[f32; 4]>,
    logic_op: Option<u32>,
}

impl GlStateCache {
    /// Creates a cache with unknown context state; the first bind emits
    /// everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// The commands recorded since the last [`GlStateCache::take_commands`].
    pub fn commands(&self) -> &[GlCommand] {
        &self.commands
    }

    /// Drains the recorded command stream for submission.
    pub fn take_commands(&mut self) -> Vec<GlCommand> {
        std::mem::take(&mut self.commands)
    }

    fn stencil_slot(&mut self, face: StencilFaceSelect) -> &mut Option<StencilState> {
        match face {
            StencilFaceSelect::Front => &mut self.stencil_front,
            StencilFaceSelect::Back => &mut self.stencil_back,
        }
    }

    fn emit_blend_targets(&mut self, targets: &[BlendTargetState], blend_enabled: bool) {
        let Some(first) = targets.first() else {
            return;
        };

        // Uniform targets take the cheap all-buffers path; otherwise each
        // draw buffer gets its own indexed calls.
        if targets.iter().all(|t| t == first) {
            if blend_enabled {
                self.commands.push(GlCommand::BlendFuncSeparate {
                    src_color: first.src_color.0,
                    dst_color: first.dst_color.0,
                    src_alpha: first.src_alpha.0,
                    dst_alpha: first.dst_alpha.0,
                });
                self.commands.push(GlCommand::BlendEquationSeparate {
                    color_op: first.color_op.0,
                    alpha_op: first.alpha_op.0,
                });
            }
            self.commands.push(GlCommand::ColorMask {
                red: first.color_mask.contains(ColorWrites::R),
                green: first.color_mask.contains(ColorWrites::G),
                blue: first.color_mask.contains(ColorWrites::B),
                alpha: first.color_mask.contains(ColorWrites::A),
            });
        } else {
            for (index, target) in targets.iter().enumerate() {
                let buffer = index as u32;
                if blend_enabled {
                    self.commands.push(GlCommand::BlendFuncSeparateIndexed {
                        buffer,
                        src_color: target.src_color.0,
                        dst_color: target.dst_color.0,
                        src_alpha: target.src_alpha.0,
                        dst_alpha: target.dst_alpha.0,
                    });
                    self.commands.push(GlCommand::BlendEquationSeparateIndexed {
                        buffer,
                        color_op: target.color_op.0,
                        alpha_op: target.alpha_op.0,
                    });
                }
                self.commands.push(GlCommand::ColorMaskIndexed {
                    buffer,
                    red: target.color_mask.contains(ColorWrites::R),
                    green: target.color_mask.contains(ColorWrites::G),
                    blue: target.color_mask.contains(ColorWrites::B),
                    alpha: target.color_mask.contains(ColorWrites::A),
                });
            }
        }
    }
}

impl StateTracker for GlStateCache {
    fn bind_shader_program(&mut self, program: NativeHandle) {
        if self.program != Some(program.0) {
            self.program = Some(program.0);
            self.commands.push(GlCommand::UseProgram { program: program.0 });
        }
    }

    fn set_toggle(&mut self, toggle: StateToggle, enabled: bool) {
        if self.toggles.get(&toggle) == Some(&enabled) {
            return;
        }
        self.toggles.insert(toggle, enabled);
        let capability = capability(toggle);
        trace!("gl toggle {toggle:?} -> {enabled}");
        self.commands.push(if enabled {
            GlCommand::Enable { capability }
        } else {
            GlCommand::Disable { capability }
        });
    }

    fn set_patch_vertices(&mut self, count: u32) {
        if self.patch_vertices != Some(count) {
            self.patch_vertices = Some(count);
            self.commands.push(GlCommand::PatchVertices { count });
        }
    }

    fn set_depth_func(&mut self, func: NativeEnum) {
        if self.depth_func != Some(func.0) {
            self.depth_func = Some(func.0);
            self.commands.push(GlCommand::DepthFunc { func: func.0 });
        }
    }

    fn set_depth_write(&mut self, enabled: bool) {
        if self.depth_write != Some(enabled) {
            self.depth_write = Some(enabled);
            self.commands.push(GlCommand::DepthMask { write: enabled });
        }
    }

    fn set_stencil_state(&mut self, face: StencilFaceSelect, state: &StencilState) {
        let slot = self.stencil_slot(face);
        if slot.as_ref() == Some(state) {
            return;
        }
        *slot = Some(*state);
        let face = face_enum(face);
        self.commands.push(GlCommand::StencilFuncSeparate {
            face,
            func: state.func.0,
            reference: state.reference,
            read_mask: state.read_mask,
        });
        self.commands.push(GlCommand::StencilOpSeparate {
            face,
            fail: state.fail_op.0,
            depth_fail: state.depth_fail_op.0,
            pass: state.depth_pass_op.0,
        });
        self.commands.push(GlCommand::StencilMaskSeparate {
            face,
            write_mask: state.write_mask,
        });
    }

    fn set_polygon_mode(&mut self, mode: NativeEnum) {
        if self.polygon_mode != Some(mode.0) {
            self.polygon_mode = Some(mode.0);
            self.commands.push(GlCommand::PolygonMode { mode: mode.0 });
        }
    }

    fn set_front_face(&mut self, winding: NativeEnum) {
        if self.front_face != Some(winding.0) {
            self.front_face = Some(winding.0);
            self.commands.push(GlCommand::FrontFace { winding: winding.0 });
        }
    }

    fn set_cull_face(&mut self, mode: NativeEnum) {
        if self.cull_face != Some(mode.0) {
            self.cull_face = Some(mode.0);
            self.commands.push(GlCommand::CullFace { mode: mode.0 });
        }
    }

    fn set_polygon_offset(&mut self, factor: f32, units: f32, clamp: f32) {
        if self.polygon_offset != Some((factor, units, clamp)) {
            self.polygon_offset = Some((factor, units, clamp));
            self.commands.push(GlCommand::PolygonOffset {
                factor,
                units,
                clamp,
            });
        }
    }

    fn set_line_width(&mut self, width: f32) {
        if self.line_width != Some(width) {
            self.line_width = Some(width);
            self.commands.push(GlCommand::LineWidth { width });
        }
    }

    fn set_blend_targets(&mut self, targets: &[BlendTargetState], blend_enabled: bool) {
        if let Some((cached, cached_enabled)) = &self.blend_targets {
            if cached.as_slice() == targets && *cached_enabled == blend_enabled {
                return;
            }
        }
        self.emit_blend_targets(targets, blend_enabled);
        self.blend_targets = Some((targets.to_vec(), blend_enabled));
    }

    fn set_blend_color(&mut self, color: [f32; 4]) {
        if self.blend_color != Some(color) {
            self.blend_color = Some(color);
            self.commands.push(GlCommand::BlendColor { color });
        }
    }

    fn set_logic_op(&mut self, op: NativeEnum) {
        if self.logic_op != Some(op.0) {
            self.logic_op = Some(op.0);
            self.commands.push(GlCommand::LogicOp { op: op.0 });
        }
    }

    // Viewport, depth-range, and scissor arrays are treated as dynamic
    // state and re-issued on every bind.

    fn set_viewports(&mut self, first: u32, viewports: &[ViewportRecord]) {
        self.commands.push(GlCommand::ViewportArray {
            first,
            viewports: viewports.to_vec(),
        });
    }

    fn set_depth_ranges(&mut self, first: u32, ranges: &[DepthRangeRecord]) {
        self.commands.push(GlCommand::DepthRangeArray {
            first,
            ranges: ranges.to_vec(),
        });
    }

    fn set_scissors(&mut self, first: u32, scissors: &[ScissorRecord]) {
        self.commands.push(GlCommand::ScissorArray {
            first,
            scissors: scissors.to_vec(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphics::gl::table::GlEnumTable;
    use opal_core::api::{
        BlendFactor, BlendTargetDescriptor, PipelineDescriptor, PrimitiveTopology,
    };
    use opal_core::limits::DeviceLimits;
    use opal_core::state::CompiledPipelineState;
    use opal_core::traits::ShaderStageSet;
    use std::borrow::Cow;

    #[derive(Debug)]
    struct Stages;

    impl ShaderStageSet for Stages {
        fn native_handle(&self) -> NativeHandle {
            NativeHandle(42)
        }
        fn has_fragment_stage(&self) -> bool {
            true
        }
    }

    const STAGES: Stages = Stages;

    fn compiled(descriptor: &PipelineDescriptor) -> CompiledPipelineState {
        CompiledPipelineState::compile(descriptor, &DeviceLimits::default(), &GlEnumTable).unwrap()
    }

    #[test]
    fn rebinding_same_state_emits_nothing() {
        let desc = PipelineDescriptor {
            shader_stages: Some(&STAGES),
            topology: PrimitiveTopology::TriangleList,
            ..PipelineDescriptor::default()
        };
        let state = compiled(&desc);

        let mut cache = GlStateCache::new();
        state.bind(&mut cache);
        let first = cache.take_commands();
        assert!(!first.is_empty());
        assert!(first.contains(&GlCommand::UseProgram { program: 42 }));

        state.bind(&mut cache);
        assert!(cache.take_commands().is_empty());
    }

    #[test]
    fn toggle_transitions_are_deduplicated() {
        let mut cache = GlStateCache::new();
        cache.set_toggle(StateToggle::DepthTest, true);
        cache.set_toggle(StateToggle::DepthTest, true);
        cache.set_toggle(StateToggle::DepthTest, false);
        assert_eq!(
            cache.take_commands(),
            vec![
                GlCommand::Enable {
                    capability: GL_DEPTH_TEST
                },
                GlCommand::Disable {
                    capability: GL_DEPTH_TEST
                },
            ]
        );
    }

    #[test]
    fn uniform_blend_targets_use_single_call_path() {
        let desc = PipelineDescriptor {
            shader_stages: Some(&STAGES),
            blend: opal_core::api::BlendDescriptor {
                blend_enabled: true,
                targets: Cow::Owned(vec![
                    BlendTargetDescriptor::default(),
                    BlendTargetDescriptor::default(),
                ]),
                ..opal_core::api::BlendDescriptor::default()
            },
            ..PipelineDescriptor::default()
        };
        let state = compiled(&desc);
        let mut cache = GlStateCache::new();
        state.bind(&mut cache);
        let commands = cache.take_commands();

        assert!(commands
            .iter()
            .any(|c| matches!(c, GlCommand::BlendFuncSeparate { .. })));
        assert!(!commands
            .iter()
            .any(|c| matches!(c, GlCommand::BlendFuncSeparateIndexed { .. })));
    }

    #[test]
    fn mixed_blend_targets_use_indexed_calls() {
        let desc = PipelineDescriptor {
            shader_stages: Some(&STAGES),
            blend: opal_core::api::BlendDescriptor {
                blend_enabled: true,
                targets: Cow::Owned(vec![
                    BlendTargetDescriptor::default(),
                    BlendTargetDescriptor {
                        src_color: BlendFactor::One,
                        ..BlendTargetDescriptor::default()
                    },
                ]),
                ..opal_core::api::BlendDescriptor::default()
            },
            ..PipelineDescriptor::default()
        };
        let state = compiled(&desc);
        let mut cache = GlStateCache::new();
        state.bind(&mut cache);
        let commands = cache.take_commands();

        let indexed_funcs = commands
            .iter()
            .filter(|c| matches!(c, GlCommand::BlendFuncSeparateIndexed { .. }))
            .count();
        assert_eq!(indexed_funcs, 2);
        assert!(!commands
            .iter()
            .any(|c| matches!(c, GlCommand::BlendFuncSeparate { .. })));
    }

    #[test]
    fn static_viewports_are_replayed_every_bind() {
        let desc = PipelineDescriptor {
            shader_stages: Some(&STAGES),
            viewports: Cow::Owned(vec![opal_core::api::Viewport {
                width: 640.0,
                height: 480.0,
                ..opal_core::api::Viewport::default()
            }]),
            ..PipelineDescriptor::default()
        };
        let state = compiled(&desc);
        let mut cache = GlStateCache::new();
        state.bind(&mut cache);
        cache.take_commands();

        state.bind(&mut cache);
        let second = cache.take_commands();
        assert!(second
            .iter()
            .any(|c| matches!(c, GlCommand::ViewportArray { .. })));
        assert!(second
            .iter()
            .any(|c| matches!(c, GlCommand::DepthRangeArray { .. })));
    }
}

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

//! Explicit-backend state folding.
//!
//! Explicit APIs have no mutable context state machine; the binder's
//! ordered calls are folded into a [`VkPipelineSnapshot`] the backend
//! compiles into (or hashes against) a native pipeline object. A version
//! counter advances only when the snapshot actually changes, so rebinding
//! the same pipeline state is free.

use log::trace;
use opal_core::api::NativeHandle;
use opal_core::state::{
    BlendTargetState, DepthRangeRecord, ScissorRecord, StencilState, ViewportRecord,
};
use opal_core::traits::{NativeEnum, StateTracker, StateToggle, StencilFaceSelect};
use std::collections::HashMap;

/// The complete folded pipeline state of an explicit backend.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VkPipelineSnapshot {
    /// The bound shader program/module set.
    pub program: Option<NativeHandle>,
    /// Enabled/disabled capabilities.
    pub toggles: HashMap<StateToggle, bool>,
    /// Control points per tessellation patch; zero when unused.
    pub patch_vertices: u32,
    /// The depth comparison op, once set.
    pub depth_func: Option<NativeEnum>,
    /// Whether depth writes are on.
    pub depth_write: bool,
    /// Front-face stencil state.
    pub stencil_front: Option<StencilState>,
    /// Back-face stencil state.
    pub stencil_back: Option<StencilState>,
    /// The polygon fill mode.
    pub polygon_mode: Option<NativeEnum>,
    /// The front-face winding.
    pub front_face: Option<NativeEnum>,
    /// The cull mode, while culling is enabled.
    pub cull_face: Option<NativeEnum>,
    /// Depth-bias constants (slope factor, constant units, clamp).
    pub depth_bias: (f32, f32, f32),
    /// The rasterized line width.
    pub line_width: f32,
    /// Per-target blend state.
    pub blend_targets: Vec<BlendTargetState>,
    /// Whether blending is enabled.
    pub blend_enabled: bool,
    /// The constant blend color.
    pub blend_color: [f32; 4],
    /// The color logic op, while enabled.
    pub logic_op: Option<NativeEnum>,
    /// Static viewport rectangles.
    pub viewports: Vec<ViewportRecord>,
    /// Static viewport depth ranges.
    pub depth_ranges: Vec<DepthRangeRecord>,
    /// Static scissor rectangles.
    pub scissors: Vec<ScissorRecord>,
}

/// A [`StateTracker`] that folds binder calls into a versioned snapshot.
#[derive(Debug, Default)]
pub struct VkStateTracker {
    snapshot: VkPipelineSnapshot,
    version: u64,
}

impl VkStateTracker {
    /// Creates a tracker with an empty snapshot at version zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current folded pipeline state.
    pub fn snapshot(&self) -> &VkPipelineSnapshot {
        &self.snapshot
    }

    /// The snapshot version; advances only on actual state changes.
    pub fn version(&self) -> u64 {
        self.version
    }

    fn fold<T: PartialEq>(field: &mut T, value: T, version: &mut u64) {
        if *field != value {
            *field = value;
            *version += 1;
        }
    }
}

impl StateTracker for VkStateTracker {
    fn bind_shader_program(&mut self, program: NativeHandle) {
        Self::fold(&mut self.snapshot.program, Some(program), &mut self.version);
    }

    fn set_toggle(&mut self, toggle: StateToggle, enabled: bool) {
        if self.snapshot.toggles.get(&toggle) != Some(&enabled) {
            self.snapshot.toggles.insert(toggle, enabled);
            self.version += 1;
            trace!("vk snapshot toggle {toggle:?} -> {enabled} (v{})", self.version);
        }
    }

    fn set_patch_vertices(&mut self, count: u32) {
        Self::fold(&mut self.snapshot.patch_vertices, count, &mut self.version);
    }

    fn set_depth_func(&mut self, func: NativeEnum) {
        Self::fold(&mut self.snapshot.depth_func, Some(func), &mut self.version);
    }

    fn set_depth_write(&mut self, enabled: bool) {
        Self::fold(&mut self.snapshot.depth_write, enabled, &mut self.version);
    }

    fn set_stencil_state(&mut self, face: StencilFaceSelect, state: &StencilState) {
        let slot = match face {
            StencilFaceSelect::Front => &mut self.snapshot.stencil_front,
            StencilFaceSelect::Back => &mut self.snapshot.stencil_back,
        };
        Self::fold(slot, Some(*state), &mut self.version);
    }

    fn set_polygon_mode(&mut self, mode: NativeEnum) {
        Self::fold(&mut self.snapshot.polygon_mode, Some(mode), &mut self.version);
    }

    fn set_front_face(&mut self, winding: NativeEnum) {
        Self::fold(&mut self.snapshot.front_face, Some(winding), &mut self.version);
    }

    fn set_cull_face(&mut self, mode: NativeEnum) {
        Self::fold(&mut self.snapshot.cull_face, Some(mode), &mut self.version);
    }

    fn set_polygon_offset(&mut self, factor: f32, units: f32, clamp: f32) {
        Self::fold(
            &mut self.snapshot.depth_bias,
            (factor, units, clamp),
            &mut self.version,
        );
    }

    fn set_line_width(&mut self, width: f32) {
        Self::fold(&mut self.snapshot.line_width, width, &mut self.version);
    }

    fn set_blend_targets(&mut self, targets: &[BlendTargetState], blend_enabled: bool) {
        if self.snapshot.blend_targets.as_slice() != targets {
            self.snapshot.blend_targets = targets.to_vec();
            self.version += 1;
        }
        Self::fold(&mut self.snapshot.blend_enabled, blend_enabled, &mut self.version);
    }

    fn set_blend_color(&mut self, color: [f32; 4]) {
        Self::fold(&mut self.snapshot.blend_color, color, &mut self.version);
    }

    fn set_logic_op(&mut self, op: NativeEnum) {
        Self::fold(&mut self.snapshot.logic_op, Some(op), &mut self.version);
    }

    fn set_viewports(&mut self, first: u32, viewports: &[ViewportRecord]) {
        let start = first as usize;
        if self.snapshot.viewports.len() < start + viewports.len() {
            self.snapshot
                .viewports
                .resize(start + viewports.len(), ViewportRecord::default());
            self.version += 1;
        }
        if &self.snapshot.viewports[start..start + viewports.len()] != viewports {
            self.snapshot.viewports[start..start + viewports.len()].copy_from_slice(viewports);
            self.version += 1;
        }
    }

    fn set_depth_ranges(&mut self, first: u32, ranges: &[DepthRangeRecord]) {
        let start = first as usize;
        if self.snapshot.depth_ranges.len() < start + ranges.len() {
            self.snapshot
                .depth_ranges
                .resize(start + ranges.len(), DepthRangeRecord::default());
            self.version += 1;
        }
        if &self.snapshot.depth_ranges[start..start + ranges.len()] != ranges {
            self.snapshot.depth_ranges[start..start + ranges.len()].copy_from_slice(ranges);
            self.version += 1;
        }
    }

    fn set_scissors(&mut self, first: u32, scissors: &[ScissorRecord]) {
        let start = first as usize;
        if self.snapshot.scissors.len() < start + scissors.len() {
            self.snapshot
                .scissors
                .resize(start + scissors.len(), ScissorRecord::default());
            self.version += 1;
        }
        if &self.snapshot.scissors[start..start + scissors.len()] != scissors {
            self.snapshot.scissors[start..start + scissors.len()].copy_from_slice(scissors);
            self.version += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphics::vk::table::VkEnumTable;
    use opal_core::api::{PipelineDescriptor, PolygonMode, Viewport};
    use opal_core::limits::DeviceLimits;
    use opal_core::state::CompiledPipelineState;
    use opal_core::traits::{EnumTable, ShaderStageSet};
    use std::borrow::Cow;

    #[derive(Debug)]
    struct Stages;

    impl ShaderStageSet for Stages {
        fn native_handle(&self) -> NativeHandle {
            NativeHandle(3)
        }
        fn has_fragment_stage(&self) -> bool {
            true
        }
    }

    const STAGES: Stages = Stages;

    fn compiled(descriptor: &PipelineDescriptor) -> CompiledPipelineState {
        CompiledPipelineState::compile(descriptor, &DeviceLimits::default(), &VkEnumTable).unwrap()
    }

    #[test]
    fn rebinding_same_state_keeps_version() {
        let desc = PipelineDescriptor {
            shader_stages: Some(&STAGES),
            viewports: Cow::Owned(vec![Viewport {
                width: 800.0,
                height: 600.0,
                ..Viewport::default()
            }]),
            ..PipelineDescriptor::default()
        };
        let state = compiled(&desc);

        let mut tracker = VkStateTracker::new();
        state.bind(&mut tracker);
        let version = tracker.version();
        assert!(version > 0);

        state.bind(&mut tracker);
        assert_eq!(tracker.version(), version);
    }

    #[test]
    fn different_states_advance_the_version() {
        let base = PipelineDescriptor {
            shader_stages: Some(&STAGES),
            ..PipelineDescriptor::default()
        };
        let mut wired = base.clone();
        wired.rasterizer.polygon_mode = PolygonMode::Wireframe;

        let first = compiled(&base);
        let second = compiled(&wired);

        let mut tracker = VkStateTracker::new();
        first.bind(&mut tracker);
        let version = tracker.version();
        second.bind(&mut tracker);
        assert!(tracker.version() > version);
        assert_eq!(
            tracker.snapshot().polygon_mode,
            Some(VkEnumTable.polygon_mode(PolygonMode::Wireframe).unwrap())
        );
    }

    #[test]
    fn depth_bias_collapses_onto_one_toggle() {
        let mut desc = PipelineDescriptor {
            shader_stages: Some(&STAGES),
            ..PipelineDescriptor::default()
        };
        desc.rasterizer.polygon_mode = PolygonMode::Points;
        desc.rasterizer.depth_bias.slope_factor = 2.0;

        let state = compiled(&desc);
        let mut tracker = VkStateTracker::new();
        state.bind(&mut tracker);

        assert_eq!(
            tracker.snapshot().toggles.get(&StateToggle::DepthBias),
            Some(&true)
        );
        assert_eq!(tracker.snapshot().depth_bias, (2.0, 0.0, 0.0));
        assert!(!tracker
            .snapshot()
            .toggles
            .contains_key(&StateToggle::PolygonOffsetPoint));
    }

    #[test]
    fn static_viewports_land_in_snapshot_arrays() {
        let desc = PipelineDescriptor {
            shader_stages: Some(&STAGES),
            viewports: Cow::Owned(vec![Viewport {
                x: 4.0,
                y: 8.0,
                width: 320.0,
                height: 240.0,
                min_depth: 0.1,
                max_depth: 0.9,
            }]),
            ..PipelineDescriptor::default()
        };
        let state = compiled(&desc);
        let mut tracker = VkStateTracker::new();
        state.bind(&mut tracker);

        assert_eq!(
            tracker.snapshot().viewports,
            vec![ViewportRecord {
                x: 4.0,
                y: 8.0,
                width: 320.0,
                height: 240.0,
            }]
        );
        assert_eq!(
            tracker.snapshot().depth_ranges,
            vec![DepthRangeRecord {
                min_depth: 0.1f32 as f64,
                max_depth: 0.9f32 as f64,
            }]
        );
    }
}

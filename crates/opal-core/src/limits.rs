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

//! Device limits and optional capabilities negotiated with a backend.

/// Upper bound on simultaneously bound viewports and scissor rectangles.
///
/// Static viewport/scissor lists longer than this are rejected at pipeline
/// compile time, never truncated.
pub const MAX_VIEWPORTS_AND_SCISSORS: usize = 16;

/// Hard limits and optional capabilities reported by a graphics backend.
///
/// The pipeline-state compiler validates descriptors against these values;
/// optional features (conservative rasterization) are negotiated here
/// rather than through compile-time configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceLimits {
    /// Maximum number of control points per tessellation patch.
    pub max_patch_vertices: u32,
    /// Whether the device supports conservative rasterization.
    pub conservative_raster_supported: bool,
}

impl Default for DeviceLimits {
    fn default() -> Self {
        Self {
            max_patch_vertices: 32,
            conservative_raster_supported: false,
        }
    }
}

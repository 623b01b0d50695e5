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

//! Backend-agnostic pipeline-state enums.
//!
//! Every value here is mapped through a backend's enum table at pipeline
//! compile time; an unmapped value is rejected there, never defaulted.

/// The comparison function used for depth and stencil tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CompareFunction {
    /// The test never passes.
    Never,
    /// Passes if the incoming value is less than the stored value.
    Less,
    /// Passes if the incoming value equals the stored value.
    Equal,
    /// Passes if the incoming value is less than or equal to the stored value.
    #[default]
    LessEqual,
    /// Passes if the incoming value is greater than the stored value.
    Greater,
    /// Passes if the incoming value differs from the stored value.
    NotEqual,
    /// Passes if the incoming value is greater than or equal to the stored value.
    GreaterEqual,
    /// The test always passes.
    Always,
}

/// The operation applied to a stencil-buffer value after a test outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StencilOperation {
    /// Keep the current value.
    #[default]
    Keep,
    /// Set the value to zero.
    Zero,
    /// Replace the value with the reference value.
    Replace,
    /// Increment the value, clamping at the maximum.
    IncrementClamp,
    /// Decrement the value, clamping at zero.
    DecrementClamp,
    /// Bitwise-invert the value.
    Invert,
    /// Increment the value, wrapping to zero past the maximum.
    IncrementWrap,
    /// Decrement the value, wrapping past zero.
    DecrementWrap,
}

/// The multiplication factor applied to a blend input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlendFactor {
    /// `0`.
    Zero,
    /// `1`.
    One,
    /// Source color.
    SrcColor,
    /// `1 - source color`.
    InvSrcColor,
    /// Source alpha.
    SrcAlpha,
    /// `1 - source alpha`.
    InvSrcAlpha,
    /// Destination color.
    DstColor,
    /// `1 - destination color`.
    InvDstColor,
    /// Destination alpha.
    DstAlpha,
    /// `1 - destination alpha`.
    InvDstAlpha,
    /// Source alpha, saturated against destination alpha.
    SrcAlphaSaturate,
    /// The constant blend color set on the context.
    BlendFactor,
    /// `1 -` the constant blend color.
    InvBlendFactor,
}

impl BlendFactor {
    /// Returns `true` if this factor reads the constant blend color, which
    /// requires the blend-color command to be issued at bind time.
    pub const fn uses_blend_color(&self) -> bool {
        matches!(self, BlendFactor::BlendFactor | BlendFactor::InvBlendFactor)
    }
}

/// The arithmetic operation combining source and destination blend terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BlendOperation {
    /// `src + dst`.
    #[default]
    Add,
    /// `src - dst`.
    Subtract,
    /// `dst - src`.
    ReverseSubtract,
    /// `min(src, dst)`.
    Min,
    /// `max(src, dst)`.
    Max,
}

/// The bitwise operation applied to color output when logic ops are enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LogicOperation {
    /// Logic operations are disabled; residual fields are ignored.
    #[default]
    Disabled,
    /// Clear all bits.
    Clear,
    /// Set all bits.
    Set,
    /// Copy the source.
    Copy,
    /// Copy the inverted source.
    CopyInverted,
    /// Keep the destination.
    NoOp,
    /// Invert the destination.
    Invert,
    /// `src AND dst`.
    And,
    /// `NOT (src AND dst)`.
    Nand,
    /// `src OR dst`.
    Or,
    /// `NOT (src OR dst)`.
    Nor,
    /// `src XOR dst`.
    Xor,
    /// `NOT (src XOR dst)`.
    Equivalent,
    /// `src AND NOT dst`.
    AndReverse,
    /// `NOT src AND dst`.
    AndInverted,
    /// `src OR NOT dst`.
    OrReverse,
    /// `NOT src OR dst`.
    OrInverted,
}

/// Which primitive faces are discarded by culling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CullMode {
    /// Cull front-facing primitives.
    Front,
    /// Cull back-facing primitives.
    Back,
}

/// The vertex winding order that determines the "front" face of a triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FrontFace {
    /// Counter-clockwise winding is front-facing.
    #[default]
    Ccw,
    /// Clockwise winding is front-facing.
    Cw,
}

/// The rasterization fill mode for polygons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PolygonMode {
    /// Polygons are filled.
    #[default]
    Fill,
    /// Only polygon edges are rasterized.
    Wireframe,
    /// Only polygon vertices are rasterized.
    Points,
}

/// The topology of the primitives fed to the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PrimitiveTopology {
    /// A list of independent points.
    PointList,
    /// A list of independent line segments.
    LineList,
    /// A connected strip of line segments.
    LineStrip,
    /// A list of independent triangles.
    #[default]
    TriangleList,
    /// A connected strip of triangles.
    TriangleStrip,
    /// Tessellation patches with the given number of control points.
    PatchList {
        /// Control points per patch; validated against the device limit.
        control_points: u32,
    },
}

impl PrimitiveTopology {
    /// Returns the patch control-point count, or `None` for non-patch
    /// topologies.
    pub const fn patch_control_points(&self) -> Option<u32> {
        match self {
            PrimitiveTopology::PatchList { control_points } => Some(*control_points),
            _ => None,
        }
    }
}

/// The number of samples per pixel for multisample anti-aliasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SampleCount {
    /// 1 sample per pixel (multisampling disabled).
    #[default]
    X1,
    /// 2 samples per pixel.
    X2,
    /// 4 samples per pixel.
    X4,
    /// 8 samples per pixel.
    X8,
    /// 16 samples per pixel.
    X16,
}

impl SampleCount {
    /// The sample count as a plain integer.
    pub const fn count(&self) -> u32 {
        match self {
            SampleCount::X1 => 1,
            SampleCount::X2 => 2,
            SampleCount::X4 => 4,
            SampleCount::X8 => 8,
            SampleCount::X16 => 16,
        }
    }

    /// Returns `true` if more than one sample per pixel is used.
    pub const fn is_multisampled(&self) -> bool {
        self.count() > 1
    }
}

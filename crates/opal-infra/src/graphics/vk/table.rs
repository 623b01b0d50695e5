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

//! Vulkan enum values for every mapped API enum.

use opal_core::api::{
    BlendFactor, BlendOperation, CompareFunction, CullMode, FrontFace, LogicOperation,
    PolygonMode, PrimitiveTopology, StencilOperation,
};
use opal_core::error::GraphicsError;
use opal_core::traits::{EnumTable, NativeEnum, StateToggle};

// VkCompareOp.
const VK_COMPARE_OP_NEVER: u32 = 0;
const VK_COMPARE_OP_LESS: u32 = 1;
const VK_COMPARE_OP_EQUAL: u32 = 2;
const VK_COMPARE_OP_LESS_OR_EQUAL: u32 = 3;
const VK_COMPARE_OP_GREATER: u32 = 4;
const VK_COMPARE_OP_NOT_EQUAL: u32 = 5;
const VK_COMPARE_OP_GREATER_OR_EQUAL: u32 = 6;
const VK_COMPARE_OP_ALWAYS: u32 = 7;

// VkStencilOp.
const VK_STENCIL_OP_KEEP: u32 = 0;
const VK_STENCIL_OP_ZERO: u32 = 1;
const VK_STENCIL_OP_REPLACE: u32 = 2;
const VK_STENCIL_OP_INCREMENT_AND_CLAMP: u32 = 3;
const VK_STENCIL_OP_DECREMENT_AND_CLAMP: u32 = 4;
const VK_STENCIL_OP_INVERT: u32 = 5;
const VK_STENCIL_OP_INCREMENT_AND_WRAP: u32 = 6;
const VK_STENCIL_OP_DECREMENT_AND_WRAP: u32 = 7;

// VkBlendFactor.
const VK_BLEND_FACTOR_ZERO: u32 = 0;
const VK_BLEND_FACTOR_ONE: u32 = 1;
const VK_BLEND_FACTOR_SRC_COLOR: u32 = 2;
const VK_BLEND_FACTOR_ONE_MINUS_SRC_COLOR: u32 = 3;
const VK_BLEND_FACTOR_DST_COLOR: u32 = 4;
const VK_BLEND_FACTOR_ONE_MINUS_DST_COLOR: u32 = 5;
const VK_BLEND_FACTOR_SRC_ALPHA: u32 = 6;
const VK_BLEND_FACTOR_ONE_MINUS_SRC_ALPHA: u32 = 7;
const VK_BLEND_FACTOR_DST_ALPHA: u32 = 8;
const VK_BLEND_FACTOR_ONE_MINUS_DST_ALPHA: u32 = 9;
const VK_BLEND_FACTOR_CONSTANT_COLOR: u32 = 10;
const VK_BLEND_FACTOR_ONE_MINUS_CONSTANT_COLOR: u32 = 11;
const VK_BLEND_FACTOR_SRC_ALPHA_SATURATE: u32 = 14;

// VkBlendOp.
const VK_BLEND_OP_ADD: u32 = 0;
const VK_BLEND_OP_SUBTRACT: u32 = 1;
const VK_BLEND_OP_REVERSE_SUBTRACT: u32 = 2;
const VK_BLEND_OP_MIN: u32 = 3;
const VK_BLEND_OP_MAX: u32 = 4;

// VkLogicOp.
const VK_LOGIC_OP_CLEAR: u32 = 0;
const VK_LOGIC_OP_AND: u32 = 1;
const VK_LOGIC_OP_AND_REVERSE: u32 = 2;
const VK_LOGIC_OP_COPY: u32 = 3;
const VK_LOGIC_OP_AND_INVERTED: u32 = 4;
const VK_LOGIC_OP_NO_OP: u32 = 5;
const VK_LOGIC_OP_XOR: u32 = 6;
const VK_LOGIC_OP_OR: u32 = 7;
const VK_LOGIC_OP_NOR: u32 = 8;
const VK_LOGIC_OP_EQUIVALENT: u32 = 9;
const VK_LOGIC_OP_INVERT: u32 = 10;
const VK_LOGIC_OP_OR_REVERSE: u32 = 11;
const VK_LOGIC_OP_COPY_INVERTED: u32 = 12;
const VK_LOGIC_OP_OR_INVERTED: u32 = 13;
const VK_LOGIC_OP_NAND: u32 = 14;
const VK_LOGIC_OP_SET: u32 = 15;

// VkPolygonMode.
const VK_POLYGON_MODE_FILL: u32 = 0;
const VK_POLYGON_MODE_LINE: u32 = 1;
const VK_POLYGON_MODE_POINT: u32 = 2;

// VkCullModeFlagBits and VkFrontFace.
const VK_CULL_MODE_FRONT_BIT: u32 = 1;
const VK_CULL_MODE_BACK_BIT: u32 = 2;
const VK_FRONT_FACE_COUNTER_CLOCKWISE: u32 = 0;
const VK_FRONT_FACE_CLOCKWISE: u32 = 1;

// VkPrimitiveTopology.
const VK_PRIMITIVE_TOPOLOGY_POINT_LIST: u32 = 0;
const VK_PRIMITIVE_TOPOLOGY_LINE_LIST: u32 = 1;
const VK_PRIMITIVE_TOPOLOGY_LINE_STRIP: u32 = 2;
const VK_PRIMITIVE_TOPOLOGY_TRIANGLE_LIST: u32 = 3;
const VK_PRIMITIVE_TOPOLOGY_TRIANGLE_STRIP: u32 = 4;
const VK_PRIMITIVE_TOPOLOGY_PATCH_LIST: u32 = 10;

/// The Vulkan enum mapping table. Stateless; every lookup is a pure match.
#[derive(Debug, Clone, Copy, Default)]
pub struct VkEnumTable;

impl EnumTable for VkEnumTable {
    fn compare_function(&self, func: CompareFunction) -> Result<NativeEnum, GraphicsError> {
        Ok(NativeEnum(match func {
            CompareFunction::Never => VK_COMPARE_OP_NEVER,
            CompareFunction::Less => VK_COMPARE_OP_LESS,
            CompareFunction::Equal => VK_COMPARE_OP_EQUAL,
            CompareFunction::LessEqual => VK_COMPARE_OP_LESS_OR_EQUAL,
            CompareFunction::Greater => VK_COMPARE_OP_GREATER,
            CompareFunction::NotEqual => VK_COMPARE_OP_NOT_EQUAL,
            CompareFunction::GreaterEqual => VK_COMPARE_OP_GREATER_OR_EQUAL,
            CompareFunction::Always => VK_COMPARE_OP_ALWAYS,
        }))
    }

    fn stencil_operation(&self, op: StencilOperation) -> Result<NativeEnum, GraphicsError> {
        Ok(NativeEnum(match op {
            StencilOperation::Keep => VK_STENCIL_OP_KEEP,
            StencilOperation::Zero => VK_STENCIL_OP_ZERO,
            StencilOperation::Replace => VK_STENCIL_OP_REPLACE,
            StencilOperation::IncrementClamp => VK_STENCIL_OP_INCREMENT_AND_CLAMP,
            StencilOperation::DecrementClamp => VK_STENCIL_OP_DECREMENT_AND_CLAMP,
            StencilOperation::Invert => VK_STENCIL_OP_INVERT,
            StencilOperation::IncrementWrap => VK_STENCIL_OP_INCREMENT_AND_WRAP,
            StencilOperation::DecrementWrap => VK_STENCIL_OP_DECREMENT_AND_WRAP,
        }))
    }

    fn blend_factor(&self, factor: BlendFactor) -> Result<NativeEnum, GraphicsError> {
        Ok(NativeEnum(match factor {
            BlendFactor::Zero => VK_BLEND_FACTOR_ZERO,
            BlendFactor::One => VK_BLEND_FACTOR_ONE,
            BlendFactor::SrcColor => VK_BLEND_FACTOR_SRC_COLOR,
            BlendFactor::InvSrcColor => VK_BLEND_FACTOR_ONE_MINUS_SRC_COLOR,
            BlendFactor::SrcAlpha => VK_BLEND_FACTOR_SRC_ALPHA,
            BlendFactor::InvSrcAlpha => VK_BLEND_FACTOR_ONE_MINUS_SRC_ALPHA,
            BlendFactor::DstColor => VK_BLEND_FACTOR_DST_COLOR,
            BlendFactor::InvDstColor => VK_BLEND_FACTOR_ONE_MINUS_DST_COLOR,
            BlendFactor::DstAlpha => VK_BLEND_FACTOR_DST_ALPHA,
            BlendFactor::InvDstAlpha => VK_BLEND_FACTOR_ONE_MINUS_DST_ALPHA,
            BlendFactor::SrcAlphaSaturate => VK_BLEND_FACTOR_SRC_ALPHA_SATURATE,
            BlendFactor::BlendFactor => VK_BLEND_FACTOR_CONSTANT_COLOR,
            BlendFactor::InvBlendFactor => VK_BLEND_FACTOR_ONE_MINUS_CONSTANT_COLOR,
        }))
    }

    fn blend_operation(&self, op: BlendOperation) -> Result<NativeEnum, GraphicsError> {
        Ok(NativeEnum(match op {
            BlendOperation::Add => VK_BLEND_OP_ADD,
            BlendOperation::Subtract => VK_BLEND_OP_SUBTRACT,
            BlendOperation::ReverseSubtract => VK_BLEND_OP_REVERSE_SUBTRACT,
            BlendOperation::Min => VK_BLEND_OP_MIN,
            BlendOperation::Max => VK_BLEND_OP_MAX,
        }))
    }

    fn logic_operation(&self, op: LogicOperation) -> Result<NativeEnum, GraphicsError> {
        Ok(NativeEnum(match op {
            LogicOperation::Disabled => {
                return Err(GraphicsError::invalid(
                    "disabled logic operation has no native value",
                ));
            }
            LogicOperation::Clear => VK_LOGIC_OP_CLEAR,
            LogicOperation::Set => VK_LOGIC_OP_SET,
            LogicOperation::Copy => VK_LOGIC_OP_COPY,
            LogicOperation::CopyInverted => VK_LOGIC_OP_COPY_INVERTED,
            LogicOperation::NoOp => VK_LOGIC_OP_NO_OP,
            LogicOperation::Invert => VK_LOGIC_OP_INVERT,
            LogicOperation::And => VK_LOGIC_OP_AND,
            LogicOperation::Nand => VK_LOGIC_OP_NAND,
            LogicOperation::Or => VK_LOGIC_OP_OR,
            LogicOperation::Nor => VK_LOGIC_OP_NOR,
            LogicOperation::Xor => VK_LOGIC_OP_XOR,
            LogicOperation::Equivalent => VK_LOGIC_OP_EQUIVALENT,
            LogicOperation::AndReverse => VK_LOGIC_OP_AND_REVERSE,
            LogicOperation::AndInverted => VK_LOGIC_OP_AND_INVERTED,
            LogicOperation::OrReverse => VK_LOGIC_OP_OR_REVERSE,
            LogicOperation::OrInverted => VK_LOGIC_OP_OR_INVERTED,
        }))
    }

    fn polygon_mode(&self, mode: PolygonMode) -> Result<NativeEnum, GraphicsError> {
        Ok(NativeEnum(match mode {
            PolygonMode::Fill => VK_POLYGON_MODE_FILL,
            PolygonMode::Wireframe => VK_POLYGON_MODE_LINE,
            PolygonMode::Points => VK_POLYGON_MODE_POINT,
        }))
    }

    fn cull_mode(&self, mode: CullMode) -> Result<NativeEnum, GraphicsError> {
        Ok(NativeEnum(match mode {
            CullMode::Front => VK_CULL_MODE_FRONT_BIT,
            CullMode::Back => VK_CULL_MODE_BACK_BIT,
        }))
    }

    fn front_face(&self, winding: FrontFace) -> Result<NativeEnum, GraphicsError> {
        Ok(NativeEnum(match winding {
            FrontFace::Ccw => VK_FRONT_FACE_COUNTER_CLOCKWISE,
            FrontFace::Cw => VK_FRONT_FACE_CLOCKWISE,
        }))
    }

    fn primitive_topology(
        &self,
        topology: PrimitiveTopology,
    ) -> Result<NativeEnum, GraphicsError> {
        Ok(NativeEnum(match topology {
            PrimitiveTopology::PointList => VK_PRIMITIVE_TOPOLOGY_POINT_LIST,
            PrimitiveTopology::LineList => VK_PRIMITIVE_TOPOLOGY_LINE_LIST,
            PrimitiveTopology::LineStrip => VK_PRIMITIVE_TOPOLOGY_LINE_STRIP,
            PrimitiveTopology::TriangleList => VK_PRIMITIVE_TOPOLOGY_TRIANGLE_LIST,
            PrimitiveTopology::TriangleStrip => VK_PRIMITIVE_TOPOLOGY_TRIANGLE_STRIP,
            PrimitiveTopology::PatchList { .. } => VK_PRIMITIVE_TOPOLOGY_PATCH_LIST,
        }))
    }

    fn polygon_offset_toggle(&self, _mode: PolygonMode) -> Result<StateToggle, GraphicsError> {
        // Explicit APIs carry a single depth-bias enable; the fill mode
        // lives in its own pipeline field.
        Ok(StateToggle::DepthBias)
    }
}

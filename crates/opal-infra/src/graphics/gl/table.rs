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

//! GLenum values for every mapped API enum.

use opal_core::api::{
    BlendFactor, BlendOperation, CompareFunction, CullMode, FrontFace, LogicOperation,
    PolygonMode, PrimitiveTopology, StencilOperation,
};
use opal_core::error::GraphicsError;
use opal_core::traits::{EnumTable, NativeEnum, StateToggle};

// Comparison functions.
const GL_NEVER: u32 = 0x0200;
const GL_LESS: u32 = 0x0201;
const GL_EQUAL: u32 = 0x0202;
const GL_LEQUAL: u32 = 0x0203;
const GL_GREATER: u32 = 0x0204;
const GL_NOTEQUAL: u32 = 0x0205;
const GL_GEQUAL: u32 = 0x0206;
const GL_ALWAYS: u32 = 0x0207;

// Stencil operations.
const GL_ZERO: u32 = 0x0000;
const GL_KEEP: u32 = 0x1E00;
const GL_REPLACE: u32 = 0x1E01;
const GL_INCR: u32 = 0x1E02;
const GL_DECR: u32 = 0x1E03;
const GL_INCR_WRAP: u32 = 0x8507;
const GL_DECR_WRAP: u32 = 0x8508;

// Blend factors.
const GL_ONE: u32 = 0x0001;
const GL_SRC_COLOR: u32 = 0x0300;
const GL_ONE_MINUS_SRC_COLOR: u32 = 0x0301;
const GL_SRC_ALPHA: u32 = 0x0302;
const GL_ONE_MINUS_SRC_ALPHA: u32 = 0x0303;
const GL_DST_ALPHA: u32 = 0x0304;
const GL_ONE_MINUS_DST_ALPHA: u32 = 0x0305;
const GL_DST_COLOR: u32 = 0x0306;
const GL_ONE_MINUS_DST_COLOR: u32 = 0x0307;
const GL_SRC_ALPHA_SATURATE: u32 = 0x0308;
const GL_CONSTANT_COLOR: u32 = 0x8001;
const GL_ONE_MINUS_CONSTANT_COLOR: u32 = 0x8002;

// Blend equations.
const GL_FUNC_ADD: u32 = 0x8006;
const GL_MIN: u32 = 0x8007;
const GL_MAX: u32 = 0x8008;
const GL_FUNC_SUBTRACT: u32 = 0x800A;
const GL_FUNC_REVERSE_SUBTRACT: u32 = 0x800B;

// Logic operations.
const GL_CLEAR: u32 = 0x1500;
const GL_AND: u32 = 0x1501;
const GL_AND_REVERSE: u32 = 0x1502;
const GL_COPY: u32 = 0x1503;
const GL_AND_INVERTED: u32 = 0x1504;
const GL_NOOP: u32 = 0x1505;
const GL_XOR: u32 = 0x1506;
const GL_OR: u32 = 0x1507;
const GL_NOR: u32 = 0x1508;
const GL_EQUIV: u32 = 0x1509;
const GL_INVERT: u32 = 0x150A;
const GL_OR_REVERSE: u32 = 0x150B;
const GL_COPY_INVERTED: u32 = 0x150C;
const GL_OR_INVERTED: u32 = 0x150D;
const GL_NAND: u32 = 0x150E;
const GL_SET: u32 = 0x150F;

// Polygon modes.
const GL_POINT: u32 = 0x1B00;
const GL_LINE: u32 = 0x1B01;
const GL_FILL: u32 = 0x1B02;

// Face selection and winding.
const GL_FRONT: u32 = 0x0404;
const GL_BACK: u32 = 0x0405;
const GL_CW: u32 = 0x0900;
const GL_CCW: u32 = 0x0901;

// Draw modes.
const GL_POINTS: u32 = 0x0000;
const GL_LINES: u32 = 0x0001;
const GL_LINE_STRIP: u32 = 0x0003;
const GL_TRIANGLES: u32 = 0x0004;
const GL_TRIANGLE_STRIP: u32 = 0x0005;
const GL_PATCHES: u32 = 0x000E;

/// The GL enum mapping table. Stateless; every lookup is a pure match.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlEnumTable;

impl EnumTable for GlEnumTable {
    fn compare_function(&self, func: CompareFunction) -> Result<NativeEnum, GraphicsError> {
        Ok(NativeEnum(match func {
            CompareFunction::Never => GL_NEVER,
            CompareFunction::Less => GL_LESS,
            CompareFunction::Equal => GL_EQUAL,
            CompareFunction::LessEqual => GL_LEQUAL,
            CompareFunction::Greater => GL_GREATER,
            CompareFunction::NotEqual => GL_NOTEQUAL,
            CompareFunction::GreaterEqual => GL_GEQUAL,
            CompareFunction::Always => GL_ALWAYS,
        }))
    }

    fn stencil_operation(&self, op: StencilOperation) -> Result<NativeEnum, GraphicsError> {
        Ok(NativeEnum(match op {
            StencilOperation::Keep => GL_KEEP,
            StencilOperation::Zero => GL_ZERO,
            StencilOperation::Replace => GL_REPLACE,
            StencilOperation::IncrementClamp => GL_INCR,
            StencilOperation::DecrementClamp => GL_DECR,
            StencilOperation::Invert => GL_INVERT,
            StencilOperation::IncrementWrap => GL_INCR_WRAP,
            StencilOperation::DecrementWrap => GL_DECR_WRAP,
        }))
    }

    fn blend_factor(&self, factor: BlendFactor) -> Result<NativeEnum, GraphicsError> {
        Ok(NativeEnum(match factor {
            BlendFactor::Zero => GL_ZERO,
            BlendFactor::One => GL_ONE,
            BlendFactor::SrcColor => GL_SRC_COLOR,
            BlendFactor::InvSrcColor => GL_ONE_MINUS_SRC_COLOR,
            BlendFactor::SrcAlpha => GL_SRC_ALPHA,
            BlendFactor::InvSrcAlpha => GL_ONE_MINUS_SRC_ALPHA,
            BlendFactor::DstColor => GL_DST_COLOR,
            BlendFactor::InvDstColor => GL_ONE_MINUS_DST_COLOR,
            BlendFactor::DstAlpha => GL_DST_ALPHA,
            BlendFactor::InvDstAlpha => GL_ONE_MINUS_DST_ALPHA,
            BlendFactor::SrcAlphaSaturate => GL_SRC_ALPHA_SATURATE,
            BlendFactor::BlendFactor => GL_CONSTANT_COLOR,
            BlendFactor::InvBlendFactor => GL_ONE_MINUS_CONSTANT_COLOR,
        }))
    }

    fn blend_operation(&self, op: BlendOperation) -> Result<NativeEnum, GraphicsError> {
        Ok(NativeEnum(match op {
            BlendOperation::Add => GL_FUNC_ADD,
            BlendOperation::Subtract => GL_FUNC_SUBTRACT,
            BlendOperation::ReverseSubtract => GL_FUNC_REVERSE_SUBTRACT,
            BlendOperation::Min => GL_MIN,
            BlendOperation::Max => GL_MAX,
        }))
    }

    fn logic_operation(&self, op: LogicOperation) -> Result<NativeEnum, GraphicsError> {
        Ok(NativeEnum(match op {
            LogicOperation::Disabled => {
                return Err(GraphicsError::invalid(
                    "disabled logic operation has no native value",
                ));
            }
            LogicOperation::Clear => GL_CLEAR,
            LogicOperation::Set => GL_SET,
            LogicOperation::Copy => GL_COPY,
            LogicOperation::CopyInverted => GL_COPY_INVERTED,
            LogicOperation::NoOp => GL_NOOP,
            LogicOperation::Invert => GL_INVERT,
            LogicOperation::And => GL_AND,
            LogicOperation::Nand => GL_NAND,
            LogicOperation::Or => GL_OR,
            LogicOperation::Nor => GL_NOR,
            LogicOperation::Xor => GL_XOR,
            LogicOperation::Equivalent => GL_EQUIV,
            LogicOperation::AndReverse => GL_AND_REVERSE,
            LogicOperation::AndInverted => GL_AND_INVERTED,
            LogicOperation::OrReverse => GL_OR_REVERSE,
            LogicOperation::OrInverted => GL_OR_INVERTED,
        }))
    }

    fn polygon_mode(&self, mode: PolygonMode) -> Result<NativeEnum, GraphicsError> {
        Ok(NativeEnum(match mode {
            PolygonMode::Fill => GL_FILL,
            PolygonMode::Wireframe => GL_LINE,
            PolygonMode::Points => GL_POINT,
        }))
    }

    fn cull_mode(&self, mode: CullMode) -> Result<NativeEnum, GraphicsError> {
        Ok(NativeEnum(match mode {
            CullMode::Front => GL_FRONT,
            CullMode::Back => GL_BACK,
        }))
    }

    fn front_face(&self, winding: FrontFace) -> Result<NativeEnum, GraphicsError> {
        Ok(NativeEnum(match winding {
            FrontFace::Ccw => GL_CCW,
            FrontFace::Cw => GL_CW,
        }))
    }

    fn primitive_topology(
        &self,
        topology: PrimitiveTopology,
    ) -> Result<NativeEnum, GraphicsError> {
        Ok(NativeEnum(match topology {
            PrimitiveTopology::PointList => GL_POINTS,
            PrimitiveTopology::LineList => GL_LINES,
            PrimitiveTopology::LineStrip => GL_LINE_STRIP,
            PrimitiveTopology::TriangleList => GL_TRIANGLES,
            PrimitiveTopology::TriangleStrip => GL_TRIANGLE_STRIP,
            PrimitiveTopology::PatchList { .. } => GL_PATCHES,
        }))
    }

    fn polygon_offset_toggle(&self, mode: PolygonMode) -> Result<StateToggle, GraphicsError> {
        // GL keys the offset enable off the fill mode; each mode has its own
        // capability.
        Ok(match mode {
            PolygonMode::Fill => StateToggle::PolygonOffsetFill,
            PolygonMode::Wireframe => StateToggle::PolygonOffsetLine,
            PolygonMode::Points => StateToggle::PolygonOffsetPoint,
        })
    }
}

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

//! The per-backend native enum mapping table.

use crate::api::{
    BlendFactor, BlendOperation, CompareFunction, CullMode, FrontFace, LogicOperation,
    PolygonMode, PrimitiveTopology, StencilOperation,
};
use crate::error::GraphicsError;
use crate::traits::state_tracker::StateToggle;
use std::fmt::Debug;

/// A value in a backend's native enum space (a `GLenum`, a `Vk*` constant,
/// ...). Opaque to the core; only the producing backend interprets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NativeEnum(pub u32);

/// A pure, stateless lookup table from API enums into one backend's native
/// enum space.
///
/// Every method either maps the value or rejects it with
/// [`GraphicsError::InvalidArgument`]; values are never silently defaulted.
/// The pipeline-state compiler performs all lookups once, so bind-time code
/// only ever sees pre-mapped values.
pub trait EnumTable: Send + Sync + Debug {
    /// Maps a depth/stencil comparison function.
    fn compare_function(&self, func: CompareFunction) -> Result<NativeEnum, GraphicsError>;

    /// Maps a stencil operation.
    fn stencil_operation(&self, op: StencilOperation) -> Result<NativeEnum, GraphicsError>;

    /// Maps a blend factor.
    fn blend_factor(&self, factor: BlendFactor) -> Result<NativeEnum, GraphicsError>;

    /// Maps a blend operation.
    fn blend_operation(&self, op: BlendOperation) -> Result<NativeEnum, GraphicsError>;

    /// Maps a color logic operation. Never called with
    /// [`LogicOperation::Disabled`]; the compiler gates that out first.
    fn logic_operation(&self, op: LogicOperation) -> Result<NativeEnum, GraphicsError>;

    /// Maps a polygon fill mode.
    fn polygon_mode(&self, mode: PolygonMode) -> Result<NativeEnum, GraphicsError>;

    /// Maps a face culling mode.
    fn cull_mode(&self, mode: CullMode) -> Result<NativeEnum, GraphicsError>;

    /// Maps a front-face winding order.
    fn front_face(&self, winding: FrontFace) -> Result<NativeEnum, GraphicsError>;

    /// Maps a primitive topology to the backend's draw mode.
    fn primitive_topology(&self, topology: PrimitiveTopology)
        -> Result<NativeEnum, GraphicsError>;

    /// Selects the context toggle controlling polygon offset for the given
    /// fill mode. State-machine backends distinguish fill/line/point;
    /// explicit backends may collapse all modes onto one depth-bias toggle.
    fn polygon_offset_toggle(&self, mode: PolygonMode) -> Result<StateToggle, GraphicsError>;
}

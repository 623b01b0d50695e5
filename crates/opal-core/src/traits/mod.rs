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

//! The narrow collaborator interfaces the core consumes.
//!
//! Backends implement [`EnumTable`], [`StateTracker`], and
//! [`DeviceServices`]; callers supply [`TextureResource`] and
//! [`ShaderStageSet`] implementations for their externally managed
//! resources.

pub mod backend;
pub mod device;
pub mod enum_table;
pub mod resources;
pub mod state_tracker;

pub use backend::{BackendKind, GraphicsBackend};
pub use device::DeviceServices;
pub use enum_table::{EnumTable, NativeEnum};
pub use resources::{ShaderStageSet, TextureResource};
pub use state_tracker::{StateTracker, StateToggle, StencilFaceSelect};

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

//! The backend capability bundle.

use crate::limits::DeviceLimits;
use crate::traits::enum_table::EnumTable;
use std::fmt::Debug;

/// The style of native API a backend translates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendKind {
    /// A classic state-machine API (GL-style): individual state commands
    /// against a mutable context.
    StateMachine,
    /// A modern explicit-control API (Vulkan/D3D12-style): state folds into
    /// immutable pipeline objects.
    Explicit,
}

/// A graphics backend: the enum-mapping table plus the device limits the
/// compiler negotiates capabilities against.
///
/// The compiler, binder, and attachment resolver are backend-neutral; this
/// trait is everything a backend has to supply beyond its
/// [`StateTracker`](crate::traits::StateTracker) and
/// [`DeviceServices`](crate::traits::DeviceServices) implementations.
pub trait GraphicsBackend: Debug {
    /// Which API style this backend targets.
    fn kind(&self) -> BackendKind;

    /// The backend's native enum mapping table.
    fn enum_table(&self) -> &dyn EnumTable;

    /// The backend's device limits and optional capabilities.
    fn limits(&self) -> DeviceLimits;
}

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

//! The Vulkan-style backend capability bundle.

use super::table::VkEnumTable;
use opal_core::limits::DeviceLimits;
use opal_core::traits::{BackendKind, EnumTable, GraphicsBackend};

/// The explicit backend: Vulkan enum table plus negotiated device limits.
#[derive(Debug)]
pub struct VkBackend {
    table: VkEnumTable,
    limits: DeviceLimits,
}

impl VkBackend {
    /// Creates a backend with the given negotiated limits.
    pub fn new(limits: DeviceLimits) -> Self {
        Self {
            table: VkEnumTable,
            limits,
        }
    }
}

impl Default for VkBackend {
    fn default() -> Self {
        Self::new(DeviceLimits {
            // VUID-level minimum for tessellation-capable devices.
            max_patch_vertices: 32,
            conservative_raster_supported: true,
        })
    }
}

impl GraphicsBackend for VkBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Explicit
    }

    fn enum_table(&self) -> &dyn EnumTable {
        &self.table
    }

    fn limits(&self) -> DeviceLimits {
        self.limits
    }
}

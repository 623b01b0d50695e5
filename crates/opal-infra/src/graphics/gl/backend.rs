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

//! The GL backend capability bundle.

use super::table::GlEnumTable;
use opal_core::limits::DeviceLimits;
use opal_core::traits::{BackendKind, EnumTable, GraphicsBackend};

/// The state-machine backend: GL enum table plus negotiated device limits.
#[derive(Debug)]
pub struct GlBackend {
    table: GlEnumTable,
    limits: DeviceLimits,
}

impl GlBackend {
    /// Creates a backend with the given negotiated limits.
    pub fn new(limits: DeviceLimits) -> Self {
        Self {
            table: GlEnumTable,
            limits,
        }
    }
}

impl Default for GlBackend {
    fn default() -> Self {
        // Conservative rasterization stays off unless the NV extension was
        // negotiated into the limits by the caller.
        Self::new(DeviceLimits::default())
    }
}

impl GraphicsBackend for GlBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::StateMachine
    }

    fn enum_table(&self) -> &dyn EnumTable {
        &self.table
    }

    fn limits(&self) -> DeviceLimits {
        self.limits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_state_machine_kind() {
        let backend = GlBackend::default();
        assert_eq!(backend.kind(), BackendKind::StateMachine);
        assert!(!backend.limits().conservative_raster_supported);
    }
}

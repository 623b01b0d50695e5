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

//! GL device services: renderbuffer/view bookkeeping and resolve blits.

use super::commands::GlCommand;
use log::{debug, warn};
use opal_core::api::{
    SurfaceDescriptor, SurfaceId, TextureFormat, TextureId, ViewDescriptor, ViewId, ViewTarget,
};
use opal_core::error::GraphicsError;
use opal_core::traits::DeviceServices;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

#[derive(Debug)]
struct GlSurfaceEntry {
    descriptor: SurfaceDescriptor,
}

#[derive(Debug)]
#[allow(dead_code)]
struct GlViewEntry {
    target: ViewTarget,
    descriptor: ViewDescriptor,
}

/// [`DeviceServices`] over a GL-style context.
///
/// Surfaces map to renderbuffers and views to framebuffer attachment
/// points; both are tracked in id-keyed tables. Resolves are appended to a
/// command stream as framebuffer blits, executed when the context flushes.
#[derive(Debug, Default)]
pub struct GlDevice {
    surfaces: Mutex<HashMap<SurfaceId, GlSurfaceEntry>>,
    views: Mutex<HashMap<ViewId, GlViewEntry>>,
    commands: Mutex<Vec<GlCommand>>,
    next_surface_id: AtomicUsize,
    next_view_id: AtomicUsize,
}

impl GlDevice {
    /// Creates an empty device with no live objects.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live surfaces.
    pub fn surface_count(&self) -> usize {
        self.surfaces.lock().unwrap().len()
    }

    /// Number of live views.
    pub fn view_count(&self) -> usize {
        self.views.lock().unwrap().len()
    }

    /// The descriptor a surface was created with, if it is still alive.
    pub fn surface_descriptor(&self, id: SurfaceId) -> Option<SurfaceDescriptor> {
        self.surfaces
            .lock()
            .unwrap()
            .get(&id)
            .map(|entry| entry.descriptor)
    }

    /// Drains the recorded resolve-blit command stream.
    pub fn take_commands(&self) -> Vec<GlCommand> {
        std::mem::take(&mut self.commands.lock().unwrap())
    }
}

impl DeviceServices for GlDevice {
    fn create_surface(&self, descriptor: &SurfaceDescriptor) -> Result<SurfaceId, GraphicsError> {
        if descriptor.extent.is_empty() {
            return Err(GraphicsError::NativeOperationFailed {
                operation: "create_surface",
                details: "renderbuffer storage with zero extent".to_string(),
            });
        }
        let id = SurfaceId(self.next_surface_id.fetch_add(1, Ordering::Relaxed));
        self.surfaces.lock().unwrap().insert(
            id,
            GlSurfaceEntry {
                descriptor: *descriptor,
            },
        );
        debug!(
            "gl surface {:?} created ({}x{}, {:?}, {} samples)",
            id,
            descriptor.extent.width,
            descriptor.extent.height,
            descriptor.format,
            descriptor.sample_count
        );
        Ok(id)
    }

    fn create_view(
        &self,
        target: ViewTarget,
        descriptor: &ViewDescriptor,
    ) -> Result<ViewId, GraphicsError> {
        if let ViewTarget::Surface(surface) = target {
            if !self.surfaces.lock().unwrap().contains_key(&surface) {
                return Err(GraphicsError::NativeOperationFailed {
                    operation: "create_view",
                    details: format!("surface {surface:?} is not alive"),
                });
            }
        }
        let id = ViewId(self.next_view_id.fetch_add(1, Ordering::Relaxed));
        self.views.lock().unwrap().insert(
            id,
            GlViewEntry {
                target,
                descriptor: *descriptor,
            },
        );
        Ok(id)
    }

    fn issue_resolve(
        &self,
        source: SurfaceId,
        destination: TextureId,
        dest_subresource: u32,
        _format: TextureFormat,
    ) {
        self.commands.lock().unwrap().push(GlCommand::BlitResolve {
            source: source.0,
            destination: destination.0,
            subresource: dest_subresource,
        });
    }

    fn destroy_surface(&self, id: SurfaceId) {
        if self.surfaces.lock().unwrap().remove(&id).is_none() {
            warn!("destroy of unknown gl surface {id:?}");
        }
    }

    fn destroy_view(&self, id: ViewId) {
        if self.views.lock().unwrap().remove(&id).is_none() {
            warn!("destroy of unknown gl view {id:?}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opal_core::api::{SurfaceUsage, ViewDimension};
    use opal_core::math::Extent2D;

    fn surface_descriptor() -> SurfaceDescriptor {
        SurfaceDescriptor {
            extent: Extent2D::new(128, 128),
            format: TextureFormat::Rgba8Unorm,
            sample_count: 4,
            usage: SurfaceUsage::RENDER_ATTACHMENT | SurfaceUsage::RESOLVE_SRC,
        }
    }

    #[test]
    fn surfaces_get_sequential_ids() {
        let device = GlDevice::new();
        let a = device.create_surface(&surface_descriptor()).unwrap();
        let b = device.create_surface(&surface_descriptor()).unwrap();
        assert_ne!(a, b);
        assert_eq!(device.surface_count(), 2);

        device.destroy_surface(a);
        assert_eq!(device.surface_count(), 1);
        assert!(device.surface_descriptor(a).is_none());
        assert!(device.surface_descriptor(b).is_some());
    }

    #[test]
    fn zero_extent_surface_fails() {
        let device = GlDevice::new();
        let descriptor = SurfaceDescriptor {
            extent: Extent2D::new(0, 0),
            ..surface_descriptor()
        };
        assert!(matches!(
            device.create_surface(&descriptor),
            Err(GraphicsError::NativeOperationFailed { .. })
        ));
    }

    #[test]
    fn view_over_dead_surface_fails() {
        let device = GlDevice::new();
        let surface = device.create_surface(&surface_descriptor()).unwrap();
        device.destroy_surface(surface);

        let view = device.create_view(
            ViewTarget::Surface(surface),
            &ViewDescriptor {
                dimension: ViewDimension::D2Multisample,
                format: TextureFormat::Rgba8Unorm,
                mip_level: 0,
                array_layer: 0,
            },
        );
        assert!(view.is_err());
    }

    #[test]
    fn resolve_records_a_blit() {
        let device = GlDevice::new();
        let surface = device.create_surface(&surface_descriptor()).unwrap();
        device.issue_resolve(surface, TextureId(7), 3, TextureFormat::Rgba8Unorm);
        assert_eq!(
            device.take_commands(),
            vec![GlCommand::BlitResolve {
                source: surface.0,
                destination: 7,
                subresource: 3,
            }]
        );
        assert!(device.take_commands().is_empty());
    }
}

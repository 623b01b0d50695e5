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

//! Vulkan-style device services: image/image-view bookkeeping and recorded
//! resolve-image commands.

use log::{debug, warn};
use opal_core::api::{
    SurfaceDescriptor, SurfaceId, TextureFormat, TextureId, ViewDescriptor, ViewId, ViewTarget,
};
use opal_core::error::GraphicsError;
use opal_core::traits::DeviceServices;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// One recorded `vkCmdResolveImage`-style command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VkResolveCommand {
    /// The multisampled source image.
    pub source: SurfaceId,
    /// The single-sample destination image.
    pub destination: TextureId,
    /// The destination subresource index.
    pub dest_subresource: u32,
    /// The shared format of both images.
    pub format: TextureFormat,
}

#[derive(Debug)]
#[allow(dead_code)]
struct VkImageEntry {
    descriptor: SurfaceDescriptor,
}

#[derive(Debug)]
#[allow(dead_code)]
struct VkImageViewEntry {
    target: ViewTarget,
    descriptor: ViewDescriptor,
}

/// [`DeviceServices`] over an explicit API: surfaces become transient
/// images, views become image views, resolves become recorded commands
/// executed at submission.
#[derive(Debug, Default)]
pub struct VkDevice {
    images: Mutex<HashMap<SurfaceId, VkImageEntry>>,
    image_views: Mutex<HashMap<ViewId, VkImageViewEntry>>,
    resolve_commands: Mutex<Vec<VkResolveCommand>>,
    next_image_id: AtomicUsize,
    next_view_id: AtomicUsize,
}

impl VkDevice {
    /// Creates an empty device with no live objects.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live images.
    pub fn image_count(&self) -> usize {
        self.images.lock().unwrap().len()
    }

    /// Number of live image views.
    pub fn view_count(&self) -> usize {
        self.image_views.lock().unwrap().len()
    }

    /// Drains the recorded resolve commands for submission.
    pub fn take_resolve_commands(&self) -> Vec<VkResolveCommand> {
        std::mem::take(&mut self.resolve_commands.lock().unwrap())
    }
}

impl DeviceServices for VkDevice {
    fn create_surface(&self, descriptor: &SurfaceDescriptor) -> Result<SurfaceId, GraphicsError> {
        if descriptor.extent.is_empty() {
            return Err(GraphicsError::NativeOperationFailed {
                operation: "create_surface",
                details: "image creation with zero extent".to_string(),
            });
        }
        let id = SurfaceId(self.next_image_id.fetch_add(1, Ordering::Relaxed));
        self.images.lock().unwrap().insert(
            id,
            VkImageEntry {
                descriptor: *descriptor,
            },
        );
        debug!(
            "vk image {:?} created ({}x{}, {:?}, {} samples)",
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
        if let ViewTarget::Surface(image) = target {
            if !self.images.lock().unwrap().contains_key(&image) {
                return Err(GraphicsError::NativeOperationFailed {
                    operation: "create_view",
                    details: format!("image {image:?} is not alive"),
                });
            }
        }
        let id = ViewId(self.next_view_id.fetch_add(1, Ordering::Relaxed));
        self.image_views.lock().unwrap().insert(
            id,
            VkImageViewEntry {
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
        format: TextureFormat,
    ) {
        self.resolve_commands.lock().unwrap().push(VkResolveCommand {
            source,
            destination,
            dest_subresource,
            format,
        });
    }

    fn destroy_surface(&self, id: SurfaceId) {
        if self.images.lock().unwrap().remove(&id).is_none() {
            warn!("destroy of unknown vk image {id:?}");
        }
    }

    fn destroy_view(&self, id: ViewId) {
        if self.image_views.lock().unwrap().remove(&id).is_none() {
            warn!("destroy of unknown vk image view {id:?}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opal_core::api::{
        AttachmentDescriptor, RenderTargetDescriptor, SampleCount, SurfaceUsage, TextureKind,
    };
    use opal_core::math::{Extent2D, Extent3D};
    use opal_core::target::RenderTarget;
    use opal_core::traits::TextureResource;
    use std::borrow::Cow;

    #[derive(Debug)]
    struct Texture2D;

    impl TextureResource for Texture2D {
        fn id(&self) -> TextureId {
            TextureId(11)
        }
        fn kind(&self) -> TextureKind {
            TextureKind::D2
        }
        fn format(&self) -> TextureFormat {
            TextureFormat::Bgra8UnormSrgb
        }
        fn extent(&self) -> Extent3D {
            Extent3D {
                width: 256,
                height: 256,
                depth_or_array_layers: 1,
            }
        }
        fn mip_level_count(&self) -> u32 {
            1
        }
    }

    #[test]
    fn render_target_end_to_end_resolve() {
        let device = VkDevice::new();
        let texture = Texture2D;
        let descriptor = RenderTargetDescriptor {
            sample_count: SampleCount::X4,
            attachments: Cow::Owned(vec![
                AttachmentDescriptor::color(&texture),
                AttachmentDescriptor::implicit_depth_stencil(),
            ]),
            ..RenderTargetDescriptor::default()
        };

        let target = RenderTarget::new(&device, &descriptor).unwrap();
        assert_eq!(device.image_count(), 2);
        assert_eq!(device.view_count(), 2);
        assert!(target.has_stencil_attachment());

        target.resolve(&device);
        let commands = device.take_resolve_commands();
        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0].destination, TextureId(11));
        assert_eq!(commands[0].format, TextureFormat::Bgra8UnormSrgb);

        target.release(&device);
        assert_eq!(device.image_count(), 0);
        assert_eq!(device.view_count(), 0);
    }

    #[test]
    fn zero_extent_image_fails() {
        let device = VkDevice::new();
        let descriptor = SurfaceDescriptor {
            extent: Extent2D::new(16, 0),
            format: TextureFormat::Rgba8Unorm,
            sample_count: 1,
            usage: SurfaceUsage::RENDER_ATTACHMENT,
        };
        assert!(device.create_surface(&descriptor).is_err());
    }
}

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

//! Builds and validates the attachment view set of a render target.
//!
//! Attachments are processed strictly in descriptor order. The first
//! attachment (or an explicit descriptor resolution) locks the render
//! target's resolution; every later attachment must match it. When the
//! target is multisampled and an attachment's texture is not, an
//! intermediate multisample surface is created behind the texture and a
//! resolve operation is recorded; [`RenderTarget::resolve`] replays those
//! operations after each render pass, since rendering into the
//! intermediate surface leaves the destination texture stale until
//! resolved.

use crate::api::{
    AttachmentDescriptor, AttachmentKind, RenderTargetDescriptor, SampleCount, SurfaceDescriptor,
    SurfaceId, SurfaceUsage, TextureFormat, TextureId, TextureKind, ViewDescriptor, ViewDimension,
    ViewId, ViewTarget,
};
use crate::error::GraphicsError;
use crate::math::Extent2D;
use crate::traits::{DeviceServices, TextureResource};
use log::debug;

/// Format for implicit depth-only surfaces.
const IMPLICIT_DEPTH_FORMAT: TextureFormat = TextureFormat::Depth32Float;
/// Format for implicit surfaces that must carry a stencil channel.
const IMPLICIT_DEPTH_STENCIL_FORMAT: TextureFormat = TextureFormat::Depth24UnormStencil8;

/// One recorded multisample-resolve operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolveOp {
    /// The intermediate multisample surface rendered into.
    pub source: SurfaceId,
    /// The destination texture the attachment was declared against.
    pub destination: TextureId,
    /// Destination subresource index: `mip_level + array_layer * mip_count`.
    pub dest_subresource: u32,
    /// The shared pixel format of source and destination.
    pub format: TextureFormat,
}

/// A validated render target: attachment views, owned intermediate
/// surfaces, and the resolve operations a completed pass requires.
#[derive(Debug)]
pub struct RenderTarget {
    label: Option<String>,
    resolution: Extent2D,
    sample_count: SampleCount,
    color_views: Vec<ViewId>,
    depth_stencil_view: Option<ViewId>,
    depth_stencil_format: Option<TextureFormat>,
    owned_surfaces: Vec<SurfaceId>,
    resolve_ops: Vec<ResolveOp>,
}

/// Accumulates device objects during construction so a failure can unwind
/// everything created so far. Construction either fully succeeds or leaves
/// nothing alive on the device.
#[derive(Debug, Default)]
struct Builder {
    resolution: Option<Extent2D>,
    color_views: Vec<ViewId>,
    depth_stencil_view: Option<ViewId>,
    depth_stencil_format: Option<TextureFormat>,
    owned_surfaces: Vec<SurfaceId>,
    resolve_ops: Vec<ResolveOp>,
}

impl RenderTarget {
    /// Builds the render target described by `descriptor`, creating views
    /// and intermediate surfaces through `device`.
    ///
    /// Attachment-less construction is allowed when the descriptor carries
    /// an explicit resolution. Any validation or device failure destroys
    /// the partially created objects before the error is returned.
    pub fn new(
        device: &dyn DeviceServices,
        descriptor: &RenderTargetDescriptor,
    ) -> Result<Self, GraphicsError> {
        let mut builder = Builder::default();

        if let Some(resolution) = descriptor.resolution {
            builder.apply_resolution(resolution)?;
        }

        let result = descriptor
            .attachments
            .iter()
            .try_for_each(|attachment| builder.attach(device, descriptor.sample_count, attachment))
            .and_then(|()| {
                builder.resolution.ok_or_else(|| {
                    GraphicsError::invalid(
                        "render target requires at least one attachment or an explicit resolution",
                    )
                })
            });

        let resolution = match result {
            Ok(resolution) => resolution,
            Err(err) => {
                builder.unwind(device);
                return Err(err);
            }
        };

        let target = Self {
            label: descriptor.label.as_ref().map(|label| label.to_string()),
            resolution,
            sample_count: descriptor.sample_count,
            color_views: builder.color_views,
            depth_stencil_view: builder.depth_stencil_view,
            depth_stencil_format: builder.depth_stencil_format,
            owned_surfaces: builder.owned_surfaces,
            resolve_ops: builder.resolve_ops,
        };
        debug!(
            "built render target '{}' ({}x{}, {} color attachments, {} pending resolves)",
            target.label.as_deref().unwrap_or("unnamed"),
            target.resolution.width,
            target.resolution.height,
            target.color_views.len(),
            target.resolve_ops.len(),
        );
        Ok(target)
    }

    /// Issues every recorded multisample resolve, in recorded order.
    ///
    /// Must run after each render pass that drew into this target; the
    /// recorded operations persist so each pass can be resolved the same
    /// way.
    pub fn resolve(&self, device: &dyn DeviceServices) {
        for op in &self.resolve_ops {
            device.issue_resolve(op.source, op.destination, op.dest_subresource, op.format);
        }
    }

    /// Destroys all views and owned surfaces on the device.
    pub fn release(self, device: &dyn DeviceServices) {
        for view in self
            .color_views
            .iter()
            .copied()
            .chain(self.depth_stencil_view)
        {
            device.destroy_view(view);
        }
        for surface in &self.owned_surfaces {
            device.destroy_surface(*surface);
        }
    }

    /// The optional debug label.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// The shared 2D resolution of all attachments.
    pub fn resolution(&self) -> Extent2D {
        self.resolution
    }

    /// Samples per pixel of the whole target.
    pub fn sample_count(&self) -> SampleCount {
        self.sample_count
    }

    /// The ordered color attachment views.
    pub fn color_views(&self) -> &[ViewId] {
        &self.color_views
    }

    /// The depth/stencil attachment view, if any.
    pub fn depth_stencil_view(&self) -> Option<ViewId> {
        self.depth_stencil_view
    }

    /// Number of color attachments.
    pub fn color_attachment_count(&self) -> usize {
        self.color_views.len()
    }

    /// Whether a depth attachment is present.
    pub fn has_depth_attachment(&self) -> bool {
        self.depth_stencil_view.is_some()
            && self.depth_stencil_format.is_some_and(|f| f.is_depth())
    }

    /// Whether a stencil attachment is present. Checks the actual format
    /// for a stencil channel rather than just the presence of a
    /// depth/stencil view.
    pub fn has_stencil_attachment(&self) -> bool {
        self.depth_stencil_view.is_some()
            && self.depth_stencil_format.is_some_and(|f| f.has_stencil())
    }

    /// The recorded resolve operations, in issue order.
    pub fn pending_resolves(&self) -> &[ResolveOp] {
        &self.resolve_ops
    }
}

impl Builder {
    /// Locks or re-validates the render target resolution against one
    /// attachment's effective extent.
    fn apply_resolution(&mut self, extent: Extent2D) -> Result<Extent2D, GraphicsError> {
        if extent.is_empty() {
            return Err(GraphicsError::invalid(
                "render target resolution must be non-zero",
            ));
        }
        match self.resolution {
            Some(resolution) if resolution != extent => Err(GraphicsError::InvalidArgument {
                message: format!(
                    "attachment extent {}x{} does not match render target resolution {}x{}",
                    extent.width, extent.height, resolution.width, resolution.height
                ),
            }),
            Some(resolution) => Ok(resolution),
            None => {
                self.resolution = Some(extent);
                Ok(extent)
            }
        }
    }

    fn attach(
        &mut self,
        device: &dyn DeviceServices,
        sample_count: SampleCount,
        attachment: &AttachmentDescriptor,
    ) -> Result<(), GraphicsError> {
        match attachment.texture {
            Some(texture) => self.attach_texture(device, sample_count, attachment, texture),
            None => self.attach_implicit(device, sample_count, attachment.kind),
        }
    }

    fn attach_texture(
        &mut self,
        device: &dyn DeviceServices,
        sample_count: SampleCount,
        attachment: &AttachmentDescriptor,
        texture: &dyn TextureResource,
    ) -> Result<(), GraphicsError> {
        let format = texture.format();
        match attachment.kind {
            AttachmentKind::Color => {}
            AttachmentKind::Depth | AttachmentKind::Stencil | AttachmentKind::DepthStencil => {
                if !format.is_depth() {
                    return Err(GraphicsError::invalid(
                        "depth/stencil attachment requires a depth-capable texture format",
                    ));
                }
                if matches!(
                    attachment.kind,
                    AttachmentKind::Stencil | AttachmentKind::DepthStencil
                ) && !format.has_stencil()
                {
                    return Err(GraphicsError::invalid(
                        "stencil attachment requires a stencil-capable texture format",
                    ));
                }
            }
        }

        if attachment.mip_level >= texture.mip_level_count() {
            return Err(GraphicsError::InvalidArgument {
                message: format!(
                    "attachment mip level {} is out of range for a texture with {} mip levels",
                    attachment.mip_level,
                    texture.mip_level_count()
                ),
            });
        }

        let effective = texture.extent().to_2d().mip_level(attachment.mip_level);
        let resolution = self.apply_resolution(effective)?;

        // An intermediate surface is needed when the target is
        // multisampled but the source texture is not.
        let needs_intermediate =
            sample_count.is_multisampled() && !texture.kind().is_multisampled();

        let view = if needs_intermediate {
            let dimension = match texture.kind() {
                TextureKind::D2 => ViewDimension::D2Multisample,
                TextureKind::D2Array | TextureKind::Cube | TextureKind::CubeArray => {
                    ViewDimension::D2MultisampleArray
                }
                kind => {
                    return Err(GraphicsError::InvalidArgument {
                        message: format!(
                            "texture kind {kind:?} cannot back a multisampled attachment"
                        ),
                    });
                }
            };

            // Attaching a non-zero mip means the base-level multisample
            // surface must be proportionally larger than the resolution.
            let surface = device.create_surface(&SurfaceDescriptor {
                extent: Extent2D::new(
                    resolution.width << attachment.mip_level,
                    resolution.height << attachment.mip_level,
                ),
                format,
                sample_count: sample_count.count(),
                usage: SurfaceUsage::RENDER_ATTACHMENT | SurfaceUsage::RESOLVE_SRC,
            })?;
            self.owned_surfaces.push(surface);

            self.resolve_ops.push(ResolveOp {
                source: surface,
                destination: texture.id(),
                dest_subresource: attachment.mip_level
                    + attachment.array_layer * texture.mip_level_count(),
                format,
            });

            device.create_view(
                ViewTarget::Surface(surface),
                &ViewDescriptor {
                    dimension,
                    format,
                    mip_level: 0,
                    array_layer: attachment.array_layer,
                },
            )?
        } else {
            let dimension = match texture.kind() {
                TextureKind::D1 => ViewDimension::D1,
                TextureKind::D2 => ViewDimension::D2,
                TextureKind::D3 => ViewDimension::D3,
                TextureKind::D1Array => ViewDimension::D1Array,
                // Cube faces attach as layers of a 2D array view.
                TextureKind::D2Array | TextureKind::Cube | TextureKind::CubeArray => {
                    ViewDimension::D2Array
                }
                TextureKind::D2Multisample => ViewDimension::D2Multisample,
                TextureKind::D2MultisampleArray => ViewDimension::D2MultisampleArray,
            };
            device.create_view(
                ViewTarget::Texture(texture.id()),
                &ViewDescriptor {
                    dimension,
                    format,
                    mip_level: attachment.mip_level,
                    array_layer: attachment.array_layer,
                },
            )?
        };

        match attachment.kind {
            AttachmentKind::Color => self.color_views.push(view),
            _ => {
                self.depth_stencil_view = Some(view);
                self.depth_stencil_format = Some(format);
            }
        }
        Ok(())
    }

    fn attach_implicit(
        &mut self,
        device: &dyn DeviceServices,
        sample_count: SampleCount,
        kind: AttachmentKind,
    ) -> Result<(), GraphicsError> {
        let format = match kind {
            AttachmentKind::Color => {
                return Err(GraphicsError::invalid("color attachment requires a texture"));
            }
            AttachmentKind::Depth => IMPLICIT_DEPTH_FORMAT,
            AttachmentKind::Stencil | AttachmentKind::DepthStencil => {
                IMPLICIT_DEPTH_STENCIL_FORMAT
            }
        };

        let resolution = self.resolution.ok_or_else(|| {
            GraphicsError::invalid(
                "implicit depth/stencil attachment requires an established resolution",
            )
        })?;

        let surface = device.create_surface(&SurfaceDescriptor {
            extent: resolution,
            format,
            sample_count: sample_count.count(),
            usage: SurfaceUsage::DEPTH_STENCIL_ATTACHMENT,
        })?;
        self.owned_surfaces.push(surface);

        let dimension = if sample_count.is_multisampled() {
            ViewDimension::D2Multisample
        } else {
            ViewDimension::D2
        };
        let view = device.create_view(
            ViewTarget::Surface(surface),
            &ViewDescriptor {
                dimension,
                format,
                mip_level: 0,
                array_layer: 0,
            },
        )?;

        self.depth_stencil_view = Some(view);
        self.depth_stencil_format = Some(format);
        Ok(())
    }

    /// Destroys everything created so far after a mid-build failure.
    fn unwind(self, device: &dyn DeviceServices) {
        for view in self
            .color_views
            .iter()
            .copied()
            .chain(self.depth_stencil_view)
        {
            device.destroy_view(view);
        }
        for surface in &self.owned_surfaces {
            device.destroy_surface(*surface);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Extent3D;
    use std::borrow::Cow;
    use std::cell::RefCell;

    #[derive(Debug, Default)]
    struct DeviceLog {
        surfaces: Vec<SurfaceDescriptor>,
        views: Vec<(ViewTarget, ViewDescriptor)>,
        resolves: Vec<(SurfaceId, TextureId, u32, TextureFormat)>,
        destroyed_surfaces: Vec<SurfaceId>,
        destroyed_views: Vec<ViewId>,
    }

    /// Hands out sequential ids and records every call; can be told to
    /// fail the nth surface creation.
    #[derive(Debug, Default)]
    struct MockDevice {
        log: RefCell<DeviceLog>,
        fail_surface_at: Option<usize>,
    }

    impl MockDevice {
        fn failing_surface_at(index: usize) -> Self {
            Self {
                fail_surface_at: Some(index),
                ..Self::default()
            }
        }
    }

    impl DeviceServices for MockDevice {
        fn create_surface(
            &self,
            descriptor: &SurfaceDescriptor,
        ) -> Result<SurfaceId, GraphicsError> {
            let mut log = self.log.borrow_mut();
            if self.fail_surface_at == Some(log.surfaces.len()) {
                return Err(GraphicsError::NativeOperationFailed {
                    operation: "create_surface",
                    details: "out of device memory".to_string(),
                });
            }
            log.surfaces.push(*descriptor);
            Ok(SurfaceId(log.surfaces.len() - 1))
        }

        fn create_view(
            &self,
            target: ViewTarget,
            descriptor: &ViewDescriptor,
        ) -> Result<ViewId, GraphicsError> {
            let mut log = self.log.borrow_mut();
            log.views.push((target, *descriptor));
            Ok(ViewId(log.views.len() - 1))
        }

        fn issue_resolve(
            &self,
            source: SurfaceId,
            destination: TextureId,
            dest_subresource: u32,
            format: TextureFormat,
        ) {
            self.log
                .borrow_mut()
                .resolves
                .push((source, destination, dest_subresource, format));
        }

        fn destroy_surface(&self, id: SurfaceId) {
            self.log.borrow_mut().destroyed_surfaces.push(id);
        }

        fn destroy_view(&self, id: ViewId) {
            self.log.borrow_mut().destroyed_views.push(id);
        }
    }

    #[derive(Debug)]
    struct MockTexture {
        id: TextureId,
        kind: TextureKind,
        format: TextureFormat,
        extent: Extent3D,
        mip_levels: u32,
    }

    impl MockTexture {
        fn color_2d(width: u32, height: u32) -> Self {
            Self {
                id: TextureId(1),
                kind: TextureKind::D2,
                format: TextureFormat::Rgba8Unorm,
                extent: Extent3D {
                    width,
                    height,
                    depth_or_array_layers: 1,
                },
                mip_levels: 1,
            }
        }
    }

    impl TextureResource for MockTexture {
        fn id(&self) -> TextureId {
            self.id
        }
        fn kind(&self) -> TextureKind {
            self.kind
        }
        fn format(&self) -> TextureFormat {
            self.format
        }
        fn extent(&self) -> Extent3D {
            self.extent
        }
        fn mip_level_count(&self) -> u32 {
            self.mip_levels
        }
    }

    fn descriptor<'a>(
        attachments: Vec<AttachmentDescriptor<'a>>,
    ) -> RenderTargetDescriptor<'a> {
        RenderTargetDescriptor {
            attachments: Cow::Owned(attachments),
            ..RenderTargetDescriptor::default()
        }
    }

    #[test]
    fn color_attachment_requires_texture() {
        let device = MockDevice::default();
        let desc = descriptor(vec![AttachmentDescriptor {
            kind: AttachmentKind::Color,
            texture: None,
            mip_level: 0,
            array_layer: 0,
        }]);
        let err = RenderTarget::new(&device, &desc).unwrap_err();
        assert_eq!(
            err,
            GraphicsError::invalid("color attachment requires a texture")
        );
    }

    #[test]
    fn first_attachment_locks_resolution() {
        let device = MockDevice::default();
        let first = MockTexture::color_2d(640, 480);
        let mismatched = MockTexture::color_2d(320, 240);
        let desc = descriptor(vec![
            AttachmentDescriptor::color(&first),
            AttachmentDescriptor::color(&mismatched),
        ]);
        let err = RenderTarget::new(&device, &desc).unwrap_err();
        assert!(matches!(err, GraphicsError::InvalidArgument { .. }));

        let matching = MockTexture::color_2d(640, 480);
        let desc = descriptor(vec![
            AttachmentDescriptor::color(&first),
            AttachmentDescriptor::color(&matching),
        ]);
        let target = RenderTarget::new(&device, &desc).unwrap();
        assert_eq!(target.resolution(), Extent2D::new(640, 480));
        assert_eq!(target.color_attachment_count(), 2);
    }

    #[test]
    fn explicit_resolution_must_match_attachments() {
        let device = MockDevice::default();
        let texture = MockTexture::color_2d(640, 480);
        let desc = RenderTargetDescriptor {
            resolution: Some(Extent2D::new(800, 600)),
            attachments: Cow::Owned(vec![AttachmentDescriptor::color(&texture)]),
            ..RenderTargetDescriptor::default()
        };
        let err = RenderTarget::new(&device, &desc).unwrap_err();
        assert!(matches!(err, GraphicsError::InvalidArgument { .. }));
    }

    #[test]
    fn attachment_less_target_needs_explicit_resolution() {
        let device = MockDevice::default();
        let err = RenderTarget::new(&device, &RenderTargetDescriptor::default()).unwrap_err();
        assert!(matches!(err, GraphicsError::InvalidArgument { .. }));

        let desc = RenderTargetDescriptor {
            resolution: Some(Extent2D::new(256, 256)),
            ..RenderTargetDescriptor::default()
        };
        let target = RenderTarget::new(&device, &desc).unwrap();
        assert_eq!(target.resolution(), Extent2D::new(256, 256));
        assert_eq!(target.color_attachment_count(), 0);
        assert!(!target.has_depth_attachment());
    }

    #[test]
    fn zero_resolution_is_rejected() {
        let device = MockDevice::default();
        let desc = RenderTargetDescriptor {
            resolution: Some(Extent2D::new(0, 128)),
            ..RenderTargetDescriptor::default()
        };
        let err = RenderTarget::new(&device, &desc).unwrap_err();
        assert!(matches!(err, GraphicsError::InvalidArgument { .. }));
    }

    #[test]
    fn multisample_target_builds_one_intermediate_per_plain_texture() {
        let device = MockDevice::default();
        let texture = MockTexture::color_2d(512, 512);
        let desc = RenderTargetDescriptor {
            sample_count: SampleCount::X4,
            attachments: Cow::Owned(vec![AttachmentDescriptor::color(&texture)]),
            ..RenderTargetDescriptor::default()
        };
        let target = RenderTarget::new(&device, &desc).unwrap();

        {
            let log = device.log.borrow();
            assert_eq!(log.surfaces.len(), 1);
            let surface = &log.surfaces[0];
            assert_eq!(surface.extent, Extent2D::new(512, 512));
            assert_eq!(surface.format, TextureFormat::Rgba8Unorm);
            assert_eq!(surface.sample_count, 4);
            assert!(surface.usage.contains(SurfaceUsage::RESOLVE_SRC));

            // The view is created against the intermediate, not the texture.
            assert_eq!(log.views.len(), 1);
            let (view_target, view) = log.views[0];
            assert_eq!(view_target, ViewTarget::Surface(SurfaceId(0)));
            assert_eq!(view.dimension, ViewDimension::D2Multisample);
        }

        assert_eq!(target.pending_resolves().len(), 1);
        target.resolve(&device);
        let log = device.log.borrow();
        assert_eq!(
            log.resolves,
            vec![(SurfaceId(0), TextureId(1), 0, TextureFormat::Rgba8Unorm)]
        );
    }

    #[test]
    fn resolve_subresource_accounts_for_mip_and_layer() {
        let device = MockDevice::default();
        let texture = MockTexture {
            id: TextureId(9),
            kind: TextureKind::D2Array,
            format: TextureFormat::Rgba8Unorm,
            extent: Extent3D {
                width: 1024,
                height: 1024,
                depth_or_array_layers: 4,
            },
            mip_levels: 3,
        };
        let desc = RenderTargetDescriptor {
            sample_count: SampleCount::X4,
            attachments: Cow::Owned(vec![AttachmentDescriptor {
                kind: AttachmentKind::Color,
                texture: Some(&texture),
                mip_level: 1,
                array_layer: 2,
            }]),
            ..RenderTargetDescriptor::default()
        };
        let target = RenderTarget::new(&device, &desc).unwrap();

        // Attaching mip 1 halves the resolution; the base-level
        // intermediate surface is shifted back up to base size.
        assert_eq!(target.resolution(), Extent2D::new(512, 512));
        let log = device.log.borrow();
        assert_eq!(log.surfaces[0].extent, Extent2D::new(1024, 1024));

        let op = target.pending_resolves()[0];
        assert_eq!(op.dest_subresource, 1 + 2 * 3);
        assert_eq!(op.destination, TextureId(9));
    }

    #[test]
    fn attachment_mip_level_must_exist() {
        let device = MockDevice::default();
        // One mip level; anything above level 0 does not exist.
        let texture = MockTexture::color_2d(256, 256);
        let desc = RenderTargetDescriptor {
            sample_count: SampleCount::X4,
            attachments: Cow::Owned(vec![AttachmentDescriptor {
                kind: AttachmentKind::Color,
                texture: Some(&texture),
                mip_level: 5,
                array_layer: 0,
            }]),
            ..RenderTargetDescriptor::default()
        };
        let err = RenderTarget::new(&device, &desc).unwrap_err();
        assert!(matches!(err, GraphicsError::InvalidArgument { .. }));

        // A level past the u32 shift width must be rejected before any
        // extent math runs.
        let desc = descriptor(vec![AttachmentDescriptor {
            kind: AttachmentKind::Color,
            texture: Some(&texture),
            mip_level: 40,
            array_layer: 0,
        }]);
        let err = RenderTarget::new(&device, &desc).unwrap_err();
        assert!(matches!(err, GraphicsError::InvalidArgument { .. }));

        // Nothing was created on the device for either attempt.
        let log = device.log.borrow();
        assert!(log.surfaces.is_empty());
        assert!(log.views.is_empty());
    }

    #[test]
    fn multisample_texture_attaches_directly() {
        let device = MockDevice::default();
        let texture = MockTexture {
            kind: TextureKind::D2Multisample,
            ..MockTexture::color_2d(512, 512)
        };
        let desc = RenderTargetDescriptor {
            sample_count: SampleCount::X4,
            attachments: Cow::Owned(vec![AttachmentDescriptor::color(&texture)]),
            ..RenderTargetDescriptor::default()
        };
        let target = RenderTarget::new(&device, &desc).unwrap();

        assert!(target.pending_resolves().is_empty());
        let log = device.log.borrow();
        assert!(log.surfaces.is_empty());
        assert_eq!(log.views[0].0, ViewTarget::Texture(TextureId(1)));
        assert_eq!(log.views[0].1.dimension, ViewDimension::D2Multisample);
    }

    #[test]
    fn volume_texture_cannot_back_multisampled_attachment() {
        let device = MockDevice::default();
        let texture = MockTexture {
            kind: TextureKind::D3,
            ..MockTexture::color_2d(64, 64)
        };
        let desc = RenderTargetDescriptor {
            sample_count: SampleCount::X8,
            attachments: Cow::Owned(vec![AttachmentDescriptor::color(&texture)]),
            ..RenderTargetDescriptor::default()
        };
        let err = RenderTarget::new(&device, &desc).unwrap_err();
        assert!(matches!(err, GraphicsError::InvalidArgument { .. }));
    }

    #[test]
    fn implicit_depth_has_no_stencil() {
        let device = MockDevice::default();
        let color = MockTexture::color_2d(320, 200);
        let desc = descriptor(vec![
            AttachmentDescriptor::color(&color),
            AttachmentDescriptor::implicit_depth(),
        ]);
        let target = RenderTarget::new(&device, &desc).unwrap();
        assert!(target.has_depth_attachment());
        assert!(!target.has_stencil_attachment());

        let log = device.log.borrow();
        assert_eq!(log.surfaces[0].format, TextureFormat::Depth32Float);
        assert_eq!(log.surfaces[0].extent, Extent2D::new(320, 200));
        assert!(log.surfaces[0]
            .usage
            .contains(SurfaceUsage::DEPTH_STENCIL_ATTACHMENT));
    }

    #[test]
    fn implicit_depth_stencil_reports_stencil() {
        let device = MockDevice::default();
        let color = MockTexture::color_2d(320, 200);
        let desc = descriptor(vec![
            AttachmentDescriptor::color(&color),
            AttachmentDescriptor::implicit_depth_stencil(),
        ]);
        let target = RenderTarget::new(&device, &desc).unwrap();
        assert!(target.has_depth_attachment());
        assert!(target.has_stencil_attachment());
        assert_eq!(
            device.log.borrow().surfaces[0].format,
            TextureFormat::Depth24UnormStencil8
        );
    }

    #[test]
    fn explicit_depth_texture_without_stencil_channel() {
        let device = MockDevice::default();
        let depth = MockTexture {
            format: TextureFormat::Depth32Float,
            ..MockTexture::color_2d(128, 128)
        };
        let desc = descriptor(vec![AttachmentDescriptor {
            kind: AttachmentKind::Depth,
            texture: Some(&depth),
            mip_level: 0,
            array_layer: 0,
        }]);
        let target = RenderTarget::new(&device, &desc).unwrap();
        assert!(target.has_depth_attachment());
        assert!(!target.has_stencil_attachment());

        // Same texture declared as DepthStencil lacks the stencil channel.
        let desc = descriptor(vec![AttachmentDescriptor {
            kind: AttachmentKind::DepthStencil,
            texture: Some(&depth),
            mip_level: 0,
            array_layer: 0,
        }]);
        let err = RenderTarget::new(&device, &desc).unwrap_err();
        assert!(matches!(err, GraphicsError::InvalidArgument { .. }));
    }

    #[test]
    fn failed_surface_creation_unwinds_earlier_objects() {
        // First surface (the multisample intermediate) succeeds, the
        // implicit depth surface fails; the intermediate and its view must
        // both be destroyed.
        let device = MockDevice::failing_surface_at(1);
        let color = MockTexture::color_2d(256, 256);
        let desc = RenderTargetDescriptor {
            sample_count: SampleCount::X4,
            attachments: Cow::Owned(vec![
                AttachmentDescriptor::color(&color),
                AttachmentDescriptor::implicit_depth(),
            ]),
            ..RenderTargetDescriptor::default()
        };
        let err = RenderTarget::new(&device, &desc).unwrap_err();
        assert!(matches!(err, GraphicsError::NativeOperationFailed { .. }));

        let log = device.log.borrow();
        assert_eq!(log.destroyed_surfaces, vec![SurfaceId(0)]);
        assert_eq!(log.destroyed_views, vec![ViewId(0)]);
    }

    #[test]
    fn release_destroys_views_then_surfaces() {
        let device = MockDevice::default();
        let color = MockTexture::color_2d(64, 64);
        let desc = descriptor(vec![
            AttachmentDescriptor::color(&color),
            AttachmentDescriptor::implicit_depth_stencil(),
        ]);
        let target = RenderTarget::new(&device, &desc).unwrap();
        target.release(&device);

        let log = device.log.borrow();
        assert_eq!(log.destroyed_views, vec![ViewId(0), ViewId(1)]);
        assert_eq!(log.destroyed_surfaces, vec![SurfaceId(0)]);
    }

    #[test]
    fn resolve_replays_on_every_invocation() {
        let device = MockDevice::default();
        let texture = MockTexture::color_2d(128, 128);
        let desc = RenderTargetDescriptor {
            sample_count: SampleCount::X2,
            attachments: Cow::Owned(vec![AttachmentDescriptor::color(&texture)]),
            ..RenderTargetDescriptor::default()
        };
        let target = RenderTarget::new(&device, &desc).unwrap();
        target.resolve(&device);
        target.resolve(&device);
        assert_eq!(device.log.borrow().resolves.len(), 2);
    }
}

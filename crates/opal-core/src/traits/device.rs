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

//! The device-services seam the attachment resolver calls through.

use crate::api::{
    SurfaceDescriptor, SurfaceId, TextureFormat, TextureId, ViewDescriptor, ViewId, ViewTarget,
};
use crate::error::GraphicsError;
use std::fmt::Debug;

/// The narrow device interface the render-target attachment resolver
/// consumes.
///
/// Device and context lifetime live outside this layer; implementations
/// wrap whatever native object creation their backend requires. Creation
/// failures surface as [`GraphicsError::NativeOperationFailed`] and abort
/// the operation that triggered them.
pub trait DeviceServices: Debug {
    /// Creates a surface (renderbuffer/image) owned by a render target.
    fn create_surface(&self, descriptor: &SurfaceDescriptor) -> Result<SurfaceId, GraphicsError>;

    /// Creates an attachment view over a texture or surface.
    fn create_view(
        &self,
        target: ViewTarget,
        descriptor: &ViewDescriptor,
    ) -> Result<ViewId, GraphicsError>;

    /// Issues one native multisample-resolve from `source` into the given
    /// subresource of `destination`.
    fn issue_resolve(
        &self,
        source: SurfaceId,
        destination: TextureId,
        dest_subresource: u32,
        format: TextureFormat,
    );

    /// Releases a render-target-owned surface.
    fn destroy_surface(&self, id: SurfaceId);

    /// Releases an attachment view.
    fn destroy_view(&self, id: ViewId);
}

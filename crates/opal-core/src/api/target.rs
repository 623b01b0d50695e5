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

//! Render-target and attachment descriptors.

use super::enums::SampleCount;
use crate::math::Extent2D;
use crate::traits::TextureResource;
use std::borrow::Cow;

/// The role an attachment plays in a render target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttachmentKind {
    /// A color attachment. Always requires a texture.
    Color,
    /// A depth attachment. Without a texture, an implicit depth surface is
    /// created.
    Depth,
    /// A stencil attachment. Without a texture, an implicit depth/stencil
    /// surface is created.
    Stencil,
    /// A combined depth/stencil attachment. Without a texture, an implicit
    /// depth/stencil surface is created.
    DepthStencil,
}

/// One attachment slot of a render target.
#[derive(Debug, Clone, Copy)]
pub struct AttachmentDescriptor<'a> {
    /// The role of this attachment.
    pub kind: AttachmentKind,
    /// The backing texture. Mandatory for [`AttachmentKind::Color`];
    /// optional for depth/stencil kinds.
    pub texture: Option<&'a dyn TextureResource>,
    /// The mip level of the texture to attach.
    pub mip_level: u32,
    /// The array layer (or cube face) of the texture to attach.
    pub array_layer: u32,
}

impl<'a> AttachmentDescriptor<'a> {
    /// A color attachment over the base subresource of `texture`.
    pub fn color(texture: &'a dyn TextureResource) -> Self {
        Self {
            kind: AttachmentKind::Color,
            texture: Some(texture),
            mip_level: 0,
            array_layer: 0,
        }
    }

    /// A depth attachment backed by an implicit, render-target-owned
    /// surface.
    pub fn implicit_depth() -> Self {
        Self {
            kind: AttachmentKind::Depth,
            texture: None,
            mip_level: 0,
            array_layer: 0,
        }
    }

    /// A combined depth/stencil attachment backed by an implicit surface.
    pub fn implicit_depth_stencil() -> Self {
        Self {
            kind: AttachmentKind::DepthStencil,
            texture: None,
            mip_level: 0,
            array_layer: 0,
        }
    }
}

/// A complete descriptor for a render target.
#[derive(Debug, Clone)]
pub struct RenderTargetDescriptor<'a> {
    /// An optional debug label.
    pub label: Option<Cow<'a, str>>,
    /// Explicit resolution for attachment-less render targets. When
    /// attachments are present, the first attachment establishes the
    /// resolution and this field must match it if set.
    pub resolution: Option<Extent2D>,
    /// Samples per pixel for the whole render target.
    pub sample_count: SampleCount,
    /// The ordered list of attachments.
    pub attachments: Cow<'a, [AttachmentDescriptor<'a>]>,
}

impl Default for RenderTargetDescriptor<'_> {
    fn default() -> Self {
        Self {
            label: None,
            resolution: None,
            sample_count: SampleCount::X1,
            attachments: Cow::Borrowed(&[]),
        }
    }
}

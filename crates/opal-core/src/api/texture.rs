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

//! Texture, surface, and view data model shared between the attachment
//! resolver and the device-services seam.

use crate::math::Extent2D;
use bitflags::bitflags;

/// The declared type of a texture resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureKind {
    /// A one-dimensional texture.
    D1,
    /// A two-dimensional texture.
    D2,
    /// A three-dimensional (volumetric) texture.
    D3,
    /// An array of 1D textures.
    D1Array,
    /// An array of 2D textures.
    D2Array,
    /// A cubemap (six 2D faces).
    Cube,
    /// An array of cubemaps.
    CubeArray,
    /// A multisampled 2D texture.
    D2Multisample,
    /// An array of multisampled 2D textures.
    D2MultisampleArray,
}

impl TextureKind {
    /// Returns `true` for the multisampled texture kinds.
    pub const fn is_multisampled(&self) -> bool {
        matches!(
            self,
            TextureKind::D2Multisample | TextureKind::D2MultisampleArray
        )
    }
}

/// The dimensionality of a texture or surface view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewDimension {
    /// A view of a 1D texture.
    D1,
    /// A view of a 2D texture.
    D2,
    /// A view of a 3D texture.
    D3,
    /// A view of a 1D texture array.
    D1Array,
    /// A view of a 2D texture array (also used for cube faces).
    D2Array,
    /// A view of a multisampled 2D texture.
    D2Multisample,
    /// A view of a multisampled 2D texture array.
    D2MultisampleArray,
}

/// The memory format of pixels in a texture, surface, or view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureFormat {
    /// One 8-bit unsigned normalized component.
    R8Unorm,
    /// Two 8-bit unsigned normalized components.
    Rg8Unorm,
    /// Four 8-bit unsigned normalized components (RGBA).
    Rgba8Unorm,
    /// Four 8-bit unsigned normalized components (RGBA) in sRGB space.
    Rgba8UnormSrgb,
    /// Four 8-bit unsigned normalized components (BGRA) in sRGB space.
    Bgra8UnormSrgb,
    /// Four 16-bit float components.
    Rgba16Float,
    /// One 32-bit float component.
    R32Float,
    /// Four 32-bit float components.
    Rgba32Float,
    /// A 16-bit unsigned normalized depth format.
    Depth16Unorm,
    /// A 24-bit unsigned normalized depth format with an 8-bit stencil
    /// component.
    Depth24UnormStencil8,
    /// A 32-bit float depth format.
    Depth32Float,
    /// A 32-bit float depth format with an 8-bit stencil component.
    Depth32FloatStencil8,
}

impl TextureFormat {
    /// Returns `true` if the format carries a depth channel.
    pub const fn is_depth(&self) -> bool {
        matches!(
            self,
            TextureFormat::Depth16Unorm
                | TextureFormat::Depth24UnormStencil8
                | TextureFormat::Depth32Float
                | TextureFormat::Depth32FloatStencil8
        )
    }

    /// Returns `true` if the format carries a stencil channel.
    pub const fn has_stencil(&self) -> bool {
        matches!(
            self,
            TextureFormat::Depth24UnormStencil8 | TextureFormat::Depth32FloatStencil8
        )
    }
}

bitflags! {
    /// Allowed usages of a device-created surface.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SurfaceUsage: u32 {
        /// The surface can be bound as a color attachment.
        const RENDER_ATTACHMENT = 1 << 0;
        /// The surface can be bound as a depth/stencil attachment.
        const DEPTH_STENCIL_ATTACHMENT = 1 << 1;
        /// The surface can be the source of a multisample resolve.
        const RESOLVE_SRC = 1 << 2;
    }
}

/// A descriptor for a device-created intermediate surface (multisample
/// color storage or an implicit depth/stencil buffer).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceDescriptor {
    /// The 2D extent of the surface.
    pub extent: Extent2D,
    /// The pixel format of the surface.
    pub format: TextureFormat,
    /// Samples per pixel.
    pub sample_count: u32,
    /// How the surface will be used.
    pub usage: SurfaceUsage,
}

/// Selects what a view is created against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewTarget {
    /// A caller-owned texture resource.
    Texture(TextureId),
    /// A render-target-owned surface.
    Surface(SurfaceId),
}

/// A descriptor for an attachment view over a texture or surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewDescriptor {
    /// The dimensionality of the view.
    pub dimension: ViewDimension,
    /// The pixel format of the view.
    pub format: TextureFormat,
    /// The mip level the view selects.
    pub mip_level: u32,
    /// The array layer the view selects.
    pub array_layer: u32,
}

/// An opaque handle to a caller-owned texture resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub usize);

/// An opaque handle to a device-created surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceId(pub usize);

/// An opaque handle to an attachment view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewId(pub usize);

/// An opaque handle to a backend-native object (e.g. a linked shader
/// program).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NativeHandle(pub u64);

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

//! Provides structs for representing extents (sizes) in 2D and 3D.
//!
//! These types use integer (`u32`) components, making them suitable for
//! pixel-based coordinates and sizes of textures and attachments.

/// A two-dimensional extent, typically representing width and height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Extent2D {
    /// The width component of the extent.
    pub width: u32,
    /// The height component of the extent.
    pub height: u32,
}

impl Extent2D {
    /// Creates a new extent from a width and a height.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns `true` if either dimension is zero.
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns this extent reduced to the given mip level (each dimension
    /// shifted right, clamped to at least one texel).
    pub const fn mip_level(&self, level: u32) -> Self {
        Self {
            width: max_u32(self.width >> level, 1),
            height: max_u32(self.height >> level, 1),
        }
    }
}

const fn max_u32(a: u32, b: u32) -> u32 {
    if a > b {
        a
    } else {
        b
    }
}

/// A three-dimensional extent, representing width, height, and depth.
///
/// This is used for 3D textures, texture arrays, or cubemaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Extent3D {
    /// The width component of the extent.
    pub width: u32,
    /// The height component of the extent.
    pub height: u32,
    /// The depth or number of array layers.
    pub depth_or_array_layers: u32,
}

impl Extent3D {
    /// Returns the 2D footprint of this extent, dropping depth/layers.
    pub const fn to_2d(&self) -> Extent2D {
        Extent2D {
            width: self.width,
            height: self.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mip_level_shifts_and_clamps() {
        let base = Extent2D::new(256, 64);
        assert_eq!(base.mip_level(0), Extent2D::new(256, 64));
        assert_eq!(base.mip_level(3), Extent2D::new(32, 8));
        // Small dimensions clamp to one texel instead of reaching zero.
        assert_eq!(base.mip_level(8), Extent2D::new(1, 1));
    }

    #[test]
    fn empty_extent() {
        assert!(Extent2D::new(0, 128).is_empty());
        assert!(!Extent2D::new(1, 1).is_empty());
    }
}

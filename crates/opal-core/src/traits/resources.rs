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

//! Abstractions over externally managed resources the core only inspects.

use crate::api::{NativeHandle, TextureFormat, TextureId, TextureKind};
use crate::math::Extent3D;
use std::fmt::Debug;

/// A caller-owned texture the attachment resolver can attach views to.
///
/// Allocation and lifetime are external concerns; the resolver only reads
/// the declared metadata and never mutates the resource.
pub trait TextureResource: Debug {
    /// The device handle of this texture.
    fn id(&self) -> TextureId;

    /// The declared texture type.
    fn kind(&self) -> TextureKind;

    /// The pixel format of the texture.
    fn format(&self) -> TextureFormat;

    /// The base-level extent of the texture.
    fn extent(&self) -> Extent3D;

    /// The number of mip levels the texture was created with.
    fn mip_level_count(&self) -> u32;
}

/// A compiled-and-linked shader stage set.
pub trait ShaderStageSet: Debug {
    /// The backend handle the binder passes to the state tracker.
    fn native_handle(&self) -> NativeHandle;

    /// Whether a fragment/pixel stage is present. Pipelines without one
    /// rasterize nothing, which the binder turns into rasterizer discard.
    fn has_fragment_stage(&self) -> bool;
}

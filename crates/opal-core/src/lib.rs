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

//! # opal-core
//!
//! Backend-agnostic graphics hardware-abstraction contracts: descriptor
//! types, the pipeline-state compiler and binder, and the render-target
//! attachment resolver.
//!
//! This crate defines the 'what' of pipeline-state and render-target
//! translation; concrete backends in `opal-infra` supply the 'how' (native
//! enum tables, context state caches, and device services).

#![warn(missing_docs)]

pub mod api;
pub mod error;
pub mod limits;
pub mod math;
pub mod state;
pub mod target;
pub mod traits;

pub use error::GraphicsError;
pub use limits::DeviceLimits;
pub use state::CompiledPipelineState;
pub use target::RenderTarget;

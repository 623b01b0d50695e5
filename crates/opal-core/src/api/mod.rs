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

//! Backend-agnostic descriptor data model.
//!
//! Callers build these pure-data descriptors; the compiler and attachment
//! resolver validate them and translate them into backend-ready objects.
//! Descriptors are owned by the caller and may be discarded once the
//! compiled object exists.

pub mod enums;
pub mod pipeline;
pub mod target;
pub mod texture;
pub mod viewport;

pub use enums::*;
pub use pipeline::*;
pub use target::*;
pub use texture::*;
pub use viewport::*;

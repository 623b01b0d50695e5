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

//! # opal-infra
//!
//! Concrete backend implementations of the `opal-core` contracts: a
//! state-machine (GL-style) backend that deduplicates context transitions
//! into a native command stream, and an explicit (Vulkan-style) backend
//! that folds bound state into versioned pipeline snapshots.

#![warn(missing_docs)]

pub mod graphics;

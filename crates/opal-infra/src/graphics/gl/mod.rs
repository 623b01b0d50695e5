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

//! The state-machine (GL-style) backend: native enum table, a
//! redundancy-eliminating state cache emitting a command stream, and
//! command-recording device services.

pub mod backend;
pub mod commands;
pub mod device;
pub mod state_cache;
pub mod table;

pub use backend::GlBackend;
pub use commands::GlCommand;
pub use device::GlDevice;
pub use state_cache::GlStateCache;
pub use table::GlEnumTable;

// Copyright 2025 the Sable Engine authors
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

//! # Sable SDK
//!
//! The host-facing layer of the engine: implement [`Game`], hand it to an
//! [`Engine`], and the engine wires up the plugin manager, resolves a
//! renderer backend, and drives the scene lifecycle every frame.

#![warn(missing_docs)]

mod engine;
mod game;

pub use engine::{Engine, EngineError};
pub use game::{EngineContext, Game};

/// Commonly used items for game crates.
pub mod prelude {
    pub use crate::{Engine, EngineContext, EngineError, Game};
    pub use sable_core::platform::PlatformState;
    pub use sable_core::plugin::{PluginManager, PluginRegistry};
    pub use sable_core::renderer::{ClearColor, Renderer};
}

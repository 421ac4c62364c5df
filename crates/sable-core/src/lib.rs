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

//! # Sable Core
//!
//! Foundational crate containing the plugin contract, the renderer
//! capability trait with its lifecycle state machine, and the core value
//! types shared by every backend.
//!
//! Concrete backends (a graphics-API renderer, the headless renderer used
//! for testing) live in their own crates and depend on the contracts
//! defined here; the host discovers and drives them through the
//! [`plugin::PluginManager`].

#![warn(missing_docs)]

pub mod platform;
pub mod plugin;
pub mod renderer;

pub use platform::PlatformState;
pub use plugin::{Plugin, PluginError, PluginFactory, PluginManager, PluginRegistry, PluginType};
pub use renderer::{ClearColor, RenderError, Renderer, RendererLifecycle, RendererState};

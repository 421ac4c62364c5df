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

//! The `Game` trait implemented by applications running on the engine.

use sable_core::platform::PlatformState;
use sable_core::plugin::PluginManager;

/// What the engine lends a game during its callbacks.
pub struct EngineContext<'a> {
    /// The plugin manager; games register backends and pick the active
    /// renderer here during [`Game::on_initialize`].
    pub plugins: &'a mut PluginManager,
    /// The platform state handed to renderers at initialization.
    pub platform_state: &'a PlatformState,
}

/// A game running on top of the engine.
///
/// The engine calls the hooks in a fixed order: `on_initialize` once, then
/// `on_update` and `on_render` every frame.
pub trait Game {
    /// The title for the game's application window.
    fn window_title(&self) -> &str {
        "Sable Game"
    }

    /// Called once before the first frame. Register renderer backends and
    /// select the active one here. Return `false` to abort the run.
    fn on_initialize(&mut self, ctx: &mut EngineContext<'_>) -> bool;

    /// Called every frame with the elapsed time, in seconds, since the
    /// previous update.
    fn on_update(&mut self, delta_time: f32);

    /// Called every frame between `begin_scene` and `end_scene`.
    ///
    /// `interpolation` is the progress of the current update frame in
    /// `[0, 1]`.
    fn on_render(&mut self, interpolation: f32);
}

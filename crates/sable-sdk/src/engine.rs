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

//! The engine driver: owns the plugin manager and runs the frame loop.

use crate::game::{EngineContext, Game};
use sable_core::platform::PlatformState;
use sable_core::plugin::{PluginError, PluginManager, SharedPlugin};
use sable_core::renderer::{ClearColor, RenderError, Renderer};
use std::fmt;
use std::sync::PoisonError;

/// Seconds handed to `on_update` per fixed step.
const FIXED_UPDATE_SECONDS: f32 = 1.0 / 60.0;

/// An error that stopped an engine run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The game's `on_initialize` returned `false`.
    GameInitializationFailed,
    /// The game selected no active renderer during initialization.
    NoActiveRenderer,
    /// A plugin registry or factory operation failed.
    Plugin(PluginError),
    /// A renderer lifecycle operation failed.
    Render(RenderError),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::GameInitializationFailed => {
                write!(f, "Game initialization reported failure")
            }
            EngineError::NoActiveRenderer => {
                write!(f, "No active renderer was selected during initialization")
            }
            EngineError::Plugin(err) => write!(f, "{err}"),
            EngineError::Render(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::Plugin(err) => Some(err),
            EngineError::Render(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PluginError> for EngineError {
    fn from(err: PluginError) -> Self {
        EngineError::Plugin(err)
    }
}

impl From<RenderError> for EngineError {
    fn from(err: RenderError) -> Self {
        EngineError::Render(err)
    }
}

/// Owns the plugin manager and platform state and drives a [`Game`].
///
/// Everything runs on the calling thread: registration during
/// `on_initialize`, then one `update`/`begin_scene`/`render`/`end_scene`
/// cycle per frame, then renderer shutdown.
#[derive(Default)]
pub struct Engine {
    plugins: PluginManager,
    platform_state: PlatformState,
}

// One owning thread; a poisoned lock only means an earlier panic, keep the
// inner value.
fn lock<T: ?Sized>(handle: &SharedPlugin<T>) -> std::sync::MutexGuard<'_, T> {
    handle.lock().unwrap_or_else(PoisonError::into_inner)
}

impl Engine {
    /// Creates an engine with an empty plugin manager and no platform
    /// handle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine carrying the given platform state.
    #[must_use]
    pub fn with_platform_state(platform_state: PlatformState) -> Self {
        Self {
            plugins: PluginManager::new(),
            platform_state,
        }
    }

    /// The engine's plugin manager.
    pub fn plugins_mut(&mut self) -> &mut PluginManager {
        &mut self.plugins
    }

    /// Runs `game` for `frames` frames, then shuts the renderer down.
    ///
    /// The game must select an active renderer in its `on_initialize`
    /// callback, typically by registering a backend and calling
    /// [`PluginManager::change_active_renderer`].
    pub fn run(&mut self, game: &mut dyn Game, frames: u32) -> Result<(), EngineError> {
        log::info!("Initializing engine for '{}'", game.window_title());

        let mut ctx = EngineContext {
            plugins: &mut self.plugins,
            platform_state: &self.platform_state,
        };
        if !game.on_initialize(&mut ctx) {
            log::error!("Game failed to initialize; aborting run");
            return Err(EngineError::GameInitializationFailed);
        }

        let renderer = self
            .plugins
            .active_renderer()
            .ok_or(EngineError::NoActiveRenderer)?;

        log::info!("Entering frame loop ({frames} frames)");
        for _ in 0..frames {
            game.on_update(FIXED_UPDATE_SECONDS);

            lock(&renderer).begin_scene(ClearColor::default())?;
            game.on_render(1.0);
            lock(&renderer).end_scene()?;
        }

        self.plugins.shutdown_active_renderer()?;
        log::info!("Engine run finished");
        Ok(())
    }
}

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

//! The renderer lifecycle state machine.
//!
//! Every backend embeds a [`RendererLifecycle`] and exposes it through
//! [`Renderer::lifecycle`](crate::renderer::Renderer::lifecycle); the
//! provided methods of the `Renderer` trait drive the transitions so the
//! ordering contract is enforced in one place, for every backend.
//!
//! The legal protocol is:
//!
//! ```text
//! Uninitialized -> Initialized -> (SceneOpen <-> SceneClosed)* -> ShutDown
//! ```
//!
//! Checks and commits are separate steps (`ensure_can_*` / `mark_*`) so a
//! failing backend hook leaves the state untouched and the host may retry.

use crate::renderer::error::RenderError;
use std::fmt;

/// The position of a renderer within its lifecycle protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RendererState {
    /// Constructed, `initialize` not yet called. Screen size reads (0, 0).
    Uninitialized,
    /// `initialize` succeeded; no scene has been opened yet.
    Initialized,
    /// A scene is being drawn; only `end_scene` may advance the protocol.
    SceneOpen,
    /// The last scene was presented; ready for the next `begin_scene`.
    SceneClosed,
    /// `shutdown` was called. Terminal: no further calls are permitted.
    ShutDown,
}

impl fmt::Display for RendererState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RendererState::Uninitialized => "Uninitialized",
            RendererState::Initialized => "Initialized",
            RendererState::SceneOpen => "SceneOpen",
            RendererState::SceneClosed => "SceneClosed",
            RendererState::ShutDown => "ShutDown",
        };
        write!(f, "{name}")
    }
}

/// Lifecycle and screen-size record embedded by every renderer backend.
#[derive(Debug, Clone)]
pub struct RendererLifecycle {
    state: RendererState,
    screen_width: u32,
    screen_height: u32,
}

impl Default for RendererLifecycle {
    fn default() -> Self {
        Self::new()
    }
}

impl RendererLifecycle {
    /// Creates a lifecycle in `Uninitialized` with a (0, 0) screen size.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: RendererState::Uninitialized,
            screen_width: 0,
            screen_height: 0,
        }
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> RendererState {
        self.state
    }

    /// The last committed screen width, or 0 if never resized.
    #[must_use]
    pub fn screen_width(&self) -> u32 {
        self.screen_width
    }

    /// The last committed screen height, or 0 if never resized.
    #[must_use]
    pub fn screen_height(&self) -> u32 {
        self.screen_height
    }

    fn invalid(&self, operation: &'static str) -> RenderError {
        RenderError::InvalidState {
            operation,
            state: self.state,
        }
    }

    /// Checks that `initialize` is legal (only from `Uninitialized`).
    pub fn ensure_can_initialize(&self) -> Result<(), RenderError> {
        match self.state {
            RendererState::Uninitialized => Ok(()),
            _ => Err(self.invalid("initialize")),
        }
    }

    /// Commits the `Uninitialized -> Initialized` transition.
    pub fn mark_initialized(&mut self) {
        self.state = RendererState::Initialized;
    }

    /// Checks that `begin_scene` is legal (no scene may already be open).
    pub fn ensure_can_begin_scene(&self) -> Result<(), RenderError> {
        match self.state {
            RendererState::Initialized | RendererState::SceneClosed => Ok(()),
            _ => Err(self.invalid("begin_scene")),
        }
    }

    /// Commits the transition into `SceneOpen`.
    pub fn mark_scene_open(&mut self) {
        self.state = RendererState::SceneOpen;
    }

    /// Checks that `end_scene` is legal (a scene must be open).
    pub fn ensure_can_end_scene(&self) -> Result<(), RenderError> {
        match self.state {
            RendererState::SceneOpen => Ok(()),
            _ => Err(self.invalid("end_scene")),
        }
    }

    /// Commits the transition into `SceneClosed`.
    pub fn mark_scene_closed(&mut self) {
        self.state = RendererState::SceneClosed;
    }

    /// Checks that the renderer has been initialized and not shut down,
    /// as required by `set_screen_size`.
    pub fn ensure_initialized(&self, operation: &'static str) -> Result<(), RenderError> {
        match self.state {
            RendererState::Initialized
            | RendererState::SceneOpen
            | RendererState::SceneClosed => Ok(()),
            _ => Err(self.invalid(operation)),
        }
    }

    /// Records a new screen size. Called only after the backend's resize
    /// hook has observed the previous size.
    pub fn commit_screen_size(&mut self, width: u32, height: u32) {
        self.screen_width = width;
        self.screen_height = height;
    }

    /// Transitions into the terminal `ShutDown` state.
    ///
    /// Legal from every live state; shutting down twice is a protocol
    /// violation.
    pub fn mark_shut_down(&mut self) -> Result<(), RenderError> {
        if self.state == RendererState::ShutDown {
            return Err(self.invalid("shutdown"));
        }
        self.state = RendererState::ShutDown;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_uninitialized_with_zero_size() {
        let lifecycle = RendererLifecycle::new();
        assert_eq!(lifecycle.state(), RendererState::Uninitialized);
        assert_eq!(lifecycle.screen_width(), 0);
        assert_eq!(lifecycle.screen_height(), 0);
    }

    #[test]
    fn test_happy_path_transitions() {
        let mut lifecycle = RendererLifecycle::new();
        lifecycle.ensure_can_initialize().unwrap();
        lifecycle.mark_initialized();
        assert_eq!(lifecycle.state(), RendererState::Initialized);

        lifecycle.ensure_can_begin_scene().unwrap();
        lifecycle.mark_scene_open();
        lifecycle.ensure_can_end_scene().unwrap();
        lifecycle.mark_scene_closed();
        assert_eq!(lifecycle.state(), RendererState::SceneClosed);

        lifecycle.mark_shut_down().unwrap();
        assert_eq!(lifecycle.state(), RendererState::ShutDown);
    }

    #[test]
    fn test_begin_scene_before_initialize_is_rejected() {
        let lifecycle = RendererLifecycle::new();
        let err = lifecycle.ensure_can_begin_scene().unwrap_err();
        assert_eq!(
            err,
            RenderError::InvalidState {
                operation: "begin_scene",
                state: RendererState::Uninitialized,
            }
        );
    }

    #[test]
    fn test_double_begin_scene_is_rejected() {
        let mut lifecycle = RendererLifecycle::new();
        lifecycle.mark_initialized();
        lifecycle.mark_scene_open();
        assert!(lifecycle.ensure_can_begin_scene().is_err());
    }

    #[test]
    fn test_end_scene_without_open_scene_is_rejected() {
        let mut lifecycle = RendererLifecycle::new();
        lifecycle.mark_initialized();
        assert!(lifecycle.ensure_can_end_scene().is_err());
    }

    #[test]
    fn test_initialize_twice_is_rejected() {
        let mut lifecycle = RendererLifecycle::new();
        lifecycle.mark_initialized();
        assert!(lifecycle.ensure_can_initialize().is_err());
    }

    #[test]
    fn test_shutdown_is_terminal() {
        let mut lifecycle = RendererLifecycle::new();
        lifecycle.mark_initialized();
        lifecycle.mark_shut_down().unwrap();

        assert!(lifecycle.ensure_can_begin_scene().is_err());
        assert!(lifecycle.ensure_initialized("set_screen_size").is_err());
        assert!(lifecycle.mark_shut_down().is_err());
    }

    #[test]
    fn test_shutdown_legal_mid_scene() {
        let mut lifecycle = RendererLifecycle::new();
        lifecycle.mark_initialized();
        lifecycle.mark_scene_open();
        assert!(lifecycle.mark_shut_down().is_ok());
    }

    #[test]
    fn test_scene_round_trips() {
        let mut lifecycle = RendererLifecycle::new();
        lifecycle.mark_initialized();
        for _ in 0..10 {
            lifecycle.ensure_can_begin_scene().unwrap();
            lifecycle.mark_scene_open();
            lifecycle.ensure_can_end_scene().unwrap();
            lifecycle.mark_scene_closed();
        }
        assert_eq!(lifecycle.state(), RendererState::SceneClosed);
    }

    #[test]
    fn test_commit_screen_size() {
        let mut lifecycle = RendererLifecycle::new();
        lifecycle.mark_initialized();
        lifecycle.commit_screen_size(1920, 1080);
        assert_eq!(lifecycle.screen_width(), 1920);
        assert_eq!(lifecycle.screen_height(), 1080);
    }
}

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

//! The renderer capability contract.
//!
//! [`Renderer`] is the trait every graphics backend plugin implements. The
//! scene protocol (`initialize`, `begin_scene`/`end_scene`,
//! `set_screen_size`) is carried by provided methods that validate every
//! transition against the embedded [`RendererLifecycle`] before delegating
//! to the backend's `on_*` hooks, so a backend cannot accidentally relax
//! the ordering contract.

pub mod color;
pub mod error;
pub mod lifecycle;

pub use color::ClearColor;
pub use error::RenderError;
pub use lifecycle::{RendererLifecycle, RendererState};

use crate::platform::PlatformState;
use crate::plugin::Plugin;

/// A plugin that can draw scenes to a screen.
///
/// Backends implement the `on_*` hooks plus the two lifecycle accessors and
/// get the validated protocol for free. The state machine is:
///
/// ```text
/// Uninitialized -> Initialized -> (SceneOpen <-> SceneClosed)* -> ShutDown
/// ```
///
/// A protocol violation (opening a scene twice, resizing before
/// initialization, any call after shutdown) yields
/// [`RenderError::InvalidState`] and leaves the renderer untouched.
///
/// All methods must be called from the single thread that owns the
/// renderer; nothing here blocks or suspends.
pub trait Renderer: Plugin {
    /// The embedded lifecycle record.
    fn lifecycle(&self) -> &RendererLifecycle;

    /// Mutable access to the embedded lifecycle record.
    fn lifecycle_mut(&mut self) -> &mut RendererLifecycle;

    /// Backend hook: bring up API-specific resources. `platform_state`
    /// carries the OS window/surface handle, where the backend needs one.
    fn on_initialize(&mut self, platform_state: &PlatformState) -> Result<(), RenderError>;

    /// Backend hook: clear the backing buffer and start recording a scene.
    fn on_begin_scene(&mut self, clear_color: ClearColor) -> Result<(), RenderError>;

    /// Backend hook: present/finalize the current scene.
    fn on_end_scene(&mut self) -> Result<(), RenderError>;

    /// Downcast to `Any` for backend-specific access.
    fn as_any(&self) -> &dyn std::any::Any;

    /// Backend hook: react to a screen-size change.
    ///
    /// `width`/`height` are the **new** size. The accessors
    /// [`screen_width`](Renderer::screen_width) and
    /// [`screen_height`](Renderer::screen_height) still report the
    /// **previous** size for the duration of this call; the stored size is
    /// committed only after this hook returns. Backends rely on this to
    /// compare old against new.
    fn on_resize(&mut self, width: u32, height: u32);

    /// Initializes the backend. Must be called exactly once, before any
    /// scene or resize call.
    fn initialize(&mut self, platform_state: &PlatformState) -> Result<(), RenderError> {
        self.lifecycle().ensure_can_initialize()?;
        self.on_initialize(platform_state)?;
        self.lifecycle_mut().mark_initialized();
        log::debug!("Renderer '{}' initialized", self.name());
        Ok(())
    }

    /// Begins a new scene, clearing the backing buffer to `clear_color`.
    fn begin_scene(&mut self, clear_color: ClearColor) -> Result<(), RenderError> {
        self.lifecycle().ensure_can_begin_scene()?;
        self.on_begin_scene(clear_color)?;
        self.lifecycle_mut().mark_scene_open();
        Ok(())
    }

    /// Finishes the current scene and presents the frame.
    fn end_scene(&mut self) -> Result<(), RenderError> {
        self.lifecycle().ensure_can_end_scene()?;
        self.on_end_scene()?;
        self.lifecycle_mut().mark_scene_closed();
        Ok(())
    }

    /// Sets the screen size the renderer draws to.
    ///
    /// Invokes [`on_resize`](Renderer::on_resize) with the new size while
    /// the accessors still report the old one, then commits the new size.
    fn set_screen_size(&mut self, width: u32, height: u32) -> Result<(), RenderError> {
        self.lifecycle().ensure_initialized("set_screen_size")?;
        self.on_resize(width, height);
        self.lifecycle_mut().commit_screen_size(width, height);
        Ok(())
    }

    /// The last width passed to `set_screen_size`, or 0 if never called.
    fn screen_width(&self) -> u32 {
        self.lifecycle().screen_width()
    }

    /// The last height passed to `set_screen_size`, or 0 if never called.
    fn screen_height(&self) -> u32 {
        self.lifecycle().screen_height()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugin::{PluginError, PluginType};

    /// Minimal backend that records what its hooks observe.
    #[derive(Default)]
    struct RecordingRenderer {
        lifecycle: RendererLifecycle,
        // (old size from accessors, new size from parameters)
        resize_observations: Vec<((u32, u32), (u32, u32))>,
        scenes_begun: u32,
        scenes_ended: u32,
        fail_initialize: bool,
    }

    impl Plugin for RecordingRenderer {
        fn plugin_type(&self) -> PluginType {
            PluginType::Renderer
        }

        fn name(&self) -> &str {
            "recording"
        }

        fn shutdown(&mut self) -> Result<(), PluginError> {
            self.lifecycle.mark_shut_down()?;
            Ok(())
        }
    }

    impl Renderer for RecordingRenderer {
        fn lifecycle(&self) -> &RendererLifecycle {
            &self.lifecycle
        }

        fn lifecycle_mut(&mut self) -> &mut RendererLifecycle {
            &mut self.lifecycle
        }

        fn on_initialize(&mut self, _platform_state: &PlatformState) -> Result<(), RenderError> {
            if self.fail_initialize {
                return Err(RenderError::InitializationFailed("forced".to_string()));
            }
            Ok(())
        }

        fn on_begin_scene(&mut self, _clear_color: ClearColor) -> Result<(), RenderError> {
            self.scenes_begun += 1;
            Ok(())
        }

        fn on_end_scene(&mut self) -> Result<(), RenderError> {
            self.scenes_ended += 1;
            Ok(())
        }

        fn on_resize(&mut self, width: u32, height: u32) {
            let old = (self.screen_width(), self.screen_height());
            self.resize_observations.push((old, (width, height)));
        }

        fn as_any(&self) -> &dyn std::any::Any {
            self
        }
    }

    fn initialized() -> RecordingRenderer {
        let mut renderer = RecordingRenderer::default();
        renderer.initialize(&PlatformState::empty()).unwrap();
        renderer
    }

    #[test]
    fn test_fresh_renderer_reports_zero_size() {
        let renderer = RecordingRenderer::default();
        assert_eq!(renderer.screen_width(), 0);
        assert_eq!(renderer.screen_height(), 0);
    }

    #[test]
    fn test_resize_hook_observes_old_size_and_new_parameters() {
        let mut renderer = initialized();
        renderer.set_screen_size(800, 600).unwrap();
        renderer.set_screen_size(1920, 1080).unwrap();

        assert_eq!(
            renderer.resize_observations,
            vec![((0, 0), (800, 600)), ((800, 600), (1920, 1080))]
        );
        assert_eq!(renderer.screen_width(), 1920);
        assert_eq!(renderer.screen_height(), 1080);
    }

    #[test]
    fn test_resize_before_initialize_is_rejected() {
        let mut renderer = RecordingRenderer::default();
        let err = renderer.set_screen_size(640, 480).unwrap_err();
        assert_eq!(
            err,
            RenderError::InvalidState {
                operation: "set_screen_size",
                state: RendererState::Uninitialized,
            }
        );
        assert!(renderer.resize_observations.is_empty());
    }

    #[test]
    fn test_double_begin_scene_is_rejected() {
        let mut renderer = initialized();
        renderer.begin_scene(ClearColor::default()).unwrap();
        let err = renderer.begin_scene(ClearColor::default()).unwrap_err();
        assert_eq!(
            err,
            RenderError::InvalidState {
                operation: "begin_scene",
                state: RendererState::SceneOpen,
            }
        );
        // The hook must not have run for the rejected call.
        assert_eq!(renderer.scenes_begun, 1);
    }

    #[test]
    fn test_end_scene_before_begin_is_rejected() {
        let mut renderer = initialized();
        assert!(renderer.end_scene().is_err());
        assert_eq!(renderer.scenes_ended, 0);
    }

    #[test]
    fn test_scene_round_trips_return_to_ready() {
        let mut renderer = initialized();
        for _ in 0..5 {
            renderer.begin_scene(ClearColor::BLACK).unwrap();
            renderer.end_scene().unwrap();
        }
        assert_eq!(renderer.lifecycle().state(), RendererState::SceneClosed);
        assert!(renderer.begin_scene(ClearColor::BLACK).is_ok());
    }

    #[test]
    fn test_initialize_twice_is_rejected() {
        let mut renderer = initialized();
        assert!(renderer.initialize(&PlatformState::empty()).is_err());
    }

    #[test]
    fn test_failed_initialize_leaves_renderer_retryable() {
        let mut renderer = RecordingRenderer {
            fail_initialize: true,
            ..Default::default()
        };
        assert!(renderer.initialize(&PlatformState::empty()).is_err());
        assert_eq!(renderer.lifecycle().state(), RendererState::Uninitialized);

        renderer.fail_initialize = false;
        assert!(renderer.initialize(&PlatformState::empty()).is_ok());
    }

    #[test]
    fn test_no_calls_after_shutdown() {
        let mut renderer = initialized();
        renderer.shutdown().unwrap();
        assert!(renderer.begin_scene(ClearColor::default()).is_err());
        assert!(renderer.set_screen_size(1, 1).is_err());
        assert!(renderer.shutdown().is_err());
    }

    #[test]
    fn test_full_lifecycle_scenario() {
        let mut renderer = RecordingRenderer::default();
        renderer.initialize(&PlatformState::empty()).unwrap();
        renderer.set_screen_size(1920, 1080).unwrap();
        renderer.begin_scene(ClearColor::new(0.0, 0.0, 0.0, 1.0)).unwrap();
        assert_eq!(renderer.screen_width(), 1920);
        assert_eq!(renderer.screen_height(), 1080);
        renderer.end_scene().unwrap();
        assert_eq!(renderer.screen_width(), 1920);
        assert_eq!(renderer.screen_height(), 1080);
        renderer.shutdown().unwrap();
        assert_eq!(renderer.lifecycle().state(), RendererState::ShutDown);
    }
}

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

//! The headless renderer and its factory.

use sable_core::platform::PlatformState;
use sable_core::plugin::{
    Plugin, PluginError, PluginFactory, PluginRegistry, PluginType, SharedPlugin,
};
use sable_core::renderer::{ClearColor, RenderError, Renderer, RendererLifecycle};
use std::sync::{Arc, Mutex};

/// The name the headless backend registers itself under.
pub const BACKEND_NAME: &str = "headless";

/// A renderer that draws nothing.
///
/// It honours the full lifecycle protocol and records what it was asked to
/// do, so hosts and tests can drive the real scene loop without a GPU.
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    lifecycle: RendererLifecycle,
    last_clear_color: Option<ClearColor>,
    frames_begun: u64,
    frames_ended: u64,
}

impl HeadlessRenderer {
    /// Creates an uninitialized headless renderer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The clear color of the most recently begun scene.
    #[must_use]
    pub fn last_clear_color(&self) -> Option<ClearColor> {
        self.last_clear_color
    }

    /// How many scenes have been begun.
    #[must_use]
    pub fn frames_begun(&self) -> u64 {
        self.frames_begun
    }

    /// How many scenes have been ended.
    #[must_use]
    pub fn frames_ended(&self) -> u64 {
        self.frames_ended
    }
}

impl Plugin for HeadlessRenderer {
    fn plugin_type(&self) -> PluginType {
        PluginType::Renderer
    }

    fn name(&self) -> &str {
        BACKEND_NAME
    }

    fn shutdown(&mut self) -> Result<(), PluginError> {
        self.lifecycle.mark_shut_down()?;
        log::info!(
            "Headless renderer shut down after {} frames",
            self.frames_ended
        );
        Ok(())
    }
}

impl Renderer for HeadlessRenderer {
    fn lifecycle(&self) -> &RendererLifecycle {
        &self.lifecycle
    }

    fn lifecycle_mut(&mut self) -> &mut RendererLifecycle {
        &mut self.lifecycle
    }

    fn on_initialize(&mut self, platform_state: &PlatformState) -> Result<(), RenderError> {
        // No window needed; note whether one was supplied anyway.
        log::info!(
            "Headless renderer initialized (platform handle attached: {})",
            platform_state.has_handle()
        );
        Ok(())
    }

    fn on_begin_scene(&mut self, clear_color: ClearColor) -> Result<(), RenderError> {
        self.last_clear_color = Some(clear_color);
        self.frames_begun += 1;
        log::trace!("Begin scene {} clearing to {:?}", self.frames_begun, clear_color);
        Ok(())
    }

    fn on_end_scene(&mut self) -> Result<(), RenderError> {
        self.frames_ended += 1;
        log::trace!("End scene {}", self.frames_ended);
        Ok(())
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn on_resize(&mut self, width: u32, height: u32) {
        log::debug!(
            "Headless renderer resizing {}x{} -> {}x{}",
            self.screen_width(),
            self.screen_height(),
            width,
            height
        );
    }
}

/// Factory producing [`HeadlessRenderer`] instances.
#[derive(Debug, Default)]
pub struct HeadlessRendererFactory;

impl PluginFactory<dyn Renderer> for HeadlessRendererFactory {
    fn create(&self) -> Result<SharedPlugin<dyn Renderer>, PluginError> {
        Ok(Arc::new(Mutex::new(HeadlessRenderer::new())))
    }
}

/// Registers the headless backend under [`BACKEND_NAME`].
pub fn register(registry: &mut dyn PluginRegistry) -> Result<(), PluginError> {
    registry.register_renderer(BACKEND_NAME, Arc::new(HeadlessRendererFactory))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sable_core::plugin::PluginManager;
    use sable_core::renderer::RendererState;

    #[test]
    fn test_fresh_renderer_has_zero_screen_size() {
        let renderer = HeadlessRenderer::new();
        assert_eq!(renderer.screen_width(), 0);
        assert_eq!(renderer.screen_height(), 0);
        assert_eq!(renderer.lifecycle().state(), RendererState::Uninitialized);
    }

    #[test]
    fn test_end_to_end_scenario() {
        let mut renderer = HeadlessRenderer::new();
        renderer.initialize(&PlatformState::empty()).unwrap();
        renderer.set_screen_size(1920, 1080).unwrap();
        renderer
            .begin_scene(ClearColor::new(0.0, 0.0, 0.0, 1.0))
            .unwrap();
        assert_eq!(renderer.screen_width(), 1920);
        assert_eq!(renderer.screen_height(), 1080);
        renderer.end_scene().unwrap();
        renderer.shutdown().unwrap();

        assert_eq!(renderer.last_clear_color(), Some(ClearColor::BLACK));
        assert_eq!(renderer.frames_begun(), 1);
        assert_eq!(renderer.frames_ended(), 1);
        assert_eq!(renderer.lifecycle().state(), RendererState::ShutDown);
    }

    #[test]
    fn test_double_begin_scene_fails() {
        let mut renderer = HeadlessRenderer::new();
        renderer.initialize(&PlatformState::empty()).unwrap();
        renderer.begin_scene(ClearColor::default()).unwrap();

        let err = renderer.begin_scene(ClearColor::default()).unwrap_err();
        assert!(matches!(err, RenderError::InvalidState { .. }));
        assert_eq!(renderer.frames_begun(), 1);
    }

    #[test]
    fn test_end_scene_before_begin_fails() {
        let mut renderer = HeadlessRenderer::new();
        renderer.initialize(&PlatformState::empty()).unwrap();
        assert!(renderer.end_scene().is_err());
        assert_eq!(renderer.frames_ended(), 0);
    }

    #[test]
    fn test_repeated_scene_cycles_stay_ready() {
        let mut renderer = HeadlessRenderer::new();
        renderer.initialize(&PlatformState::empty()).unwrap();
        for _ in 0..25 {
            renderer.begin_scene(ClearColor::default()).unwrap();
            renderer.end_scene().unwrap();
        }
        assert_eq!(renderer.lifecycle().state(), RendererState::SceneClosed);
        assert_eq!(renderer.frames_ended(), 25);
    }

    #[test]
    fn test_factory_creates_fresh_instances() {
        let factory = HeadlessRendererFactory;
        let a = factory.create().unwrap();
        let b = factory.create().unwrap();
        assert!(!Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_register_with_manager_and_activate() {
        let mut manager = PluginManager::new();
        register(&mut manager).unwrap();
        assert_eq!(manager.registered_renderers(), vec![BACKEND_NAME]);

        manager
            .change_active_renderer(BACKEND_NAME, &PlatformState::empty())
            .unwrap();
        let active = manager.active_renderer().unwrap();
        let mut renderer = active.lock().unwrap();
        assert_eq!(renderer.plugin_type(), PluginType::Renderer);
        renderer.begin_scene(ClearColor::default()).unwrap();
        renderer.end_scene().unwrap();
    }
}

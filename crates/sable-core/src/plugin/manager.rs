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

//! The plugin registry and manager.
//!
//! [`PluginRegistry`] is the narrow registration surface a backend crate
//! sees; [`PluginManager`] is the concrete directory the host owns,
//! resolving factories by name and driving the active renderer's
//! creation, initialization and replacement.
//!
//! Registration happens during the host's setup phase, on one thread; the
//! registry itself carries no locking.

use crate::platform::PlatformState;
use crate::plugin::factory::{PluginFactory, SharedPlugin};
use crate::plugin::{Plugin, PluginError};
use crate::renderer::Renderer;
use std::sync::{Arc, PoisonError};

/// The registration operations exposed to backend crates.
///
/// Kept separate from [`PluginManager`] so a backend's `register` entry
/// point depends only on this trait, not on the concrete manager.
pub trait PluginRegistry {
    /// Associates `name` with a factory for the renderer capability.
    ///
    /// Duplicate names are rejected with [`PluginError::DuplicateName`];
    /// the first registration wins. An empty name is rejected with
    /// [`PluginError::EmptyName`].
    fn register_renderer(
        &mut self,
        name: &str,
        factory: Arc<dyn PluginFactory<dyn Renderer>>,
    ) -> Result<(), PluginError>;
}

/// Central directory of renderer factories, keyed by name.
///
/// The host registers every backend it supports, then resolves one by name
/// with [`change_active_renderer`](PluginManager::change_active_renderer)
/// and drives it through its scene lifecycle.
#[derive(Default)]
pub struct PluginManager {
    // Small N and registration-ordered iteration; a Vec of pairs beats a
    // map here.
    renderers: Vec<(String, Arc<dyn PluginFactory<dyn Renderer>>)>,
    active_renderer: Option<SharedPlugin<dyn Renderer>>,
}

// One owning thread; a poisoned lock only means a previous caller panicked
// mid-call, and the inner value is still the best we have.
fn lock<T: ?Sized>(handle: &SharedPlugin<T>) -> std::sync::MutexGuard<'_, T> {
    handle.lock().unwrap_or_else(PoisonError::into_inner)
}

impl PluginManager {
    /// Creates a manager with no registered factories.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The names of all registered renderer factories, in registration
    /// order.
    #[must_use]
    pub fn registered_renderers(&self) -> Vec<String> {
        self.renderers.iter().map(|(name, _)| name.clone()).collect()
    }

    /// Creates the renderer registered under `name` and makes it the
    /// active one.
    ///
    /// The previous active renderer, if any, is shut down before the new
    /// instance is initialized with `platform_state`. On failure the
    /// registry is left consistent: an unknown name or a failed `create`
    /// keeps the previous renderer active, while a failed `initialize`
    /// leaves no renderer active.
    pub fn change_active_renderer(
        &mut self,
        name: &str,
        platform_state: &PlatformState,
    ) -> Result<(), PluginError> {
        let factory = self
            .renderers
            .iter()
            .find(|(registered, _)| registered == name)
            .map(|(_, factory)| Arc::clone(factory))
            .ok_or_else(|| {
                log::error!("PluginManager cannot create unrecognised renderer '{name}'");
                PluginError::UnknownPlugin(name.to_string())
            })?;

        let new_renderer = factory.create()?;

        self.shutdown_active_renderer()?;
        lock(&new_renderer).initialize(platform_state)?;

        log::info!("Active renderer changed to '{name}'");
        self.active_renderer = Some(new_renderer);
        Ok(())
    }

    /// The currently active renderer, if one has been created.
    ///
    /// The returned handle is shared with the manager, so the host can
    /// keep the instance alive independently.
    #[must_use]
    pub fn active_renderer(&self) -> Option<SharedPlugin<dyn Renderer>> {
        self.active_renderer.as_ref().map(Arc::clone)
    }

    /// Shuts down and releases the active renderer, if any.
    pub fn shutdown_active_renderer(&mut self) -> Result<(), PluginError> {
        if let Some(active) = self.active_renderer.take() {
            let mut renderer = lock(&active);
            log::debug!("Shutting down renderer '{}'", renderer.name());
            renderer.shutdown()?;
        }
        Ok(())
    }
}

impl PluginRegistry for PluginManager {
    fn register_renderer(
        &mut self,
        name: &str,
        factory: Arc<dyn PluginFactory<dyn Renderer>>,
    ) -> Result<(), PluginError> {
        if name.is_empty() {
            log::error!("PluginManager rejecting renderer factory with an empty name");
            return Err(PluginError::EmptyName);
        }
        if self.renderers.iter().any(|(registered, _)| registered == name) {
            log::error!("PluginManager rejecting second renderer factory named '{name}'");
            return Err(PluginError::DuplicateName(name.to_string()));
        }

        log::debug!("Registered renderer factory '{name}'");
        self.renderers.push((name.to_string(), factory));
        Ok(())
    }
}

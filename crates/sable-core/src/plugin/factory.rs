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

//! The plugin factory contract.

use crate::plugin::PluginError;
use crate::renderer::Renderer;
use std::sync::{Arc, Mutex};

/// A shared-ownership handle to a plugin instance.
///
/// Both the registry and the host may hold one; the instance is dropped
/// when the last handle goes away. The mutex serializes access for the
/// single owning thread, it is not an invitation to drive the plugin from
/// several threads at once.
pub type SharedPlugin<T> = Arc<Mutex<T>>;

/// A stateless creator for one concrete plugin type.
///
/// A factory has no identity beyond the name it is registered under.
pub trait PluginFactory<T: ?Sized>: Send + Sync {
    /// Constructs a new, fully usable instance.
    ///
    /// Every call returns a fresh instance; factories never cache. A
    /// factory that cannot bring up the underlying resource reports
    /// [`PluginError::CreationFailed`] rather than returning a
    /// half-initialized object.
    fn create(&self) -> Result<SharedPlugin<T>, PluginError>;
}

/// The factory type every renderer backend crate provides.
pub type RendererFactory = dyn PluginFactory<dyn Renderer>;

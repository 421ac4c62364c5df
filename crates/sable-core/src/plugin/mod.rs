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

//! The plugin contract: the minimal polymorphic surface every engine
//! extension satisfies so the host can manage it uniformly, plus the
//! factory surface used to construct one without knowing its concrete
//! type.

pub mod factory;
pub mod manager;

pub use factory::{PluginFactory, RendererFactory, SharedPlugin};
pub use manager::{PluginManager, PluginRegistry};

use crate::renderer::RenderError;
use std::fmt;

/// The capability family a plugin belongs to.
///
/// Every concrete plugin reports exactly one type, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum PluginType {
    /// A plugin of a kind this version of the engine does not know.
    Unknown,
    /// A graphics backend implementing the
    /// [`Renderer`](crate::renderer::Renderer) capability.
    Renderer,
}

impl fmt::Display for PluginType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PluginType::Unknown => "Unknown",
            PluginType::Renderer => "Renderer",
        };
        write!(f, "{name}")
    }
}

/// A loadable engine extension.
///
/// A plugin is driven by exactly one owning thread; shared handles exist
/// only so the registry and the host can keep the instance alive
/// independently, never for concurrent mutation.
pub trait Plugin: Send {
    /// The capability family of this plugin. Immutable for the lifetime of
    /// the instance.
    fn plugin_type(&self) -> PluginType;

    /// The human-readable name of this plugin.
    fn name(&self) -> &str;

    /// Releases everything the plugin owns.
    ///
    /// The owner must call this exactly once, before dropping the last
    /// handle; calling it again is a protocol violation.
    fn shutdown(&mut self) -> Result<(), PluginError>;
}

/// An error produced by plugin construction or registry operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PluginError {
    /// A factory was registered under an empty name.
    EmptyName,
    /// A factory was already registered under this name.
    DuplicateName(String),
    /// No factory is registered under this name.
    UnknownPlugin(String),
    /// A factory failed to construct a usable instance.
    CreationFailed {
        /// The registered name of the plugin.
        name: String,
        /// Backend-specific detail.
        reason: String,
    },
    /// A renderer operation performed on behalf of the registry failed.
    Render(RenderError),
}

impl fmt::Display for PluginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PluginError::EmptyName => {
                write!(f, "Plugin registration requires a non-empty name")
            }
            PluginError::DuplicateName(name) => {
                write!(f, "A plugin factory named '{name}' is already registered")
            }
            PluginError::UnknownPlugin(name) => {
                write!(f, "No plugin factory named '{name}' is registered")
            }
            PluginError::CreationFailed { name, reason } => {
                write!(f, "Failed to create plugin '{name}': {reason}")
            }
            PluginError::Render(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for PluginError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PluginError::Render(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RenderError> for PluginError {
    fn from(err: RenderError) -> Self {
        PluginError::Render(err)
    }
}

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

//! Error types for the rendering subsystem.

use crate::renderer::lifecycle::RendererState;
use std::fmt;

/// An error produced by a renderer backend or by the lifecycle contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// An operation was called in a state that does not permit it, e.g.
    /// `begin_scene` while a scene is already open.
    InvalidState {
        /// The operation that was attempted.
        operation: &'static str,
        /// The state the renderer was in at the time.
        state: RendererState,
    },
    /// The backend failed to bring up its API-specific resources.
    InitializationFailed(String),
    /// A backend resource (surface, swapchain, buffer, ...) could not be
    /// created.
    ResourceCreationFailed {
        /// What kind of resource failed to come up.
        resource: &'static str,
        /// Backend-specific detail.
        reason: String,
    },
    /// The backend requires an OS window/surface handle and the supplied
    /// platform state did not carry one it understands.
    MissingPlatformHandle,
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::InvalidState { operation, state } => {
                write!(f, "'{operation}' is not permitted in state {state}")
            }
            RenderError::InitializationFailed(reason) => {
                write!(f, "Renderer initialization failed: {reason}")
            }
            RenderError::ResourceCreationFailed { resource, reason } => {
                write!(f, "Failed to create {resource}: {reason}")
            }
            RenderError::MissingPlatformHandle => {
                write!(f, "Platform state carries no usable window handle")
            }
        }
    }
}

impl std::error::Error for RenderError {}

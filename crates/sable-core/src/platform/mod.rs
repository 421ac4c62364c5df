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

//! Opaque platform state handed to renderer backends at initialization.
//!
//! The windowing subsystem that produces OS window/surface handles is not
//! part of this layer, so [`PlatformState`] carries the handle as an opaque,
//! type-erased value. A backend that knows the concrete handle type it was
//! built for recovers it with [`PlatformState::handle`].

use std::any::Any;
use std::sync::Arc;

/// Type-erased container for OS-level window/surface state.
///
/// Cloning is cheap: all clones share the same underlying handle.
///
/// # Example
///
/// ```rust
/// use sable_core::platform::PlatformState;
///
/// struct Win32Surface { hwnd: usize }
///
/// let state = PlatformState::with_handle(Win32Surface { hwnd: 0x1234 });
/// let surface = state.handle::<Win32Surface>().unwrap();
/// assert_eq!(surface.hwnd, 0x1234);
/// ```
#[derive(Clone, Default)]
pub struct PlatformState {
    handle: Option<Arc<dyn Any + Send + Sync>>,
}

impl PlatformState {
    /// Creates a platform state with no handle attached.
    ///
    /// Useful for backends that do not need a window, such as the headless
    /// renderer.
    #[must_use]
    pub fn empty() -> Self {
        Self { handle: None }
    }

    /// Creates a platform state carrying `handle`.
    #[must_use]
    pub fn with_handle<H: Any + Send + Sync>(handle: H) -> Self {
        Self {
            handle: Some(Arc::new(handle)),
        }
    }

    /// Recovers the handle as type `H`.
    ///
    /// Returns `None` if no handle is attached or if it is not an `H`.
    #[must_use]
    pub fn handle<H: Any + Send + Sync>(&self) -> Option<&H> {
        self.handle
            .as_deref()
            .and_then(|handle| handle.downcast_ref::<H>())
    }

    /// Returns `true` if a handle of any type is attached.
    #[must_use]
    pub fn has_handle(&self) -> bool {
        self.handle.is_some()
    }
}

impl std::fmt::Debug for PlatformState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlatformState")
            .field("has_handle", &self.has_handle())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeWindowHandle {
        id: u64,
    }

    #[test]
    fn test_empty_has_no_handle() {
        let state = PlatformState::empty();
        assert!(!state.has_handle());
        assert!(state.handle::<FakeWindowHandle>().is_none());
    }

    #[test]
    fn test_handle_round_trip() {
        let state = PlatformState::with_handle(FakeWindowHandle { id: 7 });
        assert!(state.has_handle());
        assert_eq!(state.handle::<FakeWindowHandle>().unwrap().id, 7);
    }

    #[test]
    fn test_wrong_type_returns_none() {
        let state = PlatformState::with_handle(42u32);
        assert!(state.handle::<FakeWindowHandle>().is_none());
    }

    #[test]
    fn test_clones_share_handle() {
        let state = PlatformState::with_handle(FakeWindowHandle { id: 9 });
        let clone = state.clone();
        assert_eq!(clone.handle::<FakeWindowHandle>().unwrap().id, 9);
    }
}

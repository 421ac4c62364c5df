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

//! # Sable Headless
//!
//! A renderer backend that fulfils the full
//! [`Renderer`](sable_core::renderer::Renderer) contract without touching a
//! GPU or a window. Hosts use it for automated tests, CI, and server-side
//! runs; it also serves as the reference implementation for backend
//! authors.

#![warn(missing_docs)]

mod renderer;

pub use renderer::{register, HeadlessRenderer, HeadlessRendererFactory, BACKEND_NAME};

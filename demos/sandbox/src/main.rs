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

// Sable Engine Sandbox
// Minimal game running the headless renderer backend for a few frames.

use anyhow::Result;
use sable_sdk::prelude::*;

struct SandboxGame {
    frame: u32,
}

impl Game for SandboxGame {
    fn window_title(&self) -> &str {
        "Sable Sandbox"
    }

    fn on_initialize(&mut self, ctx: &mut EngineContext<'_>) -> bool {
        if let Err(err) = sable_headless::register(ctx.plugins) {
            log::error!("Failed to register headless backend: {err}");
            return false;
        }
        log::info!(
            "Available renderers: {:?}",
            ctx.plugins.registered_renderers()
        );

        if let Err(err) = ctx
            .plugins
            .change_active_renderer(sable_headless::BACKEND_NAME, ctx.platform_state)
        {
            log::error!("Failed to activate headless renderer: {err}");
            return false;
        }

        true
    }

    fn on_update(&mut self, delta_time: f32) {
        self.frame += 1;
        log::debug!("Update frame {} (dt = {delta_time:.4}s)", self.frame);
    }

    fn on_render(&mut self, _interpolation: f32) {
        log::debug!("Render frame {}", self.frame);
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let mut engine = Engine::with_platform_state(PlatformState::empty());
    let mut game = SandboxGame { frame: 0 };
    engine.run(&mut game, 60)?;

    log::info!("Sandbox ran {} frames", game.frame);
    Ok(())
}

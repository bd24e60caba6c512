// Copyright 2026 Orchid Contributors
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

//! Headless demo driving the frame orchestrator through every
//! anti-aliasing mode on a stub scene.

mod headless;

use orchid_core::math::{Extent2D, Mat4};
use orchid_core::renderer::{
    FramebufferDescriptor, GeometryClass, RenderBackend, RenderError, SampleCount, SceneSource,
    SceneValue, TextureFormat,
};
use orchid_render::{AaMode, FeatureId, FrameOrchestrator, RendererConfig};

struct DemoScene {
    aspect: f32,
}

impl SceneSource for DemoScene {
    fn camera_view_projection(&self) -> Mat4 {
        Mat4::IDENTITY
    }

    fn set_aspect_ratio(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    fn light_count(&self) -> usize {
        2
    }

    fn has_light_probe(&self) -> bool {
        true
    }

    fn variable(&self, name: &str) -> Option<SceneValue> {
        match name {
            "sky_box" => Some(SceneValue::String("textures/sky.hdr".to_owned())),
            "opacity_scale" => Some(SceneValue::Float(0.5)),
            _ => None,
        }
    }

    fn render_geometry(&mut self, _backend: &mut dyn RenderBackend, class: GeometryClass) {
        log::trace!("scene: submitting {:?} geometry", class);
    }
}

fn run() -> Result<(), RenderError> {
    let extent = Extent2D::new(1280, 720);
    let (mut backend, programs) = headless::create_device();
    let target = backend.create_framebuffer(&FramebufferDescriptor::color_only(
        "swap-chain",
        extent,
        TextureFormat::Rgba8UnormSrgb,
    ))?;

    let mut orchestrator = FrameOrchestrator::new(
        Box::new(backend),
        Box::new(programs),
        RendererConfig::default(),
        extent,
    )?;
    let mut scene = DemoScene { aspect: 0.0 };
    orchestrator.bind_scene(&mut scene)?;
    orchestrator.set_feature(FeatureId::Ssao, true);

    let modes = [
        AaMode::Multisample(SampleCount::X8),
        AaMode::Off,
        AaMode::Temporal,
        AaMode::EdgeFilter,
    ];
    for (index, mode) in modes.iter().enumerate() {
        orchestrator.set_aa_mode(*mode);
        if index == 2 {
            // Exercise the exclusive toggle pair mid-run.
            orchestrator.set_feature(FeatureId::Transparency, true);
        }
        for _ in 0..3 {
            let stats = orchestrator.render_frame(&mut scene, target)?;
            log::info!(
                "frame {} [{}]: {:?}",
                stats.frame_index,
                orchestrator.aa_mode(),
                stats.passes
            );
        }
    }

    orchestrator.resize(1920, 1080);
    let stats = orchestrator.render_frame(&mut scene, target)?;
    log::info!(
        "frame {} after resize: {:?}",
        stats.frame_index,
        stats.passes
    );
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = run() {
        log::error!("demo failed: {err}");
        std::process::exit(1);
    }
}

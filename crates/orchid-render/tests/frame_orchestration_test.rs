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

//! Integration tests for the frame orchestrator, driven through recording
//! mock implementations of the backend contracts.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use orchid_core::math::{Extent2D, LinearRgba, Mat4};
use orchid_core::renderer::{
    BlendStateDescriptor, ClearFlags, ClearValue, DepthAttachment, DepthStencilStateDescriptor,
    FramebufferDescriptor, FramebufferId, GeometryClass, ProgramBackend, ProgramDescriptor,
    ProgramId, RasterizerStateDescriptor, RenderBackend, RenderError, ResourceError, SampleCount,
    SceneSource, SceneValue, ShaderError, TextureFormat, TextureId, UniformValue,
};
use orchid_render::{AaMode, FeatureId, FrameOrchestrator, PassKind, RendererConfig};

// --- Recording mocks -----------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
enum Event {
    CreateFramebuffer(u64),
    DestroyFramebuffer(u64),
    Clear(u64),
    ClearTexture(u64),
    Resolve { source: u64, destination: u64 },
    Blit { source: u64, destination: u64 },
    BindFramebuffer(u64),
    BindProgram(u64),
    DrawFullscreen(u64),
    Geometry(GeometryClass),
    Flush,
    CreateProgram(u64),
    DestroyProgram(u64),
    SetTexture { program: u64, name: String, texture: u64 },
    SetUniform { program: u64, name: String, value: UniformValue },
}

#[derive(Debug)]
struct FramebufferRecord {
    label: String,
    sample_count: SampleCount,
    colors: Vec<TextureId>,
    depth: Option<TextureId>,
    alive: bool,
}

#[derive(Debug)]
struct ProgramRecord {
    label: String,
    defines: Vec<(String, String)>,
    alive: bool,
}

#[derive(Debug, Default)]
struct MockState {
    next_id: u64,
    events: Vec<Event>,
    framebuffers: HashMap<u64, FramebufferRecord>,
    programs: HashMap<u64, ProgramRecord>,
    fail_compile_label: Option<String>,
}

impl MockState {
    fn alloc(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn live_framebuffer(&self, label: &str) -> Option<(u64, &FramebufferRecord)> {
        self.framebuffers
            .iter()
            .find(|(_, record)| record.alive && record.label == label)
            .map(|(id, record)| (*id, record))
    }

    fn live_program(&self, label: &str) -> Option<u64> {
        self.programs
            .iter()
            .find(|(_, record)| record.alive && record.label == label)
            .map(|(id, _)| *id)
    }
}

struct MockBackend {
    state: Rc<RefCell<MockState>>,
}

impl RenderBackend for MockBackend {
    fn create_framebuffer(
        &mut self,
        descriptor: &FramebufferDescriptor,
    ) -> Result<FramebufferId, ResourceError> {
        let mut state = self.state.borrow_mut();
        let id = state.alloc();
        let colors: Vec<TextureId> = descriptor
            .color_formats
            .iter()
            .map(|_| TextureId(state.alloc()))
            .collect();
        let depth = match descriptor.depth {
            DepthAttachment::None => None,
            DepthAttachment::Owned(_) => Some(TextureId(state.alloc())),
            DepthAttachment::Shared(texture) => Some(texture),
        };
        state.framebuffers.insert(
            id,
            FramebufferRecord {
                label: descriptor.label.clone(),
                sample_count: descriptor.sample_count,
                colors,
                depth,
                alive: true,
            },
        );
        state.events.push(Event::CreateFramebuffer(id));
        Ok(FramebufferId(id))
    }

    fn destroy_framebuffer(&mut self, framebuffer: FramebufferId) {
        let mut state = self.state.borrow_mut();
        if let Some(record) = state.framebuffers.get_mut(&framebuffer.0) {
            record.alive = false;
        }
        state.events.push(Event::DestroyFramebuffer(framebuffer.0));
    }

    fn color_attachment(&self, framebuffer: FramebufferId, index: u32) -> Option<TextureId> {
        let state = self.state.borrow();
        state
            .framebuffers
            .get(&framebuffer.0)
            .filter(|record| record.alive)
            .and_then(|record| record.colors.get(index as usize).copied())
    }

    fn depth_attachment(&self, framebuffer: FramebufferId) -> Option<TextureId> {
        let state = self.state.borrow();
        state
            .framebuffers
            .get(&framebuffer.0)
            .filter(|record| record.alive)
            .and_then(|record| record.depth)
    }

    fn clear(&mut self, framebuffer: FramebufferId, _value: &ClearValue, _flags: ClearFlags) {
        self.state.borrow_mut().events.push(Event::Clear(framebuffer.0));
    }

    fn clear_texture(&mut self, texture: TextureId, _color: LinearRgba) {
        self.state
            .borrow_mut()
            .events
            .push(Event::ClearTexture(texture.0));
    }

    fn resolve(&mut self, source: TextureId, destination: TextureId) {
        self.state.borrow_mut().events.push(Event::Resolve {
            source: source.0,
            destination: destination.0,
        });
    }

    fn blit(&mut self, source: TextureId, destination: TextureId) {
        self.state.borrow_mut().events.push(Event::Blit {
            source: source.0,
            destination: destination.0,
        });
    }

    fn push_state(&mut self) {}
    fn pop_state(&mut self) {}
    fn set_depth_stencil(&mut self, _state: Option<&DepthStencilStateDescriptor>) {}
    fn set_blend(&mut self, _state: Option<&BlendStateDescriptor>) {}
    fn set_rasterizer(&mut self, _state: Option<&RasterizerStateDescriptor>) {}

    fn bind_framebuffer(&mut self, framebuffer: FramebufferId) -> Result<(), RenderError> {
        let mut state = self.state.borrow_mut();
        let alive = state
            .framebuffers
            .get(&framebuffer.0)
            .map(|record| record.alive)
            .unwrap_or(false);
        if !alive {
            return Err(RenderError::RenderingFailed(format!(
                "bind of dead framebuffer {}",
                framebuffer.0
            )));
        }
        state.events.push(Event::BindFramebuffer(framebuffer.0));
        Ok(())
    }

    fn bind_program(&mut self, program: ProgramId) -> Result<(), RenderError> {
        self.state
            .borrow_mut()
            .events
            .push(Event::BindProgram(program.0));
        Ok(())
    }

    fn draw_fullscreen(&mut self, program: ProgramId) -> Result<(), RenderError> {
        self.state
            .borrow_mut()
            .events
            .push(Event::DrawFullscreen(program.0));
        Ok(())
    }

    fn flush(&mut self) {
        self.state.borrow_mut().events.push(Event::Flush);
    }
}

struct MockPrograms {
    state: Rc<RefCell<MockState>>,
}

impl ProgramBackend for MockPrograms {
    fn create_program(&mut self, descriptor: &ProgramDescriptor) -> Result<ProgramId, ShaderError> {
        let mut state = self.state.borrow_mut();
        if state.fail_compile_label.as_deref() == Some(descriptor.label.as_str()) {
            return Err(ShaderError::CompilationError {
                label: descriptor.label.clone(),
                details: "forced failure".to_owned(),
            });
        }
        let id = state.alloc();
        state.programs.insert(
            id,
            ProgramRecord {
                label: descriptor.label.clone(),
                defines: descriptor
                    .defines
                    .iter()
                    .map(|define| (define.name.clone(), define.value.clone()))
                    .collect(),
                alive: true,
            },
        );
        state.events.push(Event::CreateProgram(id));
        Ok(ProgramId(id))
    }

    fn destroy_program(&mut self, program: ProgramId) {
        let mut state = self.state.borrow_mut();
        if let Some(record) = state.programs.get_mut(&program.0) {
            record.alive = false;
        }
        state.events.push(Event::DestroyProgram(program.0));
    }

    fn set_uniform(&mut self, program: ProgramId, name: &str, value: UniformValue) {
        self.state.borrow_mut().events.push(Event::SetUniform {
            program: program.0,
            name: name.to_owned(),
            value,
        });
    }

    fn set_texture(&mut self, program: ProgramId, name: &str, texture: TextureId) {
        self.state.borrow_mut().events.push(Event::SetTexture {
            program: program.0,
            name: name.to_owned(),
            texture: texture.0,
        });
    }
}

struct TestScene {
    state: Rc<RefCell<MockState>>,
    lights: usize,
    probe: bool,
    variables: HashMap<String, SceneValue>,
    view_projection: Mat4,
    aspect: f32,
}

impl TestScene {
    fn new(state: Rc<RefCell<MockState>>) -> Self {
        Self {
            state,
            lights: 1,
            probe: false,
            variables: HashMap::new(),
            view_projection: Mat4::IDENTITY,
            aspect: 0.0,
        }
    }
}

impl SceneSource for TestScene {
    fn camera_view_projection(&self) -> Mat4 {
        self.view_projection
    }

    fn set_aspect_ratio(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    fn light_count(&self) -> usize {
        self.lights
    }

    fn has_light_probe(&self) -> bool {
        self.probe
    }

    fn variable(&self, name: &str) -> Option<SceneValue> {
        self.variables.get(name).cloned()
    }

    fn render_geometry(&mut self, _backend: &mut dyn RenderBackend, class: GeometryClass) {
        self.state.borrow_mut().events.push(Event::Geometry(class));
    }
}

// --- Harness -------------------------------------------------------------

const EXTENT: Extent2D = Extent2D::new(320, 240);

struct Harness {
    orchestrator: FrameOrchestrator,
    scene: TestScene,
    target: FramebufferId,
    state: Rc<RefCell<MockState>>,
}

impl Harness {
    fn new(config: RendererConfig) -> Self {
        let state = Rc::new(RefCell::new(MockState::default()));
        let mut setup = MockBackend {
            state: state.clone(),
        };
        let target = setup
            .create_framebuffer(&FramebufferDescriptor::color_only(
                "output",
                EXTENT,
                TextureFormat::Rgba8UnormSrgb,
            ))
            .unwrap();

        let orchestrator = FrameOrchestrator::new(
            Box::new(MockBackend {
                state: state.clone(),
            }),
            Box::new(MockPrograms {
                state: state.clone(),
            }),
            config,
            EXTENT,
        )
        .unwrap();
        let mut scene = TestScene::new(state.clone());
        scene.lights = 1;

        Self {
            orchestrator,
            scene,
            target,
            state,
        }
    }

    fn bind(&mut self) {
        self.orchestrator.bind_scene(&mut self.scene).unwrap();
    }

    fn render(&mut self) -> orchid_render::FrameStats {
        self.orchestrator
            .render_frame(&mut self.scene, self.target)
            .unwrap()
    }

    fn drain_events(&self) -> Vec<Event> {
        std::mem::take(&mut self.state.borrow_mut().events)
    }

    fn lighting_defines(&self) -> Vec<(String, String)> {
        let state = self.state.borrow();
        let id = state.live_program("lighting").unwrap();
        state.programs[&id].defines.clone()
    }
}

fn minimal_config() -> RendererConfig {
    RendererConfig {
        aa_mode: AaMode::Off,
        ..RendererConfig::default()
    }
}

// --- Tests ---------------------------------------------------------------

#[test]
fn rendering_before_binding_a_scene_fails() {
    let mut harness = Harness::new(minimal_config());
    let result = harness
        .orchestrator
        .render_frame(&mut harness.scene, harness.target);
    assert!(matches!(result, Err(RenderError::NotInitialized)));
}

#[test]
fn minimal_frame_runs_only_depth_lighting_and_tone_mapping() {
    let mut harness = Harness::new(minimal_config());
    harness.bind();
    harness.orchestrator.set_feature(FeatureId::Shadows, false);

    let stats = harness.render();
    assert_eq!(
        stats.passes,
        vec![
            PassKind::DepthPrePass,
            PassKind::LightingAll,
            PassKind::PostProcess,
        ]
    );

    // Skipping the pre-pass shrinks the frame further.
    harness
        .orchestrator
        .set_feature(FeatureId::DepthPrePass, false);
    let stats = harness.render();
    assert_eq!(stats.passes, vec![PassKind::LightingAll, PassKind::PostProcess]);
}

#[test]
fn multisample_frame_executes_passes_in_order() {
    let mut harness = Harness::new(RendererConfig::default());
    harness.scene.variables.insert(
        "sky_box".to_owned(),
        SceneValue::String("sky.hdr".to_owned()),
    );
    harness.bind();
    harness
        .orchestrator
        .set_feature(FeatureId::Transparency, true);

    let stats = harness.render();
    assert_eq!(
        stats.passes,
        vec![
            PassKind::DepthPrePass,
            PassKind::DepthResolve,
            PassKind::ShadowUpdate,
            PassKind::Sky,
            PassKind::LightingOpaque,
            PassKind::LightingTransparent,
            PassKind::ColorResolve,
            PassKind::PostProcess,
        ]
    );
}

#[test]
fn transparency_limits_the_depth_pre_pass_to_opaque_geometry() {
    let mut harness = Harness::new(minimal_config());
    harness.bind();
    harness
        .orchestrator
        .set_feature(FeatureId::Transparency, true);
    harness.render();

    let events = harness.drain_events();
    let classes: Vec<GeometryClass> = events
        .iter()
        .filter_map(|event| match event {
            Event::Geometry(class) => Some(*class),
            _ => None,
        })
        .collect();
    // Depth pre-pass (opaque only), shadow generation (all), then the two
    // lighting sub-passes.
    assert_eq!(
        classes,
        vec![
            GeometryClass::Opaque,
            GeometryClass::All,
            GeometryClass::Opaque,
            GeometryClass::Transparent,
        ]
    );
}

#[test]
fn enabling_transparency_disables_hashed_alpha_testing() {
    let mut harness = Harness::new(minimal_config());
    harness.bind();
    harness
        .orchestrator
        .set_feature(FeatureId::Transparency, true);
    assert!(!harness.orchestrator.feature(FeatureId::HashedAlpha));

    harness.render();
    let defines = harness.lighting_defines();
    assert!(defines.iter().any(|(name, _)| name == "_ENABLE_TRANSPARENCY"));
    assert!(!defines.iter().any(|(name, _)| name == "_DEFAULT_ALPHA_TEST"));
}

#[test]
fn feature_toggle_recompiles_lighting_once_at_the_next_frame() {
    let mut harness = Harness::new(minimal_config());
    harness.bind();
    harness.render();

    let before = harness.state.borrow().live_program("lighting").unwrap();
    harness.drain_events();

    harness
        .orchestrator
        .set_feature(FeatureId::VisualizeCascades, true);
    harness.render();

    let after = harness.state.borrow().live_program("lighting").unwrap();
    assert_ne!(before, after);
    let events = harness.drain_events();
    assert!(events.contains(&Event::DestroyProgram(before)));
    assert!(harness
        .lighting_defines()
        .iter()
        .any(|(name, _)| name == "_VISUALIZE_CASCADES"));

    // A stable toggle set compiles nothing further.
    harness.render();
    let events = harness.drain_events();
    assert!(!events.iter().any(|e| matches!(e, Event::CreateProgram(_))));
}

#[test]
fn lighting_compile_failure_aborts_the_frame_before_any_draw() {
    let mut harness = Harness::new(minimal_config());
    harness.bind();
    harness.state.borrow_mut().fail_compile_label = Some("lighting".to_owned());

    let result = harness
        .orchestrator
        .render_frame(&mut harness.scene, harness.target);
    assert!(result.is_err());

    let events = harness.drain_events();
    // The depth pre-pass may have run, but no lit geometry and no
    // post-processing was submitted.
    assert!(!events.iter().any(|e| matches!(e, Event::DrawFullscreen(_))));

    // Clearing the fault lets the next frame succeed.
    harness.state.borrow_mut().fail_compile_label = None;
    let stats = harness.render();
    assert!(stats.ran(PassKind::PostProcess));
}

#[test]
fn shadow_cache_reuses_buffer_and_matrix_until_invalidated() {
    let mut harness = Harness::new(minimal_config());
    harness.bind();

    let first = harness.render();
    assert!(first.ran(PassKind::ShadowUpdate));
    let events = harness.drain_events();
    let first_visibility = visibility_texture(&events);
    let first_matrix = shadow_matrix(&events);
    assert_eq!(first_matrix, Some(Mat4::IDENTITY));

    // The camera moves, but the cache is clean: the lighting pass must see
    // the snapshot taken at generation time, not the live matrix.
    harness.scene.view_projection = Mat4::from_scale(2.0);
    let second = harness.render();
    assert!(!second.ran(PassKind::ShadowUpdate));
    let events = harness.drain_events();
    assert_eq!(visibility_texture(&events), first_visibility);
    assert_eq!(shadow_matrix(&events), first_matrix);

    // Invalidation regenerates with the new camera.
    harness.orchestrator.mark_shadow_dirty();
    let third = harness.render();
    assert!(third.ran(PassKind::ShadowUpdate));
    let events = harness.drain_events();
    assert_eq!(
        shadow_matrix(&events),
        Some(Mat4::from_scale(2.0))
    );
}

fn visibility_texture(events: &[Event]) -> Option<u64> {
    events.iter().find_map(|event| match event {
        Event::SetTexture { name, texture, .. } if name == "gVisibilityBuffer" => Some(*texture),
        _ => None,
    })
}

fn shadow_matrix(events: &[Event]) -> Option<Mat4> {
    events.iter().find_map(|event| match event {
        Event::SetUniform { name, value, .. } if name == "gCamVpAtLastShadowUpdate" => {
            match value {
                UniformValue::Mat4(matrix) => Some(*matrix),
                _ => None,
            }
        }
        _ => None,
    })
}

#[test]
fn shadow_generation_consumes_the_resolved_depth_under_multisampling() {
    let mut harness = Harness::new(RendererConfig::default());
    harness.bind();
    harness.render();

    let state = harness.state.borrow();
    let (_, resolve) = state.live_framebuffer("resolve").unwrap();
    let resolved_depth = resolve.colors[2].0;
    let shadow_program = state.live_program("shadow-visibility").unwrap();
    assert!(state.events.iter().any(|event| matches!(
        event,
        Event::SetTexture { program, name, texture }
            if *program == shadow_program && name == "gSceneDepth" && *texture == resolved_depth
    )));
}

#[test]
fn shadow_generation_reads_native_depth_without_multisampling() {
    let mut harness = Harness::new(minimal_config());
    harness.bind();
    harness.render();

    let state = harness.state.borrow();
    let (_, main) = state.live_framebuffer("main").unwrap();
    let native_depth = main.depth.unwrap().0;
    let shadow_program = state.live_program("shadow-visibility").unwrap();
    assert!(state.events.iter().any(|event| matches!(
        event,
        Event::SetTexture { program, name, texture }
            if *program == shadow_program && name == "gSceneDepth" && *texture == native_depth
    )));
}

#[test]
fn frames_without_lights_skip_the_shadow_step() {
    let mut harness = Harness::new(minimal_config());
    harness.scene.lights = 0;
    harness.bind();

    let stats = harness.render();
    assert!(!stats.ran(PassKind::ShadowUpdate));
    let events = harness.drain_events();
    assert!(visibility_texture(&events).is_none());
}

#[test]
fn occlusion_composites_after_tone_mapping_and_before_the_edge_filter() {
    let mut harness = Harness::new(RendererConfig {
        aa_mode: AaMode::EdgeFilter,
        ..RendererConfig::default()
    });
    harness.bind();
    harness.orchestrator.set_feature(FeatureId::Ssao, true);

    let stats = harness.render();
    let post = stats.position(PassKind::PostProcess).unwrap();
    let occlusion = stats.position(PassKind::AmbientOcclusion).unwrap();
    let edge = stats.position(PassKind::EdgeFilter).unwrap();
    assert!(post < occlusion);
    assert!(occlusion < edge);
    assert_eq!(edge, stats.passes.len() - 1);
}

#[test]
fn resizes_are_deferred_to_the_next_frame_boundary() {
    let mut harness = Harness::new(minimal_config());
    harness.bind();
    harness.render();

    let old_main = harness.state.borrow().live_framebuffer("main").unwrap().0;

    harness.orchestrator.resize(64, 64);
    // Nothing is reallocated until the next frame starts.
    assert!(harness.state.borrow().framebuffers[&old_main].alive);

    harness.render();
    {
        let state = harness.state.borrow();
        assert!(!state.framebuffers[&old_main].alive);
        assert!(state.live_framebuffer("main").is_some());
    }
    assert_eq!(harness.scene.aspect, 1.0);
}

#[test]
fn temporal_history_alternates_and_reads_last_frames_output() {
    let mut harness = Harness::new(RendererConfig {
        aa_mode: AaMode::Temporal,
        ..RendererConfig::default()
    });
    harness.bind();

    // Nothing is allocated before the first frame.
    assert_eq!(harness.orchestrator.history_index(), None);

    let stats = harness.render();
    assert!(stats.ran(PassKind::Temporal));
    // Frame 0 wrote buffer 0; the pair flipped at the end of the step.
    assert_eq!(harness.orchestrator.history_index(), Some(1));

    let (h0_fbo, h0_color, h1_fbo, h1_color) = {
        let state = harness.state.borrow();
        let (h0_fbo, h0) = state.live_framebuffer("history-0").unwrap();
        let (h1_fbo, h1) = state.live_framebuffer("history-1").unwrap();
        (h0_fbo, h0.colors[0].0, h1_fbo, h1.colors[0].0)
    };

    let events = harness.drain_events();
    assert!(events.contains(&Event::BindFramebuffer(h0_fbo)));
    assert!(previous_history_texture(&events).is_some_and(|t| t == h1_color));

    // Frame 1 writes buffer 1 and reads frame 0's output from buffer 0.
    harness.render();
    assert_eq!(harness.orchestrator.history_index(), Some(0));
    let events = harness.drain_events();
    assert!(events.contains(&Event::BindFramebuffer(h1_fbo)));
    assert!(previous_history_texture(&events).is_some_and(|t| t == h0_color));
}

fn previous_history_texture(events: &[Event]) -> Option<u64> {
    events.iter().find_map(|event| match event {
        Event::SetTexture { name, texture, .. } if name == "gPreviousColor" => Some(*texture),
        _ => None,
    })
}

#[test]
fn temporal_frames_clear_and_consume_the_motion_vector_target() {
    let mut harness = Harness::new(RendererConfig {
        aa_mode: AaMode::Temporal,
        ..RendererConfig::default()
    });
    harness.bind();
    harness.render();

    let state = harness.state.borrow();
    let (_, main) = state.live_framebuffer("main").unwrap();
    assert_eq!(main.colors.len(), 3);
    let motion = main.colors[2].0;
    assert!(state.events.contains(&Event::ClearTexture(motion)));
    assert!(state.events.iter().any(|event| matches!(
        event,
        Event::SetTexture { name, texture, .. }
            if name == "gMotionVectors" && *texture == motion
    )));
}

#[test]
fn aa_switches_are_deferred_and_swap_the_mode_specific_resources() {
    let mut harness = Harness::new(minimal_config());
    harness.bind();
    harness.render();
    let old_main = harness.state.borrow().live_framebuffer("main").unwrap().0;

    harness.orchestrator.set_aa_mode(AaMode::Temporal);
    assert_eq!(harness.orchestrator.aa_mode(), AaMode::Off);
    assert!(harness.state.borrow().framebuffers[&old_main].alive);

    harness.render();
    assert_eq!(harness.orchestrator.aa_mode(), AaMode::Temporal);
    {
        let state = harness.state.borrow();
        assert!(!state.framebuffers[&old_main].alive);
        let (_, main) = state.live_framebuffer("main").unwrap();
        assert_eq!(main.colors.len(), 3);
        assert!(state.live_framebuffer("history-0").is_some());
        assert!(state.live_framebuffer("history-1").is_some());
    }

    harness
        .orchestrator
        .set_aa_mode(AaMode::Multisample(SampleCount::X4));
    harness.render();
    {
        let state = harness.state.borrow();
        assert!(state.live_framebuffer("history-0").is_none());
        assert!(state.live_framebuffer("history-1").is_none());
        let (_, main) = state.live_framebuffer("main").unwrap();
        assert_eq!(main.sample_count, SampleCount::X4);
        assert_eq!(main.colors.len(), 2);
    }
    assert_eq!(harness.orchestrator.history_index(), None);
}

#[test]
fn lighting_defines_track_the_active_aa_mode() {
    let mut harness = Harness::new(minimal_config());
    harness.bind();
    harness
        .orchestrator
        .set_feature(FeatureId::SuperSampling, true);
    harness.render();
    // Per-sample interpolation is meaningless without multisampling.
    let defines = harness.lighting_defines();
    assert!(!defines.iter().any(|(name, _)| name == "INTERPOLATION_MODE"));
    assert!(!defines
        .iter()
        .any(|(name, _)| name == "_OUTPUT_MOTION_VECTORS"));

    harness
        .orchestrator
        .set_aa_mode(AaMode::Multisample(SampleCount::X8));
    harness.render();
    let defines = harness.lighting_defines();
    assert!(defines
        .iter()
        .any(|(name, value)| name == "INTERPOLATION_MODE" && value == "sample"));

    harness.orchestrator.set_aa_mode(AaMode::Temporal);
    harness.render();
    let defines = harness.lighting_defines();
    assert!(defines
        .iter()
        .any(|(name, _)| name == "_OUTPUT_MOTION_VECTORS"));
    assert!(defines
        .iter()
        .any(|(name, value)| name == "_LIGHT_COUNT" && value == "1"));
}

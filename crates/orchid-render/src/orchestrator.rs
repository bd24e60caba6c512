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

//! The per-frame pass orchestrator.
//!
//! [`FrameOrchestrator`] sequences the forward-rendering pass graph each
//! frame: depth pre-pass, optional depth resolve, cached shadow update,
//! sky, lit opaque/transparent geometry, optional color resolve, tone
//! mapping, optional temporal accumulation, ambient occlusion composite,
//! and an optional edge filter. Passes execute strictly in this order on
//! the backend's single command stream; explicit
//! [`flush`](orchid_core::renderer::RenderBackend::flush) calls order
//! writes before the reads of later passes.
//!
//! Structural changes (resize, anti-aliasing switches) are deferred to the
//! frame boundary; shader permutation rebuilds happen at the top of the
//! pass that uses them, never mid-pass.

use orchid_core::math::{Extent2D, LinearRgba, Vec2};
use orchid_core::renderer::{
    BlendStateDescriptor, ClearFlags, ClearValue, DepthStencilStateDescriptor,
    FramebufferDescriptor, FramebufferId, GeometryClass, ProgramBackend, ProgramDescriptor,
    ProgramId, RasterizerStateDescriptor, RenderBackend, RenderError, SceneSource, SceneValue,
    ShaderDefine, TextureFormat, TextureId, UniformValue,
};

use crate::aa::{AaController, AaMode};
use crate::config::RendererConfig;
use crate::features::{FeatureId, FeatureToggleTable};
use crate::resources::{FrameResourceSet, FrameTargets};
use crate::shadow::{ShadowCache, ShadowOutput};

/// The fixed ambient-occlusion map resolution.
const AO_MAP_SIZE: u32 = 1024;

/// One executed pass, recorded in frame order for [`FrameStats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassKind {
    /// Depth-only pre-pass.
    DepthPrePass,
    /// Multisampled depth resolved to a single-sample texture.
    DepthResolve,
    /// Shadow visibility buffer regenerated.
    ShadowUpdate,
    /// Sky rendered behind all geometry.
    Sky,
    /// Lit opaque geometry.
    LightingOpaque,
    /// Lit alpha-blended geometry.
    LightingTransparent,
    /// Lit geometry in a single submission (transparency disabled).
    LightingAll,
    /// Multisampled color and normals resolved.
    ColorResolve,
    /// Tone mapping into the LDR target.
    PostProcess,
    /// Temporal accumulation over the history pair.
    Temporal,
    /// Ambient occlusion generation and composite.
    AmbientOcclusion,
    /// Edge-detection filter over the final image.
    EdgeFilter,
}

/// What a frame did, returned by
/// [`render_frame`](FrameOrchestrator::render_frame).
#[derive(Debug, Clone, PartialEq)]
pub struct FrameStats {
    /// The index of the frame just rendered, counted from zero.
    pub frame_index: u64,
    /// Every executed pass, in submission order.
    pub passes: Vec<PassKind>,
}

impl FrameStats {
    /// Whether `pass` executed this frame.
    pub fn ran(&self, pass: PassKind) -> bool {
        self.passes.contains(&pass)
    }

    /// The position of `pass` in the frame, if it executed.
    pub fn position(&self, pass: PassKind) -> Option<usize> {
        self.passes.iter().position(|p| *p == pass)
    }
}

/// The forward-rendering frame orchestrator.
///
/// Owns the backend collaborators, the feature toggle table, the
/// anti-aliasing controller, the frame resource set, and the shadow
/// cache, and drives them through the fixed pass graph once per
/// [`render_frame`](Self::render_frame) call.
pub struct FrameOrchestrator {
    backend: Box<dyn RenderBackend>,
    programs: Box<dyn ProgramBackend>,
    config: RendererConfig,
    features: FeatureToggleTable,
    aa: AaController,
    resources: FrameResourceSet,
    shadow: ShadowCache,

    extent: Extent2D,
    pending_extent: Option<Extent2D>,

    scene_bound: bool,
    light_count: usize,
    opacity_scale: f32,

    depth_program: Option<ProgramId>,
    depth_dirty: bool,
    lighting_program: Option<ProgramId>,
    lighting_dirty: bool,
    sky_program: Option<ProgramId>,
    tone_map_program: ProgramId,
    temporal_program: ProgramId,
    ao_generate_program: ProgramId,
    ao_apply_program: ProgramId,
    edge_filter_program: ProgramId,
    ao_map: FramebufferId,

    frame_index: u64,
}

impl FrameOrchestrator {
    /// Creates the orchestrator and compiles its fixed-function programs.
    ///
    /// Scene-dependent programs (lighting, depth, sky) are compiled lazily
    /// after [`bind_scene`](Self::bind_scene).
    pub fn new(
        mut backend: Box<dyn RenderBackend>,
        mut programs: Box<dyn ProgramBackend>,
        config: RendererConfig,
        extent: Extent2D,
    ) -> Result<Self, RenderError> {
        let tone_map_program = programs.create_program(
            &ProgramDescriptor::new("tone-map", "ToneMapping.slang", "", "psMain").with_defines(
                vec![ShaderDefine::new(
                    "_TONE_MAP_OPERATOR",
                    config.tone_map.define_value(),
                )],
            ),
        )?;
        let temporal_program = programs.create_program(&ProgramDescriptor::new(
            "temporal-filter",
            "TemporalAccumulation.slang",
            "",
            "psMain",
        ))?;
        let ao_generate_program = programs.create_program(&ProgramDescriptor::new(
            "ao-generate",
            "AmbientOcclusion.slang",
            "",
            "psGenerate",
        ))?;
        let ao_apply_program = programs.create_program(&ProgramDescriptor::new(
            "ao-apply",
            "AmbientOcclusion.slang",
            "",
            "psApply",
        ))?;
        let edge_filter_program = programs.create_program(&ProgramDescriptor::new(
            "edge-filter",
            "EdgeFilter.slang",
            "",
            "psMain",
        ))?;

        // The AO map has a fixed resolution; it survives resizes untouched.
        let ao_map = backend.create_framebuffer(&FramebufferDescriptor::color_only(
            "ao-map",
            Extent2D::new(AO_MAP_SIZE, AO_MAP_SIZE),
            TextureFormat::R32Float,
        ))?;

        let shadow = ShadowCache::new(config.shadow_map_size);
        let aa = AaController::new(config.aa_mode);
        log::info!(
            "Frame orchestrator created: {}x{}, AA mode {}.",
            extent.width,
            extent.height,
            config.aa_mode
        );

        Ok(Self {
            backend,
            programs,
            features: FeatureToggleTable::new(),
            aa,
            resources: FrameResourceSet::new(),
            shadow,
            config,
            extent,
            pending_extent: None,
            scene_bound: false,
            light_count: 0,
            opacity_scale: 0.5,
            depth_program: None,
            depth_dirty: true,
            lighting_program: None,
            lighting_dirty: true,
            sky_program: None,
            tone_map_program,
            temporal_program,
            ao_generate_program,
            ao_apply_program,
            edge_filter_program,
            ao_map,
            frame_index: 0,
        })
    }

    /// Adopts a scene: reads its variables, derives feature toggles, and
    /// invalidates every scene-dependent cache.
    pub fn bind_scene(&mut self, scene: &mut dyn SceneSource) -> Result<(), RenderError> {
        self.light_count = scene.light_count();
        self.features
            .set(FeatureId::Reflections, scene.has_light_probe());

        self.opacity_scale = match scene.variable("opacity_scale") {
            Some(SceneValue::Float(v)) => v as f32,
            _ => 0.5,
        };

        if let Some(program) = self.sky_program.take() {
            self.programs.destroy_program(program);
        }
        if let Some(SceneValue::String(path)) = scene.variable("sky_box") {
            let program = self.programs.create_program(&ProgramDescriptor::new(
                "sky",
                path,
                "",
                "psMain",
            ))?;
            self.sky_program = Some(program);
        }

        scene.set_aspect_ratio(self.extent.aspect_ratio());
        self.shadow.mark_dirty();
        self.features.mark_all_dirty();
        self.scene_bound = true;
        log::info!(
            "Scene bound: {} light(s), probe={}, opacity scale {:.2}.",
            self.light_count,
            scene.has_light_probe(),
            self.opacity_scale
        );
        Ok(())
    }

    /// Requests a swap-chain resize, applied at the next frame boundary.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.pending_extent = Some(Extent2D::new(width, height));
    }

    /// Requests an anti-aliasing mode switch, applied at the next frame
    /// boundary.
    pub fn set_aa_mode(&mut self, mode: AaMode) {
        self.aa.request(mode);
    }

    /// The currently active anti-aliasing mode.
    pub fn aa_mode(&self) -> AaMode {
        self.aa.mode()
    }

    /// Enables or disables a renderer feature.
    pub fn set_feature(&mut self, id: FeatureId, enabled: bool) {
        self.features.set(id, enabled);
    }

    /// Whether a renderer feature is enabled.
    pub fn feature(&self, id: FeatureId) -> bool {
        self.features.get(id)
    }

    /// Forces the shadow visibility buffer to regenerate next frame.
    pub fn mark_shadow_dirty(&mut self) {
        self.shadow.mark_dirty();
    }

    /// Whether the shadow cache will regenerate on the next frame.
    pub fn shadows_dirty(&self) -> bool {
        self.shadow.is_dirty()
    }

    /// The current frame target handles, if allocated. Test/inspection
    /// accessor; handles are invalidated by resizes and mode switches.
    pub fn targets(&self) -> Option<FrameTargets> {
        self.resources.targets()
    }

    /// The active history buffer index under temporal accumulation.
    pub fn history_index(&self) -> Option<usize> {
        self.resources.history().map(|pair| pair.active_index())
    }

    /// Renders one frame into `target`.
    ///
    /// `target` must carry at least one color attachment. On error the
    /// frame is abandoned; no partial pass output is presented.
    pub fn render_frame(
        &mut self,
        scene: &mut dyn SceneSource,
        target: FramebufferId,
    ) -> Result<FrameStats, RenderError> {
        if !self.scene_bound {
            return Err(RenderError::NotInitialized);
        }

        self.apply_deferred_changes(scene)?;
        let targets = self
            .resources
            .targets()
            .ok_or(RenderError::NotInitialized)?;
        let steps = self.aa.frame_steps();
        let mut passes = Vec::with_capacity(10);

        self.backend.push_state();
        self.begin_frame(&targets);

        // Fold toggle-table dirtiness into the permutation flags before any
        // program is used this frame.
        let (lighting_dirty, depth_dirty) = self.features.take_dirty();
        self.lighting_dirty |= lighting_dirty;
        self.depth_dirty |= depth_dirty;

        // 1. Depth pre-pass.
        let depth_pre_ran = self.depth_pre_pass(scene, &targets, &mut passes)?;

        // 2. Depth resolve, multisampling only.
        let resolved_depth =
            self.resolve_depth(depth_pre_ran, steps.depth_resolve, &targets, &mut passes)?;

        // 3. Shadow update, consuming the best available depth.
        let shadow_output = self.shadow_update(scene, depth_pre_ran, resolved_depth, &mut passes)?;

        // 4. Sky, always behind everything already depth-tested.
        self.backend.bind_framebuffer(targets.main)?;
        if let Some(sky) = self.sky_program {
            self.backend
                .set_depth_stencil(Some(&DepthStencilStateDescriptor::ALWAYS_PASS));
            self.backend.draw_fullscreen(sky)?;
            self.backend.set_depth_stencil(None);
            passes.push(PassKind::Sky);
        }

        // 5. Lighting.
        self.lighting_pass(scene, &targets, shadow_output, &mut passes)?;

        // 6. Color resolve, multisampling only.
        if steps.color_resolve {
            self.resolve_color(&targets)?;
            passes.push(PassKind::ColorResolve);
        }

        // 7. Tone mapping. Lands in the intermediate LDR target when the
        //    occlusion composite still has to run, otherwise directly in
        //    the output.
        let ssao = self.features.get(FeatureId::Ssao);
        let post_target = if ssao { targets.post_process } else { target };
        self.tone_map_pass(&targets, steps.color_resolve, post_target)?;
        passes.push(PassKind::PostProcess);

        // 8. Temporal accumulation, rewriting the tone-mapped image.
        if steps.temporal {
            self.temporal_pass(&targets, post_target)?;
            passes.push(PassKind::Temporal);
        }

        // 9. Ambient occlusion composite into the output.
        if ssao {
            self.occlusion_pass(&targets, steps.color_resolve, post_target, target)?;
            passes.push(PassKind::AmbientOcclusion);
        }

        // 10. Edge filter over the final image.
        if steps.edge_filter {
            self.edge_filter_pass(&targets, target)?;
            passes.push(PassKind::EdgeFilter);
        }

        self.backend.pop_state();

        let stats = FrameStats {
            frame_index: self.frame_index,
            passes,
        };
        log::trace!("Frame {} passes: {:?}", stats.frame_index, stats.passes);
        self.frame_index += 1;
        Ok(stats)
    }

    /// Applies deferred resizes and AA switches, then (re)configures the
    /// frame targets. Runs before any pass touches a resource.
    fn apply_deferred_changes(&mut self, scene: &mut dyn SceneSource) -> Result<(), RenderError> {
        if let Some(extent) = self.pending_extent.take() {
            log::info!("Applying resize to {}x{}.", extent.width, extent.height);
            self.extent = extent;
            scene.set_aspect_ratio(extent.aspect_ratio());
        }
        if let Some(mode) = self.aa.apply_pending() {
            log::info!("Switching AA mode to {}.", mode);
            // Motion-vector and interpolation defines depend on the mode.
            self.lighting_dirty = true;
        }
        self.resources
            .configure(&mut *self.backend, self.extent, self.aa.mode())?;
        Ok(())
    }

    fn begin_frame(&mut self, targets: &FrameTargets) {
        self.backend.clear(
            targets.main,
            &ClearValue::color(self.config.clear_color),
            ClearFlags::ALL,
        );
        self.backend.clear(
            targets.post_process,
            &ClearValue::default(),
            ClearFlags::COLOR,
        );
        if self.aa.mode().wants_motion_vectors() {
            if let Some(motion) = self.backend.color_attachment(targets.main, 2) {
                self.backend.clear_texture(motion, LinearRgba::TRANSPARENT);
            }
        }
    }

    /// Renders depth-only geometry into the shared depth texture. Returns
    /// whether the pass ran.
    fn depth_pre_pass(
        &mut self,
        scene: &mut dyn SceneSource,
        targets: &FrameTargets,
        passes: &mut Vec<PassKind>,
    ) -> Result<bool, RenderError> {
        if !self.features.get(FeatureId::DepthPrePass) {
            return Ok(false);
        }

        if self.depth_dirty || self.depth_program.is_none() {
            if let Some(old) = self.depth_program.take() {
                self.programs.destroy_program(old);
            }
            let descriptor = ProgramDescriptor::new("depth-pre-pass", "DepthPass.slang", "", "psMain")
                .with_defines(self.features.depth_defines());
            self.depth_program = Some(self.programs.create_program(&descriptor)?);
            self.depth_dirty = false;
        }
        let program = self
            .depth_program
            .ok_or_else(|| RenderError::Internal("depth program missing".to_owned()))?;

        self.backend.bind_framebuffer(targets.depth_pre_pass)?;
        self.backend.bind_program(program)?;
        // Transparent geometry must not occlude what shows through it.
        let class = if self.features.get(FeatureId::Transparency) {
            GeometryClass::Opaque
        } else {
            GeometryClass::All
        };
        scene.render_geometry(&mut *self.backend, class);
        passes.push(PassKind::DepthPrePass);
        Ok(true)
    }

    /// Resolves multisampled pre-pass depth for single-sample consumers
    /// (shadow culling, ambient occlusion).
    fn resolve_depth(
        &mut self,
        depth_pre_ran: bool,
        wanted: bool,
        targets: &FrameTargets,
        passes: &mut Vec<PassKind>,
    ) -> Result<Option<TextureId>, RenderError> {
        if !(wanted && depth_pre_ran) {
            return Ok(None);
        }
        let source = self
            .backend
            .depth_attachment(targets.main)
            .ok_or_else(|| RenderError::Internal("main depth attachment missing".to_owned()))?;
        let destination = self
            .backend
            .color_attachment(targets.resolve, 2)
            .ok_or_else(|| RenderError::Internal("resolve depth attachment missing".to_owned()))?;
        self.backend.resolve(source, destination);
        self.backend.flush();
        passes.push(PassKind::DepthResolve);
        Ok(Some(destination))
    }

    /// Runs the shadow step, choosing the depth source by mode: the
    /// resolved depth under multisampling, the native pre-pass depth
    /// otherwise, or none when no pre-pass ran.
    fn shadow_update(
        &mut self,
        scene: &mut dyn SceneSource,
        depth_pre_ran: bool,
        resolved_depth: Option<TextureId>,
        passes: &mut Vec<PassKind>,
    ) -> Result<Option<ShadowOutput>, RenderError> {
        if !self.features.get(FeatureId::Shadows) {
            return Ok(None);
        }
        let targets = self
            .resources
            .targets()
            .ok_or(RenderError::NotInitialized)?;
        let depth_source = if !depth_pre_ran {
            None
        } else if let Some(resolved) = resolved_depth {
            Some(resolved)
        } else {
            self.backend.depth_attachment(targets.main)
        };

        let output = self.shadow.update(
            &mut *self.backend,
            &mut *self.programs,
            scene,
            self.extent,
            depth_source,
        )?;
        if output.map_or(false, |out| out.regenerated) {
            passes.push(PassKind::ShadowUpdate);
        }
        Ok(output)
    }

    /// Rebuilds the lighting permutation if dirty, uploads the per-frame
    /// constants, and submits the scene geometry.
    fn lighting_pass(
        &mut self,
        scene: &mut dyn SceneSource,
        targets: &FrameTargets,
        shadow_output: Option<ShadowOutput>,
        passes: &mut Vec<PassKind>,
    ) -> Result<(), RenderError> {
        if self.lighting_dirty || self.lighting_program.is_none() {
            if let Some(old) = self.lighting_program.take() {
                self.programs.destroy_program(old);
            }
            let descriptor = ProgramDescriptor::new(
                "lighting",
                "ForwardLighting.slang",
                "vsMain",
                "psMain",
            )
            .with_defines(self.lighting_defines());
            self.lighting_program = Some(self.programs.create_program(&descriptor)?);
            self.lighting_dirty = false;
            log::debug!("Lighting permutation rebuilt.");
        }
        let program = self
            .lighting_program
            .ok_or_else(|| RenderError::Internal("lighting program missing".to_owned()))?;

        self.backend.bind_framebuffer(targets.main)?;
        self.backend.bind_program(program)?;

        self.programs.set_uniform(
            program,
            "gOpacityScale",
            UniformValue::Float(self.opacity_scale),
        );
        self.programs.set_uniform(
            program,
            "gRenderTargetDim",
            UniformValue::Vec2(Vec2::new(
                self.extent.width as f32,
                self.extent.height as f32,
            )),
        );
        for uniform in &self.config.frame_uniforms {
            self.programs
                .set_uniform(program, &uniform.name, uniform.value);
        }
        if let Some(shadow) = shadow_output {
            self.programs.set_texture(program, "gVisibilityBuffer", shadow.visibility);
            self.programs.set_uniform(
                program,
                "gCamVpAtLastShadowUpdate",
                UniformValue::Mat4(shadow.view_projection),
            );
        }

        // With a pre-pass the depth buffer is already populated; only
        // equal depths survive.
        if self.features.get(FeatureId::DepthPrePass) {
            self.backend
                .set_depth_stencil(Some(&DepthStencilStateDescriptor::LESS_EQUAL));
        }

        if self.features.get(FeatureId::Transparency) {
            scene.render_geometry(&mut *self.backend, GeometryClass::Opaque);
            passes.push(PassKind::LightingOpaque);

            self.backend.set_blend(Some(&BlendStateDescriptor::ALPHA));
            self.backend
                .set_rasterizer(Some(&RasterizerStateDescriptor::NO_CULL));
            scene.render_geometry(&mut *self.backend, GeometryClass::Transparent);
            self.backend.set_blend(None);
            self.backend.set_rasterizer(None);
            passes.push(PassKind::LightingTransparent);
        } else {
            scene.render_geometry(&mut *self.backend, GeometryClass::All);
            passes.push(PassKind::LightingAll);
        }

        self.backend.set_depth_stencil(None);
        // Everything after this reads the lighting output.
        self.backend.flush();
        Ok(())
    }

    /// The full define list of the lighting permutation: feature defines
    /// filtered by mode, the light count, and the motion-vector switch.
    fn lighting_defines(&self) -> Vec<ShaderDefine> {
        let mut defines = self.features.shader_defines();
        // Per-sample shading is meaningful under multisampling only.
        if !matches!(self.aa.mode(), AaMode::Multisample(_)) {
            defines.retain(|define| define.name != "INTERPOLATION_MODE");
        }
        defines.push(ShaderDefine::new(
            "_LIGHT_COUNT",
            self.light_count.to_string(),
        ));
        if self.aa.mode().wants_motion_vectors() {
            defines.push(ShaderDefine::flag("_OUTPUT_MOTION_VECTORS"));
        }
        defines
    }

    fn resolve_color(&mut self, targets: &FrameTargets) -> Result<(), RenderError> {
        for index in [0u32, 1] {
            let source = self
                .backend
                .color_attachment(targets.main, index)
                .ok_or_else(|| RenderError::Internal("main color attachment missing".to_owned()))?;
            let destination = self
                .backend
                .color_attachment(targets.resolve, index)
                .ok_or_else(|| {
                    RenderError::Internal("resolve color attachment missing".to_owned())
                })?;
            self.backend.resolve(source, destination);
        }
        self.backend.flush();
        Ok(())
    }

    fn tone_map_pass(
        &mut self,
        targets: &FrameTargets,
        resolved: bool,
        destination: FramebufferId,
    ) -> Result<(), RenderError> {
        let source_fbo = if resolved { targets.resolve } else { targets.main };
        let source = self
            .backend
            .color_attachment(source_fbo, 0)
            .ok_or_else(|| RenderError::Internal("tone-map source missing".to_owned()))?;
        self.backend.bind_framebuffer(destination)?;
        self.programs
            .set_texture(self.tone_map_program, "gColor", source);
        self.backend.draw_fullscreen(self.tone_map_program)?;
        Ok(())
    }

    /// Blends the tone-mapped frame with last frame's history, writes the
    /// result both to the active history buffer and back over the
    /// tone-mapped image, then flips the pair.
    fn temporal_pass(
        &mut self,
        targets: &FrameTargets,
        current: FramebufferId,
    ) -> Result<(), RenderError> {
        let current_color = self
            .backend
            .color_attachment(current, 0)
            .ok_or_else(|| RenderError::Internal("temporal source missing".to_owned()))?;
        let motion = self
            .backend
            .color_attachment(targets.main, 2)
            .ok_or_else(|| RenderError::Internal("motion vector attachment missing".to_owned()))?;

        let history = self
            .resources
            .history()
            .ok_or_else(|| RenderError::Internal("history pair missing".to_owned()))?;
        let active = history.active();
        let previous = self
            .backend
            .color_attachment(history.inactive(), 0)
            .ok_or_else(|| RenderError::Internal("history attachment missing".to_owned()))?;

        self.backend
            .clear(active, &ClearValue::default(), ClearFlags::COLOR);
        self.backend.bind_framebuffer(active)?;
        self.programs
            .set_texture(self.temporal_program, "gCurrentColor", current_color);
        self.programs
            .set_texture(self.temporal_program, "gPreviousColor", previous);
        self.programs
            .set_texture(self.temporal_program, "gMotionVectors", motion);
        self.backend.draw_fullscreen(self.temporal_program)?;
        self.backend.flush();

        let accumulated = self
            .backend
            .color_attachment(active, 0)
            .ok_or_else(|| RenderError::Internal("history attachment missing".to_owned()))?;
        self.backend.blit(accumulated, current_color);

        if let Some(history) = self.resources.history_mut() {
            history.flip();
        }
        Ok(())
    }

    /// Generates the occlusion map from depth and normals, then composites
    /// it with the tone-mapped color into the output target.
    fn occlusion_pass(
        &mut self,
        targets: &FrameTargets,
        resolved: bool,
        tone_mapped: FramebufferId,
        output: FramebufferId,
    ) -> Result<(), RenderError> {
        let (depth, normals) = if resolved {
            (
                self.backend.color_attachment(targets.resolve, 2),
                self.backend.color_attachment(targets.resolve, 1),
            )
        } else {
            (
                self.backend.depth_attachment(targets.main),
                self.backend.color_attachment(targets.main, 1),
            )
        };
        let depth =
            depth.ok_or_else(|| RenderError::Internal("occlusion depth missing".to_owned()))?;
        let normals =
            normals.ok_or_else(|| RenderError::Internal("occlusion normals missing".to_owned()))?;

        self.backend.bind_framebuffer(self.ao_map)?;
        self.programs
            .set_texture(self.ao_generate_program, "gDepth", depth);
        self.programs
            .set_texture(self.ao_generate_program, "gNormals", normals);
        self.backend.draw_fullscreen(self.ao_generate_program)?;
        self.backend.flush();

        let occlusion = self
            .backend
            .color_attachment(self.ao_map, 0)
            .ok_or_else(|| RenderError::Internal("occlusion map missing".to_owned()))?;
        let color = self
            .backend
            .color_attachment(tone_mapped, 0)
            .ok_or_else(|| RenderError::Internal("tone-mapped color missing".to_owned()))?;
        self.backend.bind_framebuffer(output)?;
        self.programs
            .set_texture(self.ao_apply_program, "gColor", color);
        self.programs
            .set_texture(self.ao_apply_program, "gOcclusionMap", occlusion);
        self.backend.draw_fullscreen(self.ao_apply_program)?;
        Ok(())
    }

    /// Runs the edge filter in place over the output, using the resolve
    /// target's primary attachment as scratch.
    fn edge_filter_pass(
        &mut self,
        targets: &FrameTargets,
        output: FramebufferId,
    ) -> Result<(), RenderError> {
        let source = self
            .backend
            .color_attachment(output, 0)
            .ok_or_else(|| RenderError::Internal("edge filter source missing".to_owned()))?;
        let scratch = self
            .backend
            .color_attachment(targets.resolve, 0)
            .ok_or_else(|| RenderError::Internal("edge filter scratch missing".to_owned()))?;
        self.backend.blit(source, scratch);
        self.backend.flush();

        self.backend.bind_framebuffer(output)?;
        self.programs
            .set_texture(self.edge_filter_program, "gSource", scratch);
        self.programs.set_uniform(
            self.edge_filter_program,
            "gTexelSize",
            UniformValue::Vec2(Vec2::new(
                1.0 / self.extent.width.max(1) as f32,
                1.0 / self.extent.height.max(1) as f32,
            )),
        );
        self.backend.draw_fullscreen(self.edge_filter_program)?;
        Ok(())
    }
}

impl Drop for FrameOrchestrator {
    fn drop(&mut self) {
        self.resources.destroy(&mut *self.backend);
        self.shadow
            .destroy(&mut *self.backend, &mut *self.programs);
        self.backend.destroy_framebuffer(self.ao_map);
        for program in [
            self.depth_program.take(),
            self.lighting_program.take(),
            self.sky_program.take(),
            Some(self.tone_map_program),
            Some(self.temporal_program),
            Some(self.ao_generate_program),
            Some(self.ao_apply_program),
            Some(self.edge_filter_program),
        ]
        .into_iter()
        .flatten()
        {
            self.programs.destroy_program(program);
        }
    }
}

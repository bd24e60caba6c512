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

//! The cached cascaded-shadow visibility buffer.
//!
//! Shadow data is regenerated only when marked dirty (scene or light
//! changes) or when the screen-sized visibility target must be
//! reallocated. While the cache is clean, every frame reuses the same
//! visibility texture and the camera view-projection snapshot taken at
//! regeneration time, keeping shading consistent with the cached data.

use orchid_core::math::{Extent2D, Mat4};
use orchid_core::renderer::{
    FramebufferDescriptor, FramebufferId, GeometryClass, ProgramBackend, ProgramDescriptor,
    ProgramId, RenderBackend, RenderError, SceneSource, ShaderDefine, TextureFormat, TextureId,
    UniformValue,
};

/// What the lighting pass consumes from the shadow cache.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowOutput {
    /// The screen-sized visibility buffer.
    pub visibility: TextureId,
    /// The camera view-projection captured when the buffer was generated.
    pub view_projection: Mat4,
    /// Whether this frame's update regenerated the buffer (as opposed to
    /// returning the cached one).
    pub regenerated: bool,
}

/// Cascaded shadow map update with visibility-buffer caching.
#[derive(Debug)]
pub struct ShadowCache {
    map_size: u32,
    dirty: bool,
    extent: Option<Extent2D>,
    cached_view_projection: Mat4,
    visibility_fbo: Option<FramebufferId>,
    program: Option<ProgramId>,
}

impl ShadowCache {
    /// Creates an empty cache. It starts dirty, so the first update with
    /// lights present always regenerates.
    pub fn new(map_size: u32) -> Self {
        Self {
            map_size,
            dirty: true,
            extent: None,
            cached_view_projection: Mat4::IDENTITY,
            visibility_fbo: None,
            program: None,
        }
    }

    /// Whether the next update will regenerate the visibility buffer.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Forces regeneration on the next update.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Runs the shadow step for this frame.
    ///
    /// Returns `None` when the scene has no lights (nothing casts
    /// shadows). Otherwise returns the visibility buffer and the cached
    /// view-projection snapshot, regenerating both first if the cache is
    /// dirty or the target extent changed. `depth_source` is the
    /// pre-resolved scene depth used to cull the cascades; `None` when no
    /// depth pre-pass ran this frame.
    pub fn update(
        &mut self,
        backend: &mut dyn RenderBackend,
        programs: &mut dyn ProgramBackend,
        scene: &mut dyn SceneSource,
        extent: Extent2D,
        depth_source: Option<TextureId>,
    ) -> Result<Option<ShadowOutput>, RenderError> {
        if scene.light_count() == 0 {
            log::trace!("Shadow update skipped: no lights in scene.");
            return Ok(None);
        }

        let needs_realloc = self.extent != Some(extent) || self.visibility_fbo.is_none();
        let regenerated = self.dirty || needs_realloc;
        if regenerated {
            self.regenerate(backend, programs, scene, extent, depth_source)?;
        }

        let framebuffer = self
            .visibility_fbo
            .ok_or_else(|| RenderError::Internal("shadow visibility buffer missing".to_owned()))?;
        let visibility = backend
            .color_attachment(framebuffer, 0)
            .ok_or_else(|| RenderError::Internal("shadow visibility attachment missing".to_owned()))?;
        Ok(Some(ShadowOutput {
            visibility,
            view_projection: self.cached_view_projection,
            regenerated,
        }))
    }

    fn regenerate(
        &mut self,
        backend: &mut dyn RenderBackend,
        programs: &mut dyn ProgramBackend,
        scene: &mut dyn SceneSource,
        extent: Extent2D,
        depth_source: Option<TextureId>,
    ) -> Result<(), RenderError> {
        if self.extent != Some(extent) {
            if let Some(old) = self.visibility_fbo.take() {
                backend.destroy_framebuffer(old);
            }
            let framebuffer = backend.create_framebuffer(&FramebufferDescriptor::color_only(
                "shadow-visibility",
                extent,
                TextureFormat::R32Float,
            ))?;
            self.visibility_fbo = Some(framebuffer);
            self.extent = Some(extent);
        }

        let program = match self.program {
            Some(program) => program,
            None => {
                let program = programs.create_program(
                    &ProgramDescriptor::new(
                        "shadow-visibility",
                        "CascadedShadowMap.slang",
                        "vsMain",
                        "psMain",
                    )
                    .with_defines(vec![
                        ShaderDefine::new("_CSM_FILTER_MODE", "4"),
                        ShaderDefine::new("_CSM_MAP_SIZE", self.map_size.to_string()),
                    ]),
                )?;
                self.program = Some(program);
                program
            }
        };

        // Snapshot taken at generation time; the lighting pass must see
        // this exact matrix until the next regeneration.
        self.cached_view_projection = scene.camera_view_projection();

        let framebuffer = self
            .visibility_fbo
            .ok_or_else(|| RenderError::Internal("shadow visibility buffer missing".to_owned()))?;
        backend.bind_framebuffer(framebuffer)?;
        backend.bind_program(program)?;
        if let Some(depth) = depth_source {
            programs.set_texture(program, "gSceneDepth", depth);
        }
        programs.set_uniform(
            program,
            "gCameraViewProj",
            UniformValue::Mat4(self.cached_view_projection),
        );
        scene.render_geometry(backend, GeometryClass::All);
        // Later passes sample the visibility buffer; order the writes.
        backend.flush();

        self.dirty = false;
        log::debug!("Shadow visibility buffer regenerated ({}x{}).", extent.width, extent.height);
        Ok(())
    }

    /// Releases the cache's GPU resources.
    pub fn destroy(&mut self, backend: &mut dyn RenderBackend, programs: &mut dyn ProgramBackend) {
        if let Some(framebuffer) = self.visibility_fbo.take() {
            backend.destroy_framebuffer(framebuffer);
        }
        if let Some(program) = self.program.take() {
            programs.destroy_program(program);
        }
        self.extent = None;
        self.dirty = true;
    }
}

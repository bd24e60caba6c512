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

//! Frame-sized render target management.
//!
//! [`FrameResourceSet`] owns every framebuffer whose lifetime is tied to
//! the swap-chain extent or the anti-aliasing mode. Reconfiguration happens
//! only at frame boundaries: the orchestrator calls
//! [`configure`](FrameResourceSet::configure) once at the top of each frame
//! and the call is a no-op when nothing changed.

use orchid_core::math::Extent2D;
use orchid_core::renderer::{
    DepthAttachment, FramebufferDescriptor, FramebufferId, RenderBackend, ResourceError,
    SampleCount, TextureFormat,
};

use crate::aa::AaMode;

/// The ping-pong history buffer pair used by temporal accumulation.
///
/// The active buffer is written in frame N and read (as the previous frame)
/// in frame N+1. Starting from creation, the active index in frame N is
/// `N mod 2`.
#[derive(Debug)]
pub struct HistoryPair {
    buffers: [FramebufferId; 2],
    active: usize,
}

impl HistoryPair {
    fn new(buffers: [FramebufferId; 2]) -> Self {
        Self { buffers, active: 0 }
    }

    /// The buffer written this frame.
    pub fn active(&self) -> FramebufferId {
        self.buffers[self.active]
    }

    /// The buffer holding last frame's accumulated history.
    pub fn inactive(&self) -> FramebufferId {
        self.buffers[1 - self.active]
    }

    /// The index of the active buffer (0 or 1).
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Swaps the roles of the two buffers at the end of the temporal step.
    pub fn flip(&mut self) {
        self.active = 1 - self.active;
    }

    fn framebuffers(&self) -> [FramebufferId; 2] {
        self.buffers
    }
}

/// The copyable handle bundle the orchestrator works with inside a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameTargets {
    /// The main HDR lighting target (color + normals [+ motion] + depth).
    pub main: FramebufferId,
    /// The depth-only pre-pass target, sharing the main depth texture.
    pub depth_pre_pass: FramebufferId,
    /// Single-sample destinations for multisample resolves.
    pub resolve: FramebufferId,
    /// The tone-mapped LDR target consumed by the occlusion composite.
    pub post_process: FramebufferId,
}

/// What a given `(extent, mode)` pair requires of the resource set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Requirements {
    extent: Extent2D,
    sample_count: SampleCount,
    motion_vectors: bool,
    history: bool,
}

impl Requirements {
    fn of(extent: Extent2D, mode: AaMode) -> Self {
        Self {
            extent,
            sample_count: mode.sample_count(),
            motion_vectors: mode.wants_motion_vectors(),
            history: mode.wants_history(),
        }
    }
}

/// Owner of all extent- and mode-dependent framebuffers.
#[derive(Debug, Default)]
pub struct FrameResourceSet {
    requirements: Option<Requirements>,
    targets: Option<FrameTargets>,
    history: Option<HistoryPair>,
}

impl FrameResourceSet {
    /// Creates an empty set; nothing is allocated until
    /// [`configure`](Self::configure) runs.
    pub fn new() -> Self {
        Self::default()
    }

    /// (Re)allocates the frame targets for `extent` under `mode`.
    ///
    /// Idempotent: if the requirements are unchanged since the last call,
    /// nothing is destroyed or created. Otherwise every owned framebuffer
    /// is destroyed first, invalidating all texture handles obtained from
    /// them, and the set is rebuilt. A rebuild resets the history pair, so
    /// temporal accumulation restarts from scratch after any switch.
    pub fn configure(
        &mut self,
        backend: &mut dyn RenderBackend,
        extent: Extent2D,
        mode: AaMode,
    ) -> Result<(), ResourceError> {
        let required = Requirements::of(extent, mode);
        if self.requirements == Some(required) {
            return Ok(());
        }

        self.destroy(backend);
        log::debug!(
            "Configuring frame targets: {}x{}, {} sample(s), motion={}, history={}",
            extent.width,
            extent.height,
            required.sample_count.as_u32(),
            required.motion_vectors,
            required.history
        );

        let mut main_colors = vec![TextureFormat::Rgba32Float, TextureFormat::Rgba8Unorm];
        if required.motion_vectors {
            main_colors.push(TextureFormat::Rg16Float);
        }
        let main = backend.create_framebuffer(&FramebufferDescriptor {
            label: "main".to_owned(),
            extent,
            sample_count: required.sample_count,
            color_formats: main_colors,
            depth: DepthAttachment::Owned(TextureFormat::Depth32Float),
        })?;

        let main_depth = backend
            .depth_attachment(main)
            .ok_or(ResourceError::InvalidHandle)?;
        let depth_pre_pass = backend.create_framebuffer(&FramebufferDescriptor {
            label: "depth-pre-pass".to_owned(),
            extent,
            sample_count: required.sample_count,
            color_formats: Vec::new(),
            depth: DepthAttachment::Shared(main_depth),
        })?;

        // Single-sample destinations for color, normals, and depth resolves.
        // Also reused as scratch by the edge filter, so it exists in every
        // mode.
        let resolve = backend.create_framebuffer(&FramebufferDescriptor {
            label: "resolve".to_owned(),
            extent,
            sample_count: SampleCount::X1,
            color_formats: vec![
                TextureFormat::Rgba32Float,
                TextureFormat::Rgba8Unorm,
                TextureFormat::R32Float,
            ],
            depth: DepthAttachment::None,
        })?;

        let post_process = backend.create_framebuffer(&FramebufferDescriptor::color_only(
            "post-process",
            extent,
            TextureFormat::Rgba8UnormSrgb,
        ))?;

        self.history = if required.history {
            let first = backend.create_framebuffer(&FramebufferDescriptor::color_only(
                "history-0",
                extent,
                TextureFormat::Rgba8UnormSrgb,
            ))?;
            let second = backend.create_framebuffer(&FramebufferDescriptor::color_only(
                "history-1",
                extent,
                TextureFormat::Rgba8UnormSrgb,
            ))?;
            Some(HistoryPair::new([first, second]))
        } else {
            None
        };

        self.targets = Some(FrameTargets {
            main,
            depth_pre_pass,
            resolve,
            post_process,
        });
        self.requirements = Some(required);
        Ok(())
    }

    /// Destroys every owned framebuffer, returning the set to its empty
    /// state.
    pub fn destroy(&mut self, backend: &mut dyn RenderBackend) {
        if let Some(targets) = self.targets.take() {
            backend.destroy_framebuffer(targets.depth_pre_pass);
            backend.destroy_framebuffer(targets.main);
            backend.destroy_framebuffer(targets.resolve);
            backend.destroy_framebuffer(targets.post_process);
        }
        if let Some(history) = self.history.take() {
            for framebuffer in history.framebuffers() {
                backend.destroy_framebuffer(framebuffer);
            }
        }
        self.requirements = None;
    }

    /// The current handle bundle, if configured.
    pub fn targets(&self) -> Option<FrameTargets> {
        self.targets
    }

    /// The history pair, present only under [`AaMode::Temporal`].
    pub fn history(&self) -> Option<&HistoryPair> {
        self.history.as_ref()
    }

    /// Mutable access to the history pair for the end-of-step flip.
    pub fn history_mut(&mut self) -> Option<&mut HistoryPair> {
        self.history.as_mut()
    }
}

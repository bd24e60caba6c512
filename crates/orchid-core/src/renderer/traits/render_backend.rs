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

use crate::math::LinearRgba;
use crate::renderer::api::{
    BlendStateDescriptor, ClearFlags, ClearValue, DepthStencilStateDescriptor,
    FramebufferDescriptor, FramebufferId, ProgramId, RasterizerStateDescriptor, TextureId,
};
use crate::renderer::error::{RenderError, ResourceError};

/// The single logical GPU command stream the orchestrator records into.
///
/// Passes execute strictly sequentially; there is no parallel pass
/// execution within a frame. [`flush`](RenderBackend::flush) is the
/// explicit synchronization point that establishes a happens-before
/// relationship between GPU writes and later reads of the same target.
pub trait RenderBackend {
    /// Creates a framebuffer and its attachments.
    ///
    /// Allocation failure is fatal to the frame; it is propagated to the
    /// caller and never retried.
    fn create_framebuffer(
        &mut self,
        descriptor: &FramebufferDescriptor,
    ) -> Result<FramebufferId, ResourceError>;

    /// Destroys a framebuffer. All texture handles obtained from it become
    /// invalid.
    fn destroy_framebuffer(&mut self, framebuffer: FramebufferId);

    /// Returns the texture backing a color attachment, if present.
    fn color_attachment(&self, framebuffer: FramebufferId, index: u32) -> Option<TextureId>;

    /// Returns the texture backing the depth attachment, if present.
    fn depth_attachment(&self, framebuffer: FramebufferId) -> Option<TextureId>;

    /// Clears the selected attachments of a framebuffer.
    fn clear(&mut self, framebuffer: FramebufferId, value: &ClearValue, flags: ClearFlags);

    /// Clears a single texture to a color, independent of any framebuffer
    /// binding. Used for the motion-vector target at frame start.
    fn clear_texture(&mut self, texture: TextureId, color: LinearRgba);

    /// Resolves a multisampled texture into a single-sample one.
    fn resolve(&mut self, source: TextureId, destination: TextureId);

    /// Copies a single-sample texture into another, rescaling if needed.
    fn blit(&mut self, source: TextureId, destination: TextureId);

    /// Pushes the shared graphics-state object for the frame.
    fn push_state(&mut self);

    /// Pops the shared graphics-state object at frame end.
    fn pop_state(&mut self);

    /// Sets or restores (`None`) the depth/stencil state.
    fn set_depth_stencil(&mut self, state: Option<&DepthStencilStateDescriptor>);

    /// Sets or restores (`None`) the blend state.
    fn set_blend(&mut self, state: Option<&BlendStateDescriptor>);

    /// Sets or restores (`None`) the rasterizer state.
    fn set_rasterizer(&mut self, state: Option<&RasterizerStateDescriptor>);

    /// Binds a framebuffer as the current render target.
    ///
    /// A bind failure aborts the frame's render; the previously presented
    /// image remains on screen.
    fn bind_framebuffer(&mut self, framebuffer: FramebufferId) -> Result<(), RenderError>;

    /// Binds a program for subsequent geometry submission.
    fn bind_program(&mut self, program: ProgramId) -> Result<(), RenderError>;

    /// Executes a fullscreen pass with the given program into the currently
    /// bound framebuffer.
    fn draw_fullscreen(&mut self, program: ProgramId) -> Result<(), RenderError>;

    /// Flushes recorded commands, making prior writes visible to later
    /// reads.
    fn flush(&mut self);
}

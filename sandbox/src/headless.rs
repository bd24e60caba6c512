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

//! A headless graphics device for exercising the orchestrator without a
//! GPU. Allocates handles, tracks attachments, and logs every command.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use orchid_core::math::LinearRgba;
use orchid_core::renderer::{
    BlendStateDescriptor, ClearFlags, ClearValue, DepthAttachment, DepthStencilStateDescriptor,
    FramebufferDescriptor, FramebufferId, ProgramBackend, ProgramDescriptor, ProgramId,
    RasterizerStateDescriptor, RenderBackend, RenderError, ResourceError, ShaderError, TextureId,
    UniformValue,
};

#[derive(Debug, Default)]
struct DeviceState {
    next_id: u64,
    framebuffers: HashMap<u64, Framebuffer>,
}

#[derive(Debug)]
struct Framebuffer {
    colors: Vec<TextureId>,
    depth: Option<TextureId>,
}

impl DeviceState {
    fn alloc(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

/// Creates a linked backend/program-backend pair over one device state.
pub fn create_device() -> (HeadlessBackend, HeadlessPrograms) {
    let state = Rc::new(RefCell::new(DeviceState::default()));
    (
        HeadlessBackend {
            state: state.clone(),
        },
        HeadlessPrograms { state },
    )
}

/// The command-stream half of the headless device.
pub struct HeadlessBackend {
    state: Rc<RefCell<DeviceState>>,
}

impl RenderBackend for HeadlessBackend {
    fn create_framebuffer(
        &mut self,
        descriptor: &FramebufferDescriptor,
    ) -> Result<FramebufferId, ResourceError> {
        let mut state = self.state.borrow_mut();
        let id = state.alloc();
        let colors = descriptor
            .color_formats
            .iter()
            .map(|_| TextureId(state.alloc()))
            .collect();
        let depth = match descriptor.depth {
            DepthAttachment::None => None,
            DepthAttachment::Owned(_) => Some(TextureId(state.alloc())),
            DepthAttachment::Shared(texture) => Some(texture),
        };
        state.framebuffers.insert(id, Framebuffer { colors, depth });
        log::debug!(
            "device: framebuffer '{}' created as #{} ({}x{}, {} sample(s))",
            descriptor.label,
            id,
            descriptor.extent.width,
            descriptor.extent.height,
            descriptor.sample_count.as_u32()
        );
        Ok(FramebufferId(id))
    }

    fn destroy_framebuffer(&mut self, framebuffer: FramebufferId) {
        self.state.borrow_mut().framebuffers.remove(&framebuffer.0);
        log::debug!("device: framebuffer #{} destroyed", framebuffer.0);
    }

    fn color_attachment(&self, framebuffer: FramebufferId, index: u32) -> Option<TextureId> {
        self.state
            .borrow()
            .framebuffers
            .get(&framebuffer.0)
            .and_then(|fb| fb.colors.get(index as usize).copied())
    }

    fn depth_attachment(&self, framebuffer: FramebufferId) -> Option<TextureId> {
        self.state
            .borrow()
            .framebuffers
            .get(&framebuffer.0)
            .and_then(|fb| fb.depth)
    }

    fn clear(&mut self, framebuffer: FramebufferId, _value: &ClearValue, _flags: ClearFlags) {
        log::trace!("device: clear #{}", framebuffer.0);
    }

    fn clear_texture(&mut self, texture: TextureId, _color: LinearRgba) {
        log::trace!("device: clear texture #{}", texture.0);
    }

    fn resolve(&mut self, source: TextureId, destination: TextureId) {
        log::trace!("device: resolve #{} -> #{}", source.0, destination.0);
    }

    fn blit(&mut self, source: TextureId, destination: TextureId) {
        log::trace!("device: blit #{} -> #{}", source.0, destination.0);
    }

    fn push_state(&mut self) {}
    fn pop_state(&mut self) {}
    fn set_depth_stencil(&mut self, _state: Option<&DepthStencilStateDescriptor>) {}
    fn set_blend(&mut self, _state: Option<&BlendStateDescriptor>) {}
    fn set_rasterizer(&mut self, _state: Option<&RasterizerStateDescriptor>) {}

    fn bind_framebuffer(&mut self, framebuffer: FramebufferId) -> Result<(), RenderError> {
        if !self
            .state
            .borrow()
            .framebuffers
            .contains_key(&framebuffer.0)
        {
            return Err(RenderError::RenderingFailed(format!(
                "unknown framebuffer #{}",
                framebuffer.0
            )));
        }
        log::trace!("device: bind framebuffer #{}", framebuffer.0);
        Ok(())
    }

    fn bind_program(&mut self, program: ProgramId) -> Result<(), RenderError> {
        log::trace!("device: bind program #{}", program.0);
        Ok(())
    }

    fn draw_fullscreen(&mut self, program: ProgramId) -> Result<(), RenderError> {
        log::trace!("device: fullscreen draw with program #{}", program.0);
        Ok(())
    }

    fn flush(&mut self) {
        log::trace!("device: flush");
    }
}

/// The shader-compilation half of the headless device.
pub struct HeadlessPrograms {
    state: Rc<RefCell<DeviceState>>,
}

impl ProgramBackend for HeadlessPrograms {
    fn create_program(&mut self, descriptor: &ProgramDescriptor) -> Result<ProgramId, ShaderError> {
        let id = self.state.borrow_mut().alloc();
        log::debug!(
            "device: program '{}' compiled as #{} with {} define(s)",
            descriptor.label,
            id,
            descriptor.defines.len()
        );
        Ok(ProgramId(id))
    }

    fn destroy_program(&mut self, program: ProgramId) {
        log::debug!("device: program #{} destroyed", program.0);
    }

    fn set_uniform(&mut self, program: ProgramId, name: &str, _value: UniformValue) {
        log::trace!("device: program #{} uniform '{}'", program.0, name);
    }

    fn set_texture(&mut self, program: ProgramId, name: &str, texture: TextureId) {
        log::trace!(
            "device: program #{} texture '{}' = #{}",
            program.0,
            name,
            texture.0
        );
    }
}

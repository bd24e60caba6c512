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

use crate::renderer::api::{ProgramDescriptor, ProgramId, TextureId, UniformValue};
use crate::renderer::error::ShaderError;

/// The shader compilation and variable-binding collaborator.
///
/// Programs are immutable once compiled; a different define list is a
/// different permutation and requires a fresh
/// [`create_program`](ProgramBackend::create_program) call. Constants and
/// textures are bound by name through the backend's reflection data.
pub trait ProgramBackend {
    /// Compiles a program permutation from its descriptor.
    ///
    /// Compilation failure is fatal to the frame: the caller must not fall
    /// back to a previously compiled permutation with stale defines.
    fn create_program(&mut self, descriptor: &ProgramDescriptor) -> Result<ProgramId, ShaderError>;

    /// Destroys a compiled program.
    fn destroy_program(&mut self, program: ProgramId);

    /// Binds a named shader constant for the next execution of `program`.
    fn set_uniform(&mut self, program: ProgramId, name: &str, value: UniformValue);

    /// Binds a named texture for the next execution of `program`.
    fn set_texture(&mut self, program: ProgramId, name: &str, texture: TextureId);
}

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

//! Backend-agnostic data structures exchanged with the graphics backend.

pub mod common;
pub mod framebuffer;
pub mod pipeline;
pub mod program;

pub use self::common::{SampleCount, TextureFormat, UniformValue};
pub use self::framebuffer::{
    ClearFlags, ClearValue, DepthAttachment, FramebufferDescriptor, FramebufferId, TextureId,
};
pub use self::pipeline::{
    BlendStateDescriptor, CompareFunction, CullMode, DepthStencilStateDescriptor,
    RasterizerStateDescriptor,
};
pub use self::program::{ProgramDescriptor, ProgramId, ShaderDefine};

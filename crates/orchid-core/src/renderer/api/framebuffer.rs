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

//! Framebuffer handles and descriptors.

use crate::math::{Extent2D, LinearRgba};
use crate::orchid_bitflags;
use crate::renderer::api::common::{SampleCount, TextureFormat};

/// An opaque handle to a texture owned by the graphics backend.
///
/// Handles become invalid when the framebuffer that owns the texture is
/// destroyed or reconfigured; callers must re-query them each frame rather
/// than retaining them across a resize or AA-mode switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub u64);

/// An opaque handle to a framebuffer owned by the graphics backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FramebufferId(pub u64);

/// How a framebuffer obtains its depth attachment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepthAttachment {
    /// No depth attachment.
    None,
    /// The framebuffer allocates its own depth texture with this format.
    Owned(TextureFormat),
    /// The framebuffer reuses a depth texture owned by another framebuffer.
    ///
    /// This models the depth pre-pass target writing directly into the main
    /// target's depth so the lighting pass can depth-test against it.
    Shared(TextureId),
}

/// A description of a framebuffer to create.
#[derive(Debug, Clone, PartialEq)]
pub struct FramebufferDescriptor {
    /// A human-readable label, used in logs and error messages.
    pub label: String,
    /// The pixel size of every attachment.
    pub extent: Extent2D,
    /// The sample count shared by all attachments.
    pub sample_count: SampleCount,
    /// Ordered color attachment formats (index 0 is the primary target).
    pub color_formats: Vec<TextureFormat>,
    /// The depth attachment policy.
    pub depth: DepthAttachment,
}

impl FramebufferDescriptor {
    /// Creates a single-sample descriptor with one color attachment and no
    /// depth, the shape used by post-process and history targets.
    pub fn color_only(label: impl Into<String>, extent: Extent2D, format: TextureFormat) -> Self {
        Self {
            label: label.into(),
            extent,
            sample_count: SampleCount::X1,
            color_formats: vec![format],
            depth: DepthAttachment::None,
        }
    }
}

orchid_bitflags! {
    /// Selects which attachment kinds a clear affects.
    pub struct ClearFlags: u32 {
        /// Clear all color attachments.
        const COLOR = 1 << 0;
        /// Clear the depth attachment.
        const DEPTH = 1 << 1;
        /// Clear the stencil attachment.
        const STENCIL = 1 << 2;
        /// Clear color, depth, and stencil.
        const ALL = Self::COLOR.bits() | Self::DEPTH.bits() | Self::STENCIL.bits();
    }
}

/// The values written by a clear operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClearValue {
    /// The color written to color attachments.
    pub color: LinearRgba,
    /// The value written to the depth attachment.
    pub depth: f32,
    /// The value written to the stencil attachment.
    pub stencil: u8,
}

impl ClearValue {
    /// Creates a clear value with the given color, depth 1.0, stencil 0.
    pub const fn color(color: LinearRgba) -> Self {
        Self {
            color,
            depth: 1.0,
            stencil: 0,
        }
    }
}

impl Default for ClearValue {
    fn default() -> Self {
        Self::color(LinearRgba::TRANSPARENT)
    }
}

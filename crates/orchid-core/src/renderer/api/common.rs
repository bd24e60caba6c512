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

//! Common enums and value types for the rendering API.

use crate::math::{Mat4, Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// The number of samples per pixel for Multisample Anti-Aliasing (MSAA).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SampleCount {
    /// 1 sample per pixel (multisampling disabled).
    #[default]
    X1,
    /// 2 samples per pixel.
    X2,
    /// 4 samples per pixel.
    X4,
    /// 8 samples per pixel.
    X8,
}

impl SampleCount {
    /// Returns the sample count as a plain integer.
    #[inline]
    pub const fn as_u32(&self) -> u32 {
        match self {
            SampleCount::X1 => 1,
            SampleCount::X2 => 2,
            SampleCount::X4 => 4,
            SampleCount::X8 => 8,
        }
    }

    /// Returns `true` if more than one sample per pixel is used.
    #[inline]
    pub const fn is_multisampled(&self) -> bool {
        !matches!(self, SampleCount::X1)
    }
}

/// The pixel format of a texture or render target attachment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextureFormat {
    /// 32-bit float per channel RGBA. Used for the HDR lighting target.
    Rgba32Float,
    /// 8-bit unorm RGBA. Used for the normals target.
    Rgba8Unorm,
    /// 8-bit unorm RGBA with sRGB encoding. Used for display-ready targets.
    Rgba8UnormSrgb,
    /// Two 16-bit float channels. Used for motion vectors.
    Rg16Float,
    /// One 32-bit float channel. Used for resolved depth written as color.
    R32Float,
    /// 32-bit float depth.
    Depth32Float,
}

impl TextureFormat {
    /// Returns `true` if this is a depth format.
    #[inline]
    pub const fn is_depth(&self) -> bool {
        matches!(self, TextureFormat::Depth32Float)
    }
}

/// A typed value for a shader constant, bound by name through the program
/// backend's reflection data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum UniformValue {
    /// A boolean constant.
    Bool(bool),
    /// An unsigned integer constant.
    UInt(u32),
    /// A scalar float constant.
    Float(f32),
    /// A 2-component float vector.
    Vec2(Vec2),
    /// A 3-component float vector.
    Vec3(Vec3),
    /// A 4x4 float matrix.
    Mat4(Mat4),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_count_values() {
        assert_eq!(SampleCount::X1.as_u32(), 1);
        assert_eq!(SampleCount::X8.as_u32(), 8);
        assert!(!SampleCount::X1.is_multisampled());
        assert!(SampleCount::X4.is_multisampled());
    }

    #[test]
    fn depth_format_classification() {
        assert!(TextureFormat::Depth32Float.is_depth());
        assert!(!TextureFormat::R32Float.is_depth());
    }
}

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

//! Fixed-function pipeline state descriptors.
//!
//! These are pushed onto the backend's shared graphics-state object around
//! individual passes; `None` restores the backend's default state.

/// The comparison used by depth testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareFunction {
    /// Comparison never passes.
    Never,
    /// Passes when the new value is less than the stored one.
    Less,
    /// Passes when the new value is less than or equal to the stored one.
    LessEqual,
    /// Passes when the values are equal.
    Equal,
    /// Passes when the new value is greater than the stored one.
    Greater,
    /// Comparison always passes.
    Always,
}

/// Depth/stencil state for a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthStencilStateDescriptor {
    /// Whether depth testing is enabled.
    pub depth_test: bool,
    /// The depth comparison function.
    pub compare: CompareFunction,
}

impl DepthStencilStateDescriptor {
    /// Depth test against an existing pre-pass depth buffer.
    pub const LESS_EQUAL: Self = Self {
        depth_test: true,
        compare: CompareFunction::LessEqual,
    };

    /// Depth test that always passes. Used by the sky pass so it renders
    /// behind everything already written.
    pub const ALWAYS_PASS: Self = Self {
        depth_test: true,
        compare: CompareFunction::Always,
    };
}

/// The triangle faces removed by culling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CullMode {
    /// No culling; both faces are rasterized.
    None,
    /// Cull front-facing triangles.
    Front,
    /// Cull back-facing triangles.
    Back,
}

/// Rasterizer state for a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RasterizerStateDescriptor {
    /// The face culling mode.
    pub cull_mode: CullMode,
}

impl RasterizerStateDescriptor {
    /// Double-sided rasterization, required by the transparent sub-pass.
    pub const NO_CULL: Self = Self {
        cull_mode: CullMode::None,
    };
}

/// A blend factor applied to a blend input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlendFactor {
    /// Factor 0.
    Zero,
    /// Factor 1.
    One,
    /// The source alpha.
    SrcAlpha,
    /// One minus the source alpha.
    OneMinusSrcAlpha,
}

/// Blend state for the primary color target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlendStateDescriptor {
    /// The factor applied to the incoming color.
    pub src_factor: BlendFactor,
    /// The factor applied to the stored color.
    pub dst_factor: BlendFactor,
}

impl BlendStateDescriptor {
    /// Standard `src_alpha / one_minus_src_alpha` alpha blending, used by
    /// the transparent geometry sub-pass.
    pub const ALPHA: Self = Self {
        src_factor: BlendFactor::SrcAlpha,
        dst_factor: BlendFactor::OneMinusSrcAlpha,
    };
}

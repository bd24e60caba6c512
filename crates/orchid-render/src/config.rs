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

//! Renderer configuration.
//!
//! One [`FrameOrchestrator`](crate::orchestrator::FrameOrchestrator)
//! serves every demo variant; the per-variant differences (tone-map
//! operator, extra per-frame shader constants, clear color) are data held
//! here rather than separate renderer types.

use orchid_core::math::LinearRgba;
use orchid_core::renderer::{SampleCount, UniformValue};
use serde::{Deserialize, Serialize};

use crate::aa::AaMode;

/// The operator applied by the tone-mapping pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ToneMapOperator {
    /// Clamp HDR values into the displayable range.
    #[default]
    Clamp,
    /// Linear exposure scaling.
    Linear,
    /// Reinhard operator.
    Reinhard,
    /// ACES filmic curve.
    Aces,
}

impl ToneMapOperator {
    /// The preprocessor value selecting this operator in the tone-map
    /// shader.
    pub fn define_value(&self) -> &'static str {
        match self {
            ToneMapOperator::Clamp => "0",
            ToneMapOperator::Linear => "1",
            ToneMapOperator::Reinhard => "2",
            ToneMapOperator::Aces => "3",
        }
    }
}

/// A named shader constant uploaded to the lighting program every frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameUniform {
    /// The shader constant name.
    pub name: String,
    /// The value uploaded each frame.
    pub value: UniformValue,
}

/// Static configuration of a [`FrameOrchestrator`](crate::orchestrator::FrameOrchestrator).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RendererConfig {
    /// The anti-aliasing mode active at startup.
    pub aa_mode: AaMode,
    /// The tone-mapping operator.
    pub tone_map: ToneMapOperator,
    /// The color the main target is cleared to each frame.
    pub clear_color: LinearRgba,
    /// The shadow map resolution per cascade, in texels.
    pub shadow_map_size: u32,
    /// Extra per-frame constants for the lighting program, e.g. material
    /// IoR values in the material demo.
    pub frame_uniforms: Vec<FrameUniform>,
}

impl RendererConfig {
    /// The filmic variant: identical to the default except for the ACES
    /// tone-map operator.
    pub fn aces() -> Self {
        Self {
            tone_map: ToneMapOperator::Aces,
            ..Self::default()
        }
    }
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            aa_mode: AaMode::Multisample(SampleCount::X8),
            tone_map: ToneMapOperator::Clamp,
            clear_color: LinearRgba::grey(0.7),
            shadow_map_size: 2048,
            frame_uniforms: Vec::new(),
        }
    }
}

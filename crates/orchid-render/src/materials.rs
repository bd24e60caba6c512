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

//! Measured material presets for the demo scenes.
//!
//! Complex index-of-refraction values (eta, kappa) sampled at the RGB
//! primary wavelengths. Dielectrics carry a zero extinction coefficient
//! and are flagged transmissive.

use orchid_core::math::Vec3;
use orchid_core::renderer::UniformValue;

use crate::config::FrameUniform;

/// A named material preset with its measured complex IoR.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialPreset {
    /// Display name.
    pub name: &'static str,
    /// Real part of the index of refraction at the RGB primaries.
    pub eta: Vec3,
    /// Extinction coefficient at the RGB primaries. Zero for dielectrics.
    pub kappa: Vec3,
    /// Whether light transmits through the material (dielectrics only).
    pub transmissive: bool,
}

const fn preset(
    name: &'static str,
    eta: [f32; 3],
    kappa: [f32; 3],
    transmissive: bool,
) -> MaterialPreset {
    MaterialPreset {
        name,
        eta: Vec3::new(eta[0], eta[1], eta[2]),
        kappa: Vec3::new(kappa[0], kappa[1], kappa[2]),
        transmissive,
    }
}

/// The built-in preset table, in menu order.
pub const MATERIAL_PRESETS: &[MaterialPreset] = &[
    preset("Aluminum", [1.346, 0.965, 0.617], [7.475, 6.400, 5.303], false),
    preset("Brass", [0.444, 0.527, 1.094], [3.695, 2.765, 1.829], false),
    preset("Copper", [0.271, 0.677, 1.316], [3.609, 2.625, 2.292], false),
    preset("Gold", [0.183, 0.421, 1.373], [3.424, 2.346, 1.770], false),
    preset("Iron", [2.911, 2.950, 2.585], [3.089, 2.932, 2.767], false),
    preset("Lead", [1.910, 1.830, 1.440], [3.510, 3.400, 3.180], false),
    preset("Platinum", [2.376, 2.085, 1.845], [4.266, 3.715, 3.137], false),
    preset("Silver", [0.159, 0.145, 0.135], [3.929, 3.190, 2.381], false),
    preset("Titanium", [2.741, 2.542, 2.267], [3.814, 3.435, 3.039], false),
    preset("Glass", [1.521, 1.525, 1.532], [0.0, 0.0, 0.0], true),
    preset("Plastic", [1.579, 1.589, 1.608], [0.0, 0.0, 0.0], true),
];

/// Looks up a preset by its display name, case-sensitively.
pub fn find_preset(name: &str) -> Option<&'static MaterialPreset> {
    MATERIAL_PRESETS.iter().find(|preset| preset.name == name)
}

impl MaterialPreset {
    /// The per-frame lighting constants selecting this preset, suitable
    /// for [`RendererConfig::frame_uniforms`](crate::config::RendererConfig).
    pub fn frame_uniforms(&self) -> Vec<FrameUniform> {
        vec![
            FrameUniform {
                name: "gIOR_n".to_owned(),
                value: UniformValue::Vec3(self.eta),
            },
            FrameUniform {
                name: "gIOR_k".to_owned(),
                value: UniformValue::Vec3(self.kappa),
            },
            FrameUniform {
                name: "gUseAsDielectric".to_owned(),
                value: UniformValue::Bool(self.transmissive),
            },
        ]
    }
}

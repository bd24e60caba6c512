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

//! The renderer feature toggle table.
//!
//! Each feature maps to an optional shader preprocessor define. Flipping a
//! toggle that changes the active define set marks the affected program
//! permutations dirty; the orchestrator recompiles them at the top of the
//! next pass that uses them, never mid-pass.

use orchid_core::renderer::ShaderDefine;

/// A renderer feature that can be toggled at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureId {
    /// Per-sample (rather than per-pixel) shading under multisampling.
    SuperSampling,
    /// Cascaded shadow mapping.
    Shadows,
    /// Light-probe reflections.
    Reflections,
    /// Screen-space ambient occlusion composite.
    Ssao,
    /// Hashed alpha testing for cutout geometry.
    HashedAlpha,
    /// Alpha-blended transparent geometry.
    Transparency,
    /// Debug visualization of the shadow cascade boundaries.
    VisualizeCascades,
    /// Depth pre-pass before lighting.
    DepthPrePass,
}

impl FeatureId {
    /// Every feature, in table order.
    pub const ALL: [FeatureId; 8] = [
        FeatureId::SuperSampling,
        FeatureId::Shadows,
        FeatureId::Reflections,
        FeatureId::Ssao,
        FeatureId::HashedAlpha,
        FeatureId::Transparency,
        FeatureId::VisualizeCascades,
        FeatureId::DepthPrePass,
    ];

    /// A stable human-readable name, used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            FeatureId::SuperSampling => "super-sampling",
            FeatureId::Shadows => "shadows",
            FeatureId::Reflections => "reflections",
            FeatureId::Ssao => "ssao",
            FeatureId::HashedAlpha => "hashed-alpha",
            FeatureId::Transparency => "transparency",
            FeatureId::VisualizeCascades => "visualize-cascades",
            FeatureId::DepthPrePass => "depth-pre-pass",
        }
    }
}

/// One row of the toggle table.
#[derive(Debug)]
struct Control {
    enabled: bool,
    define: Option<ShaderDefine>,
    /// A feature that cannot be active at the same time as this one.
    exclusive_with: Option<FeatureId>,
    /// Whether the define also feeds the depth pre-pass permutation.
    affects_depth_pass: bool,
}

impl Control {
    fn plain(enabled: bool) -> Self {
        Self {
            enabled,
            define: None,
            exclusive_with: None,
            affects_depth_pass: false,
        }
    }

    fn with_define(enabled: bool, define: ShaderDefine) -> Self {
        Self {
            enabled,
            define: Some(define),
            exclusive_with: None,
            affects_depth_pass: false,
        }
    }
}

/// The feature toggle table driving shader permutation selection.
///
/// Mutually exclusive pairs are resolved synchronously: enabling one side
/// disables the other in the same call, so the table never observes both
/// active between frames.
#[derive(Debug)]
pub struct FeatureToggleTable {
    controls: [Control; 8],
    lighting_dirty: bool,
    depth_dirty: bool,
}

impl FeatureToggleTable {
    /// Creates the table with the renderer defaults: shadows, hashed alpha
    /// testing, and the depth pre-pass enabled, everything else disabled.
    pub fn new() -> Self {
        let hashed_alpha = Control {
            enabled: true,
            define: Some(ShaderDefine::flag("_DEFAULT_ALPHA_TEST")),
            exclusive_with: Some(FeatureId::Transparency),
            affects_depth_pass: true,
        };
        let mut transparency =
            Control::with_define(false, ShaderDefine::flag("_ENABLE_TRANSPARENCY"));
        transparency.exclusive_with = Some(FeatureId::HashedAlpha);

        Self {
            controls: [
                Control::with_define(
                    false,
                    ShaderDefine::new("INTERPOLATION_MODE", "sample"),
                ),
                Control::with_define(true, ShaderDefine::flag("_ENABLE_SHADOWS")),
                Control::with_define(false, ShaderDefine::flag("_ENABLE_REFLECTIONS")),
                Control::plain(false),
                hashed_alpha,
                transparency,
                Control::with_define(false, ShaderDefine::flag("_VISUALIZE_CASCADES")),
                Control::plain(true),
            ],
            // Programs do not exist yet, so everything starts dirty.
            lighting_dirty: true,
            depth_dirty: true,
        }
    }

    fn index(id: FeatureId) -> usize {
        id as usize
    }

    /// Whether `id` is currently enabled.
    pub fn get(&self, id: FeatureId) -> bool {
        self.controls[Self::index(id)].enabled
    }

    /// Enables or disables `id`, disabling its exclusive partner if needed.
    pub fn set(&mut self, id: FeatureId, enabled: bool) {
        let index = Self::index(id);
        if self.controls[index].enabled == enabled {
            return;
        }
        self.controls[index].enabled = enabled;
        self.mark_dirty_for(index);
        log::debug!(
            "Feature '{}' {}.",
            id.name(),
            if enabled { "enabled" } else { "disabled" }
        );

        if enabled {
            if let Some(partner) = self.controls[index].exclusive_with {
                let partner_index = Self::index(partner);
                if self.controls[partner_index].enabled {
                    self.controls[partner_index].enabled = false;
                    self.mark_dirty_for(partner_index);
                    log::debug!(
                        "Feature '{}' disabled (exclusive with '{}').",
                        partner.name(),
                        id.name()
                    );
                }
            }
        }
    }

    fn mark_dirty_for(&mut self, index: usize) {
        if self.controls[index].define.is_some() {
            self.lighting_dirty = true;
            if self.controls[index].affects_depth_pass {
                self.depth_dirty = true;
            }
        }
    }

    /// The defines of all enabled features, for the lighting permutation.
    pub fn shader_defines(&self) -> Vec<ShaderDefine> {
        self.controls
            .iter()
            .filter(|control| control.enabled)
            .filter_map(|control| control.define.clone())
            .collect()
    }

    /// The subset of active defines that feed the depth pre-pass permutation.
    pub fn depth_defines(&self) -> Vec<ShaderDefine> {
        self.controls
            .iter()
            .filter(|control| control.enabled && control.affects_depth_pass)
            .filter_map(|control| control.define.clone())
            .collect()
    }

    /// Takes and clears the dirty flags as `(lighting, depth)`.
    pub fn take_dirty(&mut self) -> (bool, bool) {
        let dirty = (self.lighting_dirty, self.depth_dirty);
        self.lighting_dirty = false;
        self.depth_dirty = false;
        dirty
    }

    /// Forces every permutation to rebuild, e.g. after binding a new scene.
    pub fn mark_all_dirty(&mut self) {
        self.lighting_dirty = true;
        self.depth_dirty = true;
    }
}

impl Default for FeatureToggleTable {
    fn default() -> Self {
        Self::new()
    }
}

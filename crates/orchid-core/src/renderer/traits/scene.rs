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

use crate::math::Mat4;
use crate::renderer::traits::RenderBackend;

/// The geometry classification a pass asks the scene to submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryClass {
    /// All geometry in one submission.
    All,
    /// Opaque geometry only.
    Opaque,
    /// Transparent geometry only.
    Transparent,
}

/// A user-defined key/value variable attached to a scene file.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneValue {
    /// A string value (e.g. the `sky_box` texture path).
    String(String),
    /// A floating-point value (e.g. `opacity_scale`).
    Float(f64),
}

/// The scene collaborator the orchestrator renders.
///
/// Scene/model loading, camera controllers, and asset management live
/// behind this trait; the orchestrator only consumes the handles and draw
/// submissions it needs.
pub trait SceneSource {
    /// The active camera's current view-projection matrix.
    fn camera_view_projection(&self) -> Mat4;

    /// Updates the active camera's aspect ratio after a resize.
    fn set_aspect_ratio(&mut self, aspect: f32);

    /// The number of lights in the scene.
    fn light_count(&self) -> usize;

    /// Whether at least one environment light probe exists. Drives the
    /// reflections feature toggle.
    fn has_light_probe(&self) -> bool;

    /// Looks up a user-defined scene variable.
    fn variable(&self, name: &str) -> Option<SceneValue>;

    /// Submits draw calls for the selected geometry class using the
    /// backend's currently bound framebuffer and program.
    fn render_geometry(&mut self, backend: &mut dyn RenderBackend, class: GeometryClass);
}

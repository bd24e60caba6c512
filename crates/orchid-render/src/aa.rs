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

//! Anti-aliasing mode selection and per-frame step gating.
//!
//! Exactly one [`AaMode`] is active at any time. Each mode implies a
//! different set of optional frame steps (multisample resolves, temporal
//! accumulation, edge filtering), exposed through [`FrameSteps`] so the
//! orchestrator never has to reason about the mode directly inside a pass.

use std::fmt;

use orchid_core::renderer::SampleCount;
use serde::{Deserialize, Serialize};

/// The anti-aliasing strategy applied to the frame.
///
/// The variants are mutually exclusive: switching modes tears down the
/// resources only the previous mode required (multisampled attachments,
/// the temporal history pair) and allocates the ones the new mode needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AaMode {
    /// No anti-aliasing. All targets are single-sampled.
    Off,
    /// Hardware multisampling at the given per-pixel sample count.
    Multisample(SampleCount),
    /// Temporal accumulation over a ping-pong history buffer pair.
    Temporal,
    /// A post-process edge-detection filter over the final image.
    EdgeFilter,
}

impl AaMode {
    /// The sample count the main frame targets must be allocated with.
    pub fn sample_count(&self) -> SampleCount {
        match self {
            AaMode::Multisample(count) => *count,
            _ => SampleCount::X1,
        }
    }

    /// Whether the lighting pass must emit per-pixel motion vectors.
    pub fn wants_motion_vectors(&self) -> bool {
        matches!(self, AaMode::Temporal)
    }

    /// Whether a history buffer pair must be kept alive across frames.
    pub fn wants_history(&self) -> bool {
        matches!(self, AaMode::Temporal)
    }

    /// The optional frame steps this mode enables.
    pub fn frame_steps(&self) -> FrameSteps {
        match self {
            AaMode::Off => FrameSteps::NONE,
            AaMode::Multisample(_) => FrameSteps {
                depth_resolve: true,
                color_resolve: true,
                ..FrameSteps::NONE
            },
            AaMode::Temporal => FrameSteps {
                temporal: true,
                ..FrameSteps::NONE
            },
            AaMode::EdgeFilter => FrameSteps {
                edge_filter: true,
                ..FrameSteps::NONE
            },
        }
    }
}

impl fmt::Display for AaMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AaMode::Off => write!(f, "Off"),
            AaMode::Multisample(count) => write!(f, "Multisample(x{})", count.as_u32()),
            AaMode::Temporal => write!(f, "Temporal"),
            AaMode::EdgeFilter => write!(f, "EdgeFilter"),
        }
    }
}

/// The optional steps a frame executes, as implied by the active [`AaMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSteps {
    /// Resolve the multisampled pre-pass depth to a single-sample texture.
    pub depth_resolve: bool,
    /// Resolve the multisampled color and normal attachments.
    pub color_resolve: bool,
    /// Run the temporal accumulation filter after tone mapping.
    pub temporal: bool,
    /// Run the edge-detection filter as the final step of the frame.
    pub edge_filter: bool,
}

impl FrameSteps {
    /// No optional steps. The baseline for [`AaMode::Off`].
    pub const NONE: Self = Self {
        depth_resolve: false,
        color_resolve: false,
        temporal: false,
        edge_filter: false,
    };
}

/// Tracks the active anti-aliasing mode and defers requested switches.
///
/// Mode switches never take effect mid-frame: a request is parked in
/// `pending` and applied by the orchestrator at the top of the next frame,
/// before any resource is touched.
#[derive(Debug)]
pub struct AaController {
    mode: AaMode,
    pending: Option<AaMode>,
}

impl AaController {
    /// Creates a controller with the given initial mode already active.
    pub fn new(initial: AaMode) -> Self {
        Self {
            mode: initial,
            pending: None,
        }
    }

    /// The currently active mode.
    pub fn mode(&self) -> AaMode {
        self.mode
    }

    /// Requests a switch to `mode`, deferred to the next frame boundary.
    ///
    /// Requesting the already-active mode cancels any pending switch.
    pub fn request(&mut self, mode: AaMode) {
        if mode == self.mode {
            self.pending = None;
        } else {
            self.pending = Some(mode);
        }
    }

    /// Applies a pending switch, returning the new mode if one took effect.
    ///
    /// Called by the orchestrator at the frame boundary only.
    pub fn apply_pending(&mut self) -> Option<AaMode> {
        let next = self.pending.take()?;
        self.mode = next;
        Some(next)
    }

    /// The optional frame steps of the active mode.
    pub fn frame_steps(&self) -> FrameSteps {
        self.mode.frame_steps()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modes_enable_mutually_exclusive_steps() {
        let modes = [
            AaMode::Off,
            AaMode::Multisample(SampleCount::X8),
            AaMode::Temporal,
            AaMode::EdgeFilter,
        ];
        for mode in modes {
            let steps = mode.frame_steps();
            // Resolve steps belong to multisampling only; temporal and edge
            // filtering never coexist with them or with each other.
            assert_eq!(steps.depth_resolve, steps.color_resolve);
            assert!(!(steps.color_resolve && steps.temporal));
            assert!(!(steps.color_resolve && steps.edge_filter));
            assert!(!(steps.temporal && steps.edge_filter));
        }
    }

    #[test]
    fn only_multisample_raises_the_sample_count() {
        assert_eq!(AaMode::Off.sample_count(), SampleCount::X1);
        assert_eq!(AaMode::Temporal.sample_count(), SampleCount::X1);
        assert_eq!(AaMode::EdgeFilter.sample_count(), SampleCount::X1);
        assert_eq!(
            AaMode::Multisample(SampleCount::X4).sample_count(),
            SampleCount::X4
        );
    }

    #[test]
    fn switch_requests_are_deferred_until_applied() {
        let mut controller = AaController::new(AaMode::Off);
        controller.request(AaMode::Temporal);
        assert_eq!(controller.mode(), AaMode::Off);
        assert_eq!(controller.apply_pending(), Some(AaMode::Temporal));
        assert_eq!(controller.mode(), AaMode::Temporal);
        assert_eq!(controller.apply_pending(), None);
    }

    #[test]
    fn rerequesting_the_active_mode_cancels_a_pending_switch() {
        let mut controller = AaController::new(AaMode::Off);
        controller.request(AaMode::EdgeFilter);
        controller.request(AaMode::Off);
        assert_eq!(controller.apply_pending(), None);
        assert_eq!(controller.mode(), AaMode::Off);
    }

    #[test]
    fn only_temporal_needs_motion_vectors_and_history() {
        assert!(AaMode::Temporal.wants_motion_vectors());
        assert!(AaMode::Temporal.wants_history());
        assert!(!AaMode::Multisample(SampleCount::X8).wants_history());
        assert!(!AaMode::Off.wants_motion_vectors());
    }

    #[test]
    fn display_names_are_stable() {
        assert_eq!(AaMode::Off.to_string(), "Off");
        assert_eq!(
            AaMode::Multisample(SampleCount::X8).to_string(),
            "Multisample(x8)"
        );
        assert_eq!(AaMode::Temporal.to_string(), "Temporal");
        assert_eq!(AaMode::EdgeFilter.to_string(), "EdgeFilter");
    }
}

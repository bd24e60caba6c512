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

//! # Orchid Render
//!
//! Frame render pipeline orchestration for the Orchid engine.
//!
//! This crate sequences the per-frame pass graph of a forward renderer:
//! depth pre-pass, cascaded shadow update, sky, lit opaque and transparent
//! geometry, multisample resolves, tone mapping, temporal accumulation,
//! ambient occlusion composite, and an edge-detection filter. It drives a
//! backend exclusively through the abstract contracts defined in
//! [`orchid_core::renderer`], so the same orchestration logic runs against
//! any conforming graphics device implementation.
//!
//! The central type is [`orchestrator::FrameOrchestrator`]; the remaining
//! modules supply the pieces it coordinates: anti-aliasing mode control,
//! frame-sized render target management, the feature toggle table, the
//! shadow visibility cache, and renderer configuration.

#![warn(missing_docs)]

pub mod aa;
pub mod config;
pub mod features;
pub mod materials;
pub mod orchestrator;
pub mod resources;
pub mod shadow;

pub use aa::{AaController, AaMode, FrameSteps};
pub use config::{FrameUniform, RendererConfig, ToneMapOperator};
pub use features::{FeatureId, FeatureToggleTable};
pub use orchestrator::{FrameOrchestrator, FrameStats, PassKind};
pub use resources::{FrameResourceSet, FrameTargets, HistoryPair};
pub use shadow::{ShadowCache, ShadowOutput};

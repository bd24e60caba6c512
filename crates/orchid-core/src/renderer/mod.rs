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

//! The public, backend-agnostic rendering contracts.
//!
//! This module is the "common language" of the frame orchestrator. It holds
//! the abstract traits ([`RenderBackend`], [`ProgramBackend`],
//! [`SceneSource`]), the data structures they exchange, and the error
//! hierarchy. A concrete graphics backend implements these traits; the
//! orchestrator in `orchid-render` drives them without knowing which
//! graphics API sits underneath.

pub mod api;
pub mod error;
pub mod traits;

pub use self::api::*;
pub use self::error::{RenderError, ResourceError, ShaderError};
pub use self::traits::{GeometryClass, ProgramBackend, RenderBackend, SceneSource, SceneValue};

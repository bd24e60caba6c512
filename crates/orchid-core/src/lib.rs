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

//! # Orchid Core
//!
//! Backend-agnostic contracts for the Orchid frame renderer: math
//! primitives, render-API data types, collaborator traits, and the error
//! hierarchy. This crate defines the 'what' of rendering; a concrete GPU
//! backend implements the traits and supplies the 'how'.

#![warn(missing_docs)]

pub mod math;
pub mod renderer;
pub mod utils;

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

//! Shader program handles and descriptors.

/// An opaque handle to a compiled shader program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProgramId(pub u64);

/// A preprocessor define injected into a shader as `name=value`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShaderDefine {
    /// The symbol name.
    pub name: String,
    /// The symbol value. Empty for flag-style defines.
    pub value: String,
}

impl ShaderDefine {
    /// Creates a define with a value (`name=value`).
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Creates a flag-style define with no value.
    pub fn flag(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: String::new(),
        }
    }
}

/// A description of a shader program to compile.
///
/// Every distinct define list is a distinct permutation; changing a define
/// requires compiling a new program, never patching a live one.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgramDescriptor {
    /// A human-readable label, used in logs and error messages.
    pub label: String,
    /// The shader source file to compile.
    pub source: String,
    /// The vertex-stage entry point. Empty when the source supplies a
    /// default vertex stage (depth-only and fullscreen programs).
    pub vs_entry: String,
    /// The fragment-stage entry point.
    pub fs_entry: String,
    /// The preprocessor defines selecting this permutation.
    pub defines: Vec<ShaderDefine>,
}

impl ProgramDescriptor {
    /// Creates a descriptor with no defines.
    pub fn new(
        label: impl Into<String>,
        source: impl Into<String>,
        vs_entry: impl Into<String>,
        fs_entry: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            source: source.into(),
            vs_entry: vs_entry.into(),
            fs_entry: fs_entry.into(),
            defines: Vec::new(),
        }
    }

    /// Returns `self` with the given define list.
    #[must_use]
    pub fn with_defines(mut self, defines: Vec<ShaderDefine>) -> Self {
        self.defines = defines;
        self
    }
}

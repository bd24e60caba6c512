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

//! Defines the hierarchy of error types for the rendering subsystem.
//!
//! Hard failures (target allocation, shader permutation compilation,
//! resource binds) abort the current frame and are surfaced to the caller;
//! the previously presented image stays on screen. Soft conditions
//! (disabled features, absent optional resources) are not errors and are
//! handled by skipping the dependent pass.

use crate::renderer::api::ProgramId;
use std::fmt;

/// An error related to the loading or compilation of a shader program.
#[derive(Debug)]
pub enum ShaderError {
    /// An error occurred while trying to load the shader source from a path.
    LoadError {
        /// The path of the file that failed to load.
        path: String,
        /// The underlying I/O or source error.
        source_error: String,
    },
    /// The shader permutation failed to compile.
    ///
    /// The previously compiled permutation must not be silently reused:
    /// rendering with stale preprocessor defines produces incorrect output.
    CompilationError {
        /// A descriptive label for the program.
        label: String,
        /// Detailed error messages from the shader compiler.
        details: String,
    },
    /// The requested program could not be found.
    NotFound {
        /// The ID of the program that was not found.
        id: ProgramId,
    },
}

impl fmt::Display for ShaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderError::LoadError { path, source_error } => {
                write!(
                    f,
                    "Failed to load shader source from '{path}': {source_error}"
                )
            }
            ShaderError::CompilationError { label, details } => {
                write!(f, "Shader compilation failed for '{label}': {details}")
            }
            ShaderError::NotFound { id } => {
                write!(f, "Shader program not found for ID: {id:?}")
            }
        }
    }
}

impl std::error::Error for ShaderError {}

/// An error related to the creation or use of a GPU resource.
#[derive(Debug)]
pub enum ResourceError {
    /// A render target or texture could not be allocated or resized.
    ///
    /// Fatal to the frame: rendering cannot proceed without its targets,
    /// so this is propagated, never retried.
    AllocationFailed {
        /// A descriptive label for the resource.
        label: String,
        /// Detailed error messages from the backend.
        details: String,
    },
    /// The handle used to reference a resource is invalid or stale.
    InvalidHandle,
    /// A shader-specific error occurred.
    Shader(ShaderError),
    /// An error originating from the concrete graphics backend.
    Backend(String),
}

impl fmt::Display for ResourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceError::AllocationFailed { label, details } => {
                write!(f, "Failed to allocate '{label}': {details}")
            }
            ResourceError::InvalidHandle => write!(f, "Invalid or stale resource handle."),
            ResourceError::Shader(err) => write!(f, "Shader resource error: {err}"),
            ResourceError::Backend(msg) => write!(f, "Backend-specific resource error: {msg}"),
        }
    }
}

impl std::error::Error for ResourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ResourceError::Shader(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ShaderError> for ResourceError {
    fn from(err: ShaderError) -> Self {
        ResourceError::Shader(err)
    }
}

/// A high-level error surfaced by the frame orchestrator.
#[derive(Debug)]
pub enum RenderError {
    /// An operation was attempted before the orchestrator had a scene bound.
    NotInitialized,
    /// An error occurred while managing a GPU resource.
    Resource(ResourceError),
    /// The backend failed to bind a program or resource for a pass.
    ProgramBindFailed {
        /// The ID of the program that could not be bound.
        program: ProgramId,
    },
    /// A critical, unrecoverable rendering operation failed.
    RenderingFailed(String),
    /// An unexpected or internal error occurred.
    Internal(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::NotInitialized => {
                write!(f, "The frame orchestrator has no scene bound.")
            }
            RenderError::Resource(err) => {
                write!(f, "Graphics resource operation failed: {err}")
            }
            RenderError::ProgramBindFailed { program } => {
                write!(f, "Failed to bind program {program:?} for a pass.")
            }
            RenderError::RenderingFailed(msg) => {
                write!(f, "A critical rendering operation failed: {msg}")
            }
            RenderError::Internal(msg) => {
                write!(f, "An internal or unexpected error occurred: {msg}")
            }
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Resource(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ResourceError> for RenderError {
    fn from(err: ResourceError) -> Self {
        RenderError::Resource(err)
    }
}

impl From<ShaderError> for RenderError {
    fn from(err: ShaderError) -> Self {
        RenderError::Resource(ResourceError::Shader(err))
    }
}

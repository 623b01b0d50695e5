// Copyright 2025 the opal authors
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

//! The error hierarchy for pipeline-state compilation and render-target
//! construction.
//!
//! All failures at this layer are unrecoverable for the operation that
//! produced them: construction either fully succeeds or returns one of
//! these errors with no partially built object left alive.

use std::fmt;

/// An error raised while translating descriptors into backend state.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphicsError {
    /// A descriptor was malformed or described an unsupported combination
    /// (missing shader set, color attachment without a texture, unmapped
    /// enum value, attachment resolution mismatch, ...).
    InvalidArgument {
        /// Human-readable description of the rejected combination.
        message: String,
    },
    /// A count in the descriptor exceeded a device limit.
    LimitExceeded {
        /// The limited quantity (e.g. "patch control points").
        what: &'static str,
        /// The value the descriptor asked for.
        requested: u32,
        /// The device's limit for that quantity.
        limit: u32,
    },
    /// An underlying native resource-creation call reported failure.
    NativeOperationFailed {
        /// The native operation that failed (e.g. "create_surface").
        operation: &'static str,
        /// Detailed error messages from the backend.
        details: String,
    },
}

impl GraphicsError {
    /// Shorthand for an [`GraphicsError::InvalidArgument`] from anything
    /// displayable.
    pub fn invalid(message: impl Into<String>) -> Self {
        GraphicsError::InvalidArgument {
            message: message.into(),
        }
    }
}

impl fmt::Display for GraphicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphicsError::InvalidArgument { message } => {
                write!(f, "Invalid argument: {message}")
            }
            GraphicsError::LimitExceeded {
                what,
                requested,
                limit,
            } => {
                write!(
                    f,
                    "Device limit exceeded for {what}: {requested} requested, but limit is {limit}"
                )
            }
            GraphicsError::NativeOperationFailed { operation, details } => {
                write!(f, "Native operation '{operation}' failed: {details}")
            }
        }
    }
}

impl std::error::Error for GraphicsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_display() {
        let err = GraphicsError::invalid("color attachment requires a texture");
        assert_eq!(
            format!("{err}"),
            "Invalid argument: color attachment requires a texture"
        );
    }

    #[test]
    fn limit_exceeded_names_both_values() {
        let err = GraphicsError::LimitExceeded {
            what: "patch control points",
            requested: 48,
            limit: 32,
        };
        let text = format!("{err}");
        assert!(text.contains("48"));
        assert!(text.contains("32"));
        assert!(text.contains("patch control points"));
    }

    #[test]
    fn native_failure_display() {
        let err = GraphicsError::NativeOperationFailed {
            operation: "create_view",
            details: "out of device memory".to_string(),
        };
        assert_eq!(
            format!("{err}"),
            "Native operation 'create_view' failed: out of device memory"
        );
    }
}

//! Error types raised by the host side of the type model

use crate::descriptor::Visibility;

/// Result type for host operations (argument extraction, constructor bodies)
pub type HostResult<T> = Result<T, HostError>;

/// Failures reported by the host type system
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HostError {
    /// A value did not have the expected runtime type
    #[error("Type mismatch: expected {expected}, got {got}")]
    TypeMismatch {
        /// Expected type name
        expected: String,
        /// Actual type name
        got: String,
    },

    /// Invalid or missing argument
    #[error("Argument error: {0}")]
    ArgumentError(String),

    /// A non-public constructor was invoked without privileged access
    #[error("Illegal access: {visibility} constructor of {type_name}")]
    IllegalAccess {
        /// Name of the type whose constructor was refused
        type_name: String,
        /// Declared visibility of that constructor
        visibility: Visibility,
    },

    /// Constructor body panicked
    #[error("Constructor panicked: {0}")]
    Panic(String),

    /// Constructor body reported a failure
    #[error("{0}")]
    Failed(String),
}

impl From<String> for HostError {
    fn from(s: String) -> Self {
        HostError::Failed(s)
    }
}

impl From<&str> for HostError {
    fn from(s: &str) -> Self {
        HostError::Failed(s.to_string())
    }
}

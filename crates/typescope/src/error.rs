//! Inspector errors

use thiserror::Error;
use typescope_sdk::HostError;

/// Result type for inspector operations
pub type InspectResult<T> = Result<T, InspectError>;

/// Failures of constructor resolution and instantiation.
///
/// Field and method enumeration never fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InspectError {
    /// No declared constructor accepts the argument list
    #[error("No matching constructor for {type_name}({})", .arguments.join(", "))]
    NoMatchingConstructor {
        /// Type being constructed
        type_name: String,
        /// Runtime type names of the supplied arguments
        arguments: Vec<String>,
    },

    /// More than one constructor accepts the argument list (only when
    /// ambiguity is configured to be rejected)
    #[error("Ambiguous constructor for {type_name}: {candidates} candidates match")]
    AmbiguousConstructor {
        /// Type being constructed
        type_name: String,
        /// Number of compatible constructors
        candidates: usize,
    },

    /// The selected constructor ran and failed
    #[error("Construction of {type_name} failed: {source}")]
    ConstructionFailed {
        /// Type being constructed
        type_name: String,
        /// Failure reported by the constructor
        #[source]
        source: HostError,
    },
}

impl InspectError {
    pub(crate) fn construction_failed(type_name: &str, source: HostError) -> Self {
        InspectError::ConstructionFailed {
            type_name: type_name.to_string(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_no_match_message() {
        let err = InspectError::NoMatchingConstructor {
            type_name: "Point".to_string(),
            arguments: vec!["String".to_string(), "String".to_string()],
        };
        assert_eq!(err.to_string(), "No matching constructor for Point(String, String)");
    }

    #[test]
    fn test_construction_failed_source() {
        let err = InspectError::construction_failed("Point", HostError::Failed("negative".into()));
        assert!(err.to_string().contains("negative"));
        assert!(err.source().is_some());
    }
}

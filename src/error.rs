//! Error types for breadth-first search
//!
//! Two tiers of failure exist:
//! - Input-contract violations (a mapping graph without an entry for a
//!   reachable node) abort the search immediately.
//! - Exhaustion is not an error: it is reported as `Ok(None)` / `found = false`.
//!
//! The remaining variants cover cancellation and option loading.

mod macros;

use thiserror::Error;

/// Broad category of a [`SearchError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller supplied a graph that does not honour the adjacency contract
    Contract,
    /// The search was cancelled through its interrupt flag
    Interrupted,
    /// Search options could not be loaded or are invalid
    Config,
}

/// Errors that can occur while running or configuring a search
#[derive(Error, Debug)]
pub enum SearchError {
    // Contract violations
    #[error("node has no adjacency entry: {node}")]
    MissingAdjacency { node: String },

    // Cancellation
    #[error("search interrupted after {dequeued} dequeued paths")]
    Interrupted { dequeued: usize },

    // Configuration
    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SearchError {
    /// Create the lookup error for a node missing from a mapping graph
    pub fn missing_adjacency(node: &impl std::fmt::Debug) -> Self {
        SearchError::MissingAdjacency {
            node: format!("{:?}", node),
        }
    }

    /// Create an error for an invalid option value
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        SearchError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            SearchError::MissingAdjacency { .. } => ErrorKind::Contract,
            SearchError::Interrupted { .. } => ErrorKind::Interrupted,
            SearchError::InvalidValue { .. }
            | SearchError::Io(_)
            | SearchError::Toml(_)
            | SearchError::Json(_) => ErrorKind::Config,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            SearchError::MissingAdjacency { .. } => "missing_adjacency",
            SearchError::Interrupted { .. } => "interrupted",
            SearchError::InvalidValue { .. } => "invalid_value",
            SearchError::Io(_) => "io_error",
            SearchError::Toml(_) => "toml_error",
            SearchError::Json(_) => "json_error",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        let kind = match self.kind() {
            ErrorKind::Contract => "contract",
            ErrorKind::Interrupted => "interrupted",
            ErrorKind::Config => "config",
        };

        serde_json::json!({
            "error": {
                "kind": kind,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for search operations
pub type Result<T> = std::result::Result<T, SearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_adjacency_uses_debug_rendering() {
        let err = SearchError::missing_adjacency(&"z");
        assert_eq!(err.to_string(), "node has no adjacency entry: \"z\"");
        assert_eq!(err.kind(), ErrorKind::Contract);
    }

    #[test]
    fn test_invalid_value_is_config_error() {
        let err = SearchError::invalid_value("max_nodes", 0);
        assert_eq!(err.to_string(), "invalid max_nodes: 0");
        assert_eq!(err.kind(), ErrorKind::Config);
        assert_eq!(err.error_type(), "invalid_value");
    }

    #[test]
    fn test_to_json_shape() {
        let err = SearchError::Interrupted { dequeued: 7 };
        let json = err.to_json();
        assert_eq!(json["error"]["kind"], "interrupted");
        assert_eq!(json["error"]["type"], "interrupted");
        assert_eq!(
            json["error"]["message"],
            "search interrupted after 7 dequeued paths"
        );
    }
}

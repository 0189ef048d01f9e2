//! Error macros for bfs-path

/// Macro for creating the lookup error of a mapping graph
#[macro_export]
macro_rules! missing_adjacency {
    ($node:expr) => {
        $crate::error::SearchError::missing_adjacency($node)
    };
}

/// Macro for rejecting an invalid option value
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::SearchError::invalid_value($context, $value))
    };
}

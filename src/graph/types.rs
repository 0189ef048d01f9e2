use serde::Serialize;

/// Counters collected while a search runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TraversalStats {
    /// Paths taken off the frontier and tested
    pub dequeued: usize,
    /// Paths pushed onto the frontier, including the start path
    pub enqueued: usize,
    /// Calls made to the neighbor source
    pub neighbor_lookups: usize,
    /// Peak frontier length
    pub max_frontier: usize,
    /// Final size of the visited set
    pub visited: usize,
}

/// Outcome of a bounded search
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathResult<N> {
    pub found: bool,
    /// Shortest satisfying path, start and satisfying node included
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<N>>,
    /// Edge count of `path`; 0 when nothing was found
    pub path_length: usize,
    /// A depth, node or fanout bound stopped the expansion of at least one path
    pub truncated: bool,
    pub stats: TraversalStats,
}

impl<N> PathResult<N> {
    pub(crate) fn new(path: Option<Vec<N>>, truncated: bool, stats: TraversalStats) -> Self {
        PathResult {
            found: path.is_some(),
            path_length: path.as_ref().map_or(0, |p| p.len().saturating_sub(1)),
            path,
            truncated,
            stats,
        }
    }

    pub fn into_path(self) -> Option<Vec<N>> {
        self.path
    }
}

impl<N: Serialize> PathResult<N> {
    /// Render the result as JSON
    pub fn to_json(&self) -> crate::error::Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

//! Breadth-first path finding
//!
//! - `traversal`: neighbor resolution over mappings and generator functions
//! - `target`: literal and predicate termination tests
//! - `bfs`: the traversal engine
//! - `types`: search results and counters

pub mod bfs;
pub mod target;
pub mod traversal;
pub mod types;

pub use bfs::{search, search_with};
pub use target::Target;
pub use traversal::{FromFn, Graph, NeighborSource};
pub use types::{PathResult, TraversalStats};

//! Generic breadth-first shortest-path search.
//!
//! A graph is either a finite adjacency mapping or a neighbor generator that
//! may describe an infinite graph. The end of the search is either a literal
//! node or a predicate over the whole path walked so far.
//!
//! ```
//! use std::collections::HashMap;
//! use bfs_path::{search, FromFn, Target};
//!
//! let graph: HashMap<&str, Vec<&str>> =
//!     [("a", vec!["b"]), ("b", vec!["a", "c"]), ("c", vec!["b"])].into_iter().collect();
//! assert_eq!(search(&graph, "a", &Target::node("c")).unwrap(), Some(vec!["a", "b", "c"]));
//!
//! let successors = FromFn(|n: &i64| vec![n + 1, n + 2]);
//! assert_eq!(search(&successors, 0, &Target::node(3)).unwrap(), Some(vec![0, 1, 3]));
//!
//! let cycle: HashMap<&str, Vec<&str>> =
//!     [("a", vec!["b"]), ("b", vec!["c"]), ("c", vec!["d"]), ("d", vec!["a"])].into_iter().collect();
//! let longer_than_two = Target::predicate(|path: &[&str]| path.len() > 2);
//! assert_eq!(search(&cycle, "a", &longer_than_two).unwrap(), Some(vec!["a", "b", "c"]));
//!
//! let one_way: HashMap<&str, Vec<&str>> =
//!     [("a", vec!["b"]), ("b", vec!["a"]), ("c", vec!["b"])].into_iter().collect();
//! assert_eq!(search(&one_way, "a", &Target::node("c")).unwrap(), None);
//! ```

pub mod config;
pub mod error;
pub mod graph;
pub mod logging;

pub use config::SearchOptions;
pub use error::{ErrorKind, Result, SearchError};
pub use graph::{
    search, search_with, FromFn, Graph, NeighborSource, PathResult, Target, TraversalStats,
};

mod path;

use crate::config::SearchOptions;
use crate::error::{Result, SearchError};
use crate::graph::target::Target;
use crate::graph::types::{PathResult, TraversalStats};
use crate::graph::NeighborSource;
use crate::{log_traversal_stats, trace_time};
use std::collections::{HashSet, VecDeque};
use std::fmt::Debug;
use std::hash::Hash;
use std::time::Instant;

fn depth_exhausted(opts: &SearchOptions, depth: usize) -> bool {
    opts.max_depth.is_some_and(|max| depth >= max)
}

fn node_budget_exhausted(opts: &SearchOptions, visited: &HashSet<impl Eq + Hash>) -> bool {
    opts.max_nodes.is_some_and(|max| visited.len() >= max)
}

/// Queue-driven level-order search; the first path satisfying `is_reached` is returned.
///
/// A node enters `visited` when it is enqueued, never when dequeued, so each
/// node is expanded at most once and cycles cannot loop.
fn bfs_search<N, G, T>(
    graph: &G,
    start: N,
    is_reached: T,
    opts: &SearchOptions,
) -> Result<PathResult<N>>
where
    N: Clone + Eq + Hash + Debug,
    G: NeighborSource<N> + ?Sized,
    T: Fn(&[N]) -> bool,
{
    let mut stats = TraversalStats::default();
    let mut visited: HashSet<N> = HashSet::new();
    let mut queue: VecDeque<Vec<N>> = VecDeque::new();
    let mut truncated = false;

    visited.insert(start.clone());
    queue.push_back(vec![start]);
    stats.enqueued = 1;
    stats.max_frontier = 1;

    while let Some(current) = queue.pop_front() {
        if opts.interrupted() {
            tracing::warn!(dequeued = stats.dequeued, "search interrupted");
            return Err(SearchError::Interrupted {
                dequeued: stats.dequeued,
            });
        }
        stats.dequeued += 1;

        if is_reached(&current) {
            stats.visited = visited.len();
            return Ok(PathResult::new(Some(current), truncated, stats));
        }

        let Some(last) = current.last() else {
            continue;
        };
        let neighbors = graph.neighbors(last)?;
        stats.neighbor_lookups += 1;

        // Bounds only count as truncation when they hold back an unvisited neighbor
        let depth = current.len() - 1;
        let fanout = opts.max_fanout.unwrap_or(usize::MAX);
        for (rank, neighbor) in neighbors.iter().enumerate() {
            if visited.contains(neighbor) {
                continue;
            }

            if depth_exhausted(opts, depth)
                || rank >= fanout
                || node_budget_exhausted(opts, &visited)
            {
                truncated = true;
                break;
            }

            visited.insert(neighbor.clone());
            queue.push_back(path::extend(&current, neighbor.clone()));
            stats.enqueued += 1;
        }

        stats.max_frontier = stats.max_frontier.max(queue.len());
        tracing::trace!(node = ?last, depth, frontier = queue.len(), "expanded");
    }

    stats.visited = visited.len();
    Ok(PathResult::new(None, truncated, stats))
}

/// Find the shortest (fewest-edges) path from `start` to a node satisfying `target`.
///
/// Returns `Ok(Some(path))` with `start` and the satisfying node included,
/// `Ok(None)` when every reachable node was explored without success, and
/// `Err(SearchError::MissingAdjacency)` when a mapping graph has no entry for
/// a node that had to be expanded.
///
/// Among several shortest paths, the one following the earliest neighbors in
/// resolution order wins. No bound is applied: over an unbounded generator
/// graph this only returns once the target is reached; use [`search_with`]
/// to bound the search.
pub fn search<N, G>(graph: &G, start: N, target: &Target<'_, N>) -> Result<Option<Vec<N>>>
where
    N: Clone + Eq + Hash + Debug,
    G: NeighborSource<N> + ?Sized,
{
    search_with(graph, start, target, &SearchOptions::default()).map(PathResult::into_path)
}

/// Same as [`search`], honouring the bounds and interrupt flag in `opts`.
///
/// Options are validated first, so a zero node or fanout bound fails with
/// `SearchError::InvalidValue`. `truncated` is set only when a bound kept an
/// unvisited neighbor out of the frontier; nodes at the depth limit are still
/// resolved to find out. A raised interrupt flag fails with
/// `SearchError::Interrupted`.
#[tracing::instrument(skip_all, fields(start = ?start, max_depth = ?opts.max_depth, max_nodes = ?opts.max_nodes, max_fanout = ?opts.max_fanout))]
pub fn search_with<N, G>(
    graph: &G,
    start: N,
    target: &Target<'_, N>,
    opts: &SearchOptions,
) -> Result<PathResult<N>>
where
    N: Clone + Eq + Hash + Debug,
    G: NeighborSource<N> + ?Sized,
{
    opts.validate()?;
    let started = Instant::now();

    let result = match target {
        Target::Node(end) => bfs_search(graph, start, |p: &[N]| p.last() == Some(end), opts)?,
        Target::Predicate(f) => bfs_search(graph, start, |p: &[N]| f(p), opts)?,
    };

    if result.found {
        tracing::debug!(path_length = result.path_length, "path found");
    } else {
        tracing::debug!(truncated = result.truncated, "search exhausted");
    }
    log_traversal_stats!(result.stats, "search");
    trace_time!(started, "search_with");

    Ok(result)
}

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::{BuildHasher, Hash};

use crate::error::Result;
use crate::missing_adjacency;

/// Trait for resolving the outgoing neighbors of a node
///
/// Implementations must be free of side effects and idempotent: the engine
/// calls `neighbors` once per dequeued path and may call it again for the
/// same node in a later search.
///
/// Sources may describe unbounded graphs. A search over such a source only
/// returns once the target is reached or a bound in
/// [`SearchOptions`](crate::config::SearchOptions) prunes the frontier; with a
/// literal target that is never generated it does not terminate.
pub trait NeighborSource<N: Clone> {
    /// Neighbors of `node` in exploration order
    fn neighbors(&self, node: &N) -> Result<Cow<'_, [N]>>;
}

impl<N, S> NeighborSource<N> for HashMap<N, Vec<N>, S>
where
    N: Clone + Eq + Hash + fmt::Debug,
    S: BuildHasher,
{
    fn neighbors(&self, node: &N) -> Result<Cow<'_, [N]>> {
        self.get(node)
            .map(|adjacent| Cow::Borrowed(adjacent.as_slice()))
            .ok_or_else(|| missing_adjacency!(node))
    }
}

impl<N> NeighborSource<N> for BTreeMap<N, Vec<N>>
where
    N: Clone + Ord + fmt::Debug,
{
    fn neighbors(&self, node: &N) -> Result<Cow<'_, [N]>> {
        self.get(node)
            .map(|adjacent| Cow::Borrowed(adjacent.as_slice()))
            .ok_or_else(|| missing_adjacency!(node))
    }
}

/// Neighbor source backed by a generator function
///
/// The function is invoked lazily for each expanded node, so it can describe
/// graphs that are never materialized.
#[derive(Clone, Copy)]
pub struct FromFn<F>(pub F);

impl<N, F> NeighborSource<N> for FromFn<F>
where
    N: Clone,
    F: Fn(&N) -> Vec<N>,
{
    fn neighbors(&self, node: &N) -> Result<Cow<'_, [N]>> {
        Ok(Cow::Owned((self.0)(node)))
    }
}

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FromFn(..)")
    }
}

/// A graph in one of its two representations
///
/// Useful when the representation is chosen at runtime; when it is known
/// statically, pass the map or a [`FromFn`] directly.
pub enum Graph<'a, N> {
    /// Finite adjacency mapping; every reachable node needs an entry
    Adjacency(HashMap<N, Vec<N>>),
    /// Neighbor generator, possibly describing an infinite graph
    Neighbors(Box<dyn Fn(&N) -> Vec<N> + 'a>),
}

impl<'a, N> Graph<'a, N>
where
    N: Eq + Hash,
{
    pub fn adjacency(map: HashMap<N, Vec<N>>) -> Self {
        Graph::Adjacency(map)
    }

    pub fn from_fn(f: impl Fn(&N) -> Vec<N> + 'a) -> Self {
        Graph::Neighbors(Box::new(f))
    }
}

impl<N> NeighborSource<N> for Graph<'_, N>
where
    N: Clone + Eq + Hash + fmt::Debug,
{
    fn neighbors(&self, node: &N) -> Result<Cow<'_, [N]>> {
        match self {
            Graph::Adjacency(map) => map.neighbors(node),
            Graph::Neighbors(f) => Ok(Cow::Owned(f(node))),
        }
    }
}

impl<N> FromIterator<(N, Vec<N>)> for Graph<'_, N>
where
    N: Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = (N, Vec<N>)>>(iter: I) -> Self {
        Graph::Adjacency(iter.into_iter().collect())
    }
}

impl<N: fmt::Debug> fmt::Debug for Graph<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Graph::Adjacency(map) => f.debug_tuple("Adjacency").field(map).finish(),
            Graph::Neighbors(_) => f.write_str("Neighbors(..)"),
        }
    }
}

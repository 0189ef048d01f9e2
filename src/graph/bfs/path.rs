//! Path extension for the frontier queue

/// Derive a child path: the parent followed by `node`
///
/// Enqueued paths are never mutated, so each child gets its own copy.
pub fn extend<N: Clone>(parent: &[N], node: N) -> Vec<N> {
    let mut child = Vec::with_capacity(parent.len() + 1);
    child.extend_from_slice(parent);
    child.push(node);
    child
}

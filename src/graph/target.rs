use std::fmt;

/// Termination condition of a search
pub enum Target<'a, N> {
    /// Stop at the first path whose last node equals this value
    Node(N),
    /// Stop at the first path, taken as a whole, for which the predicate holds
    Predicate(Box<dyn Fn(&[N]) -> bool + 'a>),
}

impl<'a, N> Target<'a, N> {
    pub fn node(node: N) -> Self {
        Target::Node(node)
    }

    pub fn predicate(f: impl Fn(&[N]) -> bool + 'a) -> Self {
        Target::Predicate(Box::new(f))
    }
}

impl<N: fmt::Debug> fmt::Debug for Target<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Node(node) => f.debug_tuple("Node").field(node).finish(),
            Target::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

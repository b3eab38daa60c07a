/// Outcome of measuring a subtree while checking the AVL condition.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Height {
    /// Every node in the subtree satisfies the AVL condition and the subtree has this many levels.
    Balanced(usize),
    /// Some node in the subtree has children whose heights differ by more than one.
    Unbalanced,
}

impl Height {
    /// Combines the heights of a node's two children into the node's own height.
    pub(crate) fn join(left: Self, right: Self) -> Self {
        match (left, right) {
            (Self::Balanced(l), Self::Balanced(r)) if l.abs_diff(r) <= 1 => Self::Balanced(l.max(r) + 1),
            _ => Self::Unbalanced,
        }
    }
}

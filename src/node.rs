use std::sync::Arc;

/// A single level of the trie.
///
/// A node's slot kind — child reference or element — is implicit in which
/// variant it is, not something checked per-slot at runtime: every internal
/// level of the trie is a `Branch`, and the bottom level is always a `Leaf`.
/// Both hold exactly `B` slots.
pub(crate) enum Node<T: Clone, const B: usize> {
    Branch([Option<Arc<Node<T, B>>>; B]),
    Leaf([Option<T>; B]),
}

impl<T: Clone, const B: usize> Clone for Node<T, B> {
    fn clone(&self) -> Self {
        match self {
            Node::Branch(children) => Node::Branch(children.clone()),
            Node::Leaf(elements) => Node::Leaf(elements.clone()),
        }
    }
}

impl<T: Clone, const B: usize> Node<T, B> {
    pub(crate) fn empty_branch() -> Self {
        Node::Branch(std::array::from_fn(|_| None))
    }

    pub(crate) fn empty_leaf() -> Self {
        Node::Leaf(std::array::from_fn(|_| None))
    }
}

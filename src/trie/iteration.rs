use crate::node::{Node, NodeId};

/// Iterator over a sibling list, i.e., the children of one node in insertion order.
#[derive(Debug, Clone)]
pub struct Children<'trie> {
    nodes: &'trie [Node],
    next: Option<NodeId>,
}

impl<'trie> Children<'trie> {
    pub(super) fn new(nodes: &'trie [Node], first: Option<NodeId>) -> Self {
        Self { nodes, next: first }
    }
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.nodes[current.index()].sibling;
        Some(current)
    }
}

/// External pre-order depth-first iterator over the leafs of a trie.
#[derive(Debug, Clone)]
pub struct Leaves<'trie> {
    nodes: &'trie [Node],

    /// A worklist of nodes still to process. Each entry is the first not yet visited node of a
    /// sibling list, so the list is continued after the subtrie of the visited node is done.
    node_stack: Vec<NodeId>,
}

impl<'trie> Leaves<'trie> {
    pub(super) fn new(nodes: &'trie [Node], first: Option<NodeId>) -> Self {
        Self {
            nodes,
            node_stack: first.into_iter().collect(),
        }
    }
}

impl Iterator for Leaves<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        while let Some(id) = self.node_stack.pop() {
            let node = &self.nodes[id.index()];
            if let Some(sibling) = node.sibling {
                self.node_stack.push(sibling);
            }
            match node.first_child {
                // Process the children next, i.e., depth-first traversal.
                Some(child) => self.node_stack.push(child),
                None => return Some(id),
            }
        }
        None
    }
}

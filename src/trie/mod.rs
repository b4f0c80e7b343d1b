// see https://en.wikipedia.org/wiki/Radix_tree

mod builder;
mod iteration;
mod render;


pub use builder::Builder;
pub use iteration::{Children, Leaves};

use crate::error::BuildError;
use crate::node::{Node, NodeId};

/// A compressed trie over a borrowed word list.
///
/// Nodes do not own any characters, they reference substrings of `words`, which therefore must
/// outlive the trie. The trie is immutable once built, so it can be shared between threads for
/// concurrent queries.
#[derive(Debug, Clone)]
pub struct Trie<'w, S> {
    words: &'w [S],

    // Arena of all nodes, `NodeId::ROOT` is the root. Nodes are only ever appended.
    nodes: Vec<Node>,
}

/// Builds a trie by inserting all `words` one at a time, in order from first to last.
/// Fails on the first word that is empty, a duplicate, or in a prefix relation with an earlier word.
pub fn build<S: AsRef<str>>(words: &[S]) -> Result<Trie<'_, S>, BuildError> {
    Trie::build(words)
}

impl<'w, S: AsRef<str>> Trie<'w, S> {
    pub fn build(words: &'w [S]) -> Result<Self, BuildError> {
        let mut builder = Builder::new(words);
        for index in 0..words.len() {
            builder.insert(index)?;
        }
        Ok(builder.finish())
    }

    // Accessors:

    pub fn words(&self) -> &'w [S] {
        self.words
    }

    pub fn root(&self) -> &Node {
        self.node(NodeId::ROOT)
    }

    pub fn root_id(&self) -> NodeId {
        NodeId::ROOT
    }

    /// # Panics
    ///
    /// If `id` does not belong to this trie.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children::new(&self.nodes, self.node(id).first_child)
    }

    /// Depth-first (pre-order) iterator over all leafs, i.e., one per stored word.
    pub fn leaves(&self) -> Leaves<'_> {
        Leaves::new(&self.nodes, self.root().first_child)
    }

    /// Returns the number of words (i.e., leafs) in the trie.
    /// O(n), where n is the number of nodes in the trie.
    pub fn len(&self) -> usize {
        self.leaves().count()
    }

    /// O(1).
    pub fn is_empty(&self) -> bool {
        self.root().first_child.is_none()
    }

    /// Number of nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The text from the root down to and including the node, empty for the root.
    pub fn path_text(&self, id: NodeId) -> &'w str {
        match self.node(id).substr {
            Some(substr) => substr.path_text(self.words),
            None => "",
        }
    }

    /// Index into the word list of the word a leaf stands for.
    /// For interior nodes, this is the index of one of the words below it.
    /// `None` for the root.
    pub fn word_index(&self, id: NodeId) -> Option<usize> {
        self.node(id).substr.map(|substr| substr.word)
    }

    /// The full word represented by a leaf, or `None` if `id` is not a leaf.
    pub fn word(&self, id: NodeId) -> Option<&'w str> {
        let node = self.node(id);
        if node.is_leaf() {
            Some(self.path_text(id))
        } else {
            None
        }
    }

    // Queries:

    /// Returns the "completion list" for `prefix`, i.e., all leafs whose word starts with `prefix`.
    /// The order of the returned leafs is unspecified.
    /// Returns `None` (never an empty `Vec`) if no word starts with `prefix`.
    pub fn completions(&self, prefix: &str) -> Option<Vec<NodeId>> {
        let mut matches = Vec::new();

        // Instead of parent pointers, remember the siblings still to visit on each level above.
        let mut stack: Vec<NodeId> = self.root().first_child.into_iter().collect();
        let mut visited = 0;
        while let Some(id) = stack.pop() {
            visited += 1;
            assert!(visited <= self.nodes.len(), "cycle in the trie structure at {id:?}");

            let node = self.node(id);
            if let Some(sibling) = node.sibling {
                stack.push(sibling);
            }

            // The text from the beginning of the word, not just this node's own span.
            let text = self.path_text(id);
            if !(text.starts_with(prefix) || prefix.starts_with(text)) {
                // Neither is a prefix of the other, so nothing in this subtrie can match.
                continue;
            }
            match node.first_child {
                // The prefix must be fully consumed by the word of a leaf.
                None if prefix.len() <= text.len() => matches.push(id),
                None => {}
                Some(child) => stack.push(child),
            }
        }

        if matches.is_empty() {
            None
        } else {
            Some(matches)
        }
    }

    /// Whether `word` is one of the words in the trie.
    pub fn contains(&self, word: &str) -> bool {
        self.completions(word)
            .is_some_and(|leaves| leaves.into_iter().any(|leaf| self.path_text(leaf) == word))
    }
}

use log::{debug, trace};

use super::Trie;
use crate::error::BuildError;
use crate::longest_common_prefix::*;
use crate::node::{Node, NodeId, Substr};

/// Builds a [`Trie`] by inserting words of the list one at a time.
///
/// Unlike [`Trie::build`], a rejected word does not end the construction: the trie is left
/// unchanged and further words can be inserted.
#[derive(Debug, Clone)]
pub struct Builder<'w, S> {
    words: &'w [S],
    nodes: Vec<Node>,
}

impl<'w, S: AsRef<str>> Builder<'w, S> {
    pub fn new(words: &'w [S]) -> Self {
        Self {
            words,
            nodes: vec![Node::root()],
        }
    }

    /// Inserts `words[index]` and returns its new leaf.
    ///
    /// The resulting trie depends on the insertion order, in particular the order of siblings.
    ///
    /// # Errors
    ///
    /// If the word is empty, a duplicate of an inserted word, a proper prefix of an inserted word,
    /// or has an inserted word as a proper prefix. The trie is not modified in that case.
    ///
    /// # Panics
    ///
    /// If `index` is out of bounds of the word list.
    pub fn insert(&mut self, index: usize) -> Result<NodeId, BuildError> {
        let words = self.words;
        let word = words[index].as_ref();
        if word.is_empty() {
            return Err(self.rejected(BuildError::EmptyWord { index }));
        }

        // Length of the prefix of `word` matched by the nodes we descended into.
        let mut matched = 0;
        // The node whose children are currently scanned, and the last of them examined so far.
        let mut parent = NodeId::ROOT;
        let mut last_examined: Option<NodeId> = None;
        let mut current = self.nodes[NodeId::ROOT.index()].first_child;

        while let Some(id) = current {
            let node = &self.nodes[id.index()];
            let substr = match node.substr {
                Some(substr) => substr,
                None => unreachable!("only the root has no substring, and it is never a child"),
            };
            debug_assert_eq!(substr.start, matched, "node {id:?} does not start where its parent ends");

            let span = substr.text(words);
            let word_rest = &word[matched..];

            // This node's span continues the matched prefix, so descend into its children.
            if let Some(after) = word_rest.strip_prefix(span) {
                let existing = substr.word;
                match (node.first_child, after.is_empty()) {
                    (None, true) => return Err(self.rejected(BuildError::Duplicate { index, existing })),
                    (None, false) => return Err(self.rejected(BuildError::ExtendsExisting { index, existing })),
                    (Some(_), true) => return Err(self.rejected(BuildError::PrefixOfExisting { index, existing })),
                    (Some(first_child), false) => {
                        matched += span.len();
                        parent = id;
                        last_examined = None;
                        current = Some(first_child);
                        continue;
                    }
                }
            }

            let LcpResult { common_prefix, left_rest: word_suffix, right_rest: _ } = longest_common_prefix(word_rest, span);

            // Not even the first character matches, so try the next sibling.
            if common_prefix.is_empty() {
                last_examined = Some(id);
                current = node.sibling;
                continue;
            }

            // The word ends inside this node's span.
            if word_suffix.is_empty() {
                return Err(self.rejected(BuildError::PrefixOfExisting { index, existing: substr.word }));
            }

            // The word diverges inside this node's span.
            // -> Split this node into the common part and a new child with the rest of the span,
            // which takes over the current children.
            let split_at = substr.start + common_prefix.len();
            let tail = Node::new(
                Some(Substr::new(substr.word, split_at, substr.end)),
                node.first_child,
                None,
            );
            let tail = self.push(tail);
            let node = &mut self.nodes[id.index()];
            node.substr = Some(Substr::new(substr.word, substr.start, split_at));
            node.first_child = Some(tail);
            trace!("word {index}: split {substr} at {split_at}");

            matched += common_prefix.len();
            parent = id;
            last_examined = None;
            current = Some(tail);
        }

        // No node in the list continues the word, so append a leaf with the unmatched rest.
        let leaf = self.push(Node::leaf(Substr::new(index, matched, word.len())));
        match last_examined {
            Some(prev) => self.nodes[prev.index()].sibling = Some(leaf),
            None => self.nodes[parent.index()].first_child = Some(leaf),
        }
        trace!("word {index}: appended leaf {leaf:?} for {:?}", &word[matched..]);
        Ok(leaf)
    }

    pub fn finish(self) -> Trie<'w, S> {
        debug!("built trie over {} words with {} nodes", self.words.len(), self.nodes.len());
        Trie {
            words: self.words,
            nodes: self.nodes,
        }
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    fn rejected(&self, error: BuildError) -> BuildError {
        debug!("rejected word: {error}");
        error
    }
}

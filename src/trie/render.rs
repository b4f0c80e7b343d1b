//! Human readable rendering of the trie structure, for debugging.
//!
//! One line per node, children indented below their parent. The format is not stable.

use std::fmt;

use super::Trie;
use crate::node::NodeId;

const LEVEL_INDENTATION: &str = "  ";

impl<S: AsRef<str>> Trie<'_, S> {
    /// Renders the structure of the trie, e.g.:
    /// ```text
    /// root
    ///   "b" (0, 0..1)
    ///     "ear" (0, 1..4) -> 0
    ///     "ull" (1, 1..4) -> 1
    /// ```
    pub fn dump(&self) -> String {
        self.to_string()
    }

    fn render_node(&self, f: &mut fmt::Formatter<'_>, id: NodeId, level: usize) -> fmt::Result {
        let node = self.node(id);
        write!(f, "{}", LEVEL_INDENTATION.repeat(level))?;
        match node.substr {
            None => write!(f, "root")?,
            Some(substr) => {
                write!(f, "{:?} {substr}", substr.text(self.words))?;
                if node.is_leaf() {
                    write!(f, " -> {}", substr.word)?;
                }
            }
        }
        writeln!(f)?;
        for child in self.children(id) {
            self.render_node(f, child, level + 1)?;
        }
        Ok(())
    }
}

impl<S: AsRef<str>> fmt::Display for Trie<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render_node(f, self.root_id(), 0)
    }
}

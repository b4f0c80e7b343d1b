use std::fmt;

/// Index of a node in the arena of a [`Trie`](crate::Trie).
/// Stable for the lifetime of the trie, since nodes are never removed or moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub(crate) const ROOT: NodeId = NodeId(0);

    pub(crate) fn index(self) -> usize {
        self.0
    }
}

/// A slice of one word in the backing word list, i.e., `words[word][start..end]`.
///
/// Offsets are byte offsets and always lie on character boundaries.
/// A node's `start` is at the same time the length of the text matched by all of its ancestors,
/// which is why `words[word][..end]` is the full text from the root down to (and including) the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Substr {
    pub word: usize,
    pub start: usize,
    pub end: usize,
}

impl Substr {
    pub fn new(word: usize, start: usize, end: usize) -> Self {
        debug_assert!(start < end, "substring must not be empty: {start}..{end}");
        Substr { word, start, end }
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Always `false`, substrings stored in nodes are never empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The span of this substring only.
    pub fn text<'w, S: AsRef<str>>(&self, words: &'w [S]) -> &'w str {
        &words[self.word].as_ref()[self.start..self.end]
    }

    /// The text from the beginning of the word up to the end of this substring.
    pub fn path_text<'w, S: AsRef<str>>(&self, words: &'w [S]) -> &'w str {
        &words[self.word].as_ref()[..self.end]
    }
}

impl fmt::Display for Substr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}..{})", self.word, self.start, self.end)
    }
}

/// A node of the compressed trie.
///
/// The root has no substring. Interior nodes have a substring and at least two children.
/// Leafs have a substring and no children, their `Substr::word` identifies the word they stand for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Node {
    pub(crate) substr: Option<Substr>,
    // Head of the children list, continued via `sibling` of each child.
    pub(crate) first_child: Option<NodeId>,
    pub(crate) sibling: Option<NodeId>,
}

impl Node {
    pub fn new(substr: Option<Substr>, first_child: Option<NodeId>, sibling: Option<NodeId>) -> Self {
        Node { substr, first_child, sibling }
    }

    pub(crate) fn root() -> Self {
        Self::new(None, None, None)
    }

    pub(crate) fn leaf(substr: Substr) -> Self {
        Self::new(Some(substr), None, None)
    }

    pub fn substr(&self) -> Option<Substr> {
        self.substr
    }

    pub fn first_child(&self) -> Option<NodeId> {
        self.first_child
    }

    pub fn sibling(&self) -> Option<NodeId> {
        self.sibling
    }

    pub fn is_root(&self) -> bool {
        self.substr.is_none()
    }

    pub fn is_leaf(&self) -> bool {
        self.substr.is_some() && self.first_child.is_none()
    }
}

#[test]
fn substr_text() {
    let words = ["bear", "bell"];
    let substr = Substr::new(1, 2, 4);
    assert_eq!(substr.text(&words), "ll");
    assert_eq!(substr.path_text(&words), "bell");
    assert_eq!(substr.len(), 2);
    assert_eq!(substr.to_string(), "(1, 2..4)");
}

#[test]
fn node_kinds() {
    assert!(Node::root().is_root());
    assert!(!Node::root().is_leaf());

    let leaf = Node::leaf(Substr::new(0, 0, 4));
    assert!(leaf.is_leaf());
    assert!(!leaf.is_root());

    let interior = Node::new(Some(Substr::new(0, 0, 1)), Some(NodeId(1)), None);
    assert!(!interior.is_leaf());
    assert_eq!(interior.first_child(), Some(NodeId(1)));
    assert_eq!(interior.sibling(), None);
}

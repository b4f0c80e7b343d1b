//! Errors when inserting words into the trie.
//!
//! A rejected word never modifies the trie, so a [`Builder`](crate::Builder) stays usable afterwards.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// The word has no characters, so there is nothing a leaf could hold.
    #[error("word {index} is empty")]
    EmptyWord { index: usize },

    #[error("word {index} is a duplicate of word {existing}")]
    Duplicate { index: usize, existing: usize },

    /// The word ends inside the path of an already inserted word, so it would have no leaf of its own.
    #[error("word {index} is a proper prefix of word {existing}")]
    PrefixOfExisting { index: usize, existing: usize },

    /// An already inserted word is a proper prefix of this word, so that word's leaf would need children.
    #[error("word {existing} is a proper prefix of word {index}")]
    ExtendsExisting { index: usize, existing: usize },
}

impl BuildError {
    /// Index of the rejected word.
    pub fn index(&self) -> usize {
        match *self {
            BuildError::EmptyWord { index }
            | BuildError::Duplicate { index, .. }
            | BuildError::PrefixOfExisting { index, .. }
            | BuildError::ExtendsExisting { index, .. } => index,
        }
    }
}

//! A compressed trie (radix tree) over an immutable list of words, for prefix completion.
//!
//! Nodes do not copy any characters. Each node references a substring `(word, start, end)` of one
//! word in the borrowed list, and nodes are split when a newly inserted word diverges inside an
//! existing node's span.
//!
//! ```
//! let words = ["bear", "bull", "stock", "bell"];
//! let trie = range_trie::build(&words).unwrap();
//!
//! let mut completions: Vec<&str> = trie
//!     .completions("be")
//!     .unwrap()
//!     .into_iter()
//!     .filter_map(|leaf| trie.word(leaf))
//!     .collect();
//! completions.sort();
//! assert_eq!(completions, ["bear", "bell"]);
//!
//! assert_eq!(trie.completions("z"), None);
//! ```

pub mod error;
mod longest_common_prefix;
pub mod node;
pub mod trie;

pub use error::BuildError;
pub use node::{Node, NodeId, Substr};
pub use trie::{build, Builder, Trie};

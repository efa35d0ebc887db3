//! This crate exposes an unbalanced Binary Search Tree (BST) whose ordering is
//! chosen at construction time, plus a small word index built on top of it.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Here "less" and "greater" are decided by an ordering strategy (see
//! [`order`]) rather than always by [`Ord`]. The same `Tree` can then hold
//! words sorted case-insensitively, or by text with a frequency tie-break,
//! without any change to the tree itself.
//!
//! The tree in this crate never rebalances. Inserting keys in sorted order
//! produces a chain whose height equals its size minus one. Insertion, search,
//! traversal and drop all walk the tree with loops or explicit stacks so a
//! chain like that can't overflow the call stack.
//!
//! ## Word index
//!
//! [`index::Indexer`] reads text line by line, splits it into words and keeps
//! one [`Word`] per distinct word in a `Tree`, counting how often the word was
//! seen and on which lines.
//!
//! ```
//! use bst_index::index::{self, Indexer};
//!
//! let tree = Indexer::natural().build_from_text("the cat sat\nthe dog sat");
//!
//! let top: Vec<_> = index::top_frequency(&tree)
//!     .into_iter()
//!     .map(|w| w.text())
//!     .collect();
//! assert_eq!(top, ["sat", "the"]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod index;
pub mod iter;
pub mod order;
pub mod tree;
pub mod word;

pub use error::{Error, Result};
pub use order::{AlphaFreq, Compare, Frequency, IgnoreCase, Natural, WordOrder};
pub use tree::Tree;
pub use word::Word;

//! This crate exposes an unbalanced Binary Search Tree over integer keys,
//! mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure built from `Node`s. Each `Node`
//! stores a key and may own a left and a right child `Node`. The invariant
//! that makes it a *search* tree is:
//!
//! 1. For every `Node`, all the keys in its left subtree are less than its own key.
//! 2. For every `Node`, all the keys in its right subtree are greater than or equal
//!    to its own key (so duplicate keys always go right).
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching takes `O(height)`. This tree never rebalances, so inserting keys in
//! ascending order produces a chain whose height equals the number of keys. Every
//! operation here walks the tree with an explicit stack or queue, so even such a
//! chain can't overflow the call stack.
//!
//! The tree also supports mirror inversion and the four classic traversals
//! (breadth-first, inorder, preorder, postorder), each exposed as an iterator of
//! keys.
//!
//! # Examples
//!
//! ```
//! use bst::Tree;
//!
//! let tree: Tree = [3, 12, 1, -12, 2, 5, 4, 6].into_iter().collect();
//!
//! assert_eq!(tree.inorder().collect::<Vec<_>>(), [-12, 1, 2, 3, 4, 5, 6, 12]);
//! assert_eq!(tree.breadth_first().collect::<Vec<_>>(), [3, 1, 12, -12, 2, 5, 4, 6]);
//! assert!(tree.search(5));
//! assert!(!tree.search(7));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod traversal;
pub mod tree;

pub use error::ParseTreeError;
pub use tree::{Node, Tree};

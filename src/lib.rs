//! This crate is an unbalanced Binary Search Tree (BST) that can print itself, mostly for
//! educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to insert, find, and delete
//! stored keys. BSTs are typically defined recursively using the notion of a `Node`. A `Node`
//! stores a key and will sometimes have child `Node`s. The invariant of this BST is:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a key less than its own key.
//! 2. For every `Node`, all the `Node`s in its right subtree have a key greater than or equal to
//!    its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! This tree never rebalances itself, so inserting keys in sorted order produces a tree that is
//! really a linked list. None of the operations recurse, so that is slow but never overflows the
//! stack.
//!
//! ## Printing
//!
//! The keys can be listed in-order, pre-order, post-order or level-order (see [`traverse`]) and
//! the shape of the tree can be drawn (see [`render`]).
//!
//! ```
//! use pretty_bst::Tree;
//!
//! let mut tree = Tree::build(vec![5, 3, 8, 1, 4, 7, 9]);
//!
//! assert_eq!(tree.in_order(), "1 3 4 5 7 8 9 ");
//! assert_eq!(tree.level_order(), "5 3 8 1 4 7 9 ");
//!
//! tree.delete(&8);
//! print!("{}", tree);
//! ```
//!
//! ## Logging
//!
//! Inserts and deletes emit [`tracing`] events. No subscriber is installed by this crate.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod render;
pub mod traverse;
pub mod tree;

pub use tree::{Node, Tree};

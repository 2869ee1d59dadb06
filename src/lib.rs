//! This crate exposes a few classic data structures mostly for educational purposes: an
//! [`OrderedTree`] (a Binary Search Tree used as an ordered set), a singly [`LinkedList`] and a
//! small [`converter`] between number bases.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
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
//! The benefits of these invariants are many. Searching for a value takes `O(height)`, and so
//! does finding its neighbours: the next larger value ([`higher`][OrderedTree::higher]) or the
//! next smaller one ([`lower`][OrderedTree::lower]). BSTs also naturally support sorted iteration
//! by visiting the left subtree, then the subtree root, then the right subtree.
//!
//! The [`OrderedTree`] here never rebalances, so its height is only `O(lg N)` when the input
//! arrives in a friendly order.
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//! for x in [5, 3, 8, 1, 4, 7, 9] {
//!     tree.insert(x);
//! }
//!
//! assert_eq!(tree.to_string(), "[1, 3, 4, 5, 7, 8, 9]");
//! assert_eq!(tree.ceiling(&6), Some(&7));
//! assert_eq!(tree.floor(&6), Some(&5));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod converter;
mod error;
pub mod iter;
pub mod linked_list;
pub mod tree;

pub use error::Error;
pub use iter::Order;
pub use linked_list::LinkedList;
pub use tree::OrderedTree;

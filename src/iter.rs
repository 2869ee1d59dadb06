//! Traversals of an [`OrderedTree`][crate::OrderedTree].
//!
//! Every traversal is a *snapshot*: the whole visiting sequence is written into a buffer when the
//! iterator is created and `next` just pops from the end of it. The buffer is therefore filled in
//! the reverse of the order the elements are handed out. This costs `O(len)` memory up front but
//! means each iterator is independent of every other one and of the tree's later state.
//!
//! The buffers are built with an explicit stack rather than recursion. A tree that was fed sorted
//! input is a glorified linked list and recursing down it would overflow the call stack long
//! before the heap runs out.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::{Order, OrderedTree};
//!
//! let mut tree = OrderedTree::new();
//! for x in [5, 3, 8, 1, 4, 7, 9] {
//!     tree.insert(x);
//! }
//!
//! assert_eq!(tree.traverse(Order::InOrder).copied().collect::<Vec<_>>(), [1, 3, 4, 5, 7, 8, 9]);
//! assert_eq!(tree.traverse(Order::PreOrder).copied().collect::<Vec<_>>(), [5, 3, 1, 4, 8, 7, 9]);
//! assert_eq!(tree.traverse(Order::PostOrder).copied().collect::<Vec<_>>(), [1, 4, 3, 7, 9, 8, 5]);
//! ```

use std::iter::FusedIterator;
use std::ptr;

use crate::tree::Node;

/// Where a traversal visits a node relative to its two subtrees.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// Left subtree, node, right subtree. This yields the elements in ascending order.
    InOrder,
    /// Node, left subtree, right subtree.
    PreOrder,
    /// Left subtree, right subtree, node.
    PostOrder,
}

/// An iterator over a traversal that was fully computed when the iterator was created.
///
/// Borrowing snapshots (`Snapshot<&E>`) come from [`OrderedTree::traverse`] and friends; owning
/// snapshots (`Snapshot<E>`) come from consuming the tree with `into_iter`.
///
/// [`OrderedTree::traverse`]: crate::OrderedTree::traverse
#[derive(Clone, Debug)]
pub struct Snapshot<T> {
    /// The traversal in reverse. The next item is at the end.
    stack: Vec<T>,
}

/// A borrowing traversal of an [`OrderedTree`][crate::OrderedTree].
pub type Iter<'a, E> = Snapshot<&'a E>;

/// An owning, ascending traversal of an [`OrderedTree`][crate::OrderedTree].
pub type IntoIter<E> = Snapshot<E>;

impl<'a, E> Snapshot<&'a E> {
    pub(crate) fn new(root: Option<&'a Node<E>>, order: Order, len: usize) -> Self {
        let stack = match order {
            Order::InOrder => reverse_in_order(root, len),
            Order::PreOrder => reverse_pre_order(root, len),
            Order::PostOrder => reverse_post_order(root, len),
        };

        Self { stack }
    }
}

impl<E> Snapshot<E> {
    /// Takes the tree apart, keeping the elements in ascending order.
    pub(crate) fn from_owned(root: Option<Box<Node<E>>>, len: usize) -> Self {
        let mut stack = Vec::with_capacity(len);
        let mut pending = Vec::new();
        let mut cursor = root;

        // Reverse in-order (right, node, left) so the smallest element ends up on top.
        loop {
            while let Some(mut node) = cursor {
                cursor = node.right.take();
                pending.push(node);
            }
            let Some(mut node) = pending.pop() else {
                break;
            };
            cursor = node.left.take();
            stack.push(node.element);
        }

        Self { stack }
    }
}

impl<T> Iterator for Snapshot<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.stack.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.len(), Some(self.stack.len()))
    }
}

impl<T> ExactSizeIterator for Snapshot<T> {}

impl<T> FusedIterator for Snapshot<T> {}

/// Elements in right subtree, left subtree, node order. That is exactly pre-order backwards.
fn reverse_pre_order<E>(root: Option<&Node<E>>, len: usize) -> Vec<&E> {
    let mut stack = Vec::with_capacity(len);
    let mut pending = Vec::new();
    let mut cursor = root;
    // The node whose element went into `stack` last.
    let mut finished: Option<&Node<E>> = None;

    loop {
        while let Some(node) = cursor {
            pending.push(node);
            cursor = node.right.as_deref();
        }
        let Some(&node) = pending.last() else {
            break;
        };
        match node.left.as_deref() {
            // Right subtree done, left one not started yet.
            Some(left) if !finished.map_or(false, |done| ptr::eq(done, left)) => {
                cursor = Some(left);
            }
            _ => {
                stack.push(&node.element);
                finished = pending.pop();
            }
        }
    }

    stack
}

/// Elements in descending order, which pop off in ascending order.
fn reverse_in_order<E>(root: Option<&Node<E>>, len: usize) -> Vec<&E> {
    let mut stack = Vec::with_capacity(len);
    let mut pending = Vec::new();
    let mut cursor = root;

    loop {
        while let Some(node) = cursor {
            pending.push(node);
            cursor = node.right.as_deref();
        }
        let Some(node) = pending.pop() else {
            break;
        };
        stack.push(&node.element);
        cursor = node.left.as_deref();
    }

    stack
}

/// Elements in node, right subtree, left subtree order. That is exactly post-order backwards.
fn reverse_post_order<E>(root: Option<&Node<E>>, len: usize) -> Vec<&E> {
    let mut stack = Vec::with_capacity(len);
    let mut pending: Vec<&Node<E>> = root.into_iter().collect();

    while let Some(node) = pending.pop() {
        stack.push(&node.element);
        pending.extend(node.left.as_deref());
        pending.extend(node.right.as_deref());
    }

    stack
}

//! An unbalanced BST with set semantics. Elements are kept in the order given by their `Ord`
//! implementation, each element at most once.
//!
//! Nothing here rebalances: feeding the tree sorted input produces a chain and every operation
//! degrades to `O(len)`. Every walk down the tree is a loop, and traversals, `clear` and `Drop`
//! use an explicit stack, so such a chain can't overflow the call stack.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! assert!(tree.insert(1));
//! assert!(tree.contains(&1));
//!
//! // Each element is stored once.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.len(), 1);
//!
//! // Removing reports whether anything was removed.
//! assert!(tree.remove(&1));
//! assert!(!tree.remove(&1));
//! assert!(tree.is_empty());
//! ```

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt::{self, Write};

use crate::iter::{IntoIter, Iter, Order, Snapshot};
use crate::Error;

type Link<E> = Option<Box<Node<E>>>;

/// A Binary Search Tree storing a set of elements. This can be used for inserting, finding, and
/// removing elements, and for asking about an element's neighbours in sorted order.
pub struct OrderedTree<E> {
    root: Link<E>,
    len: usize,
}

impl<E> Default for OrderedTree<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Drop for OrderedTree<E> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<E> OrderedTree<E> {
    /// Generates a new, empty `OrderedTree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The number of elements in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no elements. When this is `true`, [`first`][Self::first] and
    /// [`last`][Self::last] return [`Error::Empty`].
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        let mut pending: Vec<Box<Node<E>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }

        if self.len > 0 {
            log::trace!("cleared {} elements", self.len);
        }
        self.len = 0;
    }

    /// The smallest element.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{Error, OrderedTree};
    ///
    /// let mut tree = OrderedTree::new();
    /// assert_eq!(tree.first(), Err(Error::Empty));
    ///
    /// tree.insert(2);
    /// tree.insert(1);
    /// assert_eq!(tree.first(), Ok(&1));
    /// ```
    pub fn first(&self) -> Result<&E, Error> {
        let mut node = self.root.as_deref().ok_or(Error::Empty)?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }

        Ok(&node.element)
    }

    /// The largest element.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{Error, OrderedTree};
    ///
    /// let mut tree = OrderedTree::new();
    /// assert_eq!(tree.last(), Err(Error::Empty));
    ///
    /// tree.insert(1);
    /// tree.insert(2);
    /// assert_eq!(tree.last(), Ok(&2));
    /// ```
    pub fn last(&self) -> Result<&E, Error> {
        let mut node = self.root.as_deref().ok_or(Error::Empty)?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }

        Ok(&node.element)
    }

    /// Visits every element in the given [`Order`]. Each call takes a fresh snapshot.
    pub fn traverse(&self, order: Order) -> Iter<'_, E> {
        Snapshot::new(self.root.as_deref(), order, self.len)
    }

    /// Visits every element in ascending order.
    pub fn in_order(&self) -> Iter<'_, E> {
        self.traverse(Order::InOrder)
    }

    /// Visits each node before its left subtree, and that before its right subtree.
    pub fn pre_order(&self) -> Iter<'_, E> {
        self.traverse(Order::PreOrder)
    }

    /// Visits each node after its left subtree, and that after its right subtree.
    pub fn post_order(&self) -> Iter<'_, E> {
        self.traverse(Order::PostOrder)
    }

    /// Copies the elements, in ascending order, into a `Vec` of length [`len`][Self::len].
    pub fn to_vec(&self) -> Vec<E>
    where
        E: Clone,
    {
        self.in_order().cloned().collect()
    }

    /// Renders the shape of the tree, one node per line in pre-order. Children are indented one
    /// level deeper than their parent and missing children are printed as `null`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    ///
    /// let expected = "\
    /// 2
    /// |--1
    ///    |--null
    ///    |--null
    /// |--null";
    /// assert_eq!(tree.tree_format(), expected);
    /// ```
    pub fn tree_format(&self) -> String
    where
        E: fmt::Display,
    {
        let mut output = String::new();
        let mut pending = vec![(self.root.as_deref(), 0)];

        while let Some((node, depth)) = pending.pop() {
            if !output.is_empty() {
                output.push('\n');
            }
            if depth > 0 {
                output.push_str(&"   ".repeat(depth - 1));
                output.push_str("|--");
            }

            match node {
                Some(node) => {
                    // Writing to a `String` can't fail.
                    let _ = write!(output, "{}", node.element);
                    pending.push((node.right.as_deref(), depth + 1));
                    pending.push((node.left.as_deref(), depth + 1));
                }
                None => output.push_str("null"),
            }
        }

        output
    }

    /// Not supported. Insert the elements one by one instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{Error, OrderedTree};
    ///
    /// let mut tree = OrderedTree::new();
    /// assert_eq!(tree.add_all(vec![1, 2]), Err(Error::Unsupported("add_all")));
    /// assert!(tree.is_empty());
    /// ```
    pub fn add_all<I>(&mut self, _elements: I) -> Result<bool, Error>
    where
        I: IntoIterator<Item = E>,
    {
        log::debug!("rejected call to add_all");
        Err(Error::Unsupported("add_all"))
    }

    /// Not supported. Remove the elements one by one instead.
    pub fn remove_all<I>(&mut self, _elements: I) -> Result<bool, Error>
    where
        I: IntoIterator,
    {
        log::debug!("rejected call to remove_all");
        Err(Error::Unsupported("remove_all"))
    }

    /// Not supported.
    pub fn retain_all<I>(&mut self, _elements: I) -> Result<bool, Error>
    where
        I: IntoIterator,
    {
        log::debug!("rejected call to retain_all");
        Err(Error::Unsupported("retain_all"))
    }
}

impl<E> OrderedTree<E>
where
    E: Ord,
{
    /// Adds the element to the tree. Returns `false`, leaving the tree untouched, when an equal
    /// element is already stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, element: E) -> bool {
        let mut link = &mut self.root;
        while let Some(node) = link {
            match element.cmp(&node.element) {
                Ordering::Less => link = &mut node.left,
                Ordering::Equal => return false,
                Ordering::Greater => link = &mut node.right,
            }
        }

        *link = Some(Node::new_boxed(element));
        self.len += 1;
        log::trace!("inserted element, len is now {}", self.len);
        true
    }

    /// Potentially finds the stored element equal to `value`. If no element matches, `None` is
    /// returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(String::from("b"));
    ///
    /// // Any borrowed form of the element works as a query.
    /// assert_eq!(tree.get("b").map(String::as_str), Some("b"));
    /// assert_eq!(tree.get("a"), None);
    /// ```
    pub fn get<Q>(&self, value: &Q) -> Option<&E>
    where
        E: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            cursor = match value.cmp(node.element.borrow()) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return Some(&node.element),
                Ordering::Greater => node.right.as_deref(),
            };
        }

        None
    }

    /// Whether an element equal to `value` is stored.
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        E: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(value).is_some()
    }

    /// Whether every one of `values` is stored. Vacuously `true` for no values.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(1);
    /// tree.insert(2);
    ///
    /// assert!(tree.contains_all(&[2, 1]));
    /// assert!(!tree.contains_all(&[1, 3]));
    /// ```
    pub fn contains_all<'a, I, Q>(&self, values: I) -> bool
    where
        I: IntoIterator<Item = &'a Q>,
        E: Borrow<Q>,
        Q: Ord + ?Sized + 'a,
    {
        values.into_iter().all(|value| self.contains(value))
    }

    /// Removes the element equal to `value`. Returns whether there was one.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(3);
    ///
    /// assert!(tree.remove(&2));
    /// assert!(!tree.remove(&2));
    /// assert_eq!(tree.to_vec(), [1, 3]);
    /// ```
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        E: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        if !Node::remove(&mut self.root, value) {
            return false;
        }

        self.len -= 1;
        log::trace!("removed element, len is now {}", self.len);
        true
    }

    /// The stored element equal to `value` or, failing that, the least element greater than it.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(5);
    /// tree.insert(7);
    ///
    /// assert_eq!(tree.ceiling(&5), Some(&5));
    /// assert_eq!(tree.ceiling(&6), Some(&7));
    /// assert_eq!(tree.ceiling(&8), None);
    /// ```
    pub fn ceiling<Q>(&self, value: &Q) -> Option<&E>
    where
        E: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(value).or_else(|| self.higher(value))
    }

    /// The stored element equal to `value` or, failing that, the greatest element less than it.
    pub fn floor<Q>(&self, value: &Q) -> Option<&E>
    where
        E: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(value).or_else(|| self.lower(value))
    }

    /// The least element strictly greater than `value`, if there is one.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(5);
    /// tree.insert(3);
    /// tree.insert(4);
    ///
    /// assert_eq!(tree.higher(&3), Some(&4));
    /// // 4 has no right child but its ancestor 5 is still greater.
    /// assert_eq!(tree.higher(&4), Some(&5));
    /// assert_eq!(tree.higher(&5), None);
    /// ```
    pub fn higher<Q>(&self, value: &Q) -> Option<&E>
    where
        E: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        // Every node we step left from is greater than `value`, and each one is smaller than the
        // one before it, so the last one recorded is the answer.
        let mut candidate = None;
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            if value.cmp(node.element.borrow()).is_lt() {
                candidate = Some(&node.element);
                cursor = node.left.as_deref();
            } else {
                cursor = node.right.as_deref();
            }
        }

        candidate
    }

    /// The greatest element strictly less than `value`, if there is one.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(5);
    /// tree.insert(3);
    /// tree.insert(4);
    ///
    /// assert_eq!(tree.lower(&5), Some(&4));
    /// assert_eq!(tree.lower(&4), Some(&3));
    /// assert_eq!(tree.lower(&3), None);
    /// ```
    pub fn lower<Q>(&self, value: &Q) -> Option<&E>
    where
        E: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut candidate = None;
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            if value.cmp(node.element.borrow()).is_gt() {
                candidate = Some(&node.element);
                cursor = node.right.as_deref();
            } else {
                cursor = node.left.as_deref();
            }
        }

        candidate
    }
}

/// Two trees are equal when they hold the same elements, however they are shaped.
///
/// ```
/// use ordered_tree::OrderedTree;
///
/// let mut left = OrderedTree::new();
/// let mut right = OrderedTree::new();
/// for x in [1, 2, 3] {
///     left.insert(x);
/// }
/// for x in [2, 3, 1] {
///     right.insert(x);
/// }
///
/// assert!(left == right);
/// ```
impl<E> PartialEq for OrderedTree<E>
where
    E: Ord,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && other.in_order().all(|element| self.contains(element))
    }
}

impl<E> Eq for OrderedTree<E> where E: Ord {}

/// Rebuilds the tree by inserting a pre-order snapshot of `self`, so the clone has the same shape
/// and shares no nodes with `self`.
impl<E> Clone for OrderedTree<E>
where
    E: Clone + Ord,
{
    fn clone(&self) -> Self {
        let mut tree = Self::new();
        for element in self.pre_order() {
            tree.insert(element.clone());
        }

        tree
    }
}

impl<E> fmt::Debug for OrderedTree<E>
where
    E: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.in_order()).finish()
    }
}

/// The elements in ascending order, e.g. `[1, 3, 4]`.
impl<E> fmt::Display for OrderedTree<E>
where
    E: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('[')?;
        for (i, element) in self.in_order().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", element)?;
        }
        f.write_char(']')
    }
}

impl<'a, E> IntoIterator for &'a OrderedTree<E> {
    type Item = &'a E;
    type IntoIter = Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order()
    }
}

impl<E> IntoIterator for OrderedTree<E> {
    type Item = E;
    type IntoIter = IntoIter<E>;

    fn into_iter(mut self) -> Self::IntoIter {
        let len = std::mem::take(&mut self.len);
        Snapshot::from_owned(self.root.take(), len)
    }
}

/// A `Node` stores one element and owns up to two children. Nodes don't know their parent; every
/// walk starts at the root.
pub(crate) struct Node<E> {
    pub(crate) element: E,
    pub(crate) left: Link<E>,
    pub(crate) right: Link<E>,
}

impl<E> Node<E> {
    fn new_boxed(element: E) -> Box<Self> {
        Box::new(Self {
            element,
            left: None,
            right: None,
        })
    }

    /// Removes the element equal to `value` from the subtree hanging off `link`. Returns whether
    /// one was found.
    fn remove<Q>(link: &mut Link<E>, value: &Q) -> bool
    where
        E: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match Self::find_slot(link, value) {
            Some(slot) => {
                Self::unlink(slot);
                true
            }
            None => false,
        }
    }

    /// Walks down from `link` to the slot holding the element equal to `value`.
    fn find_slot<'a, Q>(mut link: &'a mut Link<E>, value: &Q) -> Option<&'a mut Link<E>>
    where
        E: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        loop {
            link = match value.cmp(link.as_ref()?.element.borrow()) {
                Ordering::Less => &mut link.as_mut()?.left,
                Ordering::Equal => return Some(link),
                Ordering::Greater => &mut link.as_mut()?.right,
            };
        }
    }

    /// Takes the node at `link` out of the tree, putting whatever should replace it in its slot.
    fn unlink(link: &mut Link<E>) {
        let Some(mut node) = link.take() else {
            return;
        };

        *link = match (node.left.take(), node.right.take()) {
            (None, right) => right,
            (left, None) => left,

            // If we have two children we have to figure out which node to promote. We choose
            // here this node's predecessor. That is, the largest node in this node's left
            // subtree. Its element moves up into this node and its own node goes away.
            (Some(left), right) => {
                let (predecessor, rest) = Self::take_largest(left);
                node.element = predecessor;
                node.left = rest;
                node.right = right;
                Some(node)
            }
        };
    }

    /// Splits the largest element off `subtree`, returning it together with what is left of the
    /// subtree. The largest node is the end of the right spine; its left subtree takes its place.
    fn take_largest(subtree: Box<Self>) -> (E, Link<E>) {
        let mut spine = Vec::new();
        let mut node = subtree;
        while let Some(right) = node.right.take() {
            spine.push(node);
            node = right;
        }

        let Node { element, left, .. } = *node;
        let mut rest = left;
        while let Some(mut parent) = spine.pop() {
            parent.right = rest;
            rest = Some(parent);
        }

        (element, rest)
    }
}

//! A singly linked list with manually managed nodes. Nodes are allocated with `Box`, leaked into
//! `NonNull` links and reclaimed when they are unlinked. The list keeps a link to its tail so
//! appending doesn't walk the whole list.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::LinkedList;
//!
//! let mut list = LinkedList::new();
//! list.push_back(3);
//! list.push_back(1);
//! list.push_back(2);
//!
//! assert_eq!(list.index_of(&1), Some(1));
//! assert_eq!(list.to_string(), "[3, 1, 2]");
//!
//! list.sort();
//! assert_eq!(list.to_vec(), [1, 2, 3]);
//!
//! assert!(list.remove(&2));
//! assert_eq!(list.to_vec(), [1, 3]);
//! ```

use std::fmt::{self, Write};
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::Error;

/// A singly linked list of elements, appended at the back and read from the front.
pub struct LinkedList<E> {
    head: Link<E>,
    tail: Link<E>,
    len: usize,
    /// We own the nodes behind `head`.
    marker: PhantomData<Box<Node<E>>>,
}

impl<E> Default for LinkedList<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Drop for LinkedList<E> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<E> LinkedList<E> {
    /// Generate a new, empty `LinkedList`.
    pub fn new() -> Self {
        Self {
            head: Link(None),
            tail: Link(None),
            len: 0,
            marker: PhantomData,
        }
    }

    /// The number of elements in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list has no elements.
    pub fn is_empty(&self) -> bool {
        self.head.0.is_none()
    }

    /// Appends the element to the end of the list.
    pub fn push_back(&mut self, element: E) {
        let node = NonNull::from(Box::leak(Box::new(Node {
            element,
            next: Link(None),
        })));

        match self.tail.0 {
            // SAFETY: The tail is a live node owned by this list. We hold `&mut self` so nothing
            // else is looking at it.
            Some(mut tail) => unsafe { tail.as_mut().next = Link(Some(node)) },
            None => self.head = Link(Some(node)),
        }
        self.tail = Link(Some(node));
        self.len += 1;
        log::trace!("pushed element, len is now {}", self.len);
    }

    /// Removes and returns the first element, if there is one.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// list.push_back(1);
    ///
    /// assert_eq!(list.pop_front(), Some(1));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<E> {
        let head = self.head.0?;
        // SAFETY: The head was allocated with `Box::new` in `push_back` and `self.head` is the
        // only link to it. We overwrite that link straight away so it can't be reached again.
        let Node { element, next } = unsafe { *Box::from_raw(head.as_ptr()) };

        self.head = next;
        if self.head.0.is_none() {
            self.tail = Link(None);
        }
        self.len -= 1;
        Some(element)
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        let len = self.len;
        while self.pop_front().is_some() {}

        if len > 0 {
            log::trace!("cleared {} elements", len);
        }
    }

    /// The first element.
    pub fn first(&self) -> Result<&E, Error> {
        // SAFETY: The head is a live node and the returned reference borrows `self`, so the list
        // can't be changed while it exists.
        let head = self.head.0.map(|head| unsafe { &head.as_ref().element });
        head.ok_or(Error::Empty)
    }

    /// The last element.
    pub fn last(&self) -> Result<&E, Error> {
        // SAFETY: See `first`.
        let tail = self.tail.0.map(|tail| unsafe { &tail.as_ref().element });
        tail.ok_or(Error::Empty)
    }

    /// The element at position `index`, counting from zero at the front.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{Error, LinkedList};
    ///
    /// let mut list = LinkedList::new();
    /// list.push_back('a');
    ///
    /// assert_eq!(list.get(0), Ok(&'a'));
    /// assert_eq!(list.get(1), Err(Error::IndexOutOfBounds { index: 1, len: 1 }));
    /// ```
    pub fn get(&self, index: usize) -> Result<&E, Error> {
        self.iter().nth(index).ok_or(Error::IndexOutOfBounds {
            index,
            len: self.len,
        })
    }

    /// Iterates over the elements from front to back.
    pub fn iter(&self) -> Iter<'_, E> {
        Iter {
            next: self.head,
            remaining: self.len,
            marker: PhantomData,
        }
    }

    /// Copies the elements, front to back, into a `Vec`.
    pub fn to_vec(&self) -> Vec<E>
    where
        E: Clone,
    {
        self.iter().cloned().collect()
    }

    /// The position of the first element equal to `element`.
    pub fn index_of(&self, element: &E) -> Option<usize>
    where
        E: PartialEq,
    {
        self.iter().position(|e| e == element)
    }

    /// Whether an element equal to `element` is in the list.
    pub fn contains(&self, element: &E) -> bool
    where
        E: PartialEq,
    {
        self.index_of(element).is_some()
    }

    /// Whether every one of `elements` is in the list.
    pub fn contains_all<'a, I>(&self, elements: I) -> bool
    where
        I: IntoIterator<Item = &'a E>,
        E: PartialEq + 'a,
    {
        elements.into_iter().all(|element| self.contains(element))
    }

    /// Removes the first element equal to `element`. Returns whether there was one.
    pub fn remove(&mut self, element: &E) -> bool
    where
        E: PartialEq,
    {
        let Some(index) = self.index_of(element) else {
            return false;
        };

        let removed = self.remove_at(index).is_some();
        if removed {
            log::trace!("removed element at {}, len is now {}", index, self.len);
        }
        removed
    }

    /// Sorts the list, keeping equal elements in their current order.
    pub fn sort(&mut self)
    where
        E: Ord,
    {
        let mut elements = Vec::with_capacity(self.len);
        while let Some(element) = self.pop_front() {
            elements.push(element);
        }

        elements.sort();
        for element in elements {
            self.push_back(element);
        }
    }

    /// Not supported. Push the elements one by one instead.
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

    fn remove_at(&mut self, index: usize) -> Option<E> {
        if index >= self.len {
            return None;
        }
        if index == 0 {
            return self.pop_front();
        }

        let mut before = self.head.0?;
        for _ in 1..index {
            // SAFETY: `index < len` so each of the first `index` nodes has a successor.
            before = unsafe { before.as_ref().next.0? };
        }

        // SAFETY: `before` and its successor are live nodes owned by this list and we hold
        // `&mut self`. The successor was allocated with `Box::new` in `push_back` and `before` is
        // the only link to it, which is overwritten before anything else could follow it.
        unsafe {
            let removed = before.as_ref().next.0?;
            let Node { element, next } = *Box::from_raw(removed.as_ptr());

            before.as_mut().next = next;
            if next.0.is_none() {
                self.tail = Link(Some(before));
            }
            self.len -= 1;
            Some(element)
        }
    }
}

impl<E> Clone for LinkedList<E>
where
    E: Clone,
{
    fn clone(&self) -> Self {
        let mut list = Self::new();
        for element in self {
            list.push_back(element.clone());
        }

        list
    }
}

/// Lists are equal when they hold equal elements in the same order.
impl<E> PartialEq for LinkedList<E>
where
    E: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<E> Eq for LinkedList<E> where E: Eq {}

impl<E> fmt::Debug for LinkedList<E>
where
    E: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// The elements front to back, e.g. `[3, 1, 2]`.
impl<E> fmt::Display for LinkedList<E>
where
    E: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('[')?;
        for (i, element) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", element)?;
        }
        f.write_char(']')
    }
}

impl<'a, E> IntoIterator for &'a LinkedList<E> {
    type Item = &'a E;
    type IntoIter = Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Front to back iterator over a [`LinkedList`].
pub struct Iter<'a, E> {
    next: Link<E>,
    remaining: usize,
    marker: PhantomData<&'a Node<E>>,
}

impl<E> Clone for Iter<'_, E> {
    fn clone(&self) -> Self {
        Self {
            next: self.next,
            remaining: self.remaining,
            marker: PhantomData,
        }
    }
}

impl<'a, E> Iterator for Iter<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next.0?;
        // SAFETY: The list outlives `'a` and can't be changed while this iterator borrows it, so
        // every node we reach stays alive and unaliased by `&mut`.
        let node: &'a Node<E> = unsafe { node.as_ref() };

        self.next = node.next;
        self.remaining -= 1;
        Some(&node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<E> ExactSizeIterator for Iter<'_, E> {}

impl<E> FusedIterator for Iter<'_, E> {}

struct Link<E>(Option<NonNull<Node<E>>>);

impl<E> Clone for Link<E> {
    fn clone(&self) -> Self {
        Self(self.0)
    }
}
impl<E> Copy for Link<E> {}

struct Node<E> {
    element: E,
    next: Link<E>,
}

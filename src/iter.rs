//! In-order traversal of a [`Tree`][crate::Tree].
//!
//! Both iterators keep an explicit stack of nodes rather than recursing, so
//! walking a degenerate tree costs heap, not call stack. The stack starts out
//! holding the leftmost spine of the tree. Each step pops a node, pushes the
//! leftmost spine of that node's right child and yields the popped value.

use std::iter::FusedIterator;

use crate::error::{Error, Result};
use crate::tree::{Link, Node};

/// A borrowing in-order iterator, created by [`Tree::iter`][crate::Tree::iter].
///
/// Forward-only and not restartable: ask the tree for a new one to traverse
/// again. The borrow on the tree guarantees the tree can't change while this
/// is alive.
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }

    /// Whether another call to `next` would yield a value.
    pub fn has_next(&self) -> bool {
        !self.stack.is_empty()
    }

    /// Like [`Iterator::next`] but treats running past the end as an error.
    ///
    /// # Errors
    ///
    /// [`Error::Exhausted`] once every value has been yielded.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_index::{Error, Tree};
    ///
    /// let mut tree = Tree::new();
    /// tree.insert('a');
    ///
    /// let mut iter = tree.iter();
    /// assert_eq!(iter.try_next().ok(), Some(&'a'));
    /// assert!(matches!(iter.try_next(), Err(Error::Exhausted)));
    /// ```
    pub fn try_next(&mut self) -> Result<&'a T> {
        self.next().ok_or(Error::Exhausted)
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.len(), None)
    }
}

impl<'a, T> FusedIterator for Iter<'a, T> {}

/// An owning in-order iterator, created by calling `into_iter` on a
/// [`Tree`][crate::Tree]. Values are moved out rather than cloned.
pub struct IntoIter<T> {
    stack: Vec<Box<Node<T>>>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(root: Link<T>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut link: Link<T>) {
        while let Some(mut node) = link {
            link = node.left.take();
            self.stack.push(node);
        }
    }

    /// Whether another call to `next` would yield a value.
    pub fn has_next(&self) -> bool {
        !self.stack.is_empty()
    }

    /// Like [`Iterator::next`] but treats running past the end as an error.
    ///
    /// # Errors
    ///
    /// [`Error::Exhausted`] once every value has been yielded.
    pub fn try_next(&mut self) -> Result<T> {
        self.next().ok_or(Error::Exhausted)
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // Nodes left on the stack still own their right subtrees, which may be
        // arbitrarily deep. Draining unlinks them one at a time.
        for _ in self.by_ref() {}
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        let Node { value, right, .. } = *node;
        self.push_left_spine(right);
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.len(), None)
    }
}

impl<T> FusedIterator for IntoIter<T> {}

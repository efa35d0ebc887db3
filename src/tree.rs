//! An unbalanced BST ordered by a strategy picked at construction.
//!
//! # Examples
//!
//! ```
//! use bst_index::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.search(&1), None);
//! assert_eq!(tree.height(), 0);
//!
//! assert!(tree.insert(5));
//! assert!(tree.insert(3));
//! assert!(tree.insert(7));
//!
//! // Inserting an equal key again is a no-op.
//! assert!(!tree.insert(5));
//!
//! assert_eq!(tree.search(&3), Some(&3));
//! assert_eq!(tree.size(), 3);
//! assert_eq!(tree.height(), 1);
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [3, 5, 7]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

use crate::iter::{IntoIter, Iter};
use crate::order::{Compare, Natural};

pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A Binary Search Tree holding values of type `T`, ordered by the strategy
/// `C`. The strategy is fixed for the lifetime of the tree.
///
/// Values that compare equal under `C` are duplicates: the first one inserted
/// stays and later ones are dropped. Callers that want to merge payload into
/// an existing value should [`search_mut`][Tree::search_mut] for it instead of
/// inserting again.
pub struct Tree<T, C = Natural> {
    root: Link<T>,
    order: C,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> Drop for Tree<T, C> {
    fn drop(&mut self) {
        // A sorted insert sequence builds a chain as deep as the tree is big,
        // so tear it down with a stack instead of letting `Box` recurse.
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T, C> Clone for Tree<T, C>
where
    T: Clone,
    C: Clone,
{
    fn clone(&self) -> Self {
        let mut tree = Self::with_order(self.order.clone());
        {
            // Pairs of a node to copy and the empty link its copy goes into.
            let mut stack: Vec<(&Node<T>, &mut Link<T>)> = Vec::new();
            if let Some(root) = self.root.as_deref() {
                stack.push((root, &mut tree.root));
            }
            while let Some((node, link)) = stack.pop() {
                let copy = link.insert(Node::new_boxed(node.value.clone()));
                let Node { left, right, .. } = &mut **copy;
                if let Some(l) = node.left.as_deref() {
                    stack.push((l, left));
                }
                if let Some(r) = node.right.as_deref() {
                    stack.push((r, right));
                }
            }
        }
        tree
    }
}

impl<T, C> fmt::Debug for Tree<T, C>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree` ordered by `T`'s own [`Ord`].
    pub fn new() -> Self {
        Self::with_order(Natural)
    }
}

impl<T, C> Tree<T, C> {
    /// Generates a new, empty `Tree` ordered by `order`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_index::{IgnoreCase, Tree, Word};
    ///
    /// let mut tree = Tree::with_order(IgnoreCase);
    /// tree.insert(Word::new("Cat"));
    ///
    /// assert!(!tree.insert(Word::new("CAT")));
    /// assert_eq!(tree.search(&Word::new("cat")).map(Word::text), Some("Cat"));
    /// ```
    pub fn with_order(order: C) -> Self {
        Self { root: None, order }
    }

    /// The strategy this tree is ordered by.
    pub fn order(&self) -> &C {
        &self.order
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of edges on the longest path from the root to a leaf.
    ///
    /// An empty tree and a tree with a single node both have height 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_index::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.height(), 0);
    ///
    /// tree.insert(1);
    /// assert_eq!(tree.height(), 0);
    ///
    /// // No rebalancing: ascending inserts build a chain.
    /// for x in 2..=5 {
    ///     tree.insert(x);
    /// }
    /// assert_eq!(tree.height(), 4);
    /// ```
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node<T>, usize)> =
            self.root.as_deref().map(|root| (root, 0)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left.as_deref().map(|n| (n, depth + 1)));
            stack.extend(node.right.as_deref().map(|n| (n, depth + 1)));
        }
        height
    }

    /// Counts the nodes in the tree. This walks the whole tree every time.
    pub fn size(&self) -> usize {
        self.iter().count()
    }

    /// A copy of the value at the root, if there is one.
    pub fn root_value(&self) -> Option<T>
    where
        T: Clone,
    {
        self.root.as_ref().map(|root| root.value.clone())
    }

    /// Iterates over the values in ascending order under this tree's
    /// strategy.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_index::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for x in [4, 2, 6, 1, 3] {
    ///     tree.insert(x);
    /// }
    ///
    /// let mut iter = tree.iter();
    /// assert_eq!(iter.try_next().ok(), Some(&1));
    /// assert_eq!(iter.copied().collect::<Vec<_>>(), [2, 3, 4, 6]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root.as_deref())
    }
}

impl<T, C> Tree<T, C>
where
    C: Compare<T>,
{
    /// Inserts `value` unless an equal value is already in the tree. Returns
    /// whether anything was inserted.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_index::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.size(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match self.order.compare(&value, &node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Equal => return false,
                Ordering::Greater => &mut node.right,
            };
        }
        *link = Some(Node::new_boxed(value));
        true
    }

    /// Potentially finds the stored value equal to `key`. If no node has an
    /// equal value, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_index::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.search(&1), Some(&1));
    /// assert_eq!(tree.search(&42), None);
    /// ```
    pub fn search(&self, key: &T) -> Option<&T> {
        let mut node = self.root.as_deref();
        while let Some(n) = node {
            node = match self.order.compare(key, &n.value) {
                Ordering::Less => n.left.as_deref(),
                Ordering::Equal => return Some(&n.value),
                Ordering::Greater => n.right.as_deref(),
            };
        }
        None
    }

    /// Like [`search`][Tree::search] but hands back a mutable reference so
    /// the stored value can be updated in place.
    ///
    /// The caller must not change the value in a way that changes how it
    /// compares under this tree's strategy. Doing so leaves it in the wrong
    /// place and later searches may miss it.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_index::{Tree, Word};
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(Word::at_line("cat", 1));
    ///
    /// if let Some(word) = tree.search_mut(&Word::new("cat")) {
    ///     word.record(2);
    /// }
    /// assert_eq!(tree.search(&Word::new("cat")).map(Word::frequency), Some(2));
    /// ```
    pub fn search_mut(&mut self, key: &T) -> Option<&mut T> {
        let order = &self.order;
        let mut node = self.root.as_deref_mut();
        while let Some(n) = node {
            node = match order.compare(key, &n.value) {
                Ordering::Less => n.left.as_deref_mut(),
                Ordering::Equal => return Some(&mut n.value),
                Ordering::Greater => n.right.as_deref_mut(),
            };
        }
        None
    }

    /// Whether a value equal to `key` is in the tree.
    pub fn contains(&self, key: &T) -> bool {
        self.search(key).is_some()
    }
}

impl<'a, T, C> IntoIterator for &'a Tree<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, C> IntoIterator for Tree<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Consumes the tree, yielding its values in ascending order.
    fn into_iter(mut self) -> Self::IntoIter {
        IntoIter::new(self.root.take())
    }
}

impl<T, C> Extend<T> for Tree<T, C>
where
    C: Compare<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

/// A `Node` owns one value and up to two children. There are no parent
/// pointers.
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }
}

//! An unbalanced BST of unique `i32` keys with owned (`Box`ed) children.
//!
//! # Examples
//!
//! ```
//! use int_bst::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.is_empty());
//! assert!(!tree.contains(5));
//!
//! for key in [5, 3, 8, 1, 4, 7, 9] {
//!     tree.insert(key);
//! }
//! assert_eq!(tree.len(), 7);
//! assert_eq!(tree.iter().collect::<Vec<_>>(), [1, 3, 4, 5, 7, 8, 9]);
//!
//! // Inserting a key that's already there does nothing.
//! assert!(!tree.insert(5));
//! assert_eq!(tree.len(), 7);
//!
//! // Removing the root promotes its in-order successor.
//! assert!(tree.remove(5));
//! assert_eq!(tree.root_value(), 7);
//! assert!(!tree.contains(5));
//! ```

use std::alloc;
use std::fmt;

use log::trace;

use crate::error::AllocError;
use crate::iter::{IntoIter, Iter};
use crate::node::{self, Link, Node};

/// A Binary Search Tree of unique `i32` keys. Keys are inserted where a search for them ends so
/// the shape of the tree depends on insertion order; no rebalancing is done.
///
/// `min`, `max`, and `root_value` return `0` for an empty tree. Since `0` is also a valid key,
/// use [`first`][Tree::first], [`last`][Tree::last], or [`root`][Tree::root] when the difference
/// matters.
///
/// Cloning makes a deep copy with the same shape. Moving a `Tree` is `O(1)`; to move out of a
/// `Tree` you only have a `&mut` to, use [`take`][Tree::take].
pub struct Tree {
    root: Link,
    count: usize,
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Tree {
    fn clone(&self) -> Self {
        self.try_clone()
            .unwrap_or_else(|err| alloc::handle_alloc_error(err.layout()))
    }
}

impl fmt::Debug for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Trees are equal when they hold the same keys, regardless of shape.
impl PartialEq for Tree {
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count && self.iter().eq(other.iter())
    }
}

impl Eq for Tree {}

impl Tree {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            root: None,
            count: 0,
        }
    }

    /// The number of keys in the tree.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether the tree has no keys.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// The root node, if there is one. From here the whole structure of the tree can be walked.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// The key at the root of the tree, or `0` if the tree is empty.
    pub fn root_value(&self) -> i32 {
        self.root().map_or(0, Node::key)
    }

    /// The smallest key in the tree, or `0` if the tree is empty. This takes `O(height)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use int_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.min(), 0);
    ///
    /// tree.extend([4, -2, 7]);
    /// assert_eq!(tree.min(), -2);
    /// ```
    pub fn min(&self) -> i32 {
        self.first().unwrap_or(0)
    }

    /// The largest key in the tree, or `0` if the tree is empty. This takes `O(height)`.
    pub fn max(&self) -> i32 {
        self.last().unwrap_or(0)
    }

    /// The smallest key in the tree, if there is one.
    pub fn first(&self) -> Option<i32> {
        self.root().map(|root| root.leftmost().key)
    }

    /// The largest key in the tree, if there is one.
    pub fn last(&self) -> Option<i32> {
        self.root().map(|root| root.rightmost().key)
    }

    /// Whether `key` is in the tree. This takes `O(height)`.
    pub fn contains(&self, key: i32) -> bool {
        self.find(key).is_some()
    }

    /// Finds the node holding `key`, if there is one.
    ///
    /// # Examples
    ///
    /// ```
    /// use int_bst::Tree;
    ///
    /// let tree: Tree = [2, 1, 3].into_iter().collect();
    ///
    /// let two = tree.find(2).unwrap();
    /// assert_eq!(two.left().map(|n| n.key()), Some(1));
    /// assert_eq!(two.right().map(|n| n.key()), Some(3));
    /// assert!(tree.find(42).is_none());
    /// ```
    pub fn find(&self, key: i32) -> Option<&Node> {
        self.root().and_then(|root| root.find(key))
    }

    /// The number of levels in the tree: `0` when empty, `1` for a lone root, and [`len`][Tree::len]
    /// for a tree whose keys were inserted in sorted order.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut level: Vec<&Node> = self.root().into_iter().collect();
        while !level.is_empty() {
            height += 1;
            level = level
                .into_iter()
                .flat_map(|node| node.left().into_iter().chain(node.right()))
                .collect();
        }
        height
    }

    /// An iterator over the keys in ascending order.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.root(), self.count)
    }

    /// Inserts `key` into the tree, returning whether it was added. Inserting a key that's already
    /// present leaves the tree as it was.
    ///
    /// # Examples
    ///
    /// ```
    /// use int_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    ///
    /// # Aborts
    ///
    /// Like `Box::new`, this calls [`std::alloc::handle_alloc_error`] if a node can't be
    /// allocated. See [`try_insert`][Tree::try_insert] for a fallible version.
    pub fn insert(&mut self, key: i32) -> bool {
        match self.try_insert(key) {
            Ok(inserted) => inserted,
            Err(err) => alloc::handle_alloc_error(err.layout()),
        }
    }

    /// Like [`insert`][Tree::insert] but returns an error if the new node can't be allocated. The
    /// node is allocated before anything is linked so on error the tree is unchanged.
    pub fn try_insert(&mut self, key: i32) -> Result<bool, AllocError> {
        let slot = node::descend(&mut self.root, key);
        if slot.is_some() {
            return Ok(false);
        }

        *slot = Some(Node::try_new_boxed(key)?);
        self.count += 1;
        Ok(true)
    }

    /// Removes `key` from the tree, returning whether it was present.
    ///
    /// A node with one child is replaced by that child. A node with two children takes the key of
    /// its in-order successor (the smallest key in its right subtree) and the successor's node is
    /// removed instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use int_bst::Tree;
    ///
    /// let mut tree: Tree = [2, 1, 3].into_iter().collect();
    ///
    /// assert!(tree.remove(2));
    /// assert!(!tree.remove(2));
    /// assert_eq!(tree.root_value(), 3);
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn remove(&mut self, key: i32) -> bool {
        let slot = node::descend(&mut self.root, key);
        let Some(found) = slot else {
            return false;
        };

        if found.left.is_some() && found.right.is_some() {
            let Some(successor) = node::take_min(&mut found.right) else {
                unreachable!("node with two children has an empty right subtree");
            };
            trace!("removing {key}: replacing it with successor {}", successor.key);
            found.key = successor.key;

            if cfg!(debug_assertions) {
                if let Some(left) = found.left() {
                    assert!(left.key < found.key);
                }
                if let Some(right) = found.right() {
                    assert!(found.key < right.key);
                }
            }
        } else {
            trace!("removing {key}: splicing in its only child, if any");
            let child = found.left.take().or_else(|| found.right.take());
            *slot = child;
        }

        self.count -= 1;
        true
    }

    /// Removes every key from the tree.
    pub fn clear(&mut self) {
        trace!("clearing {} nodes", self.count);
        // `Node::drop` walks the subtree with its own stack.
        self.root = None;
        self.count = 0;
    }

    /// Moves the contents out of this tree in `O(1)`, leaving it empty but still usable.
    ///
    /// # Examples
    ///
    /// ```
    /// use int_bst::Tree;
    ///
    /// let mut source: Tree = [1, 2, 3].into_iter().collect();
    /// let dest = source.take();
    ///
    /// assert!(source.is_empty());
    /// assert_eq!(dest.len(), 3);
    /// ```
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// A deep copy of this tree with the same shape, or an error if a node can't be allocated.
    /// Anything copied before the failure is released before returning.
    pub fn try_clone(&self) -> Result<Self, AllocError> {
        let mut copy = Self::new();
        if let Some(root) = self.root() {
            let Self { root: copy_root, count } = &mut copy;
            node::try_copy(root, copy_root, count)?;
        }
        Ok(copy)
    }

    /// Walks every node checking the BST ordering and that `count` matches the number of nodes.
    #[cfg(test)]
    pub(crate) fn check_invariants(&self) {
        assert_eq!(self.root.is_none(), self.count == 0);

        let mut seen = 0;
        let mut stack: Vec<(&Node, Option<i32>, Option<i32>)> = Vec::new();
        stack.extend(self.root().map(|root| (root, None, None)));
        while let Some((node, lower, upper)) = stack.pop() {
            seen += 1;
            assert!(lower.map_or(true, |lower| lower < node.key));
            assert!(upper.map_or(true, |upper| node.key < upper));
            stack.extend(node.left().map(|left| (left, lower, Some(node.key))));
            stack.extend(node.right().map(|right| (right, Some(node.key), upper)));
        }

        assert_eq!(seen, self.count);
    }
}

impl Extend<i32> for Tree {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, keys: I) {
        for key in keys {
            self.insert(key);
        }
    }
}

impl FromIterator<i32> for Tree {
    fn from_iter<I: IntoIterator<Item = i32>>(keys: I) -> Self {
        let mut tree = Self::new();
        tree.extend(keys);
        tree
    }
}

impl IntoIterator for Tree {
    type Item = i32;
    type IntoIter = IntoIter;

    fn into_iter(self) -> IntoIter {
        let Self { root, count } = self;
        IntoIter::new(root, count)
    }
}

impl<'a> IntoIterator for &'a Tree {
    type Item = i32;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

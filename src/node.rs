//! Storage for a [`Tree`][crate::Tree]. Every `Node` is owned by exactly one [`Link`], either its
//! parent's `left`/`right` or the tree's root, so there are no parent pointers and nothing to keep
//! in sync when a subtree moves.
//!
//! Everything that walks an arbitrary amount of the tree (descent, dropping, copying) uses a loop
//! or an explicit stack so that degenerate trees (e.g. built from ascending keys) don't exhaust the
//! call stack.

use std::alloc::{self, Layout};
use std::cmp::Ordering;
use std::fmt;
use std::ptr::NonNull;

use log::debug;

use crate::error::AllocError;

/// The owning relation from a parent (or the tree itself) to a possibly absent child.
pub(crate) type Link = Option<Box<Node>>;

/// A single key in a [`Tree`][crate::Tree] along with its two subtrees.
///
/// `Node`s are only ever handed out by shared reference (see [`Tree::find`][crate::Tree::find] and
/// [`Tree::root`][crate::Tree::root]) so callers can walk the structure but can't change a key out
/// from under the ordering of the tree.
pub struct Node {
    pub(crate) key: i32,
    pub(crate) left: Link,
    pub(crate) right: Link,
}

impl Drop for Node {
    fn drop(&mut self) {
        // Detach every descendant onto a stack before it's dropped so that each `Node::drop` call
        // sees no children and the recursion never goes deeper than one level.
        let mut stack: Vec<Box<Node>> = Vec::new();
        stack.extend(self.left.take());
        stack.extend(self.right.take());
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("left", &self.left().map(Node::key))
            .field("right", &self.right().map(Node::key))
            .finish()
    }
}

impl Node {
    /// Allocates a leaf holding `key`. Unlike `Box::new` this reports allocator failure instead of
    /// aborting, which lets callers leave their tree untouched.
    pub(crate) fn try_new_boxed(key: i32) -> Result<Box<Self>, AllocError> {
        let layout = Layout::new::<Self>();
        // SAFETY: `Node` holds an `i32` so `layout` is never zero-sized.
        let ptr = unsafe { alloc::alloc(layout) }.cast::<Self>();
        let Some(ptr) = NonNull::new(ptr) else {
            debug!("failed to allocate a node for key {key}");
            return Err(AllocError::new(layout));
        };

        // SAFETY: `ptr` is non-null and was just allocated by the global allocator with the layout
        // of `Node`, which is what `Box::from_raw` requires. The memory is uninitialized so we
        // `write` instead of assigning to avoid dropping garbage.
        unsafe {
            ptr.as_ptr().write(Self {
                key,
                left: None,
                right: None,
            });
            Ok(Box::from_raw(ptr.as_ptr()))
        }
    }

    /// The key stored in this node.
    pub fn key(&self) -> i32 {
        self.key
    }

    /// The root of the left subtree. All of its keys are less than [`key`][Node::key].
    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    /// The root of the right subtree. All of its keys are greater than [`key`][Node::key].
    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// The node holding the smallest key in this subtree.
    pub(crate) fn leftmost(&self) -> &Self {
        let mut node = self;
        while let Some(left) = node.left() {
            node = left;
        }
        node
    }

    /// The node holding the largest key in this subtree.
    pub(crate) fn rightmost(&self) -> &Self {
        let mut node = self;
        while let Some(right) = node.right() {
            node = right;
        }
        node
    }

    /// Finds the node in this subtree holding `key`.
    pub(crate) fn find(&self, key: i32) -> Option<&Self> {
        let mut node = self;
        loop {
            node = match key.cmp(&node.key) {
                Ordering::Less => node.left()?,
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right()?,
            };
        }
    }
}

/// Walks down from `link` and returns the link that either holds `key` or is the vacant position
/// `key` would be inserted at.
pub(crate) fn descend(mut link: &mut Link, key: i32) -> &mut Link {
    loop {
        // Pick a direction through a shared borrow first. Binding `node` mutably and then
        // returning `link` would leave `link` borrowed for the rest of the function.
        let ordering = match link.as_deref() {
            Some(node) => key.cmp(&node.key),
            None => return link,
        };
        link = match (ordering, link) {
            (Ordering::Less, Some(node)) => &mut node.left,
            (Ordering::Greater, Some(node)) => &mut node.right,
            (_, found) => return found,
        };
    }
}

/// The link holding the node with the smallest key in the subtree at `link`, i.e. the end of the
/// chain of left children.
fn leftmost_link(mut link: &mut Link) -> &mut Link {
    loop {
        let has_left = link.as_deref().map_or(false, |node| node.left.is_some());
        link = match (has_left, link) {
            (true, Some(node)) => &mut node.left,
            (_, leftmost) => return leftmost,
        };
    }
}

/// Detaches the node with the smallest key in the subtree at `link`, splicing its right child (it
/// can't have a left one) into its place. The returned node has no children.
pub(crate) fn take_min(link: &mut Link) -> Option<Box<Node>> {
    let link = leftmost_link(link);
    let mut min = link.take()?;
    *link = min.right.take();
    Some(min)
}

/// Builds a copy of the subtree rooted at `source` into the empty `dest`, node for node, so the
/// copy has exactly the same shape. `count` is bumped for every node attached so that if an
/// allocation fails, whatever was copied so far is still a consistent tree that its owner can
/// drop.
pub(crate) fn try_copy(
    source: &Node,
    dest: &mut Link,
    count: &mut usize,
) -> Result<(), AllocError> {
    let mut pending = vec![(source, dest)];
    while let Some((from, to)) = pending.pop() {
        let copy = to.insert(Node::try_new_boxed(from.key)?);
        *count += 1;

        let Node { left, right, .. } = &mut **copy;
        if let Some(from_left) = from.left() {
            pending.push((from_left, left));
        }
        if let Some(from_right) = from.right() {
            pending.push((from_right, right));
        }
    }

    Ok(())
}

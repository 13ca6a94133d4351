//! In-order iteration over the keys of a [`Tree`][crate::Tree]. Both iterators keep a stack of the
//! nodes whose left subtrees have been visited but which haven't been yielded yet, so they use
//! `O(height)` extra memory.

use std::iter::FusedIterator;

use crate::node::{Link, Node};

/// A borrowing iterator over the keys of a [`Tree`][crate::Tree] in ascending order.
///
/// Created by [`Tree::iter`][crate::Tree::iter].
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    stack: Vec<&'a Node>,
    remaining: usize,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(root: Option<&'a Node>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.remaining -= 1;
        Some(node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}
impl FusedIterator for Iter<'_> {}

/// An owning iterator over the keys of a [`Tree`][crate::Tree] in ascending order. Nodes are
/// released as their keys are yielded; anything left when the iterator is dropped is released
/// then.
///
/// Created by calling `into_iter` on a [`Tree`][crate::Tree].
#[derive(Debug)]
pub struct IntoIter {
    stack: Vec<Box<Node>>,
    remaining: usize,
}

impl IntoIter {
    pub(crate) fn new(root: Link, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    /// Unlike [`Iter`], each node on the stack has its left child detached so that a popped node
    /// owns nothing but its right subtree.
    fn push_left_spine(&mut self, mut link: Link) {
        while let Some(mut node) = link {
            link = node.left.take();
            self.stack.push(node);
        }
    }
}

impl Iterator for IntoIter {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        let mut node = self.stack.pop()?;
        self.push_left_spine(node.right.take());
        self.remaining -= 1;
        Some(node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for IntoIter {}
impl FusedIterator for IntoIter {}

//! Property tests for the public API of the tree, checked against `BTreeSet` as a model.

use quickcheck::{Arbitrary, Gen};

mod tree;

/// An enum for the various kinds of "things" to do to
/// a binary search tree in a quicktest.
#[derive(Copy, Clone, Debug)]
pub enum Op {
    /// Insert the key into the data structure
    Insert(i8),
    /// Remove the key from the data structure
    Remove(i8),
}

impl Arbitrary for Op {
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            Op::Insert(i8::arbitrary(g))
        } else {
            Op::Remove(i8::arbitrary(g))
        }
    }
}

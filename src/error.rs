use std::alloc::Layout;

/// Returned by the fallible operations ([`Tree::try_insert`][crate::Tree::try_insert] and
/// [`Tree::try_clone`][crate::Tree::try_clone]) when the global allocator can't provide memory
/// for a new node. The tree the operation was called on is left exactly as it was.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("failed to allocate {} bytes for a tree node", .layout.size())]
pub struct AllocError {
    layout: Layout,
}

impl AllocError {
    pub(crate) fn new(layout: Layout) -> Self {
        Self { layout }
    }

    /// The layout of the allocation that failed.
    pub fn layout(&self) -> Layout {
        self.layout
    }
}

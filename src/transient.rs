use crate::error::VectorError;
use crate::vector::RadixVector;

/// A mutable builder derived from a [`RadixVector`], for bulk construction.
///
/// `TransientVector` retains the same trie shape as its persistent
/// counterpart and exposes the same five operations as `&mut self` methods
/// instead of value-returning ones. Unlike the persistent operations, its
/// write path calls [`std::sync::Arc::make_mut`] directly on the trie it
/// owns, without first cloning the `Arc` handle — so a node reachable only
/// from this builder (strong count one) is mutated in place, and only a
/// node still shared with some other, already-frozen version is copied
/// before the write. That is the "owner tag compared on write" safety
/// condition from the design notes, realized directly through `Arc`'s own
/// uniqueness check rather than a separate tag field.
///
/// Obtained via [`RadixVector::transient`] and converted back with
/// [`Self::freeze`].
pub struct TransientVector<T: Clone, const B: usize = { crate::config::CLASSICAL_BRANCHING }> {
    inner: RadixVector<T, B>,
}

impl<T: Clone, const B: usize> TransientVector<T, B> {
    pub(crate) fn new(inner: RadixVector<T, B>) -> Self {
        Self { inner }
    }

    /// Number of elements currently held.
    pub fn len(&self) -> u32 {
        self.inner.len()
    }

    /// Whether the builder holds no elements.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Reads the element at `index`.
    pub fn get(&self, index: u32) -> Result<&T, VectorError> {
        self.inner.get(index)
    }

    /// Reads the last element.
    pub fn peek(&self) -> Result<&T, VectorError> {
        self.inner.peek()
    }

    /// Replaces the element at `index` in place.
    pub fn update(&mut self, index: u32, element: T) -> Result<(), VectorError> {
        self.inner.update_in_place(index, element)
    }

    /// Appends `element` in place.
    pub fn push(&mut self, element: T) -> Result<(), VectorError> {
        self.inner.push_in_place(element)
    }

    /// Removes the last element in place.
    pub fn pop(&mut self) -> Result<(), VectorError> {
        self.inner.pop_in_place()
    }

    /// Truncates to the first `n` elements in place.
    pub fn right_slice(&mut self, n: u32) -> Result<(), VectorError> {
        self.inner.right_slice_in_place(n)
    }

    /// Consumes the builder and returns a persistent, immutable vector.
    /// After this call no further in-place mutation of the returned trie is
    /// possible except through new persistent operations.
    pub fn freeze(self) -> RadixVector<T, B> {
        self.inner
    }
}

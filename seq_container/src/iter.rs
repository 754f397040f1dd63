//! Index-tagged iterators shared by both container variants.
//!
//! Each iterator snapshots the live prefix `[0, len)` when it is created and
//! visits it in ascending index order. Calling `iter()` again starts over.

use core::iter::FusedIterator;

/// Yields `(index, value)` with each element copied out.
#[derive(Debug, Clone)]
pub struct Iter<'a, T: Copy> {
    slots: &'a [T],
    index: usize,
}

impl<'a, T: Copy> Iter<'a, T> {
    pub(crate) fn new(slots: &'a [T]) -> Self {
        Self { slots, index: 0 }
    }
}

impl<T: Copy> Iterator for Iter<'_, T> {
    type Item = (usize, T);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = *self.slots.get(self.index)?;
        let index = self.index;
        self.index += 1;
        Some((index, value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.slots.len() - self.index;
        (left, Some(left))
    }
}

impl<T: Copy> ExactSizeIterator for Iter<'_, T> {}
impl<T: Copy> FusedIterator for Iter<'_, T> {}

/// Yields `(index, &value)`.
#[derive(Debug, Clone)]
pub struct IterRef<'a, T> {
    slots: &'a [T],
    index: usize,
}

impl<'a, T> IterRef<'a, T> {
    pub(crate) fn new(slots: &'a [T]) -> Self {
        Self { slots, index: 0 }
    }
}

impl<'a, T> Iterator for IterRef<'a, T> {
    type Item = (usize, &'a T);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.slots.get(self.index)?;
        let index = self.index;
        self.index += 1;
        Some((index, value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.slots.len() - self.index;
        (left, Some(left))
    }
}

impl<T> ExactSizeIterator for IterRef<'_, T> {}
impl<T> FusedIterator for IterRef<'_, T> {}

/// Yields `(index, &mut value)`, allowing in-place updates.
#[derive(Debug)]
pub struct IterMut<'a, T> {
    slots: &'a mut [T],
    index: usize,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(slots: &'a mut [T]) -> Self {
        Self { slots, index: 0 }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = (usize, &'a mut T);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        // Detach the head so the yielded reference outlives `&mut self`.
        let slots = core::mem::take(&mut self.slots);
        let (value, rest) = slots.split_first_mut()?;
        self.slots = rest;
        let index = self.index;
        self.index += 1;
        Some((index, value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.slots.len(), Some(self.slots.len()))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

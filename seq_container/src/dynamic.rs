use crate::growth::grown_capacity;
use crate::iter::{IterMut, IterRef};
use crate::{Box, SeqContainer, Vec};
use bytemuck::Pod;
use log::trace;

/// Heap-backed growable array.
///
/// Capacity is either `0` or a power of two no smaller than
/// [`MIN_CAPACITY`](crate::growth::MIN_CAPACITY). Growing allocates a new
/// buffer, copies the live prefix into it and only then drops the old one.
///
/// # Examples
///
/// ```
/// use seq_container::prelude::*;
///
/// let mut a = DynArray::<i32>::new();
/// assert_eq!(a.capacity(), 0);
///
/// for i in 0..200 {
///     assert!(a.push(i));
/// }
///
/// assert_eq!(a.len(), 200);
/// assert_eq!(a.capacity(), 256);
/// assert_eq!(a.at(199), 199);
///
/// a.destroy();
/// assert_eq!((a.len(), a.capacity()), (0, 0));
/// ```
#[derive(Clone)]
pub struct DynArray<T: Pod> {
    len: usize,
    slots: Box<[T]>,
}

impl<T: Pod> DynArray<T> {
    /// Creates an empty array. Does not allocate.
    pub fn new() -> Self {
        Self {
            len: 0,
            slots: Box::default(),
        }
    }

    /// Creates an empty array able to hold `capacity` elements without
    /// growing. The allocation is rounded with the usual growth rule.
    ///
    /// ```
    /// use seq_container::prelude::*;
    ///
    /// let a = DynArray::<u64>::with_capacity(100);
    /// assert_eq!(a.capacity(), 128);
    /// assert!(a.is_empty());
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        let mut array = Self::new();
        array.ensure_capacity(capacity);
        array
    }

    /// Creates an array holding a copy of `values`.
    pub fn from_slice(values: &[T]) -> Self {
        let mut array = Self::with_capacity(values.len());
        array.slots[..values.len()].copy_from_slice(values);
        array.len = values.len();
        array
    }

    /// Swaps in a buffer of `capacity` zeroed slots holding the live prefix.
    #[track_caller]
    fn reallocate(&mut self, capacity: usize) {
        let mut buffer = Vec::new();
        if buffer.try_reserve_exact(capacity).is_err() {
            panic!(
                "allocation of {capacity} slots of {} bytes failed",
                core::mem::size_of::<T>()
            );
        }
        buffer.extend_from_slice(&self.slots[..self.len]);
        buffer.resize(capacity, T::zeroed());

        trace!(
            "DynArray<{}> growing {} -> {} slots",
            core::any::type_name::<T>(),
            self.slots.len(),
            capacity
        );
        self.slots = buffer.into_boxed_slice();
    }
}

impl<T: Pod> SeqContainer<T> for DynArray<T> {
    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    fn ensure_capacity(&mut self, requested: usize) {
        if self.capacity() < requested {
            self.reallocate(grown_capacity(requested));
        }
    }

    #[inline]
    fn can_hold(&self, _requested: usize) -> bool {
        true
    }

    #[inline]
    fn push(&mut self, value: T) -> bool {
        self.ensure_capacity(self.len + 1);
        self.slots[self.len] = value;
        self.len += 1;
        true
    }

    #[inline]
    fn clear(&mut self) {
        self.len = 0;
    }

    fn destroy(&mut self) {
        if !self.slots.is_empty() {
            trace!(
                "DynArray<{}> releasing {} slots",
                core::any::type_name::<T>(),
                self.slots.len()
            );
        }
        self.slots = Box::default();
        self.len = 0;
    }

    #[inline]
    fn as_slice(&self) -> &[T] {
        &self.slots[..self.len]
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.slots[..self.len]
    }
}

impl<T: Pod> core::ops::Index<usize> for DynArray<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &Self::Output {
        self.at_ref(index)
    }
}

impl<T: Pod> core::ops::IndexMut<usize> for DynArray<T> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.at_mut(index)
    }
}

impl<T: Pod> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Pod + core::fmt::Debug> core::fmt::Debug for DynArray<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: Pod + PartialEq> PartialEq for DynArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Pod> Extend<T> for DynArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.ensure_capacity(self.len.saturating_add(iter.size_hint().0));
        for value in iter {
            self.push(value);
        }
    }
}

impl<T: Pod> FromIterator<T> for DynArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

impl<'a, T: Pod> IntoIterator for &'a DynArray<T> {
    type Item = (usize, &'a T);
    type IntoIter = IterRef<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_ref()
    }
}

impl<'a, T: Pod> IntoIterator for &'a mut DynArray<T> {
    type Item = (usize, &'a mut T);
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

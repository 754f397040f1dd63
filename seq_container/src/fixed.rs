use crate::iter::{IterMut, IterRef};
use crate::{ContainerError, SeqContainer};
use bytemuck::Pod;

/// Inline array with a compile-time bound of `N` elements.
///
/// Never allocates. Once `N` elements are stored, [`push`](SeqContainer::push)
/// returns `false` and leaves the array untouched.
///
/// # Examples
///
/// ```
/// use seq_container::prelude::*;
///
/// let mut a = FixedArray::<i32, 12>::new();
/// let accepted = (0..200).filter(|&i| a.push(i)).count();
///
/// assert_eq!(accepted, 12);
/// assert_eq!(a.len(), 12);
/// assert_eq!(a.at(11), 11);
/// ```
#[derive(Clone, Copy)]
pub struct FixedArray<T: Pod, const N: usize> {
    len: usize,
    slots: [T; N],
}

impl<T: Pod, const N: usize> FixedArray<T, N> {
    /// Number of slots, known at compile time.
    pub const CAPACITY: usize = N;

    /// Creates an empty array with zeroed slots.
    pub fn new() -> Self {
        Self {
            len: 0,
            slots: [T::zeroed(); N],
        }
    }

    /// Creates an array holding a copy of `values`.
    ///
    /// # Errors
    ///
    /// Returns `ContainerError::CapacityExceeded` if `values` is longer than `N`.
    pub fn from_slice(values: &[T]) -> Result<Self, ContainerError> {
        let mut array = Self::new();
        array.try_extend_from_slice(values)?;
        Ok(array)
    }

    /// Returns `true` when no further element can be appended.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == N
    }
}

impl<T: Pod, const N: usize> SeqContainer<T> for FixedArray<T, N> {
    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    fn capacity(&self) -> usize {
        N
    }

    #[inline]
    #[track_caller]
    fn ensure_capacity(&mut self, requested: usize) {
        if requested > N {
            panic!("cannot increase capacity of FixedArray<_, {N}> to {requested}");
        }
    }

    #[inline]
    fn can_hold(&self, requested: usize) -> bool {
        requested <= N
    }

    #[inline]
    fn push(&mut self, value: T) -> bool {
        if self.len == N {
            return false;
        }
        self.slots[self.len] = value;
        self.len += 1;
        true
    }

    #[inline]
    fn clear(&mut self) {
        self.len = 0;
    }

    /// No owned buffer to release.
    #[inline]
    fn destroy(&mut self) {}

    #[inline]
    fn as_slice(&self) -> &[T] {
        &self.slots[..self.len]
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.slots[..self.len]
    }
}

impl<T: Pod, const N: usize> core::ops::Index<usize> for FixedArray<T, N> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &Self::Output {
        self.at_ref(index)
    }
}

impl<T: Pod, const N: usize> core::ops::IndexMut<usize> for FixedArray<T, N> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.at_mut(index)
    }
}

impl<T: Pod, const N: usize> Default for FixedArray<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Pod + core::fmt::Debug, const N: usize> core::fmt::Debug for FixedArray<T, N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: Pod + PartialEq, const N: usize> PartialEq for FixedArray<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<'a, T: Pod, const N: usize> IntoIterator for &'a FixedArray<T, N> {
    type Item = (usize, &'a T);
    type IntoIter = IterRef<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_ref()
    }
}

impl<'a, T: Pod, const N: usize> IntoIterator for &'a mut FixedArray<T, N> {
    type Item = (usize, &'a mut T);
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_is_constant() {
        const CAP: usize = FixedArray::<u64, 12>::CAPACITY;
        assert_eq!(CAP, 12);

        let a = FixedArray::<u64, 12>::new();
        assert_eq!(a.capacity(), 12);
        assert_eq!(a.len(), 0);
    }

    #[test]
    fn rejects_when_full_without_mutation() {
        let mut a = FixedArray::<u8, 2>::new();
        assert!(a.push(1));
        assert!(a.push(2));
        assert!(a.is_full());
        assert!(!a.push(3));
        assert!(!a.push_ref(&4));
        assert_eq!(a.len(), 2);
        assert_eq!(a.as_slice(), &[1, 2]);
    }

    #[test]
    fn zero_bound_rejects_everything() {
        let mut a = FixedArray::<u32, 0>::new();
        assert!(a.is_full());
        assert!(!a.push(1));
        assert!(a.is_empty());
    }

    #[test]
    fn clear_allows_refilling() {
        let mut a = FixedArray::<u8, 3>::from_slice(&[1, 2, 3]).unwrap();
        a.clear();
        assert!(a.is_empty());
        assert_eq!(a.capacity(), 3);
        assert!(a.push(9));
        assert_eq!(a.at(0), 9);
    }

    #[test]
    fn destroy_is_a_noop() {
        let mut a = FixedArray::<u8, 3>::from_slice(&[1, 2]).unwrap();
        a.destroy();
        a.destroy();
        assert_eq!(a.as_slice(), &[1, 2]);
        assert_eq!(a.capacity(), 3);
    }

    #[test]
    fn ensure_capacity_within_bound_is_fine() {
        let mut a = FixedArray::<u8, 4>::new();
        a.ensure_capacity(0);
        a.ensure_capacity(4);
        assert_eq!(a.capacity(), 4);
    }

    #[test]
    #[should_panic(expected = "cannot increase capacity of FixedArray<_, 4> to 5")]
    fn ensure_capacity_past_bound_panics() {
        let mut a = FixedArray::<u8, 4>::new();
        a.ensure_capacity(5);
    }

    #[test]
    fn from_slice_too_long() {
        assert_eq!(
            FixedArray::<u8, 2>::from_slice(&[1, 2, 3]),
            Err(ContainerError::CapacityExceeded {
                capacity: 2,
                requested: 3
            })
        );
    }

    #[test]
    fn iteration_over_fixed() {
        let mut a = FixedArray::<u16, 8>::from_slice(&[4, 5, 6]).unwrap();
        for (_, v) in &mut a {
            *v += 1;
        }
        let mut expected = 0;
        for (i, v) in &a {
            assert_eq!(i, expected);
            assert_eq!(*v, 5 + i as u16);
            expected += 1;
        }
        assert_eq!(expected, 3);
    }

    #[test]
    #[should_panic(expected = "index 1 out of range for length 1")]
    fn index_past_len_panics() {
        let a = FixedArray::<u8, 4>::from_slice(&[1]).unwrap();
        let _ = a[1];
    }
}

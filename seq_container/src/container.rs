use crate::ContainerError;
use crate::iter::{Iter, IterMut, IterRef};
use bytemuck::Pod;

/// Common interface over the dynamic and fixed-capacity arrays.
///
/// `T` must implement [`bytemuck::Pod`]: elements are copied in and out as
/// plain bit patterns and never dropped. Each implementor supplies storage
/// primitives (`push`, `ensure_capacity`, `clear`, `destroy`, slice views);
/// everything else is provided on top of them, so generic callers are
/// monomorphized per variant with no runtime dispatch.
///
/// # Examples
///
/// ```
/// use seq_container::prelude::*;
///
/// fn sum<C: SeqContainer<u32>>(c: &C) -> u32 {
///     c.iter().map(|(_, v)| v).sum()
/// }
///
/// let mut d = DynArray::<u32>::new();
/// let mut f = FixedArray::<u32, 4>::new();
/// for v in [1, 2, 3] {
///     assert!(d.push(v));
///     assert!(f.push_ref(&v));
/// }
///
/// assert_eq!(sum(&d), 6);
/// assert_eq!(sum(&f), 6);
/// ```
pub trait SeqContainer<T: Pod> {
    /// Returns the number of elements stored.
    fn len(&self) -> usize;

    /// Returns the number of slots usable without growth.
    fn capacity(&self) -> usize;

    /// Makes room for at least `requested` elements.
    ///
    /// # Panics
    ///
    /// A fixed array panics when `requested` exceeds its bound. A dynamic
    /// array panics only on capacity overflow or allocation failure.
    fn ensure_capacity(&mut self, requested: usize);

    /// Returns `true` if `requested` elements fit now or after growth.
    /// Does not grow and never panics.
    fn can_hold(&self, requested: usize) -> bool;

    /// Appends `value`.
    ///
    /// Returns `false` without mutating anything if the container is full
    /// and cannot grow. A dynamic array always returns `true`.
    ///
    /// Growth replaces a dynamic array's buffer, so no element reference may
    /// be held across a `push`; the `&mut self` receiver enforces this.
    fn push(&mut self, value: T) -> bool;

    /// Sets the length to zero. Capacity and slot contents are retained.
    fn clear(&mut self);

    /// Releases any owned buffer and resets to the freshly created state.
    ///
    /// Safe to call repeatedly. A no-op for containers without an owned
    /// buffer.
    fn destroy(&mut self);

    /// Live elements `[0, len)`.
    fn as_slice(&self) -> &[T];

    /// Live elements `[0, len)`, mutably.
    fn as_mut_slice(&mut self) -> &mut [T];

    /// Returns `true` if the container holds no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Slots left before the current capacity is reached.
    #[inline]
    fn remaining(&self) -> usize {
        self.capacity() - self.len()
    }

    /// Appends a copy of `*value`. Same contract as [`push`](Self::push).
    #[inline]
    fn push_ref(&mut self, value: &T) -> bool {
        self.push(*value)
    }

    /// Appends `value`, reporting a full fixed array as an error.
    fn try_push(&mut self, value: T) -> Result<(), ContainerError> {
        if self.push(value) {
            Ok(())
        } else {
            Err(ContainerError::CapacityExceeded {
                capacity: self.capacity(),
                requested: self.len() + 1,
            })
        }
    }

    /// Appends every element of `values`, or none of them.
    fn try_extend_from_slice(&mut self, values: &[T]) -> Result<(), ContainerError> {
        let requested = self.len() + values.len();
        if !self.can_hold(requested) {
            return Err(ContainerError::CapacityExceeded {
                capacity: self.capacity(),
                requested,
            });
        }
        self.ensure_capacity(requested);
        for value in values {
            self.push_ref(value);
        }
        Ok(())
    }

    /// Returns a copy of the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[inline]
    #[track_caller]
    fn at(&self, index: usize) -> T {
        *self.at_ref(index)
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[inline]
    #[track_caller]
    fn at_ref(&self, index: usize) -> &T {
        let len = self.len();
        match self.as_slice().get(index) {
            Some(value) => value,
            None => out_of_range(index, len),
        }
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[inline]
    #[track_caller]
    fn at_mut(&mut self, index: usize) -> &mut T {
        let len = self.len();
        match self.as_mut_slice().get_mut(index) {
            Some(value) => value,
            None => out_of_range(index, len),
        }
    }

    /// Returns a copy of the element at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than `len()`.
    #[inline]
    unsafe fn at_unchecked(&self, index: usize) -> T {
        unsafe { *self.at_ref_unchecked(index) }
    }

    /// Returns a reference to the element at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than `len()`.
    #[inline]
    unsafe fn at_ref_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len());
        unsafe { self.as_slice().get_unchecked(index) }
    }

    /// Returns a mutable reference to the element at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than `len()`.
    #[inline]
    unsafe fn at_mut_unchecked(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len());
        unsafe { self.as_mut_slice().get_unchecked_mut(index) }
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `ContainerError::OutOfBounds` if `index >= len()`.
    #[inline]
    fn get(&self, index: usize) -> Result<&T, ContainerError> {
        let len = self.len();
        self.as_slice()
            .get(index)
            .ok_or(ContainerError::OutOfBounds { index, len })
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `ContainerError::OutOfBounds` if `index >= len()`.
    #[inline]
    fn get_mut(&mut self, index: usize) -> Result<&mut T, ContainerError> {
        let len = self.len();
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(ContainerError::OutOfBounds { index, len })
    }

    /// Overwrites the element at `index`.
    ///
    /// This is a convenience method equivalent to `*container.get_mut(index)? = value`.
    fn write(&mut self, index: usize, value: T) -> Result<(), ContainerError> {
        let slot = self.get_mut(index)?;
        *slot = value;
        Ok(())
    }

    /// Live elements as raw bytes.
    #[inline]
    fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.as_slice())
    }

    /// Iterates `(index, value)` pairs, copying each element out.
    #[inline]
    fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.as_slice())
    }

    /// Iterates `(index, &value)` pairs.
    #[inline]
    fn iter_ref(&self) -> IterRef<'_, T> {
        IterRef::new(self.as_slice())
    }

    /// Iterates `(index, &mut value)` pairs.
    #[inline]
    fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.as_mut_slice())
    }
}

#[cold]
#[inline(never)]
#[track_caller]
fn out_of_range(index: usize, len: usize) -> ! {
    panic!("index {index} out of range for length {len}")
}

//! Capacity rounding for [`DynArray`](crate::DynArray).

/// Smallest non-zero capacity a dynamic array allocates.
pub const MIN_CAPACITY: usize = 8;

/// Rounds `n` up to a power of two. Values `0` and `1` are returned as-is.
///
/// Returns `None` when the result does not fit in `usize`.
#[inline]
pub const fn round_up_pow2(n: usize) -> Option<usize> {
    if n < 2 {
        return Some(n);
    }
    n.checked_next_power_of_two()
}

/// Capacity a dynamic array grows to when `requested` slots are needed.
///
/// # Panics
///
/// Panics if the rounded capacity overflows `usize`.
///
/// # Examples
///
/// ```
/// use seq_container::growth::grown_capacity;
///
/// assert_eq!(grown_capacity(1), 8);
/// assert_eq!(grown_capacity(9), 16);
/// assert_eq!(grown_capacity(200), 256);
/// ```
#[inline]
#[track_caller]
pub fn grown_capacity(requested: usize) -> usize {
    if requested <= MIN_CAPACITY {
        return MIN_CAPACITY;
    }
    match round_up_pow2(requested) {
        Some(capacity) => capacity,
        None => panic!("capacity overflow: cannot hold {requested} elements"),
    }
}

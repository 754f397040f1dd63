//! # seq_container
//!
//! Append-only sequence containers over plain-old-data elements, with two
//! interchangeable storage strategies behind one trait:
//!
//! - [`DynArray<T>`]: heap buffer, grows to `max(8, next_power_of_two(n))` slots.
//! - [`FixedArray<T, N>`]: inline `[T; N]`, never allocates, rejects appends once full.
//!
//! ```rust
//! use seq_container::prelude::*;
//!
//! fn fill<C: SeqContainer<i32>>(c: &mut C, n: i32) -> usize {
//!     (0..n).filter(|&i| c.push(i)).count()
//! }
//!
//! let mut d = DynArray::<i32>::new();
//! let mut f = FixedArray::<i32, 12>::new();
//!
//! assert_eq!(fill(&mut d, 200), 200);
//! assert_eq!(fill(&mut f, 200), 12);
//!
//! assert_eq!(d.capacity(), 256);
//! assert_eq!(FixedArray::<i32, 12>::CAPACITY, 12);
//! assert_eq!(d.at(199), 199);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
pub use std::{boxed::Box, vec::Vec};

#[cfg(not(feature = "std"))]
pub use alloc::{boxed::Box, vec::Vec};

pub mod container;
pub mod dynamic;
pub mod error;
pub mod fixed;
pub mod growth;
pub mod iter;
pub mod prelude;

pub use container::SeqContainer;
pub use dynamic::DynArray;
pub use error::ContainerError;
pub use fixed::FixedArray;
pub use iter::{Iter, IterMut, IterRef};

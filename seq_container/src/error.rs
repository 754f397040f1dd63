#[cfg(feature = "std")]
use thiserror::Error;

/// Recoverable container errors.
///
/// Only the `try_*`, `get*` and `write` family reports through this type.
/// Contract violations (checked index past `len`, growing a fixed array,
/// allocation exhaustion) panic instead.
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerError {
    /// Out-of-bounds access
    #[cfg_attr(feature = "std", error("Index {index} is out of bounds for length {len}"))]
    OutOfBounds { index: usize, len: usize },

    /// A fixed-capacity container cannot hold the requested element count
    #[cfg_attr(
        feature = "std",
        error("Capacity {capacity} exceeded: {requested} elements requested")
    )]
    CapacityExceeded { capacity: usize, requested: usize },
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for ContainerError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ContainerError::OutOfBounds { index, len } => {
                write!(f, "Index {} is out of bounds for length {}", index, len)
            }
            ContainerError::CapacityExceeded {
                capacity,
                requested,
            } => write!(
                f,
                "Capacity {} exceeded: {} elements requested",
                capacity, requested
            ),
        }
    }
}

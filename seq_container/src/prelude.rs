//! Convenience re-exports for common usage

pub use crate::container::SeqContainer;
pub use crate::dynamic::DynArray;
pub use crate::error::ContainerError;
pub use crate::fixed::FixedArray;

// Bytemuck utilities
pub use bytemuck::{Pod, Zeroable};

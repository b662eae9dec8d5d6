//! World state for the voxel sandbox
//!
//! This module holds the lattice coordinate and cube-face types and the
//! block registry that owns the set of occupied cells.

pub mod block;
pub mod registry;

pub use block::*;
pub use registry::*;

use bevy::prelude::*;

use super::block::BlockCoord;

/// Authoritative set of occupied lattice coordinates.
///
/// Constructed once at startup from persisted state and owned by the ECS as
/// a resource; the pointer-interaction callbacks are its only writers. The
/// set is keyed by coordinate (a duplicate add is a no-op) and keeps
/// insertion order for rendering, though the order carries no meaning.
#[derive(Resource, Debug, Default)]
pub struct BlockRegistry {
    blocks: Vec<BlockCoord>,
}

impl BlockRegistry {
    /// Build a registry from persisted coordinates, dropping duplicates a
    /// previous session may have written (first occurrence wins).
    pub fn from_blocks(blocks: Vec<BlockCoord>) -> Self {
        let mut registry = Self::default();
        for coord in blocks {
            registry.add(coord);
        }
        registry
    }

    /// Occupy a cell. Returns false if it was already occupied.
    pub fn add(&mut self, coord: BlockCoord) -> bool {
        if self.contains(coord) {
            return false;
        }
        self.blocks.push(coord);
        true
    }

    /// Vacate a cell. Removing an unoccupied cell is a silent no-op.
    pub fn remove(&mut self, coord: BlockCoord) -> bool {
        let before = self.blocks.len();
        self.blocks.retain(|c| *c != coord);
        self.blocks.len() != before
    }

    pub fn contains(&self, coord: BlockCoord) -> bool {
        self.blocks.contains(&coord)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Snapshot of the current membership, in insertion order.
    pub fn blocks(&self) -> &[BlockCoord] {
        &self.blocks
    }
}

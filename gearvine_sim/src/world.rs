// Dense 3D voxel grid for the mechanism world.
//
// The world is stored as a flat `Vec<Block>` indexed by
// `x + z * size_x + y * size_x * size_z`, giving O(1) read/write access.
// Out-of-bounds reads return `Air`; out-of-bounds writes are no-ops.
//
// The resolver only ever reads from the grid (through `GridRules`); all
// mutation happens before a resolution starts or after its plan has been
// applied by the (out of scope) relocation executor. Because out-of-bounds
// cells read as `Air`, structures at the grid edge resolve as if bordered by
// open space — bounds enforcement belongs to the executor.
//
// See also: `rules.rs` for the pushability oracle built on top of this grid,
// `resolver.rs` for the structure resolver that consumes it.

use crate::block::Block;
use crate::types::{CellPos, Direction};

/// Dense 3D voxel grid.
#[derive(Clone, Debug, Default)]
pub struct VoxelGrid {
    /// Flat storage: index = x + z * size_x + y * size_x * size_z.
    blocks: Vec<Block>,
    pub size_x: u32,
    pub size_y: u32,
    pub size_z: u32,
}

impl VoxelGrid {
    /// Create a new grid filled with `Air`.
    pub fn new(size_x: u32, size_y: u32, size_z: u32) -> Self {
        let total = (size_x as usize) * (size_y as usize) * (size_z as usize);
        Self {
            blocks: vec![Block::Air; total],
            size_x,
            size_y,
            size_z,
        }
    }

    /// Check whether a coordinate is within bounds.
    pub fn in_bounds(&self, pos: CellPos) -> bool {
        pos.x >= 0
            && pos.y >= 0
            && pos.z >= 0
            && (pos.x as u32) < self.size_x
            && (pos.y as u32) < self.size_y
            && (pos.z as u32) < self.size_z
    }

    /// Convert a coordinate to a flat index. Returns `None` if out of bounds.
    fn index(&self, pos: CellPos) -> Option<usize> {
        if self.in_bounds(pos) {
            let x = pos.x as usize;
            let y = pos.y as usize;
            let z = pos.z as usize;
            let sx = self.size_x as usize;
            let sz = self.size_z as usize;
            Some(x + z * sx + y * sx * sz)
        } else {
            None
        }
    }

    /// Read a cell. Returns `Air` for out-of-bounds coordinates.
    pub fn get(&self, pos: CellPos) -> Block {
        self.index(pos)
            .map(|i| self.blocks[i])
            .unwrap_or(Block::Air)
    }

    /// Write a cell. No-op for out-of-bounds coordinates.
    pub fn set(&mut self, pos: CellPos, block: Block) {
        if let Some(i) = self.index(pos) {
            self.blocks[i] = block;
        }
    }

    /// Fill a straight run of `count` cells starting at `start`, walking `dir`.
    /// Convenience for scenario construction; out-of-bounds cells are skipped.
    pub fn fill_line(&mut self, start: CellPos, dir: Direction, count: u32, block: Block) {
        for k in 0..count {
            self.set(start.offset(dir, k as i32), block);
        }
    }
}

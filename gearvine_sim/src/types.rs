// Core spatial types shared across the mechanism simulation.
//
// Defines cell coordinates (`CellPos`), the three grid axes (`Axis`), and the
// six axis-aligned unit directions (`Direction`). All types derive `Serialize`
// and `Deserialize` for save/load and scenario files.
//
// **Critical constraint: determinism.** `Direction::ALL` has a fixed,
// documented order. Resolver traversal order depends on it, so identical
// inputs must visit neighbors identically on every run and every platform.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Cell coordinates
// ---------------------------------------------------------------------------

/// A position in the 3D voxel grid. Each component is in cell units.
///
/// The coordinate system uses right-handed conventions:
/// - X: east  (positive) / west  (negative)
/// - Y: up    (positive) / down  (negative)
/// - Z: south (positive) / north (negative)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl CellPos {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The adjacent cell one step in `dir`.
    pub const fn step(self, dir: Direction) -> Self {
        self.offset(dir, 1)
    }

    /// The cell `n` steps in `dir`. Negative `n` walks the opposite way.
    pub const fn offset(self, dir: Direction, n: i32) -> Self {
        let (dx, dy, dz) = dir.unit_offset();
        Self {
            x: self.x + dx * n,
            y: self.y + dy * n,
            z: self.z + dz * n,
        }
    }

    /// Manhattan distance between two coordinates.
    pub fn manhattan_distance(self, other: Self) -> u32 {
        ((self.x - other.x).unsigned_abs())
            + ((self.y - other.y).unsigned_abs())
            + ((self.z - other.z).unsigned_abs())
    }
}

impl fmt::Display for CellPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

// ---------------------------------------------------------------------------
// Axes and directions
// ---------------------------------------------------------------------------

/// One of the three grid axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// One of the six axis-aligned unit directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    East,
    West,
    Up,
    Down,
    South,
    North,
}

impl Direction {
    /// All six directions. Fixed order — branch expansion iterates this array,
    /// so changing it changes resolved plan ordering.
    pub const ALL: [Direction; 6] = [
        Direction::East,
        Direction::West,
        Direction::Up,
        Direction::Down,
        Direction::South,
        Direction::North,
    ];

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::South => Direction::North,
            Direction::North => Direction::South,
        }
    }

    pub const fn axis(self) -> Axis {
        match self {
            Direction::East | Direction::West => Axis::X,
            Direction::Up | Direction::Down => Axis::Y,
            Direction::South | Direction::North => Axis::Z,
        }
    }

    /// The unit offset `(dx, dy, dz)` of one step in this direction.
    pub const fn unit_offset(self) -> (i32, i32, i32) {
        match self {
            Direction::East => (1, 0, 0),
            Direction::West => (-1, 0, 0),
            Direction::Up => (0, 1, 0),
            Direction::Down => (0, -1, 0),
            Direction::South => (0, 0, 1),
            Direction::North => (0, 0, -1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::East => "east",
            Direction::West => "west",
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::South => "south",
            Direction::North => "north",
        };
        write!(f, "{name}")
    }
}

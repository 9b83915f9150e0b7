// Pushability oracle: how cells react to a push.
//
// `PushRules` is the read-only query surface the structure resolver consumes.
// It classifies cells (`reaction`), answers the glue predicate
// (`can_stick_to` / `is_sticky`), looks up cell contents (`cell`), and
// supplies the push quota. All methods are pure reads against a fixed
// snapshot of the grid for the duration of one resolution.
//
// `GridRules` is the production implementation: a `VoxelGrid` for contents
// plus a `MechanismConfig` rule table for behavior. Tests may substitute
// their own `PushRules` implementations.
//
// See also: `resolver.rs` for the consumer, `config.rs` for the rule table.

use crate::block::Block;
use crate::config::MechanismConfig;
use crate::types::{CellPos, Direction};
use crate::world::VoxelGrid;

/// Classification of a cell under a push.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PushReaction {
    /// The cell relocates with the structure.
    Movable,
    /// The cell is removed rather than relocated.
    Destroyable,
    /// The cell stops the push.
    Blocking,
}

/// Read-only predicate surface over grid cell contents.
///
/// `reaction`'s `probe_dir` is the direction along which the resolver reached
/// this cell: the push direction itself for forward probes, its opposite for
/// backward (drag) probes, and the branch direction for glued side-branches.
/// Push-only blocks move only when `probe_dir` equals the push direction.
pub trait PushRules {
    /// Cell content at `pos`. `Block::Air` is the distinguished empty value.
    fn cell(&self, pos: CellPos) -> Block;

    /// Classify `block` under a push toward `push_dir`. `allow_break` permits
    /// destroy-on-push cells to classify as `Destroyable`; without it they
    /// block.
    fn reaction(
        &self,
        block: Block,
        push_dir: Direction,
        allow_break: bool,
        probe_dir: Direction,
    ) -> PushReaction;

    /// Directional glue predicate: can `block` stick to `onto`? Callers must
    /// apply it symmetrically before treating two cells as a stuck pair.
    fn can_stick_to(&self, block: Block, onto: Block) -> bool;

    /// Whether `block` drags glued neighbors along when it moves.
    fn is_sticky(&self, block: Block) -> bool;

    /// Hard cap on `pushed + destroyed` cells per push attempt.
    fn push_limit(&self) -> usize;
}

/// `PushRules` over a voxel grid and a config rule table.
pub struct GridRules<'a> {
    grid: &'a VoxelGrid,
    config: &'a MechanismConfig,
}

impl<'a> GridRules<'a> {
    pub fn new(grid: &'a VoxelGrid, config: &'a MechanismConfig) -> Self {
        Self { grid, config }
    }
}

impl PushRules for GridRules<'_> {
    fn cell(&self, pos: CellPos) -> Block {
        self.grid.get(pos)
    }

    fn reaction(
        &self,
        block: Block,
        push_dir: Direction,
        allow_break: bool,
        probe_dir: Direction,
    ) -> PushReaction {
        use crate::config::PushPolicy;

        if block.is_air() {
            // Air always yields; the resolver skips it without queueing.
            return PushReaction::Movable;
        }
        match self.config.rule(block).policy {
            PushPolicy::Normal => PushReaction::Movable,
            PushPolicy::Destroy => {
                if allow_break {
                    PushReaction::Destroyable
                } else {
                    PushReaction::Blocking
                }
            }
            PushPolicy::Block => PushReaction::Blocking,
            PushPolicy::PushOnly => {
                if probe_dir == push_dir {
                    PushReaction::Movable
                } else {
                    PushReaction::Blocking
                }
            }
        }
    }

    fn can_stick_to(&self, block: Block, onto: Block) -> bool {
        if block.is_air() || onto.is_air() {
            return false;
        }
        let sticky_a = self.is_sticky(block);
        let sticky_b = self.is_sticky(onto);
        // Rival adhesives: two sticky kinds bond only to themselves.
        if sticky_a && sticky_b && block != onto {
            return false;
        }
        sticky_a || sticky_b
    }

    fn is_sticky(&self, block: Block) -> bool {
        !block.is_air() && self.config.rule(block).sticky
    }

    fn push_limit(&self) -> usize {
        self.config.push_limit
    }
}

// Block kinds occupying grid cells.
//
// `Block` is the value the world store hands to the resolver for each cell —
// an opaque-to-the-resolver tag whose push behavior is defined entirely by
// the `BlockRule` table in `config.rs`. `Air` is the distinguished empty
// value: it occupies no space and never needs relocation.
//
// Kinds are chosen to cover every behavior class the resolver distinguishes;
// see `MechanismConfig::default()` for the canonical rule table.

use serde::{Deserialize, Serialize};

/// The content of a single grid cell.
///
/// `Ord` is derived so `Block` can key the `BTreeMap` rule table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Block {
    /// Empty cell. Never pushed, never destroyed.
    Air,
    /// Plain movable timber.
    Heartwood,
    /// Plain movable boards.
    Planks,
    /// Sticky sap block — drags face-adjacent neighbors along.
    Resin,
    /// Sticky tar block. Rival adhesive: bonds to anything except `Resin`.
    Pitch,
    /// Fragile light fixture — crushed (removed) when pushed.
    Lantern,
    /// Fragile fungal growth — crushed when pushed.
    Leafcap,
    /// Bedrock-grade stone. Never moves.
    Rootstone,
    /// Slick-faced bark: can be pushed, but glue never drags it.
    GlazedBark,
    /// The ram actuator itself. Never moves as cargo.
    Ram,
}

impl Block {
    pub const fn is_air(self) -> bool {
        matches!(self, Block::Air)
    }
}

impl Default for Block {
    fn default() -> Self {
        Self::Air
    }
}

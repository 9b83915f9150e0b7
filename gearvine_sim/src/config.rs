// Data-driven mechanism configuration.
//
// All tunable push parameters live here in `MechanismConfig`, loaded from
// JSON at startup. The resolver never uses magic numbers — it reads the push
// quota and the per-kind rule table from the config. This enables behavior
// iteration without recompilation.
//
// Each `Block` kind maps to a `BlockRule`: how it reacts to being pushed
// (`PushPolicy`) and whether it is sticky (drags face-adjacent neighbors).
// Kinds missing from the table are treated as immovable, so adding a new
// block kind without a rule fails safe.
//
// See also: `rules.rs` for `GridRules`, which interprets this table for the
// resolver, `config.rs` tests for the canonical default table.
//
// **Critical constraint: determinism.** The rule table is a `BTreeMap` so
// serialization order is stable and all clients with identical configs
// resolve identically.

use crate::block::Block;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default hard cap on cells resolved per push attempt (pushed + destroyed).
pub const DEFAULT_PUSH_LIMIT: usize = 12;

/// How a block kind reacts to being pushed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PushPolicy {
    /// Relocates when pushed.
    Normal,
    /// Removed (crushed) when pushed, where destruction is permitted.
    Destroy,
    /// Never moves; blocks the push.
    Block,
    /// Relocates when pushed, but glue never drags it (no pull, no branch).
    PushOnly,
}

/// Push behavior for one block kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockRule {
    pub policy: PushPolicy,
    /// Sticky blocks drag mutually glued face-adjacent neighbors along.
    pub sticky: bool,
}

impl BlockRule {
    const fn new(policy: PushPolicy, sticky: bool) -> Self {
        Self { policy, sticky }
    }
}

/// Tunable parameters for push resolution.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MechanismConfig {
    /// Hard cap on `pushed + destroyed` cells per push attempt.
    pub push_limit: usize,
    /// Per-kind push behavior. Kinds absent from the table are immovable.
    pub rules: BTreeMap<Block, BlockRule>,
}

impl MechanismConfig {
    /// Load a config from a JSON string.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Serialize the config to pretty JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// The rule for a block kind. Absent kinds fail safe as immovable,
    /// non-sticky.
    pub fn rule(&self, block: Block) -> BlockRule {
        self.rules
            .get(&block)
            .copied()
            .unwrap_or(BlockRule::new(PushPolicy::Block, false))
    }
}

impl Default for MechanismConfig {
    fn default() -> Self {
        let mut rules = BTreeMap::new();
        rules.insert(Block::Heartwood, BlockRule::new(PushPolicy::Normal, false));
        rules.insert(Block::Planks, BlockRule::new(PushPolicy::Normal, false));
        rules.insert(Block::Resin, BlockRule::new(PushPolicy::Normal, true));
        rules.insert(Block::Pitch, BlockRule::new(PushPolicy::Normal, true));
        rules.insert(Block::Lantern, BlockRule::new(PushPolicy::Destroy, false));
        rules.insert(Block::Leafcap, BlockRule::new(PushPolicy::Destroy, false));
        rules.insert(Block::Rootstone, BlockRule::new(PushPolicy::Block, false));
        rules.insert(Block::GlazedBark, BlockRule::new(PushPolicy::PushOnly, false));
        rules.insert(Block::Ram, BlockRule::new(PushPolicy::Block, false));
        // Air carries no rule on purpose: `GridRules` special-cases it before
        // the table is consulted.

        Self {
            push_limit: DEFAULT_PUSH_LIMIT,
            rules,
        }
    }
}

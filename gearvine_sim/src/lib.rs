// gearvine_sim — pure Rust mechanism simulation library.
//
// Resolves, for a single push or pull by a ram at a fixed anchor cell in a
// 3D voxel grid, the maximal connected set of cells that must relocate
// together as a rigid structure — subject to per-block pushability rules,
// mutual stickiness, and a hard quota. The library only plans; applying the
// plan (moving blocks, firing effects, notifying neighbors) is the embedding
// game's job.
//
// Module overview:
// - `types.rs`:    CellPos, Axis, Direction — spatial primitives.
// - `block.rs`:    Block — cell contents, with Air as the distinguished empty value.
// - `world.rs`:    Dense 3D voxel grid (the world's spatial truth).
// - `config.rs`:   MechanismConfig — per-kind push rules and the quota, JSON-loadable.
// - `rules.rs`:    PushRules oracle (reaction / glue queries) + GridRules over a grid and config.
// - `resolver.rs`: StructureResolver — the chain-walk algorithm producing a RelocationPlan.
//
// **Critical constraint: determinism.** Resolution is a pure function:
// `(grid, config, anchor, direction, extending) -> plan`. No randomness, no
// system time, no iteration over unordered collections. Use `BTreeMap` for
// ordered tables.

pub mod block;
pub mod config;
pub mod resolver;
pub mod rules;
pub mod types;
pub mod world;

pub use block::Block;
pub use config::{BlockRule, MechanismConfig, PushPolicy, DEFAULT_PUSH_LIMIT};
pub use resolver::{RelocationPlan, StructureResolver};
pub use rules::{GridRules, PushReaction, PushRules};
pub use types::{Axis, CellPos, Direction};
pub use world::VoxelGrid;

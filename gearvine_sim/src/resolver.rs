// Push structure resolver.
//
// Given a ram at a fixed anchor cell and a push (extend) or pull (retract)
// request, resolves the maximal connected set of cells that must relocate
// together as one rigid structure. The resolver only reads the world (through
// a `PushRules` oracle) and produces a `RelocationPlan`; actually moving
// blocks and firing side effects is the caller's job.
//
// ## Algorithm
//
// - `resolve()`: classify the cell in front of the ram, then grow the primary
//   chain along the push direction and expand glued side-branches until the
//   structure closes or a failure aborts everything.
// - `add_line()`: one chain walk. Backward: collect the glued train standing
//   behind the origin so the whole train moves as a unit. Forward: queue
//   movable cells ahead until air, a crushed cell, or an obstruction.
// - `add_branches()`: for a queued sticky cell, recurse into the four
//   directions perpendicular to the push axis.
// - `splice_at_collision()`: when a forward walk runs into a cell that is
//   already queued (a loop of glued cells), reorder the queue so the freshly
//   inserted train sits adjacent to its merge point.
//
// The queue is ordered so that relocating cells strictly in order never
// requires a not-yet-relocated cell to vacate first: backward trains are
// inserted far-to-near and forward discoveries extend toward open space.
//
// Every walk consumes quota (`pushed + destroyed` cells, default 12), so
// recursion depth and running time are hard-bounded; loops of mutually glued
// cells terminate via the already-queued guards and the collision splice.
//
// Failure is binary by design: quota overrun, an immovable obstruction, or a
// walk that would displace the anchor all abort `resolve()` with `false`,
// and the plan contents are unspecified afterward.
//
// See also: `rules.rs` for the oracle contract, `config.rs` for the rule
// table and quota.
//
// **Critical constraint: determinism.** Branch expansion iterates
// `Direction::ALL` in its fixed order and the membership set is never
// iterated, so identical inputs always produce identical plans.

use crate::block::Block;
use crate::config::DEFAULT_PUSH_LIMIT;
use crate::rules::{PushReaction, PushRules};
use crate::types::{CellPos, Direction};
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

/// Inline-capacity list sized to the default quota; spills to the heap if a
/// config raises the limit.
type CellList = SmallVec<[CellPos; DEFAULT_PUSH_LIMIT]>;

// ---------------------------------------------------------------------------
// Relocation plan
// ---------------------------------------------------------------------------

/// The resolver's owned output: which cells to relocate, in what order, and
/// which cells to remove outright.
#[derive(Clone, Debug, Default)]
pub struct RelocationPlan {
    /// Cells to relocate, in safe vacate order. No duplicates.
    to_push: CellList,
    /// Cells whose content is removed rather than relocated. No duplicates.
    to_destroy: CellList,
    /// Membership mirror of `to_push` for O(1) already-queued checks.
    queued: FxHashSet<CellPos>,
}

impl RelocationPlan {
    /// Cells to relocate, ordered so that moving them front-to-back never
    /// requires a not-yet-moved cell to vacate first.
    pub fn to_push(&self) -> &[CellPos] {
        &self.to_push
    }

    /// Cells removed rather than relocated.
    pub fn to_destroy(&self) -> &[CellPos] {
        &self.to_destroy
    }

    /// Total quota consumed: pushed plus destroyed cells.
    pub fn cell_count(&self) -> usize {
        self.to_push.len() + self.to_destroy.len()
    }

    pub fn is_empty(&self) -> bool {
        self.to_push.is_empty() && self.to_destroy.is_empty()
    }

    fn clear(&mut self) {
        self.to_push.clear();
        self.to_destroy.clear();
        self.queued.clear();
    }

    fn is_queued(&self, pos: CellPos) -> bool {
        self.queued.contains(&pos)
    }

    /// Queue index of `pos`, if queued. Linear scan, but only reached after
    /// the O(1) membership check has hit.
    fn index_of(&self, pos: CellPos) -> Option<usize> {
        if self.is_queued(pos) {
            self.to_push.iter().position(|&p| p == pos)
        } else {
            None
        }
    }

    fn queue(&mut self, pos: CellPos) {
        debug_assert!(!self.is_queued(pos));
        self.to_push.push(pos);
        self.queued.insert(pos);
    }

    fn record_destroy(&mut self, pos: CellPos) {
        // Two walks may terminate on the same crushable cell; keep it once.
        if !self.to_destroy.contains(&pos) {
            self.to_destroy.push(pos);
        }
    }
}

/// Reorder the queue after a forward walk collided with an already-queued
/// cell at `index`: the `tail_len` most recently inserted cells are moved to
/// sit directly before `index`, preserving the relative order of both
/// segments (`[0..index)` + tail + `[index..len-tail)`).
///
/// Pure function of the list shape; isolated from the traversal so it can be
/// tested on its own.
fn splice_at_collision(list: &mut CellList, tail_len: usize, index: usize) {
    debug_assert!(tail_len >= 1);
    debug_assert!(index + tail_len <= list.len());
    list[index..].rotate_right(tail_len);
}

// ---------------------------------------------------------------------------
// Resolver
// ---------------------------------------------------------------------------

/// Single-shot resolver for one push or pull attempt.
///
/// Construct per attempt, call [`resolve`](Self::resolve) once, then read the
/// plan on success and discard. A failed resolution leaves the plan in an
/// unspecified state; `resolve()` clears it on entry, so an instance may be
/// re-resolved against an unchanged world.
pub struct StructureResolver<'a, R: PushRules> {
    rules: &'a R,
    /// The ram's own cell. Never queued, never destroyed.
    anchor: CellPos,
    /// The direction the ram faces.
    facing: Direction,
    extending: bool,
    /// Direction the structure is displaced: `facing` when extending, its
    /// opposite when retracting.
    push_dir: Direction,
    /// First cell examined: one step out when extending, two when retracting
    /// (the cell beyond the ram's extended head).
    start: CellPos,
    limit: usize,
    plan: RelocationPlan,
}

impl<'a, R: PushRules> StructureResolver<'a, R> {
    pub fn new(rules: &'a R, anchor: CellPos, facing: Direction, extending: bool) -> Self {
        let (push_dir, start) = if extending {
            (facing, anchor.step(facing))
        } else {
            (facing.opposite(), anchor.offset(facing, 2))
        };
        Self {
            rules,
            anchor,
            facing,
            extending,
            push_dir,
            start,
            limit: rules.push_limit(),
            plan: RelocationPlan::default(),
        }
    }

    /// The resolved displacement direction.
    pub fn push_direction(&self) -> Direction {
        self.push_dir
    }

    /// The plan produced by the last successful [`resolve`](Self::resolve).
    pub fn plan(&self) -> &RelocationPlan {
        &self.plan
    }

    /// Resolve the structure. Returns `true` with a populated plan (possibly
    /// empty: a no-op push into open space), or `false` if the push is
    /// impossible: an immovable obstruction, the quota exceeded, or a walk
    /// that would displace the anchor.
    pub fn resolve(&mut self) -> bool {
        self.plan.clear();

        let head = self.rules.cell(self.start);
        if self.rules.reaction(head, self.push_dir, false, self.facing) != PushReaction::Movable {
            // A crushable cell in front of an extending ram is destroyed in
            // place; retraction never destroys.
            if self.extending
                && self.rules.reaction(head, self.push_dir, true, self.facing)
                    == PushReaction::Destroyable
            {
                self.plan.record_destroy(self.start);
                return true;
            }
            return false;
        }

        if !self.add_line(self.start, self.push_dir) {
            return false;
        }

        // The queue grows while branches are expanded; index loop on purpose.
        let mut i = 0;
        while i < self.plan.to_push.len() {
            let pos = self.plan.to_push[i];
            if self.rules.is_sticky(self.rules.cell(pos)) && !self.add_branches(pos) {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Symmetric glue check: both sides must agree before two cells are
    /// treated as a stuck pair.
    fn sticks_together(&self, a: Block, b: Block) -> bool {
        self.rules.can_stick_to(a, b) && self.rules.can_stick_to(b, a)
    }

    /// Grow one chain from `origin`. `line_dir` is the direction along which
    /// the walk reached `origin` (the push direction for the primary chain, a
    /// perpendicular for branches) and is only used to classify the origin
    /// itself; the walk always runs along the push axis.
    fn add_line(&mut self, origin: CellPos, line_dir: Direction) -> bool {
        let mut block = self.rules.cell(origin);
        if block.is_air() {
            return true;
        }
        if self.rules.reaction(block, self.push_dir, false, line_dir) != PushReaction::Movable {
            // A glued but unmovable neighbor simply stays behind.
            return true;
        }
        if origin == self.anchor {
            return true;
        }
        if self.plan.is_queued(origin) {
            return true;
        }

        // Backward walk: the glued train standing behind `origin` must move
        // with it. Drag probes never permit destruction.
        let mut run = 1usize;
        if run + self.plan.cell_count() > self.limit {
            return false;
        }
        while self.rules.is_sticky(block) {
            let behind = origin.offset(self.push_dir.opposite(), run as i32);
            let front = block;
            block = self.rules.cell(behind);
            if block.is_air()
                || !self.sticks_together(front, block)
                || self
                    .rules
                    .reaction(block, self.push_dir, false, self.push_dir.opposite())
                    != PushReaction::Movable
                || behind == self.anchor
            {
                break;
            }
            run += 1;
            if run + self.plan.cell_count() > self.limit {
                return false;
            }
        }

        // Far-to-near: the cell deepest behind must vacate first.
        for k in (0..run).rev() {
            self.plan.queue(origin.offset(self.push_dir.opposite(), k as i32));
        }
        let mut tail_len = run;

        // Forward walk.
        let mut dist = 1;
        loop {
            let ahead = origin.offset(self.push_dir, dist);
            if let Some(hit) = self.plan.index_of(ahead) {
                // Looped back into the queued structure: splice the fresh
                // train in at the merge point and re-expand everything up to
                // and including it.
                splice_at_collision(&mut self.plan.to_push, tail_len, hit);
                for i in 0..=hit + tail_len {
                    let pos = self.plan.to_push[i];
                    if self.rules.is_sticky(self.rules.cell(pos)) && !self.add_branches(pos) {
                        return false;
                    }
                }
                return true;
            }

            block = self.rules.cell(ahead);
            if block.is_air() {
                return true;
            }
            let reaction = self
                .rules
                .reaction(block, self.push_dir, true, self.push_dir);
            if reaction == PushReaction::Blocking || ahead == self.anchor {
                return false;
            }
            if reaction == PushReaction::Destroyable {
                // A crushed cell ends this walk; it still consumes quota.
                if self.plan.cell_count() >= self.limit {
                    return false;
                }
                self.plan.record_destroy(ahead);
                return true;
            }
            if self.plan.cell_count() >= self.limit {
                return false;
            }
            self.plan.queue(ahead);
            tail_len += 1;
            dist += 1;
        }
    }

    /// Pull in glued cells extending sideways off the push axis: for each of
    /// the four perpendicular directions, if the neighbor is mutually stuck
    /// to `pos`, grow a chain from it.
    fn add_branches(&mut self, pos: CellPos) -> bool {
        let block = self.rules.cell(pos);
        for dir in Direction::ALL {
            if dir.axis() == self.push_dir.axis() {
                continue;
            }
            let neighbor_pos = pos.step(dir);
            let neighbor = self.rules.cell(neighbor_pos);
            if self.sticks_together(neighbor, block) && !self.add_line(neighbor_pos, dir) {
                return false;
            }
        }
        true
    }
}

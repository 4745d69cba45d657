//! Cycle detection with path reconstruction.
//!
//! Each entity not yet seen by an earlier exploration starts a depth-first exploration with a
//! fresh path. The first successor that is still on the path closes a cycle; that cycle is
//! recorded and the exploration ends. Self matches are skipped, so a self-chaining entity alone
//! never forms a cycle.
//!
//! Known limitations:
//!
//! - Entities reached by an earlier exploration never start one of their own, so a cycle that is
//!   only reachable from such an entity is missed.
//! - Local visited marks survive backtracking. An edge into an already explored, no longer
//!   active branch is ignored, so loops running through that branch are missed too.
//!
//! The result is one representative cycle per exploration at most, not an enumeration.

use crate::Chain;
use crate::graph::{Bucket, ChainGraph, Entity};
use rustc_hash::FxHashSet;

struct Frame<'g> {
    entity: &'g Entity,
    successors: Bucket<'g>,
}

struct Exploration<'g, 'v> {
    graph: &'g ChainGraph,
    global: &'v mut FxHashSet<u32>,
    visited: FxHashSet<u32>,
    path: Vec<&'g Entity>,
    stack: Vec<Frame<'g>>,
}

impl<'g, 'v> Exploration<'g, 'v> {
    fn new(graph: &'g ChainGraph, global: &'v mut FxHashSet<u32>) -> Self {
        Self {
            graph,
            global,
            visited: FxHashSet::default(),
            path: Vec::new(),
            stack: Vec::new(),
        }
    }

    fn enter(&mut self, e: &'g Entity) {
        self.visited.insert(e.id());
        self.global.insert(e.id());
        self.path.push(e);
        self.stack.push(Frame {
            entity: e,
            successors: self.graph.successors(e),
        });
    }

    fn run(mut self, start: &'g Entity) -> Option<Chain<'g>> {
        self.enter(start);

        while let Some(frame) = self.stack.last_mut() {
            let current = frame.entity;
            let Some(next) = frame.successors.next() else {
                self.stack.pop();
                self.path.pop();
                continue;
            };
            if next.id() == current.id() {
                continue;
            }
            if !self.visited.contains(&next.id()) {
                self.enter(next);
                continue;
            }

            let Some(ix) = self.path.iter().position(|e| e.id() == next.id()) else {
                continue;
            };
            let mut links = self.path.split_off(ix);
            if links.len() < 2 {
                return None;
            }
            links.push(next);
            return Some(Chain::from_links(links));
        }

        None
    }
}

/// Representative cycles, in the order their explorations started.
pub fn find_cycles(g: &ChainGraph) -> Vec<Chain<'_>> {
    let mut global: FxHashSet<u32> = FxHashSet::default();
    let mut cycles: Vec<Chain<'_>> = Vec::new();
    let mut explorations: usize = 0;

    for start in g.entities() {
        if global.contains(&start.id()) {
            continue;
        }
        explorations += 1;
        if let Some(cycle) = Exploration::new(g, &mut global).run(start) {
            cycles.push(cycle);
        }
    }

    tracing::debug!(
        explorations,
        cycles = cycles.len(),
        "cycle detection finished"
    );
    cycles
}

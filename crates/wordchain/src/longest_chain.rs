//! Bounded greedy search for long chains.
//!
//! Finding the longest chain is a longest-path problem and exponential in general. This search
//! trades optimality for a hard cost bound:
//!
//! - states are expanded breadth-first (FIFO),
//! - successors are ranked by their own out-degree (stable, so ties keep load order) and only
//!   the first `branch_width` are considered,
//! - a state whose chain reached `max_depth` is recorded but not expanded,
//! - at most `max_iterations` states are popped.
//!
//! Every popped state is a candidate, so whatever is best when the budget runs out is returned.

use crate::Chain;
use crate::graph::{ChainGraph, Entity};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::VecDeque;

pub const DEFAULT_MAX_DEPTH: usize = 20;
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;
pub const DEFAULT_BRANCH_WIDTH: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchLimits {
    /// Chains of this length are not extended further.
    pub max_depth: usize,
    /// Upper bound on expanded states; the safety valve against dense graphs.
    pub max_iterations: usize,
    /// How many of the ranked successors are explored per state.
    pub branch_width: usize,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            branch_width: DEFAULT_BRANCH_WIDTH,
        }
    }
}

impl SearchLimits {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

struct State<'g> {
    current: &'g Entity,
    chain: Vec<&'g Entity>,
    visited: FxHashSet<u32>,
}

/// [`longest_chain_with_limits`] with [`SearchLimits::default`].
pub fn longest_chain_from<'g>(g: &'g ChainGraph, start: &'g Entity) -> Chain<'g> {
    longest_chain_with_limits(g, start, SearchLimits::default())
}

/// Best chain found from `start` within `limits`. Never shorter than `[start]`.
pub fn longest_chain_with_limits<'g>(
    g: &'g ChainGraph,
    start: &'g Entity,
    limits: SearchLimits,
) -> Chain<'g> {
    let mut best: Vec<&'g Entity> = vec![start];
    let mut queue: VecDeque<State<'g>> = VecDeque::new();
    queue.push_back(State {
        current: start,
        chain: vec![start],
        visited: std::iter::once(start.id()).collect(),
    });

    let mut iterations: usize = 0;
    while iterations < limits.max_iterations {
        let Some(state) = queue.pop_front() else {
            break;
        };
        iterations += 1;

        if state.chain.len() < limits.max_depth {
            let mut next: Vec<&'g Entity> = g.successors(state.current).collect();
            next.sort_by_cached_key(|e| Reverse(g.out_degree(e)));

            for succ in next.into_iter().take(limits.branch_width) {
                if state.visited.contains(&succ.id()) {
                    continue;
                }
                let mut visited = state.visited.clone();
                visited.insert(succ.id());
                let mut chain = Vec::with_capacity(state.chain.len() + 1);
                chain.extend_from_slice(&state.chain);
                chain.push(succ);
                queue.push_back(State {
                    current: succ,
                    chain,
                    visited,
                });
            }
        }

        if state.chain.len() > best.len() {
            best = state.chain;
        }
    }

    tracing::debug!(
        start = start.id(),
        iterations,
        exhausted = queue.is_empty(),
        best = best.len(),
        "longest chain search finished"
    );

    Chain::from_links(best)
}

//! Dead-end detection.
//!
//! A dead end ends the game: nothing but (possibly) the entity itself may follow it. Self
//! matches never count as an escape since a used word cannot be played again.

use crate::graph::{ChainGraph, Entity};

pub fn is_dead_end(g: &ChainGraph, e: &Entity) -> bool {
    g.successors(e).all(|next| next.id() == e.id())
}

/// All dead ends, in load order.
pub fn find_dead_ends(g: &ChainGraph) -> Vec<&Entity> {
    g.entities().iter().filter(|e| is_dead_end(g, e)).collect()
}

//! A single game of word chain.
//!
//! Moves are checked in the order a player would expect feedback: empty input, a word that was
//! already played, a word that does not continue the chain, and finally a word that is not in
//! the vocabulary.
//!
//! A move must start with the previous word's last syllable, or with that syllable's
//! word-initial form: `파이리` may be followed by `리...` or `이...`, but not by `니...` even
//! though `니` also reads as `이`. Every accepted move is an edge of the [`ChainGraph`].

use crate::graph::{ChainGraph, Entity};
use rustc_hash::FxHashSet;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("Empty word")]
    Empty,

    #[error("{word} was already played")]
    AlreadyUsed { word: String },

    #[error("{word} does not continue the chain: expected a word starting with {}", expected_display(.expected, .alternative))]
    BrokenChain {
        word: String,
        expected: char,
        alternative: Option<char>,
    },

    #[error("{word} is not in the vocabulary")]
    Unknown { word: String },
}

fn expected_display(expected: &char, alternative: &Option<char>) -> String {
    match alternative {
        Some(alt) => format!("'{expected}' or '{alt}'"),
        None => format!("'{expected}'"),
    }
}

#[derive(Debug, Clone)]
pub struct GameSession<'g> {
    graph: &'g ChainGraph,
    used: FxHashSet<u32>,
    history: Vec<&'g Entity>,
}

impl<'g> GameSession<'g> {
    pub fn new(graph: &'g ChainGraph) -> Self {
        Self {
            graph,
            used: FxHashSet::default(),
            history: Vec::new(),
        }
    }

    pub fn history(&self) -> &[&'g Entity] {
        &self.history
    }

    pub fn last(&self) -> Option<&'g Entity> {
        self.history.last().copied()
    }

    pub fn is_used(&self, e: &Entity) -> bool {
        self.used.contains(&e.id())
    }

    /// Validates `word` against the current state and plays it.
    pub fn play(&mut self, word: &str) -> Result<&'g Entity, MoveError> {
        let word = word.trim();
        let Some(first) = word.chars().next() else {
            return Err(MoveError::Empty);
        };

        let found = self.graph.find_by_name(word);
        if found.is_some_and(|e| self.is_used(e)) {
            return Err(MoveError::AlreadyUsed {
                word: word.to_string(),
            });
        }

        if let Some(prev) = self.last() {
            if !continues(prev, first) {
                let expected = prev.last_char();
                let alt = prev.successor_key();
                return Err(MoveError::BrokenChain {
                    word: word.to_string(),
                    expected,
                    alternative: (alt != expected).then_some(alt),
                });
            }
        }

        let Some(e) = found else {
            return Err(MoveError::Unknown {
                word: word.to_string(),
            });
        };

        self.used.insert(e.id());
        self.history.push(e);
        tracing::debug!(id = e.id(), turn = self.history.len(), "move accepted");
        Ok(e)
    }

    /// The first unused entity, in load order, that may follow the last move.
    ///
    /// Before the first move this is the first [safe opener](safe_openers), or the first entity
    /// when every entity is a dead end.
    pub fn hint(&self) -> Option<&'g Entity> {
        match self.last() {
            Some(prev) => playable_successors(self.graph, prev).find(|e| !self.is_used(e)),
            None => safe_openers(self.graph)
                .into_iter()
                .next()
                .or_else(|| self.graph.entities().first()),
        }
    }

    /// Whether the player to move has no legal word left.
    pub fn is_over(&self) -> bool {
        self.hint().is_none()
    }
}

/// Whether a word starting with `first` may follow `prev`.
fn continues(prev: &Entity, first: char) -> bool {
    first == prev.last_char() || first == prev.successor_key()
}

/// Graph successors of `prev` that the move rule accepts.
fn playable_successors<'g>(
    g: &'g ChainGraph,
    prev: &'g Entity,
) -> impl Iterator<Item = &'g Entity> + 'g {
    g.successors(prev)
        .filter(move |e| e.name().chars().next().is_some_and(|c| continues(prev, c)))
}

/// Whether at least one other entity may be played after `e`.
pub fn has_valid_successor(g: &ChainGraph, e: &Entity) -> bool {
    playable_successors(g, e).any(|f| f.id() != e.id())
}

/// Entities that do not end the game immediately when played first.
pub fn safe_openers(g: &ChainGraph) -> Vec<&Entity> {
    g.entities()
        .iter()
        .filter(|e| has_valid_successor(g, e))
        .collect()
}

use crate::normalize::normalize;
use crate::{Error, Result};
use serde::Serialize;

/// A playable word: one species in the vocabulary.
///
/// `first_char` is stored in its word-initial (normalized) form, `last_char` raw. The successor
/// lookup key is derived from `last_char` on demand, see [`Entity::successor_key`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Entity {
    id: u32,
    name: String,
    group: u32,
    first_char: char,
    last_char: char,
}

impl Entity {
    /// Builds an entity, rejecting names that are empty after trimming.
    pub fn new(id: u32, name: impl Into<String>, group: u32) -> Result<Self> {
        let name = name.into().trim().to_string();
        let (Some(first), Some(last)) = (name.chars().next(), name.chars().next_back()) else {
            return Err(Error::EmptyName { id });
        };

        Ok(Self {
            id,
            first_char: normalize(first),
            last_char: last,
            name,
            group,
        })
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Category tag, e.g. the generation a species was introduced in.
    pub fn group(&self) -> u32 {
        self.group
    }

    pub fn first_char(&self) -> char {
        self.first_char
    }

    pub fn last_char(&self) -> char {
        self.last_char
    }

    /// First character a successor must start with.
    pub fn successor_key(&self) -> char {
        normalize(self.last_char)
    }

    /// Whether `next` may follow `self` in a chain.
    pub fn links_to(&self, next: &Entity) -> bool {
        self.successor_key() == next.first_char
    }

    /// Whether this entity may follow itself.
    ///
    /// Both the raw and the normalized ending are accepted, so `이브이` and `리...리` style
    /// names count.
    pub fn is_self_chaining(&self) -> bool {
        self.last_char == self.first_char || self.links_to(self)
    }
}

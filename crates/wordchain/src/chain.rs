use crate::graph::Entity;
use serde::{Deserialize, Serialize};

/// A non-empty sequence of entities in which every entity may follow its predecessor.
///
/// Chains borrow their entities from the [`ChainGraph`](crate::graph::ChainGraph) they were
/// found in. A cycle is a chain whose last entity repeats its first, e.g. `[a, b, a]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Chain<'g> {
    links: Vec<&'g Entity>,
}

impl<'g> Chain<'g> {
    pub fn singleton(start: &'g Entity) -> Self {
        Self { links: vec![start] }
    }

    pub(crate) fn from_links(links: Vec<&'g Entity>) -> Self {
        debug_assert!(!links.is_empty(), "chains are never empty");
        Self { links }
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn first(&self) -> &'g Entity {
        self.links[0]
    }

    pub fn last(&self) -> &'g Entity {
        self.links[self.links.len() - 1]
    }

    pub fn entities(&self) -> &[&'g Entity] {
        &self.links
    }

    pub fn iter(&self) -> impl Iterator<Item = &'g Entity> + '_ {
        self.links.iter().copied()
    }

    pub fn ids(&self) -> Vec<u32> {
        self.iter().map(Entity::id).collect()
    }

    pub fn names(&self) -> Vec<&'g str> {
        self.iter().map(Entity::name).collect()
    }

    /// Whether every adjacent pair satisfies the chain rule.
    pub fn is_linked(&self) -> bool {
        self.links.windows(2).all(|w| w[0].links_to(w[1]))
    }

    /// Whether no entity appears twice.
    pub fn is_simple(&self) -> bool {
        let mut seen = rustc_hash::FxHashSet::default();
        self.iter().all(|e| seen.insert(e.id()))
    }

    /// Whether this is a closed loop of at least two links.
    pub fn is_cycle(&self) -> bool {
        self.len() >= 2 && self.first().id() == self.last().id()
    }

    pub fn to_links(&self) -> Vec<ChainLink> {
        self.iter().map(ChainLink::from).collect()
    }
}

impl<'a, 'g> IntoIterator for &'a Chain<'g> {
    type Item = &'g Entity;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, &'g Entity>>;

    fn into_iter(self) -> Self::IntoIter {
        self.links.iter().copied()
    }
}

/// Owned reference to an entity, used by reports and snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainLink {
    pub id: u32,
    pub name: String,
}

impl From<&Entity> for ChainLink {
    fn from(e: &Entity) -> Self {
        Self {
            id: e.id(),
            name: e.name().to_string(),
        }
    }
}

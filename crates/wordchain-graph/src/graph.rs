//! The chain graph container.
//!
//! Entities are the nodes; an implicit edge runs from `a` to `b` whenever `a.links_to(b)`. Edges
//! are never stored: two character-keyed multimaps answer "who ends with `c`" and "who starts
//! with `c`", and successor lookup goes through the second one.

mod bucket;
pub mod stats;

pub use bucket::Bucket;

use crate::{Entity, Error, Result};
use rustc_hash::FxBuildHasher;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainGraph {
    entities: Vec<Entity>,
    index_by_id: HashMap<u32, usize>,
    index_by_name: HashMap<String, usize>,
    by_last_char: HashMap<char, Vec<usize>>,
    by_first_char: HashMap<char, Vec<usize>>,
}

impl ChainGraph {
    /// Indexes `entities`, keeping their order as the load order of every bucket.
    ///
    /// Ids must be unique. Names may repeat; [`ChainGraph::find_by_name`] then resolves to the
    /// first one loaded.
    pub fn new(entities: Vec<Entity>) -> Result<Self> {
        let mut index_by_id: HashMap<u32, usize> = HashMap::default();
        let mut index_by_name: HashMap<String, usize> = HashMap::default();
        let mut by_last_char: HashMap<char, Vec<usize>> = HashMap::default();
        let mut by_first_char: HashMap<char, Vec<usize>> = HashMap::default();

        for (ix, e) in entities.iter().enumerate() {
            if index_by_id.insert(e.id(), ix).is_some() {
                return Err(Error::DuplicateId { id: e.id() });
            }
            index_by_name.entry(e.name().to_string()).or_insert(ix);
            by_last_char.entry(e.last_char()).or_default().push(ix);
            by_first_char.entry(e.first_char()).or_default().push(ix);
        }

        tracing::debug!(
            entities = entities.len(),
            starting_chars = by_first_char.len(),
            ending_chars = by_last_char.len(),
            "built chain graph"
        );

        Ok(Self {
            entities,
            index_by_id,
            index_by_name,
            by_last_char,
            by_first_char,
        })
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// All entities in load order.
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn entity(&self, id: u32) -> Option<&Entity> {
        self.index_by_id.get(&id).map(|&ix| &self.entities[ix])
    }

    pub fn contains(&self, id: u32) -> bool {
        self.index_by_id.contains_key(&id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Entity> {
        self.index_by_name
            .get(name.trim())
            .map(|&ix| &self.entities[ix])
    }

    /// Entities whose (normalized) first character is `c`.
    pub fn starting_with(&self, c: char) -> Bucket<'_> {
        Bucket::new(&self.entities, self.by_first_char.get(&c))
    }

    /// Entities whose raw last character is `c`.
    pub fn ending_with(&self, c: char) -> Bucket<'_> {
        Bucket::new(&self.entities, self.by_last_char.get(&c))
    }

    /// Every entity that may follow `e`, in load order.
    ///
    /// No filtering happens here: if `e` chains to itself it is part of the result, and callers
    /// decide whether already-used entities count.
    pub fn successors(&self, e: &Entity) -> Bucket<'_> {
        self.starting_with(e.successor_key())
    }

    pub fn out_degree(&self, e: &Entity) -> usize {
        self.by_first_char
            .get(&e.successor_key())
            .map_or(0, Vec::len)
    }

    /// Keys of the starting-character multimap, sorted.
    pub fn starting_chars(&self) -> Vec<char> {
        let mut out: Vec<char> = self.by_first_char.keys().copied().collect();
        out.sort_unstable();
        out
    }

    /// Keys of the ending-character multimap, sorted.
    pub fn ending_chars(&self) -> Vec<char> {
        let mut out: Vec<char> = self.by_last_char.keys().copied().collect();
        out.sort_unstable();
        out
    }
}

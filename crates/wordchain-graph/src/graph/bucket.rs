//! Borrowed view over one multimap bucket.

use crate::Entity;
use std::iter::FusedIterator;

/// Iterator over the entities of one bucket, in load order.
///
/// Cheap to clone; every clone iterates independently.
#[derive(Debug, Clone)]
pub struct Bucket<'g> {
    entities: &'g [Entity],
    indices: std::slice::Iter<'g, usize>,
}

impl<'g> Bucket<'g> {
    pub(in crate::graph) fn new(entities: &'g [Entity], indices: Option<&'g Vec<usize>>) -> Self {
        Self {
            entities,
            indices: indices.map_or(&[][..], Vec::as_slice).iter(),
        }
    }
}

impl<'g> Iterator for Bucket<'g> {
    type Item = &'g Entity;

    fn next(&mut self) -> Option<Self::Item> {
        self.indices.next().map(|&ix| &self.entities[ix])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }
}

impl DoubleEndedIterator for Bucket<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.indices.next_back().map(|&ix| &self.entities[ix])
    }
}

impl ExactSizeIterator for Bucket<'_> {}

impl FusedIterator for Bucket<'_> {}

#![forbid(unsafe_code)]

//! Chain graph container for word-chain (끝말잇기) vocabularies.
//!
//! An entity may follow another when the predecessor's last character, put through the
//! initial-sound law ([`normalize`]), equals the successor's (already normalized) first
//! character. [`ChainGraph`] indexes a vocabulary by both characters so successor lookups are a
//! single hash probe.
//!
//! The search algorithms built on top of this live in the `wordchain` crate.

mod entity;
mod error;
mod graph;
pub mod normalize;

pub use entity::Entity;
pub use error::{Error, Result};
pub use graph::{Bucket, ChainGraph, stats};
pub use normalize::normalize;

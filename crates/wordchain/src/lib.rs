#![forbid(unsafe_code)]

//! Word-chain (끝말잇기) analysis over a [`ChainGraph`](graph::ChainGraph).
//!
//! - [`longest_chain`]: bounded, greedy breadth-first search for a long chain from one start.
//! - [`dead_ends`]: entities nothing else can follow.
//! - [`cycles`]: one representative closed loop per depth-first exploration.
//! - [`analysis`]: runs all of the above and shapes the results for reporting.
//!
//! [`load`] turns JSON vocabularies into entities and [`game`] validates moves of a single game.

pub use wordchain_graph as graph;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod analysis;
mod chain;
pub mod cycles;
pub mod dead_ends;
mod error;
pub mod game;
pub mod load;
pub mod longest_chain;

pub use analysis::{Analysis, AnalysisOptions, AnalysisSummary, Probe, analyze};
pub use chain::{Chain, ChainLink};
pub use error::{Error, Result};
pub use longest_chain::SearchLimits;

//! Full-vocabulary analysis: runs every detector and shapes the results for reporting.

use crate::chain::{Chain, ChainLink};
use crate::cycles::find_cycles;
use crate::dead_ends::find_dead_ends;
use crate::graph::stats::{CharStats, char_stats, self_chaining};
use crate::graph::{ChainGraph, Entity};
use crate::longest_chain::{SearchLimits, longest_chain_with_limits};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Depth limit used for full analyses; deeper than a single ad-hoc search.
pub const ANALYSIS_MAX_DEPTH: usize = 50;
pub const DEFAULT_TOP_STARTERS: usize = 20;
const COMMON_CHARS: usize = 10;

/// Which entities the longest-chain search is run from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Probe {
    #[default]
    All,
    /// The first `n` entities in load order.
    First(usize),
    /// Specific ids; unknown ids are skipped.
    Ids(Vec<u32>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisOptions {
    pub limits: SearchLimits,
    pub probe: Probe,
    /// How many starters [`AnalysisSummary::best_starters`] keeps.
    pub top_starters: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            limits: SearchLimits::default().with_max_depth(ANALYSIS_MAX_DEPTH),
            probe: Probe::All,
            top_starters: DEFAULT_TOP_STARTERS,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Analysis<'g> {
    pub graph: &'g ChainGraph,
    pub dead_ends: Vec<&'g Entity>,
    pub cycles: Vec<Chain<'g>>,
    /// Best chain per probed start, keyed by the start's id, in probe order.
    pub best_chain_per_start: IndexMap<u32, Chain<'g>>,
    /// The first longest chain among all probes. `None` only if nothing was probed.
    pub global_best_chain: Option<Chain<'g>>,
    pub self_chaining: Vec<&'g Entity>,
    pub stats: CharStats,
    top_starters: usize,
}

pub fn analyze<'g>(g: &'g ChainGraph, options: &AnalysisOptions) -> Analysis<'g> {
    let dead_ends = find_dead_ends(g);
    let cycles = find_cycles(g);

    let mut best_chain_per_start: IndexMap<u32, Chain<'g>> = IndexMap::new();
    let mut global_best_chain: Option<Chain<'g>> = None;
    for start in probes(g, &options.probe) {
        let chain = longest_chain_with_limits(g, start, options.limits);
        if global_best_chain
            .as_ref()
            .is_none_or(|best| chain.len() > best.len())
        {
            global_best_chain = Some(chain.clone());
        }
        best_chain_per_start.insert(start.id(), chain);
    }

    let analysis = Analysis {
        graph: g,
        dead_ends,
        cycles,
        best_chain_per_start,
        global_best_chain,
        self_chaining: self_chaining(g),
        stats: char_stats(g, COMMON_CHARS),
        top_starters: options.top_starters,
    };

    tracing::info!(
        entities = g.len(),
        dead_ends = analysis.dead_ends.len(),
        cycles = analysis.cycles.len(),
        probes = analysis.best_chain_per_start.len(),
        longest = analysis.global_best_chain.as_ref().map_or(0, Chain::len),
        "analysis finished"
    );
    analysis
}

fn probes<'g>(g: &'g ChainGraph, probe: &Probe) -> Vec<&'g Entity> {
    match probe {
        Probe::All => g.entities().iter().collect(),
        Probe::First(n) => g.entities().iter().take(*n).collect(),
        Probe::Ids(ids) => ids
            .iter()
            .filter_map(|&id| {
                let e = g.entity(id);
                if e.is_none() {
                    tracing::warn!(id, "probe id not in vocabulary");
                }
                e
            })
            .collect(),
    }
}

impl<'g> Analysis<'g> {
    /// Probed starts ordered by the length of their best chain, longest first.
    ///
    /// Ties keep probe order.
    pub fn best_starters(&self) -> Vec<(&'g Entity, usize)> {
        let mut out: Vec<(&'g Entity, usize)> = self
            .best_chain_per_start
            .values()
            .map(|chain| (chain.first(), chain.len()))
            .collect();
        out.sort_by(|a, b| b.1.cmp(&a.1));
        out
    }

    pub fn summary(&self) -> AnalysisSummary {
        let longest_chain = self
            .global_best_chain
            .as_ref()
            .map(Chain::to_links)
            .unwrap_or_default();
        let best_starters = self
            .best_starters()
            .into_iter()
            .take(self.top_starters)
            .map(|(e, length)| Starter {
                id: e.id(),
                name: e.name().to_string(),
                length,
            })
            .collect();

        AnalysisSummary {
            total: self.graph.len(),
            generations: self.stats.group_counts.clone(),
            starting_chars: self.stats.starting_chars.clone(),
            ending_chars: self.stats.ending_chars.clone(),
            problematic_endings: self.stats.unmatched_endings.clone(),
            dead_end_count: self.dead_ends.len(),
            dead_ends: links(&self.dead_ends),
            cycle_count: self.cycles.len(),
            cycles: self.cycles.iter().map(Chain::to_links).collect(),
            longest_chain_length: longest_chain.len(),
            longest_chain,
            best_starters,
            self_chaining: links(&self.self_chaining),
        }
    }
}

fn links(entities: &[&Entity]) -> Vec<ChainLink> {
    entities.iter().map(|&e| ChainLink::from(e)).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Starter {
    pub id: u32,
    pub name: String,
    pub length: usize,
}

/// Owned, serializable snapshot of an [`Analysis`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub total: usize,
    /// Entity count per group tag.
    pub generations: BTreeMap<u32, usize>,
    pub starting_chars: Vec<char>,
    pub ending_chars: Vec<char>,
    pub problematic_endings: Vec<char>,
    pub dead_end_count: usize,
    pub dead_ends: Vec<ChainLink>,
    pub cycle_count: usize,
    pub cycles: Vec<Vec<ChainLink>>,
    pub longest_chain_length: usize,
    pub longest_chain: Vec<ChainLink>,
    pub best_starters: Vec<Starter>,
    pub self_chaining: Vec<ChainLink>,
}

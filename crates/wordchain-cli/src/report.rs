//! Human-readable console report for `wordchain analyze`.

use std::collections::BTreeMap;
use std::io::{self, Write};
use wordchain::Analysis;

const RULE: &str = "============================================================";
const CHAIN_PREVIEW: usize = 20;
const STARTER_PREVIEW: usize = 10;

fn char_list(chars: &[char]) -> String {
    chars
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

pub(crate) fn write_report(w: &mut impl Write, analysis: &Analysis<'_>) -> io::Result<()> {
    let g = analysis.graph;
    let stats = &analysis.stats;

    writeln!(w, "{RULE}")?;
    writeln!(w, "WORD CHAIN ANALYSIS")?;
    writeln!(w, "{RULE}")?;

    writeln!(w, "\n### BASIC STATISTICS ###")?;
    writeln!(w, "Total entities: {}", g.len())?;
    writeln!(w, "\nEntities by group:")?;
    for (group, count) in &stats.group_counts {
        writeln!(w, "  Group {group}: {count}")?;
    }
    writeln!(
        w,
        "\nUnique starting characters: {}",
        stats.starting_chars.len()
    )?;
    writeln!(w, "  {}", char_list(&stats.starting_chars))?;
    writeln!(w, "Unique ending characters: {}", stats.ending_chars.len())?;
    writeln!(w, "  {}", char_list(&stats.ending_chars))?;
    writeln!(
        w,
        "\nProblematic ending characters (nothing starts with these): {}",
        stats.unmatched_endings.len()
    )?;
    if !stats.unmatched_endings.is_empty() {
        writeln!(w, "  {}", char_list(&stats.unmatched_endings))?;
    }

    writeln!(w, "\n### DEAD ENDS ###")?;
    writeln!(w, "Total dead ends: {}", analysis.dead_ends.len())?;
    let mut by_ending: BTreeMap<char, Vec<&str>> = BTreeMap::new();
    for e in &analysis.dead_ends {
        by_ending.entry(e.last_char()).or_default().push(e.name());
    }
    for (c, names) in &by_ending {
        writeln!(w, "  {c}: {} ({})", names.join(", "), names.len())?;
    }

    writeln!(w, "\n### CYCLES ###")?;
    writeln!(w, "Cycles found: {}", analysis.cycles.len())?;
    for cycle in &analysis.cycles {
        writeln!(w, "  {}", cycle.names().join(" -> "))?;
    }

    writeln!(w, "\n### LONGEST CHAIN ###")?;
    match &analysis.global_best_chain {
        None => writeln!(w, "No chain found")?,
        Some(chain) => {
            writeln!(w, "Longest chain found: {}", chain.len())?;
            for (i, e) in chain.iter().take(CHAIN_PREVIEW).enumerate() {
                writeln!(w, "  {}. {} (끝: {})", i + 1, e.name(), e.last_char())?;
            }
            if chain.len() > CHAIN_PREVIEW {
                writeln!(w, "  ... and {} more", chain.len() - CHAIN_PREVIEW)?;
            }
        }
    }

    writeln!(w, "\n### BEST STARTERS ###")?;
    for (i, (e, length)) in analysis
        .best_starters()
        .into_iter()
        .take(STARTER_PREVIEW)
        .enumerate()
    {
        writeln!(w, "  {}. {}: can chain {length}", i + 1, e.name())?;
    }

    writeln!(w, "\n### CONNECTIVITY ###")?;
    writeln!(w, "Most common starting characters:")?;
    for (c, count) in &stats.common_starts {
        writeln!(w, "  {c}: {count}")?;
    }
    writeln!(w, "Most common ending characters:")?;
    for (c, count) in &stats.common_endings {
        writeln!(w, "  {c}: {count}")?;
    }

    writeln!(w, "\n### SELF-CHAINING ###")?;
    writeln!(
        w,
        "Entities that can follow themselves: {}",
        analysis.self_chaining.len()
    )?;
    for e in &analysis.self_chaining {
        writeln!(
            w,
            "  {} ({}...{})",
            e.name(),
            e.first_char(),
            e.last_char()
        )?;
    }

    writeln!(w, "\n{RULE}")?;
    Ok(())
}
